// SPDX-License-Identifier: Apache-2.0

//! Constants and configuration presets for the OV2640 image sensor.
//!
//! The sensor's register file is split across two banks selected through
//! register 0xFF; the profile tables in [`profiles`] switch banks themselves
//! where needed, so callers only pick a preset and apply it.

pub mod profiles;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The sensor's (7-bit) address on the configuration bus.
pub const I2C_ADDRESS: u8 = 0x30;

/// Bank select register, present in both banks.
pub const BANK_SELECT: u8 = 0xFF;

/// [`BANK_SELECT`] value for the DSP register bank.
pub const BANK_DSP: u8 = 0x00;

/// [`BANK_SELECT`] value for the sensor register bank.
pub const BANK_SENSOR: u8 = 0x01;

/// COM7 register in the sensor bank; bit 7 is the soft reset.
pub const COM7: u8 = 0x12;

/// COM7 value triggering a full sensor soft reset.
pub const COM7_SOFT_RESET: u8 = 0x80;

/// Chip id high byte register (sensor bank).
pub const CHIP_ID_HIGH: u8 = 0x0A;

/// Chip id low byte register (sensor bank).
pub const CHIP_ID_LOW: u8 = 0x0B;

/// Chip id pairs reported by known OV2640 revisions.
pub const KNOWN_CHIP_IDS: [[u8; 2]; 2] = [[0x26, 0x41], [0x26, 0x42]];

/// Time for the sensor to come back up after a soft reset.
pub const RESET_DELAY_MS: u32 = 100;

/// Supported JPEG output resolutions.
///
/// Each value maps to a dedicated register profile; selecting one is a setup
/// time operation, not part of the capture hot path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Resolution {
    /// QVGA, 320×240.
    Qvga = 0,

    /// VGA, 640×480.
    Vga = 1,

    /// UXGA, 1600×1200. The sensor's full frame.
    Uxga = 2,
}

impl Resolution {
    /// The frame dimensions, as (width, height) in pixels.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Resolution::Qvga => (320, 240),
            Resolution::Vga => (640, 480),
            Resolution::Uxga => (1600, 1200),
        }
    }

    /// The register profile configuring this resolution.
    pub fn profile(self) -> &'static [(u8, u8)] {
        match self {
            Resolution::Qvga => profiles::QVGA_320X240_JPEG,
            Resolution::Vga => profiles::VGA_640X480_JPEG,
            Resolution::Uxga => profiles::UXGA_1600X1200_JPEG,
        }
    }
}
