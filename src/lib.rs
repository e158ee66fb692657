// SPDX-License-Identifier: Apache-2.0

//! A driver for ArduCAM Mini camera modules built around the OV2640 JPEG sensor.
//!
//! These modules pair an OmniVision OV2640 image sensor with an "ArduChip" that
//! exposes a capture FIFO over SPI. The sensor is configured over a separate
//! I²C (SCCB) bus, while capture control and image readout happen over SPI. A
//! capture is a four step dance: flush the FIFO, arm the capture trigger, poll
//! until the done flag is raised, then stream the compressed image out of the
//! FIFO with a burst read.
//!
//! This library uses the [`embedded-hal`][embedded-hal] blocking traits for
//! both buses, the chip select pin, and delays, so it should work on any
//! platform with an `embedded-hal` implementation. The crate is `no_std`
//! compatible, but requires `alloc` as captured images are variable length.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/0.2/embedded_hal/
//!
//! # Example
//! ```
//! use arducam_mini::{ArducamMini2mp, Error, Resolution};
//! use embedded_hal::blocking::{delay::DelayMs, i2c, spi};
//! use embedded_hal::digital::v2::OutputPin;
//!
//! fn capture_one<SPI, I2C, CS, D, SpiE, I2cE, PinE>(
//!     spi: SPI,
//!     i2c: I2C,
//!     cs: CS,
//!     delay: D,
//! ) -> Result<Vec<u8>, Error<SpiE, I2cE, PinE>>
//! where
//!     SPI: spi::Transfer<u8, Error = SpiE> + spi::Write<u8, Error = SpiE>,
//!     I2C: i2c::Write<Error = I2cE> + i2c::WriteRead<Error = I2cE>,
//!     CS: OutputPin<Error = PinE>,
//!     D: DelayMs<u32>,
//! {
//!     let mut camera = ArducamMini2mp::new(spi, i2c, cs, delay)?;
//!     camera.init(Resolution::Vga)?;
//!     // Blocks until the capture completes, for at most two seconds.
//!     camera.single_capture(2_000, true)
//! }
//! ```
//!
//! The driver owns its buses, chip select pin, delay provider, and a
//! fixed-capacity transfer buffer for the driver's whole lifetime; nothing is
//! allocated per capture besides the returned image. Exactly one capture may
//! be in flight per driver instance, and callers on multiple threads must
//! serialize access themselves.

#![no_std]

extern crate alloc;

pub mod chip;
pub mod driver;
pub mod error;
pub mod ov2640;
pub mod sccb;
#[cfg(test)]
mod test;

pub use chip::{Arduchip, ChipRegister};
pub use driver::{Arducam, DEFAULT_SCRATCH_CAPACITY};
pub use error::Error;
pub use ov2640::Resolution;
pub use sccb::Sccb;

/// An [`Arducam`] with the transfer buffer size used by the stock modules.
pub type ArducamMini2mp<SPI, I2C, CS, D> = Arducam<SPI, I2C, CS, D, DEFAULT_SCRATCH_CAPACITY>;
