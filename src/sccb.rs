// SPDX-License-Identifier: Apache-2.0

//! The sensor configuration bus.
//!
//! OmniVision sensors are configured over SCCB, which is close enough to I²C
//! that the `embedded-hal` blocking I²C traits cover it. Writes are fire and
//! forget: the sensor never acknowledges a setting beyond the bus-level ACK,
//! and this driver does not read values back to verify them.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

/// Pause after every register write while the sensor latches the new value.
pub const SETTLE_DELAY_MS: u32 = 2;

/// Marker pair terminating a configuration profile. Never written to the bus.
pub const PROFILE_SENTINEL: (u8, u8) = (0xFF, 0xFF);

/// The configuration bus to the image sensor.
pub struct Sccb<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Sccb<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    /// Take ownership of the bus to the sensor at `address`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Write one 8-bit sensor register.
    ///
    /// The settle delay is honored whether or not the transaction succeeded;
    /// the sensor needs the quiet time either way before the next command.
    pub fn write_register<D>(&mut self, delay: &mut D, register: u8, value: u8) -> Result<(), E>
    where
        D: DelayMs<u32>,
    {
        let result = self.i2c.write(self.address, &[register, value]);
        delay.delay_ms(SETTLE_DELAY_MS);
        result
    }

    /// Read one 8-bit sensor register.
    ///
    /// The address and data phases share one bus claim (repeated start); the
    /// sensor rejects reads where the bus is released in between.
    pub fn read_register(&mut self, register: u8) -> Result<u8, E> {
        let mut value = [0x00];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }

    /// Apply an ordered register profile, stopping at the sentinel pair.
    ///
    /// The sentinel itself is never written, nor is anything after it.
    pub fn apply_profile<D>(&mut self, delay: &mut D, profile: &[(u8, u8)]) -> Result<(), E>
    where
        D: DelayMs<u32>,
    {
        for &(register, value) in profile {
            if (register, value) == PROFILE_SENTINEL {
                break;
            }
            self.write_register(delay, register, value)?;
        }
        Ok(())
    }
}
