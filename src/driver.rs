// SPDX-License-Identifier: Apache-2.0

//! The high-level camera driver: sensor setup and single-shot captures.

use alloc::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;

use crate::chip::{Arduchip, ChipRegister};
use crate::error::Error;
use crate::ov2640::{self, profiles, Resolution};
use crate::sccb::Sccb;

/// Transfer buffer capacity used by [`ArducamMini2mp`][crate::ArducamMini2mp].
pub const DEFAULT_SCRATCH_CAPACITY: usize = 8192;

/// Cadence of the capture-done poll loop.
const POLL_INTERVAL_MS: u32 = 1;

/// Value bounced off the chip's test register by [`Arducam::is_connected`].
const TEST_PATTERN: u8 = 0x55;

/// Driver for an ArduCAM Mini module.
///
/// Owns the SPI bus and chip select pin to the ArduChip, the I²C bus to the
/// sensor, a delay provider, and a fixed-capacity transfer buffer that is
/// reused for every capture. The buffer capacity is a construction-time
/// parameter and independent of image size: larger buffers mean fewer, larger
/// SPI transfers per readout.
///
/// All methods block. At most one capture can be in flight per driver, since
/// the buses and the transfer buffer are exclusively owned mutable state;
/// callers sharing a driver across threads must serialize access around whole
/// calls.
pub struct Arducam<SPI, I2C, CS, D, const SCRATCH_CAPACITY: usize> {
    chip: Arduchip<SPI, CS>,
    sccb: Sccb<I2C>,
    delay: D,
    scratch: [u8; SCRATCH_CAPACITY],
}

impl<SPI, I2C, CS, D, SpiE, I2cE, PinE, const SCRATCH_CAPACITY: usize>
    Arducam<SPI, I2C, CS, D, SCRATCH_CAPACITY>
where
    SPI: spi::Transfer<u8, Error = SpiE> + spi::Write<u8, Error = SpiE>,
    I2C: i2c::Write<Error = I2cE> + i2c::WriteRead<Error = I2cE>,
    CS: OutputPin<Error = PinE>,
    D: DelayMs<u32>,
{
    /// Create a driver for a module at the sensor's default bus address.
    ///
    /// Deasserts chip select but performs no other bus traffic; call
    /// [`init`][Arducam::init] before capturing.
    pub fn new(spi: SPI, i2c: I2C, cs: CS, delay: D) -> Result<Self, Error<SpiE, I2cE, PinE>> {
        Self::with_sensor_address(spi, i2c, cs, delay, ov2640::I2C_ADDRESS)
    }

    /// Create a driver for a module whose sensor answers at a non-default
    /// bus address.
    pub fn with_sensor_address(
        spi: SPI,
        i2c: I2C,
        cs: CS,
        delay: D,
        sensor_address: u8,
    ) -> Result<Self, Error<SpiE, I2cE, PinE>> {
        if SCRATCH_CAPACITY == 0 {
            return Err(Error::ZeroLengthBuffer);
        }
        let chip = Arduchip::new(spi, cs)?;
        Ok(Self {
            chip,
            sccb: Sccb::new(i2c, sensor_address),
            delay,
            scratch: [0x00; SCRATCH_CAPACITY],
        })
    }

    /// Initialize the sensor for JPEG capture at the given resolution.
    ///
    /// Issues a soft reset, waits for the sensor to come back up, then applies
    /// the base JPEG pipeline, color format, output mode, and resolution
    /// profiles in that order. One-time setup, not part of the capture path.
    pub fn init(&mut self, resolution: Resolution) -> Result<(), Error<SpiE, I2cE, PinE>> {
        self.sccb
            .write_register(&mut self.delay, ov2640::BANK_SELECT, ov2640::BANK_SENSOR)
            .map_err(Error::I2c)?;
        self.sccb
            .write_register(&mut self.delay, ov2640::COM7, ov2640::COM7_SOFT_RESET)
            .map_err(Error::I2c)?;
        self.delay.delay_ms(ov2640::RESET_DELAY_MS);
        self.sccb
            .apply_profile(&mut self.delay, profiles::JPEG_INIT)
            .map_err(Error::I2c)?;
        self.sccb
            .apply_profile(&mut self.delay, profiles::YUV422)
            .map_err(Error::I2c)?;
        self.sccb
            .apply_profile(&mut self.delay, profiles::JPEG)
            .map_err(Error::I2c)?;
        self.set_resolution(resolution)
    }

    /// Switch the sensor to another of the supported resolutions.
    pub fn set_resolution(
        &mut self,
        resolution: Resolution,
    ) -> Result<(), Error<SpiE, I2cE, PinE>> {
        self.sccb
            .apply_profile(&mut self.delay, resolution.profile())
            .map_err(Error::I2c)
    }

    /// Check that both the chip and the sensor are reachable.
    ///
    /// Bounces a test pattern off the chip's scratch register and reads the
    /// sensor's chip id. This is the only read-back verification the driver
    /// performs; configuration writes are otherwise fire and forget.
    pub fn is_connected(&mut self) -> Result<bool, Error<SpiE, I2cE, PinE>> {
        self.chip.write_register(ChipRegister::Test1, TEST_PATTERN)?;
        let echoed = self.chip.read_register(ChipRegister::Test1)?;
        let chip_id = self.sensor_chip_id()?;
        Ok(echoed == TEST_PATTERN && ov2640::KNOWN_CHIP_IDS.contains(&chip_id))
    }

    /// Read the sensor's chip id as (high byte, low byte).
    pub fn sensor_chip_id(&mut self) -> Result<[u8; 2], Error<SpiE, I2cE, PinE>> {
        self.sccb
            .write_register(&mut self.delay, ov2640::BANK_SELECT, ov2640::BANK_SENSOR)
            .map_err(Error::I2c)?;
        let high = self
            .sccb
            .read_register(ov2640::CHIP_ID_HIGH)
            .map_err(Error::I2c)?;
        let low = self
            .sccb
            .read_register(ov2640::CHIP_ID_LOW)
            .map_err(Error::I2c)?;
        Ok([high, low])
    }

    /// Capture one frame and return its JPEG bytes.
    ///
    /// Flushes the FIFO (unless `flush_first` is false), arms the capture
    /// trigger, then polls the done flag once per millisecond. Once the flag
    /// is seen, the captured length is read and exactly that many bytes are
    /// streamed out of the FIFO.
    ///
    /// If the done flag is not observed after `timeout_ms` of waiting, the
    /// call returns [`Error::Timeout`] without reading the length or any
    /// image data. There is no other way to abort a capture once armed.
    ///
    /// The poll sleep doubles as the loop's yield point: on a cooperative
    /// scheduler, supply a delay implementation that suspends the current
    /// task so other work can run while the sensor exposes.
    pub fn single_capture(
        &mut self,
        timeout_ms: u32,
        flush_first: bool,
    ) -> Result<Vec<u8>, Error<SpiE, I2cE, PinE>> {
        if flush_first {
            self.chip.flush_fifo()?;
        }
        self.chip.start_capture()?;
        let mut waited_ms = 0;
        while !self.chip.is_capture_done()? {
            if waited_ms >= timeout_ms {
                return Err(Error::Timeout);
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
            waited_ms += POLL_INTERVAL_MS;
        }
        let length = self.chip.fifo_length()?;
        Ok(self.chip.read_fifo(length, &mut self.scratch)?)
    }

    /// Discard whatever the FIFO currently holds.
    pub fn flush_fifo(&mut self) -> Result<(), Error<SpiE, I2cE, PinE>> {
        Ok(self.chip.flush_fifo()?)
    }

    /// Arm a single capture without waiting for it.
    pub fn start_capture(&mut self) -> Result<(), Error<SpiE, I2cE, PinE>> {
        Ok(self.chip.start_capture()?)
    }

    /// Check whether an armed capture has completed.
    pub fn is_capture_done(&mut self) -> Result<bool, Error<SpiE, I2cE, PinE>> {
        Ok(self.chip.is_capture_done()?)
    }

    /// Read the captured image length. Only meaningful once
    /// [`is_capture_done`][Arducam::is_capture_done] has reported true.
    pub fn fifo_length(&mut self) -> Result<u32, Error<SpiE, I2cE, PinE>> {
        Ok(self.chip.fifo_length()?)
    }
}
