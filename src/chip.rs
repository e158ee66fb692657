// SPDX-License-Identifier: Apache-2.0

//! Low-level access to the ArduChip, the FIFO controller on the SPI bus.
//!
//! The chip speaks a simple framed protocol: every transaction is bracketed by
//! chip select held low, the first byte is a register address with the top bit
//! signalling a write, and a single 0x3C command byte switches the chip into
//! burst mode, streaming FIFO contents for as long as select stays asserted.

use alloc::vec::Vec;
use core::fmt;

use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;
use num_enum::IntoPrimitive;

/// ArduChip register map.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive)]
#[repr(u8)]
pub enum ChipRegister {
    /// Scratch register, echoes whatever was last written. Used for bus
    /// sanity checks.
    Test1 = 0x00,

    /// Capture control register holding the FIFO clear and capture start bits.
    FifoControl = 0x04,

    /// Capture status register; the capture done bit lives here.
    Trigger = 0x41,

    /// Captured image length, low byte.
    FifoSize1 = 0x42,

    /// Captured image length, middle byte.
    FifoSize2 = 0x43,

    /// Captured image length, high byte. Only the low seven bits are valid.
    FifoSize3 = 0x44,
}

/// Register addresses are seven bits; the top bit marks a write on the wire.
const WRITE_FLAG: u8 = 0x80;

pub(crate) const FIFO_CLEAR_MASK: u8 = 0x01;
pub(crate) const FIFO_START_MASK: u8 = 0x02;
pub(crate) const CAPTURE_DONE_MASK: u8 = 0x08;

/// Command byte that switches the chip into FIFO burst read mode.
pub(crate) const BURST_READ_COMMAND: u8 = 0x3C;

/// Failures on the SPI side of the module.
pub enum ChipError<SpiE, PinE> {
    /// The SPI transaction itself failed.
    Spi(SpiE),

    /// The chip select pin could not be driven.
    Pin(PinE),
}

impl<SpiE, PinE> fmt::Debug for ChipError<SpiE, PinE>
where
    SpiE: fmt::Debug,
    PinE: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChipError::Spi(err) => f.debug_tuple("ChipError::Spi").field(err).finish(),
            ChipError::Pin(err) => f.debug_tuple("ChipError::Pin").field(err).finish(),
        }
    }
}

/// The FIFO controller chip on the camera module.
///
/// Owns the SPI peripheral and the chip select pin, and with them the framing
/// of every transaction on this bus. All methods are synchronous and issue
/// exactly the transactions they describe; nothing is retried on failure.
pub struct Arduchip<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS, SpiE, PinE> Arduchip<SPI, CS>
where
    SPI: spi::Transfer<u8, Error = SpiE> + spi::Write<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    /// Take ownership of the bus, leaving chip select deasserted.
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, ChipError<SpiE, PinE>> {
        cs.set_high().map_err(ChipError::Pin)?;
        Ok(Self { spi, cs })
    }

    /// Write a single chip register.
    ///
    /// Emits the two byte frame `[address | 0x80, value]` inside one chip
    /// select window. The chip sends no response.
    pub fn write_register(
        &mut self,
        register: ChipRegister,
        value: u8,
    ) -> Result<(), ChipError<SpiE, PinE>> {
        let frame = [u8::from(register) | WRITE_FLAG, value];
        self.cs.set_low().map_err(ChipError::Pin)?;
        self.spi.write(&frame).map_err(ChipError::Spi)?;
        self.cs.set_high().map_err(ChipError::Pin)?;
        Ok(())
    }

    /// Read a single chip register.
    ///
    /// Writes the one byte address frame (top bit clear), then clocks one
    /// dummy byte to shift the value out.
    pub fn read_register(&mut self, register: ChipRegister) -> Result<u8, ChipError<SpiE, PinE>> {
        self.cs.set_low().map_err(ChipError::Pin)?;
        self.spi
            .write(&[u8::from(register) & !WRITE_FLAG])
            .map_err(ChipError::Spi)?;
        let mut response = [0x00];
        self.spi.transfer(&mut response).map_err(ChipError::Spi)?;
        self.cs.set_high().map_err(ChipError::Pin)?;
        Ok(response[0])
    }

    /// Discard whatever the FIFO currently holds.
    pub fn flush_fifo(&mut self) -> Result<(), ChipError<SpiE, PinE>> {
        self.write_register(ChipRegister::FifoControl, FIFO_CLEAR_MASK)
    }

    /// Arm a single capture into the FIFO.
    pub fn start_capture(&mut self) -> Result<(), ChipError<SpiE, PinE>> {
        self.write_register(ChipRegister::FifoControl, FIFO_START_MASK)
    }

    /// Check whether an armed capture has completed.
    pub fn is_capture_done(&mut self) -> Result<bool, ChipError<SpiE, PinE>> {
        let trigger = self.read_register(ChipRegister::Trigger)?;
        Ok(trigger & CAPTURE_DONE_MASK != 0)
    }

    /// Read the captured image length from the three size registers.
    ///
    /// The value is only meaningful once [`is_capture_done`] has reported
    /// true; reading it earlier returns stale bookkeeping.
    ///
    /// [`is_capture_done`]: Arduchip::is_capture_done
    pub fn fifo_length(&mut self) -> Result<u32, ChipError<SpiE, PinE>> {
        let low = self.read_register(ChipRegister::FifoSize1)? as u32;
        let mid = self.read_register(ChipRegister::FifoSize2)? as u32;
        let high = (self.read_register(ChipRegister::FifoSize3)? & 0x7F) as u32;
        Ok(high << 16 | mid << 8 | low)
    }

    /// Stream `length` bytes out of the FIFO with a burst read.
    ///
    /// Chip select is asserted once for the whole readout and a single burst
    /// command byte is sent; the chip then streams continuously. Each transfer
    /// clocks a full `scratch` worth of bytes off the bus, the final one
    /// included: when fewer bytes remain than the buffer holds, the surplus is
    /// clocked anyway and discarded. Trimming the last transfer down would
    /// change the wire-level clocking the chip's FIFO bookkeeping sees, so the
    /// fixed-size transfers are kept as-is.
    ///
    /// A `length` of zero returns an empty image without touching the bus.
    pub fn read_fifo(
        &mut self,
        length: u32,
        scratch: &mut [u8],
    ) -> Result<Vec<u8>, ChipError<SpiE, PinE>> {
        let mut image = Vec::with_capacity(length as usize);
        if length == 0 {
            return Ok(image);
        }
        debug_assert!(!scratch.is_empty());
        self.cs.set_low().map_err(ChipError::Pin)?;
        self.spi
            .write(&[BURST_READ_COMMAND])
            .map_err(ChipError::Spi)?;
        let mut remaining = length as usize;
        while remaining > 0 {
            for byte in scratch.iter_mut() {
                *byte = 0xFF;
            }
            self.spi.transfer(scratch).map_err(ChipError::Spi)?;
            let keep = remaining.min(scratch.len());
            image.extend_from_slice(&scratch[..keep]);
            remaining -= keep;
        }
        self.cs.set_high().map_err(ChipError::Pin)?;
        Ok(image)
    }
}
