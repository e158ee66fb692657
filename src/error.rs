// SPDX-License-Identifier: Apache-2.0
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use crate::chip::ChipError;

/// Errors raised while driving the camera module.
///
/// Bus faults keep their origin so the caller can tell which peripheral
/// failed. A timed out capture is its own variant, never a bus fault, and
/// never carries partial image data. Nothing here is retried internally.
pub enum Error<SpiE, I2cE, PinE> {
    /// A transaction on the SPI register/data bus failed.
    Spi(SpiE),

    /// A transaction on the I²C sensor configuration bus failed.
    I2c(I2cE),

    /// The chip select pin could not be driven.
    Pin(PinE),

    /// The capture done flag was not observed within the allotted time.
    ///
    /// The FIFO is left as-is; no length query or readout was attempted.
    Timeout,

    /// The driver was constructed with a zero-capacity transfer buffer.
    ZeroLengthBuffer,
}

// Custom Debug implementation so that only the HAL *error* types need to
// implement Debug, not the peripherals themselves.
impl<SpiE, I2cE, PinE> fmt::Debug for Error<SpiE, I2cE, PinE>
where
    SpiE: fmt::Debug,
    I2cE: fmt::Debug,
    PinE: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(err) => f.debug_tuple("Error::Spi").field(err).finish(),
            Error::I2c(err) => f.debug_tuple("Error::I2c").field(err).finish(),
            Error::Pin(err) => f.debug_tuple("Error::Pin").field(err).finish(),
            Error::Timeout => f.write_str("Error::Timeout"),
            Error::ZeroLengthBuffer => f.write_str("Error::ZeroLengthBuffer"),
        }
    }
}

impl<SpiE, I2cE, PinE> fmt::Display for Error<SpiE, I2cE, PinE>
where
    SpiE: fmt::Debug,
    I2cE: fmt::Debug,
    PinE: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(err) => write!(f, "SPI error: {:?}", err),
            Error::I2c(err) => write!(f, "I2C error: {:?}", err),
            Error::Pin(err) => write!(f, "Chip select error: {:?}", err),
            Error::Timeout => write!(f, "Capture did not complete in time"),
            Error::ZeroLengthBuffer => write!(f, "Transfer buffer capacity must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl<SpiE, I2cE, PinE> std::error::Error for Error<SpiE, I2cE, PinE>
where
    SpiE: std::error::Error + 'static,
    I2cE: std::error::Error + 'static,
    PinE: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spi(err) => Some(err),
            Error::I2c(err) => Some(err),
            Error::Pin(err) => Some(err),
            Error::Timeout | Error::ZeroLengthBuffer => None,
        }
    }
}

impl<SpiE, I2cE, PinE> From<ChipError<SpiE, PinE>> for Error<SpiE, I2cE, PinE> {
    fn from(err: ChipError<SpiE, PinE>) -> Self {
        match err {
            ChipError::Spi(err) => Error::Spi(err),
            ChipError::Pin(err) => Error::Pin(err),
        }
    }
}
