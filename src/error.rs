//! Error types for the INA3221 driver.

use core::fmt;

/// Errors that can occur when talking to an INA3221.
///
/// Generic over the bus error type `E` so HAL-specific failures are
/// preserved for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus could not be opened or claimed.
    Open(E),

    /// Underlying I2C bus error during a read or write.
    I2c(E),

    /// The bus reported a byte count other than the register width.
    ShortRead { expected: usize, received: usize },

    /// The identification registers did not hold the INA3221 values.
    InvalidDevice { manufacturer_id: u16, die_id: u16 },

    /// Channel number out of valid range (must be 1-3).
    InvalidChannel(u8),

    /// Shunt resistance must be finite and greater than zero.
    InvalidShuntResistor,
}

// Allow ergonomic `?` propagation from raw bus errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open(e) => write!(f, "failed to open bus: {:?}", e),
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::ShortRead { expected, received } => {
                write!(f, "bad read length: expected {} bytes, got {}", expected, received)
            }
            Error::InvalidDevice {
                manufacturer_id,
                die_id,
            } => write!(
                f,
                "not an INA3221 (manufacturer {:#06x}, die {:#06x})",
                manufacturer_id, die_id
            ),
            Error::InvalidChannel(ch) => write!(f, "invalid channel {} (must be 1-3)", ch),
            Error::InvalidShuntResistor => write!(f, "shunt resistance must be positive"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Open(e) => defmt::write!(f, "Open error: {}", e),
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::ShortRead { expected, received } => {
                defmt::write!(f, "Bad read length: expected {}, got {}", expected, received)
            }
            Error::InvalidDevice {
                manufacturer_id,
                die_id,
            } => defmt::write!(
                f,
                "Invalid device: {=u16:#x} / {=u16:#x}",
                *manufacturer_id,
                *die_id
            ),
            Error::InvalidChannel(ch) => defmt::write!(f, "Invalid channel {}", ch),
            Error::InvalidShuntResistor => defmt::write!(f, "Invalid shunt resistor"),
        }
    }
}
