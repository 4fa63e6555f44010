//! Opening a Linux `i2c-dev` bus by number.

use linux_embedded_hal::{I2CError, I2cdev};
use std::format;

use crate::error::Error;
use crate::ina3221::Ina3221;

impl Ina3221<I2cdev> {
    /// Open `/dev/i2c-<bus>` and configure the device at `address` with
    /// the default configuration.
    ///
    /// # Errors
    /// * [`Error::Open`] if the bus device cannot be opened
    /// * [`Error::I2c`] if the configuration write fails
    pub fn open(bus: u8, address: impl Into<u8>) -> Result<Self, Error<I2CError>> {
        let path = format!("/dev/i2c-{}", bus);
        let i2c = I2cdev::new(path).map_err(|e| Error::Open(I2CError::from(e)))?;
        Ina3221::new(i2c, address)
    }
}
