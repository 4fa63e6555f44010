//! Transport contract between the driver and the I2C bus.
//!
//! The driver only ever moves 16-bit registers, so the contract is two
//! word-sized block transfers. Every `embedded-hal` I2C implementation
//! satisfies it through the blanket impls below; implement the traits by
//! hand only for transports that can deliver partial reads.

use embedded_hal::i2c::I2c;

/// Width of every INA3221 register on the wire.
pub const WORD_LEN: usize = 2;

/// Blocking register transport.
pub trait RegisterBus {
    type Error;

    /// Write `bytes` to `register` of the device at `device`, as a single
    /// transaction `[register, bytes[0], bytes[1]]`.
    fn write_word(
        &mut self,
        device: u8,
        register: u8,
        bytes: [u8; WORD_LEN],
    ) -> Result<(), Self::Error>;

    /// Read a register into `buffer`.
    ///
    /// Returns how many bytes were actually delivered. The driver treats
    /// any count other than [`WORD_LEN`] as a protocol error.
    fn read_word(
        &mut self,
        device: u8,
        register: u8,
        buffer: &mut [u8; WORD_LEN],
    ) -> Result<usize, Self::Error>;
}

impl<T> RegisterBus for T
where
    T: I2c,
{
    type Error = T::Error;

    fn write_word(
        &mut self,
        device: u8,
        register: u8,
        bytes: [u8; WORD_LEN],
    ) -> Result<(), Self::Error> {
        self.write(device, &[register, bytes[0], bytes[1]])
    }

    fn read_word(
        &mut self,
        device: u8,
        register: u8,
        buffer: &mut [u8; WORD_LEN],
    ) -> Result<usize, Self::Error> {
        // Set the register pointer, then read back with a repeated start.
        self.write_read(device, &[register], buffer)?;
        Ok(buffer.len())
    }
}

/// Async register transport, mirroring [`RegisterBus`].
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error;

    async fn write_word(
        &mut self,
        device: u8,
        register: u8,
        bytes: [u8; WORD_LEN],
    ) -> Result<(), Self::Error>;

    async fn read_word(
        &mut self,
        device: u8,
        register: u8,
        buffer: &mut [u8; WORD_LEN],
    ) -> Result<usize, Self::Error>;
}

#[cfg(feature = "async")]
impl<T> AsyncRegisterBus for T
where
    T: embedded_hal_async::i2c::I2c,
{
    type Error = T::Error;

    async fn write_word(
        &mut self,
        device: u8,
        register: u8,
        bytes: [u8; WORD_LEN],
    ) -> Result<(), Self::Error> {
        self.write(device, &[register, bytes[0], bytes[1]]).await
    }

    async fn read_word(
        &mut self,
        device: u8,
        register: u8,
        buffer: &mut [u8; WORD_LEN],
    ) -> Result<usize, Self::Error> {
        self.write_read(device, &[register], buffer).await?;
        Ok(buffer.len())
    }
}
