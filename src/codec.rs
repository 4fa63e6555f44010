//! Low-level register codec.
//!
//! Moves 16-bit registers over a [`RegisterBus`], most-significant byte
//! first, and reports each transfer to the attached observer.
//! [`AsyncRegisterCodec`] does the same over an [`AsyncRegisterBus`] and
//! shares the framing checks and trace points with the blocking codec.
//!
//! This module is crate-private. Consumers interact with [`Ina3221`]
//! in `ina3221.rs` instead.
//!
//! [`Ina3221`]: crate::Ina3221

#[cfg(feature = "async")]
use crate::bus::AsyncRegisterBus;
use crate::bus::{RegisterBus, WORD_LEN};
use crate::error::Error;
use crate::trace::{Observer, TraceEvent};

/// Owns the bus and the observer and provides register read/write
/// primitives for one device address.
pub(crate) struct RegisterCodec<BUS, O> {
    bus: BUS,
    address: u8,
    observer: O,
    tracing: bool,
}

impl<BUS, O> RegisterCodec<BUS, O>
where
    O: Observer,
{
    pub fn new(bus: BUS, address: u8, observer: O, tracing: bool) -> Self {
        Self {
            bus,
            address,
            observer,
            tracing,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    pub fn tracing(&self) -> bool {
        self.tracing
    }

    pub fn release(self) -> BUS {
        self.bus
    }

    /// Hand `event` to the observer if tracing is on.
    pub fn trace(&mut self, event: TraceEvent) {
        if self.tracing {
            self.observer.on_event(&event);
        }
    }

    /// Check the framing of a completed read and decode it.
    ///
    /// A register is exactly [`WORD_LEN`] bytes; a transport that reports
    /// any other count has broken the framing, whatever landed in `buf`.
    fn decode<E>(
        &mut self,
        register: u8,
        received: usize,
        buf: [u8; WORD_LEN],
    ) -> Result<i16, Error<E>> {
        if received != WORD_LEN {
            return Err(Error::ShortRead {
                expected: WORD_LEN,
                received,
            });
        }

        self.trace(TraceEvent::RegisterRead { register, bytes: buf });
        Ok(i16::from_be_bytes(buf))
    }
}

impl<BUS, O> RegisterCodec<BUS, O>
where
    BUS: RegisterBus,
    O: Observer,
{
    /// Write a 16-bit value to `register`.
    pub fn write_register(&mut self, register: u8, value: u16) -> Result<(), Error<BUS::Error>> {
        self.bus.write_word(self.address, register, value.to_be_bytes())?;
        self.trace(TraceEvent::RegisterWritten { register, value });
        Ok(())
    }

    /// Read `register` as a signed 16-bit value.
    pub fn read_register(&mut self, register: u8) -> Result<i16, Error<BUS::Error>> {
        let mut buf = [0u8; WORD_LEN];
        let received = self.bus.read_word(self.address, register, &mut buf)?;
        self.decode(register, received, buf)
    }

    /// Read `register` as an unsigned 16-bit value.
    pub fn read_register_u16(&mut self, register: u8) -> Result<u16, Error<BUS::Error>> {
        self.read_register(register).map(|value| value as u16)
    }
}

/// Async counterpart of [`RegisterCodec`].
#[cfg(feature = "async")]
pub(crate) struct AsyncRegisterCodec<BUS, O>(RegisterCodec<BUS, O>);

#[cfg(feature = "async")]
impl<BUS, O> AsyncRegisterCodec<BUS, O>
where
    BUS: AsyncRegisterBus,
    O: Observer,
{
    pub fn new(bus: BUS, address: u8, observer: O, tracing: bool) -> Self {
        Self(RegisterCodec::new(bus, address, observer, tracing))
    }

    pub fn address(&self) -> u8 {
        self.0.address()
    }

    pub fn set_tracing(&mut self, enabled: bool) {
        self.0.set_tracing(enabled);
    }

    pub fn tracing(&self) -> bool {
        self.0.tracing()
    }

    pub fn release(self) -> BUS {
        self.0.release()
    }

    pub fn trace(&mut self, event: TraceEvent) {
        self.0.trace(event);
    }

    pub async fn write_register(
        &mut self,
        register: u8,
        value: u16,
    ) -> Result<(), Error<BUS::Error>> {
        let codec = &mut self.0;
        codec
            .bus
            .write_word(codec.address, register, value.to_be_bytes())
            .await?;
        codec.trace(TraceEvent::RegisterWritten { register, value });
        Ok(())
    }

    pub async fn read_register(&mut self, register: u8) -> Result<i16, Error<BUS::Error>> {
        let codec = &mut self.0;
        let mut buf = [0u8; WORD_LEN];
        let received = codec.bus.read_word(codec.address, register, &mut buf).await?;
        codec.decode(register, received, buf)
    }

    pub async fn read_register_u16(&mut self, register: u8) -> Result<u16, Error<BUS::Error>> {
        self.read_register(register).await.map(|value| value as u16)
    }
}
