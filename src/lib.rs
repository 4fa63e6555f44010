//! Driver for the TI INA3221 triple-channel shunt and bus voltage monitor.
//!
//! This crate provides a blocking `embedded-hal` 1.0 I2C driver for the
//! INA3221, plus an `embedded-hal-async` variant behind the `async` feature.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`codec`** (crate-private) — 16-bit big-endian register transfers over
//!   a [`RegisterBus`], with trace points for every transfer.
//! - **[`Ina3221`]** (public) — the device handle: configuration lifecycle,
//!   validated per-channel reads and conversion to volts and milliamps.
//!
//! The handle owns its bus. To put several devices on one bus, hand each
//! handle a shared-bus device from `embedded-hal-bus` or
//! `embassy-embedded-hal`; the driver itself does no locking.
//!
//! # Quick start
//!
//! ```no_run
//! # fn example<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), ina3221_driver::Error<I::Error>> {
//! use ina3221_driver::{Ina3221, DEFAULT_ADDRESS};
//!
//! // Writes the default configuration before returning.
//! let mut ina = Ina3221::new(i2c, DEFAULT_ADDRESS)?;
//!
//! for reading in ina.read_all_channels()? {
//!     let _ = (reading.bus_voltage_v, reading.current_ma);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`async`** — [`Ina3221Async`] over `embedded-hal-async` I2C.
//! - **`defmt`** — [`defmt::Format`] implementations on public types and
//!   [`DefmtObserver`], which logs every trace event.
//! - **`linux`** — `Ina3221::open(bus, address)` for `/dev/i2c-N`.

#![no_std]

#[cfg(any(test, feature = "linux"))]
extern crate std;

pub use bus::RegisterBus;
#[cfg(feature = "async")]
pub use bus::AsyncRegisterBus;
pub use config::{AveragingMode, Channel, Config, ConfigWord, ConversionTime, OperatingMode};
pub use error::Error;
pub use ina3221::{ChannelReading, Ina3221, ShuntRegister, DEFAULT_SHUNT_OHMS};
pub use registers::{Address, CHANNEL_COUNT, DEFAULT_ADDRESS};
#[cfg(feature = "defmt")]
pub use trace::DefmtObserver;
pub use trace::{NoopObserver, Observer, TraceEvent};

#[cfg(feature = "async")]
pub use asynch::Ina3221Async;

#[cfg(feature = "async")]
mod asynch;
pub mod bus;
mod codec;
mod config;
pub mod conversion;
mod error;
mod ina3221;
#[cfg(feature = "linux")]
mod linux;
pub mod registers;
mod trace;
