//! Async variant of the driver for `embedded-hal-async` buses.
//!
//! [`Ina3221Async`] has the same semantics as [`Ina3221`](crate::Ina3221):
//! each operation is a single bus transaction awaited to completion, with
//! no retries. Useful on Embassy where the I2C peripheral is async.

use crate::bus::AsyncRegisterBus;
use crate::codec::AsyncRegisterCodec;
use crate::config::{Channel, Config, ConfigWord};
use crate::conversion::{bus_voltage_raw, bus_voltage_volts, current_milliamps, is_valid_shunt};
use crate::error::Error;
use crate::ina3221::{check_identity, reset_word, ChannelReading, ShuntRegister, DEFAULT_SHUNT_OHMS};
use crate::registers::{
    bus_voltage_register, CHANNEL_COUNT, CONFIG, DIE_ID, MANUFACTURER_ID, MASK_ENABLE,
    MASK_ENABLE_CVRF,
};
use crate::trace::{NoopObserver, Observer, TraceEvent};

/// Async driver handle for one INA3221.
///
/// ```no_run
/// # async fn example<I>(i2c: I) -> Result<(), ina3221_driver::Error<I::Error>>
/// # where I: embedded_hal_async::i2c::I2c {
/// use ina3221_driver::{Address, Ina3221Async};
///
/// let mut ina = Ina3221Async::new(i2c, Address::Gnd).await?;
/// let reading = ina.read_channel(3).await?;
/// # let _ = reading;
/// # Ok(())
/// # }
/// ```
pub struct Ina3221Async<BUS, O = NoopObserver> {
    codec: AsyncRegisterCodec<BUS, O>,
    shunt_ohms: f32,
    shunt_register: ShuntRegister,
}

impl<BUS> Ina3221Async<BUS, NoopObserver>
where
    BUS: AsyncRegisterBus,
{
    /// Create a driver and write the default configuration.
    pub async fn new(bus: BUS, address: impl Into<u8>) -> Result<Self, Error<BUS::Error>> {
        Ina3221Async::with_observer(bus, address, Config::default(), NoopObserver).await
    }

    /// Create a driver and write `config`.
    pub async fn with_config(
        bus: BUS,
        address: impl Into<u8>,
        config: Config,
    ) -> Result<Self, Error<BUS::Error>> {
        Ina3221Async::with_observer(bus, address, config, NoopObserver).await
    }
}

impl<BUS, O> Ina3221Async<BUS, O>
where
    BUS: AsyncRegisterBus,
    O: Observer,
{
    /// Tracing starts enabled so the configuration write is observed.
    pub async fn with_observer(
        bus: BUS,
        address: impl Into<u8>,
        config: Config,
        observer: O,
    ) -> Result<Self, Error<BUS::Error>> {
        let mut this = Self {
            codec: AsyncRegisterCodec::new(bus, address.into(), observer, true),
            shunt_ohms: DEFAULT_SHUNT_OHMS,
            shunt_register: ShuntRegister::default(),
        };
        this.set_config(config).await?;
        Ok(this)
    }

    pub fn address(&self) -> u8 {
        self.codec.address()
    }

    pub fn enable_tracing(&mut self, enabled: bool) {
        self.codec.set_tracing(enabled);
    }

    pub fn is_tracing(&self) -> bool {
        self.codec.tracing()
    }

    pub fn shunt_resistor(&self) -> f32 {
        self.shunt_ohms
    }

    pub fn set_shunt_resistor(&mut self, ohms: f32) -> Result<(), Error<BUS::Error>> {
        if !is_valid_shunt(ohms) {
            return Err(Error::InvalidShuntResistor);
        }
        self.shunt_ohms = ohms;
        Ok(())
    }

    pub fn shunt_register(&self) -> ShuntRegister {
        self.shunt_register
    }

    pub fn set_shunt_register(&mut self, shunt_register: ShuntRegister) {
        self.shunt_register = shunt_register;
    }

    pub fn release(self) -> BUS {
        self.codec.release()
    }

    // -----------------------------------------------------------------------
    // Register access
    // -----------------------------------------------------------------------

    pub async fn write_register(
        &mut self,
        register: u8,
        value: u16,
    ) -> Result<(), Error<BUS::Error>> {
        self.codec.write_register(register, value).await
    }

    pub async fn read_register(&mut self, register: u8) -> Result<i16, Error<BUS::Error>> {
        self.codec.read_register(register).await
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub async fn set_config(&mut self, config: Config) -> Result<(), Error<BUS::Error>> {
        let word = config.word().bits();
        self.codec.write_register(CONFIG, word).await?;
        let address = self.codec.address();
        self.codec.trace(TraceEvent::Configured { address, word });
        Ok(())
    }

    pub async fn config(&mut self) -> Result<Config, Error<BUS::Error>> {
        let bits = self.codec.read_register_u16(CONFIG).await?;
        Ok(Config::from_word(ConfigWord::from_bits(bits)))
    }

    /// Reset all registers to their power-on values. See
    /// [`Ina3221::reset`](crate::Ina3221::reset).
    pub async fn reset(&mut self) -> Result<(), Error<BUS::Error>> {
        self.codec.write_register(CONFIG, reset_word()).await
    }

    pub async fn is_conversion_ready(&mut self) -> Result<bool, Error<BUS::Error>> {
        let flags = self.codec.read_register_u16(MASK_ENABLE).await?;
        Ok(flags & MASK_ENABLE_CVRF != 0)
    }

    // -----------------------------------------------------------------------
    // Identification
    // -----------------------------------------------------------------------

    pub async fn manufacturer_id(&mut self) -> Result<u16, Error<BUS::Error>> {
        self.codec.read_register_u16(MANUFACTURER_ID).await
    }

    pub async fn die_id(&mut self) -> Result<u16, Error<BUS::Error>> {
        self.codec.read_register_u16(DIE_ID).await
    }

    pub async fn verify_device(&mut self) -> Result<(), Error<BUS::Error>> {
        let manufacturer_id = self.manufacturer_id().await?;
        let die_id = self.die_id().await?;
        check_identity(manufacturer_id, die_id)
    }

    // -----------------------------------------------------------------------
    // Measurements
    // -----------------------------------------------------------------------

    pub async fn bus_voltage_raw(&mut self, channel: u8) -> Result<i32, Error<BUS::Error>> {
        let Some(ch) = Channel::from_number(channel) else {
            return Err(Error::InvalidChannel(channel));
        };
        let register = self.codec.read_register(bus_voltage_register(ch)).await?;
        let raw = bus_voltage_raw(register);
        self.codec.trace(TraceEvent::BusVoltageRaw { channel, register, raw });
        Ok(raw)
    }

    pub async fn shunt_voltage_raw(&mut self, channel: u8) -> Result<i16, Error<BUS::Error>> {
        let Some(ch) = Channel::from_number(channel) else {
            return Err(Error::InvalidChannel(channel));
        };
        let raw = self.codec.read_register(self.shunt_register.register(ch)).await?;
        self.codec.trace(TraceEvent::ShuntVoltageRaw { channel, raw });
        Ok(raw)
    }

    pub async fn bus_voltage_v(&mut self, channel: u8) -> Result<f32, Error<BUS::Error>> {
        self.bus_voltage_raw(channel).await.map(bus_voltage_volts)
    }

    pub async fn current_ma(&mut self, channel: u8) -> Result<f32, Error<BUS::Error>> {
        let shunt = self.shunt_voltage_raw(channel).await?;
        Ok(current_milliamps(shunt, self.shunt_ohms))
    }

    pub async fn read_channel(&mut self, channel: u8) -> Result<ChannelReading, Error<BUS::Error>> {
        let bus_voltage_raw = self.bus_voltage_raw(channel).await?;
        let shunt_voltage_raw = self.shunt_voltage_raw(channel).await?;
        Ok(ChannelReading::from_raw(
            channel,
            bus_voltage_raw,
            shunt_voltage_raw,
            self.shunt_ohms,
        ))
    }

    pub async fn read_all_channels(
        &mut self,
    ) -> Result<[ChannelReading; CHANNEL_COUNT], Error<BUS::Error>> {
        let mut readings = [ChannelReading::default(); CHANNEL_COUNT];
        for ch in Channel::ALL {
            readings[ch.offset() as usize] = self.read_channel(ch.number()).await?;
        }
        Ok(readings)
    }
}
