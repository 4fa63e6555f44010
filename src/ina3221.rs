//! High-level interface for the INA3221.
//!
//! [`Ina3221`] wraps the register codec with channel validation, the
//! configuration lifecycle and the conversions to physical units.

use crate::bus::RegisterBus;
use crate::codec::RegisterCodec;
use crate::config::{Channel, Config, ConfigWord};
use crate::conversion::{bus_voltage_raw, bus_voltage_volts, current_milliamps, is_valid_shunt};
use crate::error::Error;
use crate::registers::{
    bus_voltage_register, shunt_voltage_register, CHANNEL_COUNT, CONFIG, DIE_ID, EXPECTED_DIE_ID,
    EXPECTED_MANUFACTURER_ID, MANUFACTURER_ID, MASK_ENABLE, MASK_ENABLE_CVRF,
};
use crate::trace::{NoopObserver, Observer, TraceEvent};

/// Default shunt resistance fitted on common INA3221 breakout boards.
pub const DEFAULT_SHUNT_OHMS: f32 = 0.1;

/// Which register bank shunt voltage reads come from.
///
/// Older drivers for this part read shunt voltage from the channel's *bus*
/// voltage register. This driver reads the dedicated shunt register by
/// default; select [`ShuntRegister::BusAlias`] when readings must match
/// those drivers bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShuntRegister {
    /// `SHUNT_VOLTAGE_1 + (channel - 1) * 2`
    #[default]
    Dedicated,
    /// `BUS_VOLTAGE_1 + (channel - 1) * 2`, as older drivers did.
    BusAlias,
}

impl ShuntRegister {
    /// Register holding the shunt sample of `channel` under this choice.
    pub(crate) const fn register(self, channel: Channel) -> u8 {
        match self {
            ShuntRegister::Dedicated => shunt_voltage_register(channel),
            ShuntRegister::BusAlias => bus_voltage_register(channel),
        }
    }
}

/// All derived values for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelReading {
    pub channel: u8,
    /// Bus voltage in millivolt counts (see [`Ina3221::bus_voltage_raw`]).
    pub bus_voltage_raw: i32,
    pub bus_voltage_v: f32,
    pub shunt_voltage_raw: i16,
    pub current_ma: f32,
}

impl ChannelReading {
    pub(crate) fn from_raw(
        channel: u8,
        bus_voltage_raw: i32,
        shunt_voltage_raw: i16,
        shunt_ohms: f32,
    ) -> Self {
        Self {
            channel,
            bus_voltage_raw,
            bus_voltage_v: bus_voltage_volts(bus_voltage_raw),
            shunt_voltage_raw,
            current_ma: current_milliamps(shunt_voltage_raw, shunt_ohms),
        }
    }
}

/// Compare identification registers against the INA3221 values.
pub(crate) fn check_identity<E>(manufacturer_id: u16, die_id: u16) -> Result<(), Error<E>> {
    if manufacturer_id != EXPECTED_MANUFACTURER_ID || die_id != EXPECTED_DIE_ID {
        return Err(Error::InvalidDevice {
            manufacturer_id,
            die_id,
        });
    }
    Ok(())
}

/// Configuration word that requests a power-on reset and nothing else.
pub(crate) fn reset_word() -> u16 {
    Config::empty().reset(true).word().bits()
}

/// Driver handle for one INA3221.
///
/// Owns the bus exclusively. Every constructor writes the configuration
/// register before returning, so measurements are never taken from an
/// unconfigured device.
///
/// # Example
///
/// ```no_run
/// # fn example<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), ina3221_driver::Error<I::Error>> {
/// use ina3221_driver::{Address, Ina3221};
///
/// // A0 strapped to VS
/// let mut ina = Ina3221::new(i2c, Address::Vs)?;
/// let volts = ina.bus_voltage_v(1)?;
/// let milliamps = ina.current_ma(1)?;
/// # Ok(())
/// # }
/// ```
pub struct Ina3221<BUS, O = NoopObserver> {
    codec: RegisterCodec<BUS, O>,
    shunt_ohms: f32,
    shunt_register: ShuntRegister,
}

impl<BUS> Ina3221<BUS, NoopObserver>
where
    BUS: RegisterBus,
{
    /// Create a driver and write the default configuration.
    ///
    /// # Arguments
    /// * `bus` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address, either a raw `u8` or an
    ///   [`Address`](crate::Address) strap (typically 0x40)
    ///
    /// # Errors
    /// * [`Error::I2c`] if the configuration write fails
    pub fn new(bus: BUS, address: impl Into<u8>) -> Result<Self, Error<BUS::Error>> {
        Self::with_config(bus, address, Config::default())
    }

    /// Create a driver and write `config`.
    pub fn with_config(
        bus: BUS,
        address: impl Into<u8>,
        config: Config,
    ) -> Result<Self, Error<BUS::Error>> {
        Ina3221::with_observer(bus, address, config, NoopObserver)
    }
}

impl<BUS, O> Ina3221<BUS, O>
where
    BUS: RegisterBus,
    O: Observer,
{
    /// Create a driver that reports its bus traffic to `observer`, then
    /// write `config`.
    ///
    /// Tracing starts enabled so the configuration write is observed.
    pub fn with_observer(
        bus: BUS,
        address: impl Into<u8>,
        config: Config,
        observer: O,
    ) -> Result<Self, Error<BUS::Error>> {
        let mut this = Self {
            codec: RegisterCodec::new(bus, address.into(), observer, true),
            shunt_ohms: DEFAULT_SHUNT_OHMS,
            shunt_register: ShuntRegister::default(),
        };
        this.set_config(config)?;
        Ok(this)
    }

    // -----------------------------------------------------------------------
    // Handle settings
    // -----------------------------------------------------------------------

    pub fn address(&self) -> u8 {
        self.codec.address()
    }

    /// Turn delivery of trace events to the observer on or off.
    pub fn enable_tracing(&mut self, enabled: bool) {
        self.codec.set_tracing(enabled);
    }

    pub fn is_tracing(&self) -> bool {
        self.codec.tracing()
    }

    pub fn shunt_resistor(&self) -> f32 {
        self.shunt_ohms
    }

    /// Set the shunt resistance used by [`current_ma`](Self::current_ma).
    ///
    /// # Errors
    /// * [`Error::InvalidShuntResistor`] unless `ohms` is finite and positive
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

    /// Give the bus back, consuming the driver.
    pub fn release(self) -> BUS {
        self.codec.release()
    }

    // -----------------------------------------------------------------------
    // Register access
    // -----------------------------------------------------------------------

    /// Write a 16-bit value to `register`, most-significant byte first.
    ///
    /// # Errors
    /// * [`Error::I2c`] on communication failure
    pub fn write_register(&mut self, register: u8, value: u16) -> Result<(), Error<BUS::Error>> {
        self.codec.write_register(register, value)
    }

    /// Read `register` as a big-endian signed 16-bit value.
    ///
    /// # Errors
    /// * [`Error::I2c`] on communication failure
    /// * [`Error::ShortRead`] if the bus reports other than 2 bytes
    pub fn read_register(&mut self, register: u8) -> Result<i16, Error<BUS::Error>> {
        self.codec.read_register(register)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Write `config` to the configuration register.
    pub fn set_config(&mut self, config: Config) -> Result<(), Error<BUS::Error>> {
        let word = config.word().bits();
        self.codec.write_register(CONFIG, word)?;
        let address = self.codec.address();
        self.codec.trace(TraceEvent::Configured { address, word });
        Ok(())
    }

    /// Read back and decode the configuration register.
    pub fn config(&mut self) -> Result<Config, Error<BUS::Error>> {
        let bits = self.codec.read_register_u16(CONFIG)?;
        Ok(Config::from_word(ConfigWord::from_bits(bits)))
    }

    /// Reset all registers to their power-on values.
    ///
    /// The device comes back with its own defaults, not the driver's; call
    /// [`set_config`](Self::set_config) afterwards to reconfigure.
    pub fn reset(&mut self) -> Result<(), Error<BUS::Error>> {
        self.codec.write_register(CONFIG, reset_word())
    }

    /// Whether a conversion has completed since the Mask/Enable register
    /// was last read. Reading it clears the flag.
    pub fn is_conversion_ready(&mut self) -> Result<bool, Error<BUS::Error>> {
        let flags = self.codec.read_register_u16(MASK_ENABLE)?;
        Ok(flags & MASK_ENABLE_CVRF != 0)
    }

    // -----------------------------------------------------------------------
    // Identification
    // -----------------------------------------------------------------------

    pub fn manufacturer_id(&mut self) -> Result<u16, Error<BUS::Error>> {
        self.codec.read_register_u16(MANUFACTURER_ID)
    }

    pub fn die_id(&mut self) -> Result<u16, Error<BUS::Error>> {
        self.codec.read_register_u16(DIE_ID)
    }

    /// Check that the device answers with the INA3221 identification.
    ///
    /// # Errors
    /// * [`Error::InvalidDevice`] if either ID differs
    pub fn verify_device(&mut self) -> Result<(), Error<BUS::Error>> {
        let manufacturer_id = self.manufacturer_id()?;
        let die_id = self.die_id()?;
        check_identity(manufacturer_id, die_id)
    }

    // -----------------------------------------------------------------------
    // Measurements
    // -----------------------------------------------------------------------

    /// Read the bus voltage of `channel` in millivolt counts.
    ///
    /// The three status bits are dropped and the remaining count is
    /// weighted at 4 mV.
    ///
    /// # Arguments
    /// * `channel` — Channel number (1–3)
    ///
    /// # Errors
    /// * [`Error::InvalidChannel`] if `channel` is not 1, 2 or 3
    /// * [`Error::I2c`] on communication failure
    /// * [`Error::ShortRead`] if the bus reports other than 2 bytes
    pub fn bus_voltage_raw(&mut self, channel: u8) -> Result<i32, Error<BUS::Error>> {
        let Some(ch) = Channel::from_number(channel) else {
            return Err(Error::InvalidChannel(channel));
        };
        let register = self.codec.read_register(bus_voltage_register(ch))?;
        let raw = bus_voltage_raw(register);
        self.codec.trace(TraceEvent::BusVoltageRaw { channel, register, raw });
        Ok(raw)
    }

    /// Read the raw shunt voltage of `channel`.
    ///
    /// The register is chosen by [`ShuntRegister`].
    pub fn shunt_voltage_raw(&mut self, channel: u8) -> Result<i16, Error<BUS::Error>> {
        let Some(ch) = Channel::from_number(channel) else {
            return Err(Error::InvalidChannel(channel));
        };
        let raw = self.codec.read_register(self.shunt_register.register(ch))?;
        self.codec.trace(TraceEvent::ShuntVoltageRaw { channel, raw });
        Ok(raw)
    }

    /// Bus voltage of `channel` in volts.
    pub fn bus_voltage_v(&mut self, channel: u8) -> Result<f32, Error<BUS::Error>> {
        self.bus_voltage_raw(channel).map(bus_voltage_volts)
    }

    /// Current through the shunt of `channel` in milliamps.
    pub fn current_ma(&mut self, channel: u8) -> Result<f32, Error<BUS::Error>> {
        let shunt = self.shunt_voltage_raw(channel)?;
        Ok(current_milliamps(shunt, self.shunt_ohms))
    }

    /// Read bus and shunt voltage of `channel` and derive everything else.
    pub fn read_channel(&mut self, channel: u8) -> Result<ChannelReading, Error<BUS::Error>> {
        let bus_voltage_raw = self.bus_voltage_raw(channel)?;
        let shunt_voltage_raw = self.shunt_voltage_raw(channel)?;
        Ok(ChannelReading::from_raw(
            channel,
            bus_voltage_raw,
            shunt_voltage_raw,
            self.shunt_ohms,
        ))
    }

    /// Read all three channels in order.
    ///
    /// # Errors
    /// Returns the first error encountered; no partial results are returned.
    pub fn read_all_channels(
        &mut self,
    ) -> Result<[ChannelReading; CHANNEL_COUNT], Error<BUS::Error>> {
        let mut readings = [ChannelReading::default(); CHANNEL_COUNT];
        for ch in Channel::ALL {
            readings[ch.offset() as usize] = self.read_channel(ch.number())?;
        }
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::{FixedCountBus, FIXED_SAMPLE};
    use crate::registers::Address;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;
    use std::vec::Vec;

    const ADDR: u8 = 0x40;

    fn init() -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![0x00, 0x73, 0xFF])
    }

    fn read(register: u8, value: i16) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![register], value.to_be_bytes().to_vec())
    }

    #[test]
    fn new_writes_default_config() {
        let ina = Ina3221::new(I2cMock::new(&[init()]), ADDR).unwrap();
        assert_eq!(ina.address(), ADDR);
        assert_eq!(ina.shunt_resistor(), 0.1);
        assert_eq!(ina.shunt_register(), ShuntRegister::Dedicated);
        ina.release().done();
    }

    #[test]
    fn with_config_writes_given_word() {
        let expectations = [I2cTransaction::write(0x41, vec![0x00, 0x75, 0x27])];
        let i2c = I2cMock::new(&expectations);
        let ina = Ina3221::with_config(i2c, Address::Vs, Config::legacy()).unwrap();
        assert_eq!(ina.address(), 0x41);
        ina.release().done();
    }

    #[test]
    fn address_straps_select_the_device() {
        for (strap, address) in [
            (Address::Gnd, 0x40),
            (Address::Vs, 0x41),
            (Address::Sda, 0x42),
            (Address::Scl, 0x43),
        ] {
            let expectations = [I2cTransaction::write(address, vec![0x00, 0x73, 0xFF])];
            let ina = Ina3221::new(I2cMock::new(&expectations), strap).unwrap();
            assert_eq!(ina.address(), address);
            ina.release().done();
        }
    }

    #[test]
    fn failed_config_write_fails_construction() {
        let expectations = [init().with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let result = Ina3221::new(i2c.clone(), ADDR);
        assert!(matches!(result, Err(Error::I2c(ErrorKind::Other))));
        i2c.done();
    }

    #[test]
    fn bus_voltage_addresses_per_channel() {
        let expectations = [
            init(),
            read(0x02, 0x2EE0),
            read(0x04, 0x0008),
            read(0x06, -16),
        ];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert_eq!(ina.bus_voltage_raw(1).unwrap(), (0x2EE0 >> 3) * 4);
        assert_eq!(ina.bus_voltage_raw(2).unwrap(), 4);
        assert_eq!(ina.bus_voltage_raw(3).unwrap(), -8);
        ina.release().done();
    }

    #[test]
    fn invalid_channel_never_touches_the_bus() {
        let mut ina = Ina3221::new(I2cMock::new(&[init()]), ADDR).unwrap();

        assert_eq!(ina.bus_voltage_raw(0), Err(Error::InvalidChannel(0)));
        assert_eq!(ina.bus_voltage_raw(4), Err(Error::InvalidChannel(4)));
        assert_eq!(ina.shunt_voltage_raw(4), Err(Error::InvalidChannel(4)));
        assert_eq!(ina.bus_voltage_v(0), Err(Error::InvalidChannel(0)));
        assert_eq!(ina.current_ma(9), Err(Error::InvalidChannel(9)));
        assert!(matches!(ina.read_channel(0), Err(Error::InvalidChannel(0))));
        ina.release().done();
    }

    #[test]
    fn bus_voltage_in_volts() {
        let expectations = [init(), read(0x04, 0x2EE0)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        let raw = (0x2EE0 >> 3) * 4;
        assert_eq!(ina.bus_voltage_v(2).unwrap(), raw as f32 * 0.001);
        ina.release().done();
    }

    #[test]
    fn shunt_reads_dedicated_register_by_default() {
        let expectations = [init(), read(0x01, 100), read(0x03, -50), read(0x05, 7)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert_eq!(ina.shunt_voltage_raw(1).unwrap(), 100);
        assert_eq!(ina.shunt_voltage_raw(2).unwrap(), -50);
        assert_eq!(ina.shunt_voltage_raw(3).unwrap(), 7);
        ina.release().done();
    }

    #[test]
    fn shunt_bus_alias_matches_legacy_addressing() {
        let expectations = [init(), read(0x02, 100), read(0x06, 3)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();
        ina.set_shunt_register(ShuntRegister::BusAlias);

        assert_eq!(ina.shunt_voltage_raw(1).unwrap(), 100);
        assert_eq!(ina.shunt_voltage_raw(3).unwrap(), 3);
        ina.release().done();
    }

    #[test]
    fn current_through_shunt() {
        let expectations = [init(), read(0x01, 100), read(0x01, 100)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert_eq!(ina.current_ma(1).unwrap(), 1000.0);

        ina.set_shunt_resistor(0.05).unwrap();
        assert_eq!(ina.current_ma(1).unwrap(), 100.0 / 0.05);
        ina.release().done();
    }

    #[test]
    fn shunt_resistor_must_be_positive() {
        let mut ina = Ina3221::new(I2cMock::new(&[init()]), ADDR).unwrap();

        assert_eq!(ina.set_shunt_resistor(0.0), Err(Error::InvalidShuntResistor));
        assert_eq!(ina.set_shunt_resistor(-1.0), Err(Error::InvalidShuntResistor));
        assert_eq!(ina.set_shunt_resistor(f32::NAN), Err(Error::InvalidShuntResistor));
        assert_eq!(ina.shunt_resistor(), 0.1);
        ina.release().done();
    }

    #[test]
    fn read_channel_combines_bus_and_shunt() {
        let expectations = [init(), read(0x04, 0x2EE0), read(0x03, 250)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        let reading = ina.read_channel(2).unwrap();
        assert_eq!(reading.channel, 2);
        assert_eq!(reading.bus_voltage_raw, 6000);
        assert_eq!(reading.bus_voltage_v, 6000.0 * 0.001);
        assert_eq!(reading.shunt_voltage_raw, 250);
        assert_eq!(reading.current_ma, 250.0 / 0.1);
        ina.release().done();
    }

    #[test]
    fn read_all_channels_stops_at_first_error() {
        let expectations = [
            init(),
            read(0x02, 8),
            read(0x01, 1),
            I2cTransaction::write_read(ADDR, vec![0x04], vec![0, 0]).with_error(ErrorKind::Other),
        ];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert!(matches!(ina.read_all_channels(), Err(Error::I2c(ErrorKind::Other))));
        ina.release().done();
    }

    #[test]
    fn read_all_channels_in_order() {
        let expectations = [
            init(),
            read(0x02, 8),
            read(0x01, 1),
            read(0x04, 16),
            read(0x03, 2),
            read(0x06, 24),
            read(0x05, 3),
        ];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        let readings = ina.read_all_channels().unwrap();
        for (i, reading) in readings.iter().enumerate() {
            assert_eq!(reading.channel as usize, i + 1);
            assert_eq!(reading.bus_voltage_raw, 4 * (i as i32 + 1));
            assert_eq!(reading.shunt_voltage_raw, i as i16 + 1);
        }
        ina.release().done();
    }

    #[test]
    fn raw_register_access() {
        let expectations = [
            init(),
            I2cTransaction::write(ADDR, vec![0x07, 0xAB, 0xCD]),
            read(0x07, -21555),
        ];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        ina.write_register(0x07, 0xABCD).unwrap();
        assert_eq!(ina.read_register(0x07).unwrap() as u16, 0xABCD);
        ina.release().done();
    }

    #[test]
    fn config_read_back() {
        let expectations = [init(), read(0x00, 0x7527)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert_eq!(ina.config().unwrap(), Config::legacy());
        ina.release().done();
    }

    #[test]
    fn reset_writes_only_reset_bit() {
        let expectations = [init(), I2cTransaction::write(ADDR, vec![0x00, 0x80, 0x00])];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        ina.reset().unwrap();
        ina.release().done();
    }

    #[test]
    fn conversion_ready_flag() {
        let expectations = [init(), read(0x0F, 0x0002), read(0x0F, 0x0003)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert!(!ina.is_conversion_ready().unwrap());
        assert!(ina.is_conversion_ready().unwrap());
        ina.release().done();
    }

    #[test]
    fn verify_accepts_ina3221() {
        let expectations = [init(), read(0xFE, 0x5449), read(0xFF, 0x3220)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert!(ina.verify_device().is_ok());
        ina.release().done();
    }

    #[test]
    fn verify_rejects_other_parts() {
        let expectations = [init(), read(0xFE, 0x5449), read(0xFF, 0x2260)];
        let mut ina = Ina3221::new(I2cMock::new(&expectations), ADDR).unwrap();

        assert_eq!(
            ina.verify_device(),
            Err(Error::InvalidDevice {
                manufacturer_id: 0x5449,
                die_id: 0x2260
            })
        );
        ina.release().done();
    }

    #[test]
    fn short_read_surfaces_as_protocol_error() {
        let mut ina = Ina3221::new(FixedCountBus { reported: 1 }, ADDR).unwrap();

        assert_eq!(
            ina.bus_voltage_raw(1),
            Err(Error::ShortRead {
                expected: 2,
                received: 1
            })
        );
    }

    #[test]
    fn over_long_read_surfaces_as_protocol_error() {
        let mut ina = Ina3221::new(FixedCountBus { reported: 3 }, ADDR).unwrap();

        assert_eq!(
            ina.read_register(0x02),
            Err(Error::ShortRead {
                expected: 2,
                received: 3
            })
        );
        assert!(matches!(ina.shunt_voltage_raw(1), Err(Error::ShortRead { received: 3, .. })));

        let mut exact = Ina3221::new(FixedCountBus { reported: 2 }, ADDR).unwrap();
        assert_eq!(exact.read_register(0x02).unwrap(), i16::from_be_bytes(FIXED_SAMPLE));
    }

    #[test]
    fn observer_receives_trace_points() {
        let mut events = Vec::new();
        {
            let expectations = [init(), read(0x02, 0x0010)];
            let observer = |event: &TraceEvent| events.push(*event);
            let i2c = I2cMock::new(&expectations);
            let mut ina = Ina3221::with_observer(i2c, ADDR, Config::default(), observer).unwrap();
            ina.bus_voltage_raw(1).unwrap();

            ina.enable_tracing(false);
            assert!(!ina.is_tracing());
            ina.release().done();
        }

        assert_eq!(
            events,
            vec![
                TraceEvent::RegisterWritten {
                    register: 0x00,
                    value: 0x73FF
                },
                TraceEvent::Configured {
                    address: ADDR,
                    word: 0x73FF
                },
                TraceEvent::RegisterRead {
                    register: 0x02,
                    bytes: [0x00, 0x10]
                },
                TraceEvent::BusVoltageRaw {
                    channel: 1,
                    register: 0x0010,
                    raw: 8
                },
            ]
        );
    }

    #[test]
    fn disabled_tracing_is_silent() {
        let mut count = 0;
        {
            let expectations = [init(), read(0x01, 1)];
            let observer = |_: &TraceEvent| count += 1;
            let i2c = I2cMock::new(&expectations);
            let mut ina = Ina3221::with_observer(i2c, ADDR, Config::default(), observer).unwrap();
            ina.enable_tracing(false);
            ina.shunt_voltage_raw(1).unwrap();
            ina.release().done();
        }
        // Only the configuration write and its Configured event.
        assert_eq!(count, 2);
    }
}
