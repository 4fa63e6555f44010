//! Typed configuration options and the 16-bit configuration word.
//!
//! [`Config`] is the set of named options accepted by the device. Every
//! multi-bit field is an enum covering all eight 3-bit codes, so a
//! [`ConfigWord`] can always be built from a [`Config`] and decoded back
//! into one without a failure path.

use crate::registers::{
    enable_bit, AVG_SHIFT, CHANNEL_COUNT, CONFIG_RESET, FIELD_MASK, MODE_SHIFT, VBUS_CT_SHIFT,
    VSH_CT_SHIFT,
};

/// One of the three measurement channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ch1,
    Ch2,
    Ch3,
}

impl Channel {
    /// All channels in register order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Ch1, Channel::Ch2, Channel::Ch3];

    /// Look up a channel by its 1-based number.
    ///
    /// Returns `None` for anything outside `1..=3`.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Channel::Ch1),
            2 => Some(Channel::Ch2),
            3 => Some(Channel::Ch3),
            _ => None,
        }
    }

    /// 1-based channel number as printed on the datasheet.
    pub const fn number(self) -> u8 {
        self.offset() + 1
    }

    /// 0-based index into per-channel arrays and register banks.
    pub(crate) const fn offset(self) -> u8 {
        match self {
            Channel::Ch1 => 0,
            Channel::Ch2 => 1,
            Channel::Ch3 => 2,
        }
    }
}

/// Number of samples averaged by the device before a result is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AveragingMode {
    /// 1 sample (power-on default)
    N1 = 0,
    /// 4 samples
    N4 = 1,
    /// 16 samples
    N16 = 2,
    /// 64 samples
    N64 = 3,
    /// 128 samples
    N128 = 4,
    /// 256 samples
    N256 = 5,
    /// 512 samples
    N512 = 6,
    /// 1024 samples
    N1024 = 7,
}

impl AveragingMode {
    fn from_code(code: u16) -> Self {
        match code & FIELD_MASK {
            0 => AveragingMode::N1,
            1 => AveragingMode::N4,
            2 => AveragingMode::N16,
            3 => AveragingMode::N64,
            4 => AveragingMode::N128,
            5 => AveragingMode::N256,
            6 => AveragingMode::N512,
            _ => AveragingMode::N1024,
        }
    }
}

/// ADC conversion time, selectable separately for bus and shunt voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionTime {
    /// 140 µs
    T140Us = 0,
    /// 204 µs
    T204Us = 1,
    /// 332 µs
    T332Us = 2,
    /// 588 µs
    T588Us = 3,
    /// 1.1 ms (power-on default)
    T1100Us = 4,
    /// 2.116 ms
    T2116Us = 5,
    /// 4.156 ms
    T4156Us = 6,
    /// 8.244 ms
    T8244Us = 7,
}

impl ConversionTime {
    fn from_code(code: u16) -> Self {
        match code & FIELD_MASK {
            0 => ConversionTime::T140Us,
            1 => ConversionTime::T204Us,
            2 => ConversionTime::T332Us,
            3 => ConversionTime::T588Us,
            4 => ConversionTime::T1100Us,
            5 => ConversionTime::T2116Us,
            6 => ConversionTime::T4156Us,
            _ => ConversionTime::T8244Us,
        }
    }

    /// Nominal conversion time in microseconds.
    pub const fn as_micros(self) -> u32 {
        match self {
            ConversionTime::T140Us => 140,
            ConversionTime::T204Us => 204,
            ConversionTime::T332Us => 332,
            ConversionTime::T588Us => 588,
            ConversionTime::T1100Us => 1100,
            ConversionTime::T2116Us => 2116,
            ConversionTime::T4156Us => 4156,
            ConversionTime::T8244Us => 8244,
        }
    }
}

/// Operating mode.
///
/// Triggered modes run a single conversion per config write; continuous
/// modes keep converting until the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    PowerDown = 0,
    ShuntTriggered = 1,
    BusTriggered = 2,
    ShuntBusTriggered = 3,
    /// Second power-down code, behaves like [`OperatingMode::PowerDown`].
    PowerDownAlt = 4,
    ShuntContinuous = 5,
    BusContinuous = 6,
    /// Shunt and bus, continuous (power-on default)
    ShuntBusContinuous = 7,
}

impl OperatingMode {
    fn from_code(code: u16) -> Self {
        match code & FIELD_MASK {
            0 => OperatingMode::PowerDown,
            1 => OperatingMode::ShuntTriggered,
            2 => OperatingMode::BusTriggered,
            3 => OperatingMode::ShuntBusTriggered,
            4 => OperatingMode::PowerDownAlt,
            5 => OperatingMode::ShuntContinuous,
            6 => OperatingMode::BusContinuous,
            _ => OperatingMode::ShuntBusContinuous,
        }
    }
}

/// Raw 16-bit value of the configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigWord(u16);

impl ConfigWord {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl From<ConfigWord> for u16 {
    fn from(word: ConfigWord) -> Self {
        word.0
    }
}

/// Named configuration options.
///
/// Built with consuming setters:
///
/// ```
/// use ina3221_driver::{AveragingMode, Channel, Config, OperatingMode};
///
/// let config = Config::default()
///     .channel(Channel::Ch3, false)
///     .average(AveragingMode::N64)
///     .mode(OperatingMode::BusContinuous);
/// assert!(!config.is_channel_enabled(Channel::Ch3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    reset: bool,
    channels: [bool; CHANNEL_COUNT],
    average: AveragingMode,
    bus_conversion_time: ConversionTime,
    shunt_conversion_time: ConversionTime,
    mode: OperatingMode,
}

impl Default for Config {
    /// All channels on, 4-sample averaging, longest conversion times,
    /// continuous shunt and bus measurement. Word `0x73FF`.
    fn default() -> Self {
        Config {
            reset: false,
            channels: [true; CHANNEL_COUNT],
            average: AveragingMode::N4,
            bus_conversion_time: ConversionTime::T8244Us,
            shunt_conversion_time: ConversionTime::T8244Us,
            mode: OperatingMode::ShuntBusContinuous,
        }
    }
}

impl Config {
    /// The word older drivers wrote at init: all channels on,
    /// 16-sample averaging, 1.1 ms conversion times, continuous mode.
    /// Word `0x7527`.
    pub fn legacy() -> Self {
        Config {
            average: AveragingMode::N16,
            bus_conversion_time: ConversionTime::T1100Us,
            shunt_conversion_time: ConversionTime::T1100Us,
            ..Config::default()
        }
    }

    /// An option set with every flag cleared and every field at code 0.
    pub fn empty() -> Self {
        Config {
            reset: false,
            channels: [false; CHANNEL_COUNT],
            average: AveragingMode::N1,
            bus_conversion_time: ConversionTime::T140Us,
            shunt_conversion_time: ConversionTime::T140Us,
            mode: OperatingMode::PowerDown,
        }
    }

    pub fn reset(self, reset: bool) -> Self {
        Self { reset, ..self }
    }

    pub fn channel(self, channel: Channel, enabled: bool) -> Self {
        let mut channels = self.channels;
        channels[channel.offset() as usize] = enabled;
        Self { channels, ..self }
    }

    pub fn average(self, average: AveragingMode) -> Self {
        Self { average, ..self }
    }

    pub fn bus_conversion_time(self, ct: ConversionTime) -> Self {
        Self {
            bus_conversion_time: ct,
            ..self
        }
    }

    pub fn shunt_conversion_time(self, ct: ConversionTime) -> Self {
        Self {
            shunt_conversion_time: ct,
            ..self
        }
    }

    pub fn mode(self, mode: OperatingMode) -> Self {
        Self { mode, ..self }
    }

    pub fn is_reset_requested(&self) -> bool {
        self.reset
    }

    pub fn is_channel_enabled(&self, channel: Channel) -> bool {
        self.channels[channel.offset() as usize]
    }

    pub fn averaging_mode(&self) -> AveragingMode {
        self.average
    }

    pub fn bus_conversion(&self) -> ConversionTime {
        self.bus_conversion_time
    }

    pub fn shunt_conversion(&self) -> ConversionTime {
        self.shunt_conversion_time
    }

    pub fn operating_mode(&self) -> OperatingMode {
        self.mode
    }

    /// Assemble the configuration register value.
    pub fn word(&self) -> ConfigWord {
        let mut bits = (self.average as u16) << AVG_SHIFT
            | (self.bus_conversion_time as u16) << VBUS_CT_SHIFT
            | (self.shunt_conversion_time as u16) << VSH_CT_SHIFT
            | (self.mode as u16) << MODE_SHIFT;

        if self.reset {
            bits |= CONFIG_RESET;
        }
        for channel in Channel::ALL {
            if self.is_channel_enabled(channel) {
                bits |= enable_bit(channel);
            }
        }

        ConfigWord(bits)
    }

    /// Decode a configuration register value.
    pub fn from_word(word: ConfigWord) -> Self {
        let bits = word.bits();
        let mut channels = [false; CHANNEL_COUNT];
        for channel in Channel::ALL {
            channels[channel.offset() as usize] = bits & enable_bit(channel) != 0;
        }

        Config {
            reset: bits & CONFIG_RESET != 0,
            channels,
            average: AveragingMode::from_code(bits >> AVG_SHIFT),
            bus_conversion_time: ConversionTime::from_code(bits >> VBUS_CT_SHIFT),
            shunt_conversion_time: ConversionTime::from_code(bits >> VSH_CT_SHIFT),
            mode: OperatingMode::from_code(bits >> MODE_SHIFT),
        }
    }
}

impl From<Config> for ConfigWord {
    fn from(config: Config) -> Self {
        config.word()
    }
}
