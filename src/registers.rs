//! INA3221 register map and bit definitions.
//!
//! All registers are 16 bits wide and transferred most-significant byte
//! first. The voltage registers are banked per channel: channel `n` lives
//! two addresses above channel `n - 1`, so the address of a channel
//! register is `BASE + (n - 1) * 2`.

use crate::config::Channel;

// ---------------------------------------------------------------------------
// Device addressing
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address (A0 tied to GND).
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Address selected by the A0 pin strap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    Gnd = 0x40,
    Vs = 0x41,
    Sda = 0x42,
    Scl = 0x43,
}

impl Address {
    /// 7-bit I2C address for this strap.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.bits()
    }
}

/// Number of measurement channels on the device.
pub const CHANNEL_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// Configuration register (R/W).
pub const CONFIG: u8 = 0x00;

/// Shunt voltage register for channel 1 (R). Base of the shunt bank.
pub const SHUNT_VOLTAGE_1: u8 = 0x01;

/// Bus voltage register for channel 1 (R). Base of the bus bank.
pub const BUS_VOLTAGE_1: u8 = 0x02;

/// Mask/Enable register (R/W). Bit 0 is the conversion-ready flag.
pub const MASK_ENABLE: u8 = 0x0F;

/// Manufacturer ID register (R).
pub const MANUFACTURER_ID: u8 = 0xFE;

/// Die ID register (R).
pub const DIE_ID: u8 = 0xFF;

/// Distance between consecutive channels in a register bank.
const CHANNEL_STRIDE: u8 = 2;

// ---------------------------------------------------------------------------
// Configuration register bits
// ---------------------------------------------------------------------------

/// Reset bit. Self-clearing.
pub const CONFIG_RESET: u16 = 0x8000;

/// Channel 1 enable.
pub const CONFIG_ENABLE_CH1: u16 = 0x4000;

/// Channel 2 enable.
pub const CONFIG_ENABLE_CH2: u16 = 0x2000;

/// Channel 3 enable.
pub const CONFIG_ENABLE_CH3: u16 = 0x1000;

/// Bit offset of the 3-bit averaging field (bits 11-9).
pub const AVG_SHIFT: u16 = 9;

/// Bit offset of the 3-bit bus conversion-time field (bits 8-6).
pub const VBUS_CT_SHIFT: u16 = 6;

/// Bit offset of the 3-bit shunt conversion-time field (bits 5-3).
pub const VSH_CT_SHIFT: u16 = 3;

/// Bit offset of the 3-bit operating mode field (bits 2-0).
pub const MODE_SHIFT: u16 = 0;

/// Mask of a 3-bit field before shifting.
pub const FIELD_MASK: u16 = 0b111;

// ---------------------------------------------------------------------------
// Other register bits and identity values
// ---------------------------------------------------------------------------

/// Conversion-ready flag in the Mask/Enable register.
pub const MASK_ENABLE_CVRF: u16 = 0x0001;

/// Expected manufacturer ID ("TI" in ASCII).
pub const EXPECTED_MANUFACTURER_ID: u16 = 0x5449;

/// Expected die ID.
pub const EXPECTED_DIE_ID: u16 = 0x3220;

// ---------------------------------------------------------------------------
// Address computation
// ---------------------------------------------------------------------------

/// Enable bit in the configuration register for `channel`.
pub const fn enable_bit(channel: Channel) -> u16 {
    match channel {
        Channel::Ch1 => CONFIG_ENABLE_CH1,
        Channel::Ch2 => CONFIG_ENABLE_CH2,
        Channel::Ch3 => CONFIG_ENABLE_CH3,
    }
}

/// Bus voltage register address for `channel`.
pub const fn bus_voltage_register(channel: Channel) -> u8 {
    BUS_VOLTAGE_1 + channel.offset() * CHANNEL_STRIDE
}

/// Shunt voltage register address for `channel`.
pub const fn shunt_voltage_register(channel: Channel) -> u8 {
    SHUNT_VOLTAGE_1 + channel.offset() * CHANNEL_STRIDE
}
