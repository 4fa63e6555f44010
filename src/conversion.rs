//! Conversion from raw register samples to physical units.
//!
//! The bus voltage register is shifted right by 3 to drop the status bits
//! and weighted at 4 mV per count. The shunt register is used as-is and
//! divided by the shunt resistance to give milliamps.

/// Weight of one bus voltage count after the status bits are dropped.
pub const BUS_VOLTAGE_LSB_MV: i32 = 4;

/// Low bits of the bus voltage register that carry no measurement.
pub const BUS_VOLTAGE_STATUS_BITS: u32 = 3;

/// Millivolts to volts.
const MV_TO_V: f32 = 0.001;

/// Scale a bus voltage register sample to millivolt counts.
///
/// The shift is arithmetic, so negative samples stay negative.
pub const fn bus_voltage_raw(register: i16) -> i32 {
    (register >> BUS_VOLTAGE_STATUS_BITS) as i32 * BUS_VOLTAGE_LSB_MV
}

/// Convert a scaled bus voltage (see [`bus_voltage_raw`]) to volts.
pub fn bus_voltage_volts(raw: i32) -> f32 {
    raw as f32 * MV_TO_V
}

/// Convert a shunt voltage sample to milliamps through `shunt_ohms`.
pub fn current_milliamps(shunt_raw: i16, shunt_ohms: f32) -> f32 {
    shunt_raw as f32 / shunt_ohms
}

/// Whether `ohms` is usable as a shunt resistance.
pub(crate) fn is_valid_shunt(ohms: f32) -> bool {
    ohms.is_finite() && ohms > 0.0
}
