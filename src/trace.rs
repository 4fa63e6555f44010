//! Trace points and the observer hook.
//!
//! The driver reports what it does on the bus as [`TraceEvent`]s handed to
//! an [`Observer`]. Nothing is printed by the driver itself; attach
//! [`DefmtObserver`] (feature `defmt`) or any `FnMut(&TraceEvent)` closure
//! to see the traffic.

/// Something the driver just did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TraceEvent {
    /// The configuration register was written during setup or reconfiguration.
    Configured { address: u8, word: u16 },
    /// A register write completed.
    RegisterWritten { register: u8, value: u16 },
    /// A register read completed. `bytes` are in wire order.
    RegisterRead { register: u8, bytes: [u8; 2] },
    /// A bus voltage sample was scaled.
    BusVoltageRaw { channel: u8, register: i16, raw: i32 },
    /// A shunt voltage sample was read.
    ShuntVoltageRaw { channel: u8, raw: i16 },
}

/// Receiver for [`TraceEvent`]s.
pub trait Observer {
    fn on_event(&mut self, event: &TraceEvent);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_event(&mut self, _event: &TraceEvent) {}
}

impl<F> Observer for F
where
    F: FnMut(&TraceEvent),
{
    fn on_event(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Observer that logs every event at debug level through `defmt`.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DefmtObserver;

#[cfg(feature = "defmt")]
impl Observer for DefmtObserver {
    fn on_event(&mut self, event: &TraceEvent) {
        defmt::debug!("ina3221: {}", event);
    }
}
