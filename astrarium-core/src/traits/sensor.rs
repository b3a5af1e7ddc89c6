//! Homing sensor capability

/// Trait for the binary homing sensor on a dial
///
/// The sensor is a single binary window (e.g. a slotted opto-interrupter)
/// spanning part of the revolution. Calibration locates its two edges by
/// sweeping the dial and watching for level changes.
pub trait HomingSensor {
    /// Current binary state of the sensor
    fn level(&self) -> bool;
}
