//! Stepper motor capability
//!
//! Abstracts over the low-level stepper driver (coil sequencing, step
//! timing). The clock logic only ever speaks in absolute step positions on
//! a circular dial of `steps_per_rev()` steps.

/// Trait for a position-controlled dial motor
///
/// Positions are logical: `zero()` re-references them to the current
/// physical position. A commanded move completes over many `poll()` calls,
/// one step of work per call.
pub trait Motor {
    /// Move to an absolute position, taking the shortest path around the dial
    ///
    /// Used for normal dial pointing; a full revolution is never swept.
    fn rotate(&mut self, position: i32);

    /// Move to an absolute position, stepping through every intermediate
    /// position in one direction
    ///
    /// Used by calibration sweeps, where the sensor must be sampled at each
    /// step along the way.
    fn seek(&mut self, position: i32);

    /// Current logical position in `[0, steps_per_rev())`
    fn position(&self) -> i32;

    /// Target position of the last commanded move
    fn target(&self) -> i32;

    /// Steps per full dial revolution
    fn steps_per_rev(&self) -> i32;

    /// True once the last commanded move has completed
    fn ready(&self) -> bool;

    /// Declare the current physical position as logical zero
    fn zero(&mut self);

    /// Advance step sequencing by one unit of work
    ///
    /// Called once per stepping-loop tick for every registered motor.
    fn poll(&mut self);
}
