//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic and the
//! hardware-specific driver implementations.

pub mod motor;
pub mod sensor;

pub use motor::Motor;
pub use sensor::HomingSensor;
