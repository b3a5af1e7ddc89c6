//! Astronomical date/time mapping
//!
//! Pure calendar math: from a wall-clock date/time to the two dial angles
//! (solar time and rete position).

pub mod datetime;
pub mod mapper;

pub use datetime::DateTime;
pub use mapper::{dial_targets, DialTargets, TurnFraction};
