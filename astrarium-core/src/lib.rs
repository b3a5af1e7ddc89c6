//! Board-agnostic control logic for the Astrarium astronomical clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (motor, homing sensor)
//! - Clock state machine (manual / auto-track / calibrating)
//! - Sensor-homing calibration engine
//! - Astronomical date/time to dial-angle mapping
//! - Configuration type definitions
//!
//! The crate is `no_std`; tests run on the host against simulated hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod astro;
pub mod clock;
pub mod config;
pub mod traits;
