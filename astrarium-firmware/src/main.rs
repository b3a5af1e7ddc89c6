//! Astrarium - Astronomical Clock Firmware
//!
//! Main firmware binary for RP2040-based astronomical clocks. Two geared
//! stepper motors drive the solar-time dial and the rete star-pointer;
//! each dial homes against a slotted opto-interrupter at startup, then
//! tracks the date/time feed.
//!
//! Named after Giovanni de' Dondi's 14th-century Astrarium, the first
//! great mechanical model of the heavens.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use astrarium_core::clock::{Clock, Dial};
use astrarium_core::config::ClockConfig;

use crate::drivers::{CoilStepper, OptoSensor, STEPS_PER_REV};

mod channels;
mod drivers;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Astrarium firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Time dial: coils on GP2-GP5, opto-interrupter on GP10
    let time_motor = CoilStepper::new(
        [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
        ],
        STEPS_PER_REV,
    );
    let time_sensor = OptoSensor::new(Input::new(p.PIN_10, Pull::Up));

    // Rete dial: coils on GP6-GP9, opto-interrupter on GP11
    let rete_motor = CoilStepper::new(
        [
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        ],
        STEPS_PER_REV,
    );
    let rete_sensor = OptoSensor::new(Input::new(p.PIN_11, Pull::Up));

    let clock = Clock::new(
        [
            Dial::wired(time_motor, time_sensor),
            Dial::wired(rete_motor, rete_sensor),
        ],
        ClockConfig::default(),
    );

    unwrap!(spawner.spawn(tasks::clock_task(clock)));

    info!("Clock task spawned; feed time fixes into channels::DATE_TIME");
}
