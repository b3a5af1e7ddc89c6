//! Board-edge implementations of the core hardware capabilities
//!
//! The core crate speaks [`Motor`] and [`HomingSensor`]; these types bind
//! those capabilities to RP2040 GPIO for the common geared unipolar
//! stepper (half-stepped, 4096 half-steps per output revolution) and a
//! slotted opto-interrupter.

use embassy_rp::gpio::{Input, Output};

use astrarium_core::traits::{HomingSensor, Motor};

/// Half-steps per dial revolution for the stock gear train
pub const STEPS_PER_REV: i32 = 4096;

/// Half-step coil energize sequence, one bit per coil
const HALF_STEP: [u8; 8] = [
    0b1000, 0b1100, 0b0100, 0b0110, 0b0010, 0b0011, 0b0001, 0b1001,
];

/// Four-coil unipolar stepper driven directly from GPIO
///
/// One half-step of motion per `poll()` call; the caller's tick period
/// sets the step rate.
pub struct CoilStepper<'d> {
    coils: [Output<'d>; 4],
    phase: u8,
    position: i32,
    target: i32,
    dir: i32,
    steps: i32,
}

impl<'d> CoilStepper<'d> {
    pub fn new(coils: [Output<'d>; 4], steps: i32) -> Self {
        Self {
            coils,
            phase: 0,
            position: 0,
            target: 0,
            dir: 1,
            steps,
        }
    }

    fn energize(&mut self) {
        let pattern = HALF_STEP[self.phase as usize];
        for (i, coil) in self.coils.iter_mut().enumerate() {
            if pattern & (1 << i) != 0 {
                coil.set_high();
            } else {
                coil.set_low();
            }
        }
    }
}

impl Motor for CoilStepper<'_> {
    fn rotate(&mut self, position: i32) {
        self.target = position.rem_euclid(self.steps);
        let diff = (self.target - self.position).rem_euclid(self.steps);
        self.dir = if diff <= self.steps / 2 { 1 } else { -1 };
    }

    fn seek(&mut self, position: i32) {
        self.target = position.rem_euclid(self.steps);
        self.dir = if self.target >= self.position { 1 } else { -1 };
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn target(&self) -> i32 {
        self.target
    }

    fn steps_per_rev(&self) -> i32 {
        self.steps
    }

    fn ready(&self) -> bool {
        self.position == self.target
    }

    fn zero(&mut self) {
        self.position = 0;
        self.target = 0;
    }

    fn poll(&mut self) {
        if self.position == self.target {
            return;
        }
        self.phase = ((self.phase as i32 + self.dir).rem_euclid(8)) as u8;
        self.position = (self.position + self.dir).rem_euclid(self.steps);
        self.energize();
    }
}

/// Slotted opto-interrupter reading the dial's homing vane
///
/// Reads high outside the vane and low while the vane blocks the slot.
pub struct OptoSensor<'d> {
    pin: Input<'d>,
}

impl<'d> OptoSensor<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl HomingSensor for OptoSensor<'_> {
    fn level(&self) -> bool {
        self.pin.is_high()
    }
}
