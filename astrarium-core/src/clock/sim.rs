//! Simulated dial hardware for host-side tests
//!
//! The motor and sensor share one physical wheel position. The sensor
//! window is fixed in physical space, so re-zeroing the motor shifts the
//! window's logical coordinates exactly as it would on the real clock.

use std::cell::Cell;
use std::rc::Rc;

use super::dial::Dial;
use crate::traits::{HomingSensor, Motor};

/// Simulated stepper: one step of motion per `poll()`
pub struct SimMotor {
    /// Physical wheel position, shared with the sensor
    phys: Rc<Cell<i32>>,
    /// Physical position currently declared as logical zero
    origin: i32,
    target: i32,
    dir: i32,
    steps: i32,
}

impl Motor for SimMotor {
    fn rotate(&mut self, position: i32) {
        self.target = position.rem_euclid(self.steps);
        let diff = (self.target - self.position()).rem_euclid(self.steps);
        self.dir = if diff <= self.steps / 2 { 1 } else { -1 };
    }

    fn seek(&mut self, position: i32) {
        self.target = position.rem_euclid(self.steps);
        self.dir = if self.target >= self.position() { 1 } else { -1 };
    }

    fn position(&self) -> i32 {
        (self.phys.get() - self.origin).rem_euclid(self.steps)
    }

    fn target(&self) -> i32 {
        self.target
    }

    fn steps_per_rev(&self) -> i32 {
        self.steps
    }

    fn ready(&self) -> bool {
        self.position() == self.target
    }

    fn zero(&mut self) {
        self.origin = self.phys.get();
        self.target = 0;
    }

    fn poll(&mut self) {
        if self.position() != self.target {
            self.phys.set((self.phys.get() + self.dir).rem_euclid(self.steps));
        }
    }
}

/// Simulated opto-interrupter: low inside the window, high outside
pub struct SimSensor {
    phys: Rc<Cell<i32>>,
    window_lo: i32,
    window_hi: i32,
}

impl HomingSensor for SimSensor {
    fn level(&self) -> bool {
        let p = self.phys.get();
        let inside = if self.window_lo <= self.window_hi {
            (self.window_lo..self.window_hi).contains(&p)
        } else {
            // window wraps the zero point
            p >= self.window_lo || p < self.window_hi
        };
        !inside
    }
}

/// Build a fully wired simulated dial
///
/// `window_lo..window_hi` is the sensor window in physical step positions;
/// `window_lo > window_hi` makes it straddle the wrap boundary.
pub fn sim_dial(steps: i32, window_lo: i32, window_hi: i32) -> Dial<SimMotor, SimSensor> {
    let phys = Rc::new(Cell::new(0));
    let motor = SimMotor {
        phys: Rc::clone(&phys),
        origin: 0,
        target: 0,
        dir: 1,
        steps,
    };
    let sensor = SimSensor {
        phys,
        window_lo,
        window_hi,
    };
    Dial::wired(motor, sensor)
}
