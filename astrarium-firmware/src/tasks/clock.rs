//! Clock control task
//!
//! Single owner of the [`Clock`] state machine. A fixed-period ticker
//! drives motor stepping and calibration one step per tick; date/time
//! fixes and mode commands are folded into the same loop, so no state is
//! ever touched from two tasks.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};

use astrarium_core::clock::{CalState, Clock, Mode};

use crate::channels::{CLOCK_STATUS, DATE_TIME, MODE_COMMAND};
use crate::drivers::{CoilStepper, OptoSensor};

/// Stepping-loop tick interval
///
/// Sets both the step rate (one half-step per tick per moving motor) and
/// the calibration advance rate.
pub const TICK_INTERVAL_MS: u64 = 5;

/// Clock control task
///
/// Runs a calibration pass at startup, then tracks the date/time feed
/// until commanded otherwise.
#[embassy_executor::task]
pub async fn clock_task(mut clock: Clock<CoilStepper<'static>, OptoSensor<'static>>) {
    info!("Clock task started");

    // Home both dials before tracking anything
    clock.set_mode(Mode::Auto);
    clock.begin_calibration();
    info!("Startup calibration begun");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last_cal_state = CalState::Idle;

    loop {
        match select3(ticker.next(), DATE_TIME.receive(), MODE_COMMAND.receive()).await {
            Either3::First(()) => {
                clock.poll();

                let cal_state = clock.cal_state();
                if cal_state != last_cal_state {
                    debug!("Calibration state: {:?}", cal_state);
                    if cal_state == CalState::Idle {
                        let status = clock.status();
                        info!(
                            "Calibration complete: centres={:?}, resuming {:?}",
                            status.cal.centres, clock.mode()
                        );
                        CLOCK_STATUS.signal(status);
                    }
                    last_cal_state = cal_state;
                }
            }
            Either3::Second(dt) => {
                trace!(
                    "Time fix: {}-{}-{} {}:{}",
                    dt.year, dt.month, dt.day, dt.hour, dt.minute
                );
                if !clock.apply_date_time(&dt) {
                    warn!("Time fix ignored (year {} in mode {:?})", dt.year, clock.mode());
                }
                CLOCK_STATUS.signal(clock.status());
            }
            Either3::Third(mode) => {
                info!("Mode command: {:?}", mode);
                clock.set_mode(mode);
                CLOCK_STATUS.signal(clock.status());
            }
        }
    }
}
