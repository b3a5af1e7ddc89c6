//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use astrarium_core::astro::DateTime;
use astrarium_core::clock::{ClockStatus, Mode};

/// Channel capacity for the date/time feed
const DATE_TIME_CHANNEL_SIZE: usize = 4;

/// Channel capacity for mode commands
const MODE_CHANNEL_SIZE: usize = 4;

/// Date/time feed into the clock task
///
/// Whatever time source the board integrates (UART bridge, RTC reader)
/// sends fixes here; the clock task decides whether to act on them.
pub static DATE_TIME: Channel<CriticalSectionRawMutex, DateTime, DATE_TIME_CHANNEL_SIZE> =
    Channel::new();

/// Operating mode commands for the clock task
pub static MODE_COMMAND: Channel<CriticalSectionRawMutex, Mode, MODE_CHANNEL_SIZE> =
    Channel::new();

/// Latest clock snapshot (updated by the clock task on every state change)
pub static CLOCK_STATUS: Signal<CriticalSectionRawMutex, ClockStatus> = Signal::new();
