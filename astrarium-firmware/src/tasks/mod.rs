//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod clock;

pub use clock::clock_task;
