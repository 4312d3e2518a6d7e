//! Delayed events and the per-turn countdown.
//!
//! The controller never waits. Every pause in the game (flash steps, the
//! post-round pause, countdown ticks, indicator resets) is an event in a
//! [`TimerQueue`] that fires when the host advances the virtual clock.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_simon::timing::{Scheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let handle = queue.schedule(Duration::from_millis(500), "flash");
//! queue.schedule(Duration::from_millis(1000), "done");
//!
//! assert!(queue.cancel(handle));
//! assert_eq!(queue.pop_due(Duration::from_secs(2)), Some("done"));
//! ```

mod countdown;
mod queue;

pub use countdown::{allowed_time, Countdown, Tick};
pub use queue::{Scheduler, TimerHandle, TimerQueue};
