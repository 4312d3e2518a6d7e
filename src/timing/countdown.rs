//! Per-turn countdown.
//!
//! The countdown is a chain of one-second tick events. Only the most recent
//! tick is ever pending, so stopping it is a single cancel.

use std::time::Duration;

use super::queue::{Scheduler, TimerHandle};
use crate::core::CountdownRules;

/// Seconds allowed at `level` under the default rules:
/// `min(60, 30 + floor(level / 3) * 5)`.
#[must_use]
pub fn allowed_time(level: u32) -> u32 {
    CountdownRules::default().allowed_secs(level)
}

/// What a tick did to the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still running with this many seconds left.
    Remaining(u32),
    /// Reached zero and stopped.
    Expired,
    /// The countdown was not running.
    Inactive,
}

/// A running or stopped countdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    pending: Option<TimerHandle>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds left, or `None` when stopped.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.pending.map(|_| self.remaining)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Start counting down from `secs`, replacing any running countdown.
    pub fn start<S: Scheduler>(
        &mut self,
        scheduler: &mut S,
        secs: u32,
        period: Duration,
        tick: S::Event,
    ) {
        self.stop(scheduler);
        self.remaining = secs;
        self.pending = Some(scheduler.schedule(period, tick));
    }

    /// Handle a fired tick event: decrement and schedule the next one.
    pub fn tick<S: Scheduler>(
        &mut self,
        scheduler: &mut S,
        period: Duration,
        tick: S::Event,
    ) -> Tick {
        if self.pending.take().is_none() {
            return Tick::Inactive;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return Tick::Expired;
        }

        self.pending = Some(scheduler.schedule(period, tick));
        Tick::Remaining(self.remaining)
    }

    /// Stop the countdown. Returns `false` if it was already stopped.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        self.remaining = 0;
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}
