//! Virtual-clock timer queue.
//!
//! Events are scheduled relative to the queue's current time and fire when
//! the owner advances the clock past their due time. Nothing here sleeps:
//! a real-time host measures elapsed wall time and advances by that much,
//! while tests advance by exact amounts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Handle to a scheduled event, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Schedules delayed events and cancels them.
///
/// ## Implementation Notes
///
/// - `schedule`: delay is relative to `now()`; zero delay is allowed
/// - `cancel`: idempotent, returns `false` if the event already fired or was
///   cancelled before
pub trait Scheduler {
    /// Payload delivered when a timer fires.
    type Event;

    /// Current virtual time.
    fn now(&self) -> Duration;

    /// Schedule `event` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, event: Self::Event) -> TimerHandle;

    /// Cancel a pending event.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Whether the event behind `handle` is still waiting to fire.
    fn is_pending(&self, handle: TimerHandle) -> bool;
}

/// Min-heap of pending events keyed by due time, ties broken by scheduling
/// order.
///
/// Cancelled entries are removed from the payload map immediately and
/// skipped lazily when they reach the top of the heap.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    order: BinaryHeap<Reverse<(Duration, u64)>>,
    pending: FxHashMap<u64, E>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            order: BinaryHeap::new(),
            pending: FxHashMap::default(),
        }
    }

    /// Number of events waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the next live event, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        // The heap may hold cancelled entries, so scan for the earliest live one.
        self.order
            .iter()
            .filter(|Reverse((_, id))| self.pending.contains_key(id))
            .map(|Reverse((due, _))| *due)
            .min()
    }

    /// Pop the next event due at or before `deadline`.
    ///
    /// The clock moves to the popped event's due time, so events scheduled
    /// while handling it are relative to that instant.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<E> {
        while let Some(&Reverse((due, id))) = self.order.peek() {
            if due > deadline {
                return None;
            }
            self.order.pop();
            if let Some(event) = self.pending.remove(&id) {
                self.now = self.now.max(due);
                return Some(event);
            }
        }
        None
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// Never moves the clock backwards.
    pub fn set_now(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.order.clear();
        self.pending.clear();
    }
}

impl<E> Scheduler for TimerQueue<E> {
    type Event = E;

    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        self.order.push(Reverse((self.now.saturating_add(delay), id)));
        self.pending.insert(id, event);
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle.0).is_some()
    }

    fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle.0)
    }
}
