// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Identifier of a scheduled timer within one [`TimerQueue`].
///
/// Ids are unique for the lifetime of the queue that issued them, including
/// across [`TimerQueue::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that has come due, as returned by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    /// Id issued when the timer was scheduled.
    pub id: TimerId,
    /// Tick at which the timer was due.
    pub deadline: u64,
    /// Caller payload.
    pub payload: T,
}

/// An owned queue of pending timers, ordered by deadline.
///
/// Timers with equal deadlines fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by descending (deadline, id) so the next timer is at the end.
    pending: Vec<Timer<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules `payload` to come due at the absolute tick `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Newest id among equal deadlines sits closest to the front, so it
        // is popped after the older ones.
        let at = self.pending.partition_point(|t| t.deadline > deadline);
        self.pending.insert(
            at,
            Timer {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to come due `delay` ticks after `now`.
    ///
    /// The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired, was cancelled, or was never
    /// issued by this queue.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.pending.iter().position(|t| t.id == id)?;
        Some(self.pending.remove(at).payload)
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.last().map(|t| t.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Timer<T>> {
        if self.pending.last()?.deadline <= now {
            self.pending.pop()
        } else {
            None
        }
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
