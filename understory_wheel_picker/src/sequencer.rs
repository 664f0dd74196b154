// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership of a gesture's scroll-end.
//!
//! A released drag may or may not continue into inertial scrolling, and
//! platforms commonly report momentum begin *after* drag end. The
//! [`GestureSequencer`] decides which of the two scroll-end signals commits
//! the gesture:
//!
//! - Momentum begin moves the sequencer to [`GesturePhase::MomentumPending`].
//! - Momentum end commits only from `MomentumPending`, then returns to `Idle`.
//! - A deferred drag check commits only if the sequencer is still `Idle`.
//!
//! ```
//! use understory_wheel_picker::{GesturePhase, GestureSequencer};
//!
//! let mut seq = GestureSequencer::new();
//!
//! // Drag released, then momentum began before the deferred check ran.
//! seq.momentum_begin();
//! assert!(!seq.drag_settled());
//!
//! // Momentum end owns the commit, exactly once.
//! assert!(seq.momentum_end());
//! assert!(!seq.momentum_end());
//! assert_eq!(seq.phase(), GesturePhase::Idle);
//! ```

/// Which handler currently owns the end of a gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No inertial scroll in flight; a drag release may commit.
    #[default]
    Idle,
    /// Inertial scrolling started; only momentum end may commit.
    MomentumPending,
}

/// Two-state ownership guard for one picker instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureSequencer {
    phase: GesturePhase,
}

impl GestureSequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while momentum owns the gesture.
    #[must_use]
    pub const fn is_momentum_pending(&self) -> bool {
        matches!(self.phase, GesturePhase::MomentumPending)
    }

    /// Records the start of inertial scrolling.
    pub fn momentum_begin(&mut self) {
        self.phase = GesturePhase::MomentumPending;
    }

    /// Records the end of inertial scrolling.
    ///
    /// Returns `true` if this call owns the commit, which is the case only
    /// when a matching [`momentum_begin`](Self::momentum_begin) was seen.
    pub fn momentum_end(&mut self) -> bool {
        let owns = self.is_momentum_pending();
        self.phase = GesturePhase::Idle;
        owns
    }

    /// Called when a deferred drag-release check fires.
    ///
    /// Returns `true` if the drag release owns the commit.
    #[must_use]
    pub const fn drag_settled(&self) -> bool {
        !self.is_momentum_pending()
    }

    /// Returns to [`GesturePhase::Idle`].
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{GesturePhase, GestureSequencer};

    #[test]
    fn drag_alone_owns_commit() {
        let seq = GestureSequencer::new();
        assert!(seq.drag_settled());
    }

    #[test]
    fn momentum_takes_over_from_drag() {
        let mut seq = GestureSequencer::new();
        seq.momentum_begin();
        assert!(seq.is_momentum_pending());
        assert!(!seq.drag_settled());
        assert!(seq.momentum_end());
        assert_eq!(seq.phase(), GesturePhase::Idle);
    }

    #[test]
    fn unmatched_momentum_end_is_ignored() {
        let mut seq = GestureSequencer::new();
        assert!(!seq.momentum_end());
        assert_eq!(seq.phase(), GesturePhase::Idle);
    }

    #[test]
    fn repeated_begin_still_commits_once() {
        let mut seq = GestureSequencer::new();
        seq.momentum_begin();
        seq.momentum_begin();
        assert!(seq.momentum_end());
        assert!(!seq.momentum_end());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut seq = GestureSequencer::new();
        seq.momentum_begin();
        seq.reset();
        assert_eq!(seq, GestureSequencer::default());
    }
}
