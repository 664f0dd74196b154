// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives.
//!
//! UI components frequently need short scheduled continuations: "re-check this
//! gesture in 100ms", "fire the change notification once the animation has
//! settled". This crate provides a small, owned [`TimerQueue`] for those cases.
//!
//! The queue never reads a clock. Hosts pass the current time explicitly as a
//! `u64` tick count (milliseconds by convention) when scheduling and draining,
//! which keeps components deterministic and trivially testable. Hosts are
//! responsible for:
//!
//! - Calling [`TimerQueue::pop_due`] (usually through the owning component)
//!   whenever their event loop wakes up.
//! - Using [`TimerQueue::next_deadline`] to decide when to wake up next.
//!
//! Every scheduled entry gets a [`TimerId`] which can be used to cancel it.
//! Components that own a queue can cancel everything on teardown with
//! [`TimerQueue::clear`], so no continuation outlives its owner.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let settle = timers.schedule_after(1_000, 100, "settle");
//! timers.schedule_after(1_000, 200, "notify");
//!
//! // Nothing is due yet.
//! assert!(timers.pop_due(1_050).is_none());
//!
//! // The settle timer can still be withdrawn.
//! assert_eq!(timers.cancel(settle), Some("settle"));
//!
//! let fired = timers.pop_due(1_200).unwrap();
//! assert_eq!(fired.payload, "notify");
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Timer, TimerId, TimerQueue};
