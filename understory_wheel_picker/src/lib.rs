// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_wheel_picker --heading-base-level=0

//! Understory Wheel Picker: a headless "wheel" selection controller.
//!
//! A wheel picker is a vertically scrolling list that snaps to the nearest row
//! and reports the item sitting under a fixed selection band in the middle of
//! the viewport. This crate owns the arithmetic and sequencing behind that
//! behavior and nothing else:
//!
//! - [`pad_rows`] / [`pad_labels`]: surround the items with placeholder rows
//!   so the first and last items can reach the center.
//! - [`WheelGeometry`]: list height, `max_offset`, and [`WheelGeometry::resolve`],
//!   which turns a raw scroll offset into the nearest [`Snap`] target or a
//!   [`SnapRejection`] for overscroll.
//! - [`GestureSequencer`]: decides whether a drag release or the end of
//!   momentum scrolling commits a gesture, so exactly one of them does.
//! - [`WheelPicker`]: ties the above together with cancellable timers from
//!   `understory_timing` and returns [`PickerAction`]s for the host.
//!
//! It does **not** render rows, recognize gestures, or animate scrolling.
//! Host frameworks are expected to:
//!
//! - Draw the rows from [`WheelPicker::padded_rows`] and the band from
//!   [`WheelGeometry::selector_rect`].
//! - Forward drag-end and momentum events from their scroll view, together
//!   with a monotonic tick (milliseconds by convention).
//! - Call [`WheelPicker::poll`] at [`WheelPicker::next_deadline`].
//! - Apply [`PickerAction::ScrollTo`] to the scroll view and deliver
//!   [`PickerAction::Changed`] to whoever listens for selection changes.
//!
//! ## Index convention
//!
//! Offsets are measured to the top of the viewport, and the centered row is
//! `visible` rows below that. The item centered at offset `i * item_height`
//! is therefore caller item `i`; every index the picker reports addresses the
//! caller's original, un-padded items.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_wheel_picker::{PickerAction, WheelConfig, WheelPicker};
//!
//! let config = WheelConfig::new(40.0).with_visible_rows(2_u8);
//! let mut picker = WheelPicker::new(vec!["A", "B", "C", "D", "E"], config);
//! assert_eq!(picker.geometry().max_offset(), 160.0);
//!
//! // The user releases a drag at 83px and no momentum follows.
//! assert!(picker.on_drag_end(83.0, 1_000).is_empty());
//!
//! // After the settle delay the picker snaps to "C"...
//! let actions = picker.poll(1_100);
//! assert_eq!(
//!     actions.as_slice(),
//!     &[PickerAction::ScrollTo { row: 2, offset: 80.0, animated: true }]
//! );
//!
//! // ...and reports it once the scroll animation has had time to settle.
//! let actions = picker.poll(1_300);
//! assert_eq!(actions.as_slice(), &[PickerAction::Changed(2)]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `tracing` debug events for gesture handling and commits.
//! - `serde`: derive `Serialize`/`Deserialize` for [`WheelConfig`] and
//!   [`VisibleRows`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod picker;
mod rows;
mod sequencer;

pub use config::{DEFAULT_DRAG_SETTLE_DELAY, DEFAULT_NOTIFY_DELAY, WheelConfig};
pub use geometry::{Snap, SnapRejection, WheelGeometry};
pub use picker::{OffsetObserver, PickerAction, PickerActions, WheelPicker};
pub use rows::{PaddedRow, VisibleRows, pad_labels, pad_rows, padded_len};
pub use sequencer::{GesturePhase, GestureSequencer};
