// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`WheelPicker`] controller.
//!
//! ## Event flow
//!
//! 1. The host forwards scroll-end signals: [`WheelPicker::on_drag_end`],
//!    [`WheelPicker::on_momentum_begin`], [`WheelPicker::on_momentum_end`].
//! 2. A drag release schedules a deferred check; momentum end commits
//!    directly if it owns the gesture (see [`GestureSequencer`]).
//! 3. A commit returns [`PickerAction::ScrollTo`] immediately and schedules
//!    its change notification. Every commit is notified exactly once, in
//!    commit order.
//! 4. The host calls [`WheelPicker::poll`] when [`WheelPicker::next_deadline`]
//!    is reached; due continuations run and may return
//!    [`PickerAction::ScrollTo`] and [`PickerAction::Changed`].
//!
//! All scheduled continuations are owned by the picker and are cancelled by
//! [`WheelPicker::teardown`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;
use understory_timing::{TimerId, TimerQueue};

use crate::config::WheelConfig;
use crate::geometry::{Snap, WheelGeometry};
use crate::rows::{PaddedRow, VisibleRows, pad_rows};
use crate::sequencer::{GesturePhase, GestureSequencer};

/// A command for the host scroll view or a notification for the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickerAction {
    /// Animate the scroll view so that padded row `row` is at the top of the
    /// viewport, which is scroll offset `offset`.
    ScrollTo {
        /// Padded-list row to scroll to; also the caller index now centered.
        row: usize,
        /// Target scroll offset, `row * item_height`.
        offset: f64,
        /// Whether the host should animate the scroll.
        animated: bool,
    },
    /// The selection settled on this caller item index.
    Changed(usize),
}

/// Actions produced by a single picker call.
pub type PickerActions = SmallVec<[PickerAction; 2]>;

/// Push-style observer of the mirrored scroll offset.
///
/// Hosts can use this to drive per-row visual effects. It is optional and
/// never consulted by the snapping logic.
pub trait OffsetObserver {
    /// Called with every offset passed to [`WheelPicker::on_scroll`].
    fn offset_changed(&mut self, offset: f64);
}

impl<F: FnMut(f64)> OffsetObserver for F {
    fn offset_changed(&mut self, offset: f64) {
        self(offset);
    }
}

#[derive(Copy, Clone, Debug)]
enum Continuation {
    // Raw release offset; resolved against the geometry current at fire time.
    DragSettle(f64),
    Notify(usize),
}

/// Headless wheel picker over caller items of type `T`.
///
/// `S` is an opaque host style value (row and text styling) that the picker
/// stores and hands back but never reads.
pub struct WheelPicker<T, S = ()> {
    items: Vec<T>,
    config: WheelConfig,
    geometry: WheelGeometry,
    style: S,
    sequencer: GestureSequencer,
    timers: TimerQueue<Continuation>,
    pending_drag: Option<TimerId>,
    offset: f64,
    selected: Option<usize>,
    observer: Option<Box<dyn OffsetObserver>>,
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for WheelPicker<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPicker")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("style", &self.style)
            .field("sequencer", &self.sequencer)
            .field("timers", &self.timers)
            .field("pending_drag", &self.pending_drag)
            .field("offset", &self.offset)
            .field("selected", &self.selected)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<T> WheelPicker<T> {
    /// Creates a picker without host styling.
    #[must_use]
    pub fn new(items: Vec<T>, config: WheelConfig) -> Self {
        Self::with_style(items, config, ())
    }
}

impl<T, S> WheelPicker<T, S> {
    /// Creates a picker carrying a host style value.
    ///
    /// The mirrored offset starts at [`initial_offset`](Self::initial_offset);
    /// hosts should apply the same offset to their scroll view.
    #[must_use]
    pub fn with_style(items: Vec<T>, config: WheelConfig, style: S) -> Self {
        let geometry = config.geometry(items.len());
        let mut picker = Self {
            items,
            config,
            geometry,
            style,
            sequencer: GestureSequencer::new(),
            timers: TimerQueue::new(),
            pending_drag: None,
            offset: 0.0,
            selected: None,
            observer: None,
        };
        picker.offset = picker.initial_offset();
        picker.selected = picker.geometry.resolve(picker.offset).ok().map(|s| s.index);
        picker
    }

    /// Caller items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Host style value.
    #[must_use]
    pub fn style(&self) -> &S {
        &self.style
    }

    /// Mutable access to the host style value.
    pub fn style_mut(&mut self) -> &mut S {
        &mut self.style
    }

    /// Items surrounded by placeholder rows, in display order.
    #[must_use]
    pub fn padded_rows(&self) -> Vec<PaddedRow<&T>> {
        pad_rows(&self.items, self.geometry.visible())
    }

    /// Offset that centers the configured `select_index`, clamped to range.
    #[must_use]
    pub fn initial_offset(&self) -> f64 {
        self.geometry
            .clamp_offset(self.geometry.offset_for_index(self.config.select_index))
    }

    /// Last offset reported by the host.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Index of the most recently notified selection.
    ///
    /// Starts at the initially centered item, or `None` when empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Current ownership phase of the gesture in flight.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.sequencer.phase()
    }

    /// Earliest tick at which [`poll`](Self::poll) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns `true` if any continuation is scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Installs or removes the offset observer.
    pub fn set_offset_observer(&mut self, observer: Option<Box<dyn OffsetObserver>>) {
        self.observer = observer;
    }

    /// Replaces the items. The scroll offset is kept.
    ///
    /// If the selected index no longer exists, the selection falls back to
    /// the item nearest the (clamped) current offset.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.geometry.set_item_count(self.items.len());
        if self.selected.is_some_and(|index| index >= self.items.len()) {
            self.selected = self
                .geometry
                .resolve(self.geometry.clamp_offset(self.offset))
                .ok()
                .map(|snap| snap.index);
        }
    }

    /// Changes the row height. The scroll offset is kept.
    pub fn set_item_height(&mut self, item_height: f64) {
        self.config.item_height = item_height;
        self.geometry.set_item_height(item_height);
    }

    /// Changes the visible-row count. The scroll offset is kept.
    pub fn set_visible_rows(&mut self, visible: impl Into<VisibleRows>) {
        let visible = visible.into();
        self.config.visible = visible;
        self.geometry.set_visible(visible);
    }

    /// Changes the wheel width.
    pub fn set_wheel_width(&mut self, wheel_width: f64) {
        self.config.wheel_width = wheel_width;
    }

    /// Mirrors the host's scroll position and forwards it to the observer.
    pub fn on_scroll(&mut self, offset: f64) {
        self.offset = offset;
        if let Some(observer) = self.observer.as_mut() {
            observer.offset_changed(offset);
        }
    }

    /// Handles a drag release at `offset`.
    ///
    /// The decision is deferred by the configured drag-settle delay so that a
    /// trailing momentum begin can take ownership. Out-of-range offsets are
    /// ignored. The offset is resolved again when the delay expires, so prop
    /// changes in between are honored.
    pub fn on_drag_end(&mut self, offset: f64, now: u64) -> PickerActions {
        self.offset = offset;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "wheel_picker.drag_end", offset, now);
        if let Err(_rejection) = self.geometry.resolve(offset) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "wheel_picker.out_of_range", %_rejection);
            return PickerActions::new();
        }
        if let Some(id) = self.pending_drag.take() {
            self.timers.cancel(id);
        }
        self.pending_drag = Some(self.timers.schedule_after(
            now,
            self.config.drag_settle_delay,
            Continuation::DragSettle(offset),
        ));
        PickerActions::new()
    }

    /// Handles the start of inertial scrolling.
    ///
    /// Momentum takes exclusive ownership of the gesture; any deferred drag
    /// check is withdrawn.
    pub fn on_momentum_begin(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "wheel_picker.momentum_begin");
        self.sequencer.momentum_begin();
        if let Some(id) = self.pending_drag.take() {
            self.timers.cancel(id);
        }
    }

    /// Handles the end of inertial scrolling at `offset`.
    ///
    /// Commits only if a matching momentum begin was seen.
    pub fn on_momentum_end(&mut self, offset: f64, now: u64) -> PickerActions {
        self.offset = offset;
        if !self.sequencer.momentum_end() {
            return PickerActions::new();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "wheel_picker.momentum_end", offset, now);
        match self.geometry.resolve(offset) {
            Ok(snap) => self.commit(snap, now),
            Err(_rejection) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "wheel_picker.out_of_range", %_rejection);
                PickerActions::new()
            }
        }
    }

    /// Handles a failed scroll-to-index on the host side.
    ///
    /// The failure is ignored; the list stays where the host left it.
    pub fn on_scroll_to_index_failed(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "wheel_picker.scroll_to_index_failed");
    }

    /// Runs every continuation due at `now`.
    pub fn poll(&mut self, now: u64) -> PickerActions {
        let mut actions = PickerActions::new();
        while let Some(timer) = self.timers.pop_due(now) {
            match timer.payload {
                Continuation::DragSettle(offset) => {
                    self.pending_drag = None;
                    if !self.sequencer.drag_settled() {
                        continue;
                    }
                    match self.geometry.resolve(offset) {
                        // Scheduled from the deadline so late polls do not
                        // stretch the notification delay.
                        Ok(snap) => actions.extend(self.commit(snap, timer.deadline)),
                        Err(_rejection) => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(message = "wheel_picker.out_of_range", %_rejection);
                        }
                    }
                }
                Continuation::Notify(index) => {
                    if index >= self.geometry.item_count() {
                        // The items shrank after the commit.
                        #[cfg(feature = "tracing")]
                        tracing::debug!(message = "wheel_picker.stale_change", index);
                        continue;
                    }
                    self.selected = Some(index);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(message = "wheel_picker.changed", index);
                    actions.push(PickerAction::Changed(index));
                }
            }
        }
        actions
    }

    /// Cancels every scheduled continuation and resets gesture ownership.
    ///
    /// Call when the host widget is destroyed; afterwards [`poll`](Self::poll)
    /// produces nothing until new events arrive.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.pending_drag = None;
        self.sequencer.reset();
    }

    fn commit(&mut self, snap: Snap, now: u64) -> PickerActions {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "wheel_picker.commit",
            index = snap.index,
            offset = snap.offset
        );
        self.timers.schedule_after(
            now,
            self.config.notify_delay,
            Continuation::Notify(snap.index),
        );
        let mut actions = PickerActions::new();
        actions.push(PickerAction::ScrollTo {
            row: snap.index,
            offset: snap.offset,
            animated: true,
        });
        actions
    }
}
