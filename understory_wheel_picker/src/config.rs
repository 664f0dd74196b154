// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geometry::WheelGeometry;
use crate::rows::VisibleRows;

/// Default delay, in ticks, before a drag release commits.
///
/// Gives a trailing momentum-begin signal time to arrive and take over.
pub const DEFAULT_DRAG_SETTLE_DELAY: u64 = 100;

/// Default delay, in ticks, between a snap command and its change notification.
pub const DEFAULT_NOTIFY_DELAY: u64 = 200;

/// Configuration for a [`WheelPicker`](crate::WheelPicker).
///
/// Delays are expressed in the same tick unit the host passes as `now`
/// (milliseconds by convention).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WheelConfig {
    /// Visual width of the wheel in pixels.
    pub wheel_width: f64,
    /// Row height in pixels. Expected to be finite and positive.
    pub item_height: f64,
    /// Rows shown above and below the center.
    pub visible: VisibleRows,
    /// Item centered when the picker is created.
    pub select_index: usize,
    /// Delay before a drag release commits.
    pub drag_settle_delay: u64,
    /// Delay between a snap command and the change notification.
    pub notify_delay: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            wheel_width: 100.0,
            item_height: 40.0,
            visible: VisibleRows::default(),
            select_index: 0,
            drag_settle_delay: DEFAULT_DRAG_SETTLE_DELAY,
            notify_delay: DEFAULT_NOTIFY_DELAY,
        }
    }
}

impl WheelConfig {
    /// Default configuration with the given row height.
    #[must_use]
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            ..Self::default()
        }
    }

    /// Sets the wheel width.
    #[must_use]
    pub fn with_wheel_width(mut self, wheel_width: f64) -> Self {
        self.wheel_width = wheel_width;
        self
    }

    /// Sets the visible-row count; anything above 3 is clamped.
    #[must_use]
    pub fn with_visible_rows(mut self, visible: impl Into<VisibleRows>) -> Self {
        self.visible = visible.into();
        self
    }

    /// Sets the initially centered item.
    #[must_use]
    pub fn with_select_index(mut self, select_index: usize) -> Self {
        self.select_index = select_index;
        self
    }

    /// Sets the drag-release deferral.
    #[must_use]
    pub fn with_drag_settle_delay(mut self, delay: u64) -> Self {
        self.drag_settle_delay = delay;
        self
    }

    /// Sets the notification delay.
    #[must_use]
    pub fn with_notify_delay(mut self, delay: u64) -> Self {
        self.notify_delay = delay;
        self
    }

    /// Geometry for `item_count` items under this configuration.
    #[must_use]
    pub fn geometry(&self, item_count: usize) -> WheelGeometry {
        WheelGeometry::new(item_count, self.item_height, self.visible)
    }
}
