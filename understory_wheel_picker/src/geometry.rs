// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset arithmetic for a fixed-row-height wheel.
//!
//! Offsets are measured from the top of the padded list to the top of the
//! viewport. Because the viewport has `visible` placeholder rows above its
//! center, the row centered at offset `i * item_height` is caller item `i`.
//! Resolved indices are therefore always indices into the caller's un-padded
//! list; no padding adjustment is needed anywhere.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Rect;

use crate::rows::{VisibleRows, padded_len};

/// A resolved snap target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    /// Caller item index centered by this snap.
    pub index: usize,
    /// Scroll offset that centers `index`, `index * item_height`.
    pub offset: f64,
}

/// Reason a scroll offset could not be resolved to a snap target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SnapRejection {
    /// There are no items to select.
    Empty,
    /// The offset lies outside `0..=max_offset`, typically from overscroll.
    OutOfRange {
        /// The rejected offset.
        offset: f64,
        /// Largest legal offset at the time of resolution.
        max_offset: f64,
    },
}

impl fmt::Display for SnapRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("wheel has no items"),
            Self::OutOfRange { offset, max_offset } => {
                write!(f, "offset {offset} outside 0..={max_offset}")
            }
        }
    }
}

impl core::error::Error for SnapRejection {}

/// Geometry of a wheel with uniform row height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelGeometry {
    item_count: usize,
    item_height: f64,
    visible: VisibleRows,
}

impl WheelGeometry {
    /// Creates the geometry for `item_count` items of `item_height` pixels.
    ///
    /// `item_height` is expected to be finite and positive.
    #[must_use]
    pub const fn new(item_count: usize, item_height: f64, visible: VisibleRows) -> Self {
        Self {
            item_count,
            item_height,
            visible,
        }
    }

    /// Number of caller items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Row height in pixels.
    #[must_use]
    pub const fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Rows shown above and below the center.
    #[must_use]
    pub const fn visible(&self) -> VisibleRows {
        self.visible
    }

    /// Sets the number of caller items.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Sets the row height in pixels.
    pub fn set_item_height(&mut self, item_height: f64) {
        self.item_height = item_height;
    }

    /// Sets the rows shown above and below the center.
    pub fn set_visible(&mut self, visible: VisibleRows) {
        self.visible = visible;
    }

    /// Rows in the padded list.
    #[must_use]
    pub const fn padded_len(&self) -> usize {
        padded_len(self.item_count, self.visible)
    }

    /// Height of the viewport, `(2 * visible + 1) * item_height`.
    #[must_use]
    pub fn list_height(&self) -> f64 {
        self.visible.window_rows() as f64 * self.item_height
    }

    /// Height of the padded content.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.padded_len() as f64 * self.item_height
    }

    /// Largest legal scroll offset; never negative.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_height() - self.list_height()).max(0.0)
    }

    /// Offset that centers caller item `index`.
    #[must_use]
    pub fn offset_for_index(&self, index: usize) -> f64 {
        index as f64 * self.item_height
    }

    /// Clamps `offset` into `0..=max_offset`. NaN maps to zero.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Returns `true` if `offset` is within `0..=max_offset`.
    #[must_use]
    pub fn contains_offset(&self, offset: f64) -> bool {
        (0.0..=self.max_offset()).contains(&offset)
    }

    /// Resolves a raw scroll offset to the nearest item.
    ///
    /// The index is `round(offset / item_height)`, with halves rounding away
    /// from zero. Offsets outside `0..=max_offset` are refused so that
    /// overscroll and bounce never produce a snap, even when the nearest row
    /// would itself be in range.
    pub fn resolve(&self, offset: f64) -> Result<Snap, SnapRejection> {
        if self.item_count == 0 {
            return Err(SnapRejection::Empty);
        }
        let max_offset = self.max_offset();
        let out_of_range = SnapRejection::OutOfRange { offset, max_offset };
        if !self.contains_offset(offset) {
            return Err(out_of_range);
        }
        let rows = offset / self.item_height;
        if !rows.is_finite() {
            return Err(out_of_range);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rows is finite and non-negative; the index is clamped immediately after"
        )]
        let index = (rows.round() as usize).min(self.item_count - 1);
        Ok(Snap {
            index,
            offset: self.offset_for_index(index),
        })
    }

    /// Viewport rectangle for a wheel `width` pixels wide.
    #[must_use]
    pub fn viewport_rect(&self, width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, self.list_height())
    }

    /// The fixed selection band over the centered row, in viewport coordinates.
    #[must_use]
    pub fn selector_rect(&self, width: f64) -> Rect {
        let top = self.visible.get() as f64 * self.item_height;
        Rect::new(0.0, top, width, top + self.item_height)
    }
}
