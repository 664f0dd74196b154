// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-row counts and placeholder padding.
//!
//! A wheel shows `2 * visible + 1` rows: the centered row plus `visible` rows
//! above and below it. To let the first and last real items reach the center,
//! the item list is surrounded by `visible` placeholder rows on each side.

use alloc::string::String;
use alloc::vec::Vec;

/// Number of rows shown above and below the centered row.
///
/// Always in `1..=3`; the default is 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct VisibleRows(u8);

impl VisibleRows {
    /// One row above and below the center.
    pub const ONE: Self = Self(1);
    /// Two rows above and below the center.
    pub const TWO: Self = Self(2);
    /// Three rows above and below the center.
    pub const THREE: Self = Self(3);

    /// Creates a visible-row count, clamping `n` into `1..=3`.
    #[must_use]
    pub const fn new(n: u8) -> Self {
        if n == 0 {
            Self::ONE
        } else if n > 3 {
            Self::THREE
        } else {
            Self(n)
        }
    }

    /// Rows above (or below) the center.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Total rows in the window, `2 * visible + 1`.
    #[must_use]
    pub const fn window_rows(self) -> usize {
        2 * self.get() + 1
    }
}

impl Default for VisibleRows {
    fn default() -> Self {
        Self::TWO
    }
}

impl From<u8> for VisibleRows {
    fn from(n: u8) -> Self {
        Self::new(n)
    }
}

impl From<VisibleRows> for u8 {
    fn from(rows: VisibleRows) -> Self {
        rows.0
    }
}

/// One row of the padded list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaddedRow<T> {
    /// Blank row used to let boundary items reach the center.
    Placeholder,
    /// A caller item.
    Item {
        /// Index into the caller's un-padded list.
        index: usize,
        /// The item itself.
        value: T,
    },
}

impl<T> PaddedRow<T> {
    /// Returns the caller index for item rows.
    #[must_use]
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::Placeholder => None,
            Self::Item { index, .. } => Some(*index),
        }
    }

    /// Returns the item for item rows.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Placeholder => None,
            Self::Item { value, .. } => Some(value),
        }
    }

    /// Returns `true` for placeholder rows.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Length of the padded list for `item_count` items.
#[must_use]
pub const fn padded_len(item_count: usize, visible: VisibleRows) -> usize {
    item_count + 2 * visible.get()
}

/// Surrounds `items` with `visible` placeholder rows on each side.
#[must_use]
pub fn pad_rows<T>(items: &[T], visible: VisibleRows) -> Vec<PaddedRow<&T>> {
    let pad = visible.get();
    let mut rows = Vec::with_capacity(padded_len(items.len(), visible));
    rows.extend((0..pad).map(|_| PaddedRow::Placeholder));
    rows.extend(
        items
            .iter()
            .enumerate()
            .map(|(index, value)| PaddedRow::Item { index, value }),
    );
    rows.extend((0..pad).map(|_| PaddedRow::Placeholder));
    rows
}

/// Label form of [`pad_rows`]: placeholders become empty strings.
#[must_use]
pub fn pad_labels<S: AsRef<str>>(items: &[S], visible: VisibleRows) -> Vec<String> {
    pad_rows(items, visible)
        .into_iter()
        .map(|row| match row {
            PaddedRow::Placeholder => String::new(),
            PaddedRow::Item { value, .. } => String::from(value.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{PaddedRow, VisibleRows, pad_labels, pad_rows, padded_len};

    #[test]
    fn visible_rows_clamps() {
        assert_eq!(VisibleRows::new(0), VisibleRows::ONE);
        assert_eq!(VisibleRows::new(2), VisibleRows::TWO);
        assert_eq!(VisibleRows::new(3), VisibleRows::THREE);
        assert_eq!(VisibleRows::new(9), VisibleRows::THREE);
        assert_eq!(VisibleRows::default().get(), 2);
        assert_eq!(VisibleRows::TWO.window_rows(), 5);
    }

    #[test]
    fn labels_match_worked_example() {
        let labels = pad_labels(&["A", "B", "C"], VisibleRows::TWO);
        assert_eq!(labels, ["", "", "A", "B", "C", "", ""]);
    }

    #[test]
    fn padding_invariant_holds_for_every_row_count() {
        let items: Vec<u32> = (0..7).collect();
        for n in 0..=items.len() {
            for visible in [VisibleRows::ONE, VisibleRows::TWO, VisibleRows::THREE] {
                let rows = pad_rows(&items[..n], visible);
                let v = visible.get();
                assert_eq!(rows.len(), n + 2 * v);
                assert_eq!(rows.len(), padded_len(n, visible));
                assert!(rows[..v].iter().all(PaddedRow::is_placeholder));
                assert!(rows[rows.len() - v..].iter().all(PaddedRow::is_placeholder));
                for (offset, row) in rows[v..v + n].iter().enumerate() {
                    assert_eq!(row.item_index(), Some(offset));
                    assert_eq!(row.value(), Some(&&items[offset]));
                }
            }
        }
    }

    #[test]
    fn empty_items_are_all_placeholders() {
        let rows = pad_rows::<u8>(&[], VisibleRows::ONE);
        assert_eq!(rows, vec![PaddedRow::Placeholder, PaddedRow::Placeholder]);
        assert_eq!(rows[0].item_index(), None);
    }
}
