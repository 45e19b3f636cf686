//! Addressing between linear list indices and grid cells.
//!
//! A list of length `n` laid out `width` columns wide always has
//! `n / width + 1` rows: the trailing row guarantees a slot for the append
//! cell even when the last data row is full.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Number of columns in a grid. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnCount(NonZeroUsize);

impl ColumnCount {
    /// A single column.
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Create a column count, rejecting zero.
    #[must_use]
    pub const fn new(columns: usize) -> Option<Self> {
        match NonZeroUsize::new(columns) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Create a column count from host input, clamping anything below one.
    #[must_use]
    pub fn clamped(columns: i64) -> Self {
        usize::try_from(columns)
            .ok()
            .and_then(Self::new)
            .unwrap_or(Self::ONE)
    }

    /// Get the column count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (column, row) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridAddress {
    /// Column, in `[0, width)`
    pub column: usize,
    /// Row
    pub row: usize,
}

impl GridAddress {
    /// Create an address.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Address of linear `index` in a grid `width` columns wide.
    #[must_use]
    pub const fn from_index(index: usize, width: ColumnCount) -> Self {
        Self::new(index % width.get(), index / width.get())
    }

    /// Linear index of this address.
    #[must_use]
    pub const fn to_index(self, width: ColumnCount) -> usize {
        to_index(self.column, self.row, width)
    }
}

/// Linear index of cell `(column, row)`.
#[must_use]
pub const fn to_index(column: usize, row: usize, width: ColumnCount) -> usize {
    row * width.get() + column
}

/// Cell address of linear `index`.
#[must_use]
pub const fn to_address(index: usize, width: ColumnCount) -> GridAddress {
    GridAddress::from_index(index, width)
}

/// Rows needed to show `len` elements plus the append cell.
#[must_use]
pub const fn row_count(len: usize, width: ColumnCount) -> usize {
    len / width.get() + 1
}

/// What occupies a cell, given the list length at the time it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Holds the element at this index
    Element,
    /// The trailing "+" cell
    Append,
    /// Past the append cell; background only
    Empty,
}

impl CellKind {
    /// Classify linear `index` against a list of length `len`.
    #[must_use]
    pub const fn classify(index: usize, len: usize) -> Self {
        if index < len {
            Self::Element
        } else if index == len {
            Self::Append
        } else {
            Self::Empty
        }
    }
}
