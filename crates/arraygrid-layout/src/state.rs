//! Per-grid geometry that persists across passes.

use crate::config::GridConfig;
use crate::grid_index::{row_count, ColumnCount};
use arraygrid_core::Point;
use tracing::trace;

/// Where the resize interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePhase {
    /// No boundary is being dragged
    #[default]
    Idle,
    /// The right boundary of this column is being dragged
    Resizing(usize),
}

/// What [`LayoutState::reconcile`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Geometry was rebuilt from defaults
    Reset,
    /// Existing geometry was kept, growing or trimming at the tail
    Adjusted,
}

/// Column widths, row heights and resize cursor for one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    resizing: Option<usize>,
    origin: Point,
    initialized: bool,
}

impl LayoutState {
    /// Create an uninitialized state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Column widths, left to right.
    #[must_use]
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// Row heights, top to bottom, excluding the header.
    #[must_use]
    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }

    /// Column whose boundary is being dragged.
    #[must_use]
    pub const fn resizing(&self) -> Option<usize> {
        self.resizing
    }

    /// Current resize phase.
    #[must_use]
    pub const fn phase(&self) -> ResizePhase {
        match self.resizing {
            Some(column) => ResizePhase::Resizing(column),
            None => ResizePhase::Idle,
        }
    }

    /// Top-left corner of the grid.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Whether geometry has been built.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Sum of column widths.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Header plus every row plus bottom padding.
    #[must_use]
    pub fn total_height(&self, config: &GridConfig) -> f32 {
        config.header_height + self.row_heights.iter().sum::<f32>() + config.bottom_padding
    }

    /// Bring geometry in line with the list length and column count.
    ///
    /// A column count change rebuilds everything from defaults. Otherwise
    /// rows and columns are appended or dropped at the tail only; surviving
    /// entries keep their values.
    pub fn reconcile(
        &mut self,
        columns: ColumnCount,
        len: usize,
        origin: Point,
        config: &GridConfig,
    ) -> Reconciled {
        let rows = row_count(len, columns);
        let width = columns.get();
        let outcome = if !self.initialized || self.column_widths.len() != width {
            self.column_widths = vec![config.min_width; width];
            self.row_heights = vec![config.min_height; rows];
            self.resizing = None;
            self.initialized = true;
            Reconciled::Reset
        } else {
            if self.row_heights.len() != rows {
                trace!(from = self.row_heights.len(), to = rows, "resizing row table");
                self.row_heights.resize(rows, config.min_height);
            }
            Reconciled::Adjusted
        };
        self.origin = origin;
        outcome
    }

    pub(crate) fn column_widths_mut(&mut self) -> &mut [f32] {
        &mut self.column_widths
    }

    pub(crate) fn set_resizing(&mut self, column: Option<usize>) {
        self.resizing = column;
    }

    pub(crate) fn set_row_heights(&mut self, heights: Vec<f32>) {
        self.row_heights = heights;
    }
}
