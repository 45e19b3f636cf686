//! Row actions offered from a cell's context menu.

use crate::list::GridList;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// An edit applied to the element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowAction {
    /// Remove the element
    Delete,
    /// Insert a copy of the element at the same index
    Duplicate,
}

impl RowAction {
    /// Every action, in menu order.
    pub const ALL: [Self; 2] = [Self::Delete, Self::Duplicate];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Duplicate => "Duplicate",
        }
    }

    /// Apply to the element at `index`, marking the list changed on success.
    pub fn apply<L: GridList + ?Sized>(self, list: &mut L, index: usize) -> bool {
        if index >= list.len() {
            return false;
        }
        let applied = match self {
            Self::Delete => list.delete_at(index),
            Self::Duplicate => list.insert_at(index),
        };
        if applied {
            debug!(action = self.label(), index, "row action applied");
            list.mark_changed();
        }
        applied
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
