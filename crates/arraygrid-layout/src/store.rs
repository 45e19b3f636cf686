//! Layout state storage keyed by widget identity.

use crate::state::LayoutState;
use arraygrid_core::WidgetId;
use std::collections::HashMap;
use tracing::debug;

/// Keeps each grid's [`LayoutState`] alive between passes.
///
/// Entries are never evicted automatically; hosts call [`StateStore::evict`]
/// when a grid goes away for good.
#[derive(Debug, Default)]
pub struct StateStore {
    entries: HashMap<WidgetId, LayoutState>,
    hits: usize,
    misses: usize,
}

impl StateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the state for `id`, creating an uninitialized one on first use.
    pub fn get_or_create(&mut self, id: WidgetId) -> &mut LayoutState {
        if self.entries.contains_key(&id) {
            self.hits += 1;
        } else {
            self.misses += 1;
            debug!(widget = id.0, "creating layout state");
        }
        self.entries.entry(id).or_default()
    }

    /// Look up the state for `id` without touching statistics.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&LayoutState> {
        self.entries.get(&id)
    }

    /// Drop the state for `id`, returning it if present.
    pub fn evict(&mut self, id: WidgetId) -> Option<LayoutState> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            debug!(widget = id.0, "evicted layout state");
        }
        removed
    }

    /// Whether a state exists for `id`.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Drop every state and reset statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Lookups that found an existing state.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to create a state.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
