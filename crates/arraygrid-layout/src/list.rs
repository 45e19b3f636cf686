//! The list contract the grid edits through.

/// A flat, index-addressable list the grid displays and edits.
///
/// The grid never owns the data. It reads elements for measuring and
/// rendering, and edits through [`insert_at`](GridList::insert_at) and
/// [`delete_at`](GridList::delete_at), calling
/// [`mark_changed`](GridList::mark_changed) after every edit it makes.
pub trait GridList {
    /// Element type.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the list has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, if in range.
    fn element_at(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable element at `index`, if in range.
    fn element_at_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Insert at `index` a copy of the element currently there, or a default
    /// element when `index == len()`. Returns `false` if `index > len()`.
    fn insert_at(&mut self, index: usize) -> bool;

    /// Remove the element at `index`. Returns `false` if out of range.
    fn delete_at(&mut self, index: usize) -> bool;

    /// Record that the list was modified and its owner needs saving.
    fn mark_changed(&mut self);
}

/// A `Vec` wrapper that counts change notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedVec<T> {
    items: Vec<T>,
    changes: usize,
}

impl<T> TrackedVec<T> {
    /// Wrap `items`.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, changes: 0 }
    }

    /// Elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap the elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Number of `mark_changed` calls since creation or the last
    /// [`take_changed`](Self::take_changed).
    #[must_use]
    pub const fn change_count(&self) -> usize {
        self.changes
    }

    /// Whether any change was recorded.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        self.changes > 0
    }

    /// Report whether anything changed and reset the counter.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changes) > 0
    }
}

impl<T> From<Vec<T>> for TrackedVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone + Default> GridList for TrackedVec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn element_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    fn insert_at(&mut self, index: usize) -> bool {
        let item = match self.items.get(index) {
            Some(existing) => existing.clone(),
            None if index == self.items.len() => T::default(),
            None => return false,
        };
        self.items.insert(index, item);
        true
    }

    fn delete_at(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    fn mark_changed(&mut self) {
        self.changes += 1;
    }
}
