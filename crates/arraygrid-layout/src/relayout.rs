//! Single-flight gate for deferred relayout requests.
//!
//! When a pass changes a grid's total height the host has to lay its panel
//! out again, but never from inside the pass that noticed. The engine hands
//! the host a [`RelayoutTicket`] to hold until its next opportunity. While a
//! ticket is outstanding no further tickets are issued; grids whose height
//! changes in the meantime are added to the outstanding ticket instead.

use arraygrid_core::WidgetId;
use std::cell::RefCell;
use std::rc::Rc;

type Pending = Rc<RefCell<Option<Vec<WidgetId>>>>;

/// Issues at most one outstanding [`RelayoutTicket`] at a time.
#[derive(Debug, Default)]
pub struct RelayoutGate {
    pending: Pending,
}

impl RelayoutGate {
    /// Create an open gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a ticket is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Take a ticket for `widget`.
    ///
    /// Returns `None` if one is already outstanding, after recording `widget`
    /// on it.
    pub fn try_acquire(&self, widget: WidgetId) -> Option<RelayoutTicket> {
        let mut pending = self.pending.borrow_mut();
        if let Some(widgets) = pending.as_mut() {
            if !widgets.contains(&widget) {
                widgets.push(widget);
            }
            return None;
        }
        *pending = Some(vec![widget]);
        Some(RelayoutTicket {
            pending: Rc::clone(&self.pending),
        })
    }
}

/// A pending relayout. Completing or dropping it re-opens the gate.
#[derive(Debug)]
#[must_use = "dropping a ticket discards the relayout request"]
pub struct RelayoutTicket {
    pending: Pending,
}

impl RelayoutTicket {
    /// Grids whose height changed since the ticket was issued, first
    /// requester first.
    #[must_use]
    pub fn widgets(&self) -> Vec<WidgetId> {
        self.pending.borrow().clone().unwrap_or_default()
    }

    /// Mark the relayout as done.
    pub fn complete(self) {
        drop(self);
    }
}

impl Drop for RelayoutTicket {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}
