//! The environment a grid is drawn into.

use crate::actions::RowAction;
use crate::relayout::RelayoutTicket;
use arraygrid_core::{Canvas, Point};

/// Services the host editor provides to each pass.
pub trait GridHost {
    /// Canvas for the current pass.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Show a context menu for the element at `index` anchored at `anchor`
    /// and return the action the user picked, if any.
    fn show_context_menu(
        &mut self,
        index: usize,
        anchor: Point,
        actions: &[RowAction],
    ) -> Option<RowAction>;

    /// Accept a relayout request to run after the current pass.
    fn defer_relayout(&mut self, ticket: RelayoutTicket);
}
