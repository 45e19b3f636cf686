//! Column resize interaction.
//!
//! Each column's right boundary has a drag handle centred on it. Pressing the
//! primary button inside a handle starts a drag; dragging moves the boundary
//! to the pointer (never narrower than `min_width`); releasing anywhere ends
//! it. The handle of the boundary being dragged is much wider than an idle
//! one so fast pointer motion does not slip out of it.

use crate::config::GridConfig;
use crate::state::LayoutState;
use arraygrid_core::{Canvas, CursorIcon, EventKind, InputEvent, Rect};
use tracing::debug;

/// Result of processing resize input for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeOutcome {
    /// A drag started or ended
    pub changed: bool,
    /// Bar to paint over the boundary being dragged
    pub highlight: Option<Rect>,
}

/// Drag handle of a boundary at `boundary_x`.
#[must_use]
pub fn handle_rect(boundary_x: f32, top: f32, handle_width: f32, height: f32) -> Rect {
    Rect::new(boundary_x - handle_width / 2.0, top, handle_width, height)
}

/// Run the resize state machine against `event`.
///
/// `hit_height` is how far down from the origin the handles reach. Every
/// handle is registered on `canvas` as a horizontal-resize cursor region.
pub fn process(
    state: &mut LayoutState,
    event: &mut InputEvent,
    config: &GridConfig,
    hit_height: f32,
    canvas: &mut dyn Canvas,
) -> ResizeOutcome {
    let mut outcome = ResizeOutcome::default();

    if event.raw_kind() == EventKind::PointerUp {
        if let Some(column) = state.resizing() {
            debug!(column, "column resize finished");
            state.set_resizing(None);
            outcome.changed = true;
        }
    }

    let origin = state.origin();
    let mut x = origin.x;
    for column in 0..state.column_widths().len() {
        x += state.column_widths()[column];

        let handle_width = if state.resizing() == Some(column) {
            config.resize_handle_active
        } else {
            config.resize_handle_idle
        };
        let handle = handle_rect(x, origin.y, handle_width, hit_height);
        canvas.cursor_region(handle, CursorIcon::ResizeHorizontal);

        if event.is_primary_press() && handle.contains_point(&event.position) {
            debug!(column, "column resize started");
            state.set_resizing(Some(column));
            event.consume();
            outcome.changed = true;
        }

        if state.resizing() != Some(column) {
            continue;
        }

        if event.kind() == EventKind::PointerDrag {
            let widths = state.column_widths_mut();
            let old = widths[column];
            let new = (old - (x - event.position.x)).max(config.min_width);
            widths[column] = new;
            x += new - old;
            event.consume();
        }
        outcome.highlight = Some(Rect::new(x - 2.0, origin.y, 4.0, hit_height));
    }

    outcome
}
