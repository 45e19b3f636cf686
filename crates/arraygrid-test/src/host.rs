//! A scripted [`GridHost`] that records everything the engine asks of it.

use arraygrid_core::{Canvas, DrawCommand, Point, RecordingCanvas, WidgetId};
use arraygrid_layout::{GridHost, RelayoutTicket, RowAction};
use std::collections::VecDeque;

/// A context menu the engine opened.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRequest {
    /// Element the menu was opened on
    pub index: usize,
    /// Pointer position at the time
    pub anchor: Point,
    /// Actions offered
    pub actions: Vec<RowAction>,
}

/// Host with a recording canvas, queued menu answers and a relayout queue.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    canvas: RecordingCanvas,
    menu_answers: VecDeque<Option<RowAction>>,
    menus: Vec<MenuRequest>,
    relayouts: VecDeque<RelayoutTicket>,
}

impl ScriptedHost {
    /// Create a host with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next context menu. `None` dismisses it.
    pub fn answer_menu(&mut self, choice: Option<RowAction>) -> &mut Self {
        self.menu_answers.push_back(choice);
        self
    }

    /// Menus opened so far.
    #[must_use]
    pub fn menus(&self) -> &[MenuRequest] {
        &self.menus
    }

    /// The recording canvas.
    #[must_use]
    pub const fn recording(&self) -> &RecordingCanvas {
        &self.canvas
    }

    /// Draw commands from the most recent pass.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        self.canvas.commands()
    }

    /// Forget the previous pass's drawing.
    pub fn begin_frame(&mut self) {
        self.canvas.clear();
    }

    /// Relayout tickets waiting to run.
    #[must_use]
    pub fn pending_relayouts(&self) -> usize {
        self.relayouts.len()
    }

    /// Complete every queued relayout, returning the grids they covered.
    pub fn run_relayouts(&mut self) -> Vec<WidgetId> {
        self.relayouts
            .drain(..)
            .flat_map(|ticket| {
                let widgets = ticket.widgets();
                ticket.complete();
                widgets
            })
            .collect()
    }

    /// Draw commands of the most recent pass as pretty JSON.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.canvas.commands())
    }
}

impl GridHost for ScriptedHost {
    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn show_context_menu(
        &mut self,
        index: usize,
        anchor: Point,
        actions: &[RowAction],
    ) -> Option<RowAction> {
        self.menus.push(MenuRequest {
            index,
            anchor,
            actions: actions.to_vec(),
        });
        self.menu_answers.pop_front().flatten()
    }

    fn defer_relayout(&mut self, ticket: RelayoutTicket) {
        self.relayouts.push_back(ticket);
    }
}
