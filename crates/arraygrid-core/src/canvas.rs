//! A canvas that keeps what was painted instead of painting it.

use crate::draw::DrawCommand;
use crate::widget::{Canvas, CursorIcon, TextStyle};
use crate::{Color, Point, Rect};

/// Records every canvas call as a [`DrawCommand`], in call order.
///
/// Headless hosts replay the log; tests inspect it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    log: Vec<DrawCommand>,
    clips: Vec<Rect>,
}

impl RecordingCanvas {
    /// Empty log, no clip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded since the last [`clear`](Self::clear).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.log
    }

    /// Text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.log.iter().filter_map(DrawCommand::text)
    }

    /// Innermost active clip.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Start a new frame: drop the log and any unbalanced clips.
    pub fn clear(&mut self) {
        self.log.clear();
        self.clips.clear();
    }

    fn record(&mut self, command: DrawCommand) {
        self.log.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.record(DrawCommand::FillRect { bounds, color });
    }

    fn stroke_rect(&mut self, bounds: Rect, color: Color, width: f32) {
        self.record(DrawCommand::StrokeRect {
            bounds,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_owned(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, bounds: Rect) {
        self.clips.push(bounds);
        self.record(DrawCommand::PushClip { bounds });
    }

    // Unbalanced pops are dropped so the log always nests.
    fn pop_clip(&mut self) {
        if self.clips.pop().is_some() {
            self.record(DrawCommand::PopClip);
        }
    }

    fn cursor_region(&mut self, bounds: Rect, cursor: CursorIcon) {
        self.record(DrawCommand::Cursor { bounds, cursor });
    }
}
