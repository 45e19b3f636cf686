//! Draw commands recorded from canvas calls.

use crate::widget::{CursorIcon, TextStyle};
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Stroked rectangle outline
    StrokeRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Top-left corner of the text run
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Begin clipping to `bounds`
    PushClip {
        /// Clip bounds
        bounds: Rect,
    },
    /// End the innermost clip
    PopClip,
    /// Cursor hint for a hover region
    Cursor {
        /// Hover region
        bounds: Rect,
        /// Cursor shown inside the region
        cursor: CursorIcon,
    },
}

impl DrawCommand {
    /// Bounds touched by the command, if it has any.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect> {
        match self {
            Self::FillRect { bounds, .. }
            | Self::StrokeRect { bounds, .. }
            | Self::PushClip { bounds }
            | Self::Cursor { bounds, .. } => Some(*bounds),
            Self::Text { .. } | Self::PopClip => None,
        }
    }

    /// Text content, for text commands.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
