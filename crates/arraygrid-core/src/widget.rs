//! Widget identity and the canvas abstraction the grid paints through.
//!
//! A grid never owns a window or a renderer. Each pass it is handed a
//! [`Canvas`] by the host and issues primitive draw calls against it, and it
//! is identified across passes by a [`WidgetId`] that the host derives from
//! the object being inspected and the path of the field holding the list.
//!
//! # Examples
//!
//! ```
//! use arraygrid_core::WidgetId;
//!
//! let a = WidgetId::from_path(&42_u64, "levels.tiles");
//! let b = WidgetId::from_path(&42_u64, "levels.tiles");
//! let c = WidgetId::from_path(&42_u64, "levels.props");
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! ```

use crate::geometry::{Point, Rect};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable identity of one logical grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive an ID from the owning object's identity and the field path.
    ///
    /// The same `(owner, path)` pair yields the same ID for the life of the
    /// process.
    #[must_use]
    pub fn from_path<O: Hash + ?Sized>(owner: &O, path: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        owner.hash(&mut hasher);
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Cursor shape a host shows while the pointer hovers a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorIcon {
    /// Default arrow
    Default,
    /// Horizontal resize arrows
    ResizeHorizontal,
}

/// Drawing surface supplied by the host for one pass.
///
/// Coordinates are host coordinates; the grid never transforms them.
pub trait Canvas {
    /// Fill `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a `width`-wide line.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a single line of `text` with its top-left at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);

    /// End the innermost clip.
    fn pop_clip(&mut self);

    /// Register a region that shows `cursor` while hovered.
    ///
    /// Hosts without cursor control can ignore this.
    fn cursor_region(&mut self, rect: Rect, cursor: CursorIcon) {
        let _ = (rect, cursor);
    }
}

/// How a text run looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Size in host units
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Bold (700)
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_from_path_is_stable() {
        let owner = "Level01";
        assert_eq!(
            WidgetId::from_path(owner, "tiles"),
            WidgetId::from_path(owner, "tiles")
        );
    }

    #[test]
    fn test_widget_id_distinguishes_owner_and_path() {
        let a = WidgetId::from_path("Level01", "tiles");
        assert_ne!(a, WidgetId::from_path("Level02", "tiles"));
        assert_ne!(a, WidgetId::from_path("Level01", "props"));
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.color, Color::BLACK);
    }
}
