//! Per-pass pointer input supplied by the host event loop.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Kind of pointer activity delivered for the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventKind {
    /// Pointer button pressed
    PointerDown,
    /// Pointer button released
    PointerUp,
    /// Pointer moved with a button held
    PointerDrag,
    /// Nothing happened (repaint/layout pass)
    #[default]
    None,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MouseButton {
    /// Left mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

impl MouseButton {
    /// Whether this is the button that drives direct manipulation.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Whether this is the button that opens context menus.
    #[must_use]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// The single input event observed during a pass.
///
/// A grid claims an event with [`InputEvent::consume`]; once consumed the
/// event reads as [`EventKind::None`] for everything processed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InputEvent {
    kind: EventKind,
    /// Button associated with the event
    pub button: MouseButton,
    /// Pointer position in host coordinates
    pub position: Point,
    consumed: bool,
}

impl InputEvent {
    /// Create an event.
    #[must_use]
    pub const fn new(kind: EventKind, button: MouseButton, position: Point) -> Self {
        Self {
            kind,
            button,
            position,
            consumed: false,
        }
    }

    /// An idle pass with no input.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(EventKind::None, MouseButton::Left, Point::ORIGIN)
    }

    /// Pointer pressed with `button` at `position`.
    #[must_use]
    pub const fn pointer_down(position: Point, button: MouseButton) -> Self {
        Self::new(EventKind::PointerDown, button, position)
    }

    /// Pointer released at `position`.
    #[must_use]
    pub const fn pointer_up(position: Point) -> Self {
        Self::new(EventKind::PointerUp, MouseButton::Left, position)
    }

    /// Pointer dragged to `position` with the primary button held.
    #[must_use]
    pub const fn pointer_drag(position: Point) -> Self {
        Self::new(EventKind::PointerDrag, MouseButton::Left, position)
    }

    /// Effective kind; consumed events report [`EventKind::None`].
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        if self.consumed {
            EventKind::None
        } else {
            self.kind
        }
    }

    /// Kind as delivered by the host, ignoring consumption.
    #[must_use]
    pub const fn raw_kind(&self) -> EventKind {
        self.kind
    }

    /// Claim the event so nothing else reacts to it.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// Whether the event has been claimed.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Unconsumed pointer-down with the primary button.
    #[must_use]
    pub fn is_primary_press(&self) -> bool {
        self.kind() == EventKind::PointerDown && self.button.is_primary()
    }

    /// Unconsumed pointer-down with the secondary button.
    #[must_use]
    pub fn is_secondary_press(&self) -> bool {
        self.kind() == EventKind::PointerDown && self.button.is_secondary()
    }
}
