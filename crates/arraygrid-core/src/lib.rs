//! Core types for the arraygrid layout engine.
//!
//! This crate provides the host-facing vocabulary shared by the layout crate
//! and its hosts:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Per-pass pointer input: [`InputEvent`]
//! - Grid identity and painting: [`WidgetId`], [`Canvas`], [`RecordingCanvas`]

mod canvas;
mod color;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::Color;
pub use draw::DrawCommand;
pub use event::{EventKind, InputEvent, MouseButton};
pub use geometry::{Insets, Point, Rect, Size};
pub use widget::{Canvas, CursorIcon, FontWeight, TextStyle, WidgetId};
