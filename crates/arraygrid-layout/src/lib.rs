#![allow(clippy::doc_markdown)]
//! Grid layout engine for flat lists.
//!
//! Presents a list as a table of a fixed number of columns, with a header
//! row, draggable column boundaries, rows sized to their tallest element, a
//! context menu per element and a trailing "+" cell that appends.
//!
//! The engine owns no data. Each pass the host calls [`LayoutEngine::pass`]
//! with:
//!
//! - a [`StateStore`] holding geometry between passes, keyed by [`WidgetId`]
//! - the list, through the [`GridList`] contract
//! - a [`CellMeasure`] and a [`CellRender`] for element content
//! - a [`GridHost`] providing the canvas, menus and deferred relayout
//!
//! # Example
//!
//! ```
//! use arraygrid_core::{Canvas, Point, RecordingCanvas, WidgetId};
//! use arraygrid_layout::{
//!     CellContent, CellRender, ColumnCount, GridFrame, GridHost, LayoutEngine, RelayoutTicket,
//!     RowAction, StateStore, TrackedVec,
//! };
//!
//! struct Host {
//!     canvas: RecordingCanvas,
//!     pending: Vec<RelayoutTicket>,
//! }
//!
//! impl GridHost for Host {
//!     fn canvas(&mut self) -> &mut dyn Canvas {
//!         &mut self.canvas
//!     }
//!     fn show_context_menu(&mut self, _: usize, _: Point, _: &[RowAction]) -> Option<RowAction> {
//!         None
//!     }
//!     fn defer_relayout(&mut self, ticket: RelayoutTicket) {
//!         self.pending.push(ticket);
//!     }
//! }
//!
//! struct Numbers;
//!
//! impl CellRender<i32> for Numbers {
//!     fn render(&mut self, value: &mut i32, content: &CellContent, canvas: &mut dyn Canvas) {
//!         canvas.draw_text(&value.to_string(), content.rect.origin(), &Default::default());
//!     }
//! }
//!
//! let engine = LayoutEngine::default();
//! let mut store = StateStore::new();
//! let mut list = TrackedVec::new(vec![1, 2, 3, 4]);
//! let mut host = Host { canvas: RecordingCanvas::new(), pending: Vec::new() };
//! let id = WidgetId::from_path("level", "tiles");
//!
//! let frame = GridFrame::new(id, Point::ORIGIN, ColumnCount::clamped(3));
//! let outcome = engine.pass(&mut store, frame, &mut list, &|_: &i32| 16.0, &mut Numbers, &mut host);
//!
//! assert_eq!(outcome.height, 70.0);
//! assert_eq!(host.pending.len(), 1);
//! ```

mod actions;
mod cell;
mod config;
mod engine;
mod error;
mod grid_index;
mod host;
mod list;
mod relayout;
pub mod resize;
mod rows;
mod state;
mod store;
mod style;

pub use actions::RowAction;
pub use arraygrid_core::WidgetId;
pub use cell::{label_width, CellContent, CellMeasure, CellRender, LABEL_WIDTH_MAX, LABEL_WIDTH_MIN};
pub use config::GridConfig;
pub use engine::{height_changed, GridFrame, LayoutEngine, PassOutcome};
pub use error::{ConfigError, Result};
pub use grid_index::{row_count, to_address, to_index, CellKind, ColumnCount, GridAddress};
pub use host::GridHost;
pub use list::{GridList, TrackedVec};
pub use relayout::{RelayoutGate, RelayoutTicket};
pub use rows::measure_rows;
pub use state::{LayoutState, Reconciled, ResizePhase};
pub use store::StateStore;
pub use style::GridStyle;
