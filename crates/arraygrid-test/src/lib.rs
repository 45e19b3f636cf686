#![allow(clippy::ptr_arg)]
#![allow(clippy::missing_const_for_fn)]
//! Testing harness for arraygrid layouts.
//!
//! - [`ScriptedHost`]: a host that records drawing, answers context menus
//!   from a queue and holds relayout tickets until told to run them
//! - [`GridHarness`]: drives passes over a list with scripted pointer input
//! - [`GridFixture`]: scenarios loaded from TOML

mod fixture;
mod harness;
mod host;

pub use fixture::{measure_lines, FixtureError, GridFixture, LINE_HEIGHT};
pub use harness::{GridHarness, TextCells, MAX_SETTLE_PASSES};
pub use host::{MenuRequest, ScriptedHost};
