//! Grid scenarios described in TOML.
//!
//! ```
//! use arraygrid_test::GridFixture;
//!
//! let fixture = GridFixture::from_toml_str(r#"
//!     columns = 3
//!     items = ["A", "B", "C", "D"]
//!
//!     [config]
//!     min_width = 80.0
//! "#).unwrap();
//!
//! let mut grid = fixture.harness().unwrap();
//! grid.settle();
//! grid.assert_column_widths(&[80.0, 80.0, 80.0]);
//! ```

use crate::harness::GridHarness;
use arraygrid_layout::{ConfigError, GridConfig};
use serde::Deserialize;
use thiserror::Error;

/// Height of one text line in fixture measurements.
pub const LINE_HEIGHT: f32 = 16.0;

/// Errors loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The TOML source could not be parsed
    #[error("invalid fixture: {0}")]
    Parse(#[from] toml::de::Error),
    /// The embedded grid config is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A list, a column count and an optional config override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridFixture {
    /// Column count as the host would supply it; clamped to at least one
    pub columns: i64,
    /// List contents
    #[serde(default)]
    pub items: Vec<String>,
    /// Engine config
    #[serde(default)]
    pub config: GridConfig,
}

impl GridFixture {
    /// Parse a fixture.
    pub fn from_toml_str(source: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(source)?)
    }

    /// Build a harness for this fixture.
    ///
    /// Elements measure [`LINE_HEIGHT`] per text line.
    pub fn harness(&self) -> Result<GridHarness<String>, FixtureError> {
        self.config.validate()?;
        Ok(GridHarness::new(self.items.clone(), self.columns)
            .with_config(self.config.clone())
            .with_measure(measure_lines))
    }
}

/// [`LINE_HEIGHT`] for every line of `text`, at least one line.
#[must_use]
pub fn measure_lines(text: &String) -> f32 {
    text.lines().count().max(1) as f32 * LINE_HEIGHT
}
