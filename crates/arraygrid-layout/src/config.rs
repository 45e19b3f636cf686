//! Engine-wide sizing configuration.

use crate::error::{ConfigError, Result};
use arraygrid_core::{Insets, Size};
use serde::{Deserialize, Serialize};

/// Sizing constants shared by every grid an engine lays out.
///
/// Missing fields take their defaults when deserialized, so a TOML file only
/// needs to list what it overrides:
///
/// ```
/// use arraygrid_layout::GridConfig;
///
/// let config = GridConfig::from_toml_str("min_width = 120.0").unwrap();
/// assert_eq!(config.min_width, 120.0);
/// assert_eq!(config.min_height, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Narrowest a column can be
    pub min_width: f32,
    /// Shortest a row can be
    pub min_height: f32,
    /// Space below the last row
    pub bottom_padding: f32,
    /// Padding between a cell's edge and its content
    pub cell_padding: Insets,
    /// Height of the column header row
    pub header_height: f32,
    /// Width of a column boundary's drag handle while idle
    pub resize_handle_idle: f32,
    /// Width of the drag handle while that boundary is being dragged
    pub resize_handle_active: f32,
    /// Left indent for elements that carry nested content
    pub nested_indent: f32,
    /// Smallest total-height change that triggers a relayout
    pub height_epsilon: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_width: 100.0,
            min_height: 20.0,
            bottom_padding: 10.0,
            cell_padding: Insets::uniform(2.0),
            header_height: 20.0,
            resize_handle_idle: 6.0,
            resize_handle_active: 50.0,
            nested_indent: 10.0,
            height_epsilon: 0.1,
        }
    }
}

impl GridConfig {
    /// Parse and validate a config from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        positive("min_width", self.min_width)?;
        positive("min_height", self.min_height)?;
        positive("resize_handle_idle", self.resize_handle_idle)?;
        positive("height_epsilon", self.height_epsilon)?;
        non_negative("bottom_padding", self.bottom_padding)?;
        non_negative("header_height", self.header_height)?;
        non_negative("nested_indent", self.nested_indent)?;

        if !self.cell_padding.is_valid() {
            return Err(ConfigError::invalid(
                "cell_padding",
                "every side must be finite and non-negative",
            ));
        }
        if !self.resize_handle_active.is_finite()
            || self.resize_handle_active < self.resize_handle_idle
        {
            return Err(ConfigError::invalid(
                "resize_handle_active",
                format!(
                    "must be at least resize_handle_idle ({}), got {}",
                    self.resize_handle_idle, self.resize_handle_active
                ),
            ));
        }
        if self.append_button_size().width <= 0.0 || self.append_button_size().height <= 0.0 {
            return Err(ConfigError::invalid(
                "min_height",
                "must leave room for the append button (greater than 6)",
            ));
        }
        Ok(())
    }

    /// Size of the "+" button drawn in the append cell.
    #[must_use]
    pub fn append_button_size(&self) -> Size {
        Size::new(self.min_height - 3.0, self.min_height - 6.0)
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be non-negative, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.min_width, 100.0);
        assert_eq!(config.min_height, 20.0);
        assert_eq!(config.bottom_padding, 10.0);
        assert_eq!(config.cell_padding, Insets::uniform(2.0));
        assert_eq!(config.resize_handle_idle, 6.0);
        assert_eq!(config.resize_handle_active, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_append_button_size() {
        assert_eq!(
            GridConfig::default().append_button_size(),
            Size::new(17.0, 14.0)
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GridConfig::from_toml_str(
            r"
            min_height = 24.0
            header_height = 18.0

            [cell_padding]
            left = 4.0
            right = 4.0
            top = 1.0
            bottom = 1.0
            ",
        )
        .unwrap();
        assert_eq!(config.min_height, 24.0);
        assert_eq!(config.header_height, 18.0);
        assert_eq!(config.cell_padding.vertical(), 2.0);
        assert_eq!(config.min_width, 100.0);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(GridConfig::from_toml_str("").unwrap(), GridConfig::default());
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = GridConfig::from_toml_str("min_width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_min_width() {
        let config = GridConfig {
            min_width: 0.0,
            ..GridConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "min_width", .. }));
    }

    #[test]
    fn test_validate_rejects_narrow_active_handle() {
        let config = GridConfig {
            resize_handle_active: 4.0,
            ..GridConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resize_handle_active"));
    }

    #[test]
    fn test_validate_rejects_negative_padding() {
        let config = GridConfig {
            cell_padding: Insets::new(-1.0, 0.0, 0.0, 0.0),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_min_height() {
        let config = GridConfig {
            min_height: 5.0,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "min_height", .. })
        ));
    }
}
