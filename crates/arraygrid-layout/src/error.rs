//! Error types for grid configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`GridConfig`](crate::GridConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed
    #[error("failed to parse grid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot work with
    #[error("invalid grid config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
