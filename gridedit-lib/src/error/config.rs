//! Grid configuration errors

/// Error type for loading and validating a [`GridConfig`](crate::config::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field holds a value the grid cannot work with.
    #[error("Invalid config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The configuration document is not valid JSON for this shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a new invalid field error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
