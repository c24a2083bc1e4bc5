//! Grid configuration

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::numeric::EmptyInput;

/// Per-grid behaviour settings.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```
/// use gridedit_lib::config::GridConfig;
/// use gridedit_lib::numeric::EmptyInput;
///
/// let config = GridConfig::default()
///     .with_lookahead_rows(2)
///     .with_empty_input(EmptyInput::Absent);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Upper bound on cells inspected by one navigation request.
    ///
    /// Default: 1000
    pub max_checks: usize,

    /// How many rows past the current one a navigation request may search.
    ///
    /// Default: 1
    pub lookahead_rows: usize,

    /// How empty numeric input is stored.
    ///
    /// Default: [`EmptyInput::Zero`]
    pub empty_input: EmptyInput,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_checks: 1000,
            lookahead_rows: 1,
            empty_input: EmptyInput::Zero,
        }
    }
}

impl GridConfig {
    /// Creates a new grid config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the navigation check limit.
    pub fn with_max_checks(mut self, max_checks: usize) -> Self {
        self.max_checks = max_checks;
        self
    }

    /// Sets the navigation lookahead window.
    pub fn with_lookahead_rows(mut self, rows: usize) -> Self {
        self.lookahead_rows = rows;
        self
    }

    /// Sets the empty numeric input policy.
    pub fn with_empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Checks that the config can drive a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_checks == 0 {
            return Err(ConfigError::invalid("max_checks", "must be at least 1"));
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
