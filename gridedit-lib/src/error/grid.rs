//! Grid instance errors

use super::ConfigError;

/// Errors surfaced by a [`Grid`](crate::grid::Grid) instance.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The named column is not part of this grid.
    #[error("Column '{0}' not found in grid")]
    UnknownColumn(String),

    /// The column is defined but has no inline editor.
    #[error("Column '{0}' is not editable")]
    ReadOnlyColumn(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GridError {
    /// Creates a new unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(name.into())
    }
}
