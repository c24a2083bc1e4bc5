//! Column descriptor errors

/// Which accessor key of a dynamic option set is affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    /// The key used to read an option's display label.
    Label,
    /// The key used to read an option's emitted value.
    Value,
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKey::Label => write!(f, "option label"),
            OptionKey::Value => write!(f, "option value"),
        }
    }
}

/// Configuration defects in a column's edit descriptor.
///
/// These are raised while a grid is being defined, never while a user is
/// editing cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// A dynamic dropdown was configured without one of its accessor keys.
    #[error("Dynamic dropdown is missing its {which} key")]
    EmptyOptionKey { which: OptionKey },

    /// An edit kind name outside the closed set.
    #[error("Unknown edit kind '{0}'")]
    UnknownEditKind(String),
}

impl DescriptorError {
    /// Creates a new missing accessor key error.
    pub fn empty_key(which: OptionKey) -> Self {
        Self::EmptyOptionKey { which }
    }
}
