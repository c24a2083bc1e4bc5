//! Column edit descriptors

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::options::DynamicOptions;
use super::value::CellValue;
use crate::error::DescriptorError;

/// The closed set of inline editor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditKind {
    Text,
    Integer,
    Real,
    Checkbox,
    StaticDropdown,
    DynamicDropdown,
}

impl EditKind {
    /// All edit kinds, in declaration order.
    pub const ALL: [EditKind; 6] = [
        EditKind::Text,
        EditKind::Integer,
        EditKind::Real,
        EditKind::Checkbox,
        EditKind::StaticDropdown,
        EditKind::DynamicDropdown,
    ];

    /// Returns the kebab-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKind::Text => "text",
            EditKind::Integer => "integer",
            EditKind::Real => "real",
            EditKind::Checkbox => "checkbox",
            EditKind::StaticDropdown => "static-dropdown",
            EditKind::DynamicDropdown => "dynamic-dropdown",
        }
    }

    /// Returns `true` for kinds edited through a number input.
    pub fn is_numeric(&self) -> bool {
        matches!(self, EditKind::Integer | EditKind::Real)
    }

    /// Returns `true` for kinds edited through a dropdown.
    pub fn is_dropdown(&self) -> bool {
        matches!(self, EditKind::StaticDropdown | EditKind::DynamicDropdown)
    }
}

impl std::fmt::Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DescriptorError::UnknownEditKind(s.to_string()))
    }
}

/// Which inline editor a column uses, with what that editor needs.
///
/// Produced by [`classify`](crate::introspect::classify). Variants carry only
/// the data their kind requires, so a static dropdown always has options and
/// a dynamic dropdown always has its accessor keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "editKind", rename_all = "kebab-case")]
pub enum ColumnEditDescriptor {
    Text,
    Integer,
    Real,
    Checkbox,
    /// Options fixed by the schema's enumerated value set.
    StaticDropdown { options: Vec<CellValue> },
    /// Options supplied by the caller.
    DynamicDropdown(DynamicOptions),
}

impl ColumnEditDescriptor {
    /// Creates a static dropdown, or `None` when there is nothing to choose.
    pub fn static_dropdown(options: Vec<CellValue>) -> Option<Self> {
        if options.is_empty() {
            None
        } else {
            Some(Self::StaticDropdown { options })
        }
    }

    /// Returns the edit kind of this descriptor.
    pub fn kind(&self) -> EditKind {
        match self {
            ColumnEditDescriptor::Text => EditKind::Text,
            ColumnEditDescriptor::Integer => EditKind::Integer,
            ColumnEditDescriptor::Real => EditKind::Real,
            ColumnEditDescriptor::Checkbox => EditKind::Checkbox,
            ColumnEditDescriptor::StaticDropdown { .. } => EditKind::StaticDropdown,
            ColumnEditDescriptor::DynamicDropdown(_) => EditKind::DynamicDropdown,
        }
    }

    /// Returns the static options, if this is a static dropdown.
    pub fn static_options(&self) -> Option<&[CellValue]> {
        match self {
            ColumnEditDescriptor::StaticDropdown { options } => Some(options),
            _ => None,
        }
    }

    /// Returns the dynamic option set, if this is a dynamic dropdown.
    pub fn dynamic_options(&self) -> Option<&DynamicOptions> {
        match self {
            ColumnEditDescriptor::DynamicDropdown(options) => Some(options),
            _ => None,
        }
    }
}
