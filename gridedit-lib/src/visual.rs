//! Visual properties handed to inline editors

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::ColumnEditDescriptor;
use crate::model::EditKind;

/// Lookup key for [`visual_props`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKey {
    /// The editor of a column.
    Edit(EditKind),
    /// The rows-per-page selector of the grid footer.
    RowsPerPage,
}

impl From<EditKind> for VisualKey {
    fn from(kind: EditKind) -> Self {
        VisualKey::Edit(kind)
    }
}

/// Rendering flags for one editor.
///
/// Serialized with the host component's property names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisualProps {
    pub dense: bool,
    #[serde(rename = "optionsDense")]
    pub options_dense: bool,
    pub borderless: bool,
    /// Emit the option's value rather than the whole option.
    #[serde(rename = "emit-value")]
    pub emit_value: bool,
    /// Map the model value back to its option for display.
    #[serde(rename = "map-options")]
    pub map_options: bool,
    #[serde(rename = "autoFocus")]
    pub autofocus: bool,
    #[serde(rename = "option-label", skip_serializing_if = "Option::is_none")]
    pub option_label: Option<String>,
    #[serde(rename = "option-value", skip_serializing_if = "Option::is_none")]
    pub option_value: Option<String>,
}

/// A visual property value: a flag or an accessor key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Str(String),
}

impl VisualProps {
    const fn flags(
        dense: bool,
        options_dense: bool,
        borderless: bool,
        emit_value: bool,
        map_options: bool,
        autofocus: bool,
    ) -> Self {
        Self {
            dense,
            options_dense,
            borderless,
            emit_value,
            map_options,
            autofocus,
            option_label: None,
            option_value: None,
        }
    }

    /// Returns the properties as a flag-name to value mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, PropValue> {
        let mut map = BTreeMap::from([
            ("dense", PropValue::Bool(self.dense)),
            ("optionsDense", PropValue::Bool(self.options_dense)),
            ("borderless", PropValue::Bool(self.borderless)),
            ("emit-value", PropValue::Bool(self.emit_value)),
            ("map-options", PropValue::Bool(self.map_options)),
            ("autoFocus", PropValue::Bool(self.autofocus)),
        ]);
        if let Some(label) = &self.option_label {
            map.insert("option-label", PropValue::Str(label.clone()));
        }
        if let Some(value) = &self.option_value {
            map.insert("option-value", PropValue::Str(value.clone()));
        }
        map
    }
}

/// Returns the fixed flag bundle for `key`.
///
/// | key              | dense | optionsDense | borderless | emit-value | map-options | autoFocus |
/// |------------------|-------|--------------|------------|------------|-------------|-----------|
/// | checkbox         | yes   |              |            |            |             |           |
/// | static-dropdown  | yes   | yes          | yes        |            |             |           |
/// | dynamic-dropdown | yes   | yes          | yes        | yes        | yes         |           |
/// | text/integer/real| yes   |              |            |            |             | yes       |
/// | rows-per-page    | yes   | yes          | yes        |            |             |           |
pub fn visual_props(key: impl Into<VisualKey>) -> VisualProps {
    match key.into() {
        VisualKey::Edit(EditKind::Checkbox) => VisualProps::flags(true, false, false, false, false, false),
        VisualKey::Edit(EditKind::DynamicDropdown) => VisualProps::flags(true, true, true, true, true, false),
        VisualKey::Edit(EditKind::StaticDropdown) | VisualKey::RowsPerPage => {
            VisualProps::flags(true, true, true, false, false, false)
        }
        VisualKey::Edit(EditKind::Text | EditKind::Integer | EditKind::Real) => {
            VisualProps::flags(true, false, false, false, false, true)
        }
    }
}

/// Returns the visual properties for a column's editor.
///
/// Dynamic dropdowns also carry their accessor keys and always emit and map
/// by value.
pub fn visual_props_for(edit: &ColumnEditDescriptor) -> VisualProps {
    let mut props = visual_props(edit.kind());
    if let ColumnEditDescriptor::DynamicDropdown(options) = edit {
        props.option_label = Some(options.label_key().to_string());
        props.option_value = Some(options.value_key().to_string());
        props.emit_value = true;
        props.map_options = true;
    }
    props
}
