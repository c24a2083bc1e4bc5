//! Column definitions handed to the table renderer.

use std::collections::HashMap;

use serde::Serialize;

use crate::introspect::classify;
use crate::model::ColumnEditDescriptor;
use crate::model::DynamicOptions;
use crate::model::EditKind;
use crate::model::NormalizeSchema;
use crate::numeric::NumericInputProps;
use crate::numeric::numeric_input_props;
use crate::visual::VisualProps;
use crate::visual::visual_props_for;

/// One grid column with its derived editor configuration merged in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Unique identifier for this column.
    pub name: String,
    /// Header text.
    pub label: String,
    /// Row field the column reads and writes.
    pub field: String,
    /// Whether cells in this column get an inline editor.
    pub editable: bool,
    pub edit: ColumnEditDescriptor,
    pub visual: VisualProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericInputProps>,
}

impl ColumnDefinition {
    /// Derive a column from its schema.
    ///
    /// `dynamic` supplies the option set of a dynamic dropdown and takes
    /// precedence over the schema. Label and field default to `name`.
    pub fn from_schema<S>(name: impl Into<String>, schema: &S, dynamic: Option<&DynamicOptions>) -> Self
    where
        S: NormalizeSchema + ?Sized,
    {
        Self::with_edit(name, classify(schema, dynamic))
    }

    /// Build a column around an already derived edit descriptor.
    pub fn with_edit(name: impl Into<String>, edit: ColumnEditDescriptor) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            field: name.clone(),
            name,
            editable: true,
            visual: visual_props_for(&edit),
            numeric: numeric_input_props(edit.kind()),
            edit,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Show the column without an inline editor.
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn kind(&self) -> EditKind {
        self.edit.kind()
    }
}

/// Derive the columns of a JSON Schema object, in `properties` order.
///
/// A property's `title` becomes the label and `"readOnly": true` makes the
/// column read-only. `overrides` maps column names to dynamic option sets.
/// Anything without `properties` yields no columns.
pub fn columns_from_object_schema(
    schema: &serde_json::Value,
    overrides: &HashMap<String, DynamicOptions>,
) -> Vec<ColumnDefinition> {
    let Some(properties) = schema.get("properties").and_then(serde_json::Value::as_object) else {
        log::debug!("[column] schema has no properties object");
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| {
            let mut column = ColumnDefinition::from_schema(name.as_str(), property, overrides.get(name));
            if let Some(title) = property.get("title").and_then(serde_json::Value::as_str) {
                column = column.with_label(title);
            }
            if property.get("readOnly").and_then(serde_json::Value::as_bool) == Some(true) {
                column = column.read_only();
            }
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numeric_columns_carry_input_props() {
        let column = ColumnDefinition::from_schema("requestCounter", &json!({ "type": "integer" }), None);
        assert_eq!(column.numeric.as_ref().map(|n| n.step), Some("1"));

        let column = ColumnDefinition::from_schema("active", &json!({ "type": "boolean" }), None);
        assert!(column.numeric.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let column = ColumnDefinition::from_schema("name", &json!({ "type": "string" }), None)
            .with_label("Name");
        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(value["label"], json!("Name"));
        assert_eq!(value["edit"]["editKind"], json!("text"));
        assert_eq!(value["visual"]["autoFocus"], json!(true));
        assert!(value.get("numeric").is_none());
    }
}
