//! Caller-supplied option sets for dynamic dropdowns

use serde::Deserialize;
use serde::Serialize;

use crate::error::DescriptorError;
use crate::error::OptionKey;

/// An option set supplied at configuration time, e.g. a foreign-key style
/// reference list.
///
/// Each option is a JSON record; `option_label` and `option_value` name the
/// fields used for display and for the emitted cell value. Both keys are
/// required and must be non-empty.
///
/// # Example
///
/// ```
/// use gridedit_lib::model::DynamicOptions;
/// use serde_json::json;
///
/// let doc_types = DynamicOptions::new(
///     vec![json!({ "id": "bio", "name": "Biologist" })],
///     "name",
///     "id",
/// )
/// .unwrap();
/// assert_eq!(doc_types.value_key(), "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDynamicOptions")]
pub struct DynamicOptions {
    options: Vec<serde_json::Value>,
    option_label: String,
    option_value: String,
}

impl DynamicOptions {
    /// Creates a new option set, rejecting empty accessor keys.
    pub fn new(
        options: Vec<serde_json::Value>,
        option_label: impl Into<String>,
        option_value: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let option_label = option_label.into();
        let option_value = option_value.into();

        if option_label.is_empty() {
            return Err(DescriptorError::empty_key(OptionKey::Label));
        }
        if option_value.is_empty() {
            return Err(DescriptorError::empty_key(OptionKey::Value));
        }

        Ok(Self {
            options,
            option_label,
            option_value,
        })
    }

    /// Returns the options in the order they were supplied.
    pub fn options(&self) -> &[serde_json::Value] {
        &self.options
    }

    /// Returns the field name used for option labels.
    pub fn label_key(&self) -> &str {
        &self.option_label
    }

    /// Returns the field name used for option values.
    pub fn value_key(&self) -> &str {
        &self.option_value
    }

    /// Returns the display label of an option.
    ///
    /// String labels are returned as is, other JSON values are rendered.
    pub fn label_of(&self, option: &serde_json::Value) -> Option<String> {
        option.get(&self.option_label).map(|label| match label {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Returns the value an option emits when selected.
    pub fn value_of<'a>(&self, option: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
        option.get(&self.option_value)
    }

    /// Finds the option whose value equals `value`.
    pub fn find_by_value(&self, value: &serde_json::Value) -> Option<&serde_json::Value> {
        self.options
            .iter()
            .find(|option| self.value_of(option) == Some(value))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDynamicOptions {
    #[serde(default)]
    options: Vec<serde_json::Value>,
    #[serde(default)]
    option_label: String,
    #[serde(default)]
    option_value: String,
}

impl TryFrom<RawDynamicOptions> for DynamicOptions {
    type Error = DescriptorError;

    fn try_from(raw: RawDynamicOptions) -> Result<Self, Self::Error> {
        DynamicOptions::new(raw.options, raw.option_label, raw.option_value)
    }
}
