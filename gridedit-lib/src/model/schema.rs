//! Normalized column type descriptors

use serde::Deserialize;
use serde::Serialize;

use super::value::CellValue;

/// A primitive type name as emitted by JSON Schema.
///
/// Names outside the known set are kept verbatim in [`PrimitiveType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveType {
    String,
    Boolean,
    Integer,
    /// Floating point (`"number"` in JSON Schema).
    Number,
    Null,
    Other(String),
}

impl PrimitiveType {
    /// Returns the JSON Schema name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Null => "null",
            PrimitiveType::Other(name) => name,
        }
    }

    /// Returns `true` for the `null` type.
    pub fn is_null(&self) -> bool {
        matches!(self, PrimitiveType::Null)
    }
}

impl From<&str> for PrimitiveType {
    fn from(name: &str) -> Self {
        match name {
            "string" => PrimitiveType::String,
            "boolean" => PrimitiveType::Boolean,
            "integer" => PrimitiveType::Integer,
            "number" => PrimitiveType::Number,
            "null" => PrimitiveType::Null,
            other => PrimitiveType::Other(other.to_string()),
        }
    }
}

impl From<String> for PrimitiveType {
    fn from(name: String) -> Self {
        PrimitiveType::from(name.as_str())
    }
}

impl From<PrimitiveType> for String {
    fn from(ty: PrimitiveType) -> Self {
        ty.as_str().to_string()
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` of a descriptor: one primitive, or an ordered union of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Single(PrimitiveType),
    /// Candidates in declaration order, e.g. `["string", "null"]`.
    Union(Vec<PrimitiveType>),
}

impl TypeSpec {
    /// Resolves the primitive this type stands for.
    ///
    /// For unions the first non-null candidate wins. A union of only `null`
    /// resolves to nothing.
    pub fn resolve(&self) -> Option<&PrimitiveType> {
        match self {
            TypeSpec::Single(ty) => Some(ty),
            TypeSpec::Union(candidates) => candidates.iter().find(|ty| !ty.is_null()),
        }
    }

    /// Returns `true` if `null` is an accepted candidate.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeSpec::Single(ty) => ty.is_null(),
            TypeSpec::Union(candidates) => candidates.iter().any(PrimitiveType::is_null),
        }
    }

    fn into_candidates(self) -> Vec<PrimitiveType> {
        match self {
            TypeSpec::Single(ty) => vec![ty],
            TypeSpec::Union(candidates) => candidates,
        }
    }
}

/// Normalized type information for one column.
///
/// This is the only view of a column schema the introspector ever looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Declared type or union of types.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeSpec>,

    /// Enumerated value set, in declaration order.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<CellValue>>,
}

impl TypeDescriptor {
    /// Creates a descriptor for a single primitive type.
    pub fn of(ty: PrimitiveType) -> Self {
        Self {
            ty: Some(TypeSpec::Single(ty)),
            enum_values: None,
        }
    }

    /// Creates a descriptor for an ordered union of primitive types.
    pub fn union(candidates: impl IntoIterator<Item = PrimitiveType>) -> Self {
        Self {
            ty: Some(TypeSpec::Union(candidates.into_iter().collect())),
            enum_values: None,
        }
    }

    /// Creates a string descriptor restricted to the given values.
    pub fn enumeration<V: Into<CellValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::of(PrimitiveType::String).with_enum(values)
    }

    /// Sets the enumerated value set.
    pub fn with_enum<V: Into<CellValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the resolved primitive type, if any.
    pub fn primitive(&self) -> Option<&PrimitiveType> {
        self.ty.as_ref().and_then(TypeSpec::resolve)
    }

    /// Returns the enumerated values if the set is present and non-empty.
    pub fn enumerated(&self) -> Option<&[CellValue]> {
        self.enum_values.as_deref().filter(|values| !values.is_empty())
    }
}

/// Capability to normalize a column schema into a [`TypeDescriptor`].
///
/// Implement this as an adapter around whichever validation library defines
/// the grid's row shape. Returning `None` means "no shape information", which
/// the introspector treats as plain text.
pub trait NormalizeSchema {
    /// Produces the normalized type descriptor for this schema.
    fn type_descriptor(&self) -> Option<TypeDescriptor>;
}

impl NormalizeSchema for TypeDescriptor {
    fn type_descriptor(&self) -> Option<TypeDescriptor> {
        Some(self.clone())
    }
}

impl<T: NormalizeSchema + ?Sized> NormalizeSchema for &T {
    fn type_descriptor(&self) -> Option<TypeDescriptor> {
        (**self).type_descriptor()
    }
}

impl<T: NormalizeSchema> NormalizeSchema for Option<T> {
    fn type_descriptor(&self) -> Option<TypeDescriptor> {
        self.as_ref().and_then(NormalizeSchema::type_descriptor)
    }
}

/// JSON Schema adapter.
///
/// Reads `type` (a name or an array of names) and `enum`. Nullable schemas
/// emitted as `anyOf`/`oneOf` branches are folded into an ordered union, with
/// the first branch `enum` taken as the value set.
impl NormalizeSchema for serde_json::Value {
    fn type_descriptor(&self) -> Option<TypeDescriptor> {
        let object = self.as_object()?;

        let mut ty = object.get("type").and_then(|raw| {
            serde_json::from_value::<TypeSpec>(raw.clone())
                .inspect_err(|e| log::debug!("[schema] ignoring unreadable type {}: {}", raw, e))
                .ok()
        });
        let mut enum_values = object
            .get("enum")
            .and_then(serde_json::Value::as_array)
            .map(|values| values.iter().cloned().map(CellValue::from).collect::<Vec<_>>());

        if ty.is_none() {
            let branches = object
                .get("anyOf")
                .or_else(|| object.get("oneOf"))
                .and_then(serde_json::Value::as_array);

            if let Some(branches) = branches {
                let mut candidates = Vec::new();
                for branch in branches.iter().filter_map(|branch| branch.type_descriptor()) {
                    if enum_values.is_none() {
                        enum_values = branch.enum_values;
                    }
                    if let Some(spec) = branch.ty {
                        candidates.extend(spec.into_candidates());
                    }
                }
                ty = match candidates.len() {
                    0 => None,
                    1 => candidates.pop().map(TypeSpec::Single),
                    _ => Some(TypeSpec::Union(candidates)),
                };
            }
        }

        Some(TypeDescriptor { ty, enum_values })
    }
}
