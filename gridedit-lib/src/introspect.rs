//! Schema introspection
//!
//! Maps a column schema to the inline editor the grid shows for it. The
//! decision order is fixed:
//!
//! 1. a caller-supplied [`DynamicOptions`] override always wins,
//! 2. a non-empty enumerated value set gives a static dropdown,
//! 3. otherwise the resolved primitive type picks the editor,
//!    falling back to plain text.

use crate::model::ColumnEditDescriptor;
use crate::model::DynamicOptions;
use crate::model::NormalizeSchema;
use crate::model::PrimitiveType;

/// Classifies a column schema into its edit descriptor.
///
/// Never fails: schemas without usable shape information get a text editor.
/// The result depends only on the inputs, so it can be computed once per
/// column definition and reused.
///
/// # Example
///
/// ```
/// use gridedit_lib::introspect::classify;
/// use gridedit_lib::model::{EditKind, PrimitiveType, TypeDescriptor};
///
/// let nullable_count = TypeDescriptor::union([PrimitiveType::Null, PrimitiveType::Integer]);
/// assert_eq!(classify(&nullable_count, None).kind(), EditKind::Integer);
/// ```
pub fn classify<S>(schema: &S, dynamic: Option<&DynamicOptions>) -> ColumnEditDescriptor
where
    S: NormalizeSchema + ?Sized,
{
    if let Some(options) = dynamic {
        return ColumnEditDescriptor::DynamicDropdown(options.clone());
    }

    let Some(descriptor) = schema.type_descriptor() else {
        log::trace!("[introspect] no type descriptor, defaulting to text");
        return ColumnEditDescriptor::Text;
    };

    if let Some(values) = descriptor.enumerated() {
        return ColumnEditDescriptor::StaticDropdown {
            options: values.to_vec(),
        };
    }

    let edit = descriptor
        .primitive()
        .map(edit_for_primitive)
        .unwrap_or(ColumnEditDescriptor::Text);

    log::trace!(
        "[introspect] type={:?} -> {}",
        descriptor.primitive().map(PrimitiveType::as_str),
        edit.kind()
    );
    edit
}

/// Maps a resolved primitive type to its editor.
pub fn edit_for_primitive(ty: &PrimitiveType) -> ColumnEditDescriptor {
    match ty {
        PrimitiveType::String => ColumnEditDescriptor::Text,
        PrimitiveType::Boolean => ColumnEditDescriptor::Checkbox,
        PrimitiveType::Integer => ColumnEditDescriptor::Integer,
        PrimitiveType::Number => ColumnEditDescriptor::Real,
        PrimitiveType::Null | PrimitiveType::Other(_) => ColumnEditDescriptor::Text,
    }
}
