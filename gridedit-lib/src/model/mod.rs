//! Data model types
//!
//! This module contains the types the grid reasons about:
//! - [`CellValue`] - primitive values held by cells and static option lists
//! - [`TypeDescriptor`] - normalized type information for one column
//! - [`ColumnEditDescriptor`] - which inline editor a column uses
//! - [`DynamicOptions`] - caller-supplied option sets for dynamic dropdowns

mod descriptor;
mod options;
mod schema;
mod value;

pub use descriptor::*;
pub use options::*;
pub use schema::*;
pub use value::*;
