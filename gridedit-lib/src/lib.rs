//! Schema-driven inline editing for data grids
//!
//! Infers the inline editor of each grid column from a validation schema and
//! moves editing focus between cell editors from the keyboard. Rendering,
//! sorting, pagination and persistence stay with the host table component.

pub mod column;
pub mod config;
pub mod edit;
pub mod error;
pub mod focus;
pub mod grid;
pub mod introspect;
pub mod model;
pub mod numeric;
pub mod registration;
pub mod visual;

pub use column::ColumnDefinition;
pub use config::GridConfig;
pub use grid::Grid;
pub use grid::GridId;
pub use introspect::classify;
