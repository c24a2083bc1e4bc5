//! Error types

mod config;
mod descriptor;
mod grid;

pub use config::*;
pub use descriptor::*;
pub use grid::*;
