//! Keyboard focus traversal across a grid of inline editors.
//!
//! The renderer registers an [`EditorHandle`] for every editable cell it
//! mounts and unregisters it on unmount. The [`FocusNavigator`] walks the
//! grid in reading order from the current cell and activates the first
//! registered editor it meets.

mod navigator;
mod registry;

pub use navigator::*;
pub use registry::*;
