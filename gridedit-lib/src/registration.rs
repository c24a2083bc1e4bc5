//! Registration of grid components into a host's boot sequence.
//!
//! Components are collected with `inventory`, so any crate linked into the
//! host can contribute one. The host calls
//! [`BootSequence::extend_with_registered`] while it assembles its build
//! configuration.

use serde::Deserialize;
use serde::Serialize;

/// Component name the schema-driven grid registers under.
pub const GRID_COMPONENT: &str = "SchemaGrid";

/// Boot bundle that installs the grid component into the host.
pub const GRID_BUNDLE: &str = "gridedit/boot/register";

/// Component registration entry for inventory.
#[derive(Debug)]
pub struct ComponentRegistration {
    /// Component name used in templates.
    pub name: &'static str,
    /// Boot bundle the host loads to install the component.
    pub bundle: &'static str,
}

impl ComponentRegistration {
    /// Create a new component registration.
    pub const fn new(name: &'static str, bundle: &'static str) -> Self {
        Self { name, bundle }
    }
}

inventory::collect!(ComponentRegistration);

inventory::submit! {
    ComponentRegistration::new(GRID_COMPONENT, GRID_BUNDLE)
}

/// Get all registered components.
pub fn registered_components() -> impl Iterator<Item = &'static ComponentRegistration> {
    inventory::iter::<ComponentRegistration>()
}

/// The ordered list of boot bundles a host runs at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BootSequence {
    entries: Vec<String>,
}

impl BootSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, bundle: &str) -> bool {
        self.entries.iter().any(|entry| entry == bundle)
    }

    /// Append `bundle` unless it is already present.
    /// Returns true if it was appended.
    pub fn push(&mut self, bundle: impl Into<String>) -> bool {
        let bundle = bundle.into();
        if self.contains(&bundle) {
            return false;
        }
        self.entries.push(bundle);
        true
    }

    /// Append the bundle of every registered component.
    /// Returns the number of bundles appended.
    pub fn extend_with_registered(&mut self) -> usize {
        let mut appended = 0;
        for registration in registered_components() {
            if self.push(registration.bundle) {
                log::debug!(
                    "[boot] registered {} via {}",
                    registration.name,
                    registration.bundle
                );
                appended += 1;
            }
        }
        appended
    }
}

impl From<Vec<String>> for BootSequence {
    fn from(entries: Vec<String>) -> Self {
        let mut sequence = Self::new();
        for entry in entries {
            sequence.push(entry);
        }
        sequence
    }
}
