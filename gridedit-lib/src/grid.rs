//! A single editable grid instance.

use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

use uuid::Uuid;

use crate::column::ColumnDefinition;
use crate::column::columns_from_object_schema;
use crate::config::GridConfig;
use crate::edit::EditScope;
use crate::edit::PendingNavigation;
use crate::error::GridError;
use crate::focus::CellKey;
use crate::focus::Direction;
use crate::focus::EditorHandle;
use crate::focus::FocusNavigator;
use crate::focus::NavigationRequest;
use crate::model::CellValue;
use crate::model::DynamicOptions;

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(Uuid);

impl GridId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// One editable grid: its columns, mounted editors and settings.
///
/// All state is per instance, so several grids can be on screen at once.
pub struct Grid<H: ?Sized = dyn EditorHandle> {
    id: GridId,
    columns: Vec<ColumnDefinition>,
    hidden: HashSet<String>,
    navigator: FocusNavigator<H>,
    config: GridConfig,
}

impl<H: ?Sized> std::fmt::Debug for Grid<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("hidden", &self.hidden)
            .field("navigator", &self.navigator)
            .field("config", &self.config)
            .finish()
    }
}

impl<H: ?Sized> Grid<H> {
    /// Create a grid with the default config.
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        let config = GridConfig::default();
        Self {
            id: GridId::new(),
            columns,
            hidden: HashSet::new(),
            navigator: FocusNavigator::new(&config),
            config,
        }
    }

    /// Create a grid with a validated config.
    pub fn with_config(columns: Vec<ColumnDefinition>, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            navigator: FocusNavigator::new(&config),
            config,
            ..Self::new(columns)
        })
    }

    /// Create a grid from a JSON Schema object.
    pub fn from_object_schema(
        schema: &serde_json::Value,
        overrides: &HashMap<String, DynamicOptions>,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        Self::with_config(columns_from_object_schema(schema, overrides), config)
    }

    pub fn id(&self) -> GridId {
        self.id
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All columns in definition order, hidden ones included.
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the visible columns, left to right.
    pub fn visible_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !self.hidden.contains(&c.name))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Show or hide a column.
    pub fn set_hidden(&mut self, name: &str, hidden: bool) -> Result<(), GridError> {
        if self.column(name).is_none() {
            return Err(GridError::unknown_column(name));
        }
        if hidden {
            self.hidden.insert(name.to_string());
        } else {
            self.hidden.remove(name);
        }
        Ok(())
    }

    pub fn navigator(&self) -> &FocusNavigator<H> {
        &self.navigator
    }

    /// Called by the renderer when a cell editor mounts.
    pub fn register_editor(&mut self, row: usize, column: &str, handle: &Rc<H>) {
        self.navigator.registry_mut().register(row, column, handle);
    }

    /// Called by the renderer when a cell editor unmounts.
    pub fn unregister_editor(&mut self, row: usize, column: &str) -> bool {
        self.navigator.registry_mut().unregister(row, column)
    }

    /// Called by the renderer when a whole row unmounts.
    pub fn unregister_row(&mut self, row: usize) -> usize {
        self.navigator.registry_mut().unregister_row(row)
    }

    /// Open an edit scope on a cell holding `value`.
    pub fn begin_edit(&self, row: usize, column: &str, value: CellValue) -> Result<EditScope, GridError> {
        let definition = self
            .column(column)
            .ok_or_else(|| GridError::unknown_column(column))?;
        if !definition.editable {
            return Err(GridError::ReadOnlyColumn(column.to_string()));
        }
        Ok(EditScope::new(CellKey::new(row, column), definition.kind(), value)
            .with_empty_input(self.config.empty_input))
    }
}

impl<H: EditorHandle + ?Sized> Grid<H> {
    /// Move editing focus from `(row, column)` in `direction`.
    pub fn navigate(&self, row: usize, column: &str, direction: Direction) -> Option<CellKey> {
        log::trace!("[grid {}] navigate {}_{} {:?}", self.id, row, column, direction);
        let request = NavigationRequest::new(row, column, direction);
        self.navigator.move_focus(&request, &self.visible_columns())
    }

    /// Finish a commit-and-move once the renderer has settled.
    pub fn complete(&self, pending: PendingNavigation) -> Option<CellKey> {
        self.navigator.complete(pending, &self.visible_columns())
    }
}
