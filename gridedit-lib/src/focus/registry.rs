//! Registry of mounted cell editors.

use std::collections::HashMap;
use std::rc::Rc;
use std::rc::Weak;

/// A mounted inline editor that can be opened programmatically.
///
/// Implemented by the renderer's popup editor component.
pub trait EditorHandle {
    /// Opens the editor and gives it keyboard focus.
    fn activate(&self);
}

impl<F: Fn()> EditorHandle for F {
    fn activate(&self) {
        self()
    }
}

/// Coordinates of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: usize,
    pub column: String,
}

impl CellKey {
    /// Create a new cell key
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.row, self.column)
    }
}

/// Maps cell coordinates to the editor mounted there.
///
/// Holds weak references only: editors belong to the renderer's component
/// tree, and a dropped editor simply stops resolving. Misses are expected
/// (read-only columns, rows not mounted by a virtualized renderer).
pub struct FocusRegistry<H: ?Sized> {
    rows: HashMap<usize, HashMap<String, Weak<H>>>,
}

impl<H: ?Sized> Default for FocusRegistry<H> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<H: ?Sized> std::fmt::Debug for FocusRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<CellKey> = self
            .rows
            .iter()
            .flat_map(|(row, columns)| columns.keys().map(move |column| CellKey::new(*row, column.as_str())))
            .collect();
        keys.sort();
        f.debug_struct("FocusRegistry").field("cells", &keys).finish()
    }
}

impl<H: ?Sized> FocusRegistry<H> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the editor mounted at `(row, column)`, replacing any previous one.
    pub fn register(&mut self, row: usize, column: impl Into<String>, handle: &Rc<H>) {
        self.rows
            .entry(row)
            .or_default()
            .insert(column.into(), Rc::downgrade(handle));
    }

    /// Forget the editor at `(row, column)`.
    /// Returns true if an entry was removed.
    pub fn unregister(&mut self, row: usize, column: &str) -> bool {
        let Some(columns) = self.rows.get_mut(&row) else {
            return false;
        };
        let removed = columns.remove(column).is_some();
        if columns.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    /// Forget every editor in `row`, e.g. when a virtualized row scrolls out.
    /// Returns the number of entries removed.
    pub fn unregister_row(&mut self, row: usize) -> usize {
        self.rows.remove(&row).map_or(0, |columns| columns.len())
    }

    /// Look up the live editor at `(row, column)`.
    pub fn get(&self, row: usize, column: &str) -> Option<Rc<H>> {
        self.rows.get(&row)?.get(column)?.upgrade()
    }

    /// Returns true if a live editor is mounted at `(row, column)`.
    pub fn contains(&self, row: usize, column: &str) -> bool {
        self.get(row, column).is_some()
    }

    /// Drop entries whose editor no longer exists.
    /// Returns the number of entries removed.
    pub fn prune(&mut self) -> usize {
        let mut removed = 0;
        self.rows.retain(|_, columns| {
            let before = columns.len();
            columns.retain(|_, handle| handle.strong_count() > 0);
            removed += before - columns.len();
            !columns.is_empty()
        });
        removed
    }

    /// Number of entries, live or stale.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Forget every editor.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
