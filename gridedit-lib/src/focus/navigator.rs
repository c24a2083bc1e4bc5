//! Reading-order focus traversal.

use std::rc::Rc;

use serde::Deserialize;
use serde::Serialize;

use super::registry::CellKey;
use super::registry::EditorHandle;
use super::registry::FocusRegistry;
use crate::config::GridConfig;
use crate::edit::PendingNavigation;

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right, then down (Tab, Enter).
    Next,
    /// Right to left, then up (Shift+Tab).
    Prev,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Next => Direction::Prev,
            Direction::Prev => Direction::Next,
        }
    }
}

/// A request to move editing focus away from a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub row: usize,
    pub column: String,
    pub direction: Direction,
}

impl NavigationRequest {
    pub fn new(row: usize, column: impl Into<String>, direction: Direction) -> Self {
        Self {
            row,
            column: column.into(),
            direction,
        }
    }
}

/// Moves editing focus between registered cell editors.
///
/// Owns the [`FocusRegistry`] of one grid. Each request is handled to
/// completion: exactly one editor is activated, or none.
pub struct FocusNavigator<H: ?Sized = dyn EditorHandle> {
    registry: FocusRegistry<H>,
    max_checks: usize,
    lookahead_rows: usize,
}

impl<H: ?Sized> std::fmt::Debug for FocusNavigator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusNavigator")
            .field("registry", &self.registry)
            .field("max_checks", &self.max_checks)
            .field("lookahead_rows", &self.lookahead_rows)
            .finish()
    }
}

impl<H: ?Sized> Default for FocusNavigator<H> {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

impl<H: ?Sized> FocusNavigator<H> {
    /// Create a navigator with the traversal bounds from `config`.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            registry: FocusRegistry::new(),
            max_checks: config.max_checks,
            lookahead_rows: config.lookahead_rows,
        }
    }

    pub fn registry(&self) -> &FocusRegistry<H> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FocusRegistry<H> {
        &mut self.registry
    }

    /// Find the next registered editor from `request` without activating it.
    ///
    /// `visible_columns` is the current left-to-right column order. The search
    /// steps one cell at a time, wrapping to the next or previous row, and
    /// stops at the first live editor. It gives up when it leaves the
    /// lookahead window, runs above row 0, or exhausts `max_checks`.
    pub fn find_target<S: AsRef<str>>(
        &self,
        request: &NavigationRequest,
        visible_columns: &[S],
    ) -> Option<(CellKey, Rc<H>)> {
        let Some(origin_col) = visible_columns
            .iter()
            .position(|c| c.as_ref() == request.column)
        else {
            log::debug!(
                "[focus] column {} is not visible, nothing to move from",
                request.column
            );
            return None;
        };

        let width = visible_columns.len();
        let mut row = request.row;
        let mut col = origin_col;

        for _ in 0..self.max_checks {
            let Some((next_row, next_col)) = Self::step(request.direction, row, col, width) else {
                log::debug!("[focus] reached row 0 from {}_{}", request.row, request.column);
                return None;
            };
            row = next_row;
            col = next_col;

            if !self.within_window(request.direction, request.row, row) {
                log::debug!(
                    "[focus] no editor within {} row(s) of {}_{} going {:?}",
                    self.lookahead_rows,
                    request.row,
                    request.column,
                    request.direction
                );
                return None;
            }

            let column = visible_columns[col].as_ref();
            if let Some(handle) = self.registry.get(row, column) {
                return Some((CellKey::new(row, column), handle));
            }
            log::trace!("[focus]   skipping {}_{}", row, column);
        }

        log::debug!(
            "[focus] gave up after {} checks from {}_{}",
            self.max_checks,
            request.row,
            request.column
        );
        None
    }

    /// One cell further in reading order, wrapping across rows.
    /// `None` once the walk would leave the row index range.
    fn step(direction: Direction, row: usize, col: usize, width: usize) -> Option<(usize, usize)> {
        match direction {
            Direction::Next if col + 1 >= width => Some((row.checked_add(1)?, 0)),
            Direction::Next => Some((row, col + 1)),
            Direction::Prev if col == 0 => Some((row.checked_sub(1)?, width - 1)),
            Direction::Prev => Some((row, col - 1)),
        }
    }

    fn within_window(&self, direction: Direction, origin_row: usize, row: usize) -> bool {
        let distance = match direction {
            Direction::Next => row.saturating_sub(origin_row),
            Direction::Prev => origin_row.saturating_sub(row),
        };
        distance <= self.lookahead_rows
    }
}

impl<H: EditorHandle + ?Sized> FocusNavigator<H> {
    /// Activate the next registered editor from `request`.
    /// Returns the cell that received focus, if any.
    pub fn move_focus<S: AsRef<str>>(
        &self,
        request: &NavigationRequest,
        visible_columns: &[S],
    ) -> Option<CellKey> {
        let (key, handle) = self.find_target(request, visible_columns)?;
        log::debug!(
            "[focus] {}_{} {:?} -> {}",
            request.row,
            request.column,
            request.direction,
            key
        );
        handle.activate();
        Some(key)
    }

    /// Run the navigation half of a commit-and-move.
    ///
    /// Call this once the renderer has closed the committed editor and
    /// registered the editors mounted in its place.
    pub fn complete<S: AsRef<str>>(
        &self,
        pending: PendingNavigation,
        visible_columns: &[S],
    ) -> Option<CellKey> {
        self.move_focus(pending.request(), visible_columns)
    }
}
