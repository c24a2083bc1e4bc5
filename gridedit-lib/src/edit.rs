//! Inline edit scopes and the commit-then-navigate protocol.
//!
//! Closing an editor's popup and mounting the next one happen after a
//! commit, so navigation cannot run in the same step. Committing with
//! [`EditScope::commit_and_move`] hands back a [`PendingNavigation`]; the
//! caller lets the renderer settle, then passes it to
//! [`FocusNavigator::complete`](crate::focus::FocusNavigator::complete).

use crate::focus::CellKey;
use crate::focus::Direction;
use crate::focus::NavigationRequest;
use crate::model::CellValue;
use crate::model::EditKind;
use crate::numeric::EmptyInput;
use crate::numeric::numeric_cell_value;
use crate::numeric::parse_numeric_with;

/// The value being edited in one cell.
///
/// Mirrors the renderer's `{ value, set(), cancel() }` slot handle.
#[derive(Debug, Clone)]
pub struct EditScope {
    cell: CellKey,
    kind: EditKind,
    initial: CellValue,
    value: CellValue,
    empty_input: EmptyInput,
}

impl EditScope {
    /// Open a scope on `cell` holding its current value.
    pub fn new(cell: CellKey, kind: EditKind, value: CellValue) -> Self {
        Self {
            cell,
            kind,
            initial: value.clone(),
            value,
            empty_input: EmptyInput::default(),
        }
    }

    /// Set how empty numeric input is stored.
    pub fn with_empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    pub fn cell(&self) -> &CellKey {
        &self.cell
    }

    pub fn kind(&self) -> EditKind {
        self.kind
    }

    /// The value the cell held when the scope was opened.
    pub fn initial(&self) -> &CellValue {
        &self.initial
    }

    /// The value as currently edited.
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<CellValue>) {
        self.value = value.into();
    }

    /// Store raw text from a number input.
    ///
    /// Numeric editors parse it; other editors keep it unchanged.
    pub fn set_numeric_input(&mut self, raw: impl Into<CellValue>) {
        let raw = raw.into();
        self.value = if self.kind.is_numeric() {
            numeric_cell_value(self.kind, parse_numeric_with(self.empty_input, self.kind, &raw))
        } else {
            raw
        };
    }

    /// Returns true if the value differs from the initial one.
    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    /// Accept the edited value.
    pub fn commit(self) -> CommittedEdit {
        let changed = self.is_dirty();
        CommittedEdit {
            cell: self.cell,
            value: self.value,
            changed,
        }
    }

    /// Discard the edit. Returns the value the cell keeps.
    pub fn cancel(self) -> CellValue {
        self.initial
    }

    /// Accept the edited value and request a move in `direction`.
    ///
    /// The move only happens once the returned [`PendingNavigation`] is
    /// completed against the navigator.
    pub fn commit_and_move(self, direction: Direction) -> PendingNavigation {
        let request = NavigationRequest::new(self.cell.row, self.cell.column.clone(), direction);
        PendingNavigation {
            edit: self.commit(),
            request,
        }
    }
}

/// An accepted edit, ready to be written back to the row.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedEdit {
    pub cell: CellKey,
    pub value: CellValue,
    /// False when the value was committed unchanged.
    pub changed: bool,
}

/// The navigation half of a commit-and-move, waiting for the renderer.
#[derive(Debug, Clone)]
#[must_use = "navigation only happens once the pending request is completed"]
pub struct PendingNavigation {
    edit: CommittedEdit,
    request: NavigationRequest,
}

impl PendingNavigation {
    /// The edit that was committed.
    pub fn edit(&self) -> &CommittedEdit {
        &self.edit
    }

    /// The navigation to run once the renderer has settled.
    pub fn request(&self) -> &NavigationRequest {
        &self.request
    }

    pub fn into_parts(self) -> (CommittedEdit, NavigationRequest) {
        (self.edit, self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(kind: EditKind, value: impl Into<CellValue>) -> EditScope {
        EditScope::new(CellKey::new(0, "requestCounter"), kind, value.into())
    }

    #[test]
    fn test_cancel_keeps_initial_value() {
        let mut edit = scope(EditKind::Text, "Bibber");
        edit.set_value("Pasteur");
        assert!(edit.is_dirty());
        assert_eq!(edit.cancel(), CellValue::from("Bibber"));
    }

    #[test]
    fn test_commit_reports_change() {
        let mut edit = scope(EditKind::Checkbox, true);
        edit.set_value(false);
        let committed = edit.commit();
        assert!(committed.changed);
        assert_eq!(committed.value, CellValue::Bool(false));

        let unchanged = scope(EditKind::Checkbox, true).commit();
        assert!(!unchanged.changed);
    }

    #[test]
    fn test_numeric_input_parses_for_kind() {
        let mut edit = scope(EditKind::Integer, 145i64);
        edit.set_numeric_input("42.9");
        assert_eq!(edit.value(), &CellValue::Int(42));

        let mut edit = scope(EditKind::Real, 1.5);
        edit.set_numeric_input("42.9");
        assert_eq!(edit.value(), &CellValue::Float(42.9));
    }

    #[test]
    fn test_empty_numeric_input_policy() {
        let mut zero = scope(EditKind::Integer, 145i64);
        zero.set_numeric_input("");
        assert_eq!(zero.value(), &CellValue::Int(0));

        let mut absent = scope(EditKind::Integer, 145i64).with_empty_input(EmptyInput::Absent);
        absent.set_numeric_input("");
        assert_eq!(absent.value(), &CellValue::Null);
        absent.set_numeric_input("0");
        assert_eq!(absent.value(), &CellValue::Int(0));
    }

    #[test]
    fn test_numeric_input_on_text_is_kept() {
        let mut edit = scope(EditKind::Text, "");
        edit.set_numeric_input("12px");
        assert_eq!(edit.value(), &CellValue::from("12px"));
    }

    #[test]
    fn test_commit_and_move_carries_request() {
        let mut edit = scope(EditKind::Integer, 0i64);
        edit.set_numeric_input("10");
        let pending = edit.commit_and_move(Direction::Next);
        assert_eq!(pending.edit().value, CellValue::Int(10));
        assert_eq!(
            pending.request(),
            &NavigationRequest::new(0, "requestCounter", Direction::Next)
        );
    }
}
