//! Tests for keyboard focus traversal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gridedit_lib::ColumnDefinition;
use gridedit_lib::Grid;
use gridedit_lib::GridConfig;
use gridedit_lib::focus::CellKey;
use gridedit_lib::focus::Direction;
use gridedit_lib::focus::EditorHandle;
use gridedit_lib::focus::FocusNavigator;
use gridedit_lib::focus::NavigationRequest;
use gridedit_lib::model::CellValue;
use serde_json::json;

type ActivationLog = Rc<RefCell<Vec<CellKey>>>;

struct PopupEditor {
    key: CellKey,
    log: ActivationLog,
}

impl EditorHandle for PopupEditor {
    fn activate(&self) {
        self.log.borrow_mut().push(self.key.clone());
    }
}

/// Navigator plus the editors it points at; dropping an editor unmounts it.
struct Fixture {
    navigator: FocusNavigator<PopupEditor>,
    editors: HashMap<CellKey, Rc<PopupEditor>>,
    log: ActivationLog,
}

impl Fixture {
    fn new(config: &GridConfig) -> Self {
        Self {
            navigator: FocusNavigator::new(config),
            editors: HashMap::new(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn mount(&mut self, row: usize, column: &str) {
        let key = CellKey::new(row, column);
        let editor = Rc::new(PopupEditor {
            key: key.clone(),
            log: self.log.clone(),
        });
        self.navigator.registry_mut().register(row, column, &editor);
        self.editors.insert(key, editor);
    }

    fn mount_all(&mut self, rows: usize, columns: &[&str]) {
        for row in 0..rows {
            for column in columns {
                self.mount(row, column);
            }
        }
    }

    fn go(&self, row: usize, column: &str, direction: Direction, columns: &[&str]) -> Option<CellKey> {
        self.navigator
            .move_focus(&NavigationRequest::new(row, column, direction), columns)
    }

    fn activations(&self) -> Vec<CellKey> {
        self.log.borrow().clone()
    }
}

const COLS: [&str; 3] = ["col0", "col1", "col2"];

#[test]
fn test_next_wraps_to_next_row() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(2, &COLS);

    let target = fx.go(0, "col2", Direction::Next, &COLS);
    assert_eq!(target, Some(CellKey::new(1, "col0")));
    assert_eq!(fx.activations(), vec![CellKey::new(1, "col0")]);
}

#[test]
fn test_prev_wraps_to_previous_row() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(2, &COLS);

    let target = fx.go(1, "col0", Direction::Prev, &COLS);
    assert_eq!(target, Some(CellKey::new(0, "col2")));
    assert_eq!(fx.activations(), vec![CellKey::new(0, "col2")]);
}

#[test]
fn test_moves_within_row() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(2, &COLS);

    assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), Some(CellKey::new(0, "col1")));
    assert_eq!(fx.go(0, "col1", Direction::Prev, &COLS), Some(CellKey::new(0, "col0")));
}

#[test]
fn test_skips_non_editable_column() {
    let mut fx = Fixture::new(&GridConfig::default());
    for row in 0..2 {
        fx.mount(row, "col0");
        fx.mount(row, "col2");
    }

    assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), Some(CellKey::new(0, "col2")));
    assert_eq!(fx.go(0, "col2", Direction::Prev, &COLS), Some(CellKey::new(0, "col0")));
    assert_eq!(fx.activations().len(), 2);
}

#[test]
fn test_nothing_editable_within_lookahead() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount(0, "col0");
    // Two rows ahead is outside the default one-row window.
    fx.mount(2, "col0");

    assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), None);
    assert!(fx.activations().is_empty());
}

#[test]
fn test_wider_lookahead_reaches_further_rows() {
    let mut fx = Fixture::new(&GridConfig::default().with_lookahead_rows(2));
    fx.mount(0, "col0");
    fx.mount(2, "col1");

    assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), Some(CellKey::new(2, "col1")));
    assert_eq!(fx.go(2, "col1", Direction::Prev, &COLS), Some(CellKey::new(0, "col0")));
}

#[test]
fn test_prev_stops_at_first_row() {
    let mut fx = Fixture::new(&GridConfig::default().with_lookahead_rows(5));
    fx.mount(0, "col1");

    assert_eq!(fx.go(0, "col1", Direction::Prev, &COLS), None);
    assert!(fx.activations().is_empty());
}

#[test]
fn test_unbounded_lookahead_still_finds_neighbours() {
    for lookahead in [usize::MAX, i64::MAX as usize] {
        let config = GridConfig::default().with_lookahead_rows(lookahead);
        assert!(config.validate().is_ok());

        let mut fx = Fixture::new(&config);
        fx.mount(0, "col1");
        fx.mount(5, "col0");
        fx.mount(6, "col2");

        assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), Some(CellKey::new(0, "col1")));
        assert_eq!(fx.go(5, "col0", Direction::Next, &COLS), Some(CellKey::new(6, "col2")));
        assert_eq!(fx.go(5, "col0", Direction::Prev, &COLS), Some(CellKey::new(0, "col1")));
    }
}

#[test]
fn test_next_past_last_row_gives_up() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(2, &COLS);

    assert_eq!(fx.go(1, "col2", Direction::Next, &COLS), None);
}

#[test]
fn test_unmounted_editor_is_skipped() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(1, &COLS);
    fx.editors.remove(&CellKey::new(0, "col1"));

    assert_eq!(fx.go(0, "col0", Direction::Next, &COLS), Some(CellKey::new(0, "col2")));
}

#[test]
fn test_check_cap_bounds_search() {
    let columns: Vec<String> = (0..50).map(|i| format!("c{}", i)).collect();
    let mut fx = Fixture::new(&GridConfig::default().with_max_checks(10));
    fx.mount(0, "c0");
    fx.mount(0, "c20");

    let request = NavigationRequest::new(0, "c0", Direction::Next);
    assert_eq!(fx.navigator.move_focus(&request, &columns), None);
}

#[test]
fn test_column_order_is_taken_per_call() {
    let mut fx = Fixture::new(&GridConfig::default());
    fx.mount_all(1, &COLS);

    let reordered = ["col2", "col0", "col1"];
    assert_eq!(fx.go(0, "col2", Direction::Next, &reordered), Some(CellKey::new(0, "col0")));

    let hidden = ["col0", "col2"];
    assert_eq!(fx.go(0, "col0", Direction::Next, &hidden), Some(CellKey::new(0, "col2")));
}

#[test]
fn test_empty_columns_is_noop() {
    let fx = Fixture::new(&GridConfig::default());
    let none: [&str; 0] = [];
    assert_eq!(fx.go(0, "col0", Direction::Next, &none), None);
}

// =============================================================================
// Grid instances
// =============================================================================

fn provider_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "readOnly": true },
            "firstName": { "type": "string" },
            "requestCounter": { "type": "integer" },
            "active": { "type": "boolean" }
        }
    })
}

fn provider_grid() -> Grid<PopupEditor> {
    Grid::from_object_schema(&provider_schema(), &HashMap::new(), GridConfig::default()).unwrap()
}

#[test]
fn test_commit_then_move_after_render() {
    let mut grid = provider_grid();
    let log: ActivationLog = Rc::new(RefCell::new(Vec::new()));
    let mount = |grid: &mut Grid<PopupEditor>, row: usize, column: &str| {
        let editor = Rc::new(PopupEditor {
            key: CellKey::new(row, column),
            log: log.clone(),
        });
        grid.register_editor(row, column, &editor);
        editor
    };

    let _first = mount(&mut grid, 0, "firstName");

    let mut edit = grid
        .begin_edit(0, "firstName", CellValue::from("Dokter"))
        .unwrap();
    edit.set_value("Louis");
    let pending = edit.commit_and_move(Direction::Next);
    assert_eq!(pending.edit().value, CellValue::from("Louis"));

    // The next editor mounts during the render that follows the commit.
    let _next = mount(&mut grid, 0, "requestCounter");

    assert_eq!(grid.complete(pending), Some(CellKey::new(0, "requestCounter")));
    assert_eq!(log.borrow().as_slice(), &[CellKey::new(0, "requestCounter")]);
}

#[test]
fn test_hidden_columns_are_not_visited() {
    let mut grid = provider_grid();
    let log: ActivationLog = Rc::new(RefCell::new(Vec::new()));
    let editors: Vec<Rc<PopupEditor>> = ["firstName", "requestCounter", "active"]
        .into_iter()
        .map(|column| {
            let editor = Rc::new(PopupEditor {
                key: CellKey::new(0, column),
                log: log.clone(),
            });
            grid.register_editor(0, column, &editor);
            editor
        })
        .collect();

    grid.set_hidden("requestCounter", true).unwrap();
    assert_eq!(grid.visible_columns(), vec!["id", "firstName", "active"]);
    assert_eq!(grid.navigate(0, "firstName", Direction::Next), Some(CellKey::new(0, "active")));

    grid.set_hidden("requestCounter", false).unwrap();
    assert_eq!(
        grid.navigate(0, "firstName", Direction::Next),
        Some(CellKey::new(0, "requestCounter"))
    );
    assert_eq!(editors.len(), 3);
}

#[test]
fn test_grids_do_not_share_editors() {
    let mut left = provider_grid();
    let right = provider_grid();
    let log: ActivationLog = Rc::new(RefCell::new(Vec::new()));
    let editor = Rc::new(PopupEditor {
        key: CellKey::new(0, "requestCounter"),
        log,
    });
    left.register_editor(0, "requestCounter", &editor);

    assert_ne!(left.id(), right.id());
    assert!(left.navigate(0, "firstName", Direction::Next).is_some());
    assert!(right.navigate(0, "firstName", Direction::Next).is_none());
}

#[test]
fn test_begin_edit_rejects_unknown_and_read_only_columns() {
    let grid = provider_grid();
    assert!(matches!(
        grid.begin_edit(0, "missing", CellValue::Null),
        Err(gridedit_lib::error::GridError::UnknownColumn(_))
    ));
    assert!(matches!(
        grid.begin_edit(0, "id", CellValue::Int(1)),
        Err(gridedit_lib::error::GridError::ReadOnlyColumn(_))
    ));
}

#[test]
fn test_grid_with_invalid_config() {
    let result = Grid::<PopupEditor>::with_config(
        vec![ColumnDefinition::from_schema("name", &json!({ "type": "string" }), None)],
        GridConfig::default().with_max_checks(0),
    );
    assert!(result.is_err());
}
