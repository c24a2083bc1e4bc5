//! Tests for boot sequence registration.

use gridedit_lib::registration::BootSequence;
use gridedit_lib::registration::GRID_BUNDLE;
use gridedit_lib::registration::GRID_COMPONENT;
use gridedit_lib::registration::registered_components;

#[test]
fn test_grid_component_is_registered() {
    assert!(registered_components().any(|r| r.name == GRID_COMPONENT && r.bundle == GRID_BUNDLE));
}

#[test]
fn test_extend_appends_after_existing_entries() {
    let mut boot = BootSequence::from(vec!["i18n".to_string(), "axios".to_string()]);
    assert!(boot.extend_with_registered() >= 1);
    assert_eq!(&boot.entries()[..2], &["i18n".to_string(), "axios".to_string()]);
    assert!(boot.contains(GRID_BUNDLE));
}

#[test]
fn test_extend_is_idempotent() {
    let mut boot = BootSequence::new();
    boot.extend_with_registered();
    let len = boot.entries().len();

    assert_eq!(boot.extend_with_registered(), 0);
    assert_eq!(boot.entries().len(), len);
}

#[test]
fn test_boot_sequence_json_is_a_plain_list() {
    let boot: BootSequence = serde_json::from_str(r#"["i18n"]"#).unwrap();
    assert_eq!(serde_json::to_string(&boot).unwrap(), r#"["i18n"]"#);
}
