//! Content domain: tests for preset parsing, validation, and lookup.

use super::*;
use crate::movement::LocomotionConfig;

const SAMPLE: &str = r#"(
    schema_version: 1,
    items: [
        (
            id: "default",
            name: "Default",
            config: (
                gravity: 3000.0,
                max_run_speed: 200.0,
                coyote_time: 6.0,
                max_air_jumps: 1,
            ),
        ),
        (
            id: "floaty",
            name: "Floaty",
            config: (
                gravity: 1500.0,
                hang_smoothing: 1500.0,
            ),
        ),
    ],
)"#;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_presets() {
    let presets = parse_locomotion_presets("locomotion.ron", SAMPLE).unwrap();
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].id, "default");
    assert_eq!(presets[0].config.gravity, 3000.0);
    assert_eq!(presets[0].config.max_air_jumps, 1);
}

#[test]
fn test_missing_fields_use_defaults() {
    let presets = parse_locomotion_presets("locomotion.ron", SAMPLE).unwrap();
    let floaty = &presets[1].config;
    let defaults = LocomotionConfig::default();

    assert_eq!(floaty.gravity, 1500.0);
    assert_eq!(floaty.max_run_speed, defaults.max_run_speed);
    assert_eq!(floaty.dash_end_ratio, defaults.dash_end_ratio);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_locomotion_presets("broken.ron", "(schema_version: 1, items: [").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_unknown_schema_rejected() {
    let err = parse_locomotion_presets("locomotion.ron", "(schema_version: 7, items: [])")
        .unwrap_err();
    assert!(err.message.contains("schema_version 7"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_locomotion_presets(std::path::Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_presets_are_valid() {
    let contents = include_str!("../../assets/data/locomotion.ron");
    let presets = parse_locomotion_presets("locomotion.ron", contents).unwrap();
    assert!(presets.iter().any(|p| p.id == "default"));
    assert!(validate_presets(&presets).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_fallback_preset_is_valid() {
    assert!(validate_presets(&[LocomotionPreset::fallback()]).is_empty());
}

#[test]
fn test_negative_values_rejected() {
    let mut preset = LocomotionPreset::fallback();
    preset.config.gravity = -10.0;
    preset.config.coyote_time = -1.0;
    preset.config.dash_end_ratio = 1.5;

    let errors = validate_presets(&[preset]);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"gravity"));
    assert!(fields.contains(&"coyote_time"));
    assert!(fields.contains(&"dash_end_ratio"));
}

#[test]
fn test_non_finite_rejected() {
    let mut preset = LocomotionPreset::fallback();
    preset.config.max_jump_height = f32::NAN;
    let errors = validate_presets(&[preset]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "max_jump_height");
}

#[test]
fn test_duplicate_ids_rejected() {
    let errors = validate_presets(&[LocomotionPreset::fallback(), LocomotionPreset::fallback()]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "id");
    assert_eq!(
        errors[0].to_string(),
        "Preset 'default' field 'id': duplicate preset id"
    );
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_cycles_ids_in_order() {
    let presets = parse_locomotion_presets("locomotion.ron", SAMPLE).unwrap();
    let registry = LocomotionPresets::from_presets(presets);

    assert_eq!(registry.ids(), vec!["default", "floaty"]);
    assert_eq!(registry.next_after("default"), Some("floaty"));
    assert_eq!(registry.next_after("floaty"), Some("default"));
    assert_eq!(registry.next_after("unknown"), Some("default"));
}

#[test]
fn test_empty_registry_has_no_next() {
    assert!(LocomotionPresets::default().next_after("default").is_none());
}

#[test]
fn test_fallback_registry_has_default() {
    let registry = LocomotionPresets::fallback();
    assert!(registry.get("default").is_some());
}
