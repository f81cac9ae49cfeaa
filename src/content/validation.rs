//! Validation for locomotion preset values.

use std::collections::HashSet;

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub preset_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Preset '{}' field '{}': {}",
            self.preset_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a numeric bound
macro_rules! check_value {
    ($errors:expr, $preset:expr, $field:ident, $ok:expr, $expected:expr) => {
        let value = $preset.config.$field;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                preset_id: $preset.id.clone(),
                field: stringify!($field),
                message: format!("{} must be {}", value, $expected),
            });
        }
    };
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate the numeric ranges of one preset.
pub fn validate_preset(preset: &LocomotionPreset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_value!(errors, preset, gravity, positive, "positive");
    check_value!(errors, preset, max_run_speed, positive, "positive");
    check_value!(errors, preset, max_air_speed, positive, "positive");
    check_value!(errors, preset, time_to_max_run_speed, non_negative, "non-negative");
    check_value!(errors, preset, time_to_max_air_speed, non_negative, "non-negative");
    check_value!(errors, preset, ground_friction, non_negative, "non-negative");
    check_value!(errors, preset, air_friction, non_negative, "non-negative");
    check_value!(errors, preset, coyote_time, non_negative, "non-negative");
    check_value!(errors, preset, jump_buffer, non_negative, "non-negative");
    check_value!(errors, preset, max_jump_height, non_negative, "non-negative");
    check_value!(errors, preset, hang_time, non_negative, "non-negative");
    check_value!(errors, preset, hang_smoothing, non_negative, "non-negative");
    check_value!(errors, preset, max_jump_hold_time, non_negative, "non-negative");
    check_value!(errors, preset, bhop_boost, non_negative, "non-negative");
    check_value!(errors, preset, dash_velocity, non_negative, "non-negative");
    check_value!(errors, preset, dash_time, non_negative, "non-negative");
    check_value!(errors, preset, dash_end_ratio, unit_interval, "within [0, 1]");

    errors
}

/// Validate every preset and reject duplicate ids.
/// Returns a list of validation errors, empty if all presets are valid.
pub fn validate_presets(presets: &[LocomotionPreset]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for preset in presets {
        if !seen.insert(preset.id.as_str()) {
            errors.push(ValidationError {
                preset_id: preset.id.clone(),
                field: "id",
                message: "duplicate preset id".to_string(),
            });
        }
        errors.extend(validate_preset(preset));
    }

    errors
}
