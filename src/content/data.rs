//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The LocomotionPresets registry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::LocomotionConfig;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Locomotion presets (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LocomotionPreset {
    pub id: String,
    pub name: String,
    pub config: LocomotionConfig,
}

impl LocomotionPreset {
    /// Built-in preset used when no content could be loaded.
    pub fn fallback() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            config: LocomotionConfig::default(),
        }
    }
}
