//! LocomotionPresets resource providing lookups for loaded presets.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Registry of locomotion presets by id.
#[derive(Resource, Default)]
pub struct LocomotionPresets {
    pub presets: HashMap<String, LocomotionPreset>,
}

impl LocomotionPresets {
    pub fn from_presets(items: Vec<LocomotionPreset>) -> Self {
        let mut registry = Self::default();
        for item in items {
            registry.presets.insert(item.id.clone(), item);
        }
        registry
    }

    /// Registry holding only the built-in fallback preset.
    pub fn fallback() -> Self {
        Self::from_presets(vec![LocomotionPreset::fallback()])
    }

    pub fn get(&self, id: &str) -> Option<&LocomotionPreset> {
        self.presets.get(id)
    }

    /// Preset ids in a stable order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Id following `current` in sorted order, wrapping around.
    pub fn next_after(&self, current: &str) -> Option<&str> {
        let ids = self.ids();
        if ids.is_empty() {
            return None;
        }
        let next = match ids.iter().position(|id| *id == current) {
            Some(index) => (index + 1) % ids.len(),
            None => 0,
        };
        Some(ids[next])
    }

    /// Returns a summary of loaded presets for logging.
    pub fn summary(&self) -> String {
        format!(
            "LocomotionPresets loaded: {} ({})",
            self.presets.len(),
            self.ids().join(", ")
        )
    }
}
