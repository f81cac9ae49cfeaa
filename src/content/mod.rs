//! Content domain: RON-driven locomotion presets loaded at startup.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{DataFile, LocomotionPreset};
pub use loader::{ContentLoadError, load_locomotion_presets, parse_locomotion_presets};
pub use registry::LocomotionPresets;
pub use validation::{ValidationError, validate_presets};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the data files, relative to the working directory.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionPreset>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load, validate and register the locomotion presets.
/// Falls back to the built-in preset when anything is wrong.
fn load_content(mut commands: Commands) {
    let presets = match load_locomotion_presets(Path::new(CONTENT_DIR)) {
        Ok(items) => {
            let errors = validate_presets(&items);
            if errors.is_empty() {
                LocomotionPresets::from_presets(items)
            } else {
                for error in &errors {
                    error!("{}", error);
                }
                warn!("Invalid locomotion presets, using built-in defaults");
                LocomotionPresets::fallback()
            }
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            LocomotionPresets::fallback()
        }
    };

    info!("{}", presets.summary());
    commands.insert_resource(presets);
}
