//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Supported locomotion.ron schema.
pub const LOCOMOTION_SCHEMA_VERSION: u32 = 1;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the contents of a RON file containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<DataFile<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<DataFile<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&file_name, &contents)
}

/// Parse locomotion presets, rejecting unknown schema versions.
pub fn parse_locomotion_presets(
    file_name: &str,
    contents: &str,
) -> Result<Vec<LocomotionPreset>, ContentLoadError> {
    let data: DataFile<LocomotionPreset> = parse_data_file(file_name, contents)?;
    check_schema(file_name, data.schema_version)?;
    Ok(data.items)
}

/// Load assets/data/locomotion.ron from `base_path`.
pub fn load_locomotion_presets(base_path: &Path) -> Result<Vec<LocomotionPreset>, ContentLoadError> {
    let path = base_path.join("locomotion.ron");
    let data: DataFile<LocomotionPreset> = load_data_file(&path)?;
    check_schema(&path.display().to_string(), data.schema_version)?;
    Ok(data.items)
}

fn check_schema(file_name: &str, version: u32) -> Result<(), ContentLoadError> {
    if version == LOCOMOTION_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                version, LOCOMOTION_SCHEMA_VERSION
            ),
        })
    }
}
