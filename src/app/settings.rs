//! Optional `bootstrap.toml` loading.

use serde::Deserialize;

use crate::domain::{AppError, Defaults, TargetFiles};
use crate::ports::ProjectFiles;

pub const SETTINGS_FILE: &str = "bootstrap.toml";

/// Tool settings: fallback values and target file locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: Defaults,
    pub files: TargetFiles,
}

/// Load `bootstrap.toml` from the project root, or built-in settings when absent.
pub fn load_settings(files: &impl ProjectFiles) -> Result<Settings, AppError> {
    if !files.file_exists(SETTINGS_FILE) {
        return Ok(Settings::default());
    }

    let content = files.read_file(SETTINGS_FILE)?;
    parse_settings_content(&content)
}

/// Parse settings from string content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;

    if settings.defaults.name.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "{SETTINGS_FILE}: defaults.name must not be empty"
        )));
    }

    Ok(settings)
}
