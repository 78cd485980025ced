//! Settings parser for settings.toml

use std::path::{Path, PathBuf};

use netlab_core::prelude::*;
use netlab_core::theme::ThemeMode;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "settings.toml";
const APP_DIR: &str = "netlab";

/// Persisted user settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme mode (`light` | `dark`), read at load and written on toggle.
    pub theme: ThemeMode,
}

/// Directory the settings file lives in, under the platform config root.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `<dir>/settings.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let settings_path = dir.join(SETTINGS_FILENAME);

    if !settings_path.exists() {
        debug!("No settings file at {:?}, using defaults", settings_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&settings_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", settings_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", settings_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", settings_path, e);
            Settings::default()
        }
    }
}

/// Save settings to `<dir>/settings.toml`
///
/// Uses atomic write (temp file + rename) for safety.
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create settings dir: {}", e)))?;
    }

    let settings_path = dir.join(SETTINGS_FILENAME);
    let temp_path = dir.join(".settings.toml.tmp");

    let header = "# NetLab settings\n# Written on every theme toggle\n\n";
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(&temp_path, format!("{}{}", header, content))
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &settings_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved settings to {:?}", settings_path);
    Ok(())
}
