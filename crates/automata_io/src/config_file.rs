//! Reading and writing `config.toml`.

use crate::error::{IoError, Result};
use automata_core::AppConfig;
use std::fs;
use std::path::Path;

/// Parses a configuration from TOML text. Absent keys take their defaults.
pub fn from_toml(text: &str) -> Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

pub fn to_toml(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string(config)?)
}

/// Reads and parses the configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let context = || format!("loading {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| IoError::from(e).with_context(context()))?;
    from_toml(&text).map_err(|e| e.with_context(context()))
}

pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> Result<()> {
    let path = path.as_ref();
    let text = to_toml(config)?;
    fs::write(path, text)
        .map_err(|e| IoError::from(e).with_context(format!("writing {}", path.display())))
}

/// Returns the configuration at `path`, falling back to defaults.
///
/// A missing file is created with the defaults. A file that cannot be read or
/// parsed is left untouched and a warning is logged.
pub fn load_or_init(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    if path.exists() {
        match load_config(path) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Failed to load config, using defaults: {}", e),
        }
        return AppConfig::default();
    }

    let default = AppConfig::default();
    if let Err(e) = save_config(path, &default) {
        tracing::warn!("Could not write default config: {}", e);
    }
    default
}
