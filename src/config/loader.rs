//! Loading the emulator configuration from disk.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::schema::EmulatorConfig;
use crate::error::{CameraError, Result};

/// File name inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config location: `<config_dir>/emucam/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("emucam").join(CONFIG_FILE_NAME))
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<EmulatorConfig> {
    let config: EmulatorConfig =
        toml::from_str(contents).map_err(|e| CameraError::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit file.
///
/// A missing file is an error.
pub fn load_config_file(path: &Path) -> Result<EmulatorConfig> {
    trace!(path = %path.display(), "Reading configuration");
    if !path.is_file() {
        return Err(CameraError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Load configuration from `explicit`, or from the default location.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<EmulatorConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_config_file(&path),
        Some(path) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(EmulatorConfig::default())
        }
        None => {
            debug!("No config directory on this platform, using defaults");
            Ok(EmulatorConfig::default())
        }
    }
}
