//! User configuration loading.
//!
//! User config location: $XDG_CONFIG_HOME/doxystub/doxystub.toml
//! Fallback: the platform config directory (e.g. ~/.config/doxystub/doxystub.toml)

use super::settings::Settings;
use crate::error::{DoxyError, DoxyResult};
use log::debug;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "doxystub.toml";

/// Returns the path to the user configuration file.
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join("doxystub").join(CONFIG_FILE_NAME));
    }
    dirs::config_dir().map(|dir| dir.join("doxystub").join(CONFIG_FILE_NAME))
}

/// Load the user configuration, if one exists.
pub fn load_user_config() -> DoxyResult<Option<Settings>> {
    match user_config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(None),
    }
}

/// Read and parse a configuration file.
///
/// A missing file is `Ok(None)`; an unreadable or malformed one is a config error.
pub fn load_config_file(path: &Path) -> DoxyResult<Option<Settings>> {
    if !path.exists() {
        debug!(target: "doxystub::config", "No config at {}", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| DoxyError::config(format!("cannot read {}: {e}", path.display())))?;
    let settings = toml::from_str(&content)
        .map_err(|e| DoxyError::config(format!("{}: {e}", path.display())))?;
    debug!(target: "doxystub::config", "Loaded config from {}", path.display());
    Ok(Some(settings))
}
