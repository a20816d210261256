//! Where persisted user preferences live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Path of the preferences TOML file. Empty means the per-user default.
    #[serde(default)]
    pub path: String,
}

impl PreferencesConfig {
    /// Configured path, or `<config dir>/mmcs/preferences.toml`.
    ///
    /// Returns `None` only when no path is configured and the platform has
    /// no config directory.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            dirs::config_dir().map(|p| p.join("mmcs").join("preferences.toml"))
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}
