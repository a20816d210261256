//! # mmcs-config
//!
//! Layered configuration loading for mmcs using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MMCS_*` prefix, `__` as separator)
//! 2. Project-level `.mmcs/config.toml`
//! 3. User-level `~/.config/mmcs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MMCS_GENERAL__DEFAULT_WEEK_TYPE_OPTION` -> `general.default_week_type_option`,
//! `MMCS_PREFERENCES__PATH` -> `preferences.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mmcs_config::MmcsConfig;
//!
//! let config = MmcsConfig::load_with_dotenv().expect("config");
//! println!("default view: {}", config.general.default_week_type_option);
//! ```

mod error;
mod general;
mod preferences;
mod report;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use preferences::PreferencesConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MmcsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl MmcsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mmcs/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MMCS_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report.subject.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.subject".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mmcs").join("config.toml"))
    }
}
