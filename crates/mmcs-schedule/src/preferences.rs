//! Persisted user choices: the preferred week view and whether a schedule
//! target has been picked.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use mmcs_core::enums::WeekTypeOption;

use crate::error::PreferencesError;

pub trait Preferences: Send + Sync {
    fn week_type_option(&self) -> Result<WeekTypeOption, PreferencesError>;

    fn set_week_type_option(&self, option: WeekTypeOption) -> Result<(), PreferencesError>;

    fn schedule_was_picked(&self) -> Result<bool, PreferencesError>;

    fn set_schedule_was_picked(&self, picked: bool) -> Result<(), PreferencesError>;
}

/// Stored preference values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredPreferences {
    #[serde(default)]
    pub week_type_option: WeekTypeOption,
    #[serde(default)]
    pub schedule_was_picked: bool,
}

/// Preferences that live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<StoredPreferences>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new(default_option: WeekTypeOption) -> Self {
        Self {
            values: RwLock::new(StoredPreferences {
                week_type_option: default_option,
                schedule_was_picked: false,
            }),
        }
    }

    fn read(&self) -> Result<StoredPreferences, PreferencesError> {
        self.values
            .read()
            .map(|v| *v)
            .map_err(|_| PreferencesError::Poisoned)
    }

    fn update(&self, f: impl FnOnce(&mut StoredPreferences)) -> Result<(), PreferencesError> {
        let mut values = self.values.write().map_err(|_| PreferencesError::Poisoned)?;
        f(&mut *values);
        Ok(())
    }
}

impl Preferences for MemoryPreferences {
    fn week_type_option(&self) -> Result<WeekTypeOption, PreferencesError> {
        Ok(self.read()?.week_type_option)
    }

    fn set_week_type_option(&self, option: WeekTypeOption) -> Result<(), PreferencesError> {
        self.update(|v| v.week_type_option = option)
    }

    fn schedule_was_picked(&self) -> Result<bool, PreferencesError> {
        Ok(self.read()?.schedule_was_picked)
    }

    fn set_schedule_was_picked(&self, picked: bool) -> Result<(), PreferencesError> {
        self.update(|v| v.schedule_was_picked = picked)
    }
}

/// Preferences stored in a small TOML file.
///
/// A missing file reads as defaults (with the configured default option).
/// Every write rewrites the whole file, creating parent directories first.
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
    default_option: WeekTypeOption,
}

impl TomlPreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, default_option: WeekTypeOption) -> Self {
        Self {
            path: path.into(),
            default_option,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoredPreferences, PreferencesError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredPreferences {
                week_type_option: self.default_option,
                schedule_was_picked: false,
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, values: &StoredPreferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(values)?)?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut StoredPreferences)) -> Result<(), PreferencesError> {
        let mut values = self.load()?;
        f(&mut values);
        self.store(&values)
    }
}

impl Preferences for TomlPreferences {
    fn week_type_option(&self) -> Result<WeekTypeOption, PreferencesError> {
        Ok(self.load()?.week_type_option)
    }

    fn set_week_type_option(&self, option: WeekTypeOption) -> Result<(), PreferencesError> {
        self.update(|v| v.week_type_option = option)
    }

    fn schedule_was_picked(&self) -> Result<bool, PreferencesError> {
        Ok(self.load()?.schedule_was_picked)
    }

    fn set_schedule_was_picked(&self, picked: bool) -> Result<(), PreferencesError> {
        self.update(|v| v.schedule_was_picked = picked)
    }
}
