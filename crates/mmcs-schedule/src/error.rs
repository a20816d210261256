//! Error types for mmcs-schedule.

use thiserror::Error;

use mmcs_core::entities::ScheduleTarget;

/// Failures reported by a schedule repository.
///
/// The presenter passes these through untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The source could not be reached or did not answer.
    #[error("Schedule source unavailable: {0}")]
    Unavailable(String),

    /// No schedule exists for the requested group or teacher.
    #[error("No schedule for {0}")]
    NotFound(ScheduleTarget),

    /// The source answered with data that could not be decoded.
    #[error("Malformed schedule data: {0}")]
    Malformed(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("I/O error on preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences file is not valid TOML: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Preferences could not be encoded: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("Preferences store poisoned")]
    Poisoned,
}

/// Errors surfaced by the presenter.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// `Current` was resolved before the current week type was ever fetched.
    #[error("Current week type not yet known")]
    CurrentWeekUnknown,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}
