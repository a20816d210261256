//! Cross-cutting error types for mmcs.
//!
//! Collaborator-specific errors (`RepositoryError`, `PreferencesError`,
//! `ConfigError`) live in their own crates. `ScheduleError` in
//! `mmcs-schedule` is where they converge.

use thiserror::Error;

/// Errors that can be raised while building or parsing model values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known enum variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
