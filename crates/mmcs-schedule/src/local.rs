//! In-memory schedule repository.
//!
//! Serves a [`ScheduleBundle`] held in memory. The bundle can be built in
//! code (tests) or read from a JSON file (the CLI).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use mmcs_core::entities::{GroupSchedule, ScheduleTarget, TeacherSchedule};
use mmcs_core::enums::WeekType;

use crate::error::RepositoryError;
use crate::repository::ScheduleRepository;

/// Everything a repository can answer with, in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBundle {
    /// `None` models a source that has not published the current week.
    #[serde(default)]
    pub current_week: Option<WeekType>,
    #[serde(default)]
    pub groups: BTreeMap<u32, GroupSchedule>,
    #[serde(default)]
    pub teachers: BTreeMap<u32, TeacherSchedule>,
}

/// Repository answering from a [`ScheduleBundle`].
#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    bundle: ScheduleBundle,
}

impl LocalRepository {
    /// Create an empty repository with no current week.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_bundle(bundle: ScheduleBundle) -> Self {
        Self { bundle }
    }

    /// Parse a JSON bundle.
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        serde_json::from_str(json)
            .map(Self::from_bundle)
            .map_err(|e| RepositoryError::Malformed(e.to_string()))
    }

    /// Read and parse a JSON bundle file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loaded schedule bundle");
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn with_current_week(mut self, week: WeekType) -> Self {
        self.bundle.current_week = Some(week);
        self
    }

    #[must_use]
    pub fn with_group(mut self, id: u32, schedule: GroupSchedule) -> Self {
        self.bundle.groups.insert(id, schedule);
        self
    }

    #[must_use]
    pub fn with_teacher(mut self, id: u32, schedule: TeacherSchedule) -> Self {
        self.bundle.teachers.insert(id, schedule);
        self
    }

    #[must_use]
    pub const fn bundle(&self) -> &ScheduleBundle {
        &self.bundle
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn current_week_type(&self) -> Result<WeekType, RepositoryError> {
        self.bundle.current_week.ok_or_else(|| {
            RepositoryError::Unavailable("current week type has not been published".into())
        })
    }

    async fn schedule_of_group(&self, id: u32) -> Result<GroupSchedule, RepositoryError> {
        self.bundle
            .groups
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(ScheduleTarget::Group(id)))
    }

    async fn schedule_of_teacher(&self, id: u32) -> Result<TeacherSchedule, RepositoryError> {
        self.bundle
            .teachers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(ScheduleTarget::Teacher(id)))
    }
}
