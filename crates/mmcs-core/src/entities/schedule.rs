use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::lesson::{GroupLesson, TeacherLesson};

/// Day-bucketed lessons, Monday first. Within a day lessons are kept in the
/// order the repository delivered them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Schedule<L> {
    pub days: Vec<Vec<L>>,
}

impl<L> Schedule<L> {
    #[must_use]
    pub const fn new(days: Vec<Vec<L>>) -> Self {
        Self { days }
    }
}

impl<L> Default for Schedule<L> {
    fn default() -> Self {
        Self { days: Vec::new() }
    }
}

pub type GroupSchedule = Schedule<GroupLesson>;
pub type TeacherSchedule = Schedule<TeacherLesson>;

/// A fetched schedule of either kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "schedule", rename_all = "snake_case")]
pub enum RawSchedule {
    Group(GroupSchedule),
    Teacher(TeacherSchedule),
}

/// Whose schedule to fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ScheduleTarget {
    Group(u32),
    Teacher(u32),
}

impl fmt::Display for ScheduleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(id) => write!(f, "group {id}"),
            Self::Teacher(id) => write!(f, "teacher {id}"),
        }
    }
}
