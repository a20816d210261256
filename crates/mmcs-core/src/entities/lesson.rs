use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::period::TimePeriod;
use crate::enums::WeekType;

/// Fields every raw lesson carries regardless of whose schedule it is.
pub trait Lesson {
    fn period(&self) -> &TimePeriod;
    fn subject_name(&self) -> &str;
    fn week_type(&self) -> WeekType;
}

/// A lesson as seen from a student group's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupLesson {
    pub period: TimePeriod,
    pub subject_name: String,
    pub week_type: WeekType,
    pub teachers: Vec<String>,
}

/// A lesson as seen from a teacher's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeacherLesson {
    pub period: TimePeriod,
    pub subject_name: String,
    pub week_type: WeekType,
    pub room: String,
    pub groups: Vec<String>,
}

impl Lesson for GroupLesson {
    fn period(&self) -> &TimePeriod {
        &self.period
    }

    fn subject_name(&self) -> &str {
        &self.subject_name
    }

    fn week_type(&self) -> WeekType {
        self.week_type
    }
}

impl Lesson for TeacherLesson {
    fn period(&self) -> &TimePeriod {
        &self.period
    }

    fn subject_name(&self) -> &str {
        &self.subject_name
    }

    fn week_type(&self) -> WeekType {
        self.week_type
    }
}
