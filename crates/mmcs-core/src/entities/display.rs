use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::WeekType;

/// Text-only projection of one lesson, ready for a list row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DisplayLesson {
    pub start: String,
    pub end: String,
    pub subject: String,
    pub room: String,
    /// Teachers or groups, one per line.
    pub people: String,
    pub week_label: String,
}

/// Lessons of one day under one week filter. Never built empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: String,
    pub lessons: Vec<DisplayLesson>,
}

/// The three filtered views of one schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormattedScheduleSet {
    pub full: Vec<DaySchedule>,
    pub upper: Vec<DaySchedule>,
    pub lower: Vec<DaySchedule>,
}

impl FormattedScheduleSet {
    /// The view a display surface shows for a resolved week type.
    #[must_use]
    pub fn for_week(&self, week: WeekType) -> &[DaySchedule] {
        match week {
            WeekType::Full => &self.full,
            WeekType::Upper => &self.upper,
            WeekType::Lower => &self.lower,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}
