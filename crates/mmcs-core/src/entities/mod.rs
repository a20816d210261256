//! Schedule records and their display projections.
//!
//! Raw records (`GroupLesson`, `TeacherLesson`, `Schedule`) are what a
//! repository hands over; display records (`DisplayLesson`, `DaySchedule`,
//! `FormattedScheduleSet`) are what the formatter builds for a view.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod display;
mod lesson;
mod period;
mod schedule;

pub use display::{DaySchedule, DisplayLesson, FormattedScheduleSet};
pub use lesson::{GroupLesson, Lesson, TeacherLesson};
pub use period::TimePeriod;
pub use schedule::{GroupSchedule, RawSchedule, Schedule, ScheduleTarget, TeacherSchedule};
