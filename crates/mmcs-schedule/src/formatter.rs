//! Reshaping raw schedules into day-grouped display rows.
//!
//! Every schedule is split three ways at once: all lessons, lessons held in
//! upper weeks, lessons held in lower weeks. A day that ends up with no
//! lessons under a filter is left out of that filter's view entirely.

use mmcs_core::days::{DAYS_OF_WEEK, TEACHER_WEEK_DAYS};
use mmcs_core::entities::{
    DaySchedule, DisplayLesson, FormattedScheduleSet, GroupLesson, GroupSchedule, Lesson,
    RawSchedule, TeacherLesson, TeacherSchedule,
};
use mmcs_core::enums::WeekType;

/// Format a fetched schedule of either kind.
#[must_use]
pub fn format(schedule: &RawSchedule) -> FormattedScheduleSet {
    match schedule {
        RawSchedule::Group(schedule) => format_group(schedule),
        RawSchedule::Teacher(schedule) => format_teacher(schedule),
    }
}

/// Group schedules cover as many days as were fetched.
#[must_use]
pub fn format_group(schedule: &GroupSchedule) -> FormattedScheduleSet {
    format_days(&schedule.days, schedule.days.len(), group_row)
}

/// Teacher schedules always cover Monday to Saturday.
#[must_use]
pub fn format_teacher(schedule: &TeacherSchedule) -> FormattedScheduleSet {
    format_days(&schedule.days, TEACHER_WEEK_DAYS, teacher_row)
}

/// Display row for a lesson in a group's schedule: teachers one per line, no room.
#[must_use]
pub fn group_row(lesson: &GroupLesson) -> DisplayLesson {
    row(lesson, String::new(), lesson.teachers.join("\n"))
}

/// Display row for a lesson in a teacher's schedule: room plus comma-separated groups.
#[must_use]
pub fn teacher_row(lesson: &TeacherLesson) -> DisplayLesson {
    row(lesson, lesson.room.clone(), lesson.groups.join(",\n"))
}

fn row<L: Lesson>(lesson: &L, room: String, people: String) -> DisplayLesson {
    let period = lesson.period();
    DisplayLesson {
        start: period.begin_text(),
        end: period.end_text(),
        subject: lesson.subject_name().to_string(),
        room,
        people,
        week_label: lesson.week_type().lesson_label().to_string(),
    }
}

/// Group the first `day_count` days into the three filtered views.
///
/// Days past the end of `days` or past Sunday are skipped. Lesson order
/// inside a day is kept as given.
#[must_use]
pub fn format_days<L, F>(days: &[Vec<L>], day_count: usize, project: F) -> FormattedScheduleSet
where
    L: Lesson,
    F: Fn(&L) -> DisplayLesson,
{
    if days.len() > DAYS_OF_WEEK.len() {
        tracing::warn!(
            days = days.len(),
            "schedule has more days than a week; extra days are dropped"
        );
    }

    let mut set = FormattedScheduleSet::default();
    for (lessons, day) in days.iter().take(day_count).zip(DAYS_OF_WEEK) {
        let mut full = Vec::with_capacity(lessons.len());
        let mut upper = Vec::new();
        let mut lower = Vec::new();

        for lesson in lessons {
            let week = lesson.week_type();
            let display = project(lesson);
            if week.matches(WeekType::Upper) {
                upper.push(display.clone());
            }
            if week.matches(WeekType::Lower) {
                lower.push(display.clone());
            }
            full.push(display);
        }

        push_day(&mut set.full, day, full);
        push_day(&mut set.upper, day, upper);
        push_day(&mut set.lower, day, lower);
    }
    set
}

fn push_day(view: &mut Vec<DaySchedule>, day: &str, lessons: Vec<DisplayLesson>) {
    if !lessons.is_empty() {
        view.push(DaySchedule {
            day: day.to_string(),
            lessons,
        });
    }
}
