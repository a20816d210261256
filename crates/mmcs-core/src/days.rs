//! Monday-first day labels used for every displayed schedule.

/// Day names indexed by day-of-week, Monday first.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Number of days a teacher schedule always spans (Monday to Saturday).
pub const TEACHER_WEEK_DAYS: usize = 6;

/// Label for the day at `index`, or `None` past Sunday.
#[must_use]
pub fn day_label(index: usize) -> Option<&'static str> {
    DAYS_OF_WEEK.get(index).copied()
}
