use std::fmt::Write as _;

use serde::Serialize;

use mmcs_core::entities::{DaySchedule, DisplayLesson};

use crate::cli::OutputFormat;

/// Print a serializable response, or its text rendering.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Text => text(value),
    };
    println!("{rendered}");
    Ok(())
}

/// Render one view as an indented day list.
pub fn render_days(days: &[DaySchedule]) -> String {
    if days.is_empty() {
        return "  (no lessons)\n".to_string();
    }

    let mut out = String::new();
    for day in days {
        let _ = writeln!(out, "{}", day.day);
        for lesson in &day.lessons {
            render_lesson(&mut out, lesson);
        }
    }
    out
}

fn render_lesson(out: &mut String, lesson: &DisplayLesson) {
    let time = format!("{}-{}", lesson.start, lesson.end);
    let _ = write!(out, "  {time:<12}{}", lesson.subject);
    if !lesson.room.is_empty() {
        let _ = write!(out, " [{}]", lesson.room);
    }
    if !lesson.week_label.is_empty() {
        let _ = write!(out, " ({})", lesson.week_label);
    }
    out.push('\n');
    for person in lesson.people.lines() {
        let _ = writeln!(out, "  {:<12}{person}", "");
    }
}
