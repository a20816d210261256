//! End-to-end formatting scenarios over the public API.

use mmcs_core::entities::{
    DaySchedule, GroupLesson, RawSchedule, Schedule, TeacherLesson, TimePeriod,
};
use mmcs_core::enums::{WeekType, WeekTypeOption};
use mmcs_schedule::formatter::{format, format_group, format_teacher};
use mmcs_schedule::resolver::{label, resolve};
use pretty_assertions::assert_eq;

fn lesson(subject: &str, begin: (u32, u32), end: (u32, u32), week_type: WeekType) -> GroupLesson {
    GroupLesson {
        period: TimePeriod::from_hm(begin, end).unwrap(),
        subject_name: subject.into(),
        week_type,
        teachers: vec!["Иванов И.И.".into()],
    }
}

fn outline(view: &[DaySchedule]) -> Vec<(&str, Vec<&str>)> {
    view.iter()
        .map(|d| {
            (
                d.day.as_str(),
                d.lessons.iter().map(|l| l.subject.as_str()).collect(),
            )
        })
        .collect()
}

#[test]
fn monday_algebra_and_lower_lab() {
    let schedule = Schedule::new(vec![
        vec![
            lesson("Algebra", (9, 0), (10, 30), WeekType::Full),
            lesson("Lab", (10, 45), (12, 15), WeekType::Lower),
        ],
        vec![],
    ]);

    let set = format_group(&schedule);

    assert_eq!(outline(&set.full), vec![("Понедельник", vec!["Algebra", "Lab"])]);
    assert_eq!(outline(&set.upper), vec![("Понедельник", vec!["Algebra"])]);
    assert_eq!(outline(&set.lower), vec![("Понедельник", vec!["Algebra", "Lab"])]);

    let algebra = &set.full[0].lessons[0];
    assert_eq!(algebra.start, "9:00");
    assert_eq!(algebra.end, "10:30");
    assert_eq!(algebra.week_label, "");
    assert_eq!(set.full[0].lessons[1].week_label, "нижняя неделя");
}

#[test]
fn teacher_lesson_joins_groups_and_keeps_room() {
    let mut days = vec![Vec::new(); 6];
    days[0].push(TeacherLesson {
        period: TimePeriod::from_hm((9, 0), (10, 30)).unwrap(),
        subject_name: "Алгебра".into(),
        week_type: WeekType::Upper,
        room: "314".into(),
        groups: vec!["М1".into(), "М2".into()],
    });

    let set = format_teacher(&Schedule::new(days));

    let row = &set.full[0].lessons[0];
    assert_eq!(row.people, "М1,\nМ2");
    assert_eq!(row.room, "314");
    assert_eq!(row.week_label, "верхняя неделя");
    assert!(set.lower.is_empty());
}

#[test]
fn order_within_and_across_days_is_preserved() {
    // Deliberately out of time order: the formatter must not sort.
    let schedule = Schedule::new(vec![
        vec![
            lesson("late", (15, 0), (16, 30), WeekType::Full),
            lesson("early", (8, 0), (9, 30), WeekType::Upper),
        ],
        vec![lesson("tuesday", (9, 0), (10, 30), WeekType::Full)],
        vec![],
        vec![lesson("thursday", (9, 0), (10, 30), WeekType::Lower)],
    ]);

    let set = format(&RawSchedule::Group(schedule));

    assert_eq!(
        outline(&set.full),
        vec![
            ("Понедельник", vec!["late", "early"]),
            ("Вторник", vec!["tuesday"]),
            ("Четверг", vec!["thursday"]),
        ]
    );
    assert_eq!(
        outline(&set.upper),
        vec![
            ("Понедельник", vec!["late", "early"]),
            ("Вторник", vec!["tuesday"]),
        ]
    );
    assert_eq!(
        outline(&set.lower),
        vec![
            ("Понедельник", vec!["late"]),
            ("Вторник", vec!["tuesday"]),
            ("Четверг", vec!["thursday"]),
        ]
    );
}

#[test]
fn no_view_contains_a_lesson_from_the_opposite_week() {
    let schedule = Schedule::new(vec![
        vec![
            lesson("f", (9, 0), (10, 0), WeekType::Full),
            lesson("u", (10, 0), (11, 0), WeekType::Upper),
            lesson("l", (11, 0), (12, 0), WeekType::Lower),
        ];
        7
    ]);

    let set = format_group(&schedule);

    assert_eq!(set.full.len(), 7);
    for day in &set.upper {
        assert!(day.lessons.iter().all(|l| l.week_label != "нижняя неделя"));
    }
    for day in &set.lower {
        assert!(day.lessons.iter().all(|l| l.week_label != "верхняя неделя"));
    }
}

#[test]
fn label_and_resolve_agree() {
    assert_eq!(label(WeekTypeOption::Full, WeekType::Lower), "");
    assert_eq!(
        label(WeekTypeOption::Current, WeekType::Upper),
        format!("текущая \"{}\"", WeekType::Upper.short_name())
    );
    for current in WeekType::ALL {
        assert_eq!(resolve(WeekTypeOption::Current, current), current);
    }
}
