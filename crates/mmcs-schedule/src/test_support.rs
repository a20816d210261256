//! Shared test utilities for mmcs-schedule unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mmcs_core::entities::{
        GroupLesson, GroupSchedule, Schedule, TeacherLesson, TeacherSchedule, TimePeriod,
    };
    use mmcs_core::enums::{WeekType, WeekTypeOption};

    use crate::error::{PreferencesError, RepositoryError};
    use crate::local::LocalRepository;
    use crate::preferences::Preferences;
    use crate::repository::ScheduleRepository;
    use crate::view::ScheduleView;

    /// A single notification received by [`RecordingView`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ViewEvent {
        Subtitle(String),
        WeekType(WeekType),
        ReportError { subject: String, body: String },
        PickSchedule,
    }

    /// View that records every notification in order.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub events: Vec<ViewEvent>,
    }

    impl ScheduleView for RecordingView {
        fn set_subtitle(&mut self, subtitle: &str) {
            self.events.push(ViewEvent::Subtitle(subtitle.to_string()));
        }

        fn change_week_type(&mut self, week_type: WeekType) {
            self.events.push(ViewEvent::WeekType(week_type));
        }

        fn start_report_error_activity(&mut self, subject: &str, body: &str) {
            self.events.push(ViewEvent::ReportError {
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }

        fn start_pick_schedule_activity(&mut self) {
            self.events.push(ViewEvent::PickSchedule);
        }
    }

    /// Wraps a [`LocalRepository`] and counts schedule requests.
    pub struct CountingRepository {
        inner: LocalRepository,
        schedule_fetches: AtomicUsize,
    }

    impl CountingRepository {
        pub fn new(inner: LocalRepository) -> Self {
            Self {
                inner,
                schedule_fetches: AtomicUsize::new(0),
            }
        }

        pub fn schedule_fetches(&self) -> usize {
            self.schedule_fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ScheduleRepository for CountingRepository {
        async fn current_week_type(&self) -> Result<WeekType, RepositoryError> {
            self.inner.current_week_type().await
        }

        async fn schedule_of_group(&self, id: u32) -> Result<GroupSchedule, RepositoryError> {
            self.schedule_fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.schedule_of_group(id).await
        }

        async fn schedule_of_teacher(&self, id: u32) -> Result<TeacherSchedule, RepositoryError> {
            self.schedule_fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.schedule_of_teacher(id).await
        }
    }

    /// Preferences whose storage is always unusable.
    pub struct BrokenPreferences;

    impl Preferences for BrokenPreferences {
        fn week_type_option(&self) -> Result<WeekTypeOption, PreferencesError> {
            Err(PreferencesError::Poisoned)
        }

        fn set_week_type_option(&self, _: WeekTypeOption) -> Result<(), PreferencesError> {
            Err(PreferencesError::Poisoned)
        }

        fn schedule_was_picked(&self) -> Result<bool, PreferencesError> {
            Err(PreferencesError::Poisoned)
        }

        fn set_schedule_was_picked(&self, _: bool) -> Result<(), PreferencesError> {
            Err(PreferencesError::Poisoned)
        }
    }

    /// Monday: every-week Algebra then lower-week Lab. Tuesday: nothing.
    pub fn scenario_group_schedule() -> GroupSchedule {
        Schedule::new(vec![
            vec![
                GroupLesson {
                    period: TimePeriod::from_hm((9, 0), (10, 30)).unwrap(),
                    subject_name: "Algebra".into(),
                    week_type: WeekType::Full,
                    teachers: vec!["Иванов И.И.".into()],
                },
                GroupLesson {
                    period: TimePeriod::from_hm((10, 45), (12, 15)).unwrap(),
                    subject_name: "Lab".into(),
                    week_type: WeekType::Lower,
                    teachers: vec!["Петров П.П.".into(), "Сидоров С.С.".into()],
                },
            ],
            vec![],
        ])
    }

    /// Six days, one upper-week seminar on Wednesday.
    pub fn scenario_teacher_schedule() -> TeacherSchedule {
        let mut days = vec![Vec::new(); 6];
        days[2].push(TeacherLesson {
            period: TimePeriod::from_hm((13, 0), (14, 30)).unwrap(),
            subject_name: "Геометрия".into(),
            week_type: WeekType::Upper,
            room: "314".into(),
            groups: vec!["М1".into(), "М2".into()],
        });
        Schedule::new(days)
    }
}
