//! Schedule presenter: sequences the repository fetches, keeps the view's
//! subtitle and week type in step with the user's option, and hands back
//! formatted schedules.
//!
//! ```text
//! INIT ──current_week_type──▶ WEEK_RESOLVED ──schedule_of(target)──▶ DONE
//!   │                              │
//!   └──────────── error ───────────┴──────────▶ FAILED
//! ```
//!
//! The schedule fetch is only attempted after the week fetch succeeds.

use mmcs_config::MmcsConfig;
use mmcs_core::entities::{FormattedScheduleSet, ScheduleTarget};
use mmcs_core::enums::{WeekType, WeekTypeOption};

use crate::error::ScheduleError;
use crate::formatter;
use crate::preferences::Preferences;
use crate::repository::ScheduleRepository;
use crate::resolver::Resolution;
use crate::view::ScheduleView;

pub struct SchedulePresenter<R, P, V> {
    repository: R,
    preferences: P,
    view: V,
    report_subject: String,
    current_week: Option<WeekType>,
    week_type: Option<WeekType>,
    target: Option<ScheduleTarget>,
}

impl<R, P, V> SchedulePresenter<R, P, V>
where
    R: ScheduleRepository,
    P: Preferences,
    V: ScheduleView,
{
    #[must_use]
    pub fn new(repository: R, preferences: P, view: V) -> Self {
        Self {
            repository,
            preferences,
            view,
            report_subject: mmcs_config::ReportConfig::default().subject,
            current_week: None,
            week_type: None,
            target: None,
        }
    }

    /// Same as [`Self::new`] but takes the report subject from `config`.
    #[must_use]
    pub fn with_config(repository: R, preferences: P, view: V, config: &MmcsConfig) -> Self {
        let mut presenter = Self::new(repository, preferences, view);
        presenter.report_subject.clone_from(&config.report.subject);
        presenter
    }

    /// Fetch the current week, update the view for the stored option, then
    /// fetch and format the schedule of `target`.
    ///
    /// Repository failures are returned unchanged. If the week fetch fails,
    /// the schedule is never requested.
    pub async fn get_schedule(
        &mut self,
        target: ScheduleTarget,
    ) -> Result<FormattedScheduleSet, ScheduleError> {
        self.target = Some(target);

        let current = self
            .repository
            .current_week_type()
            .await
            .inspect_err(|error| tracing::warn!(%error, "current week fetch failed"))?;
        self.current_week = Some(current);
        tracing::debug!(%current, "current week resolved");

        let option = self.preferences.week_type_option()?;
        self.show(Resolution::new(option, self.current_week)?);

        let raw = self
            .repository
            .schedule_of(target)
            .await
            .inspect_err(|error| {
                tracing::warn!(%error, schedule = %target, "schedule fetch failed");
            })?;

        let formatted = formatter::format(&raw);
        tracing::debug!(
            schedule = %target,
            days = formatted.full.len(),
            upper_days = formatted.upper.len(),
            lower_days = formatted.lower.len(),
            "schedule formatted"
        );
        Ok(formatted)
    }

    /// Persist a newly chosen option and switch the view to it.
    ///
    /// Choosing `Current` before any week was fetched fails with
    /// [`ScheduleError::CurrentWeekUnknown`] and changes nothing.
    pub fn on_week_type_option_changed(
        &mut self,
        option: WeekTypeOption,
    ) -> Result<WeekType, ScheduleError> {
        let resolution = Resolution::new(option, self.current_week)?;
        self.preferences.set_week_type_option(option)?;
        tracing::debug!(%option, week = %resolution.week_type, "week type option changed");
        let week_type = resolution.week_type;
        self.show(resolution);
        Ok(week_type)
    }

    /// Forget the picked target and ask the view to offer a new pick.
    pub fn on_pick_another_schedule(&mut self) -> Result<(), ScheduleError> {
        self.preferences.set_schedule_was_picked(false)?;
        self.view.start_pick_schedule_activity();
        Ok(())
    }

    /// Ask the view to open an error report about the current schedule.
    pub fn on_report_error(&mut self) {
        let body = report_body(self.target);
        self.view.start_report_error_activity(&self.report_subject, &body);
    }

    /// Week type reported by the last successful fetch.
    #[must_use]
    pub const fn current_week(&self) -> Option<WeekType> {
        self.current_week
    }

    /// Week type currently shown.
    #[must_use]
    pub const fn week_type(&self) -> Option<WeekType> {
        self.week_type
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }

    fn show(&mut self, resolution: Resolution) {
        self.week_type = Some(resolution.week_type);
        self.view.set_subtitle(&resolution.label);
        self.view.change_week_type(resolution.week_type);
    }
}

fn report_body(target: Option<ScheduleTarget>) -> String {
    match target {
        Some(ScheduleTarget::Group(id)) => format!("группа {id}"),
        Some(ScheduleTarget::Teacher(id)) => format!("преподаватель {id}"),
        None => String::new(),
    }
}
