//! Terminal display surface for the presenter.
//!
//! The presenter notifies; the command handler prints what was collected
//! once the presenter is done.

use mmcs_core::enums::WeekType;
use mmcs_schedule::ScheduleView;

#[derive(Debug, Default)]
pub struct TerminalView {
    pub subtitle: Option<String>,
    pub week_type: Option<WeekType>,
    pub report: Option<(String, String)>,
    pub pick_requested: bool,
}

impl ScheduleView for TerminalView {
    fn set_subtitle(&mut self, subtitle: &str) {
        self.subtitle = Some(subtitle.to_string());
    }

    fn change_week_type(&mut self, week_type: WeekType) {
        tracing::debug!(%week_type, "view switched");
        self.week_type = Some(week_type);
    }

    fn start_report_error_activity(&mut self, subject: &str, body: &str) {
        self.report = Some((subject.to_string(), body.to_string()));
    }

    fn start_pick_schedule_activity(&mut self) {
        self.pick_requested = true;
    }
}
