//! Capabilities the presenter needs from whatever displays the schedule.

use mmcs_core::enums::WeekType;

/// One-way notifications from the presenter to a display surface.
pub trait ScheduleView {
    fn set_subtitle(&mut self, subtitle: &str);

    /// Switch the visible view to `week_type`.
    fn change_week_type(&mut self, week_type: WeekType);

    fn start_report_error_activity(&mut self, subject: &str, body: &str);

    fn start_pick_schedule_activity(&mut self);
}
