//! Where raw schedules come from.

use async_trait::async_trait;

use mmcs_core::entities::{GroupSchedule, RawSchedule, ScheduleTarget, TeacherSchedule};
use mmcs_core::enums::WeekType;

use crate::error::RepositoryError;

/// Async source of the current week type and of raw schedules.
///
/// Implementations must be `Send + Sync` so a presenter can be driven from
/// any runtime worker.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// The week type the source considers current.
    async fn current_week_type(&self) -> Result<WeekType, RepositoryError>;

    async fn schedule_of_group(&self, id: u32) -> Result<GroupSchedule, RepositoryError>;

    /// Teacher schedules span Monday to Saturday.
    async fn schedule_of_teacher(&self, id: u32) -> Result<TeacherSchedule, RepositoryError>;

    /// Fetch whichever schedule `target` names.
    async fn schedule_of(&self, target: ScheduleTarget) -> Result<RawSchedule, RepositoryError> {
        match target {
            ScheduleTarget::Group(id) => self.schedule_of_group(id).await.map(RawSchedule::Group),
            ScheduleTarget::Teacher(id) => {
                self.schedule_of_teacher(id).await.map(RawSchedule::Teacher)
            }
        }
    }
}
