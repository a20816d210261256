use std::path::PathBuf;

use clap::{Args, Subcommand};
use mmcs_core::entities::ScheduleTarget;
use mmcs_core::enums::WeekTypeOption;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show a group's or teacher's schedule for the selected week.
    Show(ShowArgs),
    /// Forget the picked schedule.
    Pick,
    /// Print the error report that would be filed for a schedule.
    Report(TargetArgs),
}

/// Where the schedule comes from and whose it is.
#[derive(Clone, Debug, Args)]
pub struct TargetArgs {
    /// JSON schedule bundle to read
    #[arg(short, long)]
    pub data: PathBuf,

    #[command(flatten)]
    pub who: Who,
}

/// Exactly one of a group or a teacher.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Who {
    /// Student group id
    #[arg(long)]
    pub group: Option<u32>,

    /// Teacher id
    #[arg(long)]
    pub teacher: Option<u32>,
}

impl TargetArgs {
    /// The selected target. Clap guarantees exactly one of the two is set.
    #[must_use]
    pub fn target(&self) -> Option<ScheduleTarget> {
        self.who
            .group
            .map(ScheduleTarget::Group)
            .or_else(|| self.who.teacher.map(ScheduleTarget::Teacher))
    }
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Change the stored week option before showing (current, full, upper, lower)
    #[arg(short, long)]
    pub option: Option<WeekTypeOption>,

    /// Print all three views instead of only the selected one
    #[arg(long)]
    pub all: bool,
}
