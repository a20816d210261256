use std::fmt::Write as _;

use anyhow::Context;
use serde::Serialize;

use mmcs_config::MmcsConfig;
use mmcs_core::entities::{DaySchedule, FormattedScheduleSet, ScheduleTarget};
use mmcs_core::enums::WeekType;
use mmcs_schedule::Preferences;

use crate::cli::{GlobalFlags, ShowArgs};
use crate::output::{output, render_days};

#[derive(Debug, Serialize)]
struct ShowResponse {
    target: ScheduleTarget,
    subtitle: String,
    week_type: WeekType,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<Vec<DaySchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<FormattedScheduleSet>,
}

/// Handle `mmcs show`.
pub async fn handle(
    args: &ShowArgs,
    config: &MmcsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = args
        .target
        .target()
        .context("either --group or --teacher is required")?;
    let mut presenter = super::presenter(&args.target, config).await?;

    let set = presenter.get_schedule(target).await?;
    presenter.preferences().set_schedule_was_picked(true)?;
    if let Some(option) = args.option {
        presenter.on_week_type_option_changed(option)?;
    }

    let week_type = presenter
        .view()
        .week_type
        .context("no week type was resolved for the schedule")?;
    let subtitle = presenter.view().subtitle.clone().unwrap_or_default();

    let response = if args.all {
        ShowResponse {
            target,
            subtitle,
            week_type,
            days: None,
            all: Some(set),
        }
    } else {
        ShowResponse {
            target,
            subtitle,
            week_type,
            days: Some(set.for_week(week_type).to_vec()),
            all: None,
        }
    };

    output(&response, flags.format, render)
}

fn render(response: &ShowResponse) -> String {
    let mut out = format!("{}", response.target);
    if !response.subtitle.is_empty() {
        let _ = write!(out, ": {}", response.subtitle);
    }
    out.push('\n');

    if let Some(days) = &response.days {
        out.push_str(&render_days(days));
    }
    if let Some(all) = &response.all {
        for week in WeekType::ALL {
            let _ = writeln!(out, "\n== {week} ==");
            out.push_str(&render_days(all.for_week(week)));
        }
    }
    out
}
