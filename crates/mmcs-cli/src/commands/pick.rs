use serde::Serialize;

use mmcs_config::MmcsConfig;
use mmcs_schedule::{LocalRepository, Preferences, SchedulePresenter};

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::view::TerminalView;

#[derive(Debug, Serialize)]
struct PickResponse {
    schedule_was_picked: bool,
    pick_requested: bool,
}

/// Handle `mmcs pick`.
pub fn handle(config: &MmcsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut presenter = SchedulePresenter::with_config(
        LocalRepository::new(),
        super::preferences(config)?,
        TerminalView::default(),
        config,
    );
    presenter.on_pick_another_schedule()?;

    let response = PickResponse {
        schedule_was_picked: presenter.preferences().schedule_was_picked()?,
        pick_requested: presenter.view().pick_requested,
    };
    let quiet = flags.quiet;
    output(&response, flags.format, |r: &PickResponse| {
        if quiet || !r.pick_requested {
            String::new()
        } else {
            "Schedule selection cleared. Run `mmcs show --group <id>` or `--teacher <id>` to pick one."
                .to_string()
        }
    })
}
