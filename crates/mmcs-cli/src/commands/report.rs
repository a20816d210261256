use serde::Serialize;

use mmcs_config::MmcsConfig;

use crate::cli::{GlobalFlags, TargetArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReportResponse {
    subject: String,
    body: String,
}

/// Handle `mmcs report`.
///
/// The schedule is fetched first so the report can name it; a failed fetch
/// still produces a report.
pub async fn handle(
    args: &TargetArgs,
    config: &MmcsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut presenter = super::presenter(args, config).await?;
    if let Some(target) = args.target() {
        if let Err(error) = presenter.get_schedule(target).await {
            tracing::warn!(%error, "reporting on a schedule that failed to load");
        }
    }
    presenter.on_report_error();

    let (subject, body) = presenter.view().report.clone().unwrap_or_default();
    output(&ReportResponse { subject, body }, flags.format, |r: &ReportResponse| {
        format!("Subject: {}\n\n{}", r.subject, r.body)
    })
}
