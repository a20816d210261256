use anyhow::Context;

use mmcs_config::MmcsConfig;
use mmcs_schedule::{LocalRepository, SchedulePresenter, TomlPreferences};

use crate::cli::{Commands, GlobalFlags, TargetArgs};
use crate::view::TerminalView;

pub mod pick;
pub mod report;
pub mod show;

type TerminalPresenter = SchedulePresenter<LocalRepository, TomlPreferences, TerminalView>;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &MmcsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Show(args) => show::handle(&args, config, flags).await,
        Commands::Pick => pick::handle(config, flags),
        Commands::Report(args) => report::handle(&args, config, flags).await,
    }
}

fn preferences(config: &MmcsConfig) -> anyhow::Result<TomlPreferences> {
    let path = config
        .preferences
        .resolved_path()
        .context("no preferences path configured and no user config directory found")?;
    Ok(TomlPreferences::new(
        path,
        config.general.default_week_type_option,
    ))
}

async fn presenter(args: &TargetArgs, config: &MmcsConfig) -> anyhow::Result<TerminalPresenter> {
    let repository = LocalRepository::load(&args.data)
        .await
        .with_context(|| format!("failed to load schedule bundle {}", args.data.display()))?;
    Ok(SchedulePresenter::with_config(
        repository,
        preferences(config)?,
        TerminalView::default(),
        config,
    ))
}
