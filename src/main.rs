use std::io;

use anyhow::Context;
use clap::Parser;
use notifier_rs::cli::{execute_command, init_logger_from_settings, load_and_merge_config, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli).context("Failed to load configuration")?;
    init_logger_from_settings(&settings).context("Failed to initialize logging")?;

    tracing::debug!(
        app = %settings.application.name,
        version = notifier_rs::pkg_version(),
        "Starting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command(&cli, settings, &mut out)?;

    Ok(())
}
