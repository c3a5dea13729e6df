//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::io::Write;

use super::handlers::{ChannelsCommandHandler, DemoCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// Dispatches to the handler for the parsed subcommand. Running without a
/// subcommand behaves like `send` with the configured message and chain.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
/// * `out` - Destination for notification output (stdout in the binary)
///
/// # Errors
/// Returns errors from command handlers, which only fail on output errors
pub fn execute_command<W: Write>(cli: &Cli, settings: Settings, out: &mut W) -> AppResult<()> {
    tracing::debug!(command = command_name(cli), "Executing command");

    match &cli.command {
        Some(Commands::Send { .. }) | None => {
            SendCommandHandler::new(settings.notifier).execute(out)?;
            Ok(())
        }
        Some(Commands::Demo { .. }) => DemoCommandHandler::new(settings.notifier).execute(out),
        Some(Commands::Channels) => ChannelsCommandHandler.execute(out),
    }
}

fn command_name(cli: &Cli) -> &'static str {
    match cli.command {
        Some(Commands::Send { .. }) | None => "send",
        Some(Commands::Demo { .. }) => "demo",
        Some(Commands::Channels) => "channels",
    }
}
