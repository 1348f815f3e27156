//! Dispatches parsed CLI commands to their handlers.

use super::handlers::{RangeArgs, RangeCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Run the command selected on the command line.
///
/// No subcommand means `serve`.
///
/// # Errors
/// Returns errors from argument validation or the command handler
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings, cli.environment())
                .execute(dry_run)
                .await
        }
        None => {
            ServeCommandHandler::new(settings, cli.environment())
                .execute(false)
                .await
        }
        Some(Commands::Range {
            total_count,
            page_size,
            current_page,
            sibling_count,
            json,
        }) => RangeCommandHandler::new(settings.pagination).execute(RangeArgs {
            total_count,
            page_size,
            current_page,
            sibling_count,
            json,
        }),
    }
}

fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    if let Some(Commands::Serve {
        host: Some(ref host),
        port: Some(port),
        ..
    }) = cli.command
        && port < 1024
        && host == "0.0.0.0"
    {
        tracing::warn!(
            port,
            "Binding to 0.0.0.0 on a privileged port typically requires root privileges"
        );
    }

    Ok(())
}
