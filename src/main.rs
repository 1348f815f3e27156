use clap::Parser;

use pager_rs::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(environment = %cli.environment(), "Configuration loaded");

    cli::execute_command(&cli, settings).await?;

    Ok(())
}
