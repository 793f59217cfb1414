//! Raritymon CLI Binary
//!
//! Command-line interface and HTTP server entry point.

use anyhow::Context;
use clap::Parser;
use raritymon::logging::init_logging;
use raritymon::tooling::{Cli, CliContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut context =
        CliContext::new(cli.config.clone()).context("Error loading configuration")?;
    context.apply_log_overrides(&cli);
    init_logging(&context.config().logging).context("Error initializing logging")?;

    let output = context.execute(&cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
