use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use commands::{handle_history_commands, handle_scan_commands};
use services::settings::load_settings;

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TIDYNAME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(cli.history_file.as_deref())?;

    match &cli.command {
        Commands::History { command } => handle_history_commands(&cli, command, &settings)?,
        Commands::List { .. } | Commands::Rename { .. } => handle_scan_commands(&cli, &settings)?,
    }

    Ok(())
}
