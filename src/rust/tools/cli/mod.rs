// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::config::ConfigAction;
use commands::convert::{ConvertCommand, LegacyAction, PxCommand};
use commands::time::TimeCommand;
use state::CliContext;

#[derive(Parser, Debug)]
#[command(name = "metrickit")]
#[command(
    version,
    about = "metrickit – split timing and screen-density unit conversion."
)]
pub struct Cli {
    /// Directory holding metrickit.toml, metrickit.json or .metrickit
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a value between two units
    Convert(ConvertCommand),
    /// Convert a value to pixels
    Px(PxCommand),
    /// Rounding helpers kept for compatibility (adds 0.5 before truncating)
    Legacy {
        #[command(subcommand)]
        action: LegacyAction,
    },
    /// Run shell commands in order and report the time each one took
    Time(TimeCommand),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::load(&cli.config_dir)?;

    match cli.command {
        Commands::Convert(command) => command.execute(&ctx)?,
        Commands::Px(command) => command.execute(&ctx)?,
        Commands::Legacy { action } => commands::convert::execute_legacy(action, &ctx)?,
        Commands::Time(command) => command.execute(&ctx)?,
        Commands::Config { action } => commands::config::execute(action, &ctx)?,
    }
    Ok(())
}
