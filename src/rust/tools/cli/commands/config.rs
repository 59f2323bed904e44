#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Subcommand;

use crate::platform::config::AppConfig;
use crate::tools::cli::state::CliContext;

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default metrickit.toml into the config directory
    Init,
}

pub fn execute(action: ConfigAction, ctx: &CliContext) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", ctx.config().to_toml()?);
        }
        ConfigAction::Init => {
            let path = AppConfig::write_default(ctx.config_dir())?;
            ctx.logger()
                .success(format!("Config written to {}", path.display()));
        }
    }
    Ok(())
}
