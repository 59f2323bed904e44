#![cfg(feature = "cli")]

use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::shared::SplitTimer;
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct TimeCommand {
    /// Shell commands to run, each one closes a split
    #[arg(required = true, num_args = 1..)]
    pub commands: Vec<String>,

    /// Log tag (defaults to the configured tag)
    #[arg(long)]
    pub tag: Option<String>,

    /// Session label shown on every report line
    #[arg(short, long)]
    pub label: Option<String>,

    /// Measure every split from the session start instead of the previous split
    #[arg(long, default_value_t = false)]
    pub from_start: bool,

    /// Record and report even when the config leaves debug off
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Print the report as JSON instead of log lines
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl TimeCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let timer_config = &ctx.config().timer;

        let tag = self.tag.as_deref().unwrap_or(&timer_config.tag);
        let label = self.label.as_deref().unwrap_or(&timer_config.label);
        let debug = self.debug || timer_config.debug;
        let from_start = self.from_start || timer_config.from_start;

        let mut timer = SplitTimer::new(tag, label, debug);
        let mut failures = 0usize;

        for command in &self.commands {
            let status = run_shell(command)?;
            timer.add_split(Some(command.as_str()));
            if !status.success() {
                failures += 1;
                logger.error(format!("'{}' exited with {}", command, status));
            }
        }

        if self.json {
            if let Some(report) = timer.report(from_start) {
                let json = serde_json::to_string_pretty(&report).context("serialize report")?;
                println!("{}", json);
            }
        } else {
            timer.emit_report(logger.as_ref(), from_start);
        }

        if failures > 0 {
            bail!("{} of {} command(s) failed", failures, self.commands.len());
        }
        Ok(())
    }
}

fn run_shell(command: &str) -> Result<ExitStatus> {
    let mut process = if cfg!(windows) {
        let mut process = Command::new("cmd");
        process.arg("/C").arg(command);
        process
    } else {
        let mut process = Command::new("sh");
        process.arg("-c").arg(command);
        process
    };

    process
        .status()
        .with_context(|| format!("failed to spawn '{}'", command))
}
