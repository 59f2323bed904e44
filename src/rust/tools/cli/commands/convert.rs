#![cfg(feature = "cli")]
#![allow(deprecated)]

use anyhow::Result;
use clap::{Args, Subcommand};

use super::MetricsArgs;
use crate::engine::units::{self, Unit, legacy};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct ConvertCommand {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f32,

    /// Unit the value is expressed in
    #[arg(short, long, value_enum)]
    pub from: Unit,

    /// Unit to convert to
    #[arg(short, long, value_enum)]
    pub to: Unit,

    #[command(flatten)]
    pub metrics: MetricsArgs,
}

impl ConvertCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let metrics = self.metrics.resolve(ctx.config())?;
        let converted = units::convert(self.from, self.value, &metrics, self.to);
        println!("{}", converted);
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct PxCommand {
    #[arg(allow_negative_numbers = true)]
    pub value: f32,

    #[arg(short, long, value_enum)]
    pub from: Unit,

    /// Truncate the result toward zero
    #[arg(long, default_value_t = false)]
    pub round: bool,

    #[command(flatten)]
    pub metrics: MetricsArgs,
}

impl PxCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let metrics = self.metrics.resolve(ctx.config())?;
        if self.round {
            println!("{}", units::to_pixels_rounded(self.from, self.value, &metrics));
        } else {
            println!("{}", units::to_pixels(self.from, self.value, &metrics));
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum LegacyAction {
    /// Density-independent points to pixels
    Dip2px {
        #[arg(allow_negative_numbers = true)]
        value: i32,
        #[command(flatten)]
        metrics: MetricsArgs,
    },
    /// Pixels to density-independent points
    Px2dip {
        #[arg(allow_negative_numbers = true)]
        value: f32,
        #[command(flatten)]
        metrics: MetricsArgs,
    },
    /// Scale-independent points to pixels
    Sp2px {
        #[arg(allow_negative_numbers = true)]
        value: f32,
        #[command(flatten)]
        metrics: MetricsArgs,
    },
    /// Pixels to scale-independent points
    Px2sp {
        #[arg(allow_negative_numbers = true)]
        value: f32,
        #[command(flatten)]
        metrics: MetricsArgs,
    },
}

pub fn execute_legacy(action: LegacyAction, ctx: &CliContext) -> Result<()> {
    let base = ctx.config();
    let result = match action {
        LegacyAction::Dip2px { value, metrics } => legacy::dip2px(&metrics.resolve(base)?, value),
        LegacyAction::Px2dip { value, metrics } => legacy::px2dip(&metrics.resolve(base)?, value),
        LegacyAction::Sp2px { value, metrics } => legacy::sp2px(&metrics.resolve(base)?, value),
        LegacyAction::Px2sp { value, metrics } => legacy::px2sp(&metrics.resolve(base)?, value),
    };
    println!("{}", result);
    Ok(())
}
