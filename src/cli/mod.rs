//! Command-line interface wiring for the `idcard` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use idcard::{Clock, FixedClock, IdService, SystemClock};

pub mod generate;
pub mod regions;
pub mod utils;
pub mod validate;

/// Parsed CLI entrypoint for the `idcard` binary.
#[derive(Parser, Debug)]
#[command(
    name = "idcard",
    version,
    about = "Validate and generate 18-digit resident identity numbers"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Treat this date (YYYY-MM-DD) as today instead of the system date.
    #[arg(long, global = true, value_parser = utils::parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Build the service with either the pinned or the system clock.
    pub fn service(&self) -> IdService<Box<dyn Clock>> {
        let clock: Box<dyn Clock> = match self.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        };
        IdService::new(clock)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check identifiers and decode the facts they carry.
    Validate(validate::ValidateArgs),
    /// Generate identifiers from optional constraints.
    Generate(generate::GenerateArgs),
    /// List the region codes in table order.
    Regions,
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Validate(args) => validate::handle(&cli.global, args),
        Command::Generate(args) => generate::handle(&cli.global, args),
        Command::Regions => regions::handle(&cli.global),
    }
}
