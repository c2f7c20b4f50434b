//! Generation workflow (`idcard generate ...`).

use anyhow::Result;
use clap::Args;
use idcard::GenerateRequest;

use crate::cli::GlobalArgs;
use crate::cli::utils::{build_rng, print_json};

/// Arguments for `idcard generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Two-digit region code (see `idcard regions`).
    #[arg(long)]
    pub region: Option<String>,
    /// Birth date as YYYY-MM-DD.
    #[arg(long = "birth-date")]
    pub birth_date: Option<String>,
    /// `male` or `female`.
    #[arg(long)]
    pub sex: Option<String>,
    /// How many identifiers to produce (1-50).
    #[arg(long, short = 'n', default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,
    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute a generation command.
pub fn handle(global: &GlobalArgs, args: GenerateArgs) -> Result<()> {
    let request = GenerateRequest {
        region: args.region,
        birth_date: args.birth_date,
        sex: args.sex,
        count: Some(args.count),
    };
    let mut rng = build_rng(args.seed);
    let response = global.service().generate(&request, &mut rng)?;

    if global.json {
        print_json(&response)?;
    } else {
        for id in &response.id_cards {
            println!("{}", id);
        }
    }
    Ok(())
}
