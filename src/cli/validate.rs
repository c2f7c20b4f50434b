//! Validation workflow (`idcard validate ...`).

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use idcard::ValidationReport;

use crate::cli::GlobalArgs;
use crate::cli::utils::{print_json, read_candidates};

/// Arguments for `idcard validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to check.
    pub ids: Vec<String>,
    /// Read additional identifiers, one per line (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Exit with an error if any identifier is invalid.
    #[arg(long)]
    pub strict: bool,
}

/// Execute a validation command.
pub fn handle(global: &GlobalArgs, args: ValidateArgs) -> Result<()> {
    let candidates = read_candidates(args.ids, args.from.as_deref())?;
    if candidates.is_empty() {
        return Err(anyhow!("no identifiers given; pass them as arguments or via --from"));
    }

    let service = global.service();
    let reports = candidates
        .iter()
        .map(|candidate| service.validate(candidate))
        .collect::<Result<Vec<_>, _>>()?;

    if global.json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            println!("{}", describe(report));
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if args.strict && invalid > 0 {
        return Err(anyhow!(
            "{} of {} identifiers failed validation",
            invalid,
            reports.len()
        ));
    }
    Ok(())
}

fn describe(report: &ValidationReport) -> String {
    if !report.valid {
        return format!("{}  INVALID  {}", report.id, report.message);
    }
    let mut line = format!("{}  VALID", report.id);
    if let Some(region) = report.region {
        line.push_str(&format!("  region={}", region));
    }
    if let Some(date) = report.birth_date {
        line.push_str(&format!("  born={}", date));
    }
    if let Some(sex) = report.sex {
        line.push_str(&format!("  sex={}", sex));
    }
    if let Some(age) = report.age {
        line.push_str(&format!("  age={}", age));
    }
    if let Some(zodiac) = report.zodiac {
        line.push_str(&format!("  zodiac={}", zodiac));
    }
    if let Some(sign) = report.star_sign {
        line.push_str(&format!("  sign={}", sign));
    }
    line
}
