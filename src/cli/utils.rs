//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Clap-friendly parser for `YYYY-MM-DD` dates.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {}", err))
}

/// Collect candidates from positional arguments, or one per line from a file
/// (`-` for stdin). Blank lines are skipped.
pub fn read_candidates(ids: Vec<String>, from: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = from else {
        return Ok(ids);
    };
    let text = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let mut candidates = ids;
    candidates.extend(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );
    Ok(candidates)
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Seeded generator when a seed is given, otherwise seeded from the OS.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{}", json);
    Ok(())
}
