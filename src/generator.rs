use chrono::{Duration, NaiveDate};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{BODY_LEN, CodecError, Sex, check_digit, parse_birth_date};
use crate::region::RegionTable;

/// Upper bound on identifiers produced by one batch request.
pub const MAX_BATCH: usize = 50;

const MAX_SEQUENCE: u16 = 999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),
    #[error("region code '{0}' must contain only digits")]
    MalformedRegion(String),
    #[error("batch size must be between 1 and 50, got {0}")]
    BatchSize(usize),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Optional constraints; anything left unset is randomized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationConstraints {
    /// Two-digit region code, or a longer prefix of the six-digit area code.
    pub region: Option<String>,
    /// Birth date as `YYYY-MM-DD` or `YYYYMMDD`.
    pub birth_date: Option<String>,
    pub sex: Option<Sex>,
}

impl GenerationConstraints {
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn birth_date<S: Into<String>>(mut self, birth_date: S) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

/// Synthesize one identifier satisfying `constraints`.
pub fn generate<R: Rng + ?Sized>(
    constraints: &GenerationConstraints,
    rng: &mut R,
    today: NaiveDate,
) -> Result<String, GenerateError> {
    let mut id = String::with_capacity(BODY_LEN + 1);
    id.push_str(&resolve_region(constraints.region.as_deref(), rng)?);
    id.push_str(&resolve_birth_date(constraints.birth_date.as_deref(), rng, today));
    let sequence = force_parity(rng.random_range(1..=MAX_SEQUENCE), constraints.sex);
    id.push_str(&format!("{:03}", sequence));

    let check = check_digit(&id)?;
    id.push(check);
    debug!(id = %id, "generated identifier");
    Ok(id)
}

/// Synthesize `count` independent identifiers, `1 <= count <= MAX_BATCH`.
pub fn generate_batch<R: Rng + ?Sized>(
    constraints: &GenerationConstraints,
    count: usize,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Vec<String>, GenerateError> {
    if !(1..=MAX_BATCH).contains(&count) {
        return Err(GenerateError::BatchSize(count));
    }
    (0..count).map(|_| generate(constraints, rng, today)).collect()
}

/// Resolve the six-digit area segment (region + sub-region).
fn resolve_region<R: Rng + ?Sized>(
    region: Option<&str>,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let code = region.map(str::trim).unwrap_or_default();
    let area = match code.len() {
        0 | 1 => format!("{}{}", RegionTable::choose(rng).code, random_sub_region(rng)),
        2 => {
            if !RegionTable::contains(code) {
                return Err(GenerateError::UnknownRegion(code.to_string()));
            }
            format!("{}{}", code, random_sub_region(rng))
        }
        3..=5 => {
            warn!(region = code, "padding short area code with zeros");
            format!("{:0<6}", code)
        }
        _ => {
            let area: String = code.chars().take(6).collect();
            let prefix: String = area.chars().take(2).collect();
            if !RegionTable::contains(&prefix) {
                return Err(GenerateError::UnknownRegion(prefix));
            }
            area
        }
    };
    if area.len() != 6 || !area.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenerateError::MalformedRegion(code.to_string()));
    }
    Ok(area)
}

/// City (01-20) and county (01-30) digits.
fn random_sub_region<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{:02}{:02}",
        rng.random_range(1..=20u32),
        rng.random_range(1..=30u32)
    )
}

fn resolve_birth_date<R: Rng + ?Sized>(
    birth_date: Option<&str>,
    rng: &mut R,
    today: NaiveDate,
) -> String {
    let Some(raw) = birth_date else {
        return random_birth_date(rng, today).format("%Y%m%d").to_string();
    };
    let compact = raw.trim().replace('-', "");
    if compact.len() == 8 && parse_birth_date(&compact, today).is_ok() {
        return compact;
    }
    warn!(birth_date = raw, %today, "unusable birth date, falling back to today");
    today.format("%Y%m%d").to_string()
}

/// Uniform over 1950-01-01..=2005-12-31, clipped so it never passes `today`.
fn random_birth_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).expect("1950-01-01 is a valid date");
    let end = NaiveDate::from_ymd_opt(2005, 12, 31).expect("2005-12-31 is a valid date");
    if today < start {
        return today;
    }
    let span = (end.min(today) - start).num_days();
    start + Duration::days(rng.random_range(0..=span))
}

/// Nudge `sequence` up by one to reach the parity for `sex`. The only value that
/// would leave the three-digit field (999 forced even) steps down to 998 instead.
pub fn force_parity(sequence: u16, sex: Option<Sex>) -> u16 {
    let want_odd = match sex {
        Some(Sex::Male) => true,
        Some(Sex::Female) => false,
        None => return sequence,
    };
    if (sequence % 2 == 1) == want_odd {
        return sequence;
    }
    if sequence == MAX_SEQUENCE {
        sequence - 1
    } else {
        sequence + 1
    }
}
