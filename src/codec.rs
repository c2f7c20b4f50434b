use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::astro::{StarSign, Zodiac};
use crate::region::RegionTable;

/// Total identifier length, check digit included.
pub const ID_LEN: usize = 18;
/// Length of the body covered by the check digit.
pub const BODY_LEN: usize = 17;

const WEIGHTS: [u32; BODY_LEN] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("identifier body must be 17 ASCII digits, got '{0}'")]
    MalformedBody(String),
}

/// Compute the check character for a 17-digit body.
pub fn check_digit(body: &str) -> Result<char, CodecError> {
    let bytes = body.as_bytes();
    if bytes.len() != BODY_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(CodecError::MalformedBody(body.to_string()));
    }
    let sum: u32 = bytes
        .iter()
        .zip(WEIGHTS)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    Ok(CHECK_CODES[(sum % 11) as usize])
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Odd sequence digits encode male, even encode female.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 { Sex::Male } else { Sex::Female }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse the wire token (`male` / `female`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a birth-date field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFault {
    OutOfRange,
    NotACalendarDate,
    InFuture,
}

impl fmt::Display for DateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFault::OutOfRange => f.write_str("month or day out of range"),
            DateFault::NotACalendarDate => f.write_str("no such calendar date"),
            DateFault::InFuture => f.write_str("date is in the future"),
        }
    }
}

/// First failing check of a rejected identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Fault {
    #[error("wrong length: expected 18 characters, got {found}")]
    WrongLength { found: usize },
    #[error("format error: expected 17 digits followed by a digit or 'X'")]
    Format,
    #[error("invalid region code '{code}'")]
    UnknownRegion { code: String },
    #[error("invalid birth date: {0}")]
    BirthDate(DateFault),
    #[error("checksum mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },
}

/// Facts decoded from a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityInfo {
    pub id: String,
    pub region_code: String,
    pub region_name: &'static str,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    /// Calendar-year difference only; month and day are ignored.
    pub age: i32,
    pub zodiac: Zodiac,
    pub star_sign: StarSign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(IdentityInfo),
    Invalid(Fault),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(fault) => Some(fault),
        }
    }

    pub fn info(&self) -> Option<&IdentityInfo> {
        match self {
            ValidationResult::Valid(info) => Some(info),
            ValidationResult::Invalid(_) => None,
        }
    }
}

/// Validate a candidate identifier against `today`.
///
/// Checks run in a fixed order (length, character pattern, region, birth date,
/// checksum) and the first failure is reported. Never errors: every input text maps to
/// either `Valid` or `Invalid`.
pub fn validate(candidate: &str, today: NaiveDate) -> ValidationResult {
    match decode(candidate, today) {
        Ok(info) => ValidationResult::Valid(info),
        Err(fault) => ValidationResult::Invalid(fault),
    }
}

fn decode(candidate: &str, today: NaiveDate) -> Result<IdentityInfo, Fault> {
    let id = candidate.trim().to_uppercase();

    let found = id.chars().count();
    if found != ID_LEN {
        return Err(Fault::WrongLength { found });
    }

    let bytes = id.as_bytes();
    let (body, check) = bytes.split_at(BODY_LEN);
    let check_ok = check[0].is_ascii_digit() || check[0] == b'X';
    if !body.iter().all(u8::is_ascii_digit) || !check_ok {
        return Err(Fault::Format);
    }

    let region_code = &id[0..2];
    let region_name = RegionTable::lookup(region_code).ok_or_else(|| Fault::UnknownRegion {
        code: region_code.to_string(),
    })?;

    let birth_date = parse_birth_date(&id[6..14], today).map_err(Fault::BirthDate)?;

    let expected = check_digit(&id[..BODY_LEN]).map_err(|_| Fault::Format)?;
    let found = char::from(check[0]);
    if expected != found {
        return Err(Fault::ChecksumMismatch { expected, found });
    }

    Ok(IdentityInfo {
        region_code: region_code.to_string(),
        region_name,
        birth_date,
        sex: Sex::from_digit(bytes[16] - b'0'),
        age: today.year() - birth_date.year(),
        zodiac: Zodiac::from_year(birth_date.year() as u32),
        star_sign: StarSign::from_month_day(birth_date.month(), birth_date.day()),
        id,
    })
}

/// Parse an 8-digit `YYYYMMDD` field into a date no later than `today`.
pub fn parse_birth_date(field: &str, today: NaiveDate) -> Result<NaiveDate, DateFault> {
    if field.len() != 8 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateFault::NotACalendarDate);
    }
    let year: i32 = field[0..4].parse().map_err(|_| DateFault::NotACalendarDate)?;
    let month: u32 = field[4..6].parse().map_err(|_| DateFault::NotACalendarDate)?;
    let day: u32 = field[6..8].parse().map_err(|_| DateFault::NotACalendarDate)?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(DateFault::OutOfRange);
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateFault::NotACalendarDate)?;
    if date > today {
        return Err(DateFault::InFuture);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn check_digit_matches_known_identifier() {
        assert_eq!(check_digit("11010519491231002"), Ok('X'));
    }

    #[test]
    fn check_digit_rejects_bad_bodies() {
        assert!(check_digit("1101051949123100").is_err());
        assert!(check_digit("110105194912310021").is_err());
        assert!(check_digit("1101051949123100A").is_err());
    }

    #[test]
    fn decodes_reference_identifier() {
        let result = validate("11010519491231002X", today());
        let info = result.info().expect("valid");
        assert_eq!(info.region_name, "Beijing");
        assert_eq!(info.birth_date, NaiveDate::from_ymd_opt(1949, 12, 31).unwrap());
        assert_eq!(info.sex, Sex::Female);
        assert_eq!(info.age, 75);
        assert_eq!(info.zodiac, Zodiac::Ox);
        assert_eq!(info.star_sign, StarSign::Capricorn);
    }

    #[test]
    fn lowercase_check_and_whitespace_are_normalized() {
        let result = validate("  11010519491231002x\n", today());
        assert_eq!(result.info().map(|i| i.id.as_str()), Some("11010519491231002X"));
    }

    #[test]
    fn faults_follow_check_order() {
        let cases = [
            ("", Fault::WrongLength { found: 0 }),
            ("1101051949123100", Fault::WrongLength { found: 16 }),
            ("11010519491231002XX", Fault::WrongLength { found: 19 }),
            ("1101051949123100XX", Fault::Format),
            ("11010519491231002Y", Fault::Format),
            ("99010519491231002X", Fault::UnknownRegion { code: "99".into() }),
            ("110105194913310021", Fault::BirthDate(DateFault::OutOfRange)),
            ("110105194900310021", Fault::BirthDate(DateFault::OutOfRange)),
            ("110105194902300021", Fault::BirthDate(DateFault::NotACalendarDate)),
            ("110105203001010021", Fault::BirthDate(DateFault::InFuture)),
            (
                "110105194912310021",
                Fault::ChecksumMismatch {
                    expected: 'X',
                    found: '1',
                },
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(validate(input, today()).fault(), Some(&expected), "{input}");
        }
    }

    #[test]
    fn multibyte_input_never_panics() {
        let input = "１１０１０５１９４９１２３１００２Ｘ";
        assert_eq!(validate(input, today()).fault(), Some(&Fault::Format));
        assert_eq!(
            validate("１１０１", today()).fault(),
            Some(&Fault::WrongLength { found: 4 })
        );
    }

    #[test]
    fn birth_on_today_is_accepted() {
        let body = "11010520240601001";
        let id = format!("{body}{}", check_digit(body).unwrap());
        assert!(validate(&id, today()).is_valid());
    }

    #[test]
    fn mismatch_message_names_expected_digit() {
        let fault = validate("110105194912310021", today());
        assert_eq!(
            fault.fault().map(ToString::to_string).as_deref(),
            Some("checksum mismatch: expected 'X', found '1'")
        );
    }
}
