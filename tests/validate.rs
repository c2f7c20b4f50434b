use chrono::NaiveDate;
use idcard::{
    DateFault, Fault, FixedClock, Sex, StarSign, ValidationResult, Zodiac, check_digit,
    validate, validate_id,
};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn reference_identifier_decodes() {
    let info = match validate("11010519491231002X", today()) {
        ValidationResult::Valid(info) => info,
        ValidationResult::Invalid(fault) => panic!("unexpected fault: {fault}"),
    };
    assert_eq!(info.id, "11010519491231002X");
    assert_eq!(info.region_code, "11");
    assert_eq!(info.region_name, "Beijing");
    assert_eq!(info.birth_date, NaiveDate::from_ymd_opt(1949, 12, 31).unwrap());
    assert_eq!(info.sex, Sex::Female);
    assert_eq!(info.age, 75);
    assert_eq!(info.zodiac, Zodiac::Ox);
    assert_eq!(info.star_sign, StarSign::Capricorn);
}

#[test]
fn age_ignores_month_and_day() {
    let body = "44030519901231001";
    let id = format!("{body}{}", check_digit(body).unwrap());
    let early = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let info = validate(&id, early).info().cloned().unwrap();
    assert_eq!(info.age, 34);
    assert_eq!(info.sex, Sex::Male);
}

#[test]
fn validation_is_deterministic_for_a_fixed_day() {
    let clock = FixedClock(today());
    for candidate in ["11010519491231002X", "110105194912310021", "", "abc"] {
        assert_eq!(validate_id(&clock, candidate), validate_id(&clock, candidate));
    }
}

#[test]
fn future_relative_to_clock() {
    let body = "31010120240602002";
    let id = format!("{body}{}", check_digit(body).unwrap());
    assert_eq!(
        validate(&id, today()).fault(),
        Some(&Fault::BirthDate(DateFault::InFuture))
    );
    let next_day = today().succ_opt().unwrap();
    assert!(validate(&id, next_day).is_valid());
}

#[test]
fn leap_day_birth_dates() {
    let leap = "11010520000229001";
    let id = format!("{leap}{}", check_digit(leap).unwrap());
    assert!(validate(&id, today()).is_valid());

    let not_leap = "110105190002290011";
    assert_eq!(
        validate(not_leap, today()).fault(),
        Some(&Fault::BirthDate(DateFault::NotACalendarDate))
    );
}

#[test]
fn region_checked_before_date_and_checksum() {
    assert_eq!(
        validate("000105194913310000", today()).fault(),
        Some(&Fault::UnknownRegion { code: "00".into() })
    );
}
