use chrono::NaiveDate;
use idcard::{
    FixedClock, GenerateRequest, GenerationConstraints, IdService, MAX_BATCH, RegionTable, Sex,
    check_digit, generate, validate,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn service() -> IdService<FixedClock> {
    IdService::new(FixedClock(today()))
}

#[test]
fn constrained_male_from_beijing() {
    let mut rng = StdRng::seed_from_u64(42);
    let request = GenerateRequest {
        region: Some("11".into()),
        birth_date: Some("2000-01-01".into()),
        sex: Some("male".into()),
        count: Some(1),
    };
    let response = service().generate(&request, &mut rng).unwrap();
    assert_eq!(response.count, 1);
    let id = &response.id_cards[0];
    assert_eq!(id.len(), 18);
    assert!(id.starts_with("11"));
    assert_eq!(&id[6..14], "20000101");
    assert_eq!((id.as_bytes()[16] - b'0') % 2, 1);
    assert_eq!(id.chars().last(), check_digit(&id[..17]).ok());
    assert!(validate(id, today()).is_valid());
}

#[test]
fn female_parity_is_even() {
    let mut rng = StdRng::seed_from_u64(7);
    let constraints = GenerationConstraints::default().sex(Sex::Female);
    for _ in 0..200 {
        let id = generate(&constraints, &mut rng, today()).unwrap();
        assert_eq!((id.as_bytes()[16] - b'0') % 2, 0, "{id}");
        assert_eq!(id.len(), 18);
    }
}

#[test]
fn count_bounds_at_the_boundary() {
    let mut rng = StdRng::seed_from_u64(1);
    for count in [0, 51, -3] {
        let request = GenerateRequest {
            count: Some(count),
            ..Default::default()
        };
        let err = service().generate(&request, &mut rng).unwrap_err();
        assert_eq!(err.category(), "bad-input");
    }
    let request = GenerateRequest {
        count: Some(MAX_BATCH as i64),
        ..Default::default()
    };
    let response = service().generate(&request, &mut rng).unwrap();
    assert_eq!(response.id_cards.len(), 50);
    assert_eq!(response.count, 50);
}

#[test]
fn unknown_region_and_sex_tokens_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let bad_region = GenerateRequest {
        region: Some("99".into()),
        ..Default::default()
    };
    assert!(service().generate(&bad_region, &mut rng).is_err());

    let bad_sex = GenerateRequest {
        sex: Some("unknown".into()),
        ..Default::default()
    };
    let err = service().generate(&bad_sex, &mut rng).unwrap_err();
    assert!(err.to_string().contains("male"));
}

#[test]
fn seeded_generation_is_reproducible() {
    let request = GenerateRequest {
        count: Some(5),
        ..Default::default()
    };
    let a = service()
        .generate(&request, &mut StdRng::seed_from_u64(99))
        .unwrap();
    let b = service()
        .generate(&request, &mut StdRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_birth_date_falls_back_to_today() {
    let mut rng = StdRng::seed_from_u64(3);
    let constraints = GenerationConstraints::default().birth_date("2000/01/01");
    let id = generate(&constraints, &mut rng, today()).unwrap();
    assert_eq!(&id[6..14], "20240601");
    assert!(validate(&id, today()).is_valid());
}

#[test]
fn regions_listing_matches_table() {
    let response = service().list_regions();
    assert_eq!(response.regions, RegionTable::list().to_vec());
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["regions"][0]["code"], "11");
    assert_eq!(json["regions"][0]["name"], "Beijing");
}
