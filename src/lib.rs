//! Validation and generation of 18-character resident identity numbers.

mod astro;
mod clock;
mod codec;
mod generator;
mod region;
mod service;

pub use astro::{StarSign, Zodiac};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{
    BODY_LEN, CodecError, DateFault, Fault, ID_LEN, IdentityInfo, Sex, ValidationResult,
    check_digit, parse_birth_date, validate,
};
pub use generator::{
    GenerateError, GenerationConstraints, MAX_BATCH, force_parity, generate, generate_batch,
};
pub use region::{Region, RegionTable};
pub use service::{
    GenerateRequest, GenerateResponse, IdService, RegionsResponse, ServiceError,
    ValidationReport,
};

/// Validate `candidate` against the date supplied by `clock`.
pub fn validate_id<C: Clock>(clock: &C, candidate: &str) -> ValidationResult {
    codec::validate(candidate, clock.today())
}
