//! Request/response boundary over the codec and generator.
//!
//! Every operation here is transport-agnostic: requests and responses are plain serde
//! types with camelCase field names, and caller mistakes come back as
//! [`ServiceError::BadInput`] rather than panics or domain results.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::astro::{StarSign, Zodiac};
use crate::clock::Clock;
use crate::codec::{self, Sex, ValidationResult};
use crate::generator::{self, GenerateError, GenerationConstraints, MAX_BATCH};
use crate::region::{Region, RegionTable};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    BadInput(String),
}

impl ServiceError {
    /// Stable category label for callers that map errors onto a transport.
    pub fn category(&self) -> &'static str {
        match self {
            ServiceError::BadInput(_) => "bad-input",
        }
    }
}

impl From<GenerateError> for ServiceError {
    fn from(err: GenerateError) -> Self {
        ServiceError::BadInput(err.to_string())
    }
}

/// Outcome of a single validation, shaped for serialization.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub id: String,
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<Zodiac>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_sign: Option<StarSign>,
}

impl ValidationReport {
    fn new(candidate: &str, result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Valid(info) => Self {
                id: info.id.clone(),
                valid: true,
                message: "identifier is valid".to_string(),
                region: Some(info.region_name),
                birth_date: Some(info.birth_date),
                sex: Some(info.sex),
                age: Some(info.age),
                zodiac: Some(info.zodiac),
                star_sign: Some(info.star_sign),
            },
            ValidationResult::Invalid(fault) => Self {
                id: candidate.trim().to_uppercase(),
                valid: false,
                message: fault.to_string(),
                region: None,
                birth_date: None,
                sex: None,
                age: None,
                zodiac: None,
                star_sign: None,
            },
        }
    }
}

/// Generation request; every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub region: Option<String>,
    pub birth_date: Option<String>,
    pub sex: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub id_cards: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
}

/// Stateless front door; owns only the clock used for "today".
#[derive(Debug, Clone, Default)]
pub struct IdService<C: Clock> {
    clock: C,
}

impl<C: Clock> IdService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn validate(&self, candidate: &str) -> Result<ValidationReport, ServiceError> {
        if candidate.trim().is_empty() {
            return Err(ServiceError::BadInput(
                "identifier must not be empty".to_string(),
            ));
        }
        let result = codec::validate(candidate, self.clock.today());
        debug!(valid = result.is_valid(), "validated identifier");
        Ok(ValidationReport::new(candidate, &result))
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerateRequest,
        rng: &mut R,
    ) -> Result<GenerateResponse, ServiceError> {
        let region = non_empty(request.region.as_deref());
        if let Some(code) = region {
            if !RegionTable::contains(code) {
                return Err(ServiceError::BadInput(format!(
                    "unknown region code '{}'",
                    code
                )));
            }
        }

        let sex = match non_empty(request.sex.as_deref()) {
            None => None,
            Some(token) => Some(Sex::from_token(token).ok_or_else(|| {
                ServiceError::BadInput(format!(
                    "sex must be 'male' or 'female', got '{}'",
                    token
                ))
            })?),
        };

        let count = request.count.unwrap_or(1);
        if !(1..=MAX_BATCH as i64).contains(&count) {
            return Err(ServiceError::BadInput(format!(
                "count must be between 1 and {}, got {}",
                MAX_BATCH, count
            )));
        }

        let constraints = GenerationConstraints {
            region: region.map(str::to_string),
            birth_date: non_empty(request.birth_date.as_deref()).map(str::to_string),
            sex,
        };
        let id_cards =
            generator::generate_batch(&constraints, count as usize, rng, self.clock.today())?;
        info!(count = id_cards.len(), "generated identifiers");
        Ok(GenerateResponse {
            count: id_cards.len(),
            id_cards,
        })
    }

    pub fn list_regions(&self) -> RegionsResponse {
        RegionsResponse {
            regions: RegionTable::list().to_vec(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
