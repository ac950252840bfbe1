use country_radar_indicators::{IndicatorSpec, SourceCandidate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Country name, ISO-2 or ISO-3 code.
    pub country: Option<String>,
    /// Skip cached results (the cache is still refreshed).
    #[serde(default)]
    pub fresh: bool,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct CandidateListing {
    pub provider_id: String,
    pub dataset_id: String,
    pub indicator_code: String,
    pub frequency: String,
    pub transform: String,
}

impl From<&SourceCandidate> for CandidateListing {
    fn from(c: &SourceCandidate) -> Self {
        Self {
            provider_id: c.provider_id.to_string(),
            dataset_id: c.dataset_id.to_string(),
            indicator_code: c.indicator_code.to_string(),
            frequency: c.frequency.code().to_string(),
            transform: format!("{:?}", c.transform).to_lowercase(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct IndicatorListing {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub frequency: String,
    pub max_age_years: Option<u32>,
    pub candidates: Vec<CandidateListing>,
}

impl From<&IndicatorSpec> for IndicatorListing {
    fn from(spec: &IndicatorSpec) -> Self {
        Self {
            key: spec.key.to_string(),
            label: spec.label.to_string(),
            unit: spec.unit.to_string(),
            frequency: spec.preferred_frequency.code().to_string(),
            max_age_years: spec.max_age_years,
            candidates: spec.candidates.iter().map(CandidateListing::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct CountryCodes {
    pub name: String,
    pub iso_alpha_2: String,
    pub iso_alpha_3: String,
    pub iso_numeric: String,
    /// ISO 4217 code; null when the country has no currency of its own.
    pub currency_code: Option<String>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct ReadyStatus {
    pub status: String,
    pub indicators: usize,
    pub providers: Vec<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}
