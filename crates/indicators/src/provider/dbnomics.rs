//! DBnomics adapter.
//!
//! DBnomics mirrors many statistical agencies behind one API:
//! `{base}/series/{PROVIDER}/{DATASET}/{series_code}?observations=1&format=json`.
//! The generic adapter takes `PROVIDER/DATASET` as its dataset id; the IMF
//! adapter reuses [`fetch_series_doc`] with the provider fixed to `IMF`.
//! API documentation: https://api.db.nomics.world/v22/apidocs

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ids::DBNOMICS;
use super::{expand_code, HttpFetcher, SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::{normalize_period, TimeSeries};

pub const DEFAULT_BASE_URL: &str = "https://api.db.nomics.world/v22";
const PROVIDER_ID: &str = DBNOMICS;

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct SeriesEnvelope {
    series: SeriesDocs,
}

#[derive(Debug, Deserialize)]
struct SeriesDocs {
    #[serde(default)]
    docs: Vec<SeriesDoc>,
}

#[derive(Debug, Deserialize)]
struct SeriesDoc {
    #[serde(default)]
    period: Vec<String>,
    /// Numbers, or "NA" strings for missing observations.
    #[serde(default)]
    value: Vec<Value>,
    #[serde(default)]
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    period: Option<String>,
    value: Option<Value>,
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a DBnomics series payload (`series.docs[0]`).
///
/// Reads the parallel `period[]`/`value[]` arrays, falling back to the
/// `observations[]` layout some mirrors use. A payload with no docs is empty.
pub fn parse_response(provider: &str, payload: &Value) -> Result<TimeSeries, ProviderError> {
    let envelope = SeriesEnvelope::deserialize(payload)
        .map_err(|e| ProviderError::parse(provider, format!("series envelope: {}", e)))?;

    let Some(doc) = envelope.series.docs.into_iter().next() else {
        return Ok(TimeSeries::new());
    };

    if !doc.period.is_empty() {
        if doc.period.len() != doc.value.len() {
            return Err(ProviderError::parse(
                provider,
                format!(
                    "{} periods but {} values",
                    doc.period.len(),
                    doc.value.len()
                ),
            ));
        }
        return Ok(doc
            .period
            .iter()
            .zip(doc.value.iter())
            .filter_map(|(period, value)| Some((normalize_period(period)?, number(value)?)))
            .collect());
    }

    Ok(doc
        .observations
        .iter()
        .filter_map(|obs| {
            let period = normalize_period(obs.period.as_deref()?)?;
            Some((period, number(obs.value.as_ref()?)?))
        })
        .collect())
}

/// Fetch `{base}/series/{agency}/{dataset}/{series_code}` and parse it.
pub async fn fetch_series_doc(
    http: &HttpFetcher,
    provider: &'static str,
    base_url: &str,
    agency: &str,
    dataset: &str,
    series_code: &str,
) -> Result<TimeSeries, ProviderError> {
    let url = format!(
        "{}/series/{}/{}/{}",
        base_url,
        urlencoding::encode(agency),
        urlencoding::encode(dataset),
        urlencoding::encode(series_code)
    );
    debug!("DBnomics fetch {}", url);
    let payload = http
        .get_json(provider, &url, &[("observations", "1"), ("format", "json")])
        .await?;
    parse_response(provider, &payload)
}

// ============================================================================
// DbnomicsProvider
// ============================================================================

/// Generic DBnomics adapter; dataset ids are `PROVIDER/DATASET`.
pub struct DbnomicsProvider {
    http: Arc<HttpFetcher>,
    base_url: String,
}

impl DbnomicsProvider {
    pub fn new(http: Arc<HttpFetcher>) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: Arc<HttpFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SeriesProvider for DbnomicsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn label(&self) -> &'static str {
        "DBnomics"
    }

    async fn fetch_series(
        &self,
        request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        let (agency, dataset) = request.dataset_id.split_once('/').ok_or_else(|| {
            ProviderError::parse(
                PROVIDER_ID,
                format!("dataset '{}' is not PROVIDER/DATASET", request.dataset_id),
            )
        })?;
        let code = expand_code(request.indicator_code, request.country);
        fetch_series_doc(
            &self.http,
            PROVIDER_ID,
            &self.base_url,
            agency,
            dataset,
            &code,
        )
        .await
    }
}
