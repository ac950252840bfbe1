//! World Bank WDI/WGI adapter.
//!
//! Endpoint: `{base}/country/{iso3}/indicator/{code}?format=json&per_page=200`.
//! The response is a two-element array `[meta, rows]`; `rows` is `null` when the
//! indicator has no data for the country.
//! API documentation: https://datahelpdesk.worldbank.org/knowledgebase/articles/898581

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ids::WORLD_BANK;
use super::{HttpFetcher, SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::{normalize_period, TimeSeries};

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
const PROVIDER_ID: &str = WORLD_BANK;
const PER_PAGE: &str = "200";

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct Row {
    date: Option<String>,
    value: Option<f64>,
}

/// Error envelope: `[{"message": [{"id": "120", "value": "Invalid value"}]}]`
#[derive(Debug, Deserialize)]
struct ErrorMeta {
    message: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    #[serde(default)]
    value: Option<String>,
}

/// Parse the `[meta, rows]` envelope into a series.
pub fn parse_response(payload: &Value) -> Result<TimeSeries, ProviderError> {
    let parts = payload
        .as_array()
        .ok_or_else(|| ProviderError::parse(PROVIDER_ID, "expected a JSON array"))?;

    if let Some(meta) = parts.first() {
        if let Ok(error) = ErrorMeta::deserialize(meta) {
            let message = error
                .message
                .into_iter()
                .filter_map(|m| m.value)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ProviderError::parse(PROVIDER_ID, message));
        }
    }

    let rows = match parts.get(1) {
        None | Some(Value::Null) => return Ok(TimeSeries::new()),
        Some(rows) => Vec::<Row>::deserialize(rows)
            .map_err(|e| ProviderError::parse(PROVIDER_ID, format!("rows: {}", e)))?,
    };

    Ok(rows
        .into_iter()
        .filter_map(|row| Some((normalize_period(row.date.as_deref()?)?, row.value?)))
        .collect())
}

// ============================================================================
// WorldBankProvider
// ============================================================================

/// World Bank indicators API. Global coverage, annual data.
pub struct WorldBankProvider {
    http: Arc<HttpFetcher>,
    base_url: String,
}

impl WorldBankProvider {
    pub fn new(http: Arc<HttpFetcher>) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: Arc<HttpFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn series_url(&self, iso3: &str, code: &str) -> String {
        format!(
            "{}/country/{}/indicator/{}",
            self.base_url,
            urlencoding::encode(iso3),
            urlencoding::encode(code)
        )
    }
}

#[async_trait]
impl SeriesProvider for WorldBankProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn label(&self) -> &'static str {
        "World Bank"
    }

    async fn fetch_series(
        &self,
        request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        let url = self.series_url(&request.country.iso_alpha_3, request.indicator_code);
        debug!("World Bank fetch {}", url);
        let payload = self
            .http
            .get_json(PROVIDER_ID, &url, &[("format", "json"), ("per_page", PER_PAGE)])
            .await?;
        parse_response(&payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_rows_skips_nulls() {
        let payload = json!([
            {"page": 1, "pages": 1, "per_page": 200, "total": 3},
            [
                {"date": "2023", "value": null, "indicator": {"id": "GE.EST"}},
                {"date": "2022", "value": 1.25},
                {"date": "2021", "value": 1.31}
            ]
        ]);
        let series = parse_response(&payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest(), Some(("2022", 1.25)));
    }

    #[test]
    fn test_parse_null_rows_is_empty() {
        let payload = json!([{"page": 0, "pages": 0, "total": 0}, null]);
        assert!(parse_response(&payload).unwrap().is_empty());
    }

    #[test]
    fn test_parse_monthly_tokens_normalized() {
        let payload = json!([{"page": 1}, [{"date": "2024M03", "value": 4.0}]]);
        let series = parse_response(&payload).unwrap();
        assert_eq!(series.get("2024-03"), Some(4.0));
    }

    #[test]
    fn test_parse_error_envelope() {
        let payload = json!([{"message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]}]);
        let err = parse_response(&payload).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn test_series_url() {
        let provider = WorldBankProvider::with_base_url(
            Arc::new(HttpFetcher::default()),
            "http://localhost:9/v2/",
        );
        assert_eq!(
            provider.series_url("BRA", "GC.DOD.TOTL.GD.ZS"),
            "http://localhost:9/v2/country/BRA/indicator/GC.DOD.TOTL.GD.ZS"
        );
    }
}
