//! ECB data portal adapter (SDMX-JSON).
//!
//! Endpoint: `{base}/{dataset}/{key}?format=jsondata`. A fully specified key
//! returns one series under `dataSets[0].series`; observation indices map to
//! time ids listed in `structure.dimensions.observation[0].values`.
//! API documentation: https://data.ecb.europa.eu/help/api/data

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ids::ECB;
use super::{HttpFetcher, SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::{normalize_period, Coverage, Frequency, PeriodShape, TimeSeries};

pub const DEFAULT_BASE_URL: &str = "https://data-api.ecb.europa.eu/service/data";
const PROVIDER_ID: &str = ECB;

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    #[serde(default)]
    data_sets: Vec<DataSet>,
    structure: Structure,
}

#[derive(Debug, Deserialize)]
struct DataSet {
    #[serde(default)]
    series: HashMap<String, SeriesBlock>,
}

#[derive(Debug, Deserialize)]
struct SeriesBlock {
    /// `{"0": [value, attr...], ...}`
    #[serde(default)]
    observations: HashMap<String, Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Structure {
    dimensions: Dimensions,
}

#[derive(Debug, Deserialize)]
struct Dimensions {
    #[serde(default)]
    observation: Vec<ObservationDimension>,
}

#[derive(Debug, Deserialize)]
struct ObservationDimension {
    #[serde(default)]
    values: Vec<DimensionValue>,
}

#[derive(Debug, Deserialize)]
struct DimensionValue {
    id: String,
}

/// Parse a single-series SDMX-JSON message.
pub fn parse_response(payload: &Value) -> Result<TimeSeries, ProviderError> {
    let message = Message::deserialize(payload)
        .map_err(|e| ProviderError::parse(PROVIDER_ID, format!("sdmx-json: {}", e)))?;

    let times: Vec<&str> = message
        .structure
        .dimensions
        .observation
        .first()
        .map(|dim| dim.values.iter().map(|v| v.id.as_str()).collect())
        .unwrap_or_default();

    let Some(block) = message
        .data_sets
        .first()
        .and_then(|ds| ds.series.values().next())
    else {
        return Ok(TimeSeries::new());
    };

    Ok(block
        .observations
        .iter()
        .filter_map(|(index, cells)| {
            let time = times.get(index.parse::<usize>().ok()?)?;
            let value = cells.first()?.as_f64()?;
            Some((normalize_period(time)?, value))
        })
        .collect())
}

/// Compress daily observations to the last observation of each month.
/// Non-daily keys pass through unchanged.
pub fn daily_to_monthly_last(series: TimeSeries) -> TimeSeries {
    let mut out = TimeSeries::new();
    // Ascending order: later days in a month overwrite earlier ones.
    for (period, value) in series {
        match PeriodShape::of(&period) {
            Some(PeriodShape::Daily) => out.insert(&period[..7], value),
            _ => out.insert(period, value),
        };
    }
    out
}

// ============================================================================
// EcbProvider
// ============================================================================

/// ECB statistical data warehouse. Euro-area members only.
pub struct EcbProvider {
    http: Arc<HttpFetcher>,
    base_url: String,
}

impl EcbProvider {
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
impl SeriesProvider for EcbProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn label(&self) -> &'static str {
        "ECB"
    }

    fn coverage(&self) -> Coverage {
        Coverage::euro_area()
    }

    async fn fetch_series(
        &self,
        request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(request.dataset_id),
            urlencoding::encode(request.indicator_code)
        );
        debug!("ECB fetch {}", url);
        let payload = self
            .http
            .get_json(PROVIDER_ID, &url, &[("format", "jsondata")])
            .await?;
        let series = parse_response(&payload)?;

        Ok(match request.frequency {
            Frequency::Monthly => daily_to_monthly_last(series),
            _ => series,
        })
    }
}
