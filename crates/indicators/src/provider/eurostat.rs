//! Eurostat statistics API adapter (JSON-stat 2.0).
//!
//! Endpoint: `{base}/{dataset}?geo=..&<filters>`. Every dimension except
//! `time` is pinned through the filter table below, so the response is a
//! single series laid out along the time dimension.
//! API documentation: https://wikis.ec.europa.eu/display/EUROSTATHELP/API+Statistics

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ids::EUROSTAT;
use super::{HttpFetcher, SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::{normalize_period, Coverage, TimeSeries};

pub const DEFAULT_BASE_URL: &str = "https://data-api.ec.europa.eu/api/v2/statistics/1.0/data";
const PROVIDER_ID: &str = EUROSTAT;

// ============================================================================
// Dataset filters
// ============================================================================

/// Dimension filters for a `(dataset, indicator_code)` pair.
pub fn filters_for(dataset: &str, code: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let filters: &'static [(&'static str, &'static str)] = match (dataset, code) {
        ("prc_hicp_midx", "CP00") => &[("coicop", "CP00"), ("unit", "I15")],
        ("namq_10_gdp", "B1GQ") => &[
            ("na_item", "B1GQ"),
            ("unit", "CLV10_MEUR"),
            ("s_adj", "SCA"),
        ],
        ("une_rt_m", "UNEMP_RATE") => &[
            ("s_adj", "SA"),
            ("sex", "T"),
            ("age", "Y15-74"),
            ("unit", "PC_ACT"),
        ],
        ("ext_st_eu27_2020sitc", "TRADE_BALANCE") => &[
            ("indic_et", "MIO_BAL_VAL"),
            ("sitc06", "TOTAL"),
            ("partner", "EXT_EU27_2020"),
        ],
        ("gov_10dd_edpt1", "GG_DEBT_PCT_GDP") => &[
            ("sector", "S13"),
            ("na_item", "GD"),
            ("unit", "PC_GDP"),
        ],
        ("gov_10dd_edpt1", "NET_LEND_BORR_PCT_GDP") => &[
            ("sector", "S13"),
            ("na_item", "B9"),
            ("unit", "PC_GDP"),
        ],
        _ => return None,
    };
    Some(filters)
}

/// Eurostat geo codes differ from ISO for Greece and the UK.
pub fn geo_code(iso_alpha_2: &str) -> String {
    match iso_alpha_2.to_ascii_uppercase().as_str() {
        "GR" => "EL".to_string(),
        "GB" => "UK".to_string(),
        other => other.to_string(),
    }
}

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    id: Vec<String>,
    #[serde(default)]
    size: Vec<usize>,
    #[serde(default)]
    dimension: HashMap<String, Dimension>,
    #[serde(default)]
    value: Values,
}

#[derive(Debug, Deserialize)]
struct Dimension {
    category: Category,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(default)]
    index: HashMap<String, usize>,
}

/// JSON-stat allows `value` as a sparse object or a dense array.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum Values {
    Sparse(HashMap<String, Option<f64>>),
    Dense(Vec<Option<f64>>),
    #[default]
    Missing,
}

impl Values {
    fn get(&self, flat_index: usize) -> Option<f64> {
        match self {
            Self::Sparse(map) => map.get(&flat_index.to_string()).copied().flatten(),
            Self::Dense(list) => list.get(flat_index).copied().flatten(),
            Self::Missing => None,
        }
    }
}

/// Parse a JSON-stat dataset whose only free dimension is time.
///
/// Any other dimension left with more than one category is read at its first
/// category.
pub fn parse_response(payload: &Value) -> Result<TimeSeries, ProviderError> {
    let dataset = Dataset::deserialize(payload)
        .map_err(|e| ProviderError::parse(PROVIDER_ID, format!("json-stat: {}", e)))?;

    let time_key = ["time", "TIME_PERIOD", "TIME"]
        .into_iter()
        .find(|k| dataset.dimension.contains_key(*k))
        .ok_or_else(|| ProviderError::parse(PROVIDER_ID, "no time dimension"))?;
    let time_index = &dataset.dimension[time_key].category.index;

    // Stride of the time dimension in row-major order.
    let stride = match dataset.id.iter().position(|d| d == time_key) {
        Some(pos) if dataset.size.len() == dataset.id.len() => {
            dataset.size[pos + 1..].iter().product::<usize>()
        }
        _ => 1,
    };

    Ok(time_index
        .iter()
        .filter_map(|(token, &position)| {
            let value = dataset.value.get(position * stride)?;
            Some((normalize_period(token)?, value))
        })
        .collect())
}

// ============================================================================
// EurostatProvider
// ============================================================================

/// Eurostat dissemination API. Covers EU/EEA members and the UK.
pub struct EurostatProvider {
    http: Arc<HttpFetcher>,
    base_url: String,
}

impl EurostatProvider {
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
impl SeriesProvider for EurostatProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn label(&self) -> &'static str {
        "Eurostat"
    }

    fn coverage(&self) -> Coverage {
        Coverage::eu_eea_uk()
    }

    async fn fetch_series(
        &self,
        request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        let filters = filters_for(request.dataset_id, request.indicator_code).ok_or_else(|| {
            ProviderError::Unsupported {
                provider: PROVIDER_ID.to_string(),
            }
        })?;

        let geo = geo_code(&request.country.iso_alpha_2);
        let mut query: Vec<(&str, &str)> =
            vec![("format", "JSON"), ("lang", "EN"), ("geo", geo.as_str())];
        query.extend_from_slice(filters);

        let url = format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(request.dataset_id)
        );
        debug!("Eurostat fetch {} geo={}", url, geo);
        let payload = self.http.get_json(PROVIDER_ID, &url, &query).await?;
        parse_response(&payload)
    }
}
