//! IMF adapter, served through the DBnomics mirror.
//!
//! IMF datasets (IFS, WEO, BOP, DOT) are fetched as
//! `{base}/series/IMF/{dataset}/{key}`, with `{iso2}`/`{iso3}` expanded in the
//! series key. The IMF's own SDMX endpoints are not used.

use std::sync::Arc;

use async_trait::async_trait;

use super::dbnomics::{self, fetch_series_doc};
use super::ids::IMF;
use super::{expand_code, HttpFetcher, SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::TimeSeries;

const PROVIDER_ID: &str = IMF;
const AGENCY: &str = "IMF";

/// IMF series via DBnomics. Global coverage.
pub struct ImfProvider {
    http: Arc<HttpFetcher>,
    base_url: String,
}

impl ImfProvider {
    pub fn new(http: Arc<HttpFetcher>) -> Self {
        Self::with_base_url(http, dbnomics::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: Arc<HttpFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SeriesProvider for ImfProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn label(&self) -> &'static str {
        "IMF"
    }

    async fn fetch_series(
        &self,
        request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        let key = expand_code(request.indicator_code, request.country);
        fetch_series_doc(
            &self.http,
            PROVIDER_ID,
            &self.base_url,
            AGENCY,
            request.dataset_id,
            &key,
        )
        .await
    }
}
