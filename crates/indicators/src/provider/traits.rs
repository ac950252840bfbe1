//! Series provider trait definitions.
//!
//! This module defines the `SeriesProvider` trait that every statistical
//! data source adapter implements.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::ProviderError;
use crate::models::{CountryIdentity, Coverage, Frequency, TimeSeries};

/// One adapter call: a country, a dataset and an indicator code.
///
/// The code may still carry `{iso2}` / `{iso3}` placeholders; keyed-series
/// adapters expand them with [`expand_code`](super::expand_code).
#[derive(Clone, Copy, Debug)]
pub struct SeriesRequest<'a> {
    pub country: &'a CountryIdentity,
    pub dataset_id: &'a str,
    pub indicator_code: &'a str,
    /// Frequency the caller expects back. Adapters with finer native data
    /// (daily policy rates) compress to it.
    pub frequency: Frequency,
}

/// Trait for statistical data source adapters.
///
/// Implement this trait to add support for a new data source. The registry
/// selects adapters by [`id`](Self::id); there is no name guessing.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use country_radar_indicators::provider::{SeriesProvider, SeriesRequest};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl SeriesProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "my_provider"
///     }
///
///     fn label(&self) -> &'static str {
///         "My Provider"
///     }
///
///     async fn fetch_series(
///         &self,
///         request: &SeriesRequest<'_>,
///     ) -> Result<TimeSeries, ProviderError> {
///         // ... call the source and parse its payload
///     }
/// }
/// ```
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Unique identifier used in matrix candidates ("world_bank", "imf", ...).
    fn id(&self) -> &'static str;

    /// Human-readable source label reported alongside resolved values.
    fn label(&self) -> &'static str;

    /// Countries this provider can answer for. Default is global.
    fn coverage(&self) -> Coverage {
        Coverage::global()
    }

    /// Fetch and parse one series.
    ///
    /// Errors stay inside the adapter: callers go through [`fetch`](Self::fetch).
    async fn fetch_series(&self, request: &SeriesRequest<'_>)
        -> Result<TimeSeries, ProviderError>;

    /// Fetch one series, turning every failure into an empty series.
    async fn fetch(&self, request: &SeriesRequest<'_>) -> TimeSeries {
        match self.fetch_series(request).await {
            Ok(series) => {
                debug!(
                    "{}: {} points for {}/{} ({})",
                    self.id(),
                    series.len(),
                    request.dataset_id,
                    request.indicator_code,
                    request.country.iso_alpha_3
                );
                series
            }
            Err(ProviderError::Unsupported { .. }) => {
                debug!(
                    "{}: no endpoint for {}/{}",
                    self.id(),
                    request.dataset_id,
                    request.indicator_code
                );
                TimeSeries::new()
            }
            Err(e) => {
                warn!(
                    "{}: {}/{} for {} failed: {}",
                    self.id(),
                    request.dataset_id,
                    request.indicator_code,
                    request.country.iso_alpha_3,
                    e
                );
                TimeSeries::new()
            }
        }
    }
}
