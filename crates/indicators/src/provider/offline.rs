//! Sources without a wired public endpoint (OECD, Global Macro Database).
//!
//! They stay registered so matrix validation and candidate order are real;
//! every call reports `Unsupported`, which the adapter boundary turns into an
//! empty series.

use async_trait::async_trait;

use super::ids::{GMD, OECD};
use super::{SeriesProvider, SeriesRequest};
use crate::errors::ProviderError;
use crate::models::TimeSeries;

pub struct OfflineProvider {
    id: &'static str,
    label: &'static str,
}

impl OfflineProvider {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    pub const fn oecd() -> Self {
        Self::new(OECD, "OECD")
    }

    pub const fn gmd() -> Self {
        Self::new(GMD, "Global Macro Database")
    }
}

#[async_trait]
impl SeriesProvider for OfflineProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    async fn fetch_series(
        &self,
        _request: &SeriesRequest<'_>,
    ) -> Result<TimeSeries, ProviderError> {
        Err(ProviderError::Unsupported {
            provider: self.id.to_string(),
        })
    }
}
