//! Statistical data source adapters.
//!
//! This module contains:
//! - The `SeriesProvider` trait that all adapters implement
//! - The shared HTTP fetcher with timeout and single-retry policy
//! - Concrete adapters (World Bank, Eurostat, IMF, DBnomics, ECB) and the
//!   registered-but-offline OECD and GMD sources
//!
//! # Architecture
//!
//! Adapters are:
//! - **Infallible at the boundary**: `fetch` returns an empty series on any failure
//! - **Coverage-aware**: each declares the countries it can serve
//! - **Selected explicitly**: the registry maps matrix `provider_id`s to adapters

mod http;
mod traits;

pub mod dbnomics;
pub mod ecb;
pub mod eurostat;
pub mod imf;
pub mod offline;
pub mod world_bank;

pub use http::{with_retry, HttpFetcher, HttpPolicy};
pub use traits::{SeriesProvider, SeriesRequest};

use crate::models::CountryIdentity;

/// Provider ids referenced by matrix candidates.
pub mod ids {
    pub const WORLD_BANK: &str = "world_bank";
    pub const IMF: &str = "imf";
    pub const EUROSTAT: &str = "eurostat";
    pub const ECB: &str = "ecb";
    pub const DBNOMICS: &str = "dbnomics";
    pub const OECD: &str = "oecd";
    pub const GMD: &str = "gmd";
}

/// Expand `{iso2}` / `{iso3}` placeholders in a series code.
pub fn expand_code(template: &str, country: &CountryIdentity) -> String {
    template
        .replace("{iso2}", &country.iso_alpha_2)
        .replace("{iso3}", &country.iso_alpha_3)
}
