//! Indicator data models
//!
//! This module contains the core data types for indicator resolution:
//! - `types` - Type aliases for common identifiers (ProviderId, Period)
//! - `series` - Period-keyed time series and period helpers
//! - `country` - Resolved country identity (CountryIdentity)
//! - `indicator` - Matrix definitions (IndicatorSpec, SourceCandidate, Frequency, Transform)
//! - `resolved` - Resolution results (ResolvedIndicator, DebtPayload)
//! - `coverage` - Provider country coverage restrictions (Coverage)

mod country;
mod coverage;
mod indicator;
mod resolved;
mod series;
mod types;

pub use country::CountryIdentity;
pub use coverage::{Coverage, EURO_AREA, EU_EEA_UK};
pub use indicator::{Frequency, IndicatorSpec, SourceCandidate, Transform};
pub use resolved::{
    is_stale, DebtPath, DebtPayload, GovernmentType, LevelValue, PathUsed, ResolvedIndicator,
};
pub use series::{normalize_period, period_year, prior_year_period, PeriodShape, TimeSeries};
pub use types::{Period, ProviderId};
