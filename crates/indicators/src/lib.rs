//! Country Radar Indicators Crate
//!
//! This crate resolves macroeconomic indicators for a country by walking an
//! ordered list of statistical sources and keeping the first one that has data.
//!
//! # Overview
//!
//! The indicators crate supports:
//! - A declarative indicator matrix with strict-priority source candidates
//! - Multiple providers: World Bank, Eurostat, IMF, DBnomics, ECB
//! - Series transforms: year-over-year, period-over-period, ratios
//! - A dedicated debt-to-GDP waterfall with a computed fallback
//! - TTL caching of resolved indicators and whole country snapshots
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Country input   | --> | CountryIdentity  |  (name, ISO codes)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | IndicatorMatrix  |  (key -> ordered candidates)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Resolver      |  (first non-empty wins, cached)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (World Bank, Eurostat, etc.)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   TimeSeries     |  (period -> value)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CountryIdentity`] - Resolved country with ISO codes
//! - [`IndicatorSpec`] - Indicator key and its ordered [`SourceCandidate`]s
//! - [`TimeSeries`] - Period-keyed values, latest = greatest period
//! - [`ResolvedIndicator`] - Best value, series and the candidate that produced it
//! - [`DebtPayload`] - Debt-to-GDP with the waterfall stage used
//! - [`CountrySnapshot`] - Everything above for one country
//!
//! # Type Aliases
//!
//! - [`ProviderId`] - Provider identifier (e.g., "world_bank", "imf")
//! - [`Period`] - Period token ("2024", "2024-Q1", "2024-03", "2024-03-31")

pub mod cache;
pub mod config;
pub mod country;
pub mod currency;
pub mod errors;
pub mod matrix;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod snapshot;

// Re-export all public types from models
pub use models::{
    CountryIdentity, Coverage, DebtPath, DebtPayload, Frequency, GovernmentType,
    IndicatorSpec, LevelValue, PathUsed, Period, PeriodShape, ProviderId, ResolvedIndicator,
    SourceCandidate, TimeSeries, Transform,
};

pub use cache::{cache_key, TtlCache};
pub use config::{EngineConfig, Endpoints};
pub use country::{BuiltinCountryResolver, CountryResolver};
pub use currency::{CurrencyResolver, StaticCurrencyResolver};
pub use errors::{IndicatorError, ProviderError};
pub use matrix::IndicatorMatrix;

// Re-export resolver types
pub use resolver::{DebtResolver, DebtSources, IndicatorResolver, Resolution, ResolveStrategy};

// Re-export provider types
pub use provider::dbnomics::DbnomicsProvider;
pub use provider::ecb::EcbProvider;
pub use provider::eurostat::EurostatProvider;
pub use provider::imf::ImfProvider;
pub use provider::offline::OfflineProvider;
pub use provider::world_bank::WorldBankProvider;
pub use provider::{HttpFetcher, HttpPolicy, SeriesProvider, SeriesRequest};

// Re-export registry types
pub use registry::{AttemptOutcome, CandidateAttempt, FetchDiagnostics, ProviderRegistry};

pub use snapshot::{CountrySnapshot, HistoryPolicy, SnapshotService};
