//! Engine configuration with library defaults.
//!
//! The server fills these from the environment; library users can start
//! from `EngineConfig::default()`.

use std::time::Duration;

use crate::provider::{dbnomics, ecb, eurostat, world_bank, HttpPolicy};
use crate::resolver::ResolveStrategy;

/// Base URLs of the HTTP adapters.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub world_bank: String,
    pub eurostat: String,
    /// Shared by the IMF and generic DBnomics adapters.
    pub dbnomics: String,
    pub ecb: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            world_bank: world_bank::DEFAULT_BASE_URL.to_string(),
            eurostat: eurostat::DEFAULT_BASE_URL.to_string(),
            dbnomics: dbnomics::DEFAULT_BASE_URL.to_string(),
            ecb: ecb::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub http: HttpPolicy,
    pub endpoints: Endpoints,
    /// TTL of cached resolved indicators and debt payloads.
    pub indicator_ttl: Duration,
    /// TTL of cached country snapshots.
    pub snapshot_ttl: Duration,
    /// Overall budget for resolving one indicator across its candidates.
    pub indicator_deadline: Duration,
    pub strategy: ResolveStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            http: HttpPolicy::default(),
            endpoints: Endpoints::default(),
            indicator_ttl: Duration::from_secs(900),
            snapshot_ttl: Duration::from_secs(600),
            indicator_deadline: Duration::from_millis(20_000),
            strategy: ResolveStrategy::Sequential,
        }
    }
}
