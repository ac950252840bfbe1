//! Generic indicator resolver.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use futures::future::join_all;
use log::{debug, info};
use serde::Serialize;
use tokio::time::{timeout_at, Instant};

use super::{fetch_candidate, ResolveStrategy};
use crate::cache::{cache_key, TtlCache};
use crate::errors::IndicatorError;
use crate::matrix::IndicatorMatrix;
use crate::models::{CountryIdentity, IndicatorSpec, PathUsed, ResolvedIndicator, TimeSeries};
use crate::registry::{AttemptOutcome, FetchDiagnostics, ProviderRegistry};

const DEFAULT_DEADLINE: Duration = Duration::from_secs(20);

/// A resolved indicator together with how it was obtained.
#[derive(Clone, Debug, Serialize)]
pub struct Resolution {
    pub key: &'static str,
    #[serde(flatten)]
    pub indicator: ResolvedIndicator,
    /// Served from cache; `diagnostics` is empty in that case.
    pub from_cache: bool,
    pub diagnostics: FetchDiagnostics,
}

/// Resolves matrix indicators by strict-priority fallback.
pub struct IndicatorResolver {
    matrix: Arc<IndicatorMatrix>,
    registry: Arc<ProviderRegistry>,
    cache: Arc<TtlCache<ResolvedIndicator>>,
    strategy: ResolveStrategy,
    deadline: Duration,
}

impl IndicatorResolver {
    pub fn new(
        matrix: Arc<IndicatorMatrix>,
        registry: Arc<ProviderRegistry>,
        cache: Arc<TtlCache<ResolvedIndicator>>,
    ) -> Self {
        Self {
            matrix,
            registry,
            cache,
            strategy: ResolveStrategy::default(),
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn matrix(&self) -> &IndicatorMatrix {
        &self.matrix
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve one indicator, serving from cache when possible.
    pub async fn resolve(
        &self,
        country: &CountryIdentity,
        key: &str,
    ) -> Result<ResolvedIndicator, IndicatorError> {
        self.resolve_with_diagnostics(country, key, false)
            .await
            .map(|r| r.indicator)
    }

    /// Resolve one indicator and report per-candidate attempts.
    ///
    /// `fresh` skips the cache read; the result still refreshes the entry.
    /// Resolutions cut short by the deadline are returned but never cached.
    pub async fn resolve_with_diagnostics(
        &self,
        country: &CountryIdentity,
        key: &str,
        fresh: bool,
    ) -> Result<Resolution, IndicatorError> {
        let spec = self.matrix.lookup(key)?;
        let cache_key = cache_key(&country.iso_alpha_3, spec.key);

        if !fresh {
            if let Some(indicator) = self.cache.get(&cache_key).await {
                debug!("Cache hit for '{}'", cache_key);
                return Ok(Resolution {
                    key: spec.key,
                    indicator,
                    from_cache: true,
                    diagnostics: FetchDiagnostics::new(),
                });
            }
        }

        let (indicator, diagnostics) = self.resolve_uncached(country, spec).await;
        if diagnostics.deadline_hit() {
            debug!("Not caching '{}': deadline cut the resolution short", cache_key);
        } else {
            self.cache.insert(cache_key, indicator.clone()).await;
        }

        Ok(Resolution {
            key: spec.key,
            indicator,
            from_cache: false,
            diagnostics,
        })
    }

    /// Run the candidates of `spec` without touching the cache.
    pub async fn resolve_uncached(
        &self,
        country: &CountryIdentity,
        spec: &IndicatorSpec,
    ) -> (ResolvedIndicator, FetchDiagnostics) {
        let deadline = Instant::now() + self.deadline;
        let (winner, diagnostics) = match self.strategy {
            ResolveStrategy::Sequential => self.run_sequential(country, spec, deadline).await,
            ResolveStrategy::Concurrent => self.run_concurrent(country, spec, deadline).await,
        };

        let indicator = match winner {
            Some((index, series)) => {
                let candidate = &spec.candidates[index];
                info!(
                    "Resolved '{}' for {} via {} [{}]",
                    spec.key,
                    country.iso_alpha_3,
                    candidate.provider_id,
                    diagnostics.summary()
                );
                ResolvedIndicator::from_winner(
                    series,
                    self.registry.label(candidate.provider_id),
                    PathUsed::from_candidate(index, candidate),
                    spec.max_age_years,
                    Utc::now().year(),
                )
            }
            None => {
                info!(
                    "No data for '{}' ({}) [{}]",
                    spec.key,
                    country.iso_alpha_3,
                    diagnostics.summary()
                );
                ResolvedIndicator::exhausted()
            }
        };
        (indicator, diagnostics)
    }

    async fn run_sequential(
        &self,
        country: &CountryIdentity,
        spec: &IndicatorSpec,
        deadline: Instant,
    ) -> (Option<(usize, TimeSeries)>, FetchDiagnostics) {
        let mut diagnostics = FetchDiagnostics::new();
        let mut expired = false;

        for (index, candidate) in spec.candidates.iter().enumerate() {
            if expired {
                diagnostics.record(index, candidate, AttemptOutcome::DeadlineExceeded);
                continue;
            }
            match timeout_at(deadline, fetch_candidate(&self.registry, country, candidate)).await
            {
                Ok((outcome, series)) => {
                    let won = matches!(outcome, AttemptOutcome::Success { .. });
                    diagnostics.record(index, candidate, outcome);
                    if won {
                        return (Some((index, series)), diagnostics);
                    }
                }
                Err(_) => {
                    debug!(
                        "Deadline reached for '{}' at candidate {} ({})",
                        spec.key, index, candidate.provider_id
                    );
                    diagnostics.record(index, candidate, AttemptOutcome::DeadlineExceeded);
                    expired = true;
                }
            }
        }
        (None, diagnostics)
    }

    async fn run_concurrent(
        &self,
        country: &CountryIdentity,
        spec: &IndicatorSpec,
        deadline: Instant,
    ) -> (Option<(usize, TimeSeries)>, FetchDiagnostics) {
        let results = join_all(spec.candidates.iter().map(|candidate| {
            timeout_at(deadline, fetch_candidate(&self.registry, country, candidate))
        }))
        .await;

        let mut diagnostics = FetchDiagnostics::new();
        let mut winner = None;
        for (index, (candidate, result)) in spec.candidates.iter().zip(results).enumerate() {
            let (outcome, series) =
                result.unwrap_or((AttemptOutcome::DeadlineExceeded, TimeSeries::new()));
            if winner.is_none() && matches!(outcome, AttemptOutcome::Success { .. }) {
                winner = Some((index, series));
            }
            diagnostics.record(index, candidate, outcome);
        }
        (winner, diagnostics)
    }
}
