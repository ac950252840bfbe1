//! Country snapshot assembly.
//!
//! One snapshot resolves every matrix indicator and the debt waterfall for a
//! country, concurrently, and caches the assembled payload.

mod payload;

pub use payload::{
    debt_blocks, is_headline, is_waterfall_covered, CountrySnapshot, DebtLevelBlock,
    DebtLevelLatest, DebtRatioBlock, DebtRatioLatest, GdpLevelBlock, GdpLevelLatest,
    HeadlineBlock, LatestPoint, HEADLINE_INDICATORS, WATERFALL_COVERED,
};

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use futures::join;
use log::{info, warn};

use crate::cache::TtlCache;
use crate::config::EngineConfig;
use crate::country::{BuiltinCountryResolver, CountryResolver};
use crate::currency::StaticCurrencyResolver;
use crate::errors::IndicatorError;
use crate::matrix::IndicatorMatrix;
use crate::models::{CountryIdentity, DebtPayload, PeriodShape, ResolvedIndicator, TimeSeries};
use crate::provider::HttpFetcher;
use crate::registry::ProviderRegistry;
use crate::resolver::{DebtResolver, IndicatorResolver};

/// How many recent points of each period shape a snapshot keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryPolicy {
    pub annual: usize,
    pub quarterly: usize,
    pub monthly: usize,
    pub daily: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            annual: 20,
            quarterly: 4,
            monthly: 12,
            daily: 30,
        }
    }
}

impl HistoryPolicy {
    pub fn keep(&self, shape: PeriodShape) -> usize {
        match shape {
            PeriodShape::Annual => self.annual,
            PeriodShape::Quarterly => self.quarterly,
            PeriodShape::Monthly => self.monthly,
            PeriodShape::Daily => self.daily,
        }
    }

    pub fn trim(&self, series: &TimeSeries) -> TimeSeries {
        series.trim_recent(|shape| self.keep(shape))
    }
}

pub struct SnapshotService {
    countries: Arc<dyn CountryResolver>,
    indicators: Arc<IndicatorResolver>,
    debt: Arc<DebtResolver>,
    cache: TtlCache<Arc<CountrySnapshot>>,
    history: HistoryPolicy,
}

impl SnapshotService {
    pub fn new(
        countries: Arc<dyn CountryResolver>,
        indicators: Arc<IndicatorResolver>,
        debt: Arc<DebtResolver>,
        ttl: Duration,
    ) -> Self {
        Self {
            countries,
            indicators,
            debt,
            cache: TtlCache::new(ttl),
            history: HistoryPolicy::default(),
        }
    }

    /// Built-in matrix, countries and adapters, wired from `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, IndicatorError> {
        let http = Arc::new(HttpFetcher::new(config.http.clone()));
        let registry = ProviderRegistry::with_defaults(http, &config.endpoints);
        Self::from_parts(config, IndicatorMatrix::builtin()?, registry)
    }

    /// Wire a service around an explicit matrix and registry.
    ///
    /// Fails when a matrix candidate names a provider the registry lacks.
    pub fn from_parts(
        config: &EngineConfig,
        matrix: IndicatorMatrix,
        registry: ProviderRegistry,
    ) -> Result<Self, IndicatorError> {
        matrix.ensure_providers(|id| registry.contains(id))?;
        let registry = Arc::new(registry);

        let indicators = IndicatorResolver::new(
            Arc::new(matrix),
            registry.clone(),
            Arc::new(TtlCache::new(config.indicator_ttl)),
        )
        .with_strategy(config.strategy)
        .with_deadline(config.indicator_deadline);
        let debt = DebtResolver::new(
            registry,
            Arc::new(StaticCurrencyResolver),
            Arc::new(TtlCache::new(config.indicator_ttl)),
        )
        .with_deadline(config.indicator_deadline);

        Ok(Self::new(
            Arc::new(BuiltinCountryResolver),
            Arc::new(indicators),
            Arc::new(debt),
            config.snapshot_ttl,
        ))
    }

    pub fn with_history(mut self, history: HistoryPolicy) -> Self {
        self.history = history;
        self
    }

    pub fn countries(&self) -> &dyn CountryResolver {
        self.countries.as_ref()
    }

    pub fn indicators(&self) -> &IndicatorResolver {
        &self.indicators
    }

    pub fn debt(&self) -> &DebtResolver {
        &self.debt
    }

    /// ISO 4217 code for `iso_alpha_2`; `None` when the country has none.
    pub fn currency_code(&self, iso_alpha_2: &str) -> Option<String> {
        self.debt.currencies().lookup(iso_alpha_2)
    }

    /// Resolve free-form country input or fail with `InvalidCountry`.
    pub fn country(&self, input: &str) -> Result<CountryIdentity, IndicatorError> {
        self.countries
            .resolve(input)
            .ok_or_else(|| IndicatorError::InvalidCountry(input.trim().to_string()))
    }

    /// Snapshot for `input`, cached under the resolved alpha-3 code so every
    /// spelling of a country shares one entry.
    ///
    /// `fresh` skips every cache read (snapshot, indicators, debt) but still
    /// refreshes the entries.
    pub async fn snapshot(
        &self,
        input: &str,
        fresh: bool,
    ) -> Result<Arc<CountrySnapshot>, IndicatorError> {
        let country = self.country(input)?;
        let key = country.iso_alpha_3.clone();
        if fresh {
            let snapshot = Arc::new(self.build(&country, true).await);
            self.cache.insert(key, snapshot.clone()).await;
            return Ok(snapshot);
        }
        Ok(self
            .cache
            .get_or_insert_with(key, async { Arc::new(self.build(&country, false).await) })
            .await)
    }

    /// Debt waterfall for `input`.
    pub async fn debt_for(&self, input: &str, fresh: bool) -> Result<DebtPayload, IndicatorError> {
        let country = self.country(input)?;
        Ok(if fresh {
            self.debt.resolve_fresh(&country).await
        } else {
            self.debt.resolve(&country).await
        })
    }

    async fn build(&self, country: &CountryIdentity, fresh: bool) -> CountrySnapshot {
        let keys: Vec<&'static str> = self
            .indicators
            .matrix()
            .keys()
            .filter(|key| !is_waterfall_covered(key))
            .collect();
        let indicator_futures = keys.iter().map(|key| async move {
            let resolved = self
                .indicators
                .resolve_with_diagnostics(country, key, fresh)
                .await
                .map(|resolution| resolution.indicator)
                .unwrap_or_else(|e| {
                    warn!("Snapshot skipped '{}': {}", key, e);
                    ResolvedIndicator::exhausted()
                });
            (*key, resolved)
        });
        let debt_future = async {
            if fresh {
                self.debt.resolve_fresh(country).await
            } else {
                self.debt.resolve(country).await
            }
        };
        let (resolved, debt) = join!(join_all(indicator_futures), debt_future);
        let mut resolved: HashMap<&'static str, ResolvedIndicator> = resolved.into_iter().collect();

        let mut imf_data = BTreeMap::new();
        for (label, key) in HEADLINE_INDICATORS {
            let indicator = resolved.remove(key).unwrap_or_default();
            let series = self.history.trim(&indicator.series);
            imf_data.insert(*label, HeadlineBlock::from_resolved(&indicator, series));
        }

        let additional_indicators = resolved
            .into_iter()
            .map(|(key, mut indicator)| {
                indicator.series = self.history.trim(&indicator.series);
                (key, indicator)
            })
            .collect();

        let (government_debt, nominal_gdp, debt_to_gdp) =
            debt_blocks(&debt, |series| self.history.trim(series));

        let found = imf_data.values().filter(|b| b.latest.value.is_some()).count();
        info!(
            "Snapshot for {}: {}/{} headline indicators, debt via {}",
            country.iso_alpha_3,
            found,
            HEADLINE_INDICATORS.len(),
            debt.path_used.as_str()
        );

        CountrySnapshot {
            country: country.name.clone(),
            iso_codes: country.clone(),
            imf_data,
            government_debt,
            nominal_gdp,
            debt_to_gdp,
            additional_indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::errors::ProviderError;
    use crate::models::{DebtPath, Frequency, IndicatorSpec, SourceCandidate};
    use crate::provider::{ids, SeriesProvider, SeriesRequest};

    struct WorldBankStub {
        data: HashMap<&'static str, TimeSeries>,
        call_count: AtomicUsize,
    }

    #[async_trait]
    impl SeriesProvider for WorldBankStub {
        fn id(&self) -> &'static str {
            ids::WORLD_BANK
        }

        fn label(&self) -> &'static str {
            "World Bank"
        }

        async fn fetch_series(
            &self,
            request: &SeriesRequest<'_>,
        ) -> Result<TimeSeries, ProviderError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .data
                .get(request.indicator_code)
                .cloned()
                .unwrap_or_default())
        }
    }

    fn annual_spec(key: &'static str, code: &'static str) -> IndicatorSpec {
        IndicatorSpec {
            key,
            label: key,
            unit: "percent",
            preferred_frequency: Frequency::Annual,
            max_age_years: None,
            candidates: vec![SourceCandidate::new(
                ids::WORLD_BANK,
                "WDI",
                code,
                Frequency::Annual,
            )],
        }
    }

    fn series(points: &[(&str, f64)]) -> TimeSeries {
        points.iter().copied().collect()
    }

    fn service() -> (SnapshotService, Arc<WorldBankStub>) {
        let long_history: TimeSeries = (1990..2024).map(|y| (y.to_string(), y as f64)).collect();
        let stub = Arc::new(WorldBankStub {
            data: HashMap::from([
                ("FP.CPI.TOTL.ZG", series(&[("2022", 9.3), ("2023", 4.6)])),
                ("GE.EST", long_history),
                ("GC.DOD.TOTL.GD.ZS", series(&[("2022", 71.5)])),
            ]),
            call_count: AtomicUsize::new(0),
        });
        let registry = Arc::new(ProviderRegistry::new(vec![
            stub.clone() as Arc<dyn SeriesProvider>
        ]));
        let matrix = IndicatorMatrix::new(vec![
            annual_spec("inflation_yoy", "FP.CPI.TOTL.ZG"),
            annual_spec("government_effectiveness", "GE.EST"),
            annual_spec("unemployment_rate", "SL.UEM.TOTL.ZS"),
            annual_spec("exports_growth", "NE.EXP.GNFS.KD.ZG"),
        ])
        .unwrap();

        let ttl = Duration::from_secs(60);
        let indicators = IndicatorResolver::new(
            Arc::new(matrix),
            registry.clone(),
            Arc::new(TtlCache::new(ttl)),
        );
        let debt = DebtResolver::new(
            registry,
            Arc::new(StaticCurrencyResolver),
            Arc::new(TtlCache::new(ttl)),
        );
        let service = SnapshotService::new(
            Arc::new(BuiltinCountryResolver),
            Arc::new(indicators),
            Arc::new(debt),
            ttl,
        );
        (service, stub)
    }

    #[test]
    fn test_from_parts_rejects_unknown_provider() {
        let matrix = IndicatorMatrix::new(vec![annual_spec("x", "X")]).unwrap();
        let err = SnapshotService::from_parts(
            &EngineConfig::default(),
            matrix,
            ProviderRegistry::default(),
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            IndicatorError::UnknownProvider {
                key: "x".to_string(),
                provider: "world_bank".to_string(),
            }
        );
    }

    #[test]
    fn test_from_config_wires_builtin_engine() {
        let service = SnapshotService::from_config(&EngineConfig::default()).unwrap();
        assert!(service.indicators().matrix().contains("policy_rate"));
        assert_eq!(service.currency_code("FR").as_deref(), Some("EUR"));
        assert_eq!(service.currency_code("KZ").as_deref(), Some("KZT"));
    }

    #[tokio::test]
    async fn test_unknown_country_is_invalid_not_empty() {
        let (service, stub) = service();
        let err = service.snapshot("Narnia", false).await.unwrap_err();
        assert_eq!(err, IndicatorError::InvalidCountry("Narnia".to_string()));
        assert_eq!(err.to_string(), "Invalid country name: Narnia");
        assert_eq!(stub.call_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_snapshot_layout() {
        let (service, _) = service();
        let snapshot = service.snapshot("Brazil", false).await.unwrap();

        assert_eq!(snapshot.country, "Brazil");
        assert_eq!(snapshot.iso_codes.iso_alpha_3, "BRA");
        assert_eq!(snapshot.imf_data.len(), HEADLINE_INDICATORS.len());

        let cpi = &snapshot.imf_data["CPI"];
        assert_eq!(cpi.latest.value, Some(4.6));
        assert_eq!(cpi.latest.date.as_deref(), Some("2023"));
        assert_eq!(cpi.latest.source.as_deref(), Some("World Bank"));

        // Not in this matrix at all, still present with nulls.
        assert!(snapshot.imf_data["FX Rate"].latest.value.is_none());
        // In the matrix but no data.
        assert!(snapshot.imf_data["Unemployment (%)"].latest.value.is_none());

        assert_eq!(
            snapshot.additional_indicators.keys().copied().collect::<Vec<_>>(),
            vec!["exports_growth"]
        );
        assert_eq!(snapshot.debt_to_gdp.latest.value, Some(71.5));
        assert_eq!(snapshot.debt_to_gdp.latest.path_used, DebtPath::BankRatio);
    }

    #[tokio::test]
    async fn test_waterfall_debt_ratio_not_duplicated_in_additional() {
        let stub = Arc::new(WorldBankStub {
            data: HashMap::from([
                ("GGXWDG_NGDP", series(&[("2023", 99.0)])),
                ("GC.DOD.TOTL.GD.ZS", series(&[("2022", 71.5)])),
            ]),
            call_count: AtomicUsize::new(0),
        });
        let registry = ProviderRegistry::new(vec![stub.clone() as Arc<dyn SeriesProvider>]);
        let matrix = IndicatorMatrix::new(vec![
            annual_spec("gov_debt_pct_gdp", "GGXWDG_NGDP"),
            annual_spec("exports_growth", "NE.EXP.GNFS.KD.ZG"),
        ])
        .unwrap();
        let service =
            SnapshotService::from_parts(&EngineConfig::default(), matrix, registry).unwrap();

        let snapshot = service.snapshot("Brazil", false).await.unwrap();
        assert!(!snapshot.additional_indicators.contains_key("gov_debt_pct_gdp"));
        assert!(snapshot.additional_indicators.contains_key("exports_growth"));
        assert_eq!(snapshot.debt_to_gdp.latest.value, Some(71.5));
    }

    #[tokio::test]
    async fn test_series_trimmed_to_history_policy() {
        let (service, _) = service();
        let snapshot = service.snapshot("BRA", false).await.unwrap();

        let ge = &snapshot.imf_data["Government Effectiveness"];
        assert_eq!(ge.series.len(), 20);
        assert_eq!(ge.series.periods().next(), Some("2004"));
        assert_eq!(ge.latest.date.as_deref(), Some("2023"));
    }

    #[tokio::test]
    async fn test_snapshot_cached_by_resolved_country() {
        let (service, stub) = service();
        let first = service.snapshot("Brazil", false).await.unwrap();
        let calls = stub.call_count.load(Ordering::SeqCst);

        for input in ["  BRAZIL ", "BR", "bra", "076"] {
            let again = service.snapshot(input, false).await.unwrap();
            assert!(Arc::ptr_eq(&first, &again), "{}", input);
        }
        assert_eq!(stub.call_count.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_fresh_rebuilds_and_refreshes_entry() {
        let (service, stub) = service();
        let first = service.snapshot("Brazil", false).await.unwrap();
        let calls = stub.call_count.load(Ordering::SeqCst);

        let fresh = service.snapshot("Brazil", true).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &fresh));
        assert!(stub.call_count.load(Ordering::SeqCst) > calls);

        let cached = service.snapshot("Brazil", false).await.unwrap();
        assert!(Arc::ptr_eq(&fresh, &cached));
    }

    #[tokio::test]
    async fn test_concurrent_snapshots_share_one_build() {
        let (service, stub) = service();
        let (a, b) = join!(
            service.snapshot("Brazil", false),
            service.snapshot("BR", false)
        );
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));

        let calls = stub.call_count.load(Ordering::SeqCst);
        service.snapshot("Brazil", true).await.unwrap();
        // A second full build issues the same number of calls as the first.
        assert_eq!(stub.call_count.load(Ordering::SeqCst), calls * 2);
    }
}
