//! Debt-to-GDP waterfall.
//!
//! Stages run in fixed order and stop at the first non-empty ratio:
//! regional bloc, global fund, cross-country bank, then a ratio computed
//! from debt and GDP levels (local currency first, US dollars second).

use std::sync::Arc;
use std::time::Duration;

use futures::join;
use log::{debug, info};
use tokio::time::{timeout_at, Instant};

use super::fetch_candidate;
use crate::cache::{cache_key, TtlCache};
use crate::currency::CurrencyResolver;
use crate::models::{
    CountryIdentity, DebtPath, DebtPayload, Frequency, GovernmentType, LevelValue,
    SourceCandidate, TimeSeries,
};
use crate::normalize;
use crate::provider::ids;
use crate::registry::{AttemptOutcome, ProviderRegistry};

/// Cache slot of the waterfall result, next to the generic indicator keys.
pub const DEBT_CACHE_KEY: &str = "debt_to_gdp";

const DEFAULT_DEADLINE: Duration = Duration::from_secs(20);

/// Candidates used by each waterfall stage.
#[derive(Clone, Debug)]
pub struct DebtSources {
    pub bloc: SourceCandidate,
    pub fund: SourceCandidate,
    pub bank: SourceCandidate,
    pub lcu_debt: SourceCandidate,
    pub lcu_gdp: SourceCandidate,
    pub usd_debt: SourceCandidate,
    pub usd_gdp: SourceCandidate,
}

impl Default for DebtSources {
    fn default() -> Self {
        let annual = |provider: &'static str, dataset: &'static str, code: &'static str| {
            SourceCandidate::new(provider, dataset, code, Frequency::Annual)
        };
        Self {
            bloc: annual(ids::EUROSTAT, "gov_10dd_edpt1", "GG_DEBT_PCT_GDP"),
            fund: annual(ids::IMF, "WEO:latest", "{iso3}.GGXWDG_NGDP.pcent_gdp"),
            bank: annual(ids::WORLD_BANK, "WDI", "GC.DOD.TOTL.GD.ZS"),
            lcu_debt: annual(ids::WORLD_BANK, "WDI", "GC.DOD.TOTL.CN"),
            lcu_gdp: annual(ids::WORLD_BANK, "WDI", "NY.GDP.MKTP.CN"),
            usd_debt: annual(ids::WORLD_BANK, "WDI", "GC.DOD.TOTL.CD"),
            usd_gdp: annual(ids::WORLD_BANK, "WDI", "NY.GDP.MKTP.CD"),
        }
    }
}

/// Level currency of a computed stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Levels {
    Lcu,
    Usd,
}

impl Levels {
    fn path(self) -> DebtPath {
        match self {
            Self::Lcu => DebtPath::ComputedLcu,
            Self::Usd => DebtPath::ComputedUsd,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Lcu => "LCU",
            Self::Usd => "USD",
        }
    }

    fn stage_label(self) -> &'static str {
        match self {
            Self::Lcu => "World Bank WDI (LCU components)",
            Self::Usd => "World Bank WDI (USD components)",
        }
    }
}

/// Outcome of one computed stage: the payload when a ratio exists, and the
/// level series fetched either way.
struct LevelAttempt {
    payload: Option<DebtPayload>,
    debt: TimeSeries,
    gdp: TimeSeries,
}

/// Waterfall result; `timed_out` marks a run the deadline cut short.
struct WaterfallRun {
    payload: DebtPayload,
    timed_out: bool,
}

impl WaterfallRun {
    fn completed(payload: DebtPayload) -> Self {
        Self {
            payload,
            timed_out: false,
        }
    }

    fn aborted(payload: DebtPayload) -> Self {
        Self {
            payload,
            timed_out: true,
        }
    }
}

pub struct DebtResolver {
    registry: Arc<ProviderRegistry>,
    currencies: Arc<dyn CurrencyResolver>,
    cache: Arc<TtlCache<DebtPayload>>,
    sources: DebtSources,
    deadline: Duration,
}

impl DebtResolver {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        currencies: Arc<dyn CurrencyResolver>,
        cache: Arc<TtlCache<DebtPayload>>,
    ) -> Self {
        Self {
            registry,
            currencies,
            cache,
            sources: DebtSources::default(),
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_sources(mut self, sources: DebtSources) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn currencies(&self) -> &dyn CurrencyResolver {
        self.currencies.as_ref()
    }

    pub fn sources(&self) -> &DebtSources {
        &self.sources
    }

    /// Debt-to-GDP for `country`, served from cache when possible.
    pub async fn resolve(&self, country: &CountryIdentity) -> DebtPayload {
        let key = cache_key(&country.iso_alpha_3, DEBT_CACHE_KEY);
        if let Some(payload) = self.cache.get(&key).await {
            debug!("Cache hit for '{}'", key);
            return payload;
        }
        self.resolve_fresh(country).await
    }

    /// Run the waterfall without reading the cache; the entry is refreshed
    /// unless the deadline aborted the run.
    pub async fn resolve_fresh(&self, country: &CountryIdentity) -> DebtPayload {
        let run = self.run(country).await;
        info!(
            "Debt-to-GDP for {} via {}",
            country.iso_alpha_3,
            run.payload.path_used.as_str()
        );
        if run.timed_out {
            debug!("Not caching debt waterfall for {}: deadline reached", country.iso_alpha_3);
        } else {
            self.cache
                .insert(cache_key(&country.iso_alpha_3, DEBT_CACHE_KEY), run.payload.clone())
                .await;
        }
        run.payload
    }

    async fn run(&self, country: &CountryIdentity) -> WaterfallRun {
        let deadline = Instant::now() + self.deadline;

        let ratio_stages = [
            (&self.sources.bloc, DebtPath::BlocRatio, "Eurostat", GovernmentType::General),
            (&self.sources.fund, DebtPath::FundRatio, "IMF WEO", GovernmentType::General),
            (&self.sources.bank, DebtPath::BankRatio, "World Bank WDI", GovernmentType::Central),
        ];
        for (candidate, path, label, government_type) in ratio_stages {
            let Some(series) = self.fetch(country, candidate, deadline).await else {
                return WaterfallRun::aborted(DebtPayload::default());
            };
            if let Some(payload) = ratio_payload(series, path, label, government_type) {
                return WaterfallRun::completed(payload);
            }
            debug!("Debt stage {} empty for {}", path.as_str(), country.iso_alpha_3);
        }

        let lcu = match self.computed(country, Levels::Lcu, deadline).await {
            Some(attempt) => attempt,
            None => return WaterfallRun::aborted(DebtPayload::default()),
        };
        if let Some(payload) = lcu.payload {
            return WaterfallRun::completed(payload);
        }
        let usd = match self.computed(country, Levels::Usd, deadline).await {
            Some(attempt) => attempt,
            None => {
                return WaterfallRun::aborted(partial(
                    lcu.debt,
                    lcu.gdp,
                    TimeSeries::new(),
                    TimeSeries::new(),
                ))
            }
        };
        if let Some(payload) = usd.payload {
            return WaterfallRun::completed(payload);
        }
        WaterfallRun::completed(partial(lcu.debt, lcu.gdp, usd.debt, usd.gdp))
    }

    /// One candidate within the waterfall deadline. `None` once the deadline passed.
    async fn fetch(
        &self,
        country: &CountryIdentity,
        candidate: &SourceCandidate,
        deadline: Instant,
    ) -> Option<TimeSeries> {
        match timeout_at(deadline, fetch_candidate(&self.registry, country, candidate)).await {
            Ok((AttemptOutcome::Success { .. }, series)) => Some(series),
            Ok(_) => Some(TimeSeries::new()),
            Err(_) => {
                debug!(
                    "Debt waterfall deadline reached for {} at {}",
                    country.iso_alpha_3, candidate.indicator_code
                );
                None
            }
        }
    }

    async fn computed(
        &self,
        country: &CountryIdentity,
        levels: Levels,
        deadline: Instant,
    ) -> Option<LevelAttempt> {
        let (debt_source, gdp_source) = match levels {
            Levels::Lcu => (&self.sources.lcu_debt, &self.sources.lcu_gdp),
            Levels::Usd => (&self.sources.usd_debt, &self.sources.usd_gdp),
        };
        let (debt, gdp) = join!(
            self.fetch(country, debt_source, deadline),
            self.fetch(country, gdp_source, deadline)
        );
        let (debt, gdp) = (debt?, gdp?);

        let ratio = normalize::ratio(&debt, &gdp);
        let payload = ratio.latest().map(|(period, value)| (period.to_string(), value));
        let payload = payload.map(|(period, value)| {
            let currency_code = match levels {
                Levels::Lcu => self.currencies.lookup(&country.iso_alpha_2),
                Levels::Usd => Some("USD".to_string()),
            };
            let level = |series: &TimeSeries, candidate: &SourceCandidate| LevelValue {
                value: series.get(&period),
                period: Some(period.clone()),
                source: Some(self.registry.label(candidate.provider_id)),
                currency: Some(levels.marker().to_string()),
                currency_code: currency_code.clone(),
            };
            DebtPayload {
                latest_value: Some(value),
                latest_period: Some(period.clone()),
                source: Some(levels.stage_label().to_string()),
                path_used: levels.path(),
                government_type: Some(GovernmentType::Central),
                government_debt: Some(level(&debt, debt_source)),
                nominal_gdp: Some(level(&gdp, gdp_source)),
                government_debt_series: debt.clone(),
                nominal_gdp_series: gdp.clone(),
                series: ratio,
            }
        });

        Some(LevelAttempt { payload, debt, gdp })
    }
}

fn ratio_payload(
    series: TimeSeries,
    path: DebtPath,
    label: &str,
    government_type: GovernmentType,
) -> Option<DebtPayload> {
    let (period, value) = series.latest().map(|(p, v)| (p.to_string(), v))?;
    Some(DebtPayload {
        latest_value: Some(value),
        latest_period: Some(period),
        source: Some(label.to_string()),
        series,
        path_used: path,
        government_type: Some(government_type),
        ..DebtPayload::default()
    })
}

/// Exhausted waterfall keeping whichever level series were fetched.
fn partial(
    lcu_debt: TimeSeries,
    lcu_gdp: TimeSeries,
    usd_debt: TimeSeries,
    usd_gdp: TimeSeries,
) -> DebtPayload {
    let pick = |lcu: TimeSeries, usd: TimeSeries| if lcu.is_empty() { usd } else { lcu };
    DebtPayload {
        government_debt_series: pick(lcu_debt, usd_debt),
        nominal_gdp_series: pick(lcu_gdp, usd_gdp),
        ..DebtPayload::default()
    }
}
