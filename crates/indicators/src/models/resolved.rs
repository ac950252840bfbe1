//! Resolution results: generic indicators and the debt-to-GDP payload.

use serde::Serialize;

use super::series::period_year;
use super::{SourceCandidate, TimeSeries};

/// Which candidate produced a resolved value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathUsed {
    /// Position of the winning candidate in the matrix entry.
    pub index: usize,
    pub provider_id: &'static str,
    pub dataset_id: &'static str,
    pub indicator_code: &'static str,
}

impl PathUsed {
    pub fn from_candidate(index: usize, candidate: &SourceCandidate) -> Self {
        Self {
            index,
            provider_id: candidate.provider_id,
            dataset_id: candidate.dataset_id,
            indicator_code: candidate.indicator_code,
        }
    }
}

/// Best available value of one indicator for one country.
///
/// An exhausted resolution keeps every key: null latest fields, an empty
/// series and `path_used = None`. That is "no data", not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolvedIndicator {
    pub latest_value: Option<f64>,
    pub latest_period: Option<String>,
    pub source: Option<String>,
    pub series: TimeSeries,
    pub path_used: Option<PathUsed>,
    /// Latest period is older than the entry's `max_age_years` allows.
    pub stale: bool,
}

impl ResolvedIndicator {
    pub fn exhausted() -> Self {
        Self::default()
    }

    /// Build a resolved result from a non-empty winning series.
    pub fn from_winner(
        series: TimeSeries,
        source: impl Into<String>,
        path_used: PathUsed,
        max_age_years: Option<u32>,
        current_year: i32,
    ) -> Self {
        let (latest_period, latest_value) = match series.latest() {
            Some((period, value)) => (Some(period.to_string()), Some(value)),
            None => (None, None),
        };
        let stale = is_stale(latest_period.as_deref(), max_age_years, current_year);
        Self {
            latest_value,
            latest_period,
            source: Some(source.into()),
            series,
            path_used: Some(path_used),
            stale,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.path_used.is_some()
    }
}

/// `true` when the latest year falls before `current_year - max_age_years`.
pub fn is_stale(latest_period: Option<&str>, max_age_years: Option<u32>, current_year: i32) -> bool {
    match (latest_period.and_then(period_year), max_age_years) {
        (Some(year), Some(max_age)) => year < current_year - max_age as i32,
        _ => false,
    }
}

/// Stage of the debt waterfall that produced the ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtPath {
    BlocRatio,
    FundRatio,
    BankRatio,
    ComputedLcu,
    ComputedUsd,
    #[default]
    None,
}

impl DebtPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlocRatio => "bloc-ratio",
            Self::FundRatio => "fund-ratio",
            Self::BankRatio => "bank-ratio",
            Self::ComputedLcu => "computed-lcu",
            Self::ComputedUsd => "computed-usd",
            Self::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GovernmentType {
    #[serde(rename = "General Government")]
    General,
    #[serde(rename = "Central Government")]
    Central,
}

/// Level side-value used to compute a debt ratio (debt stock or nominal GDP).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LevelValue {
    pub value: Option<f64>,
    pub period: Option<String>,
    pub source: Option<String>,
    /// "LCU" or "USD".
    pub currency: Option<String>,
    /// ISO 4217 code behind "LCU", or "USD".
    pub currency_code: Option<String>,
}

/// Result of the debt-to-GDP waterfall.
///
/// Level side-values are only present when the ratio was computed from levels.
/// An exhausted waterfall still carries whatever level series were fetched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DebtPayload {
    pub latest_value: Option<f64>,
    pub latest_period: Option<String>,
    pub source: Option<String>,
    pub series: TimeSeries,
    pub path_used: DebtPath,
    pub government_type: Option<GovernmentType>,
    pub government_debt: Option<LevelValue>,
    pub government_debt_series: TimeSeries,
    pub nominal_gdp: Option<LevelValue>,
    pub nominal_gdp_series: TimeSeries,
}
