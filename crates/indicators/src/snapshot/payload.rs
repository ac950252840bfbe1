//! Country snapshot payload.
//!
//! Every field is always present; missing data is `null`, never an absent key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{
    CountryIdentity, DebtPath, DebtPayload, GovernmentType, LevelValue, ResolvedIndicator,
    TimeSeries,
};

/// Headline label and the matrix key that feeds it.
pub const HEADLINE_INDICATORS: &[(&str, &str)] = &[
    ("CPI", "inflation_yoy"),
    ("FX Rate", "currency"),
    ("Interest Rate", "policy_rate"),
    ("Reserves (USD)", "reserves_usd"),
    ("GDP Growth (%)", "gdp_growth_annual"),
    ("Unemployment (%)", "unemployment_rate"),
    ("Current Account Balance (% of GDP)", "current_account_pct_gdp"),
    ("Government Effectiveness", "government_effectiveness"),
];

pub fn is_headline(key: &str) -> bool {
    HEADLINE_INDICATORS.iter().any(|(_, k)| *k == key)
}

/// Matrix keys the debt waterfall reports authoritatively. A snapshot leaves
/// them out of `additional_indicators` so only one debt-to-GDP figure appears.
pub const WATERFALL_COVERED: &[&str] = &["gov_debt_pct_gdp"];

pub fn is_waterfall_covered(key: &str) -> bool {
    WATERFALL_COVERED.contains(&key)
}

#[derive(Clone, Debug, Serialize)]
pub struct CountrySnapshot {
    pub country: String,
    pub iso_codes: CountryIdentity,
    pub imf_data: BTreeMap<&'static str, HeadlineBlock>,
    pub government_debt: DebtLevelBlock,
    pub nominal_gdp: GdpLevelBlock,
    pub debt_to_gdp: DebtRatioBlock,
    pub additional_indicators: BTreeMap<&'static str, ResolvedIndicator>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LatestPoint {
    pub value: Option<f64>,
    pub date: Option<String>,
    pub source: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HeadlineBlock {
    pub latest: LatestPoint,
    pub series: TimeSeries,
}

impl HeadlineBlock {
    pub fn from_resolved(resolved: &ResolvedIndicator, series: TimeSeries) -> Self {
        Self {
            latest: LatestPoint {
                value: resolved.latest_value,
                date: resolved.latest_period.clone(),
                source: resolved.source.clone(),
            },
            series,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DebtLevelLatest {
    pub value: Option<f64>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub government_type: Option<GovernmentType>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DebtLevelBlock {
    pub latest: DebtLevelLatest,
    pub series: TimeSeries,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GdpLevelLatest {
    pub value: Option<f64>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GdpLevelBlock {
    pub latest: GdpLevelLatest,
    pub series: TimeSeries,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DebtRatioLatest {
    pub value: Option<f64>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub government_type: Option<GovernmentType>,
    pub path_used: DebtPath,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DebtRatioBlock {
    pub latest: DebtRatioLatest,
    pub series: TimeSeries,
}

/// Split a debt payload into the three snapshot blocks.
///
/// `trim` is applied to every series.
pub fn debt_blocks(
    debt: &DebtPayload,
    trim: impl Fn(&TimeSeries) -> TimeSeries,
) -> (DebtLevelBlock, GdpLevelBlock, DebtRatioBlock) {
    let level = debt.government_debt.clone().unwrap_or_default();
    let government_debt = DebtLevelBlock {
        latest: DebtLevelLatest {
            government_type: debt.government_debt.as_ref().and(debt.government_type),
            value: level.value,
            date: level.period,
            source: level.source,
            currency: level.currency,
            currency_code: level.currency_code,
        },
        series: trim(&debt.government_debt_series),
    };

    let LevelValue {
        value,
        period,
        source,
        currency,
        currency_code,
    } = debt.nominal_gdp.clone().unwrap_or_default();
    let nominal_gdp = GdpLevelBlock {
        latest: GdpLevelLatest {
            value,
            date: period,
            source,
            currency,
            currency_code,
        },
        series: trim(&debt.nominal_gdp_series),
    };

    let debt_to_gdp = DebtRatioBlock {
        latest: DebtRatioLatest {
            value: debt.latest_value,
            date: debt.latest_period.clone(),
            source: debt.source.clone(),
            government_type: debt.government_type,
            path_used: debt.path_used,
        },
        series: trim(&debt.series),
    };

    (government_debt, nominal_gdp, debt_to_gdp)
}
