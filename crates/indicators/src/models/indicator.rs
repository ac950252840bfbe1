//! Declarative indicator definitions: frequencies, transforms, source candidates.

use serde::Serialize;

/// Native frequency of a source series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Frequency {
    #[serde(rename = "A")]
    Annual,
    #[serde(rename = "Q")]
    Quarterly,
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "D")]
    Daily,
}

impl Frequency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Annual => "A",
            Self::Quarterly => "Q",
            Self::Monthly => "M",
            Self::Daily => "D",
        }
    }

    /// Parse a one-letter frequency code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::Annual),
            "Q" => Some(Self::Quarterly),
            "M" => Some(Self::Monthly),
            "D" => Some(Self::Daily),
            _ => None,
        }
    }
}

/// Derivation applied to a raw provider series before selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Pass-through.
    #[default]
    None,
    /// Percent change against the same period one year earlier.
    Yoy,
    /// Percent change against the previous monthly observation.
    Mom,
    /// Percent change against the previous quarterly observation.
    Qoq,
    /// `numerator / denominator * 100` over the periods both legs share.
    Ratio,
}

/// One way of obtaining an indicator from one provider.
///
/// Codes may carry `{iso2}` / `{iso3}` placeholders. Ratio candidates use a
/// `NUMERATOR/DENOMINATOR` code pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceCandidate {
    pub provider_id: &'static str,
    pub dataset_id: &'static str,
    pub indicator_code: &'static str,
    pub frequency: Frequency,
    pub transform: Transform,
}

impl SourceCandidate {
    pub const fn new(
        provider_id: &'static str,
        dataset_id: &'static str,
        indicator_code: &'static str,
        frequency: Frequency,
    ) -> Self {
        Self {
            provider_id,
            dataset_id,
            indicator_code,
            frequency,
            transform: Transform::None,
        }
    }

    pub const fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    /// Numerator and denominator codes of a ratio candidate.
    pub fn ratio_legs(&self) -> Option<(&'static str, &'static str)> {
        if self.transform != Transform::Ratio {
            return None;
        }
        let (num, den) = self.indicator_code.split_once('/')?;
        let (num, den) = (num.trim(), den.trim());
        if num.is_empty() || den.is_empty() {
            return None;
        }
        Some((num, den))
    }
}

/// Matrix entry: a canonical indicator and its ordered candidates.
#[derive(Clone, Debug, Serialize)]
pub struct IndicatorSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub preferred_frequency: Frequency,
    /// Advisory freshness bound; older winners are flagged `stale`, never dropped.
    pub max_age_years: Option<u32>,
    pub candidates: Vec<SourceCandidate>,
}
