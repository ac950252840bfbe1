//! Time series and period helpers.
//!
//! Periods are plain strings. Same-shape tokens sort chronologically as strings,
//! so "latest" is always the greatest key and nothing here parses dates.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Period;

/// Shape of a period token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PeriodShape {
    /// `YYYY`
    Annual,
    /// `YYYY-Qn`
    Quarterly,
    /// `YYYY-MM`
    Monthly,
    /// `YYYY-MM-DD`
    Daily,
}

impl PeriodShape {
    /// Classify a period token. Returns `None` for anything unrecognised.
    pub fn of(period: &str) -> Option<Self> {
        let bytes = period.as_bytes();
        if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
            return None;
        }
        match bytes.len() {
            4 => Some(Self::Annual),
            7 if bytes[4] == b'-' && bytes[5] == b'Q' && (b'1'..=b'4').contains(&bytes[6]) => {
                Some(Self::Quarterly)
            }
            7 if bytes[4] == b'-' && bytes[5..].iter().all(u8::is_ascii_digit) => {
                Some(Self::Monthly)
            }
            10 if bytes[4] == b'-'
                && bytes[7] == b'-'
                && bytes[5..7].iter().all(u8::is_ascii_digit)
                && bytes[8..].iter().all(u8::is_ascii_digit) =>
            {
                Some(Self::Daily)
            }
            _ => None,
        }
    }
}

/// Calendar year of a period token.
pub fn period_year(period: &str) -> Option<i32> {
    period.get(..4)?.parse().ok()
}

/// Same period one year earlier, keeping the token shape
/// ("2024-03" -> "2023-03", "2024-Q2" -> "2023-Q2", "2024" -> "2023").
pub fn prior_year_period(period: &str) -> Option<Period> {
    PeriodShape::of(period)?;
    let year = period_year(period)?;
    if year <= 0 {
        return None;
    }
    Some(format!("{:04}{}", year - 1, &period[4..]))
}

/// Normalise a provider period token to a canonical shape.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYYMmm`, `YYYY-Mmm`, `YYYYQn`, `YYYY-Qn`
/// (case-insensitive `M`/`Q`). Returns `None` for anything else.
pub fn normalize_period(raw: &str) -> Option<Period> {
    let s = raw.trim();
    if PeriodShape::of(s).is_some() {
        return Some(s.to_string());
    }
    let upper = s.to_ascii_uppercase();
    let year = upper.get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rest = upper[4..].trim_start_matches('-');
    let candidate = if let Some(q) = rest.strip_prefix('Q') {
        format!("{}-Q{}", year, q)
    } else if let Some(m) = rest.strip_prefix('M') {
        match m.len() {
            1 => format!("{}-0{}", year, m),
            _ => format!("{}-{}", year, m),
        }
    } else {
        return None;
    };
    PeriodShape::of(&candidate).map(|_| candidate)
}

/// Mapping from period to a finite value.
///
/// Storage is ordered by period string, which is chronological for
/// same-shape keys. Non-finite values are never stored. An empty series
/// means "no data", which is a valid outcome and not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries(BTreeMap<Period, f64>);

impl TimeSeries {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a point. Non-finite values are dropped; returns whether the point was stored.
    pub fn insert(&mut self, period: impl Into<Period>, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.0.insert(period.into(), value);
        true
    }

    pub fn get(&self, period: &str) -> Option<f64> {
        self.0.get(period).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Greatest period and its value, or `None` for an empty series.
    pub fn latest(&self) -> Option<(&str, f64)> {
        self.0
            .iter()
            .next_back()
            .map(|(period, value)| (period.as_str(), *value))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, f64)> {
        self.0.iter().map(|(period, value)| (period.as_str(), *value))
    }

    pub fn periods(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keep only the `keep` most recent points of each period shape.
    ///
    /// Series mixing shapes (e.g. annual fallback spliced next to monthly data)
    /// are trimmed per shape so one shape cannot crowd out the other.
    pub fn trim_recent(&self, keep_for: impl Fn(PeriodShape) -> usize) -> TimeSeries {
        let mut kept = [0usize; 4];
        let mut out = TimeSeries::new();
        for (period, value) in self.0.iter().rev() {
            let Some(shape) = PeriodShape::of(period) else {
                continue;
            };
            let count = &mut kept[shape as usize];
            if *count < keep_for(shape) {
                *count += 1;
                out.0.insert(period.clone(), *value);
            }
        }
        out
    }
}

impl FromIterator<(Period, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (Period, f64)>>(iter: I) -> Self {
        let mut series = TimeSeries::new();
        for (period, value) in iter {
            series.insert(period, value);
        }
        series
    }
}

impl<'a> FromIterator<(&'a str, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(period, value)| (period.to_string(), value))
            .collect()
    }
}

impl IntoIterator for TimeSeries {
    type Item = (Period, f64);
    type IntoIter = btree_map::IntoIter<Period, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, f64)]) -> TimeSeries {
        points.iter().copied().collect()
    }

    #[test]
    fn test_latest_is_lexicographic_max() {
        let s = series(&[("2021", 1.0), ("2023", 3.0), ("2022", 2.0)]);
        assert_eq!(s.latest(), Some(("2023", 3.0)));

        let m = series(&[("2024-02", 5.0), ("2023-12", 4.0), ("2024-10", 7.0)]);
        assert_eq!(m.latest(), Some(("2024-10", 7.0)));
    }

    #[test]
    fn test_latest_of_empty_is_none() {
        assert_eq!(TimeSeries::new().latest(), None);
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let mut s = TimeSeries::new();
        assert!(!s.insert("2020", f64::NAN));
        assert!(!s.insert("2021", f64::INFINITY));
        assert!(s.insert("2022", 1.5));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_period_shapes() {
        assert_eq!(PeriodShape::of("2024"), Some(PeriodShape::Annual));
        assert_eq!(PeriodShape::of("2024-Q3"), Some(PeriodShape::Quarterly));
        assert_eq!(PeriodShape::of("2024-07"), Some(PeriodShape::Monthly));
        assert_eq!(PeriodShape::of("2024-07-31"), Some(PeriodShape::Daily));
        assert_eq!(PeriodShape::of("2024-Q5"), None);
        assert_eq!(PeriodShape::of("24-07"), None);
    }

    #[test]
    fn test_prior_year_keeps_shape() {
        assert_eq!(prior_year_period("2024-01").as_deref(), Some("2023-01"));
        assert_eq!(prior_year_period("2024-Q2").as_deref(), Some("2023-Q2"));
        assert_eq!(prior_year_period("2024").as_deref(), Some("2023"));
        assert_eq!(prior_year_period("2024-02-29").as_deref(), Some("2023-02-29"));
        assert_eq!(prior_year_period("garbage"), None);
    }

    #[test]
    fn test_normalize_period_variants() {
        assert_eq!(normalize_period("2024M03").as_deref(), Some("2024-03"));
        assert_eq!(normalize_period("2024-M3").as_deref(), Some("2024-03"));
        assert_eq!(normalize_period("2024q1").as_deref(), Some("2024-Q1"));
        assert_eq!(normalize_period("2024-Q4").as_deref(), Some("2024-Q4"));
        assert_eq!(normalize_period(" 2019 ").as_deref(), Some("2019"));
        assert_eq!(normalize_period("2024-06-30").as_deref(), Some("2024-06-30"));
        assert_eq!(normalize_period("n/a"), None);
    }

    #[test]
    fn test_trim_recent_per_shape() {
        let s = series(&[
            ("2019", 1.0),
            ("2020", 2.0),
            ("2021", 3.0),
            ("2024-01", 10.0),
            ("2024-02", 11.0),
            ("2024-03", 12.0),
        ]);
        let trimmed = s.trim_recent(|shape| match shape {
            PeriodShape::Annual => 2,
            _ => 1,
        });
        let periods: Vec<&str> = trimmed.periods().collect();
        assert_eq!(periods, vec!["2020", "2021", "2024-03"]);
    }
}
