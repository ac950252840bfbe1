//! Frequency-aware series transforms.
//!
//! Every percentage-producing transform rounds to 2 decimals. Periods that
//! cannot be computed (missing anchor, zero base) are simply absent from the
//! output; they are never filled or interpolated.

use crate::models::{prior_year_period, TimeSeries, Transform};

/// Round half away from zero to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pct_change(current: f64, base: f64) -> Option<f64> {
    if base == 0.0 || !base.is_finite() || !current.is_finite() {
        return None;
    }
    let change = round2((current / base - 1.0) * 100.0);
    change.is_finite().then_some(change)
}

/// Year-over-year percent change of a level/index series.
///
/// Each period is compared with the same period one year earlier
/// (`2024-03` against `2023-03`, `2024-Q1` against `2023-Q1`, `2024` against `2023`).
pub fn yoy(series: &TimeSeries) -> TimeSeries {
    series
        .iter()
        .filter_map(|(period, value)| {
            let anchor = series.get(&prior_year_period(period)?)?;
            Some((period.to_string(), pct_change(value, anchor)?))
        })
        .collect()
}

/// Percent change against the immediately preceding present period.
///
/// Gapped series are treated as contiguous: with `2024-01` and `2024-03`
/// present, `2024-03` is compared with `2024-01`.
pub fn sequential_change(series: &TimeSeries) -> TimeSeries {
    let points: Vec<(&str, f64)> = series.iter().collect();
    points
        .windows(2)
        .filter_map(|pair| {
            let ((_, prev), (period, cur)) = (pair[0], pair[1]);
            Some((period.to_string(), pct_change(cur, prev)?))
        })
        .collect()
}

/// Month-over-month percent change.
pub fn mom(series: &TimeSeries) -> TimeSeries {
    sequential_change(series)
}

/// Quarter-over-quarter percent change.
pub fn qoq(series: &TimeSeries) -> TimeSeries {
    sequential_change(series)
}

/// `numerator / denominator * 100` over periods present in both legs.
pub fn ratio(numerator: &TimeSeries, denominator: &TimeSeries) -> TimeSeries {
    numerator
        .iter()
        .filter_map(|(period, num)| {
            let den = denominator.get(period)?;
            if den == 0.0 {
                return None;
            }
            let pct = round2(num / den * 100.0);
            pct.is_finite().then(|| (period.to_string(), pct))
        })
        .collect()
}

/// Apply a single-series transform. `Ratio` needs two legs and is handled by
/// [`ratio`]; given one series it passes through unchanged.
pub fn apply(transform: Transform, series: TimeSeries) -> TimeSeries {
    match transform {
        Transform::None | Transform::Ratio => series,
        Transform::Yoy => yoy(&series),
        Transform::Mom => mom(&series),
        Transform::Qoq => qoq(&series),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, f64)]) -> TimeSeries {
        points.iter().copied().collect()
    }

    #[test]
    fn test_yoy_from_monthly_index() {
        let out = yoy(&series(&[("2023-01", 100.0), ("2024-01", 110.0)]));
        assert_eq!(out, series(&[("2024-01", 10.0)]));
    }

    #[test]
    fn test_yoy_skips_missing_and_zero_anchor() {
        let out = yoy(&series(&[
            ("2022-06", 0.0),
            ("2023-06", 50.0),
            ("2024-02", 120.0),
        ]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_yoy_on_annual_and_quarterly_keys() {
        let annual = yoy(&series(&[("2022", 200.0), ("2023", 205.0)]));
        assert_eq!(annual.get("2023"), Some(2.5));

        let quarterly = yoy(&series(&[("2023-Q2", 80.0), ("2024-Q2", 84.0)]));
        assert_eq!(quarterly.get("2024-Q2"), Some(5.0));
    }

    #[test]
    fn test_yoy_rounds_to_two_decimals() {
        let out = yoy(&series(&[("2023-03", 3.0), ("2024-03", 4.0)]));
        assert_eq!(out.get("2024-03"), Some(33.33));
    }

    #[test]
    fn test_mom_against_previous_month() {
        let out = mom(&series(&[("2024-01", 100.0), ("2024-02", 105.0)]));
        assert_eq!(out, series(&[("2024-02", 5.0)]));
    }

    #[test]
    fn test_mom_treats_gaps_as_contiguous() {
        let out = mom(&series(&[("2024-01", 100.0), ("2024-03", 102.0)]));
        assert_eq!(out.get("2024-03"), Some(2.0));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_mom_skips_zero_predecessor() {
        let out = mom(&series(&[
            ("2024-01", 0.0),
            ("2024-02", 10.0),
            ("2024-03", 11.0),
        ]));
        assert_eq!(out, series(&[("2024-03", 10.0)]));
    }

    #[test]
    fn test_qoq_quarterly_keys() {
        let out = qoq(&series(&[("2024-Q1", 200.0), ("2024-Q2", 201.0)]));
        assert_eq!(out.get("2024-Q2"), Some(0.5));
    }

    #[test]
    fn test_ratio_intersects_periods() {
        let num = series(&[("2021", 50.0), ("2022", 60.0), ("2023", 70.0)]);
        let den = series(&[("2022", 200.0), ("2023", 0.0), ("2024", 10.0)]);
        let out = ratio(&num, &den);
        assert_eq!(out, series(&[("2022", 30.0)]));
    }

    #[test]
    fn test_single_value_series_yields_empty_change() {
        assert!(mom(&series(&[("2024-01", 100.0)])).is_empty());
        assert!(yoy(&series(&[("2024-01", 100.0)])).is_empty());
    }

    #[test]
    fn test_apply_none_is_identity() {
        let s = series(&[("2020", 1.25)]);
        assert_eq!(apply(Transform::None, s.clone()), s);
    }
}
