//! Indicator matrix: the declarative registry of indicators and their sources.
//!
//! The matrix is pure data. It is validated once when built so that a malformed
//! entry fails at boot rather than on the first request that touches it.

mod catalog;

pub use catalog::builtin_specs;

use std::collections::HashMap;

use log::debug;

use crate::errors::IndicatorError;
use crate::models::{IndicatorSpec, Transform};

/// Validated, immutable set of indicator specs in declaration order.
#[derive(Clone, Debug)]
pub struct IndicatorMatrix {
    specs: Vec<IndicatorSpec>,
    index: HashMap<&'static str, usize>,
}

impl IndicatorMatrix {
    /// Build and validate a matrix from explicit specs.
    ///
    /// Fails on duplicate or empty keys, empty candidate lists, blank
    /// provider/code fields, or ratio candidates without a `NUM/DEN` code pair.
    pub fn new(specs: Vec<IndicatorSpec>) -> Result<Self, IndicatorError> {
        let mut index = HashMap::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            validate_spec(spec)?;
            if index.insert(spec.key, position).is_some() {
                return Err(invalid(spec.key, "duplicate key"));
            }
        }
        debug!("Indicator matrix validated with {} entries", specs.len());
        Ok(Self { specs, index })
    }

    /// The matrix shipped with the crate.
    pub fn builtin() -> Result<Self, IndicatorError> {
        Self::new(builtin_specs())
    }

    /// Look up an indicator by key.
    pub fn lookup(&self, key: &str) -> Result<&IndicatorSpec, IndicatorError> {
        self.index
            .get(key)
            .map(|&position| &self.specs[position])
            .ok_or_else(|| IndicatorError::UnknownIndicator(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Check every candidate's provider id against a predicate (usually the
    /// provider registry), failing on the first unknown provider.
    pub fn ensure_providers(&self, known: impl Fn(&str) -> bool) -> Result<(), IndicatorError> {
        for spec in &self.specs {
            for candidate in &spec.candidates {
                if !known(candidate.provider_id) {
                    return Err(IndicatorError::UnknownProvider {
                        key: spec.key.to_string(),
                        provider: candidate.provider_id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> IndicatorError {
    IndicatorError::InvalidMatrix {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn validate_spec(spec: &IndicatorSpec) -> Result<(), IndicatorError> {
    if spec.key.trim().is_empty() {
        return Err(invalid(spec.key, "empty key"));
    }
    if spec.candidates.is_empty() {
        return Err(invalid(spec.key, "no source candidates"));
    }
    for (position, candidate) in spec.candidates.iter().enumerate() {
        if candidate.provider_id.trim().is_empty() {
            return Err(invalid(
                spec.key,
                format!("candidate {} has no provider", position),
            ));
        }
        if candidate.indicator_code.trim().is_empty() {
            return Err(invalid(
                spec.key,
                format!("candidate {} has no indicator code", position),
            ));
        }
        if candidate.transform == Transform::Ratio && candidate.ratio_legs().is_none() {
            return Err(invalid(
                spec.key,
                format!(
                    "candidate {} is a ratio but '{}' is not NUMERATOR/DENOMINATOR",
                    position, candidate.indicator_code
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, SourceCandidate};

    fn spec(key: &'static str, candidates: Vec<SourceCandidate>) -> IndicatorSpec {
        IndicatorSpec {
            key,
            label: "Test",
            unit: "percent",
            preferred_frequency: Frequency::Annual,
            max_age_years: None,
            candidates,
        }
    }

    fn wb(code: &'static str) -> SourceCandidate {
        SourceCandidate::new("world_bank", "WDI", code, Frequency::Annual)
    }

    #[test]
    fn test_builtin_matrix_is_valid() {
        let matrix = IndicatorMatrix::builtin().unwrap();
        assert!(matrix.len() >= 14);
        assert!(matrix.contains("inflation_yoy"));
        assert!(matrix.contains("gov_debt_pct_gdp"));
    }

    #[test]
    fn test_lookup_unknown_key_fails() {
        let matrix = IndicatorMatrix::builtin().unwrap();
        let err = matrix.lookup("gdp_per_unicorn").unwrap_err();
        assert_eq!(
            err,
            IndicatorError::UnknownIndicator("gdp_per_unicorn".to_string())
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = IndicatorMatrix::new(vec![spec("a", vec![wb("X")]), spec("a", vec![wb("Y")])])
            .unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidMatrix { ref key, .. } if key == "a"));
    }

    #[test]
    fn test_empty_candidate_list_rejected() {
        let err = IndicatorMatrix::new(vec![spec("a", vec![])]).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_ratio_without_legs_rejected() {
        let bad = wb("NOT_A_PAIR").with_transform(Transform::Ratio);
        let err = IndicatorMatrix::new(vec![spec("a", vec![bad])]).unwrap_err();
        assert!(err.to_string().contains("NUMERATOR/DENOMINATOR"));
    }

    #[test]
    fn test_ensure_providers_reports_unknown() {
        let matrix = IndicatorMatrix::new(vec![spec(
            "a",
            vec![SourceCandidate::new("bis", "WS", "X", Frequency::Monthly)],
        )])
        .unwrap();
        let err = matrix.ensure_providers(|id| id == "world_bank").unwrap_err();
        assert_eq!(
            err,
            IndicatorError::UnknownProvider {
                key: "a".to_string(),
                provider: "bis".to_string()
            }
        );
    }

    #[test]
    fn test_keys_keep_declaration_order() {
        let matrix =
            IndicatorMatrix::new(vec![spec("b", vec![wb("X")]), spec("a", vec![wb("Y")])])
                .unwrap();
        assert_eq!(matrix.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
