//! Per-candidate attempt tracking for resolution diagnostics.

use serde::Serialize;

use crate::models::{ProviderId, SourceCandidate};

/// What happened when a candidate was considered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttemptOutcome {
    /// Non-empty series after the transform; this candidate won.
    Success { points: usize },
    /// The adapter returned no data (or failed, which is the same at this level).
    Empty,
    /// Raw data existed but the transform produced nothing.
    EmptyAfterTransform { raw_points: usize },
    /// The provider does not cover the country; no call was made.
    SkippedNotCovered,
    /// No adapter is registered under the candidate's provider id.
    SkippedUnknownProvider,
    /// The per-indicator deadline expired before the candidate finished.
    DeadlineExceeded,
}

/// Record of a single candidate during a resolution.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateAttempt {
    pub index: usize,
    pub provider_id: ProviderId,
    pub dataset_id: &'static str,
    pub indicator_code: &'static str,
    pub outcome: AttemptOutcome,
}

/// Ordered attempts of one resolution, in candidate priority order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FetchDiagnostics {
    pub attempts: Vec<CandidateAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, index: usize, candidate: &SourceCandidate, outcome: AttemptOutcome) {
        self.attempts.push(CandidateAttempt {
            index,
            provider_id: ProviderId::Borrowed(candidate.provider_id),
            dataset_id: candidate.dataset_id,
            indicator_code: candidate.indicator_code,
            outcome,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| match &a.outcome {
                AttemptOutcome::Success { points } => {
                    format!("{}: SUCCESS ({} points)", a.provider_id, points)
                }
                AttemptOutcome::Empty => format!("{}: EMPTY", a.provider_id),
                AttemptOutcome::EmptyAfterTransform { raw_points } => {
                    format!("{}: EMPTY AFTER TRANSFORM ({} raw)", a.provider_id, raw_points)
                }
                AttemptOutcome::SkippedNotCovered => {
                    format!("{}: SKIPPED (not covered)", a.provider_id)
                }
                AttemptOutcome::SkippedUnknownProvider => {
                    format!("{}: SKIPPED (unknown provider)", a.provider_id)
                }
                AttemptOutcome::DeadlineExceeded => {
                    format!("{}: DEADLINE EXCEEDED", a.provider_id)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any candidate succeeded.
    pub fn has_success(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| matches!(a.outcome, AttemptOutcome::Success { .. }))
    }

    /// Whether the deadline cut any candidate short.
    pub fn deadline_hit(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| a.outcome == AttemptOutcome::DeadlineExceeded)
    }

    /// Number of candidates that reached an adapter call.
    pub fn calls_made(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| {
                !matches!(
                    a.outcome,
                    AttemptOutcome::SkippedNotCovered | AttemptOutcome::SkippedUnknownProvider
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn candidate(provider: &'static str) -> SourceCandidate {
        SourceCandidate::new(provider, "DS", "CODE", Frequency::Annual)
    }

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = FetchDiagnostics::new();
        diag.record(0, &candidate("eurostat"), AttemptOutcome::SkippedNotCovered);
        diag.record(1, &candidate("imf"), AttemptOutcome::Empty);
        diag.record(2, &candidate("world_bank"), AttemptOutcome::Success { points: 12 });

        let summary = diag.summary();
        assert!(summary.contains("eurostat: SKIPPED"));
        assert!(summary.contains("imf: EMPTY"));
        assert!(summary.contains("world_bank: SUCCESS (12 points)"));
        assert_eq!(diag.calls_made(), 2);
    }

    #[test]
    fn test_has_success() {
        let mut diag = FetchDiagnostics::new();
        diag.record(0, &candidate("imf"), AttemptOutcome::DeadlineExceeded);
        assert!(!diag.has_success());

        diag.record(1, &candidate("world_bank"), AttemptOutcome::Success { points: 1 });
        assert!(diag.has_success());
    }

    #[test]
    fn test_deadline_hit() {
        let mut diag = FetchDiagnostics::new();
        diag.record(0, &candidate("imf"), AttemptOutcome::Empty);
        assert!(!diag.deadline_hit());

        diag.record(1, &candidate("ecb"), AttemptOutcome::DeadlineExceeded);
        assert!(diag.deadline_hit());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(AttemptOutcome::SkippedNotCovered).unwrap();
        assert_eq!(json, serde_json::json!("skipped-not-covered"));
    }
}
