//! Fetch-and-transform for a single source candidate.

use futures::join;

use crate::models::{CountryIdentity, SourceCandidate, TimeSeries, Transform};
use crate::normalize;
use crate::provider::SeriesRequest;
use crate::registry::{AttemptOutcome, ProviderRegistry};

/// Evaluate one candidate: coverage gate, adapter call(s), transform.
///
/// Returns the outcome and the transformed series (empty unless the outcome
/// is `Success`). Ratio candidates fetch both legs concurrently.
pub async fn fetch_candidate(
    registry: &ProviderRegistry,
    country: &CountryIdentity,
    candidate: &SourceCandidate,
) -> (AttemptOutcome, TimeSeries) {
    let Some(provider) = registry.get(candidate.provider_id) else {
        return (AttemptOutcome::SkippedUnknownProvider, TimeSeries::new());
    };
    if !provider.coverage().supports(&country.iso_alpha_2) {
        return (AttemptOutcome::SkippedNotCovered, TimeSeries::new());
    }

    let request = |code: &'static str| SeriesRequest {
        country,
        dataset_id: candidate.dataset_id,
        indicator_code: code,
        frequency: candidate.frequency,
    };

    let (raw_points, series) = match (candidate.transform, candidate.ratio_legs()) {
        (Transform::Ratio, Some((num_code, den_code))) => {
            let (num_req, den_req) = (request(num_code), request(den_code));
            let (num, den) = join!(provider.fetch(&num_req), provider.fetch(&den_req));
            if num.is_empty() || den.is_empty() {
                return (AttemptOutcome::Empty, TimeSeries::new());
            }
            (num.len(), normalize::ratio(&num, &den))
        }
        (transform, _) => {
            let raw = provider.fetch(&request(candidate.indicator_code)).await;
            if raw.is_empty() {
                return (AttemptOutcome::Empty, TimeSeries::new());
            }
            (raw.len(), normalize::apply(transform, raw))
        }
    };

    if series.is_empty() {
        (AttemptOutcome::EmptyAfterTransform { raw_points }, series)
    } else {
        (
            AttemptOutcome::Success {
                points: series.len(),
            },
            series,
        )
    }
}
