//! Indicator resolution: priority fallback across source candidates.
//!
//! # Architecture
//!
//! Every indicator walks the same state machine:
//!
//! ```text
//! ┌─────────┐   cache hit    ┌──────────┐
//! │ PENDING │ ─────────────▶ │ RESOLVED │
//! └─────────┘                └──────────┘
//!      │ miss                      ▲
//!      ▼                           │ first non-empty (strict priority)
//! ┌──────────────────────┐         │
//! │ TRYING(candidate_i)  │ ────────┘
//! │ fetch -> transform   │
//! └──────────────────────┘
//!      │ all empty
//!      ▼
//! ┌───────────┐
//! │ EXHAUSTED │  null latest, empty series, no path (cached like any result)
//! └───────────┘
//! ```
//!
//! - [`IndicatorResolver`] handles every matrix key.
//! - [`DebtResolver`] runs the dedicated debt-to-GDP waterfall.

mod candidate;
mod debt;
mod indicator;

pub use candidate::fetch_candidate;
pub use debt::{DebtResolver, DebtSources};
pub use indicator::{IndicatorResolver, Resolution};

use std::fmt;
use std::str::FromStr;

/// How candidates are scheduled within the per-indicator deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// One candidate at a time; stop at the first non-empty result.
    #[default]
    Sequential,
    /// Launch every candidate, wait up to the deadline, then pick by priority.
    Concurrent,
}

impl FromStr for ResolveStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(format!("unknown resolve strategy '{}'", other)),
        }
    }
}

impl fmt::Display for ResolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Concurrent => write!(f, "concurrent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!(
            "Concurrent".parse::<ResolveStrategy>().unwrap(),
            ResolveStrategy::Concurrent
        );
        assert_eq!(
            " sequential ".parse::<ResolveStrategy>().unwrap(),
            ResolveStrategy::Sequential
        );
        assert!("parallel".parse::<ResolveStrategy>().is_err());
    }
}
