//! Provider registry module.
//!
//! This module provides orchestration support for series adapters:
//! - Explicit provider id to adapter mapping
//! - Per-candidate attempt diagnostics

mod diagnostics;
mod provider_registry;

pub use diagnostics::{AttemptOutcome, CandidateAttempt, FetchDiagnostics};
pub use provider_registry::ProviderRegistry;
