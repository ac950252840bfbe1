use std::sync::Arc;

use country_radar_indicators::{IndicatorMatrix, ProviderRegistry, SnapshotService};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub snapshots: Arc<SnapshotService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Production state: built-in matrix and every HTTP adapter.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let snapshots = SnapshotService::from_config(&config.engine)?;
    log_engine(config, &snapshots);
    Ok(Arc::new(AppState {
        snapshots: Arc::new(snapshots),
    }))
}

/// State around an explicit matrix and registry (tests, offline runs).
pub fn build_state_with(
    config: &Config,
    matrix: IndicatorMatrix,
    registry: ProviderRegistry,
) -> anyhow::Result<Arc<AppState>> {
    let snapshots = SnapshotService::from_parts(&config.engine, matrix, registry)?;
    log_engine(config, &snapshots);
    Ok(Arc::new(AppState {
        snapshots: Arc::new(snapshots),
    }))
}

fn log_engine(config: &Config, snapshots: &SnapshotService) {
    tracing::info!(
        indicators = snapshots.indicators().matrix().len(),
        providers = snapshots.indicators().registry().len(),
        strategy = %config.engine.strategy,
        "Engine ready"
    );
}
