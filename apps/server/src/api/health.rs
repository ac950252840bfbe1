use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{main_lib::AppState, models::ReadyStatus};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, body = ReadyStatus)))]
pub async fn readyz(State(state): State<Arc<AppState>>) -> Json<ReadyStatus> {
    let indicators = state.snapshots.indicators();
    Json(ReadyStatus {
        status: "ready".to_string(),
        indicators: indicators.matrix().len(),
        providers: indicators
            .registry()
            .ids()
            .into_iter()
            .map(str::to_string)
            .collect(),
        checked_at: chrono::Utc::now(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
