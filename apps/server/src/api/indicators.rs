use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use country_radar_indicators::Resolution;

use crate::{
    api::country::require_country,
    error::ApiResult,
    main_lib::AppState,
    models::{CountryQuery, IndicatorListing},
};

#[utoipa::path(get, path = "/api/v1/indicators", responses((status = 200, body = [IndicatorListing])))]
async fn list_indicators(State(state): State<Arc<AppState>>) -> Json<Vec<IndicatorListing>> {
    let matrix = state.snapshots.indicators().matrix();
    Json(matrix.iter().map(IndicatorListing::from).collect())
}

/// One indicator with per-candidate diagnostics.
#[utoipa::path(
    get,
    path = "/api/v1/indicators/{key}",
    params(("key" = String, Path, description = "Indicator key"), CountryQuery),
    responses(
        (status = 200, description = "Resolved indicator with diagnostics"),
        (status = 404, description = "Unknown indicator or invalid country")
    )
)]
async fn get_indicator(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(query): Query<CountryQuery>,
) -> ApiResult<Json<Resolution>> {
    let indicators = state.snapshots.indicators();
    // Unknown keys fail before the country is looked at.
    indicators.matrix().lookup(&key)?;
    let country = state.snapshots.country(require_country(&query)?)?;
    let resolution = indicators
        .resolve_with_diagnostics(&country, &key, query.fresh)
        .await?;
    Ok(Json(resolution))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/indicators", get(list_indicators))
        .route("/indicators/{key}", get(get_indicator))
}
