use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use country_radar_indicators::{CountrySnapshot, DebtPayload};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CountryCodes, CountryQuery},
};

const SNAPSHOT_CACHE_CONTROL: &str = "public, max-age=300";

pub(crate) fn require_country(query: &CountryQuery) -> ApiResult<&str> {
    query
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing 'country' query parameter".to_string()))
}

/// Full country snapshot. HEAD requests run the same handler and warm the cache.
#[utoipa::path(
    get,
    path = "/api/v1/country-data",
    params(CountryQuery),
    responses(
        (status = 200, description = "Country snapshot"),
        (status = 404, description = "Invalid country name")
    )
)]
async fn country_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> ApiResult<impl IntoResponse> {
    let country = require_country(&query)?;
    let snapshot: Arc<CountrySnapshot> = state.snapshots.snapshot(country, query.fresh).await?;
    Ok((
        [(header::CACHE_CONTROL, SNAPSHOT_CACHE_CONTROL)],
        Json(snapshot),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/debt",
    params(CountryQuery),
    responses(
        (status = 200, description = "Debt-to-GDP waterfall result"),
        (status = 404, description = "Invalid country name")
    )
)]
async fn debt(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> ApiResult<Json<DebtPayload>> {
    let country = require_country(&query)?;
    let payload = state.snapshots.debt_for(country, query.fresh).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/api/v1/codes",
    params(CountryQuery),
    responses((status = 200, body = CountryCodes), (status = 404, description = "Invalid country name"))
)]
async fn codes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> ApiResult<Json<CountryCodes>> {
    let country = state.snapshots.country(require_country(&query)?)?;
    let currency_code = state.snapshots.currency_code(&country.iso_alpha_2);
    Ok(Json(CountryCodes {
        name: country.name,
        iso_alpha_2: country.iso_alpha_2,
        iso_alpha_3: country.iso_alpha_3,
        iso_numeric: country.iso_numeric,
        currency_code,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/country-data", get(country_data))
        .route("/debt", get(debt))
        .route("/codes", get(codes))
}
