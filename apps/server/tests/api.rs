use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use country_radar_indicators::{
    provider::ids, Frequency, IndicatorMatrix, IndicatorSpec, ProviderError, ProviderRegistry,
    SeriesProvider, SeriesRequest, SourceCandidate, TimeSeries,
};
use country_radar_server::{api::app_router, build_state_with, config::Config};
use serde_json::Value;
use tower::ServiceExt;

/// World Bank stand-in answering from an in-memory table.
struct StubWorldBank {
    data: HashMap<&'static str, TimeSeries>,
    calls: AtomicUsize,
}

#[async_trait]
impl SeriesProvider for StubWorldBank {
    fn id(&self) -> &'static str {
        ids::WORLD_BANK
    }

    fn label(&self) -> &'static str {
        "World Bank"
    }

    async fn fetch_series(&self, request: &SeriesRequest<'_>) -> Result<TimeSeries, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .data
            .get(request.indicator_code)
            .cloned()
            .unwrap_or_default())
    }
}

fn series(points: &[(&str, f64)]) -> TimeSeries {
    points.iter().copied().collect()
}

fn spec(key: &'static str, code: &'static str) -> IndicatorSpec {
    IndicatorSpec {
        key,
        label: key,
        unit: "percent",
        preferred_frequency: Frequency::Annual,
        max_age_years: None,
        candidates: vec![SourceCandidate::new(
            ids::WORLD_BANK,
            "WDI",
            code,
            Frequency::Annual,
        )],
    }
}

fn build_test_router() -> (Router, Arc<StubWorldBank>) {
    let stub = Arc::new(StubWorldBank {
        data: HashMap::from([
            ("FP.CPI.TOTL.ZG", series(&[("2022", 9.3), ("2023", 4.6)])),
            ("GC.DOD.TOTL.CN", series(&[("2022", 600.0)])),
            ("NY.GDP.MKTP.CN", series(&[("2022", 900.0)])),
        ]),
        calls: AtomicUsize::new(0),
    });
    let matrix = IndicatorMatrix::new(vec![
        spec("inflation_yoy", "FP.CPI.TOTL.ZG"),
        spec("unemployment_rate", "SL.UEM.TOTL.ZS"),
    ])
    .unwrap();
    let registry = ProviderRegistry::new(vec![stub.clone() as Arc<dyn SeriesProvider>]);

    let config = Config::default();
    let state = build_state_with(&config, matrix, registry).unwrap();
    (app_router(state, &config), stub)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn healthz_and_readyz() {
    let (app, _) = build_test_router();

    let (status, _, body) = send(&app, Method::GET, "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, ready) = get_json(&app, "/api/v1/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["indicators"], 2);
    assert_eq!(ready["providers"], serde_json::json!(["world_bank"]));
}

#[tokio::test]
async fn country_data_returns_snapshot_with_cache_header() {
    let (app, _) = build_test_router();

    let (status, headers, body) = send(&app, Method::GET, "/api/v1/country-data?country=Brazil").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=300"
    );

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["country"], "Brazil");
    assert_eq!(json["iso_codes"]["iso_alpha_3"], "BRA");
    assert_eq!(json["imf_data"]["CPI"]["latest"]["value"], 4.6);
    assert_eq!(json["imf_data"]["CPI"]["series"]["2022"], 9.3);
    assert!(json["imf_data"]["Unemployment (%)"]["latest"]["value"].is_null());
    assert_eq!(json["debt_to_gdp"]["latest"]["value"], 66.67);
    assert_eq!(json["debt_to_gdp"]["latest"]["path_used"], "computed-lcu");
    assert_eq!(json["government_debt"]["latest"]["currency"], "LCU");
    assert_eq!(json["government_debt"]["latest"]["currency_code"], "BRL");
    assert_eq!(json["nominal_gdp"]["latest"]["value"], 900.0);
    assert!(json["additional_indicators"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn head_warms_snapshot_cache() {
    let (app, stub) = build_test_router();

    let (status, _, _) = send(&app, Method::HEAD, "/api/v1/country-data?country=BR").await;
    assert_eq!(status, StatusCode::OK);
    let calls = stub.calls.load(Ordering::SeqCst);
    assert!(calls > 0);

    let (status, _) = get_json(&app, "/api/v1/country-data?country=br").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls.load(Ordering::SeqCst), calls);
}

#[tokio::test]
async fn invalid_country_is_404_with_message() {
    let (app, stub) = build_test_router();

    let (status, json) = get_json(&app, "/api/v1/country-data?country=Narnia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Invalid country name: Narnia");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_country_is_400() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/api/v1/debt").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn debt_endpoint() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/api/v1/debt?country=BRA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path_used"], "computed-lcu");
    assert_eq!(json["government_type"], "Central Government");
    assert_eq!(json["latest_value"], 66.67);
}

#[tokio::test]
async fn indicator_listing_and_single_indicator() {
    let (app, _) = build_test_router();

    let (status, list) = get_json(&app, "/api/v1/indicators").await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["inflation_yoy", "unemployment_rate"]);
    assert_eq!(list[0]["candidates"][0]["provider_id"], "world_bank");

    let (status, json) = get_json(&app, "/api/v1/indicators/inflation_yoy?country=Brazil").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "inflation_yoy");
    assert_eq!(json["latest_value"], 4.6);
    assert_eq!(json["latest_period"], "2023");
    assert_eq!(json["path_used"]["provider_id"], "world_bank");
    assert_eq!(json["from_cache"], false);
    assert_eq!(json["diagnostics"]["attempts"][0]["outcome"]["success"]["points"], 2);

    let (_, again) = get_json(&app, "/api/v1/indicators/inflation_yoy?country=Brazil").await;
    assert_eq!(again["from_cache"], true);
}

#[tokio::test]
async fn unknown_indicator_is_404() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/api/v1/indicators/nope?country=Brazil").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn codes_endpoint() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/api/v1/codes?country=Germany").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iso_alpha_2"], "DE");
    assert_eq!(json["iso_numeric"], "276");
    assert_eq!(json["currency_code"], "EUR");
}

#[tokio::test]
async fn codes_cover_every_iso_country() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/api/v1/codes?country=Kazakhstan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iso_alpha_3"], "KAZ");
    assert_eq!(json["currency_code"], "KZT");

    let (status, json) = get_json(&app, "/api/v1/codes?country=LK").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Sri Lanka");
    assert_eq!(json["currency_code"], "LKR");

    let (status, json) = get_json(&app, "/api/v1/codes?country=Antarctica").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["currency_code"].is_null());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = build_test_router();
    let (status, json) = get_json(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/v1/country-data"].is_object());
}
