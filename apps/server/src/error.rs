use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use country_radar_indicators::IndicatorError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Indicator(#[from] IndicatorError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Indicator(e) => match e {
                IndicatorError::InvalidCountry(_) | IndicatorError::UnknownIndicator(_) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                IndicatorError::InvalidMatrix { .. } | IndicatorError::UnknownProvider { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        if status.is_server_error() {
            tracing::error!("{}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
