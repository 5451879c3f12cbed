use axum::{http::StatusCode, Json};
use tracing::error;

use crate::models::ErrorBody;

pub mod health;
pub mod report;

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

// Common error mappers
pub fn internal_error<E: std::fmt::Display>(e: E) -> ApiError {
    error!(error = %e, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: INTERNAL_ERROR_MESSAGE.into() }),
    )
}

pub fn bad_request<E: std::fmt::Display>(e: E) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: e.to_string() }))
}
