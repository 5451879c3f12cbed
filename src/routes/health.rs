// src/routes/health.rs

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResp { pub status: &'static str, pub version: &'static str }

/// GET /
pub async fn root() -> &'static str {
    "sales report service running"
}

/// GET /health
pub async fn health() -> Json<HealthResp> {
    Json(HealthResp { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
