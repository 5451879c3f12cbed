// src/lib.rs

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod client;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Builds the service router with its middleware stack.
pub fn app(state: AppState) -> Router {
    // Read-only JSON API; any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        // report
        .route("/report", get(routes::report::get_report))
        .route("/vendas", get(routes::report::get_report))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
