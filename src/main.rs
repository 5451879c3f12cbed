// src/main.rs

use sales_report_api::{app, config::Config, db, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_report_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize DB pool
    let pool = db::connect(&config).await?;
    let state = AppState { pool };

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "sales report API listening");

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
