// src/routes/report.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    db,
    models::{DateRange, SalesReportRow},
    AppState,
};
use super::{bad_request, internal_error, ApiError};

#[derive(Deserialize)]
pub struct ReportQ {
    #[serde(alias = "data_ini")] pub start_date: Option<String>,
    #[serde(alias = "data_fim")] pub end_date: Option<String>,
}

/// GET /report?start_date=DD/MM/YYYY&end_date=DD/MM/YYYY
pub async fn get_report(
    State(state): State<AppState>,
    query: Result<Query<ReportQ>, QueryRejection>,
) -> Result<Json<Vec<SalesReportRow>>, ApiError> {
    // validate before touching the pool
    let Query(q) = query.map_err(bad_request)?;
    let range = DateRange::parse(q.start_date.as_deref(), q.end_date.as_deref())
        .map_err(bad_request)?;
    debug!(%range, "sales report requested");

    // released back to the pool when dropped, on every return path
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;
    let rows = db::sales_report(&mut *conn, &range)
        .await
        .map_err(internal_error)?;

    info!(%range, rows = rows.len(), "sales report served");
    Ok(Json(rows.into_iter().map(SalesReportRow::from).collect()))
}
