// src/client/mod.rs

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{DateRange, ErrorBody, SalesReportRow};

pub mod comparison;
pub mod summary;

pub use comparison::{pct, Comparison, ComparisonMode, Metric, PeriodRanges};
pub use summary::{Dashboard, GroupTotal, ReportFilter, Totals};

const FETCH_FAILED: &str = "failed to fetch report data";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success response; `message` is the server's when it sent one.
    #[error("{message}")]
    Fetch { status: u16, message: String },
    #[error("failed to fetch report data: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// What the user sees for any failed fetch.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Fetch { message, .. } => message,
            ClientError::Http(_) => FETCH_FAILED,
        }
    }
}

/// HTTP client for the report service.
#[derive(Clone)]
pub struct ReportClient {
    base_url: String,
    http: reqwest::Client,
}

impl ReportClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// GET /report for one range.
    pub async fn fetch(&self, range: &DateRange) -> Result<Vec<SalesReportRow>, ClientError> {
        let url = format!("{}/report", self.base_url);
        debug!(%url, %range, "fetching sales report");

        let resp = self
            .http
            .get(&url)
            .query(&[("start_date", range.start_param()), ("end_date", range.end_param())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| FETCH_FAILED.to_string());
            warn!(status = status.as_u16(), %message, "sales report fetch failed");
            return Err(ClientError::Fetch { status: status.as_u16(), message });
        }

        Ok(resp.json().await?)
    }

    pub async fn dashboard(
        &self,
        range: &DateRange,
        filter: &ReportFilter,
    ) -> Result<Dashboard, ClientError> {
        let rows = self.fetch(range).await?;
        Ok(Dashboard::build(&rows, filter))
    }

    /// Both periods are fetched concurrently; either failure fails the comparison.
    pub async fn compare(
        &self,
        mode: &ComparisonMode,
        today: NaiveDate,
    ) -> Result<Comparison, ClientError> {
        let ranges = mode.ranges(today);
        let (current, previous) =
            tokio::try_join!(self.fetch(&ranges.current), self.fetch(&ranges.previous))?;
        Ok(Comparison::of(&ranges, &current, &previous))
    }
}
