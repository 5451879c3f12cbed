// src/models/date_range.rs

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("start_date and end_date (or data_ini and data_fim) are required (DD/MM/YYYY)")]
    Missing,
    #[error("invalid date format '{0}', use DD/MM/YYYY")]
    BadFormat(String),
}

/// Inclusive calendar-date range of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("static date pattern"))
}

fn parse_day(s: &str) -> Result<NaiveDate, DateRangeError> {
    if !day_pattern().is_match(s) {
        return Err(DateRangeError::BadFormat(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateRangeError::BadFormat(s.to_string()))
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both bounds must be present before either is checked for format.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DateRangeError> {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => (s, e),
            _ => return Err(DateRangeError::Missing),
        };
        Ok(Self {
            start: parse_day(start)?,
            end: parse_day(end)?,
        })
    }

    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_param(), self.end_param())
    }
}
