// src/client/comparison.rs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::summary::Totals;
use crate::models::{DateRange, SalesReportRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMode {
    /// Month to date against the same span of the previous month.
    Monthly,
    /// Year to date against the same span of the previous year.
    Yearly,
    Custom { current: DateRange, previous: DateRange },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRanges {
    pub current: DateRange,
    pub previous: DateRange,
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (y, m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}

/// `day` pulled back to the last day of the month when it overflows.
fn clamped(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl ComparisonMode {
    pub fn ranges(&self, today: NaiveDate) -> PeriodRanges {
        match *self {
            ComparisonMode::Monthly => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                PeriodRanges {
                    current: DateRange::new(clamped(today.year(), today.month(), 1), today),
                    previous: DateRange::new(
                        clamped(year, month, 1),
                        clamped(year, month, today.day()),
                    ),
                }
            }
            ComparisonMode::Yearly => {
                let year = today.year() - 1;
                PeriodRanges {
                    current: DateRange::new(clamped(today.year(), 1, 1), today),
                    previous: DateRange::new(
                        clamped(year, 1, 1),
                        clamped(year, today.month(), today.day()),
                    ),
                }
            }
            ComparisonMode::Custom { current, previous } => PeriodRanges { current, previous },
        }
    }
}

/// Percentage change from `prev` to `cur`.
pub fn pct(cur: f64, prev: f64) -> f64 {
    if prev == 0.0 {
        return if cur == 0.0 { 0.0 } else { 100.0 };
    }
    (cur - prev) / prev * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub current: f64,
    pub previous: f64,
    pub change_pct: f64,
}

impl Metric {
    pub fn new(current: f64, previous: f64) -> Self {
        Self { current, previous, change_pct: pct(current, previous) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub current_period: String,
    pub previous_period: String,
    pub value: Metric,
    pub quantity: Metric,
    /// Average value per unit.
    pub ticket: Metric,
}

impl Comparison {
    pub fn of(ranges: &PeriodRanges, current: &[SalesReportRow], previous: &[SalesReportRow]) -> Self {
        let cur = Totals::of(current);
        let prev = Totals::of(previous);
        Self {
            current_period: ranges.current.to_string(),
            previous_period: ranges.previous.to_string(),
            value: Metric::new(cur.value, prev.value),
            quantity: Metric::new(cur.quantity, prev.quantity),
            ticket: Metric::new(cur.average, prev.average),
        }
    }
}
