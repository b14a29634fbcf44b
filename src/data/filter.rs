//! Range Filter Module
//! Inclusive date-interval filtering of the daily table.

use chrono::NaiveDate;
use polars::prelude::*;

use super::loader::DATE_COL;

/// Inclusive calendar-date range, start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    /// Build an interval, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Resolve a user date selection into an interval.
    ///
    /// A partial selection (one endpoint) or an inverted one maps to `None`,
    /// which downstream treats as "no filter" rather than an error.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => {
                let interval = Self::new(start, end);
                if interval.is_none() {
                    log::warn!(
                        "date range {start}..{end} ends before it starts; using the full range"
                    );
                }
                interval
            }
            (None, None) => None,
            _ => {
                log::warn!("date range needs both endpoints; using the full range");
                None
            }
        }
    }
}

/// Days since the Unix epoch, matching the physical layout of the Date dtype.
pub(crate) fn epoch_days(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}

pub(crate) fn date_from_days(days: i32) -> NaiveDate {
    NaiveDate::default() + chrono::Duration::days(days as i64)
}

/// Rows of the daily table whose date falls within the interval.
/// `None` returns the full table unchanged (degraded-filter fallback).
pub fn filter_daily(day: &DataFrame, interval: Option<&DateInterval>) -> PolarsResult<DataFrame> {
    let Some(interval) = interval else {
        return Ok(day.clone());
    };

    day.clone()
        .lazy()
        .filter(
            col(DATE_COL)
                .cast(DataType::Int32)
                .gt_eq(lit(epoch_days(interval.start)))
                .and(
                    col(DATE_COL)
                        .cast(DataType::Int32)
                        .lt_eq(lit(epoch_days(interval.end))),
                ),
        )
        .collect()
}
