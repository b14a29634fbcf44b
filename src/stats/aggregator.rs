//! Aggregator Module
//! Scalar metrics over a filtered daily subset.

use polars::prelude::*;
use serde::Serialize;

use crate::data::{REGISTERED_COL, TOTAL_COL};

/// The three headline metrics shown for the selected date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalSummary {
    pub total_rentals: i64,
    pub mean_per_day: f64,
    pub registered_share: f64,
}

/// Compute total, mean-per-day, and registered share over the subset.
///
/// An empty subset yields all-zero metrics; the share denominator is floored
/// at 1 so it never divides by zero.
pub fn summarize(day_subset: &DataFrame) -> PolarsResult<RentalSummary> {
    let total_rentals = column_sum(day_subset, TOTAL_COL)?;
    let registered = column_sum(day_subset, REGISTERED_COL)?;

    let rows = day_subset.height();
    let mean_per_day = if rows == 0 {
        0.0
    } else {
        total_rentals as f64 / rows as f64
    };
    let registered_share = 100.0 * registered as f64 / total_rentals.max(1) as f64;

    Ok(RentalSummary {
        total_rentals,
        mean_per_day,
        registered_share,
    })
}

fn column_sum(df: &DataFrame, name: &str) -> PolarsResult<i64> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.sum().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::daily_frame;

    #[test]
    fn computes_total_mean_and_share() {
        let df = daily_frame(&[("2011-01-01", 100, 60), ("2011-01-02", 200, 150)]);
        let summary = summarize(&df).unwrap();

        assert_eq!(summary.total_rentals, 300);
        assert_eq!(summary.mean_per_day, 150.0);
        assert_eq!(summary.registered_share, 70.0);
    }

    #[test]
    fn empty_subset_yields_zero_metrics() {
        let df = daily_frame(&[]);
        let summary = summarize(&df).unwrap();

        assert_eq!(summary.total_rentals, 0);
        assert_eq!(summary.mean_per_day, 0.0);
        assert_eq!(summary.registered_share, 0.0);
    }

    #[test]
    fn share_stays_within_percent_bounds() {
        let df = daily_frame(&[("2011-01-01", 10, 10), ("2011-01-02", 5, 0)]);
        let summary = summarize(&df).unwrap();
        assert!(summary.registered_share >= 0.0 && summary.registered_share <= 100.0);
    }
}
