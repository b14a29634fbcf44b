//! Report Module
//! Plain structured values handed to the display layer, plus text rendering.

use polars::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;

use crate::data::{filter_daily, DateInterval, Datasets, TOTAL_COL};
use crate::stats::{
    correlation_ranking, daily_trend, hourly_profile, summarize, CorrelationEntry, HourlyPoint,
    RentalSummary, TrendPoint, TOP_CORRELATED,
};

/// Shape and missing-value overview for one source table.
#[derive(Debug, Clone, Serialize)]
pub struct DataProfile {
    pub rows: usize,
    pub columns: usize,
    /// Columns with at least one missing value, with their null counts.
    pub missing: Vec<(String, u64)>,
}

impl DataProfile {
    fn of(df: &DataFrame) -> Self {
        let missing = df
            .get_columns()
            .iter()
            .filter(|c| c.null_count() > 0)
            .map(|c| (c.name().to_string(), c.null_count() as u64))
            .collect();
        Self {
            rows: df.height(),
            columns: df.width(),
            missing,
        }
    }
}

/// Everything the display layer needs for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub interval: Option<DateIntervalView>,
    pub summary: RentalSummary,
    pub trend: Vec<TrendPoint>,
    pub hourly_profile: Vec<HourlyPoint>,
    pub day_correlation: Vec<CorrelationEntry>,
    pub hour_correlation: Vec<CorrelationEntry>,
    pub day_profile: DataProfile,
    pub hour_profile: DataProfile,
}

/// Serializable view of the applied interval.
#[derive(Debug, Clone, Serialize)]
pub struct DateIntervalView {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

impl DashboardReport {
    /// Recompute every output from the immutable snapshot and the current
    /// filter. Pure: repeated calls with the same inputs give the same report.
    pub fn build(data: &Datasets, interval: Option<&DateInterval>) -> PolarsResult<Self> {
        let day_subset = filter_daily(&data.day, interval)?;
        let summary = summarize(&day_subset)?;
        let trend = daily_trend(&day_subset)?;
        let profile = hourly_profile(&data.hour)?;

        // The two rankings are independent; run them side by side.
        let (day_correlation, hour_correlation) = rayon::join(
            || correlation_ranking(&data.day, TOTAL_COL, TOP_CORRELATED),
            || correlation_ranking(&data.hour, TOTAL_COL, TOP_CORRELATED),
        );

        Ok(Self {
            interval: interval.map(|i| DateIntervalView {
                start: i.start,
                end: i.end,
            }),
            summary,
            trend,
            hourly_profile: profile,
            day_correlation: day_correlation?,
            hour_correlation: hour_correlation?,
            day_profile: DataProfile::of(&data.day),
            hour_profile: DataProfile::of(&data.hour),
        })
    }

    /// Render the report as plain text for the terminal.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Bike Sharing Report");
        let _ = writeln!(out, "===================");
        match &self.interval {
            Some(i) => {
                let _ = writeln!(out, "Date range: {} to {} (inclusive)", i.start, i.end);
            }
            None => {
                let _ = writeln!(out, "Date range: full dataset");
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Total rentals:     {}", self.summary.total_rentals);
        let _ = writeln!(out, "Average per day:   {:.0}", self.summary.mean_per_day);
        let _ = writeln!(out, "Registered share:  {:.1}%", self.summary.registered_share);
        let _ = writeln!(out);

        match (self.trend.first(), self.trend.last()) {
            (Some(first), Some(last)) => {
                let _ = writeln!(
                    out,
                    "Daily trend: {} points, {} to {}",
                    self.trend.len(),
                    first.date,
                    last.date
                );
            }
            _ => {
                let _ = writeln!(out, "Daily trend: no data in range");
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Average rentals per hour:");
        for point in &self.hourly_profile {
            let _ = writeln!(out, "  {:>2}h  {:>8.1}", point.hour, point.mean_rentals);
        }
        let _ = writeln!(out);

        render_ranking(&mut out, "Top correlations (day -> cnt):", &self.day_correlation);
        render_ranking(&mut out, "Top correlations (hour -> cnt):", &self.hour_correlation);

        let _ = writeln!(
            out,
            "Data: day {} x {} | hour {} x {}",
            self.day_profile.rows,
            self.day_profile.columns,
            self.hour_profile.rows,
            self.hour_profile.columns
        );
        render_missing(&mut out, "day", &self.day_profile);
        render_missing(&mut out, "hour", &self.hour_profile);
        out
    }
}

fn render_ranking(out: &mut String, title: &str, entries: &[CorrelationEntry]) {
    let _ = writeln!(out, "{title}");
    for entry in entries {
        let _ = writeln!(out, "  {:<12} {:>7.3}", entry.column, entry.coefficient);
    }
    let _ = writeln!(out);
}

fn render_missing(out: &mut String, table: &str, profile: &DataProfile) {
    if profile.missing.is_empty() {
        let _ = writeln!(out, "Missing values ({table}): none");
    } else {
        let cols: Vec<String> = profile
            .missing
            .iter()
            .map(|(name, n)| format!("{name}={n}"))
            .collect();
        let _ = writeln!(out, "Missing values ({table}): {}", cols.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{daily_frame, hourly_frame};

    fn sample_datasets() -> Datasets {
        Datasets {
            day: daily_frame(&[("2011-01-01", 100, 60), ("2011-01-02", 200, 150)]),
            hour: hourly_frame(&[
                ("2011-01-01", 0, 10),
                ("2011-01-02", 0, 20),
                ("2011-01-01", 1, 5),
            ]),
        }
    }

    #[test]
    fn builds_every_section_from_the_snapshot() {
        let data = sample_datasets();
        let report = DashboardReport::build(&data, None).unwrap();

        assert_eq!(report.summary.total_rentals, 300);
        assert_eq!(report.trend.len(), 2);
        assert_eq!(report.hourly_profile.len(), 2);
        assert!(!report.day_correlation.is_empty());
        assert!(!report.hour_correlation.is_empty());
        assert_eq!(report.day_profile.rows, 2);
        assert_eq!(report.hour_profile.rows, 3);
    }

    #[test]
    fn rebuilding_with_the_same_filter_gives_the_same_metrics() {
        let data = sample_datasets();
        let interval = DateInterval::new(
            "2011-01-01".parse().unwrap(),
            "2011-01-01".parse().unwrap(),
        )
        .unwrap();

        let a = DashboardReport::build(&data, Some(&interval)).unwrap();
        let b = DashboardReport::build(&data, Some(&interval)).unwrap();
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.trend, b.trend);
        assert_eq!(a.summary.total_rentals, 100);
    }

    #[test]
    fn text_rendering_includes_the_headline_metrics() {
        let data = sample_datasets();
        let report = DashboardReport::build(&data, None).unwrap();
        let text = report.render_text();

        assert!(text.contains("Total rentals:     300"));
        assert!(text.contains("Average per day:   150"));
        assert!(text.contains("Registered share:  70.0%"));
        assert!(text.contains("Top correlations (day -> cnt):"));
    }

    #[test]
    fn report_serializes_to_json() {
        let data = sample_datasets();
        let report = DashboardReport::build(&data, None).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"]["total_rentals"], 300);
        assert!(json["hourly_profile"].as_array().unwrap().len() <= 24);
    }
}
