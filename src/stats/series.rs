//! Series Builder Module
//! Date-ordered trend and hour-of-day profile series for the chart layer.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

use crate::data::{date_from_days, DATE_COL, HOUR_COL, TOTAL_COL};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub rentals: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    pub hour: i64,
    pub mean_rentals: f64,
}

/// Project the filtered daily subset to (date, count), ascending by date.
pub fn daily_trend(day_subset: &DataFrame) -> PolarsResult<Vec<TrendPoint>> {
    let sorted = day_subset
        .clone()
        .lazy()
        .select([col(DATE_COL), col(TOTAL_COL)])
        .sort([DATE_COL], Default::default())
        .collect()?;

    let date_col = sorted.column(DATE_COL)?.cast(&DataType::Int32)?;
    let count_col = sorted.column(TOTAL_COL)?.cast(&DataType::Int64)?;
    let dates = date_col.i32()?;
    let counts = count_col.i64()?;

    let mut points = Vec::with_capacity(sorted.height());
    for (date, count) in dates.into_iter().zip(counts) {
        if let (Some(days), Some(rentals)) = (date, count) {
            points.push(TrendPoint {
                date: date_from_days(days),
                rentals,
            });
        }
    }
    Ok(points)
}

/// Mean count per hour of day over the full hourly table, ascending by hour.
/// At most 24 entries; hours absent from the data are absent here too.
pub fn hourly_profile(hour: &DataFrame) -> PolarsResult<Vec<HourlyPoint>> {
    let grouped = hour
        .clone()
        .lazy()
        .group_by([col(HOUR_COL)])
        .agg([col(TOTAL_COL).mean()])
        .sort([HOUR_COL], Default::default())
        .collect()?;

    let hour_col = grouped.column(HOUR_COL)?.cast(&DataType::Int64)?;
    let mean_col = grouped.column(TOTAL_COL)?.cast(&DataType::Float64)?;
    let hours = hour_col.i64()?;
    let means = mean_col.f64()?;

    let mut points = Vec::with_capacity(grouped.height());
    for (hour, mean) in hours.into_iter().zip(means) {
        if let (Some(hour), Some(mean_rentals)) = (hour, mean) {
            points.push(HourlyPoint { hour, mean_rentals });
        }
    }
    Ok(points)
}
