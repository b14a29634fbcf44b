//! Data module - CSV loading and date filtering

mod filter;
mod loader;

pub use filter::{filter_daily, DateInterval};
pub use loader::{
    DatasetCache, DatasetPaths, Datasets, LoaderError, DATE_COL, HOUR_COL, REGISTERED_COL,
    TOTAL_COL,
};

pub(crate) use filter::date_from_days;

#[cfg(test)]
pub(crate) mod testutil {
    use super::filter::epoch_days;
    use super::loader::{DATE_COL, HOUR_COL, REGISTERED_COL, TOTAL_COL};
    use polars::prelude::*;

    /// Daily frame with a proper Date column, from (date, cnt, registered) rows.
    pub(crate) fn daily_frame(rows: &[(&str, i64, i64)]) -> DataFrame {
        let days: Vec<i32> = rows
            .iter()
            .map(|(d, _, _)| epoch_days(d.parse().unwrap()))
            .collect();
        let cnt: Vec<i64> = rows.iter().map(|&(_, c, _)| c).collect();
        let registered: Vec<i64> = rows.iter().map(|&(_, _, r)| r).collect();
        df!(
            DATE_COL => days,
            TOTAL_COL => cnt,
            REGISTERED_COL => registered
        )
        .unwrap()
        .lazy()
        .with_column(col(DATE_COL).cast(DataType::Date))
        .collect()
        .unwrap()
    }

    /// Hourly frame with a proper Date column, from (date, hr, cnt) rows.
    pub(crate) fn hourly_frame(rows: &[(&str, i64, i64)]) -> DataFrame {
        let days: Vec<i32> = rows
            .iter()
            .map(|(d, _, _)| epoch_days(d.parse().unwrap()))
            .collect();
        let hr: Vec<i64> = rows.iter().map(|&(_, h, _)| h).collect();
        let cnt: Vec<i64> = rows.iter().map(|&(_, _, c)| c).collect();
        df!(
            DATE_COL => days,
            HOUR_COL => hr,
            TOTAL_COL => cnt
        )
        .unwrap()
        .lazy()
        .with_column(col(DATE_COL).cast(DataType::Date))
        .collect()
        .unwrap()
    }
}
