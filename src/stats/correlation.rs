//! Correlation Summarizer Module
//! Pearson correlation of every numeric column against the target count.

use polars::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::cmp::Ordering;

/// How many columns each ranking keeps.
pub const TOP_CORRELATED: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    pub column: String,
    pub coefficient: f64,
}

/// Rank numeric columns by Pearson correlation with `target`.
///
/// The ranking is descending by signed coefficient (not magnitude) and
/// truncated to `top_n`. The target correlates with itself at 1.0 and so
/// normally heads the list. Undefined coefficients (zero variance, or fewer
/// than two aligned observations) sort below every finite one.
pub fn correlation_ranking(
    df: &DataFrame,
    target: &str,
    top_n: usize,
) -> PolarsResult<Vec<CorrelationEntry>> {
    let target_col = df.column(target)?.cast(&DataType::Float64)?;
    let target_ca = target_col.f64()?;

    let mut entries = Vec::new();
    for column in df.get_columns() {
        if !is_numeric(column.dtype()) {
            continue;
        }
        let cast = column.cast(&DataType::Float64)?;
        let ca = cast.f64()?;
        let (xs, ys) = aligned_pairs(ca, target_ca);
        entries.push(CorrelationEntry {
            column: column.name().to_string(),
            coefficient: pearson(&xs, &ys),
        });
    }

    entries.sort_by(|a, b| descending_nan_last(a.coefficient, b.coefficient));
    entries.truncate(top_n);
    Ok(entries)
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Keep only positions where both columns hold a finite value.
fn aligned_pairs(xs: &Float64Chunked, ys: &Float64Chunked) -> (Vec<f64>, Vec<f64>) {
    let mut out_x = Vec::with_capacity(xs.len());
    let mut out_y = Vec::with_capacity(ys.len());
    for (x, y) in xs.into_iter().zip(ys) {
        if let (Some(x), Some(y)) = (x, y) {
            if x.is_finite() && y.is_finite() {
                out_x.push(x);
                out_y.push(y);
            }
        }
    }
    (out_x, out_y)
}

/// Sample Pearson coefficient; NaN when undefined.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = xs.iter().mean();
    let mean_y = ys.iter().mean();
    let std_x = xs.iter().std_dev();
    let std_y = ys.iter().std_dev();
    if std_x == 0.0 || std_y == 0.0 {
        return f64::NAN;
    }

    let covariance = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>()
        / (n - 1) as f64;

    covariance / (std_x * std_y)
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
