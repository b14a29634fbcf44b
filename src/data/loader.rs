//! Dataset Loader Module
//! Reads the day/hour CSV pair with Polars and memoizes the parsed snapshot.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Date column shared by both tables.
pub const DATE_COL: &str = "dteday";
/// Total rental count column shared by both tables.
pub const TOTAL_COL: &str = "cnt";
/// Registered-user rental count column (daily table only).
pub const REGISTERED_COL: &str = "registered";
/// Hour-of-day column (hourly table only).
pub const HOUR_COL: &str = "hr";

const DAY_FILE: &str = "day.csv";
const HOUR_FILE: &str = "hour.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("required column '{column}' missing from {file}")]
    MissingColumn { file: String, column: String },
    #[error("column '{column}' in {file} did not parse as a calendar date")]
    DateColumn { file: String, column: String },
}

/// Locations of the two source files, fixed relative to a dataset directory.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub day: PathBuf,
    pub hour: PathBuf,
}

impl DatasetPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            day: dir.join(DAY_FILE),
            hour: dir.join(HOUR_FILE),
        }
    }
}

/// Immutable snapshot of the two loaded tables.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub day: DataFrame,
    pub hour: DataFrame,
}

/// Memoizing holder for the loaded snapshot.
///
/// The files are read at most once per instance; later calls hand out the
/// same [`Arc`]. [`invalidate`](Self::invalidate) clears the snapshot so the
/// next call re-reads from disk.
pub struct DatasetCache {
    paths: DatasetPaths,
    snapshot: Option<Arc<Datasets>>,
}

impl DatasetCache {
    pub fn new(paths: DatasetPaths) -> Self {
        Self {
            paths,
            snapshot: None,
        }
    }

    /// Return the cached snapshot, loading both tables on the first call.
    pub fn get_or_load(&mut self) -> Result<Arc<Datasets>, LoaderError> {
        if let Some(snapshot) = &self.snapshot {
            return Ok(Arc::clone(snapshot));
        }

        let day = load_table(&self.paths.day, &[DATE_COL, TOTAL_COL, REGISTERED_COL])?;
        let hour = load_table(&self.paths.hour, &[DATE_COL, HOUR_COL, TOTAL_COL])?;
        log::info!(
            "loaded datasets: day {} rows, hour {} rows",
            day.height(),
            hour.height()
        );

        let snapshot = Arc::new(Datasets { day, hour });
        self.snapshot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot so the next call re-reads the files.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// Load one CSV, check the required columns, and verify the date column
/// parsed as a calendar date.
fn load_table(path: &Path, required: &[&str]) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::MissingFile(path.to_path_buf()));
    }
    let file = path.display().to_string();

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_try_parse_dates(true)
        .finish()?
        .collect()?;

    for column in required {
        if df.column(column).is_err() {
            return Err(LoaderError::MissingColumn {
                file: file.clone(),
                column: column.to_string(),
            });
        }
    }

    let date_col = df.column(DATE_COL)?;
    if date_col.dtype() != &DataType::Date {
        return Err(LoaderError::DateColumn {
            file,
            column: DATE_COL.to_string(),
        });
    }

    Ok(df)
}
