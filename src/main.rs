//! Bikeshare Report - Bike-rental CSV analysis & reporting
//!
//! Loads the day/hour rental datasets, filters the daily table by date range,
//! and prints aggregate metrics, chart series, and correlation rankings.

mod data;
mod report;
mod stats;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use data::{DatasetCache, DatasetPaths, DateInterval};
use report::DashboardReport;

#[derive(Parser)]
#[command(name = "bikeshare-report", version, about)]
struct Cli {
    /// Directory containing day.csv and hour.csv
    #[arg(long, default_value = "dataset")]
    data_dir: PathBuf,

    /// Start of the inclusive date range (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End of the inclusive date range (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut cache = DatasetCache::new(DatasetPaths::in_dir(&cli.data_dir));
    let datasets = cache.get_or_load().with_context(|| {
        format!(
            "the '{}' directory must contain day.csv and hour.csv",
            cli.data_dir.display()
        )
    })?;

    let interval = DateInterval::resolve(cli.start, cli.end);
    let report = DashboardReport::build(&datasets, interval.as_ref())
        .context("failed to compute the report")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
