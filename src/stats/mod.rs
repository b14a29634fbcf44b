//! Stats module - aggregate metrics, chart series, correlation rankings

mod aggregator;
mod correlation;
mod series;

pub use aggregator::{summarize, RentalSummary};
pub use correlation::{correlation_ranking, CorrelationEntry, TOP_CORRELATED};
pub use series::{daily_trend, hourly_profile, HourlyPoint, TrendPoint};
