//! Benchmark-results aggregation and dashboard generation.
//! Parses timed-run artifacts, aggregates them across historical runs,
//! computes run-over-run deltas and renders a static HTML report with
//! optional per-suite trend charts.

pub mod charts;
pub mod compare;
pub mod config;
pub mod errors;
pub mod parse;
pub mod report;
pub mod store;
pub mod units;

pub use crate::charts::{ChartRenderer, NullChartRenderer, SuiteSeries, default_renderer};
#[cfg(feature = "charts")]
pub use crate::charts::PlottersChartRenderer;
pub use crate::compare::{
    ChangeClass, ChangeValue, ComparisonRow, LatestRow, compare_latest, latest_rows,
};
pub use crate::config::DashboardConfig;
pub use crate::errors::DashboardError;
pub use crate::parse::{BenchRun, parse_run, parse_timestamp};
pub use crate::report::{export_summary, render_dashboard};
pub use crate::store::ResultsStore;
pub use crate::units::{TimeUnit, format_nanos, normalize_to_nanos};
