use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;

use crate::charts::{capitalize, chart_filename};
use crate::compare::{ChangeClass, ComparisonRow, LatestRow, compare_latest, latest_rows};
use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use crate::store::ResultsStore;

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Benchmark Performance Dashboard</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { color: #333; }
        .chart { margin: 10px 0; }
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .improvement { color: green; }
        .regression { color: red; }
        .timestamp { font-size: 0.9em; color: #666; }
    </style>
</head>
<body>
    <h1>Benchmark Performance Dashboard</h1>
    <p class="timestamp">Last updated: {timestamp}</p>

    <h2>Performance Trends</h2>
{charts}
    <h2>Latest Results</h2>
{latest_results}
    <h2>Performance Comparisons</h2>
{comparisons}
</body>
</html>
"#;

/// Writes the dashboard document. Always emits a valid HTML file, including
/// the "no results" placeholder for an empty store; only directory creation
/// and the final write itself are fatal.
pub fn render_dashboard(
    store: &ResultsStore,
    config: &DashboardConfig,
) -> Result<PathBuf, DashboardError> {
    fs::create_dir_all(&config.output_dir)?;
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = build_html(store, config, &generated_at);
    let path = config.dashboard_path();
    fs::write(&path, html)?;
    println!("Generated dashboard: {}", path.display());
    Ok(path)
}

pub fn build_html(store: &ResultsStore, config: &DashboardConfig, generated_at: &str) -> String {
    HTML_TEMPLATE
        .replace("{timestamp}", generated_at)
        .replace("{charts}", &charts_section(config))
        .replace("{latest_results}", &latest_section(store))
        .replace("{comparisons}", &comparison_section(store))
}

fn charts_section(config: &DashboardConfig) -> String {
    let mut html = String::new();
    for suite in &config.trend_suites {
        let file = chart_filename(suite);
        if config.output_dir.join(&file).exists() {
            html.push_str(&format!(
                "<div class=\"chart\"><h3>{}</h3><img src=\"{file}\" width=\"800\"></div>\n",
                capitalize(suite)
            ));
        }
    }
    html
}

fn latest_section(store: &ResultsStore) -> String {
    let rows = latest_rows(store);
    if rows.is_empty() {
        return "<p>No results available</p>\n".to_string();
    }
    let mut html = String::from("<table><tr><th>Benchmark</th><th>Test</th><th>Time</th></tr>");
    for row in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.suite,
            row.test,
            row.formatted()
        ));
    }
    html.push_str("</table>\n");
    html
}

fn comparison_section(store: &ResultsStore) -> String {
    let Some(rows) = compare_latest(store) else {
        return "<p>Need at least 2 runs for comparison</p>\n".to_string();
    };
    let mut html = String::from(
        "<table><tr><th>Benchmark</th><th>Test</th><th>Previous</th><th>Latest</th><th>Change</th></tr>",
    );
    for row in rows {
        let class = match row.change.class() {
            ChangeClass::Improvement => " class=\"improvement\"",
            ChangeClass::Regression => " class=\"regression\"",
            ChangeClass::Neutral => "",
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td{class}>{}</td></tr>",
            row.suite,
            row.test,
            crate::units::format_nanos(row.previous_ns),
            crate::units::format_nanos(row.latest_ns),
            row.change.label()
        ));
    }
    html.push_str("</table>\n");
    html
}

#[derive(Debug, Serialize)]
struct Summary {
    generated_at: String,
    runs: usize,
    latest: Vec<LatestRow>,
    comparisons: Vec<ComparisonRow>,
}

/// Machine-readable twin of the HTML tables. Comparison rows are empty when
/// fewer than two runs exist.
pub fn export_summary(
    store: &ResultsStore,
    config: &DashboardConfig,
) -> Result<PathBuf, DashboardError> {
    let summary = Summary {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        runs: store.len(),
        latest: latest_rows(store),
        comparisons: compare_latest(store).unwrap_or_default(),
    };
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|err| DashboardError::render(err.to_string()))?;
    let path = config.summary_path();
    fs::write(&path, json)?;
    println!("Exported summary: {}", path.display());
    Ok(path)
}
