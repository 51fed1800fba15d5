use std::collections::BTreeMap;

use benchdash::charts::{
    ChartRenderer, NullChartRenderer, chart_filename, generate_charts, suite_series,
};
use benchdash::parse::{BenchRun, parse_timestamp};
use benchdash::store::ResultsStore;
use tempfile::TempDir;

fn run_with(name: &str, entries: &[(&str, &str, f64)]) -> BenchRun {
    let mut suites: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for (suite, test, ns) in entries {
        suites
            .entry(suite.to_string())
            .or_default()
            .insert(test.to_string(), *ns);
    }
    BenchRun {
        timestamp: parse_timestamp(name).unwrap(),
        suites,
    }
}

#[test]
fn test_chart_filename_is_suite_derived() {
    assert_eq!(chart_filename("lexer"), "lexer_performance.png");
}

#[test]
fn test_suite_series_pads_missing_runs_with_gaps() {
    let store = ResultsStore::from_runs(vec![
        run_with("20240101_090000", &[("lexer", "tokenize", 100.0)]),
        run_with("20240102_090000", &[("lexer", "scan_idents", 50.0)]),
        run_with(
            "20240103_090000",
            &[("lexer", "tokenize", 120.0), ("lexer", "scan_idents", 55.0)],
        ),
    ]);
    let series = suite_series(&store, "lexer");
    assert_eq!(series.len(), 2);
    // Sorted by test name.
    assert_eq!(series[0].test, "scan_idents");
    assert_eq!(series[0].points, vec![None, Some(50.0), Some(55.0)]);
    assert_eq!(series[1].test, "tokenize");
    assert_eq!(series[1].points, vec![Some(100.0), None, Some(120.0)]);
}

#[test]
fn test_suite_series_for_unknown_suite_is_empty() {
    let store = ResultsStore::from_runs(vec![run_with(
        "20240101_090000",
        &[("lexer", "tokenize", 100.0)],
    )]);
    assert!(suite_series(&store, "parser").is_empty());
}

#[test]
fn test_null_renderer_reports_unavailable() {
    assert!(!NullChartRenderer.available());
}

#[test]
fn test_generate_charts_with_null_renderer_writes_nothing() {
    let store = ResultsStore::from_runs(vec![run_with(
        "20240101_090000",
        &[("lexer", "tokenize", 100.0)],
    )]);
    let out = TempDir::new().unwrap();
    let target = out.path().join("dash");
    generate_charts(&store, &target, &NullChartRenderer);
    // The unavailable backend is a no-op: not even the directory appears.
    assert!(!target.exists());
}
