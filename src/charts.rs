use std::fs;
use std::path::Path;

use ahash::AHashSet;
use chrono::NaiveDateTime;

use crate::errors::DashboardError;
use crate::store::ResultsStore;

/// One line on a suite chart: a test's mean timing per run, with `None` at
/// runs where the test was absent. Gaps are drawn as discontinuities, never
/// interpolated or zero-filled.
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteSeries {
    pub test: String,
    pub points: Vec<Option<f64>>,
}

/// Capability interface over the plotting backend. The pipeline runs the
/// same way against a real backend or the null one; with the null renderer
/// the dashboard simply carries no chart references.
pub trait ChartRenderer {
    fn available(&self) -> bool;

    fn render_suite(
        &self,
        suite: &str,
        timestamps: &[NaiveDateTime],
        series: &[SuiteSeries],
        path: &Path,
    ) -> Result<(), DashboardError>;
}

pub struct NullChartRenderer;

impl ChartRenderer for NullChartRenderer {
    fn available(&self) -> bool {
        false
    }

    fn render_suite(
        &self,
        _suite: &str,
        _timestamps: &[NaiveDateTime],
        _series: &[SuiteSeries],
        _path: &Path,
    ) -> Result<(), DashboardError> {
        Ok(())
    }
}

pub fn default_renderer() -> Box<dyn ChartRenderer> {
    #[cfg(feature = "charts")]
    {
        Box::new(PlottersChartRenderer)
    }
    #[cfg(not(feature = "charts"))]
    {
        Box::new(NullChartRenderer)
    }
}

pub fn chart_filename(suite: &str) -> String {
    format!("{suite}_performance.png")
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One series per distinct test ever seen in the suite, sorted by test
/// name, each padded to the full run sequence.
pub fn suite_series(store: &ResultsStore, suite: &str) -> Vec<SuiteSeries> {
    let mut names = AHashSet::new();
    for run in store.runs() {
        if let Some(tests) = run.suite(suite) {
            names.extend(tests.keys().cloned());
        }
    }
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
        .into_iter()
        .map(|test| {
            let points = store
                .runs()
                .iter()
                .map(|run| run.timing(suite, &test))
                .collect();
            SuiteSeries { test, points }
        })
        .collect()
}

/// Renders one chart per suite with plottable data. Every failure in here
/// is recoverable: a bad suite is skipped, an unusable output directory
/// skips all charts, and HTML generation proceeds regardless.
pub fn generate_charts(store: &ResultsStore, output_dir: &Path, renderer: &dyn ChartRenderer) {
    if !renderer.available() {
        println!("Skipping chart generation (no chart backend)");
        return;
    }
    if let Err(err) = fs::create_dir_all(output_dir) {
        eprintln!(
            "warning: failed to create output directory '{}': {err}",
            output_dir.display()
        );
        return;
    }
    let timestamps: Vec<NaiveDateTime> = store.runs().iter().map(|run| run.timestamp).collect();
    for suite in store.suite_names() {
        let series = suite_series(store, &suite);
        let plottable = series
            .iter()
            .any(|s| s.points.iter().any(|point| point.is_some()));
        if !plottable {
            eprintln!("warning: no data found for benchmark suite '{suite}'");
            continue;
        }
        let path = output_dir.join(chart_filename(&suite));
        match renderer.render_suite(&suite, &timestamps, &series, &path) {
            Ok(()) => println!("Generated chart: {}", path.display()),
            Err(err) => eprintln!("warning: failed to render chart for '{suite}': {err}"),
        }
    }
}

/// Splits a padded series into contiguous runs of present points, keyed by
/// run index on the x axis.
fn contiguous_segments(points: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (idx, point) in points.iter().enumerate() {
        match point {
            Some(value) => current.push((idx as f64, *value)),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(feature = "charts")]
pub struct PlottersChartRenderer;

#[cfg(feature = "charts")]
impl ChartRenderer for PlottersChartRenderer {
    fn available(&self) -> bool {
        true
    }

    fn render_suite(
        &self,
        suite: &str,
        timestamps: &[NaiveDateTime],
        series: &[SuiteSeries],
        path: &Path,
    ) -> Result<(), DashboardError> {
        use plotters::prelude::*;

        fn render_err<E: std::fmt::Display>(err: E) -> DashboardError {
            DashboardError::render(err.to_string())
        }

        let values: Vec<f64> = series
            .iter()
            .flat_map(|s| s.points.iter().flatten().copied())
            .collect();
        if values.is_empty() {
            return Err(DashboardError::render(format!(
                "no plottable points for suite '{suite}'"
            )));
        }
        let min_ns = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ns = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let span = (max_ns - min_ns).max(1.0);
        let y_lo = (min_ns - span * 0.05).max(0.0);
        let y_hi = max_ns + span * 0.05;
        let x_hi = timestamps.len().saturating_sub(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} Benchmark Performance", capitalize(suite)),
                ("sans-serif", 32),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5..x_hi + 0.5, y_lo..y_hi)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(timestamps.len())
            .x_label_formatter(&|x| {
                let idx = x.round() as usize;
                if idx < timestamps.len() && (x - idx as f64).abs() < 0.3 {
                    timestamps[idx].format("%Y-%m-%d").to_string()
                } else {
                    String::new()
                }
            })
            .x_desc("Date")
            .y_desc("Time (ns)")
            .draw()
            .map_err(render_err)?;

        for (idx, s) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let mut labeled = false;
            for segment in contiguous_segments(&s.points) {
                let anno = chart
                    .draw_series(LineSeries::new(segment.clone(), color.stroke_width(2)))
                    .map_err(render_err)?;
                if !labeled {
                    anno.label(s.test.clone()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                    labeled = true;
                }
                chart
                    .draw_series(
                        segment
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                    )
                    .map_err(render_err)?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}
