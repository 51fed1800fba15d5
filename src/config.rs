use std::path::PathBuf;

pub const DEFAULT_RESULTS_DIR: &str = "target/benchmark-results";
pub const DEFAULT_OUTPUT_DIR: &str = "target/benchmark-dashboard";

/// Suites listed in the dashboard's Performance Trends section. Overridable
/// with `--suites`; only suites whose chart image exists are referenced.
pub const DEFAULT_TREND_SUITES: &[&str] = &[
    "lexer",
    "parser",
    "compilation",
    "features",
    "scenarios",
    "memory",
    "tooling",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub results_dir: PathBuf,
    pub output_dir: PathBuf,
    pub trend_suites: Vec<String>,
    pub charts: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            trend_suites: DEFAULT_TREND_SUITES.iter().map(|s| s.to_string()).collect(),
            charts: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--results-dir" => {
                    config.results_dir = PathBuf::from(
                        iter.next()
                            .ok_or_else(|| "--results-dir requires a value".to_string())?,
                    );
                }
                "--output-dir" => {
                    config.output_dir = PathBuf::from(
                        iter.next()
                            .ok_or_else(|| "--output-dir requires a value".to_string())?,
                    );
                }
                "--suites" => {
                    let list = iter
                        .next()
                        .ok_or_else(|| "--suites requires a value".to_string())?;
                    config.trend_suites = list
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                "--no-charts" => {
                    config.charts = false;
                }
                other => {
                    return Err(format!("unknown flag {other}"));
                }
            }
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: benchdash [--results-dir PATH] [--output-dir PATH] [--suites a,b,c] [--no-charts]\n"
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join("dashboard.html")
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join("summary.json")
    }
}
