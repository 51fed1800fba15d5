use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;

use crate::units::normalize_to_nanos;

/// Directory-name pattern identifying one benchmarking run.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Artifact extensions recognized inside a run directory. The file stem is
/// the suite name.
pub const ARTIFACT_EXTENSIONS: &[&str] = &["txt", "log"];

/// Matches `<test> time: [<low> <unit> <mean> <unit> <high> <unit>]` with
/// either micro-sign glyph. Only the mean value and its unit are kept.
const MEASUREMENT_PATTERN: &str = r"(\w+)\s+time:\s+\[([0-9.]+)\s+([µμ]?[a-zA-Z]+)\s+([0-9.]+)\s+([µμ]?[a-zA-Z]+)\s+([0-9.]+)\s+([µμ]?[a-zA-Z]+)\]";

fn measurement_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MEASUREMENT_PATTERN).expect("measurement pattern compiles"))
}

/// One benchmarking session: suite name -> test name -> mean time in
/// nanoseconds. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchRun {
    pub timestamp: NaiveDateTime,
    pub suites: BTreeMap<String, BTreeMap<String, f64>>,
}

impl BenchRun {
    pub fn suite(&self, name: &str) -> Option<&BTreeMap<String, f64>> {
        self.suites.get(name)
    }

    pub fn timing(&self, suite: &str, test: &str) -> Option<f64> {
        self.suites.get(suite).and_then(|tests| tests.get(test)).copied()
    }
}

pub fn parse_timestamp(name: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(name, TIMESTAMP_FORMAT).ok()
}

/// Extracts all mean timings from one suite artifact, normalized to
/// nanoseconds. Measurements with an unknown unit or an unparseable value
/// are skipped individually.
pub fn parse_suite_artifact(content: &str) -> BTreeMap<String, f64> {
    let mut timings = BTreeMap::new();
    for caps in measurement_regex().captures_iter(content) {
        let test = &caps[1];
        let mean: f64 = match caps[4].parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("warning: unparseable mean '{}' for {test}", &caps[4]);
                continue;
            }
        };
        match normalize_to_nanos(mean, &caps[5]) {
            Ok(ns) => {
                timings.insert(test.to_string(), ns);
            }
            Err(err) => eprintln!("warning: skipping {test}: {err}"),
        }
    }
    timings
}

/// Parses one timestamp directory into a run. Returns `None` when the
/// directory name does not match the timestamp pattern or when no artifact
/// yields a single measurement; the caller excludes such directories.
pub fn parse_run(dir: &Path) -> Option<BenchRun> {
    let name = dir.file_name()?.to_str()?;
    let timestamp = parse_timestamp(name)?;

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("warning: failed to read '{}': {err}", dir.display());
            return None;
        }
    };
    let mut artifacts: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_artifact(path))
        .collect();
    artifacts.sort();
    if artifacts.is_empty() {
        eprintln!("warning: no benchmark files found in '{}'", dir.display());
        return None;
    }

    let mut suites = BTreeMap::new();
    for path in artifacts {
        let Some(suite) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("warning: failed to read '{}': {err}", path.display());
                continue;
            }
        };
        if content.trim().is_empty() {
            eprintln!("warning: empty benchmark file '{}'", path.display());
            continue;
        }
        let timings = parse_suite_artifact(&content);
        if timings.is_empty() {
            eprintln!(
                "warning: no benchmark results found in '{}'",
                path.display()
            );
            continue;
        }
        suites.insert(suite.to_string(), timings);
    }

    if suites.is_empty() {
        None
    } else {
        Some(BenchRun { timestamp, suites })
    }
}

fn is_artifact(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ARTIFACT_EXTENSIONS.contains(&ext))
}
