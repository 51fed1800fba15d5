use serde::Serialize;

use crate::store::ResultsStore;
use crate::units::format_nanos;

/// Percentage increase above which a change counts as a regression.
pub const REGRESSION_THRESHOLD_PCT: f64 = 5.0;

/// Absolute percentage at or below which a change is displayed as noise.
pub const NOISE_EPSILON_PCT: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeClass {
    Improvement,
    Regression,
    Neutral,
}

/// Run-over-run delta for one (suite, test) pair. A zero previous value is
/// a defined edge case, never a division fault: zero-to-zero is `NoChange`,
/// zero-to-anything is `Unbounded`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "pct", rename_all = "snake_case")]
pub enum ChangeValue {
    Percent(f64),
    NoChange,
    Unbounded,
}

impl ChangeValue {
    pub fn compute(previous_ns: f64, latest_ns: f64) -> Self {
        if previous_ns == 0.0 {
            if latest_ns == 0.0 {
                ChangeValue::NoChange
            } else {
                ChangeValue::Unbounded
            }
        } else {
            ChangeValue::Percent((latest_ns - previous_ns) / previous_ns * 100.0)
        }
    }

    /// Presentation class only; never alters control flow. An unbounded
    /// increase exceeds any threshold and is classified as a regression.
    pub fn class(self) -> ChangeClass {
        match self {
            ChangeValue::Percent(pct) if pct < 0.0 => ChangeClass::Improvement,
            ChangeValue::Percent(pct) if pct > REGRESSION_THRESHOLD_PCT => ChangeClass::Regression,
            ChangeValue::Percent(_) | ChangeValue::NoChange => ChangeClass::Neutral,
            ChangeValue::Unbounded => ChangeClass::Regression,
        }
    }

    pub fn label(self) -> String {
        match self {
            ChangeValue::NoChange => "N/A".to_string(),
            ChangeValue::Unbounded => "+\u{221e}%".to_string(),
            ChangeValue::Percent(pct) if pct.abs() > NOISE_EPSILON_PCT => format!("{pct:+.1}%"),
            ChangeValue::Percent(_) => "~".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub suite: String,
    pub test: String,
    pub previous_ns: f64,
    pub latest_ns: f64,
    pub change: ChangeValue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatestRow {
    pub suite: String,
    pub test: String,
    pub mean_ns: f64,
}

impl LatestRow {
    pub fn formatted(&self) -> String {
        format_nanos(self.mean_ns)
    }
}

/// One row per (suite, test) pair in the most recent run, sorted by suite
/// then test name.
pub fn latest_rows(store: &ResultsStore) -> Vec<LatestRow> {
    let Some(latest) = store.latest() else {
        return Vec::new();
    };
    latest
        .suites
        .iter()
        .flat_map(|(suite, tests)| {
            tests.iter().map(move |(test, &mean_ns)| LatestRow {
                suite: suite.clone(),
                test: test.clone(),
                mean_ns,
            })
        })
        .collect()
}

/// Compares the last two runs. Returns `None` when fewer than two runs
/// exist. Pairs present in the latest run but absent from the previous one
/// are excluded: a new benchmark has no history to compare against.
pub fn compare_latest(store: &ResultsStore) -> Option<Vec<ComparisonRow>> {
    let latest = store.latest()?;
    let previous = store.previous()?;
    let mut rows = Vec::new();
    for (suite, tests) in &latest.suites {
        for (test, &latest_ns) in tests {
            let Some(previous_ns) = previous.timing(suite, test) else {
                continue;
            };
            rows.push(ComparisonRow {
                suite: suite.clone(),
                test: test.clone(),
                previous_ns,
                latest_ns,
                change: ChangeValue::compute(previous_ns, latest_ns),
            });
        }
    }
    Some(rows)
}
