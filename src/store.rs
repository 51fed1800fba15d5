use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashSet;

use crate::parse::{BenchRun, parse_run};

/// Ordered sequence of parsed runs, ascending by directory name (equivalent
/// to chronological order given the fixed timestamp format). Every stored
/// run has at least one non-empty suite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsStore {
    runs: Vec<BenchRun>,
}

impl ResultsStore {
    pub fn from_runs(runs: Vec<BenchRun>) -> Self {
        Self { runs }
    }

    /// Walks the results root and parses every timestamp directory. A
    /// missing root, zero subdirectories or zero usable runs all produce an
    /// empty store; downstream stages treat that as a reportable state, not
    /// a failure.
    pub fn load(root: &Path) -> Self {
        if !root.exists() {
            eprintln!(
                "warning: results directory '{}' does not exist",
                root.display()
            );
            return Self::default();
        }
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("warning: failed to read '{}': {err}", root.display());
                return Self::default();
            }
        };
        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        if dirs.is_empty() {
            eprintln!(
                "warning: no benchmark results found in '{}'",
                root.display()
            );
        }
        let runs = dirs.iter().filter_map(|dir| parse_run(dir)).collect();
        Self { runs }
    }

    pub fn runs(&self) -> &[BenchRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn latest(&self) -> Option<&BenchRun> {
        self.runs.last()
    }

    /// The run immediately preceding the latest one, if any.
    pub fn previous(&self) -> Option<&BenchRun> {
        self.runs.len().checked_sub(2).and_then(|idx| self.runs.get(idx))
    }

    /// Distinct suite names seen across all runs, sorted.
    pub fn suite_names(&self) -> Vec<String> {
        let mut names = AHashSet::new();
        for run in &self.runs {
            names.extend(run.suites.keys().cloned());
        }
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names
    }
}
