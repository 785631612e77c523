//! Test fixture loader for Candor golden scenarios, plus stub classifiers
//! shared by tests across crates.
//!
//! Golden scenarios live under `crates/test-fixtures/golden/` as JSON files
//! deserializing into [`SensitivityScenario`].

pub mod stubs;

use std::collections::BTreeMap;
use std::path::PathBuf;

use candor_core::{Attribute, CandidateRecord, DomainVocabulary};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use stubs::{CountingClassifier, FailingClassifier, FnClassifier, TableClassifier};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

// ── Golden sensitivity scenarios ────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAttribute {
    pub id: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedScore {
    pub label: String,
    pub score: f64,
}

/// A complete sensitivity scenario: vocabulary, candidate, the per-value
/// probability table the stub classifier answers from, and the expected
/// report in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SensitivityScenario {
    pub description: String,
    pub vocabulary: Vec<ScenarioAttribute>,
    pub candidate: BTreeMap<String, String>,
    pub probabilities: BTreeMap<String, BTreeMap<String, f64>>,
    pub expected: Vec<ExpectedScore>,
    /// Expected number of classifier calls for the sweep.
    pub expected_calls: usize,
}

impl SensitivityScenario {
    pub fn vocabulary(&self) -> DomainVocabulary {
        self.vocabulary
            .iter()
            .map(|a| Attribute::new(a.id.clone(), a.values.iter().cloned()))
            .collect()
    }

    pub fn candidate(&self) -> CandidateRecord {
        self.candidate
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn classifier(&self) -> TableClassifier {
        let mut table = TableClassifier::new();
        for (attribute, values) in &self.probabilities {
            for (value, p) in values {
                table = table.with(attribute, value, *p);
            }
        }
        table
    }
}

/// Load a golden scenario by path relative to `test-fixtures/`.
pub fn load_scenario(relative_path: &str) -> SensitivityScenario {
    load_fixture(relative_path)
}

/// Load every golden sensitivity scenario.
pub fn all_sensitivity_scenarios() -> Vec<(PathBuf, SensitivityScenario)> {
    list_fixtures("golden/sensitivity")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            let scenario = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e));
            (path, scenario)
        })
        .collect()
}
