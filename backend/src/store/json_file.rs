//! JSON-file report store
//!
//! Persists the full report history as one pretty-printed JSON document.
//! Append reads the existing list, pushes the new record, and rewrites the
//! file. A missing file means an empty history; an unreadable one is
//! logged and replaced on the next append - availability of new reports
//! wins over preserving a corrupt history.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use crate::models::report::SimulationReport;
use crate::store::{ReportStore, StoreError};

/// Report store backed by a single JSON file
///
/// # Example
/// ```no_run
/// use checkout_simulator_core_rs::JsonFileStore;
///
/// let store = JsonFileStore::new("reports.json");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store persisting to `path`
    ///
    /// The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<SimulationReport>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, reports: &[SimulationReport]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(reports)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ReportStore for JsonFileStore {
    fn append(&self, report: &SimulationReport) -> Result<(), StoreError> {
        let mut reports = match self.read_all() {
            Ok(reports) => reports,
            Err(err) => {
                warn!(
                    "report history at {} unreadable ({err}), starting fresh",
                    self.path.display()
                );
                Vec::new()
            }
        };
        reports.push(report.clone());
        self.write_all(&reports)
    }

    fn list(&self) -> Result<Vec<SimulationReport>, StoreError> {
        let mut reports = self.read_all()?;
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reports)
    }
}
