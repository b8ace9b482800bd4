//! Report persistence collaborator
//!
//! Durable storage of finished-run reports lives behind the [`ReportStore`]
//! trait: append one report, list everything persisted so far (newest
//! first). The engine treats the store as best-effort - a failed write is
//! logged by the caller and never affects the in-memory report.

use thiserror::Error;

use crate::models::report::SimulationReport;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors surfaced by a report store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("report store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Append-plus-ordered-list persistence for simulation reports
pub trait ReportStore: Send + Sync {
    /// Persist one finished-run report
    fn append(&self, report: &SimulationReport) -> Result<(), StoreError>;

    /// All persisted reports, ordered by date descending
    fn list(&self) -> Result<Vec<SimulationReport>, StoreError>;
}
