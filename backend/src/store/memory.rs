//! In-process report store
//!
//! Keeps reports in a `Mutex<Vec<_>>`. Used by tests and by ephemeral runs
//! that don't need report history to survive the process.

use std::sync::Mutex;

use crate::models::report::SimulationReport;
use crate::store::{ReportStore, StoreError};

/// Volatile, in-process report store
#[derive(Debug, Default)]
pub struct MemoryStore {
    reports: Mutex<Vec<SimulationReport>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryStore {
    fn append(&self, report: &SimulationReport) -> Result<(), StoreError> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<SimulationReport>, StoreError> {
        let mut reports = self.reports.lock().unwrap().clone();
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use uuid::Uuid;

    use super::*;

    fn report_at(date: SystemTime) -> SimulationReport {
        SimulationReport {
            id: Uuid::new_v4(),
            date,
            average_wait_minutes: 0.0,
            checkout_utilization_percent: 0.0,
            lost_customers: 0,
        }
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        let older = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
        let newer = SystemTime::UNIX_EPOCH + Duration::from_secs(200);

        store.append(&report_at(older)).unwrap();
        store.append(&report_at(newer)).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].date, newer);
        assert_eq!(listed[1].date, older);
    }
}
