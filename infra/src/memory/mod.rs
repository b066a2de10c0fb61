//! In-memory repositories.

mod access_log;
mod patient_directory;
mod record_store;
mod seed;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use access_log::InMemoryAccessLogRepository;
pub use patient_directory::InMemoryPatientDirectory;
pub use record_store::InMemoryRecordStore;
pub use seed::{JANE_SMITH_ID, JOHN_DOE_ID};

/// The in-memory stores used by the API server
#[derive(Clone)]
pub struct InMemoryStores {
    pub patients: Arc<InMemoryPatientDirectory>,
    pub records: Arc<InMemoryRecordStore>,
    pub access_logs: Arc<InMemoryAccessLogRepository>,
}

impl InMemoryStores {
    /// Empty stores
    pub fn new() -> Self {
        Self {
            patients: Arc::new(InMemoryPatientDirectory::new()),
            records: Arc::new(InMemoryRecordStore::new()),
            access_logs: Arc::new(InMemoryAccessLogRepository::new()),
        }
    }

    /// Stores holding the demo patients and their record history
    pub fn seeded() -> Self {
        let patients = seed::demo_patients();
        let records = seed::demo_records();
        tracing::info!(
            patients = patients.len(),
            records = records.len(),
            "Seeded in-memory stores with demo data"
        );

        Self {
            patients: Arc::new(InMemoryPatientDirectory::with_patients(patients)),
            records: Arc::new(InMemoryRecordStore::with_records(records)),
            access_logs: Arc::new(InMemoryAccessLogRepository::new()),
        }
    }
}

impl Default for InMemoryStores {
    fn default() -> Self {
        Self::new()
    }
}
