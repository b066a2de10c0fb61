//! Record store trait defining persistence of medical records.

use async_trait::async_trait;

use crate::domain::entities::medical_record::{MedicalRecord, NewRecord};
use crate::errors::DomainError;

/// Storage of patients' medical records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records of a patient, newest record date first.
    ///
    /// Records sharing a date are ordered by upload time, newest first.
    async fn list_records(&self, user_id: &str) -> Result<Vec<MedicalRecord>, DomainError>;

    /// Store a new record, assigning its id and upload timestamp
    async fn append_record(&self, record: NewRecord) -> Result<MedicalRecord, DomainError>;
}
