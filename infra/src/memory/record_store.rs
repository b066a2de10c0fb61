//! In-memory medical record store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use mp_core::domain::entities::medical_record::{MedicalRecord, NewRecord};
use mp_core::errors::DomainError;
use mp_core::repositories::RecordStore;

/// Records grouped by owning patient
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, Vec<MedicalRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = MedicalRecord>) -> Self {
        let mut by_user: HashMap<String, Vec<MedicalRecord>> = HashMap::new();
        for record in records {
            by_user.entry(record.user_id.clone()).or_default().push(record);
        }
        Self {
            records: RwLock::new(by_user),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_records(&self, user_id: &str) -> Result<Vec<MedicalRecord>, DomainError> {
        let mut records = self
            .records
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default();

        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.upload_timestamp.cmp(&a.upload_timestamp))
        });
        Ok(records)
    }

    async fn append_record(&self, record: NewRecord) -> Result<MedicalRecord, DomainError> {
        let id = format!("rec_{}", Uuid::new_v4().simple());
        let stored = MedicalRecord::from_new(record, id, Utc::now());

        self.records
            .write()
            .await
            .entry(stored.user_id.clone())
            .or_default()
            .push(stored.clone());

        debug!(record_id = %stored.id, user_id = %stored.user_id, "Record appended");
        Ok(stored)
    }
}
