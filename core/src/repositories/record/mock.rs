//! Mock implementation of RecordStore for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::domain::entities::medical_record::{MedicalRecord, NewRecord};
use crate::errors::DomainError;

use super::RecordStore;

/// Mock record store keeping records in insertion order
pub struct MockRecordStore {
    records: Arc<Mutex<Vec<MedicalRecord>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn get_all_records(&self) -> Vec<MedicalRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Internal {
                message: "Mock record store error".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn list_records(&self, user_id: &str) -> Result<Vec<MedicalRecord>, DomainError> {
        self.check_failure()?;
        let mut records: Vec<MedicalRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.upload_timestamp.cmp(&a.upload_timestamp))
        });
        Ok(records)
    }

    async fn append_record(&self, record: NewRecord) -> Result<MedicalRecord, DomainError> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let id = format!("rec_mock_{}", records.len() + 1);
        let stored = MedicalRecord::from_new(record, id, Utc::now());
        records.push(stored.clone());
        Ok(stored)
    }
}
