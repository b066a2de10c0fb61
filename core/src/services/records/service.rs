//! Medical record service: history, uploads and the access log.

use mp_shared::validation::validators;
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::access_log::{AccessAction, AccessLog, Accessor};
use crate::domain::entities::medical_record::{MedicalRecord, NewRecord};
use crate::domain::entities::patient::PatientProfile;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use crate::services::audit::AccessAuditService;

/// Largest number of access log entries returned at once
pub const MAX_ACCESS_LOG_LIMIT: usize = 100;

/// Reads and appends patients' medical records, auditing every access
pub struct RecordService<P, S, L>
where
    P: PatientDirectory,
    S: RecordStore,
    L: AccessLogRepository,
{
    patients: Arc<P>,
    records: Arc<S>,
    audit: AccessAuditService<L>,
}

impl<P, S, L> RecordService<P, S, L>
where
    P: PatientDirectory,
    S: RecordStore,
    L: AccessLogRepository,
{
    pub fn new(patients: Arc<P>, records: Arc<S>, access_logs: Arc<L>) -> Self {
        Self {
            patients,
            records,
            audit: AccessAuditService::new(access_logs),
        }
    }

    /// Full medical history of a patient, newest first
    pub async fn history(
        &self,
        user_id: &str,
        accessor: &Accessor,
    ) -> DomainResult<Vec<MedicalRecord>> {
        let patient = self.require_patient(user_id).await?;
        let records = self.records.list_records(&patient.user_id).await?;

        self.audit
            .log_access(
                &patient.user_id,
                accessor,
                AccessAction::ViewedHistory,
                Some(format!("Viewed {} records", records.len())),
            )
            .await;

        Ok(records)
    }

    /// Append a record to a patient's history
    ///
    /// # Returns
    /// * `Ok(MedicalRecord)` - The stored record
    /// * `Err(DomainError::NotFound)` - No such patient
    /// * `Err(DomainError::ValidationErr)` - Doctor or hospital name missing
    pub async fn upload(
        &self,
        record: NewRecord,
        accessor: &Accessor,
    ) -> DomainResult<MedicalRecord> {
        let patient = self.require_patient(&record.user_id).await?;
        let record = normalize(record)?;

        let stored = self.records.append_record(record).await?;

        self.audit
            .log_access(
                &patient.user_id,
                accessor,
                AccessAction::UploadedDocument,
                Some(format!("Uploaded {} {}", stored.record_type, stored.id)),
            )
            .await;

        info!(
            event = "record_uploaded",
            user_id = %patient.user_id,
            record_id = %stored.id,
            record_type = %stored.record_type,
            "Medical record stored"
        );

        Ok(stored)
    }

    /// Most recent access log entries of a patient, newest first
    pub async fn access_log(&self, user_id: &str, limit: usize) -> DomainResult<Vec<AccessLog>> {
        let patient = self.require_patient(user_id).await?;
        self.audit
            .recent_for_patient(&patient.user_id, limit.min(MAX_ACCESS_LOG_LIMIT))
            .await
    }

    async fn require_patient(&self, user_id: &str) -> DomainResult<PatientProfile> {
        self.patients
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("patient '{}'", user_id),
            })
    }
}

fn normalize(mut record: NewRecord) -> DomainResult<NewRecord> {
    record.doctor_name = required(record.doctor_name, "doctor_name")?;
    record.hospital_name = required(record.hospital_name, "hospital_name")?;
    record.notes = optional(record.notes);
    record.document_url = optional(record.document_url);
    Ok(record)
}

fn required(value: String, field: &str) -> Result<String, ValidationError> {
    if !validators::not_empty(&value) {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(value.trim().to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
