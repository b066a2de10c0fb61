//! Audit service for recording who viewed or changed a patient's records.
//!
//! Writes never fail the operation being audited: a repository error is
//! reported through tracing and otherwise ignored.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::access_log::{AccessAction, AccessLog, Accessor};
use crate::errors::DomainResult;
use crate::repositories::AccessLogRepository;

/// Service for writing and reading the access log
pub struct AccessAuditService<L>
where
    L: AccessLogRepository,
{
    repository: Arc<L>,
}

impl<L> Clone for AccessAuditService<L>
where
    L: AccessLogRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<L> AccessAuditService<L>
where
    L: AccessLogRepository,
{
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Record an access to `patient_user_id`'s records
    pub async fn log_access(
        &self,
        patient_user_id: &str,
        accessor: &Accessor,
        action: AccessAction,
        details: Option<String>,
    ) {
        let mut entry = AccessLog::new(patient_user_id, accessor, action, Utc::now());
        if let Some(details) = details {
            entry = entry.with_details(details);
        }

        match self.repository.record(&entry).await {
            Ok(()) => debug!(
                event = "access_logged",
                patient_user_id = %patient_user_id,
                accessor_id = %accessor.id,
                action = action.as_str()
            ),
            Err(e) => warn!(
                event = "access_log_write_failed",
                patient_user_id = %patient_user_id,
                action = action.as_str(),
                error = %e,
                "Failed to write access log"
            ),
        }
    }

    /// Most recent entries for a patient, newest first
    pub async fn recent_for_patient(
        &self,
        patient_user_id: &str,
        limit: usize,
    ) -> DomainResult<Vec<AccessLog>> {
        self.repository.list_for_patient(patient_user_id, limit).await
    }
}
