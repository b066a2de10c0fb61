//! Access log repository trait defining persistence of access history.

use async_trait::async_trait;

use crate::domain::entities::access_log::AccessLog;
use crate::errors::DomainError;

/// Append-only log of accesses to patients' records
///
/// Writes happen on the request path, so implementations should be quick.
/// Callers treat write failures as non-fatal.
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Append a log entry
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(DomainError)` if the entry could not be stored
    async fn record(&self, entry: &AccessLog) -> Result<(), DomainError>;

    /// Entries for a patient, newest first, at most `limit` of them
    async fn list_for_patient(
        &self,
        patient_user_id: &str,
        limit: usize,
    ) -> Result<Vec<AccessLog>, DomainError>;
}
