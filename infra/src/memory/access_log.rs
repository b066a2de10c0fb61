//! In-memory access log

use async_trait::async_trait;
use tokio::sync::RwLock;

use mp_core::domain::entities::access_log::AccessLog;
use mp_core::errors::DomainError;
use mp_core::repositories::AccessLogRepository;

/// Append-only access log held in insertion order
pub struct InMemoryAccessLogRepository {
    entries: RwLock<Vec<AccessLog>>,
}

impl InMemoryAccessLogRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryAccessLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessLogRepository for InMemoryAccessLogRepository {
    async fn record(&self, entry: &AccessLog) -> Result<(), DomainError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn list_for_patient(
        &self,
        patient_user_id: &str,
        limit: usize,
    ) -> Result<Vec<AccessLog>, DomainError> {
        // Insertion order is chronological; walk it backwards.
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|entry| entry.patient_user_id == patient_user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
