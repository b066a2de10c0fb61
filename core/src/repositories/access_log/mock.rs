//! Mock implementation of AccessLogRepository for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::access_log::{AccessAction, AccessLog};
use crate::errors::DomainError;

use super::AccessLogRepository;

/// Mock implementation of AccessLogRepository for testing
pub struct MockAccessLogRepository {
    logs: Arc<Mutex<Vec<AccessLog>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockAccessLogRepository {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Get all stored logs for testing
    pub fn get_all_logs(&self) -> Vec<AccessLog> {
        self.logs.lock().unwrap().clone()
    }

    /// Count logs with the given action
    pub fn count_action(&self, action: AccessAction) -> usize {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.action == action)
            .count()
    }
}

impl Default for MockAccessLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessLogRepository for MockAccessLogRepository {
    async fn record(&self, entry: &AccessLog) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Internal {
                message: "Mock repository error".to_string(),
            });
        }
        self.logs.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list_for_patient(
        &self,
        patient_user_id: &str,
        limit: usize,
    ) -> Result<Vec<AccessLog>, DomainError> {
        let mut logs: Vec<AccessLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.patient_user_id == patient_user_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit);
        Ok(logs)
    }
}
