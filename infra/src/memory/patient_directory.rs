//! In-memory patient directory

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use mp_core::domain::entities::patient::PatientProfile;
use mp_core::errors::DomainError;
use mp_core::repositories::PatientDirectory;

/// Patient directory keyed by lowercase username
pub struct InMemoryPatientDirectory {
    by_username: RwLock<HashMap<String, PatientProfile>>,
}

impl InMemoryPatientDirectory {
    pub fn new() -> Self {
        Self {
            by_username: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_patients(patients: impl IntoIterator<Item = PatientProfile>) -> Self {
        let by_username = patients
            .into_iter()
            .map(|p| (PatientProfile::normalize_username(&p.username), p))
            .collect();
        Self {
            by_username: RwLock::new(by_username),
        }
    }

    /// Add or replace a patient
    pub async fn upsert(&self, mut patient: PatientProfile) {
        patient.username = PatientProfile::normalize_username(&patient.username);
        self.by_username
            .write()
            .await
            .insert(patient.username.clone(), patient);
    }
}

impl Default for InMemoryPatientDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientDirectory for InMemoryPatientDirectory {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<PatientProfile>, DomainError> {
        let key = PatientProfile::normalize_username(username);
        Ok(self.by_username.read().await.get(&key).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PatientProfile>, DomainError> {
        Ok(self
            .by_username
            .read()
            .await
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}
