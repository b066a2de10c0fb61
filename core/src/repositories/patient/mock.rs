//! Mock implementation of PatientDirectory for testing.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

use crate::domain::entities::patient::PatientProfile;
use crate::errors::DomainError;

use super::PatientDirectory;

/// Mock patient directory backed by a vector
pub struct MockPatientDirectory {
    patients: Arc<Mutex<Vec<PatientProfile>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockPatientDirectory {
    pub fn new() -> Self {
        Self {
            patients: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Directory holding a single patient `patient123` with user id `user-1`
    pub fn with_demo_patient() -> Self {
        let repo = Self::new();
        repo.insert(demo_patient());
        repo
    }

    pub fn insert(&self, patient: PatientProfile) {
        self.patients.lock().unwrap().push(patient);
    }

    /// Make every lookup fail with an internal error
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Internal {
                message: "Mock patient directory failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockPatientDirectory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo_patient() -> PatientProfile {
    PatientProfile::new(
        "user-1",
        "patient123",
        "John Doe",
        NaiveDate::from_ymd_opt(1985, 7, 22).unwrap(),
        "+1-555-123-4567",
    )
}

#[async_trait]
impl PatientDirectory for MockPatientDirectory {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<PatientProfile>, DomainError> {
        self.check_failure()?;
        let wanted = PatientProfile::normalize_username(username);
        let patients = self.patients.lock().unwrap();
        Ok(patients.iter().find(|p| p.username == wanted).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PatientProfile>, DomainError> {
        self.check_failure()?;
        let patients = self.patients.lock().unwrap();
        Ok(patients.iter().find(|p| p.user_id == user_id).cloned())
    }
}
