//! Patient directory trait defining read access to patient profiles.

use async_trait::async_trait;

use crate::domain::entities::patient::PatientProfile;
use crate::errors::DomainError;

/// Lookup of registered patients
///
/// Usernames are unique and stored lowercase; implementations must match
/// them case-insensitively.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    /// Find a patient by username
    ///
    /// # Returns
    /// * `Ok(Some(PatientProfile))` - Patient found
    /// * `Ok(None)` - No patient with that username
    /// * `Err(DomainError)` - The directory could not be read
    async fn find_by_username(&self, username: &str) -> Result<Option<PatientProfile>, DomainError>;

    /// Find a patient by account identifier
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PatientProfile>, DomainError>;
}
