//! Patient profile as held by the patient directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Essential patient information used for sharing and lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Stable account identifier
    pub user_id: String,

    /// Unique, lowercase username used for sharing and lookup
    pub username: String,

    /// Full name
    pub name: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Phone number or email
    pub contact: String,

    /// Emergency contact, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl PatientProfile {
    /// Creates a profile, normalizing the username to lowercase
    pub fn new(
        user_id: impl Into<String>,
        username: impl AsRef<str>,
        name: impl Into<String>,
        dob: NaiveDate,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: Self::normalize_username(username.as_ref()),
            name: name.into(),
            dob,
            contact: contact.into(),
            emergency_contact: None,
        }
    }

    /// Sets the emergency contact
    pub fn with_emergency_contact(mut self, contact: impl Into<String>) -> Self {
        self.emergency_contact = Some(contact.into());
        self
    }

    /// Canonical form of a username for lookups
    pub fn normalize_username(username: &str) -> String {
        username.trim().to_lowercase()
    }
}
