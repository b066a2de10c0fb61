//! Access log entity recording who touched a patient's records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of party acting on a patient's records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessorType {
    HospitalStaff,
    Patient,
    System,
}

impl AccessorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HospitalStaff => "hospital_staff",
            Self::Patient => "patient",
            Self::System => "system",
        }
    }
}

/// Action performed on a patient's records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    ViewedHistory,
    UploadedDocument,
    GrantedAccess,
    RevokedAccess,
}

impl AccessAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewedHistory => "viewed_history",
            Self::UploadedDocument => "uploaded_document",
            Self::GrantedAccess => "granted_access",
            Self::RevokedAccess => "revoked_access",
        }
    }
}

/// The party performing an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub id: String,
    pub accessor_type: AccessorType,
}

impl Accessor {
    pub fn new(id: impl Into<String>, accessor_type: AccessorType) -> Self {
        Self {
            id: id.into(),
            accessor_type,
        }
    }

    pub fn hospital_staff(id: impl Into<String>) -> Self {
        Self::new(id, AccessorType::HospitalStaff)
    }

    pub fn patient(id: impl Into<String>) -> Self {
        Self::new(id, AccessorType::Patient)
    }

    pub fn system() -> Self {
        Self::new("system", AccessorType::System)
    }
}

/// One entry of a patient's access history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessLog {
    pub log_id: Uuid,
    pub patient_user_id: String,
    pub accessor_id: String,
    pub accessor_type: AccessorType,
    pub action: AccessAction,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AccessLog {
    /// Create a new log entry stamped at `timestamp`
    pub fn new(
        patient_user_id: impl Into<String>,
        accessor: &Accessor,
        action: AccessAction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            log_id: Uuid::new_v4(),
            patient_user_id: patient_user_id.into(),
            accessor_id: accessor.id.clone(),
            accessor_type: accessor.accessor_type,
            action,
            timestamp,
            details: None,
        }
    }

    /// Attach free-text details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
