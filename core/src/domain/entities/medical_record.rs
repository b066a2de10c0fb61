//! Medical record entity and the data needed to create one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of medical document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Lab Report")]
    LabReport,
    Prescription,
    Scan,
    Vaccination,
    Note,
    Invoice,
    Other,
}

impl DocumentType {
    /// All document types, in display order
    pub const ALL: [DocumentType; 7] = [
        DocumentType::LabReport,
        DocumentType::Prescription,
        DocumentType::Scan,
        DocumentType::Vaccination,
        DocumentType::Note,
        DocumentType::Invoice,
        DocumentType::Other,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::LabReport => "Lab Report",
            Self::Prescription => "Prescription",
            Self::Scan => "Scan",
            Self::Vaccination => "Vaccination",
            Self::Note => "Note",
            Self::Invoice => "Invoice",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    /// Case-insensitive; accepts labels, snake_case and a few common aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "lab report" | "lab" | "laboratory report" => Ok(Self::LabReport),
            "prescription" => Ok(Self::Prescription),
            "scan" | "imaging" => Ok(Self::Scan),
            "vaccination" | "vaccination record" | "immunization" => Ok(Self::Vaccination),
            "note" | "clinical note" => Ok(Self::Note),
            "invoice" | "bill" => Ok(Self::Invoice),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown document type: {}", s)),
        }
    }
}

/// Who uploaded a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uploader {
    Patient,
    Hospital,
}

/// A stored medical record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// Record identifier assigned by the store
    pub id: String,

    /// Owning patient
    pub user_id: String,

    /// Kind of document
    #[serde(rename = "type")]
    pub record_type: DocumentType,

    /// Date the document refers to
    pub date: NaiveDate,

    pub doctor_name: String,

    pub hospital_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Where the document lives, when one was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,

    pub uploaded_by: Uploader,

    /// When the record was stored
    pub upload_timestamp: DateTime<Utc>,
}

/// Data for a record about to be appended to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub user_id: String,
    pub record_type: DocumentType,
    pub date: NaiveDate,
    pub doctor_name: String,
    pub hospital_name: String,
    pub notes: Option<String>,
    pub document_url: Option<String>,
    pub uploaded_by: Uploader,
}

impl MedicalRecord {
    /// Materializes a new record with the store-assigned id and timestamp
    pub fn from_new(
        new: NewRecord,
        id: impl Into<String>,
        upload_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: new.user_id,
            record_type: new.record_type,
            date: new.date,
            doctor_name: new.doctor_name,
            hospital_name: new.hospital_name,
            notes: new.notes,
            document_url: new.document_url,
            uploaded_by: new.uploaded_by,
            upload_timestamp,
        }
    }
}
