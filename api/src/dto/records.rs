use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use mp_core::domain::entities::access_log::{Accessor, AccessorType};
use mp_core::domain::entities::medical_record::{DocumentType, NewRecord, Uploader};
use mp_core::errors::ValidationError;

/// Accessor used when the caller does not identify itself
pub const UNKNOWN_ACCESSOR: &str = "unknown";

/// Default number of access log entries returned
pub const DEFAULT_ACCESS_LOG_LIMIT: usize = 20;

/// Query identifying who reads a patient's history
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AccessorQuery {
    #[validate(length(min = 1, max = 128))]
    pub accessor_id: Option<String>,
    pub accessor_type: Option<AccessorType>,
}

impl AccessorQuery {
    /// Defaults to hospital staff; a patient without an id is the record owner
    pub fn accessor(&self, user_id: &str) -> Accessor {
        let accessor_type = self.accessor_type.unwrap_or(AccessorType::HospitalStaff);
        let id = match (&self.accessor_id, accessor_type) {
            (Some(id), _) => id.clone(),
            (None, AccessorType::Patient) => user_id.to_string(),
            (None, AccessorType::System) => "system".to_string(),
            (None, AccessorType::HospitalStaff) => UNKNOWN_ACCESSOR.to_string(),
        };
        Accessor::new(id, accessor_type)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AccessLogQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl AccessLogQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_ACCESS_LOG_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UploadRecordRequest {
    /// Document type, e.g. "Lab Report" or "lab_report"
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub record_type: String,

    /// Date the document refers to (YYYY-MM-DD)
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 128))]
    pub doctor_name: String,

    #[validate(length(min = 1, max = 128))]
    pub hospital_name: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(length(max = 2048))]
    pub document_url: Option<String>,

    pub uploaded_by: Uploader,

    /// Staff member uploading on behalf of a hospital
    #[validate(length(min = 1, max = 128))]
    pub accessor_id: Option<String>,
}

impl UploadRecordRequest {
    /// Build the record for `user_id`, parsing the document type
    pub fn into_new_record(self, user_id: &str) -> Result<(NewRecord, Accessor), ValidationError> {
        let invalid_type = || ValidationError::InvalidFormat {
            field: "type".to_string(),
        };
        let record_type: DocumentType = self.record_type.parse().map_err(|_| invalid_type())?;

        let accessor = match self.uploaded_by {
            Uploader::Patient => Accessor::patient(user_id),
            Uploader::Hospital => Accessor::hospital_staff(
                self.accessor_id.unwrap_or_else(|| UNKNOWN_ACCESSOR.to_string()),
            ),
        };

        let record = NewRecord {
            user_id: user_id.to_string(),
            record_type,
            date: self.date,
            doctor_name: self.doctor_name,
            hospital_name: self.hospital_name,
            notes: self.notes,
            document_url: self.document_url,
            uploaded_by: self.uploaded_by,
        };

        Ok((record, accessor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(record_type: &str, uploaded_by: Uploader) -> UploadRecordRequest {
        UploadRecordRequest {
            record_type: record_type.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            doctor_name: "Dr. Anya Sharma".to_string(),
            hospital_name: "City Clinic".to_string(),
            notes: None,
            document_url: None,
            uploaded_by,
            accessor_id: Some("staff-7".to_string()),
        }
    }

    #[test]
    fn test_accessor_defaults() {
        let query = AccessorQuery::default();
        assert_eq!(query.accessor("user-1"), Accessor::hospital_staff(UNKNOWN_ACCESSOR));

        let query = AccessorQuery {
            accessor_id: None,
            accessor_type: Some(AccessorType::Patient),
        };
        assert_eq!(query.accessor("user-1"), Accessor::patient("user-1"));
    }

    #[test]
    fn test_upload_request_conversion() {
        let (record, accessor) = upload("lab_report", Uploader::Hospital)
            .into_new_record("user-1")
            .unwrap();
        assert_eq!(record.record_type, DocumentType::LabReport);
        assert_eq!(record.user_id, "user-1");
        assert_eq!(accessor, Accessor::hospital_staff("staff-7"));

        let (_, accessor) = upload("Scan", Uploader::Patient)
            .into_new_record("user-1")
            .unwrap();
        assert_eq!(accessor, Accessor::patient("user-1"));
    }

    #[test]
    fn test_upload_request_rejects_unknown_type() {
        let result = upload("Discharge Summary", Uploader::Hospital).into_new_record("user-1");
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidFormat {
                field: "type".to_string()
            }
        );
    }

    #[test]
    fn test_access_log_limit_validation() {
        assert_eq!(AccessLogQuery::default().limit(), DEFAULT_ACCESS_LOG_LIMIT);
        assert!(AccessLogQuery { limit: Some(0) }.validate().is_err());
        assert!(AccessLogQuery { limit: Some(101) }.validate().is_err());
        assert!(AccessLogQuery { limit: Some(50) }.validate().is_ok());
    }
}
