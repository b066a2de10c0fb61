use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::access_log::{AccessAction, Accessor};
use crate::domain::entities::medical_record::{DocumentType, NewRecord, Uploader};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockAccessLogRepository, MockPatientDirectory, MockRecordStore};
use crate::services::records::RecordService;

type Service = RecordService<MockPatientDirectory, MockRecordStore, MockAccessLogRepository>;

fn setup() -> (Service, Arc<MockRecordStore>, Arc<MockAccessLogRepository>) {
    let patients = Arc::new(MockPatientDirectory::with_demo_patient());
    let records = Arc::new(MockRecordStore::new());
    let logs = Arc::new(MockAccessLogRepository::new());
    let service = RecordService::new(patients, records.clone(), logs.clone());
    (service, records, logs)
}

fn new_record(date: (i32, u32, u32)) -> NewRecord {
    NewRecord {
        user_id: "user-1".to_string(),
        record_type: DocumentType::LabReport,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        doctor_name: "  Dr. Emily White ".to_string(),
        hospital_name: "City General Hospital".to_string(),
        notes: Some("   ".to_string()),
        document_url: None,
        uploaded_by: Uploader::Hospital,
    }
}

#[tokio::test]
async fn test_upload_stores_normalized_record() {
    let (service, records, logs) = setup();
    let staff = Accessor::hospital_staff("staff-7");

    let stored = service.upload(new_record((2024, 5, 15)), &staff).await.unwrap();

    assert_eq!(stored.doctor_name, "Dr. Emily White");
    assert!(stored.notes.is_none());
    assert_eq!(records.get_all_records().len(), 1);
    assert_eq!(logs.count_action(AccessAction::UploadedDocument), 1);
}

#[tokio::test]
async fn test_upload_requires_doctor_and_hospital() {
    let (service, records, _logs) = setup();
    let staff = Accessor::hospital_staff("staff-7");

    let mut record = new_record((2024, 5, 15));
    record.hospital_name = " ".to_string();
    let result = service.upload(record, &staff).await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { ref field }))
            if field == "hospital_name"
    ));
    assert!(records.get_all_records().is_empty());
}

#[tokio::test]
async fn test_upload_unknown_patient() {
    let (service, _records, _logs) = setup();
    let mut record = new_record((2024, 5, 15));
    record.user_id = "user-404".to_string();

    let result = service.upload(record, &Accessor::patient("user-404")).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_history_is_newest_first_and_logged() {
    let (service, _records, logs) = setup();
    let staff = Accessor::hospital_staff("staff-7");
    service.upload(new_record((2023, 11, 1)), &staff).await.unwrap();
    service.upload(new_record((2024, 5, 15)), &staff).await.unwrap();

    let history = service.history("user-1", &staff).await.unwrap();

    assert_eq!(history.len(), 2);
    assert!(history[0].date > history[1].date);
    assert_eq!(logs.count_action(AccessAction::ViewedHistory), 1);
}

#[tokio::test]
async fn test_history_survives_log_failure() {
    let (service, _records, logs) = setup();
    logs.set_should_fail(true);

    let history = service
        .history("user-1", &Accessor::hospital_staff("staff-7"))
        .await
        .unwrap();

    assert!(history.is_empty());
}

#[tokio::test]
async fn test_history_propagates_store_errors() {
    let (service, records, _logs) = setup();
    records.set_should_fail(true);

    let result = service.history("user-1", &Accessor::patient("user-1")).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_access_log_lists_recent_entries() {
    let (service, _records, _logs) = setup();
    let staff = Accessor::hospital_staff("staff-7");
    for _ in 0..3 {
        service.history("user-1", &staff).await.unwrap();
    }

    let entries = service.access_log("user-1", 2).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.action == AccessAction::ViewedHistory));

    assert!(matches!(
        service.access_log("user-404", 10).await,
        Err(DomainError::NotFound { .. })
    ));
}
