use chrono::NaiveDate;

use mp_core::domain::entities::medical_record::{DocumentType, NewRecord, Uploader};
use mp_core::repositories::RecordStore;

use crate::memory::{InMemoryRecordStore, InMemoryStores, JANE_SMITH_ID, JOHN_DOE_ID};

fn new_record(user_id: &str, date: NaiveDate) -> NewRecord {
    NewRecord {
        user_id: user_id.to_string(),
        record_type: DocumentType::Prescription,
        date,
        doctor_name: "Dr. Ken Adams".to_string(),
        hospital_name: "Downtown Medical".to_string(),
        notes: None,
        document_url: None,
        uploaded_by: Uploader::Patient,
    }
}

#[tokio::test]
async fn test_seeded_history_is_sorted_newest_first() {
    let stores = InMemoryStores::seeded();

    let history = stores.records.list_records(JOHN_DOE_ID).await.unwrap();
    let ids: Vec<&str> = history.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rec1", "rec2", "rec3", "admin_note1", "rec4", "rec5"]);

    let jane = stores.records.list_records(JANE_SMITH_ID).await.unwrap();
    assert_eq!(jane.len(), 1);
    assert_eq!(jane[0].id, "rec10");

    assert!(stores.records.list_records("user-0").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_append_assigns_id_and_timestamp() {
    let store = InMemoryRecordStore::new();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let first = store.append_record(new_record("user-9", date)).await.unwrap();
    let second = store.append_record(new_record("user-9", date)).await.unwrap();

    assert!(first.id.starts_with("rec_"));
    assert_ne!(first.id, second.id);
    assert!(second.upload_timestamp >= first.upload_timestamp);

    // Same record date: newest upload first.
    let history = store.list_records("user-9").await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].upload_timestamp >= history[1].upload_timestamp);
}

#[tokio::test]
async fn test_appended_record_sorts_into_history() {
    let stores = InMemoryStores::seeded();
    let date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();

    let stored = stores.records.append_record(new_record(JOHN_DOE_ID, date)).await.unwrap();

    let history = stores.records.list_records(JOHN_DOE_ID).await.unwrap();
    assert_eq!(history.len(), 7);
    assert_eq!(history[3].id, stored.id);
}
