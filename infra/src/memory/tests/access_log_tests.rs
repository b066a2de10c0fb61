use chrono::{Duration, Utc};

use mp_core::domain::entities::access_log::{AccessAction, AccessLog, Accessor};
use mp_core::repositories::AccessLogRepository;

use crate::memory::InMemoryAccessLogRepository;

#[tokio::test]
async fn test_list_for_patient_newest_first_with_limit() {
    let repo = InMemoryAccessLogRepository::new();
    let staff = Accessor::hospital_staff("staff-7");
    let start = Utc::now();

    for i in 0..5 {
        let at = start + Duration::seconds(i);
        let entry = AccessLog::new("user-1", &staff, AccessAction::ViewedHistory, at)
            .with_details(format!("view {}", i));
        repo.record(&entry).await.unwrap();
    }
    repo.record(&AccessLog::new("user-2", &staff, AccessAction::ViewedHistory, start))
        .await
        .unwrap();

    let entries = repo.list_for_patient("user-1", 3).await.unwrap();
    let details: Vec<&str> = entries.iter().filter_map(|e| e.details.as_deref()).collect();
    assert_eq!(details, vec!["view 4", "view 3", "view 2"]);

    assert_eq!(repo.len().await, 6);
    assert!(repo.list_for_patient("user-3", 10).await.unwrap().is_empty());
}
