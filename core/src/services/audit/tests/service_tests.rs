use std::sync::Arc;

use crate::domain::entities::access_log::{AccessAction, Accessor, AccessorType};
use crate::repositories::MockAccessLogRepository;
use crate::services::audit::AccessAuditService;

#[tokio::test]
async fn test_log_access_writes_entry() {
    let repo = Arc::new(MockAccessLogRepository::new());
    let service = AccessAuditService::new(repo.clone());

    service
        .log_access(
            "user-1",
            &Accessor::hospital_staff("staff-7"),
            AccessAction::ViewedHistory,
            Some("Viewed 3 records".to_string()),
        )
        .await;

    let logs = repo.get_all_logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].patient_user_id, "user-1");
    assert_eq!(logs[0].accessor_id, "staff-7");
    assert_eq!(logs[0].accessor_type, AccessorType::HospitalStaff);
    assert_eq!(logs[0].details.as_deref(), Some("Viewed 3 records"));
}

#[tokio::test]
async fn test_log_access_swallows_repository_errors() {
    let repo = Arc::new(MockAccessLogRepository::new());
    repo.set_should_fail(true);
    let service = AccessAuditService::new(repo.clone());

    service
        .log_access("user-1", &Accessor::system(), AccessAction::GrantedAccess, None)
        .await;

    assert!(repo.get_all_logs().is_empty());
}

#[tokio::test]
async fn test_recent_for_patient_filters_and_limits() {
    let repo = Arc::new(MockAccessLogRepository::new());
    let service = AccessAuditService::new(repo.clone());
    let staff = Accessor::hospital_staff("staff-7");

    for _ in 0..3 {
        service
            .log_access("user-1", &staff, AccessAction::ViewedHistory, None)
            .await;
    }
    service
        .log_access("user-2", &staff, AccessAction::ViewedHistory, None)
        .await;

    let logs = service.recent_for_patient("user-1", 2).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|log| log.patient_user_id == "user-1"));
    assert!(logs[0].timestamp >= logs[1].timestamp);
}
