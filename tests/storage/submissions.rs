use chrono::{Duration, TimeZone, Utc};

use folio::entities::DeliveryStatus;
use folio::repositories::{DeliveryUpdate, SubmissionRepository};
use folio::storage::LocalStorage;

async fn storage() -> LocalStorage {
    LocalStorage::new(None).await.unwrap()
}

#[tokio::test]
async fn test_insert_starts_as_received() {
    let storage = storage().await;
    let now = Utc::now();

    let model = SubmissionRepository::insert(storage.connection(), "contact_1_a", "Ann", "ann@example.com", "Hi", now)
        .await
        .unwrap();

    assert_eq!(model.status, DeliveryStatus::Received);
    assert!(model.error.is_none());
    assert!(model.email_id.is_none());

    let fetched = SubmissionRepository::get_by_id(storage.connection(), "contact_1_a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.message, "Hi");
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let storage = storage().await;
    let conn = storage.connection();
    let now = Utc::now();

    SubmissionRepository::insert(conn, "contact_1_a", "Ann", "ann@example.com", "Hi", now)
        .await
        .unwrap();
    let second = SubmissionRepository::insert(conn, "contact_1_a", "Bob", "bob@example.com", "Yo", now).await;
    assert!(second.is_err());
    assert_eq!(SubmissionRepository::count(conn).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delivery_updates() {
    let storage = storage().await;
    let conn = storage.connection();
    let submitted = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let delivered = submitted + Duration::seconds(2);

    for id in ["sent", "failed", "disabled"] {
        SubmissionRepository::insert(conn, id, "Ann", "ann@example.com", "Hi", submitted)
            .await
            .unwrap();
    }

    let sent = SubmissionRepository::update_delivery(
        conn,
        "sent",
        DeliveryUpdate::Sent {
            email_id: Some("em_1".to_string()),
        },
        delivered,
    )
    .await
    .unwrap();
    assert_eq!(sent.status, DeliveryStatus::EmailSent);
    assert_eq!(sent.email_id.as_deref(), Some("em_1"));
    assert_eq!(sent.timestamp, delivered);

    let failed = SubmissionRepository::update_delivery(
        conn,
        "failed",
        DeliveryUpdate::Failed {
            error: "rate limited".to_string(),
            status_code: Some(429),
        },
        delivered,
    )
    .await
    .unwrap();
    assert_eq!(failed.status, DeliveryStatus::EmailFailed);
    assert_eq!(failed.error.as_deref(), Some("rate limited"));
    assert_eq!(failed.status_code, Some(429));

    let disabled = SubmissionRepository::update_delivery(
        conn,
        "disabled",
        DeliveryUpdate::Disabled {
            note: "Email service not configured".to_string(),
        },
        delivered,
    )
    .await
    .unwrap();
    assert_eq!(disabled.status, DeliveryStatus::EmailDisabled);
    assert_eq!(disabled.note.as_deref(), Some("Email service not configured"));
}

#[tokio::test]
async fn test_update_unknown_submission_fails() {
    let storage = storage().await;
    let result = SubmissionRepository::update_delivery(
        storage.connection(),
        "missing",
        DeliveryUpdate::Sent { email_id: None },
        Utc::now(),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_newest_first_ordering() {
    let storage = storage().await;
    let conn = storage.connection();
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    SubmissionRepository::insert(conn, "b", "B", "b@example.com", "2", base + Duration::hours(1))
        .await
        .unwrap();
    SubmissionRepository::insert(conn, "a", "A", "a@example.com", "1", base)
        .await
        .unwrap();
    SubmissionRepository::insert(conn, "c", "C", "c@example.com", "3", base + Duration::hours(2))
        .await
        .unwrap();

    let ids: Vec<String> = SubmissionRepository::get_all_newest_first(conn)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}
