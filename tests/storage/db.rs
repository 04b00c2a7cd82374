use folio::repositories::SubmissionRepository;
use folio::storage::LocalStorage;

#[tokio::test]
async fn test_local_storage_creation() {
    // In-memory database for tests
    let result = LocalStorage::new(None).await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");
}

#[tokio::test]
async fn test_file_storage_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("submissions.db");

    let storage = LocalStorage::new(Some(path.as_path())).await.unwrap();
    assert!(path.exists());
    assert_eq!(SubmissionRepository::count(storage.connection()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_file_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submissions.db");

    {
        let storage = LocalStorage::new(Some(path.as_path())).await.unwrap();
        SubmissionRepository::insert(
            storage.connection(),
            "contact_1_abc",
            "Ann",
            "ann@example.com",
            "Hi",
            chrono::Utc::now(),
        )
        .await
        .unwrap();
    }

    let reopened = LocalStorage::new(Some(path.as_path())).await.unwrap();
    assert_eq!(SubmissionRepository::count(reopened.connection()).await.unwrap(), 1);
}
