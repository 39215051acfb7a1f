use super::*;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn auth_token_round_trips_under_fixed_key() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert!(storage.auth_token().await.expect("read").is_none());

    storage.store_auth_token("opaque-token").await.expect("store");
    assert_eq!(
        storage.auth_token().await.expect("read").as_deref(),
        Some("opaque-token")
    );

    let stored = storage
        .get_value(AUTH_TOKEN_KEY)
        .await
        .expect("read raw")
        .expect("present");
    assert_eq!(stored.key, "authToken");
}

#[tokio::test]
async fn storing_again_overwrites_previous_token() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.store_auth_token("first").await.expect("store");
    storage.store_auth_token("second").await.expect("store");
    assert_eq!(
        storage.auth_token().await.expect("read").as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn remove_reports_whether_token_existed() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert!(!storage.remove_auth_token().await.expect("remove"));

    storage.store_auth_token("t").await.expect("store");
    assert!(storage.remove_auth_token().await.expect("remove"));
    assert!(storage.auth_token().await.expect("read").is_none());
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("storage.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    storage.store_auth_token("persisted").await.expect("store");
    storage.pool().close().await;

    let reopened = Storage::new(&database_url).await.expect("reopen");
    assert_eq!(
        reopened.auth_token().await.expect("read").as_deref(),
        Some("persisted")
    );
    reopened.pool().close().await;

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}

#[test]
fn memory_urls_have_no_filesystem_path() {
    assert!(sqlite_path("sqlite::memory:").is_none());
    assert!(sqlite_path("postgres://localhost/db").is_none());
    assert_eq!(
        sqlite_path("sqlite://./data/app.db?mode=rwc"),
        Some(PathBuf::from("./data/app.db"))
    );
}
