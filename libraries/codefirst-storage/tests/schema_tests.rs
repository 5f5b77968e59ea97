//! Integration tests for the schema synchronizer
//!
//! Tests:
//! - Database creation on first run
//! - Migration ordering and bookkeeping
//! - Idempotent re-runs
//! - Status reporting without side effects


use codefirst_storage::{create_pool, ensure_database, migration_status, run_migrations};
use test_helpers::*;

#[tokio::test]
async fn test_synchronize_creates_missing_database() {
    let (temp_dir, url) = fresh_url();
    let db_path = temp_dir.path().join("test.db");
    assert!(!db_path.exists());

    let (session, report) = codefirst_storage::synchronize(&url).await.unwrap();

    assert!(db_path.exists());
    assert!(report.database_created);
    assert!(!report.applied.is_empty());
    assert!(report.applied.contains(&20250101000001));
    session.close().await;
}

#[tokio::test]
async fn test_ensure_database_creates_parent_directories() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("app.db");
    let url = format!("sqlite://{}", db_path.display());

    assert!(ensure_database(&url).await.unwrap());
    assert!(db_path.exists());

    // Second call finds it
    assert!(!ensure_database(&url).await.unwrap());
}

#[tokio::test]
async fn test_second_synchronize_is_a_no_op() {
    let (_temp_dir, url) = fresh_url();

    let (first, report) = codefirst_storage::synchronize(&url).await.unwrap();
    assert!(!report.is_up_to_date());
    first.close().await;

    let (second, report) = codefirst_storage::synchronize(&url).await.unwrap();
    assert!(!report.database_created);
    assert!(report.is_up_to_date());
    assert!(report.applied.is_empty());
    second.close().await;
}

#[tokio::test]
async fn test_run_migrations_applies_in_ascending_order() {
    let (_temp_dir, url) = fresh_url();
    let pool = create_pool(&url).await.unwrap();

    let applied = run_migrations(&pool).await.unwrap();

    let mut sorted = applied.clone();
    sorted.sort_unstable();
    assert_eq!(applied, sorted);

    let recorded: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations ORDER BY installed_on, version")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(recorded, applied);
}

#[tokio::test]
async fn test_migration_status_before_and_after() {
    let (_temp_dir, url) = fresh_url();
    let pool = create_pool(&url).await.unwrap();

    let pending = migration_status(&pool).await.unwrap();
    assert!(!pending.is_empty());
    assert!(pending.iter().all(|status| !status.applied));
    assert_eq!(pending[0].version, 20250101000001);
    assert_eq!(pending[0].description, "create users");

    // Status must not create the tracking table
    let tracked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE name = '_sqlx_migrations'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(tracked, 0);

    run_migrations(&pool).await.unwrap();

    let current = migration_status(&pool).await.unwrap();
    assert_eq!(current.len(), pending.len());
    assert!(current.iter().all(|status| status.applied));
}

#[tokio::test]
async fn test_users_table_exists_after_synchronize() {
    let test_db = TestDb::new().await;

    let count = codefirst_storage::users::count(test_db.pool()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_synchronize_fails_on_unreachable_database() {
    let temp_dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file
    let url = format!("sqlite://{}", temp_dir.path().display());

    let result = codefirst_storage::synchronize(&url).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_connection_string_is_rejected() {
    let result = codefirst_storage::connect_options("postgres://localhost/demo");
    assert!(result.is_err());
}

#[tokio::test]
async fn test_in_memory_database_keeps_schema_across_queries() {
    let (session, report) = codefirst_storage::synchronize("sqlite::memory:")
        .await
        .unwrap();
    assert!(!report.database_created);

    for _ in 0..3 {
        let count = codefirst_storage::users::count(session.pool()).await.unwrap();
        assert_eq!(count, 0);
    }
    session.close().await;
}
