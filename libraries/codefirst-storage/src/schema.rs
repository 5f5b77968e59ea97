//! Schema synchronization
//!
//! Migrations are embedded at compile time. The base set (`migrations/`)
//! creates the users table; the `posts` feature adds a second set
//! (`migrations_posts/`) holding the follow-up migration for posts. Sets are
//! run in that order and their versions interleave monotonically, so each
//! migrator tolerates versions recorded by the other.

use std::collections::BTreeSet;

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::session::Session;

/// One embedded migration and whether the database has applied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// What one synchronizer pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The database file did not exist and was created
    pub database_created: bool,
    /// Versions applied by this pass, ascending
    pub applied: Vec<i64>,
}

impl SyncReport {
    pub fn is_up_to_date(&self) -> bool {
        self.applied.is_empty()
    }
}

fn migrators() -> Vec<Migrator> {
    let mut sets = vec![sqlx::migrate!("./migrations")];

    #[cfg(feature = "posts")]
    sets.push(sqlx::migrate!("./migrations_posts"));

    for set in &mut sets {
        set.set_ignore_missing(true);
    }
    sets
}

/// Versions recorded as successfully applied, read without creating the
/// tracking table
async fn applied_versions(pool: &SqlitePool) -> Result<BTreeSet<i64>> {
    let tracked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    if tracked == 0 {
        return Ok(BTreeSet::new());
    }

    let versions: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?;

    Ok(versions.into_iter().collect())
}

/// Run database migrations
///
/// Applies every pending migration in version order and returns the
/// versions applied by this call. Returns an empty list when the schema is
/// already current.
///
/// # Errors
///
/// Returns `StorageError::Migration` if a migration fails or an applied
/// migration no longer matches its embedded checksum
pub async fn run_migrations(pool: &SqlitePool) -> Result<Vec<i64>> {
    let before = applied_versions(pool).await?;

    for migrator in migrators() {
        migrator.run(pool).await?;
    }

    let after = applied_versions(pool).await?;
    let applied: Vec<i64> = after.difference(&before).copied().collect();

    for version in &applied {
        tracing::info!(version, "applied migration");
    }
    Ok(applied)
}

/// Every embedded migration in version order, all marked as not applied
pub fn embedded_migrations() -> Vec<MigrationStatus> {
    let mut statuses: Vec<MigrationStatus> = migrators()
        .iter()
        .flat_map(|migrator| migrator.iter())
        .filter(|migration| migration.migration_type.is_up_migration())
        .map(|migration| MigrationStatus {
            version: migration.version,
            description: migration.description.to_string(),
            applied: false,
        })
        .collect();

    statuses.sort_by_key(|status| status.version);
    statuses
}

/// List every embedded migration in version order with its applied flag
///
/// Does not modify the database.
pub async fn migration_status(pool: &SqlitePool) -> Result<Vec<MigrationStatus>> {
    let applied = applied_versions(pool).await?;

    Ok(embedded_migrations()
        .into_iter()
        .map(|status| MigrationStatus {
            applied: applied.contains(&status.version),
            ..status
        })
        .collect())
}

/// Bring the database at `database_url` up to date and open a session on it
///
/// Creates the database when missing, then applies pending migrations.
/// Nothing else may query the database before this returns.
pub async fn synchronize(database_url: &str) -> Result<(Session, SyncReport)> {
    let database_created = crate::ensure_database(database_url).await?;
    let session = Session::open(database_url).await?;
    let applied = run_migrations(session.pool()).await?;

    if applied.is_empty() {
        tracing::info!("schema is up to date");
    }

    Ok((
        session,
        SyncReport {
            database_created,
            applied,
        },
    ))
}
