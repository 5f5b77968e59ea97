//! Code-First Demo Storage
//!
//! `SQLite` database layer for the code-first demo.
//!
//! The schema is declared as ordered SQL migrations embedded into the binary
//! and applied on startup; tables are never created ad hoc.
//!
//! # Architecture
//!
//! - **Schema Synchronizer** (`schema`): creates the database if needed and
//!   applies pending migrations in version order
//! - **Session** (`session`): one pool per run, implements `UserStore`
//! - **Vertical Slicing**: each table owns its own queries (`users`, `posts`)
//!
//! # Example
//!
//! ```rust,no_run
//! use codefirst_core::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (session, report) = codefirst_storage::synchronize("sqlite://demo.db").await?;
//! println!("applied {} migrations", report.applied.len());
//!
//! let users = session.get_all_users().await?;
//! session.close().await;
//! # Ok(())
//! # }
//! ```

mod error;
mod schema;
mod session;

// Vertical slices
pub mod users;

#[cfg(feature = "posts")]
pub mod posts;

pub use error::{Result, StorageError};
pub use schema::{
    embedded_migrations, migration_status, run_migrations, synchronize, MigrationStatus,
    SyncReport,
};
pub use session::Session;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use std::time::Duration;

/// Parse a connection string without touching the database
///
/// Used to reject malformed configuration before any connection attempt.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    if !database_url.starts_with("sqlite:") {
        return Err(StorageError::Connection(format!(
            "unsupported connection string (expected sqlite:...): {database_url}"
        )));
    }

    SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(format!("invalid connection string: {e}")))
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Check whether the database exists without creating it
pub async fn database_exists(database_url: &str) -> Result<bool> {
    if is_in_memory(database_url) {
        return Ok(true);
    }

    connect_options(database_url)?;
    Sqlite::database_exists(database_url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// Create the database if it does not exist yet
///
/// Returns `true` when this call created it. Missing parent directories of
/// a file database are created as well. In-memory databases always exist.
pub async fn ensure_database(database_url: &str) -> Result<bool> {
    if is_in_memory(database_url) {
        return Ok(false);
    }

    if database_exists(database_url).await? {
        return Ok(false);
    }

    let options = connect_options(database_url)?;
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tracing::info!("creating database {}", options.get_filename().display());
    Sqlite::create_database(database_url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(true)
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://demo.db`)
///
/// # Errors
///
/// Returns `StorageError::Connection` if the URL is invalid or the
/// connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("creating pool for {}", database_url);

    let options = connect_options(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    // Every connection to `:memory:` is its own database, so keep exactly one alive
    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("pool created");
    Ok(pool)
}
