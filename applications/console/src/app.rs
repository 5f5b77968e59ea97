//! Startup sequence
//!
//! `run` is strictly ordered: resolve the connection string, synchronize the
//! schema, seed, report. A failure at any step ends the run; later steps never
//! see an unmigrated database.

use std::io::Write;

use codefirst_core::{seed_users, SeedOutcome, User, UserStore};
use codefirst_storage::{MigrationStatus, SyncReport};

use crate::config::AppConfig;
use crate::error::Result;
use crate::report;

/// Everything one startup run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sync: SyncReport,
    pub seed: SeedOutcome,
    pub users: Vec<User>,
}

/// Full startup run: synchronize, seed if empty, print all users
pub async fn run<W: Write>(config: &AppConfig, connection: &str, out: &mut W) -> Result<RunSummary> {
    report::write_banner(out)?;

    let url = config.connection_string(connection)?;
    tracing::info!(connection, "synchronizing schema");

    let (session, sync) = codefirst_storage::synchronize(url).await?;
    if sync.database_created {
        tracing::info!(connection, "created database");
    }

    let result = seed_and_report(&session, out).await;
    session.close().await;
    let (seed, users) = result?;

    Ok(RunSummary { sync, seed, users })
}

async fn seed_and_report<S, W>(store: &S, out: &mut W) -> Result<(SeedOutcome, Vec<User>)>
where
    S: UserStore + ?Sized,
    W: Write,
{
    let seed = seed_users(store).await?;
    let users = store.get_all_users().await?;
    report::write_report(out, &seed, &users)?;

    Ok((seed, users))
}

/// Apply pending migrations only; the offline counterpart of the startup run
pub async fn migrate<W: Write>(config: &AppConfig, connection: &str, out: &mut W) -> Result<SyncReport> {
    let url = config.connection_string(connection)?;

    let (session, sync) = codefirst_storage::synchronize(url).await?;
    session.close().await;

    report::write_applied(out, &sync.applied)?;
    Ok(sync)
}

/// List embedded migrations and whether each is applied
///
/// A database that does not exist yet is reported as fully pending and is
/// not created.
pub async fn status<W: Write>(
    config: &AppConfig,
    connection: &str,
    out: &mut W,
) -> Result<Vec<MigrationStatus>> {
    let url = config.connection_string(connection)?;

    let statuses = if codefirst_storage::database_exists(url).await? {
        let session = codefirst_storage::Session::open(url).await?;
        let statuses = codefirst_storage::migration_status(session.pool()).await;
        session.close().await;
        statuses?
    } else {
        codefirst_storage::embedded_migrations()
    };

    report::write_status(out, &statuses)?;
    Ok(statuses)
}
