use async_trait::async_trait;
use codefirst_core::{error::Result, storage::UserStore, types::*};
use sqlx::SqlitePool;

use crate::users;

/// Database session for one startup run
///
/// Owns the connection pool. Call [`Session::close`] when the run is over;
/// dropping the session without closing releases the pool as well.
pub struct Session {
    pool: SqlitePool,
}

impl Session {
    /// Connect to an existing database
    ///
    /// Does not create or migrate anything; use [`crate::synchronize`] on startup.
    pub async fn open(database_url: &str) -> crate::Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight queries and close every connection
    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("session closed");
    }
}

#[async_trait]
impl UserStore for Session {
    async fn count_users(&self) -> Result<u64> {
        Ok(users::count(&self.pool).await?)
    }

    async fn insert_users(&self, drafts: Vec<NewUser>) -> Result<Vec<User>> {
        Ok(users::insert_many(&self.pool, drafts).await?)
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }
}
