//! Storage trait for the user table

use crate::error::Result;
use crate::types::{NewUser, User};
use async_trait::async_trait;

/// Access to the `users` table
///
/// This trait abstracts the handful of operations the seeder and the
/// report need, so they can run against `SQLite` or an in-memory fake.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Count rows in the user table
    async fn count_users(&self) -> Result<u64>;

    /// Insert all drafts in a single batch write, returning the stored rows
    ///
    /// Either every draft is written or none is.
    async fn insert_users(&self, users: Vec<NewUser>) -> Result<Vec<User>>;

    /// Read every row, in the order the backend returns them
    async fn get_all_users(&self) -> Result<Vec<User>>;
}
