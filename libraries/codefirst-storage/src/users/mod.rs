//! Queries against the `users` table

use codefirst_core::types::{NewUser, User, UserId};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

/// Count all users
pub async fn count(pool: &SqlitePool) -> Result<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count as u64)
}

/// Insert users in one transaction with a single multi-row `INSERT`
///
/// Ids are generated here. Returns the stored rows in draft order.
pub async fn insert_many(pool: &SqlitePool, drafts: Vec<NewUser>) -> Result<Vec<User>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }

    let users: Vec<User> = drafts
        .into_iter()
        .map(|draft| User::from_new(UserId::generate(), draft))
        .collect();

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("INSERT INTO users (id, email) ");
    builder.push_values(&users, |mut row, user| {
        row.push_bind(user.id).push_bind(user.email.clone());
    });

    let mut tx = pool.begin().await?;
    builder.build().execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::debug!(count = users.len(), "inserted users");
    Ok(users)
}

/// Insert a single user with a caller-chosen id
pub async fn insert(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
        .bind(user.id)
        .bind(&user.email)
        .execute(pool)
        .await?;

    Ok(())
}

/// Get all users
///
/// No ordering is imposed; rows come back in whatever order `SQLite` scans them.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, email FROM users")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Get a user by id
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
