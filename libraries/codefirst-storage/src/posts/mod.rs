//! Queries against the `posts` table
//!
//! Only compiled with the `posts` feature, which also embeds the migration
//! that creates the table.

use chrono::DateTime;
use codefirst_core::types::{NewPost, Post, PostId, UserId};
use sqlx::SqlitePool;

use crate::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: PostId,
    user_id: UserId,
    title: String,
    content: String,
    created_at: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = StorageError;

    fn try_from(row: PostRow) -> Result<Self> {
        let created_at = DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
            StorageError::InvalidData(format!("post {} has invalid timestamp", row.id))
        })?;

        Ok(Post {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
            created_at,
        })
    }
}

/// Create a post for an existing user
///
/// The owning user must exist; the foreign key rejects unknown ids.
pub async fn create(pool: &SqlitePool, post: NewPost) -> Result<Post> {
    let row = sqlx::query_as::<_, PostRow>(
        "INSERT INTO posts (id, user_id, title, content)
         VALUES (?, ?, ?, ?)
         RETURNING id, user_id, title, content, created_at",
    )
    .bind(PostId::generate())
    .bind(post.user_id)
    .bind(&post.title)
    .bind(&post.content)
    .fetch_one(pool)
    .await?;

    row.try_into()
}

/// Get all posts written by a user, oldest first
pub async fn get_by_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Post>> {
    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, user_id, title, content, created_at
         FROM posts WHERE user_id = ?
         ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Post::try_from).collect()
}

/// Get a post by id
pub async fn get_by_id(pool: &SqlitePool, id: PostId) -> Result<Post> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, user_id, title, content, created_at FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StorageError::not_found("Post", id.to_string()))?;

    row.try_into()
}
