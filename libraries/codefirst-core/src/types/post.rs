/// Post domain type
///
/// Posts are only persisted when the storage crate is built with its
/// `posts` feature; the type lives here so the relationship to `User`
/// is visible next to it.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// A post written by a user (many posts reference one user)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,

    /// Owning user (foreign key to `users.id`)
    pub user_id: UserId,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Creation timestamp, set by the database when the row is inserted
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Owning user
    pub user_id: UserId,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,
}

impl NewPost {
    /// Create a new post draft
    pub fn new(user_id: UserId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
        }
    }
}
