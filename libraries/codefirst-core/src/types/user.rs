/// User domain type
use serde::{Deserialize, Serialize};

use super::UserId;

/// A row of the `users` table
///
/// The id is assigned once when the row is first written and never changes.
/// Emails are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Contact address
    pub email: String,
}

impl User {
    /// Materialize a draft with the id it is stored under
    pub fn from_new(id: UserId, draft: NewUser) -> Self {
        Self {
            id,
            email: draft.email,
        }
    }
}

/// Insert payload for a user; the id is generated when the row is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Contact address
    pub email: String,
}

impl NewUser {
    /// Create a new user draft
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
