//! Seeding of the user table
//!
//! The seed set is written only when the table is observed empty. Two
//! processes starting at the same moment can both observe an empty table
//! and both write the set; there is no lock or uniqueness constraint that
//! prevents it.

use crate::error::Result;
use crate::storage::UserStore;
use crate::types::{NewUser, User};

/// Emails of the rows written into an empty user table
pub const SEED_EMAILS: [&str; 3] = [
    "person1@example.com",
    "person2@example.com",
    "person3@example.com",
];

/// What a seeding pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and these rows were written
    Seeded(Vec<User>),

    /// The table already held this many rows; nothing was written
    AlreadyPopulated(u64),
}

impl SeedOutcome {
    /// Number of rows written by this pass
    pub fn created(&self) -> usize {
        match self {
            Self::Seeded(users) => users.len(),
            Self::AlreadyPopulated(_) => 0,
        }
    }
}

/// Drafts for the fixed seed set
pub fn seed_drafts() -> Vec<NewUser> {
    SEED_EMAILS.iter().copied().map(NewUser::new).collect()
}

/// Write the seed set if and only if the user table is empty
pub async fn seed_users<S>(store: &S) -> Result<SeedOutcome>
where
    S: UserStore + ?Sized,
{
    let existing = store.count_users().await?;
    if existing > 0 {
        tracing::debug!(existing, "user table already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    let users = store.insert_users(seed_drafts()).await?;
    tracing::info!(count = users.len(), "seeded user table");
    Ok(SeedOutcome::Seeded(users))
}
