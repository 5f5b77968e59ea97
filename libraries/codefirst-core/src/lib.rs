//! Code-First Demo Core
//!
//! Database-agnostic domain types, the `UserStore` seam and the seeding
//! routine for the code-first demo.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `Post`, `NewPost` and their ids
//! - **Core Traits**: `UserStore`, implemented by the storage crate
//! - **Seeding**: `seed_users`, which populates an empty user table once
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use codefirst_core::types::{NewUser, User, UserId};
//!
//! let draft = NewUser::new("person1@example.com");
//! let user = User::from_new(UserId::generate(), draft);
//! assert_eq!(user.email, "person1@example.com");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod seed;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use seed::{seed_users, SeedOutcome, SEED_EMAILS};
pub use storage::UserStore;

pub use types::{NewPost, NewUser, Post, PostId, User, UserId};
