//! Code-First Demo Console
//!
//! Startup sequence of the demo: load configuration, bring the schema up to
//! date, seed an empty user table, print every user.
//!
//! This library exposes the pieces the binary wires together so they can be
//! exercised from tests.

pub mod app;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::app::{migrate, run, status, RunSummary};
pub use crate::config::{AppConfig, DEFAULT_CONNECTION};
pub use crate::error::{AppError, Result};

/// Log filter used when `RUST_LOG` is unset
///
/// Each workspace crate is a separate tracing target, so every one is listed.
pub const DEFAULT_LOG_FILTER: &str = "codefirst=info,codefirst_core=info,codefirst_storage=info,sqlx=warn";
