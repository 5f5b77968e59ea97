/// Application error types
///
/// Every variant is fatal for the run; nothing is retried.
use codefirst_core::CoreError;
use codefirst_storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid configuration, raised before any database contact
    #[error("Configuration error: {0}")]
    Config(String),

    /// The database could not be created or reached
    #[error("Database connection error: {0}")]
    Connection(String),

    /// A migration failed; the schema state is unknown
    #[error("Migration error: {0}")]
    Migration(String),

    /// A read or write failed while seeding or reporting
    #[error("Data error: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(msg) => AppError::Connection(msg),
            StorageError::Migration(e) => AppError::Migration(e.to_string()),
            StorageError::Io(e) => AppError::Io(e),
            other => AppError::Data(other.to_string()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Data(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
