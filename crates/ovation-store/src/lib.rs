//! Persisted prompt state for ovation
//!
//! Provides:
//! - The typed key/value vocabulary (`StateKey`, `StateValue`)
//! - The async `StateStore` contract (get/set/delete)
//! - An in-memory backend for tests and zero-setup embedding
//! - A SQLite backend for durable state
//! - Default on-disk location resolution

mod keys;
mod memory;
mod paths;
mod sqlite;
mod traits;

pub use keys::*;
pub use memory::*;
pub use paths::*;
pub use sqlite::*;
pub use traits::*;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
