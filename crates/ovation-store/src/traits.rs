//! Store contract

use async_trait::async_trait;

use crate::{StateKey, StateValue, StoreResult};

/// Async key-value contract for prompt state.
///
/// Implementations must provide read-after-write consistency within a
/// process: a `get` following a completed `set` observes the written value.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    async fn get(&self, key: StateKey) -> StoreResult<Option<StateValue>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: StateKey, value: StateValue) -> StoreResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: StateKey) -> StoreResult<()>;
}
