//! In-memory store backend

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{StateKey, StateStore, StateValue, StoreResult};

/// HashMap-backed store. The default for tests and for hosts that manage
/// persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StateKey, StateValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: StateKey) -> StoreResult<Option<StateValue>> {
        Ok(self.values.lock().unwrap().get(&key).cloned())
    }

    async fn set(&self, key: StateKey, value: StateValue) -> StoreResult<()> {
        self.values.lock().unwrap().insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: StateKey) -> StoreResult<()> {
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let store = MemoryStore::new();

        assert_eq!(store.get(StateKey::NumLaunches).await.unwrap(), None);

        store
            .set(StateKey::NumLaunches, StateValue::Integer(3))
            .await
            .unwrap();
        assert_eq!(
            store.get(StateKey::NumLaunches).await.unwrap(),
            Some(StateValue::Integer(3))
        );

        store.delete(StateKey::NumLaunches).await.unwrap();
        assert_eq!(store.get(StateKey::NumLaunches).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = MemoryStore::new();

        store
            .set(StateKey::Status, StateValue::Text("postponed".into()))
            .await
            .unwrap();
        store
            .set(StateKey::Status, StateValue::Text("accepted".into()))
            .await
            .unwrap();

        assert_eq!(
            store.get(StateKey::Status).await.unwrap(),
            Some(StateValue::Text("accepted".into()))
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_absent_is_ok() {
        let store = MemoryStore::new();
        store.delete(StateKey::MinDays).await.unwrap();
        assert!(store.is_empty());
    }
}
