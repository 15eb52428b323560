use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;

/// The durable bytes-to-bytes map a [`crate::Journal`] writes through to.
///
/// No `close()` method: `Drop` plays that role for a real backend, the
/// same way the teacher's `Store` trait has no explicit close either.
pub trait KeyValueStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put(&self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError>;
    fn delete(&self, key: &[u8]) -> Result<(), StoreError>;
}

/// A `RwLock`-guarded `HashMap` backend, used for tests and the CLI demo
/// runner. Durability is process lifetime only.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".into()))?;
        guard.insert(key.to_vec(), value);
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".into()))?;
        guard.remove(key);
        Ok(())
    }
}
