use crate::error::StoreError;
use crate::kv::KeyValueStore;
use ethereum_types::H256;
use ethrex_trie::TrieDB;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// One undo record: at `snapshot_id`, `key` held `prior` (`None` meaning
/// the key was absent) immediately before this write.
struct JournalEntry {
    snapshot_id: u64,
    key: Vec<u8>,
    prior: Option<Vec<u8>>,
}

struct JournalInner<KV> {
    kv: KV,
    /// Write-through cache. `Some(tombstone)`-as-deleted is never collapsed
    /// into the absent case: a deleted key is `cache[key] == None`, while a
    /// key with no cache entry at all falls through to the backing store.
    cache: HashMap<Vec<u8>, Option<Vec<u8>>>,
    log: Vec<JournalEntry>,
    open_snapshots: Vec<u64>,
    next_id: u64,
}

/// A snapshot/revert/commit overlay on top of a [`KeyValueStore`].
///
/// Cheaply `Clone`able: clones share the same cache and log through an
/// `Rc<RefCell<_>>`, the same way a single execution's stack and memory
/// are shared between the interpreter and its tracer.
pub struct Journal<KV> {
    inner: Rc<RefCell<JournalInner<KV>>>,
}

impl<KV> Clone for Journal<KV> {
    fn clone(&self) -> Self {
        Journal {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<KV: KeyValueStore> Journal<KV> {
    pub fn new(kv: KV) -> Self {
        Journal {
            inner: Rc::new(RefCell::new(JournalInner {
                kv,
                cache: HashMap::new(),
                log: Vec::new(),
                open_snapshots: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Cache hit (including a tombstone, which reads as absent) wins over
    /// the backing store.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let inner = self.inner.borrow();
        match inner.cache.get(key) {
            Some(cached) => Ok(cached.clone()),
            None => inner.kv.get(key),
        }
    }

    fn current_snapshot_id(&self) -> u64 {
        self.inner
            .borrow()
            .open_snapshots
            .last()
            .copied()
            .unwrap_or(0)
    }

    pub fn put(&self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError> {
        let prior = self.get(key)?;
        let tag = self.current_snapshot_id();
        let mut inner = self.inner.borrow_mut();
        inner.log.push(JournalEntry {
            snapshot_id: tag,
            key: key.to_vec(),
            prior,
        });
        inner.cache.insert(key.to_vec(), Some(value));
        Ok(())
    }

    pub fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        let prior = self.get(key)?;
        let tag = self.current_snapshot_id();
        let mut inner = self.inner.borrow_mut();
        inner.log.push(JournalEntry {
            snapshot_id: tag,
            key: key.to_vec(),
            prior,
        });
        inner.cache.insert(key.to_vec(), None);
        Ok(())
    }

    /// Opens a new undo mark and returns its id.
    pub fn snapshot(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.open_snapshots.push(id);
        id
    }

    /// Undoes every write tagged `>= id`, restoring the cache to the
    /// values captured at the time of each write, then drops `id` and
    /// every snapshot opened after it.
    pub fn revert(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        while let Some(entry) = inner.log.last() {
            if entry.snapshot_id < id {
                break;
            }
            let entry = inner
                .log
                .pop()
                .expect("just matched Some(_) via inner.log.last()");
            match entry.prior {
                Some(value) => {
                    inner.cache.insert(entry.key, Some(value));
                }
                None => {
                    inner.cache.remove(&entry.key);
                }
            }
        }
        inner.open_snapshots.retain(|&s| s < id);
        trace!(snapshot = id, "journal reverted");
        Ok(())
    }

    /// Flushes every write tagged `<= id` to the backing store using the
    /// *current* cached value for its key (not the value the write
    /// originally set — a later write to the same key wins), then drops
    /// those log entries and every snapshot `<= id`.
    pub fn commit(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        let mut flushed = HashMap::new();
        inner.log.retain(|entry| {
            if entry.snapshot_id <= id {
                flushed.insert(entry.key.clone(), ());
                false
            } else {
                true
            }
        });
        for key in flushed.into_keys() {
            match inner.cache.get(&key) {
                Some(Some(value)) => inner.kv.put(&key, value.clone())?,
                Some(None) => inner.kv.delete(&key)?,
                None => {}
            }
        }
        inner.open_snapshots.retain(|&s| s > id);
        trace!(snapshot = id, "journal committed");
        Ok(())
    }
}

impl<KV: KeyValueStore> TrieDB for Journal<KV> {
    fn get(&self, key: H256) -> Result<Option<Vec<u8>>, ethrex_trie::TrieError> {
        Journal::get(self, key.as_bytes())
            .map_err(|err| ethrex_trie::TrieError::DbError(err.to_string()))
    }

    fn put(&self, key: H256, value: Vec<u8>) -> Result<(), ethrex_trie::TrieError> {
        Journal::put(self, key.as_bytes(), value)
            .map_err(|err| ethrex_trie::TrieError::DbError(err.to_string()))
    }
}
