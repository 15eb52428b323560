//! Per-execution transient storage (spec §4.4) — distinct from the
//! persistent EVM storage that lives in the world state's per-account
//! sub-tries (`ethrex_storage::WorldState::{get_storage,set_storage}`).

use ethereum_types::U256;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct TransientStorage {
    store: HashMap<U256, U256>,
    /// Pre-image of a slot at its first write in the current journal
    /// epoch; populated lazily so the epoch boundary is "since the last
    /// `commit`/`revert`", not "since VM creation".
    original: HashMap<U256, U256>,
    touched: HashSet<U256>,
}

impl TransientStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, key: U256) -> U256 {
        self.store.get(&key).copied().unwrap_or(U256::zero())
    }

    pub fn store(&mut self, key: U256, value: U256) {
        if !self.original.contains_key(&key) {
            self.original.insert(key, self.load(key));
        }
        self.touched.insert(key);
        self.store.insert(key, value);
    }

    /// Restores every touched key to its pre-epoch value. A pre-epoch
    /// value of zero removes the entry entirely rather than leaving a
    /// literal zero behind — it must read back identically to a slot that
    /// was never written (Design Note, spec §9).
    pub fn revert(&mut self) {
        for key in self.touched.drain() {
            match self.original.get(&key) {
                Some(value) if value.is_zero() => {
                    self.store.remove(&key);
                }
                Some(value) => {
                    self.store.insert(key, *value);
                }
                None => {}
            }
        }
        self.original.clear();
    }

    pub fn commit(&mut self) {
        self.original.clear();
        self.touched.clear();
    }
}
