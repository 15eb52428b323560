//! The journaled world-state layer (spec §4.5, §4.8): a snapshot/revert
//! overlay on top of a [`KeyValueStore`], and the account/storage
//! operations built on top of it over an [`ethrex_trie::Trie`].

pub mod error;
pub mod journal;
pub mod kv;
pub mod world_state;

pub use error::StoreError;
pub use journal::Journal;
pub use kv::{InMemoryStore, KeyValueStore};
pub use world_state::WorldState;
