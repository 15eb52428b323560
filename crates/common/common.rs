//! Shared address/hash/word aliases and the RLP-shaped account and block
//! records used across the journal, trie, and interpreter
//! crates.

pub mod types;

pub use ethereum_types::{H256, U256};

/// 20-byte account address. `ethereum_types` doesn't name this alias
/// itself (it only ships the underlying `H160`), so it's defined here for
/// the whole workspace to share.
pub type Address = ethereum_types::H160;
