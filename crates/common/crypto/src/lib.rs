//! The Keccak-256 primitive used throughout the execution core: trie node
//! digests, account addresses' storage keys, and block/header hashes.
//!
//! This is the original Keccak padding, not NIST SHA3-256.

pub mod keccak;

pub use keccak::{keccak256, keccak_hash};
