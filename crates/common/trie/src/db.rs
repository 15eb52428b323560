use crate::error::TrieError;
use ethereum_types::H256;

/// The backing collaborator a [`crate::Trie`] resolves and stores nodes
/// against.
///
/// `ethrex-storage`'s `Journal` implements this trait directly, so a trie
/// built over a journal participates in the journal's snapshot/revert
/// semantics for free.
pub trait TrieDB {
    fn get(&self, key: H256) -> Result<Option<Vec<u8>>, TrieError>;
    fn put(&self, key: H256, value: Vec<u8>) -> Result<(), TrieError>;
}
