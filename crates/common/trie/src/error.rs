use ethrex_rlp::RLPDecodeError;

/// Errors surfaced while resolving, decoding, or storing trie nodes (spec
/// §7). Trie errors are not retried; they propagate to the caller as-is.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// A hashed child reference has no corresponding entry in the backing
    /// store — this indicates corruption, never an expected outcome.
    #[error("missing trie node for digest {0:x}")]
    MissingNode(ethereum_types::H256),
    #[error("invalid trie node structure: {0}")]
    InvalidNodeStructure(String),
    #[error("malformed RLP in trie node: {0}")]
    MalformedRLP(#[from] RLPDecodeError),
    #[error("backing store error: {0}")]
    DbError(String),
}
