use ethereum_types::{H160, U256};
use ethrex_rlp::error::RLPDecodeError;
use ethrex_trie::TrieError;

/// Errors raised by the journaled key-value overlay and the world-state
/// layer built on top of it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("trie error: {0}")]
    Trie(#[from] TrieError),

    #[error("malformed account or header RLP: {0}")]
    MalformedRLP(#[from] RLPDecodeError),

    #[error("insufficient funds transferring from {from:#x}: balance {balance}, debit {debit}")]
    InsufficientFunds {
        from: H160,
        balance: U256,
        debit: U256,
    },

    #[error("account {0:#x} has no storage to write into")]
    AccountNotFound(H160),

    #[error("backing store error: {0}")]
    Backend(String),

    #[error("no snapshot with id {0} is open")]
    UnknownSnapshot(u64),
}
