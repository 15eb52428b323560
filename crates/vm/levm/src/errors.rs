//! Fault taxonomy (spec §7): the `ExceptionalHalt` family are faults —
//! bugs or corruption, carried as `Err` — kept separate from normal halts
//! and reverts, which this crate expresses as a successful [`crate::ExecutionReport`]
//! rather than as an error at all (see Design Note "control-flow-via-exceptions").

use ethrex_rlp::error::RLPDecodeError;
use ethrex_storage::StoreError;
use ethrex_trie::TrieError;

/// A fault terminating the current execution (spec §7 "Error kinds",
/// excluding *Halt* and *Revert*, which are not faults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExceptionalHalt {
    #[error("out of gas")]
    OutOfGas,
    #[error("invalid opcode {0:#04x}")]
    InvalidOpcode(u8),
    #[error("stack overflow")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    /// A stack value fell outside `[0, 2²⁵⁶)`. `U256` is a fixed-width type
    /// so every value it can hold already satisfies this range; the variant
    /// exists to keep the fault taxonomy complete for a future caller that
    /// pushes values derived from a wider or signed representation.
    #[error("value out of u256 range")]
    RangeError,
    #[error("jump destination is not a JUMPDEST")]
    BadJump,
    #[error("negative or out-of-range memory offset or size")]
    BadMemoryArg,
    #[error("insufficient funds for transfer")]
    InsufficientFunds,
    #[error("trie resolution found no entry for a referenced digest")]
    MissingNode,
    #[error("invalid trie node structure")]
    InvalidNodeStructure,
    #[error("malformed RLP during decode")]
    MalformedRLP,
}

/// Top-level interpreter error. Only [`ExceptionalHalt`] is reachable from
/// this core's opcode handlers today; the conversions from `StoreError`
/// and `TrieError` exist for the one seam a future message-call layer
/// would need once the interpreter can touch persistent world state
/// (spec.md §7 "Propagation", SPEC_FULL §7).
#[derive(Debug, thiserror::Error)]
pub enum VMError {
    #[error(transparent)]
    ExceptionalHalt(#[from] ExceptionalHalt),

    #[error("world state error: {0}")]
    Store(#[from] StoreError),

    #[error("trie error: {0}")]
    Trie(#[from] TrieError),

    #[error("RLP decode error: {0}")]
    Rlp(#[from] RLPDecodeError),
}
