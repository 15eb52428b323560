//! Small numeric conversions shared by the opcode handlers.

use ethereum_types::U256;

/// Converts a stack word to a `usize` offset/size, failing when it would
/// not fit (rather than truncating) — the caller picks the fault variant
/// that names the operand (`BadMemoryArg` for memory ops, `BadJump` for
/// jump destinations).
pub fn u256_to_usize(value: U256) -> Option<usize> {
    if value > U256::from(usize::MAX) {
        None
    } else {
        Some(value.as_usize())
    }
}
