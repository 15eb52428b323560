//! `JUMP`/`JUMPI`/`JUMPDEST` (spec §4.1, `0x56`/`0x57`/`0x5b`).

use crate::errors::{ExceptionalHalt, VMError};
use crate::utils::u256_to_usize;
use crate::vm::{OpcodeResult, Vm};
use ethereum_types::U256;

/// A destination is valid iff `dest < len(code)` and `code[dest] == 0x5b`
/// — a plain byte-equality test, not a precomputed jumpdest bitmap. This
/// accepts `0x5b` bytes that happen to fall inside a `PUSHn` immediate; a
/// conformant EVM excludes those. Preserved rather than fixed — see
/// DESIGN.md's Open Question on this divergence (spec §9).
fn validate_jump(vm: &Vm, dest: U256) -> Result<u32, ExceptionalHalt> {
    let index = u256_to_usize(dest).ok_or(ExceptionalHalt::BadJump)?;
    match vm.code.get(index) {
        Some(0x5b) => u32::try_from(index).map_err(|_| ExceptionalHalt::BadJump),
        _ => Err(ExceptionalHalt::BadJump),
    }
}

pub fn op_jump(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [dest] = vm.stack.pop::<1>()?;
    vm.pc = validate_jump(vm, dest)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_jumpi(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [dest, cond] = vm.stack.pop::<2>()?;
    if !cond.is_zero() {
        vm.pc = validate_jump(vm, dest)?;
    }
    Ok(OpcodeResult::Continue)
}

pub fn op_jumpdest(_vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    Ok(OpcodeResult::Continue)
}
