//! Message-call and contract-creation opcodes (spec §4.1). Sub-contexts
//! are explicitly out of scope (spec.md §1 Non-goals): these handlers pop
//! their real operand count and substitute a fixed result rather than
//! recursing into a nested call frame, matching the `CREATE/CREATE2`
//! "stub: pop args, push fixed sentinel address" and `CALL` family "stub:
//! pop, push success=1" contracts verbatim.

use crate::errors::{ExceptionalHalt, VMError};
use crate::utils::u256_to_usize;
use crate::vm::{OpcodeResult, Vm};
use bytes::Bytes;
use ethereum_types::U256;

/// Fixed placeholder returned by `CREATE`/`CREATE2` in place of a real
/// deployment address.
fn sentinel_address() -> U256 {
    U256::from(0xdead_beef_u64)
}

pub fn op_create(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [_value, _offset, _size] = vm.stack.pop::<3>()?;
    vm.stack.push(sentinel_address())?;
    Ok(OpcodeResult::Continue)
}

pub fn op_create2(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [_value, _offset, _size, _salt] = vm.stack.pop::<4>()?;
    vm.stack.push(sentinel_address())?;
    Ok(OpcodeResult::Continue)
}

fn stubbed_call<const N: usize>(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let _args = vm.stack.pop::<N>()?;
    vm.stack.push(U256::one())?;
    Ok(OpcodeResult::Continue)
}

/// `CALL`: 7 args (gas, address, value, argsOffset, argsSize, retOffset, retSize).
pub fn op_call(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    stubbed_call::<7>(vm)
}

/// `CALLCODE`: same 7-argument shape as `CALL`.
pub fn op_callcode(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    stubbed_call::<7>(vm)
}

/// `STATICCALL`: spec groups this with the 7-argument `CALL` family.
pub fn op_staticcall(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    stubbed_call::<7>(vm)
}

/// `DELEGATECALL`: 6 args (no separate `value`).
pub fn op_delegatecall(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    stubbed_call::<6>(vm)
}

/// `RETURN`'s operand order is the odd one out here: `size` sits on top of
/// the stack, `offset` underneath (`REVERT` pops `offset` first instead).
pub fn op_return(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [size, offset] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let size = u256_to_usize(size).ok_or(ExceptionalHalt::BadMemoryArg)?;
    vm.return_data = Bytes::from(vm.memory.load_range(offset, size)?);
    vm.reverted = false;
    Ok(OpcodeResult::Halt)
}

pub fn op_revert(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset, size] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let size = u256_to_usize(size).ok_or(ExceptionalHalt::BadMemoryArg)?;
    vm.return_data = Bytes::from(vm.memory.load_range(offset, size)?);
    vm.reverted = true;
    Ok(OpcodeResult::Halt)
}

pub fn op_selfdestruct(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [_beneficiary] = vm.stack.pop::<1>()?;
    vm.return_data = Bytes::new();
    vm.reverted = false;
    Ok(OpcodeResult::Halt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with(values: &[U256]) -> Vm {
        let mut vm = Vm::new(Vec::new(), 1_000);
        for &v in values {
            vm.stack.push(v).unwrap();
        }
        vm
    }

    #[test]
    fn create_pushes_sentinel_address() {
        let mut vm = vm_with(&[U256::zero(), U256::zero(), U256::zero()]);
        op_create(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], sentinel_address());
    }

    #[test]
    fn call_pushes_success() {
        let mut vm = vm_with(&[U256::zero(); 7]);
        op_call(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::one());
    }

    #[test]
    fn delegatecall_pops_six_args() {
        let mut vm = vm_with(&[U256::zero(); 6]);
        op_delegatecall(&mut vm).unwrap();
        assert_eq!(vm.stack.len(), 1);
    }

    #[test]
    fn return_halts_with_the_memory_slice() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.memory.store_byte(0, b'h').unwrap();
        vm.memory.store_byte(1, b'i').unwrap();
        vm.stack.push(U256::zero()).unwrap(); // offset
        vm.stack.push(U256::from(2u64)).unwrap(); // size (top)
        let outcome = op_return(&mut vm).unwrap();
        assert!(matches!(outcome, OpcodeResult::Halt));
        assert_eq!(vm.return_data.as_ref(), b"hi");
        assert!(!vm.reverted);
    }

    #[test]
    fn revert_sets_reverted_flag() {
        let mut vm = vm_with(&[U256::zero(), U256::zero()]);
        let outcome = op_revert(&mut vm).unwrap();
        assert!(matches!(outcome, OpcodeResult::Halt));
        assert!(vm.reverted);
    }

    #[test]
    fn selfdestruct_halts() {
        let mut vm = vm_with(&[U256::zero()]);
        let outcome = op_selfdestruct(&mut vm).unwrap();
        assert!(matches!(outcome, OpcodeResult::Halt));
    }
}
