//! `POP`, the memory opcodes (`MLOAD`/`MSTORE`/`MSTORE8`), and transient
//! storage (`SLOAD`/`SSTORE`) — spec §4.1, opcodes `0x50`-`0x55`.

use crate::errors::{ExceptionalHalt, VMError};
use crate::utils::u256_to_usize;
use crate::vm::{OpcodeResult, Vm};

pub fn op_pop(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [_discarded] = vm.stack.pop::<1>()?;
    Ok(OpcodeResult::Continue)
}

pub fn op_mload(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset] = vm.stack.pop::<1>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let value = vm.memory.load_word(offset)?;
    vm.stack.push(value)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_mstore(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset, value] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    vm.memory.store_word(offset, value)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_mstore8(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset, value] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let low_byte = value.byte(0);
    vm.memory.store_byte(offset, low_byte)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_sload(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [key] = vm.stack.pop::<1>()?;
    vm.stack.push(vm.storage.load(key))?;
    Ok(OpcodeResult::Continue)
}

/// `SSTORE`'s operand order is the odd one out: the value sits on top of
/// the stack, the key underneath (every other keyed opcode pops the key
/// alone). Getting this backwards silently swaps key and value instead of
/// failing loudly, so it is called out explicitly here rather than left
/// to be inferred from `pop::<2>`'s generic ordering.
pub fn op_sstore(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [value, key] = vm.stack.pop::<2>()?;
    vm.storage.store(key, value);
    Ok(OpcodeResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::U256;

    #[test]
    fn pop_discards_the_top() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.stack.push(U256::one()).unwrap();
        op_pop(&mut vm).unwrap();
        assert!(vm.stack.is_empty());
    }

    #[test]
    fn mstore_then_mload_round_trips() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.stack.push(U256::from(0xcafeu64)).unwrap(); // value
        vm.stack.push(U256::zero()).unwrap(); // offset
        op_mstore(&mut vm).unwrap();
        vm.stack.push(U256::zero()).unwrap(); // offset
        op_mload(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::from(0xcafeu64));
    }

    #[test]
    fn mstore8_writes_only_the_low_byte() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.stack.push(U256::from(0x1234u64)).unwrap(); // value
        vm.stack.push(U256::zero()).unwrap(); // offset
        op_mstore8(&mut vm).unwrap();
        vm.stack.push(U256::zero()).unwrap();
        op_mload(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::from(0x34u64));
    }

    #[test]
    fn sstore_then_sload_round_trips() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        // SSTORE pops value (top) then key.
        vm.stack.push(U256::from(7u64)).unwrap(); // key
        vm.stack.push(U256::from(42u64)).unwrap(); // value (top)
        op_sstore(&mut vm).unwrap();
        vm.stack.push(U256::from(7u64)).unwrap(); // key
        op_sload(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::from(42u64));
    }

    #[test]
    fn sload_of_an_unwritten_slot_is_zero() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.stack.push(U256::from(1u64)).unwrap();
        op_sload(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::zero());
    }
}
