//! `SHA3` (`0x20`): Keccak-256 of a memory slice (spec §4.1).

use crate::errors::{ExceptionalHalt, VMError};
use crate::utils::u256_to_usize;
use crate::vm::{OpcodeResult, Vm};
use ethereum_types::U256;

pub fn op_sha3(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset, size] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let size = u256_to_usize(size).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let data = vm.memory.load_range(offset, size)?;
    let digest = ethrex_crypto::keccak256(&data);
    vm.stack.push(U256::from_big_endian(&digest))?;
    Ok(OpcodeResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_a_memory_slice() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        vm.memory.store_byte(0, b'h').unwrap();
        vm.memory.store_byte(1, b'i').unwrap();
        vm.stack.push(U256::from(2u64)).unwrap(); // size
        vm.stack.push(U256::zero()).unwrap(); // offset
        op_sha3(&mut vm).unwrap();
        let top = vm.stack.pop::<1>().unwrap()[0];
        let mut expected = [0u8; 32];
        top.to_big_endian(&mut expected);
        assert_eq!(hex::encode(expected), hex::encode(ethrex_crypto::keccak256(b"hi")));
    }
}
