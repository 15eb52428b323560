//! `LOG0..LOG4` (spec §9: surfaced as a structured event, not a print).

use crate::errors::{ExceptionalHalt, VMError};
use crate::log::LogEntry;
use crate::utils::u256_to_usize;
use crate::vm::{OpcodeResult, Vm};
use bytes::Bytes;
use ethereum_types::H160 as Address;

/// `LOGn`: pops `offset, size`, then `n` topics top-down, and records the
/// memory slice alongside them.
pub fn op_log<const N: usize>(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [offset, size] = vm.stack.pop::<2>()?;
    let offset = u256_to_usize(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let size = u256_to_usize(size).ok_or(ExceptionalHalt::BadMemoryArg)?;
    let data = vm.memory.load_range(offset, size)?;

    let mut topics = Vec::with_capacity(N);
    for _ in 0..N {
        let [topic] = vm.stack.pop::<1>()?;
        let mut bytes32 = [0u8; 32];
        topic.to_big_endian(&mut bytes32);
        topics.push(bytes32.into());
    }

    vm.logs.push(LogEntry {
        address: Address::zero(),
        topics,
        data: Bytes::from(data),
    });
    Ok(OpcodeResult::Continue)
}
