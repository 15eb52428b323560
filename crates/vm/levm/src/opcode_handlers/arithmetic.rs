//! `STOP` and the six arithmetic opcodes (spec §4.1, opcodes `0x00`-`0x06`).
//! Every result wraps modulo 2²⁵⁶ via `U256`'s `overflowing_*`/`checked_*`
//! methods rather than raw operators, the same way the teacher's
//! `opcode_handlers/arithmetic.rs` avoids a bare `a + b` on stack words.

use crate::errors::VMError;
use crate::vm::{OpcodeResult, Vm};
use ethereum_types::U256;

pub fn op_stop(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    vm.return_data = bytes::Bytes::new();
    vm.reverted = false;
    Ok(OpcodeResult::Halt)
}

pub fn op_add(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    vm.stack.push(a.overflowing_add(b).0)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_mul(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    vm.stack.push(a.overflowing_mul(b).0)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_sub(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    vm.stack.push(a.overflowing_sub(b).0)?;
    Ok(OpcodeResult::Continue)
}

pub fn op_div(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    vm.stack.push(a.checked_div(b).unwrap_or(U256::zero()))?;
    Ok(OpcodeResult::Continue)
}

pub fn op_mod(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    vm.stack.push(a.checked_rem(b).unwrap_or(U256::zero()))?;
    Ok(OpcodeResult::Continue)
}

/// `true` iff the word's two's-complement sign bit (the top bit of a
/// 256-bit word) is set.
fn is_negative(value: U256) -> bool {
    value.bit(255)
}

/// Two's-complement negation, wrapping mod 2²⁵⁶ like every other
/// arithmetic opcode — in particular `negate(MIN_I256) == MIN_I256`.
fn negate(value: U256) -> U256 {
    (!value).overflowing_add(U256::one()).0
}

fn abs(value: U256) -> U256 {
    if is_negative(value) {
        negate(value)
    } else {
        value
    }
}

pub fn op_sdiv(vm: &mut Vm) -> Result<OpcodeResult, VMError> {
    let [a, b] = vm.stack.pop::<2>()?;
    if b.is_zero() {
        vm.stack.push(U256::zero())?;
        return Ok(OpcodeResult::Continue);
    }
    let negative_result = is_negative(a) != is_negative(b);
    let magnitude = abs(a).checked_div(abs(b)).unwrap_or(U256::zero());
    let result = if negative_result { negate(magnitude) } else { magnitude };
    vm.stack.push(result)?;
    Ok(OpcodeResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with(values: &[U256]) -> Vm {
        let mut vm = Vm::new(Vec::new(), 1_000_000);
        for &v in values {
            vm.stack.push(v).unwrap();
        }
        vm
    }

    #[test]
    fn add_wraps_on_overflow() {
        let mut vm = vm_with(&[U256::one(), U256::MAX]);
        op_add(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::zero());
    }

    #[test]
    fn sub_computes_top_minus_second() {
        // stack top-down after pushes [4, 10] is [10, 4]; SUB pops a=10 (top), b=4.
        let mut vm = vm_with(&[U256::from(4u64), U256::from(10u64)]);
        op_sub(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::from(6u64));
    }

    #[test]
    fn div_by_zero_is_zero() {
        let mut vm = vm_with(&[U256::zero(), U256::from(10u64)]);
        op_div(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::zero());
    }

    #[test]
    fn mod_by_zero_is_zero() {
        let mut vm = vm_with(&[U256::zero(), U256::from(10u64)]);
        op_mod(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::zero());
    }

    #[test]
    fn sdiv_of_two_negatives_is_positive() {
        let neg_two = negate(U256::from(2u64));
        let neg_ten = negate(U256::from(10u64));
        // top=a=-10, second=b=-2 -> -10 / -2 = 5
        let mut vm = vm_with(&[neg_two, neg_ten]);
        op_sdiv(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], U256::from(5u64));
    }

    #[test]
    fn sdiv_mixed_signs_is_negative() {
        let neg_ten = negate(U256::from(10u64));
        // top=a=-10, second=b=2 -> -5
        let mut vm = vm_with(&[U256::from(2u64), neg_ten]);
        op_sdiv(&mut vm).unwrap();
        assert_eq!(vm.stack.pop::<1>().unwrap()[0], negate(U256::from(5u64)));
    }

    #[test]
    fn stop_halts_with_empty_return_data() {
        let mut vm = Vm::new(Vec::new(), 1_000);
        let outcome = op_stop(&mut vm).unwrap();
        assert!(matches!(outcome, OpcodeResult::Halt));
        assert_eq!(vm.return_data.len(), 0);
        assert!(!vm.reverted);
    }
}
