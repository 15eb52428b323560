//! Optional step-by-step observation hook (spec §6 "Tracer hook").

use crate::stack::Stack;

/// Invoked once per opcode, before dispatch. Mirrors the teacher's
/// `debugger_hook` pattern: a single trait object observing every step,
/// rather than a closure threaded through each handler.
pub trait Tracer {
    fn step(&mut self, pc: u32, opcode: u8, stack: &Stack, gas_left: i64);
}
