//! The interpreter core: fetch/decode/dispatch loop over the static
//! opcode table (spec §4.1's "Run"/"Step"), mirroring the teacher's
//! `vm.rs` fetch-charge-dispatch shape but with gas charged centrally in
//! `step` rather than inside each handler.

use crate::errors::{ExceptionalHalt, VMError};
use crate::gas_cost;
use crate::log::LogEntry;
use crate::memory::Memory;
use crate::opcode_handlers::OPCODE_TABLE;
use crate::report::ExecutionReport;
use crate::stack::Stack;
use crate::storage::TransientStorage;
use crate::tracer::Tracer;
use bytes::Bytes;

/// What a handler did to control flow. Gas, the fault taxonomy, and
/// `Halt`/`Revert` live outside this type: a handler either keeps running
/// (`Continue`) or stops the loop (`Halt`), and `vm.reverted` says which
/// kind of stop it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeResult {
    Continue,
    Halt,
}

pub type OpcodeFn = fn(&mut Vm) -> Result<OpcodeResult, VMError>;

pub struct Vm {
    pub(crate) code: Bytes,
    pub(crate) pc: u32,
    pub(crate) stack: Stack,
    pub(crate) memory: Memory,
    pub(crate) storage: TransientStorage,
    pub gas: i64,
    pub(crate) logs: Vec<LogEntry>,
    pub(crate) return_data: Bytes,
    pub(crate) reverted: bool,
}

impl Vm {
    pub fn new(code: impl Into<Bytes>, gas: i64) -> Self {
        Self {
            code: code.into(),
            pc: 0,
            stack: Stack::new(),
            memory: Memory::new(),
            storage: TransientStorage::new(),
            gas,
            logs: Vec::new(),
            return_data: Bytes::new(),
            reverted: false,
        }
    }

    /// Fetches, charges gas for, and dispatches a single opcode. Returns
    /// `Continue` if the run loop should keep stepping, `Halt` once the
    /// code has produced a final outcome (a real halt, or falling off the
    /// end of the bytecode, which behaves like an implicit `STOP`).
    fn step(&mut self, tracer: Option<&mut dyn Tracer>) -> Result<OpcodeResult, VMError> {
        let index = usize::try_from(self.pc).unwrap_or(usize::MAX);
        let Some(&opcode) = self.code.get(index) else {
            self.return_data = Bytes::new();
            self.reverted = false;
            return Ok(OpcodeResult::Halt);
        };

        let cost = gas_cost::cost(opcode);
        self.gas = self.gas.saturating_sub(cost);
        if self.gas < 0 {
            return Err(VMError::from(ExceptionalHalt::OutOfGas));
        }

        if let Some(tracer) = tracer {
            tracer.step(self.pc, opcode, &self.stack, self.gas);
        }

        self.pc = self.pc.wrapping_add(1);

        let handler = OPCODE_TABLE[usize::from(opcode)]
            .ok_or(ExceptionalHalt::InvalidOpcode(opcode))?;
        handler(self)
    }

    /// Runs until a halt, a revert, or a fault. Faults abort with `Err`;
    /// every other outcome — including `REVERT` — comes back as a
    /// successful `ExecutionReport` with `reverted` set accordingly.
    pub fn run(&mut self, mut tracer: Option<&mut dyn Tracer>) -> Result<ExecutionReport, VMError> {
        let initial_gas = self.gas;
        loop {
            match self.step(tracer.as_deref_mut())? {
                OpcodeResult::Continue => continue,
                OpcodeResult::Halt => break,
            }
        }

        let gas_used = u64::try_from(initial_gas.saturating_sub(self.gas)).unwrap_or(0);
        Ok(ExecutionReport {
            return_data: self.return_data.clone(),
            gas_used,
            gas_left: self.gas,
            reverted: self.reverted,
            logs: self.logs.clone(),
        })
    }
}
