//! A stack-based 256-bit interpreter (spec §4.1–4.4): opcode dispatch,
//! modular arithmetic, word-aligned memory, per-execution transient
//! storage, fixed per-opcode gas accounting, and revertible faulting.
//!
//! Message-call sub-contexts, precompiles, and dynamic gas refinement are
//! explicitly out of scope — see [`vm::Vm`] and `opcode_handlers::system`
//! for the stubs that stand in for them.

pub mod errors;
pub mod gas_cost;
pub mod log;
pub mod memory;
pub mod opcode_handlers;
pub mod report;
pub mod stack;
pub mod storage;
pub mod tracer;
mod utils;
pub mod vm;

pub use errors::{ExceptionalHalt, VMError};
pub use log::LogEntry;
pub use report::ExecutionReport;
pub use tracer::Tracer;
pub use vm::Vm;
