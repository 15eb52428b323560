//! The outcome of a full interpreter run (spec §4.1 "Run").

use crate::log::LogEntry;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    pub return_data: Bytes,
    pub gas_used: u64,
    pub gas_left: i64,
    pub reverted: bool,
    pub logs: Vec<LogEntry>,
}

impl ExecutionReport {
    /// `false` for `REVERT`; `true` for every other halt (`STOP`, `RETURN`,
    /// `SELFDESTRUCT`, or falling off the end of the code).
    pub fn is_success(&self) -> bool {
        !self.reverted
    }
}
