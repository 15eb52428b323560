//! Structured log events emitted by `LOG0..LOG4` (spec §9: the source
//! printed these; this core surfaces them as data instead).

use bytes::Bytes;
use ethereum_types::{H160 as Address, H256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// A placeholder zero address: no message-call context in this core
    /// carries a real executing address (see Non-goals). The field stays
    /// so a future caller wiring in a real call frame has somewhere to
    /// put it.
    pub address: Address,
    pub topics: Vec<H256>,
    pub data: Bytes,
}
