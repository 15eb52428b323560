//! Fixed per-opcode gas costs (spec §4.1's table, preserved verbatim).
//! Quadratic memory expansion and SSTORE net-gas metering are deferred —
//! every opcode here charges a single constant regardless of its operands.

pub const ZERO: i64 = 0;
pub const BASE: i64 = 2;
pub const VERYLOW: i64 = 3;
pub const MID: i64 = 8;
pub const JUMPDEST: i64 = 1;
pub const SHA3: i64 = 30;
pub const SLOAD: i64 = 100;
pub const SSTORE: i64 = 20_000;
pub const LOGN: i64 = 375;
pub const CALL: i64 = 700;
pub const CREATE: i64 = 32_000;
pub const SELFDESTRUCT: i64 = 5_000;

/// The fixed gas cost charged before an opcode dispatches. Opcodes with no
/// handler return `0`; the dispatch table, not this function, is what
/// turns them into an `InvalidOpcode` fault.
pub const fn cost(opcode: u8) -> i64 {
    match opcode {
        0x00 => ZERO,                       // STOP
        0x01 | 0x03 => VERYLOW,             // ADD, SUB
        0x02 | 0x04 | 0x05 | 0x06 => MID,   // MUL, DIV, SDIV, MOD
        0x20 => SHA3,                        // SHA3
        0x50 => BASE,                        // POP
        0x51 | 0x52 | 0x53 => VERYLOW,       // MLOAD, MSTORE, MSTORE8
        0x54 => SLOAD,                       // SLOAD
        0x55 => SSTORE,                      // SSTORE
        0x56 | 0x57 => BASE,                 // JUMP, JUMPI
        0x5b => JUMPDEST,                    // JUMPDEST
        0x5f => BASE,                        // PUSH0
        0x60..=0x7f => VERYLOW,              // PUSH1..PUSH32
        0x80..=0x8f => VERYLOW,              // DUP1..DUP16
        0x90..=0x9f => VERYLOW,              // SWAP1..SWAP16
        0xa0..=0xa4 => LOGN,                 // LOG0..LOG4
        0xf0 | 0xf5 => CREATE,               // CREATE, CREATE2
        0xf1 | 0xf2 | 0xf4 | 0xfa => CALL,   // CALL, CALLCODE, DELEGATECALL, STATICCALL
        0xf3 | 0xfd => ZERO,                 // RETURN, REVERT
        0xff => SELFDESTRUCT,                // SELFDESTRUCT
        _ => ZERO,
    }
}
