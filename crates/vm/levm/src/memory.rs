//! Word-aligned byte-addressable memory (spec §4.3).

use crate::errors::ExceptionalHalt;
use ethereum_types::U256;

#[derive(Debug, Default)]
pub struct Memory {
    buffer: Vec<u8>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Grows the buffer to the least multiple of 32 covering `min_len`,
    /// zero-filling the new bytes. A no-op if already that long or longer
    /// — memory length is non-decreasing within an execution.
    fn resize(&mut self, min_len: usize) {
        let word_aligned = min_len.next_multiple_of(32);
        if word_aligned > self.buffer.len() {
            self.buffer.resize(word_aligned, 0);
        }
    }

    /// `MLOAD`: a 32-byte big-endian word read, zero-extending memory as
    /// needed first.
    pub fn load_word(&mut self, offset: usize) -> Result<U256, ExceptionalHalt> {
        let end = offset.checked_add(32).ok_or(ExceptionalHalt::BadMemoryArg)?;
        self.resize(end);
        let slice = self.buffer.get(offset..end).ok_or(ExceptionalHalt::BadMemoryArg)?;
        Ok(U256::from_big_endian(slice))
    }

    /// `MSTORE`: a 32-byte big-endian word write.
    pub fn store_word(&mut self, offset: usize, value: U256) -> Result<(), ExceptionalHalt> {
        let end = offset.checked_add(32).ok_or(ExceptionalHalt::BadMemoryArg)?;
        self.resize(end);
        let slice = self
            .buffer
            .get_mut(offset..end)
            .ok_or(ExceptionalHalt::BadMemoryArg)?;
        value.to_big_endian(slice);
        Ok(())
    }

    /// `MSTORE8`: stores the value's low byte only.
    pub fn store_byte(&mut self, offset: usize, value: u8) -> Result<(), ExceptionalHalt> {
        let end = offset.checked_add(1).ok_or(ExceptionalHalt::BadMemoryArg)?;
        self.resize(end);
        let slot = self.buffer.get_mut(offset).ok_or(ExceptionalHalt::BadMemoryArg)?;
        *slot = value;
        Ok(())
    }

    /// An arbitrary-length read used by `SHA3`/`RETURN`/`REVERT`; reads
    /// past previously written bytes come back as zero.
    pub fn load_range(&mut self, offset: usize, size: usize) -> Result<Vec<u8>, ExceptionalHalt> {
        if size == 0 {
            return Ok(Vec::new());
        }
        let end = offset.checked_add(size).ok_or(ExceptionalHalt::BadMemoryArg)?;
        self.resize(end);
        let slice = self.buffer.get(offset..end).ok_or(ExceptionalHalt::BadMemoryArg)?;
        Ok(slice.to_vec())
    }
}
