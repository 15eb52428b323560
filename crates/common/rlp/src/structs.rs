//! Length-prefix framing shared by the bytes and list encodings.

use bytes::BufMut;

/// Writes the RLP length header `offset + len` (short form, `len < 56`) or
/// `offset + 55 + len(be(len))` followed by `be(len)` (long form).
#[allow(clippy::as_conversions)]
pub fn encode_length(len: usize, offset: u8, buf: &mut dyn BufMut) {
    if len < 56 {
        buf.put_u8(offset + len as u8);
    } else {
        let len_bytes = minimal_be_bytes(len as u64);
        buf.put_u8(offset + 55 + len_bytes.len() as u8);
        buf.put_slice(&len_bytes);
    }
}

/// Minimal big-endian encoding of `value`, empty for zero.
pub fn minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first_nonzero = bytes.iter().position(|&b| b != 0);
    match first_nonzero {
        None => Vec::new(),
        Some(idx) => bytes[idx..].to_vec(),
    }
}

pub fn be_bytes_to_u64(bytes: &[u8]) -> Option<u64> {
    if bytes.len() > 8 {
        return None;
    }
    let mut buf = [0u8; 8];
    buf[8 - bytes.len()..].copy_from_slice(bytes);
    Some(u64::from_be_bytes(buf))
}
