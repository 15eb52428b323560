use crate::error::RLPDecodeError;
use crate::structs::be_bytes_to_u64;
use bytes::Bytes;
use ethereum_types::{H160, H256, U256};

/// Types that can be reconstructed from an RLP buffer.
///
/// `decode_unfinished` returns the remaining, still-undecoded slice so
/// callers can decode a value that is itself a field inside a larger list
/// (the trie decodes node field lists this way).
pub trait RLPDecode: Sized {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError>;

    fn decode(rlp: &[u8]) -> Result<Self, RLPDecodeError> {
        let (value, rest) = Self::decode_unfinished(rlp)?;
        if !rest.is_empty() {
            return Err(RLPDecodeError::TrailingBytes);
        }
        Ok(value)
    }
}

/// Splits the byte-string payload at the current position, returning
/// `(payload, rest)`. Mirrors the Python reference's `_decode_item` for the
/// `prefix <= 0xbf` branch.
pub fn decode_bytes(data: &[u8]) -> Result<(&[u8], &[u8]), RLPDecodeError> {
    let first = *data.first().ok_or(RLPDecodeError::InvalidLength)?;
    match first {
        0..=0x7f => Ok(data.split_at(1)),
        0x80..=0xb7 => {
            let len = usize::from(first - 0x80);
            split_payload(&data[1..], len)
        }
        0xb8..=0xbf => {
            let lenlen = usize::from(first - 0xb7);
            let (len_bytes, rest) = split_payload(&data[1..], lenlen)?;
            let len = be_bytes_to_u64(len_bytes).ok_or(RLPDecodeError::MalformedLength)?;
            split_payload(rest, usize::try_from(len).map_err(|_| RLPDecodeError::ValueOutOfRange)?)
        }
        _ => Err(RLPDecodeError::UnexpectedList),
    }
}

/// Splits the list payload at the current position, returning the raw
/// concatenated child encodings and the rest of the buffer after the list.
pub fn decode_list_payload(data: &[u8]) -> Result<(&[u8], &[u8]), RLPDecodeError> {
    let first = *data.first().ok_or(RLPDecodeError::InvalidLength)?;
    match first {
        0xc0..=0xf7 => {
            let len = usize::from(first - 0xc0);
            split_payload(&data[1..], len)
        }
        0xf8..=0xff => {
            let lenlen = usize::from(first - 0xf7);
            let (len_bytes, rest) = split_payload(&data[1..], lenlen)?;
            let len = be_bytes_to_u64(len_bytes).ok_or(RLPDecodeError::MalformedLength)?;
            split_payload(rest, usize::try_from(len).map_err(|_| RLPDecodeError::ValueOutOfRange)?)
        }
        _ => Err(RLPDecodeError::UnexpectedString),
    }
}

fn split_payload(data: &[u8], len: usize) -> Result<(&[u8], &[u8]), RLPDecodeError> {
    if data.len() < len {
        return Err(RLPDecodeError::InvalidLength);
    }
    Ok(data.split_at(len))
}

impl RLPDecode for Vec<u8> {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (bytes, rest) = decode_bytes(rlp)?;
        Ok((bytes.to_vec(), rest))
    }
}

impl RLPDecode for Bytes {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (bytes, rest) = Vec::<u8>::decode_unfinished(rlp)?;
        Ok((Bytes::from(bytes), rest))
    }
}

macro_rules! impl_decode_for_uint {
    ($t:ty) => {
        impl RLPDecode for $t {
            fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
                let (bytes, rest) = decode_bytes(rlp)?;
                if bytes.len() > std::mem::size_of::<$t>() {
                    return Err(RLPDecodeError::ValueOutOfRange);
                }
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf[std::mem::size_of::<$t>() - bytes.len()..].copy_from_slice(bytes);
                Ok((<$t>::from_be_bytes(buf), rest))
            }
        }
    };
}

impl_decode_for_uint!(u8);
impl_decode_for_uint!(u16);
impl_decode_for_uint!(u32);
impl_decode_for_uint!(u64);

impl RLPDecode for U256 {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (bytes, rest) = decode_bytes(rlp)?;
        if bytes.len() > 32 {
            return Err(RLPDecodeError::ValueOutOfRange);
        }
        Ok((U256::from_big_endian(bytes), rest))
    }
}

impl RLPDecode for H256 {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (bytes, rest) = decode_bytes(rlp)?;
        if bytes.len() > 32 {
            return Err(RLPDecodeError::ValueOutOfRange);
        }
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(bytes);
        Ok((H256::from(buf), rest))
    }
}

impl RLPDecode for H160 {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (bytes, rest) = decode_bytes(rlp)?;
        if bytes.len() > 20 {
            return Err(RLPDecodeError::ValueOutOfRange);
        }
        let mut buf = [0u8; 20];
        buf[20 - bytes.len()..].copy_from_slice(bytes);
        Ok((H160::from(buf), rest))
    }
}

impl<T: RLPDecode> RLPDecode for Vec<T> {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (mut payload, rest) = decode_list_payload(rlp)?;
        let mut items = Vec::new();
        while !payload.is_empty() {
            let (item, remaining) = T::decode_unfinished(payload)?;
            items.push(item);
            payload = remaining;
        }
        Ok((items, rest))
    }
}
