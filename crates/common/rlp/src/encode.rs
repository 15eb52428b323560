use crate::structs::{encode_length, minimal_be_bytes};
use bytes::{BufMut, Bytes};
use ethereum_types::{H160, H256, U256};

/// Types that know how to serialize themselves as an RLP `bytes | list`
/// value.
pub trait RLPEncode {
    fn encode(&self, buf: &mut dyn BufMut);

    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }

    /// Length of this value's encoding, without materializing it twice for
    /// callers that only need the byte count (list-length headers do).
    fn length(&self) -> usize {
        self.encode_to_vec().len()
    }
}

/// Encodes a raw byte string: itself if it is a single byte `< 0x80`,
/// otherwise a length header followed by the payload.
pub fn encode_bytes(value: &[u8], buf: &mut dyn BufMut) {
    if value.len() == 1 && value[0] < 0x80 {
        buf.put_u8(value[0]);
    } else {
        encode_length(value.len(), 0x80, buf);
        buf.put_slice(value);
    }
}

/// Encodes a list whose children have already been concatenated into
/// `payload`.
pub fn encode_list_payload(payload: &[u8], buf: &mut dyn BufMut) {
    encode_length(payload.len(), 0xc0, buf);
    buf.put_slice(payload);
}

impl RLPEncode for [u8] {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self, buf);
    }
}

impl RLPEncode for Vec<u8> {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self, buf);
    }
}

impl RLPEncode for Bytes {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self, buf);
    }
}

macro_rules! impl_encode_for_uint {
    ($t:ty) => {
        impl RLPEncode for $t {
            fn encode(&self, buf: &mut dyn BufMut) {
                encode_bytes(&minimal_be_bytes(u64::from(*self)), buf);
            }
        }
    };
}

impl_encode_for_uint!(u8);
impl_encode_for_uint!(u16);
impl_encode_for_uint!(u32);
impl_encode_for_uint!(u64);

impl RLPEncode for U256 {
    fn encode(&self, buf: &mut dyn BufMut) {
        if self.is_zero() {
            encode_bytes(&[], buf);
            return;
        }
        let mut be = [0u8; 32];
        self.to_big_endian(&mut be);
        let first_nonzero = be.iter().position(|&b| b != 0).unwrap_or(32);
        encode_bytes(&be[first_nonzero..], buf);
    }
}

impl RLPEncode for H256 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_bytes(), buf);
    }
}

impl RLPEncode for H160 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_bytes(), buf);
    }
}

impl<T: RLPEncode> RLPEncode for Vec<T> {
    fn encode(&self, buf: &mut dyn BufMut) {
        let mut payload = Vec::new();
        for item in self {
            item.encode(&mut payload);
        }
        encode_list_payload(&payload, buf);
    }
}

impl<T: RLPEncode> RLPEncode for &[T] {
    fn encode(&self, buf: &mut dyn BufMut) {
        let mut payload = Vec::new();
        for item in *self {
            item.encode(&mut payload);
        }
        encode_list_payload(&payload, buf);
    }
}
