//! Untyped RLP value, used where a structure mixes byte strings and nested
//! lists in a way the typed [`crate::RLPEncode`]/[`crate::RLPDecode`] traits
//! can't express directly — most notably trie nodes, whose branch slots are
//! either an inline sub-node (a list) or a 32-byte hash (a string).

use crate::decode::{decode_bytes, decode_list_payload};
use crate::encode::{encode_bytes, encode_list_payload};
use crate::error::RLPDecodeError;
use bytes::BufMut;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    String(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            RlpItem::String(bytes) => Some(bytes),
            RlpItem::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::List(items) => Some(items),
            RlpItem::String(_) => None,
        }
    }

    pub fn encode(&self, buf: &mut dyn BufMut) {
        match self {
            RlpItem::String(bytes) => encode_bytes(bytes, buf),
            RlpItem::List(items) => {
                let mut payload = Vec::new();
                for item in items {
                    item.encode(&mut payload);
                }
                encode_list_payload(&payload, buf);
            }
        }
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }

    /// Decodes a single item, returning it along with whatever trails it in
    /// `data`. This is the recursive `_decode_item` from the RLP reference:
    /// a byte-string prefix (`<= 0xbf`) decodes to a `String`, anything
    /// else is a list whose payload is decoded element by element.
    pub fn decode_unfinished(data: &[u8]) -> Result<(RlpItem, &[u8]), RLPDecodeError> {
        let first = *data.first().ok_or(RLPDecodeError::InvalidLength)?;
        if first <= 0xbf {
            let (bytes, rest) = decode_bytes(data)?;
            Ok((RlpItem::String(bytes.to_vec()), rest))
        } else {
            let (mut payload, rest) = decode_list_payload(data)?;
            let mut items = Vec::new();
            while !payload.is_empty() {
                let (item, remaining) = RlpItem::decode_unfinished(payload)?;
                items.push(item);
                payload = remaining;
            }
            Ok((RlpItem::List(items), rest))
        }
    }

    pub fn decode(data: &[u8]) -> Result<RlpItem, RLPDecodeError> {
        let (item, rest) = RlpItem::decode_unfinished(data)?;
        if !rest.is_empty() {
            return Err(RLPDecodeError::TrailingBytes);
        }
        Ok(item)
    }
}
