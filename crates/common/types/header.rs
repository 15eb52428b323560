use crate::Address;
use ethereum_types::{H256, U256};
use ethrex_rlp::{
    decode::{RLPDecode, decode_list_payload},
    encode::{RLPEncode, encode_list_payload},
    error::RLPDecodeError,
};

/// A 256-byte bloom filter over the logs a block's receipts emitted.
/// Stored and RLP-encoded as a plain byte string, not interpreted here.
pub type LogsBloom = [u8; 256];

fn encode_bloom(bloom: &LogsBloom, buf: &mut dyn bytes::BufMut) {
    bloom.to_vec().encode(buf);
}

fn decode_bloom(rlp: &[u8]) -> Result<(LogsBloom, &[u8]), RLPDecodeError> {
    let (bytes, rest) = Vec::<u8>::decode_unfinished(rlp)?;
    let bloom: LogsBloom = bytes
        .try_into()
        .map_err(|_| RLPDecodeError::ValueOutOfRange)?;
    Ok((bloom, rest))
}

/// A block header: the 15-field RLP list, in the
/// order `[parent_hash, ommers_hash, coinbase, state_root,
/// transactions_root, receipts_root, logs_bloom, difficulty, number,
/// gas_limit, gas_used, timestamp, extra_data, mix_hash, nonce]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub parent_hash: H256,
    pub ommers_hash: H256,
    pub coinbase: Address,
    pub state_root: H256,
    pub transactions_root: H256,
    pub receipts_root: H256,
    pub logs_bloom: LogsBloom,
    pub difficulty: U256,
    pub number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Vec<u8>,
    pub mix_hash: H256,
    pub nonce: u64,
}

impl BlockHeader {
    /// The header's own RLP encoding, the input to `hash()` and the first
    /// element of a block's RLP.
    pub fn rlp(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// `keccak256(header_rlp)` — the block hash.
    pub fn hash(&self) -> H256 {
        ethrex_crypto::keccak_hash(&self.rlp())
    }
}

impl RLPEncode for BlockHeader {
    fn encode(&self, buf: &mut dyn bytes::BufMut) {
        let mut payload = Vec::new();
        self.parent_hash.encode(&mut payload);
        self.ommers_hash.encode(&mut payload);
        self.coinbase.encode(&mut payload);
        self.state_root.encode(&mut payload);
        self.transactions_root.encode(&mut payload);
        self.receipts_root.encode(&mut payload);
        encode_bloom(&self.logs_bloom, &mut payload);
        self.difficulty.encode(&mut payload);
        self.number.encode(&mut payload);
        self.gas_limit.encode(&mut payload);
        self.gas_used.encode(&mut payload);
        self.timestamp.encode(&mut payload);
        self.extra_data.encode(&mut payload);
        self.mix_hash.encode(&mut payload);
        self.nonce.encode(&mut payload);
        encode_list_payload(&payload, buf);
    }
}

impl RLPDecode for BlockHeader {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_list_payload(rlp)?;
        let (parent_hash, payload) = H256::decode_unfinished(payload)?;
        let (ommers_hash, payload) = H256::decode_unfinished(payload)?;
        let (coinbase, payload) = Address::decode_unfinished(payload)?;
        let (state_root, payload) = H256::decode_unfinished(payload)?;
        let (transactions_root, payload) = H256::decode_unfinished(payload)?;
        let (receipts_root, payload) = H256::decode_unfinished(payload)?;
        let (logs_bloom, payload) = decode_bloom(payload)?;
        let (difficulty, payload) = U256::decode_unfinished(payload)?;
        let (number, payload) = u64::decode_unfinished(payload)?;
        let (gas_limit, payload) = u64::decode_unfinished(payload)?;
        let (gas_used, payload) = u64::decode_unfinished(payload)?;
        let (timestamp, payload) = u64::decode_unfinished(payload)?;
        let (extra_data, payload) = Vec::<u8>::decode_unfinished(payload)?;
        let (mix_hash, payload) = H256::decode_unfinished(payload)?;
        let (nonce, payload) = u64::decode_unfinished(payload)?;
        if !payload.is_empty() {
            return Err(RLPDecodeError::TrailingBytes);
        }
        Ok((
            BlockHeader {
                parent_hash,
                ommers_hash,
                coinbase,
                state_root,
                transactions_root,
                receipts_root,
                logs_bloom,
                difficulty,
                number,
                gas_limit,
                gas_used,
                timestamp,
                extra_data,
                mix_hash,
                nonce,
            },
            rest,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> BlockHeader {
        BlockHeader {
            parent_hash: H256::from([1; 32]),
            ommers_hash: H256::from([2; 32]),
            coinbase: Address::from([3; 20]),
            state_root: H256::from([4; 32]),
            transactions_root: H256::from([5; 32]),
            receipts_root: H256::from([6; 32]),
            logs_bloom: [0u8; 256],
            difficulty: U256::from(17u64),
            number: 100,
            gas_limit: 30_000_000,
            gas_used: 21_000,
            timestamp: 1_700_000_000,
            extra_data: b"demo".to_vec(),
            mix_hash: H256::from([7; 32]),
            nonce: 0,
        }
    }

    #[test]
    fn header_rlp_round_trip() {
        let header = sample_header();
        let encoded = header.rlp();
        let decoded = BlockHeader::decode(&encoded).unwrap();
        assert_eq!(header, decoded);
    }

    #[test]
    fn header_hash_is_keccak_of_its_own_rlp() {
        let header = sample_header();
        assert_eq!(header.hash(), ethrex_crypto::keccak_hash(&header.rlp()));
    }

    #[test]
    fn different_headers_hash_differently() {
        let mut other = sample_header();
        other.number += 1;
        assert_ne!(sample_header().hash(), other.hash());
    }
}
