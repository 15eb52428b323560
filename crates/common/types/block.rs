use crate::types::BlockHeader;
use ethrex_rlp::{
    decode::{RLPDecode, decode_list_payload},
    encode::{RLPEncode, encode_list_payload},
    error::RLPDecodeError,
};

/// A block: `[header_rlp, [tx_bytes…], [ommer_header_rlp…]]`.
/// Transactions and ommer headers are kept as their own already-encoded
/// byte strings rather than typed records — the transaction format itself
/// is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Vec<u8>>,
    pub ommers: Vec<Vec<u8>>,
}

impl RLPEncode for Block {
    fn encode(&self, buf: &mut dyn bytes::BufMut) {
        let mut payload = Vec::new();
        self.header.encode(&mut payload);
        self.transactions.encode(&mut payload);
        self.ommers.encode(&mut payload);
        encode_list_payload(&payload, buf);
    }
}

impl RLPDecode for Block {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_list_payload(rlp)?;
        let (header, payload) = BlockHeader::decode_unfinished(payload)?;
        let (transactions, payload) = Vec::<Vec<u8>>::decode_unfinished(payload)?;
        let (ommers, payload) = Vec::<Vec<u8>>::decode_unfinished(payload)?;
        if !payload.is_empty() {
            return Err(RLPDecodeError::TrailingBytes);
        }
        Ok((
            Block {
                header,
                transactions,
                ommers,
            },
            rest,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Address;
    use ethereum_types::{H256, U256};

    fn sample_header() -> BlockHeader {
        BlockHeader {
            parent_hash: H256::zero(),
            ommers_hash: H256::zero(),
            coinbase: Address::zero(),
            state_root: H256::zero(),
            transactions_root: H256::zero(),
            receipts_root: H256::zero(),
            logs_bloom: [0u8; 256],
            difficulty: U256::zero(),
            number: 0,
            gas_limit: 0,
            gas_used: 0,
            timestamp: 0,
            extra_data: Vec::new(),
            mix_hash: H256::zero(),
            nonce: 0,
        }
    }

    #[test]
    fn block_rlp_round_trip_with_no_transactions_or_ommers() {
        let block = Block {
            header: sample_header(),
            transactions: Vec::new(),
            ommers: Vec::new(),
        };
        let encoded = block.encode_to_vec();
        let decoded = Block::decode(&encoded).unwrap();
        assert_eq!(block, decoded);
    }

    #[test]
    fn block_rlp_round_trip_with_payload() {
        let block = Block {
            header: sample_header(),
            transactions: vec![vec![0xde, 0xad], vec![0xbe, 0xef, 0x01]],
            ommers: vec![sample_header().encode_to_vec()],
        };
        let encoded = block.encode_to_vec();
        let decoded = Block::decode(&encoded).unwrap();
        assert_eq!(block, decoded);
    }
}
