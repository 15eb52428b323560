use ethereum_types::{H256, U256};
use ethrex_rlp::{
    decode::{RLPDecode, decode_list_payload},
    encode::{RLPEncode, encode_list_payload},
    error::RLPDecodeError,
};
use ethrex_trie::empty_trie_hash;

/// keccak256(b"") — the code hash of an account with no code.
pub fn empty_code_hash() -> H256 {
    ethrex_crypto::keccak_hash(&[])
}

/// An account record as stored in the world-state trie: a
/// four-field RLP list `[nonce, balance, storage_root, code_hash]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub nonce: u64,
    pub balance: U256,
    pub storage_root: H256,
    pub code_hash: H256,
}

impl Account {
    /// A freshly touched account: zero nonce and balance, empty storage
    /// trie, no code. Used as the default when `transfer` or `set_storage`
    /// touches an address with no prior record.
    pub fn empty() -> Self {
        Account {
            nonce: 0,
            balance: U256::zero(),
            storage_root: empty_trie_hash(),
            code_hash: empty_code_hash(),
        }
    }
}

impl RLPEncode for Account {
    fn encode(&self, buf: &mut dyn bytes::BufMut) {
        let mut payload = Vec::new();
        self.nonce.encode(&mut payload);
        self.balance.encode(&mut payload);
        self.storage_root.encode(&mut payload);
        self.code_hash.encode(&mut payload);
        encode_list_payload(&payload, buf);
    }
}

impl RLPDecode for Account {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_list_payload(rlp)?;
        let (nonce, payload) = u64::decode_unfinished(payload)?;
        let (balance, payload) = U256::decode_unfinished(payload)?;
        let (storage_root, payload) = H256::decode_unfinished(payload)?;
        let (code_hash, payload) = H256::decode_unfinished(payload)?;
        if !payload.is_empty() {
            return Err(RLPDecodeError::TrailingBytes);
        }
        Ok((
            Account {
                nonce,
                balance,
                storage_root,
                code_hash,
            },
            rest,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h256_from_byte(b: u8) -> H256 {
        H256::from([b; 32])
    }

    #[test]
    fn empty_account_has_canonical_storage_and_code_hashes() {
        let acct = Account::empty();
        assert_eq!(acct.storage_root, empty_trie_hash());
        assert_eq!(acct.code_hash, empty_code_hash());
        // The two "empty" hashes are computed over different inputs
        // (RLP("") vs raw b"") and must not collide.
        assert_ne!(acct.storage_root, acct.code_hash);
    }

    #[test]
    fn account_rlp_round_trip() {
        let acct = Account {
            nonce: 7,
            balance: U256::from(1_000_000u64),
            storage_root: h256_from_byte(0x11),
            code_hash: h256_from_byte(0x22),
        };
        let encoded = acct.encode_to_vec();
        let decoded = Account::decode(&encoded).unwrap();
        assert_eq!(acct, decoded);
    }

    #[test]
    fn empty_account_rlp_round_trip() {
        let acct = Account::empty();
        let encoded = acct.encode_to_vec();
        let decoded = Account::decode(&encoded).unwrap();
        assert_eq!(acct, decoded);
    }
}
