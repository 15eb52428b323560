use ethereum_types::H256;
use sha3::{Digest, Keccak256};

/// Hashes `data` with Keccak-256, returning the raw 32-byte digest.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// Same as [`keccak256`] but wrapped in [`H256`], the digest type used for
/// trie node references, code hashes, and storage roots.
pub fn keccak_hash(data: impl AsRef<[u8]>) -> H256 {
    H256::from(keccak256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak_of_hello() {
        assert_eq!(
            hex::encode(keccak256(b"hello")),
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }
}
