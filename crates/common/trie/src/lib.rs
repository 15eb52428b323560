//! Merkle-Patricia trie with content-addressed node storage.

pub mod db;
pub mod error;
pub mod nibbles;
pub mod node;
#[allow(clippy::module_inception)]
pub mod trie;

pub use db::TrieDB;
pub use error::TrieError;
pub use nibbles::Nibbles;
pub use node::{NodeRef, TrieNode};
pub use trie::{empty_trie_hash, Trie};

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::H256;
    use ethrex_crypto::keccak_hash;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemDb(RefCell<HashMap<H256, Vec<u8>>>);

    impl TrieDB for MemDb {
        fn get(&self, key: H256) -> Result<Option<Vec<u8>>, TrieError> {
            Ok(self.0.borrow().get(&key).cloned())
        }

        fn put(&self, key: H256, value: Vec<u8>) -> Result<(), TrieError> {
            self.0.borrow_mut().insert(key, value);
            Ok(())
        }
    }

    fn new_trie() -> Trie<MemDb> {
        Trie::new(MemDb::default())
    }

    #[test]
    fn empty_trie_root_is_keccak_of_empty_rlp_string() {
        let trie = new_trie();
        assert_eq!(trie.root_hash(), keccak_hash([0x80]));
    }

    #[test]
    fn get_on_empty_trie_is_absent() {
        let trie = new_trie();
        assert_eq!(trie.get(b"dog").unwrap(), None);
    }

    #[test]
    fn single_key_round_trip() {
        let mut trie = new_trie();
        trie.update(b"dog", b"puppy".to_vec()).unwrap();
        assert_eq!(trie.get(b"dog").unwrap(), Some(b"puppy".to_vec()));
        assert_eq!(trie.get(b"cat").unwrap(), None);
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut trie = new_trie();
        trie.update(b"dog", b"puppy".to_vec()).unwrap();
        trie.update(b"dog", b"hound".to_vec()).unwrap();
        assert_eq!(trie.get(b"dog").unwrap(), Some(b"hound".to_vec()));
    }

    const PAIRS: &[(&[u8], &[u8])] = &[
        (b"dog", b"puppy"),
        (b"do", b"verb"),
        (b"cat", b"kitten"),
        (b"fish", b"fishlet"),
    ];

    #[test]
    fn multi_key_functional_map() {
        let mut trie = new_trie();
        for (k, v) in PAIRS {
            trie.update(k, v.to_vec()).unwrap();
        }
        for (k, v) in PAIRS {
            assert_eq!(trie.get(k).unwrap(), Some(v.to_vec()));
        }
        assert_eq!(trie.get(b"cow").unwrap(), None);
    }

    #[test]
    fn root_hash_is_independent_of_insertion_order() {
        let mut roots = Vec::new();
        for perm in permutations(PAIRS) {
            let mut trie = new_trie();
            for (k, v) in perm {
                trie.update(k, v.to_vec()).unwrap();
            }
            roots.push(trie.root_hash());
        }
        assert!(roots.windows(2).all(|w| w[0] == w[1]));
    }

    // Small brute-force permutation generator — PAIRS has 4 elements, so
    // 24 tries is cheap and avoids pulling in itertools for one test.
    fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        if items.is_empty() {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head.clone());
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn leaf_split_produces_extension_when_common_prefix_nonzero() {
        let mut trie = new_trie();
        // Shares the nibble path for 'd' (0x64) before diverging.
        trie.update(b"dog", b"puppy".to_vec()).unwrap();
        trie.update(b"dove", b"bird".to_vec()).unwrap();
        assert_eq!(trie.get(b"dog").unwrap(), Some(b"puppy".to_vec()));
        assert_eq!(trie.get(b"dove").unwrap(), Some(b"bird".to_vec()));
    }

    #[test]
    fn node_round_trips_through_rlp() {
        let leaf = TrieNode::Leaf {
            path: Nibbles::from_bytes(b"x"),
            value: b"y".to_vec(),
        };
        let item = leaf.to_rlp_item();
        let decoded = TrieNode::from_rlp_item(&item).unwrap();
        assert_eq!(leaf, decoded);
    }
}
