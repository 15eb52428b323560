//! Merkle-Patricia trie: lookup, insert/update, and root hash
//! computation over a content-addressed [`TrieDB`].

use crate::db::TrieDB;
use crate::error::TrieError;
use crate::nibbles::Nibbles;
use crate::node::{NodeRef, TrieNode};
use ethereum_types::H256;
use ethrex_crypto::keccak_hash;
use ethrex_rlp::RlpItem;

/// Keccak-256 of the RLP encoding of the empty string — the root hash of a
/// trie that has never had anything inserted into it.
pub fn empty_trie_hash() -> H256 {
    keccak_hash(RlpItem::String(Vec::new()).encode_to_vec())
}

pub struct Trie<DB: TrieDB> {
    db: DB,
    root: Option<NodeRef>,
}

impl<DB: TrieDB> Trie<DB> {
    pub fn new(db: DB) -> Self {
        Trie { db, root: None }
    }

    /// Reopens a trie at a previously computed root hash (used by the
    /// world state to resolve an account's storage sub-trie).
    pub fn open(db: DB, root_hash: H256) -> Self {
        if root_hash == empty_trie_hash() {
            Trie::new(db)
        } else {
            Trie {
                db,
                root: Some(NodeRef::Hashed(root_hash)),
            }
        }
    }

    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, TrieError> {
        self.get_at(self.root.as_ref(), &Nibbles::from_bytes(key))
    }

    pub fn update(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), TrieError> {
        let nibbles = Nibbles::from_bytes(key);
        let root = self.root.take();
        self.root = Some(self.update_at(root, &nibbles, value)?);
        Ok(())
    }

    pub fn root_hash(&self) -> H256 {
        match &self.root {
            None => empty_trie_hash(),
            Some(NodeRef::Hashed(digest)) => *digest,
            // The root is always hashed even when stored inline — callers
            // compare against externally computed root hashes, which are
            // always full digests.
            Some(NodeRef::Inline(node)) => keccak_hash(node.to_rlp_item().encode_to_vec()),
        }
    }

    fn resolve(&self, node_ref: &NodeRef) -> Result<TrieNode, TrieError> {
        match node_ref {
            NodeRef::Inline(node) => Ok((**node).clone()),
            NodeRef::Hashed(digest) => {
                let encoded = self
                    .db
                    .get(*digest)?
                    .ok_or(TrieError::MissingNode(*digest))?;
                let item = RlpItem::decode(&encoded)?;
                TrieNode::from_rlp_item(&item)
            }
        }
    }

    /// Stores `node`, inlining it at the parent reference site if its RLP
    /// is under 32 bytes, otherwise hashing it into the backing store
    ///.
    fn store(&self, node: TrieNode) -> Result<NodeRef, TrieError> {
        let encoded = node.to_rlp_item().encode_to_vec();
        if encoded.len() < 32 {
            return Ok(NodeRef::Inline(Box::new(node)));
        }
        let digest = keccak_hash(&encoded);
        self.db.put(digest, encoded)?;
        Ok(NodeRef::Hashed(digest))
    }

    fn get_at(
        &self,
        node_ref: Option<&NodeRef>,
        key: &Nibbles,
    ) -> Result<Option<Vec<u8>>, TrieError> {
        let Some(node_ref) = node_ref else {
            return Ok(None);
        };
        match self.resolve(node_ref)? {
            TrieNode::Leaf { path, value } => {
                if &path == key {
                    Ok(Some(value))
                } else {
                    Ok(None)
                }
            }
            TrieNode::Extension { path, child } => {
                if key.len() < path.len() || key.take(path.len()) != path {
                    return Ok(None);
                }
                self.get_at(Some(&child), &key.skip(path.len()))
            }
            TrieNode::Branch { children, value } => {
                if key.is_empty() {
                    return Ok(value);
                }
                let idx = usize::from(key.at(0));
                self.get_at(children[idx].as_ref(), &key.skip(1))
            }
        }
    }

    fn update_at(
        &self,
        node_ref: Option<NodeRef>,
        key: &Nibbles,
        value: Vec<u8>,
    ) -> Result<NodeRef, TrieError> {
        let Some(node_ref) = node_ref else {
            return self.store(TrieNode::Leaf {
                path: key.clone(),
                value,
            });
        };

        match self.resolve(&node_ref)? {
            TrieNode::Leaf {
                path,
                value: old_value,
            } => self.split_on_leaf(path, old_value, key, value),
            TrieNode::Extension { path, child } => self.split_on_extension(path, child, key, value),
            TrieNode::Branch {
                mut children,
                mut value: branch_value,
            } => {
                if key.is_empty() {
                    branch_value = Some(value);
                } else {
                    let idx = usize::from(key.at(0));
                    let new_child = self.update_at(children[idx].take(), &key.skip(1), value)?;
                    children[idx] = Some(new_child);
                }
                self.store(TrieNode::Branch {
                    children,
                    value: branch_value,
                })
            }
        }
    }

    fn split_on_leaf(
        &self,
        path: Nibbles,
        old_value: Vec<u8>,
        key: &Nibbles,
        value: Vec<u8>,
    ) -> Result<NodeRef, TrieError> {
        let i = path.common_prefix_len(key);
        if i == path.len() && i == key.len() {
            return self.store(TrieNode::Leaf { path, value });
        }

        let mut children: Box<[Option<NodeRef>; 16]> = Box::new(Default::default());
        let mut branch_value = None;

        if i < path.len() {
            let nibble = path.at(i);
            children[usize::from(nibble)] = Some(self.store(TrieNode::Leaf {
                path: path.skip(i + 1),
                value: old_value,
            })?);
        } else {
            branch_value = Some(old_value);
        }

        if i < key.len() {
            let nibble = key.at(i);
            children[usize::from(nibble)] = Some(self.store(TrieNode::Leaf {
                path: key.skip(i + 1),
                value,
            })?);
        } else {
            branch_value = Some(value);
        }

        let branch_ref = self.store(TrieNode::Branch {
            children,
            value: branch_value,
        })?;

        self.wrap_with_extension(branch_ref, key.take(i))
    }

    fn split_on_extension(
        &self,
        path: Nibbles,
        child: NodeRef,
        key: &Nibbles,
        value: Vec<u8>,
    ) -> Result<NodeRef, TrieError> {
        let i = path.common_prefix_len(key);
        if i == path.len() {
            let new_child = self.update_at(Some(child), &key.skip(i), value)?;
            return self.store(TrieNode::Extension {
                path,
                child: new_child,
            });
        }

        let mut children: Box<[Option<NodeRef>; 16]> = Box::new(Default::default());
        let mut branch_value = None;

        let old_nibble = path.at(i);
        let old_tail = path.skip(i + 1);
        let old_child_ref = if old_tail.is_empty() {
            child
        } else {
            self.store(TrieNode::Extension {
                path: old_tail,
                child,
            })?
        };
        children[usize::from(old_nibble)] = Some(old_child_ref);

        if i < key.len() {
            let new_nibble = key.at(i);
            children[usize::from(new_nibble)] = Some(self.store(TrieNode::Leaf {
                path: key.skip(i + 1),
                value,
            })?);
        } else {
            branch_value = Some(value);
        }

        let branch_ref = self.store(TrieNode::Branch {
            children,
            value: branch_value,
        })?;

        self.wrap_with_extension(branch_ref, path.take(i))
    }

    fn wrap_with_extension(&self, child: NodeRef, path: Nibbles) -> Result<NodeRef, TrieError> {
        if path.is_empty() {
            Ok(child)
        } else {
            self.store(TrieNode::Extension { path, child })
        }
    }
}
