//! Trie node variants, expressed as a tagged union rather than the
//! reference implementation's untyped two/seventeen-element lists.

use crate::error::TrieError;
use crate::nibbles::Nibbles;
use ethereum_types::H256;
use ethrex_rlp::RlpItem;

/// A child reference: either embedded by value (its RLP is under 32
/// bytes) or keyed by its Keccak-256 digest in the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    Inline(Box<TrieNode>),
    Hashed(H256),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    Leaf {
        path: Nibbles,
        value: Vec<u8>,
    },
    Extension {
        path: Nibbles,
        child: NodeRef,
    },
    Branch {
        children: Box<[Option<NodeRef>; 16]>,
        value: Option<Vec<u8>>,
    },
}

impl TrieNode {
    pub fn new_branch() -> Self {
        TrieNode::Branch {
            children: Box::new(Default::default()),
            value: None,
        }
    }

    pub fn to_rlp_item(&self) -> RlpItem {
        match self {
            TrieNode::Leaf { path, value } => RlpItem::List(vec![
                RlpItem::String(path.hex_prefix_encode(true)),
                RlpItem::String(value.clone()),
            ]),
            TrieNode::Extension { path, child } => RlpItem::List(vec![
                RlpItem::String(path.hex_prefix_encode(false)),
                child.to_rlp_item(),
            ]),
            TrieNode::Branch { children, value } => {
                let mut items: Vec<RlpItem> = children
                    .iter()
                    .map(|child| match child {
                        Some(child) => child.to_rlp_item(),
                        None => RlpItem::String(Vec::new()),
                    })
                    .collect();
                items.push(RlpItem::String(value.clone().unwrap_or_default()));
                RlpItem::List(items)
            }
        }
    }

    pub fn from_rlp_item(item: &RlpItem) -> Result<Self, TrieError> {
        let fields = item
            .as_list()
            .ok_or_else(|| TrieError::InvalidNodeStructure("expected a list".into()))?;
        match fields.len() {
            2 => {
                let path_bytes = fields[0]
                    .as_string()
                    .ok_or_else(|| TrieError::InvalidNodeStructure("path must be bytes".into()))?;
                let (path, is_leaf) = Nibbles::hex_prefix_decode(path_bytes);
                if is_leaf {
                    let value = fields[1]
                        .as_string()
                        .ok_or_else(|| TrieError::InvalidNodeStructure("leaf value must be bytes".into()))?
                        .to_vec();
                    Ok(TrieNode::Leaf { path, value })
                } else {
                    let child = NodeRef::from_rlp_item(&fields[1])?;
                    Ok(TrieNode::Extension { path, child })
                }
            }
            17 => {
                let mut children: Box<[Option<NodeRef>; 16]> = Box::new(Default::default());
                for (i, slot) in children.iter_mut().enumerate() {
                    *slot = NodeRef::from_rlp_item_opt(&fields[i])?;
                }
                let terminator = fields[16]
                    .as_string()
                    .ok_or_else(|| TrieError::InvalidNodeStructure("branch value must be bytes".into()))?;
                let value = if terminator.is_empty() {
                    None
                } else {
                    Some(terminator.to_vec())
                };
                Ok(TrieNode::Branch { children, value })
            }
            n => Err(TrieError::InvalidNodeStructure(format!(
                "node must have 2 or 17 fields, got {n}"
            ))),
        }
    }
}

impl NodeRef {
    fn to_rlp_item(&self) -> RlpItem {
        match self {
            NodeRef::Inline(node) => node.to_rlp_item(),
            NodeRef::Hashed(digest) => RlpItem::String(digest.as_bytes().to_vec()),
        }
    }

    /// Decodes a non-optional child slot (extension child), which must be
    /// present.
    fn from_rlp_item(item: &RlpItem) -> Result<Self, TrieError> {
        match item {
            RlpItem::List(_) => Ok(NodeRef::Inline(Box::new(TrieNode::from_rlp_item(item)?))),
            RlpItem::String(bytes) if bytes.len() == 32 => {
                Ok(NodeRef::Hashed(H256::from_slice(bytes)))
            }
            RlpItem::String(bytes) => Err(TrieError::InvalidNodeStructure(format!(
                "child reference must be 32 bytes or an inline node, got {} bytes",
                bytes.len()
            ))),
        }
    }

    /// Decodes a branch child slot, where an empty byte string means "no
    /// child".
    fn from_rlp_item_opt(item: &RlpItem) -> Result<Option<Self>, TrieError> {
        match item {
            RlpItem::String(bytes) if bytes.is_empty() => Ok(None),
            other => Ok(Some(NodeRef::from_rlp_item(other)?)),
        }
    }
}
