use serde::{Deserialize, Serialize};

use crate::map::TreeMap;

/// A value stored in a tree: either an opaque leaf payload or a nested
/// mapping of the same kind as its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node<V, M> {
    /// A terminal payload value.
    Leaf(V),
    /// A nested mapping.
    Branch(M),
}

/// The node type of a mapping implementation.
pub type NodeOf<M> = Node<<M as TreeMap>::Value, M>;

impl<V, M> Node<V, M> {
    /// Returns `true` if this node is a leaf payload.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns `true` if this node is a nested mapping.
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// The leaf payload, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// The nested mapping, if this node is a branch.
    pub fn as_branch(&self) -> Option<&M> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(map) => Some(map),
        }
    }

    /// Mutable access to the nested mapping, if this node is a branch.
    pub fn as_branch_mut(&mut self) -> Option<&mut M> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(map) => Some(map),
        }
    }

    /// Consumes the node, returning the leaf payload if there is one.
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Consumes the node, returning the nested mapping if there is one.
    pub fn into_branch(self) -> Option<M> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(map) => Some(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    type N = Node<i64, Tree<&'static str, i64>>;

    #[test]
    fn leaf_accessors() {
        let node: N = Node::Leaf(7);
        assert!(node.is_leaf());
        assert!(!node.is_branch());
        assert_eq!(node.as_leaf(), Some(&7));
        assert_eq!(node.as_branch(), None);
        assert_eq!(node.into_leaf(), Some(7));
    }

    #[test]
    fn branch_accessors() {
        let node: N = Node::Branch(Tree::new());
        assert!(node.is_branch());
        assert_eq!(node.as_leaf(), None);
        assert!(node.as_branch().is_some());
        assert!(node.into_branch().is_some());
    }
}
