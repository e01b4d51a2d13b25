//! Structural comparison of two trees.

use serde::{Deserialize, Serialize};
use tracing::trace;
use trellis_core::{Depth, Node, TreeMap};

use crate::engine::{combine, Symmetry};

/// A change detected at one path when comparing an old and a new tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change<V, M> {
    /// The key exists only in the new tree.
    Added(Node<V, M>),
    /// The key exists only in the old tree.
    Removed(Node<V, M>),
    /// The key exists in both trees with differing values.
    Changed {
        /// The old tree's node.
        old: Node<V, M>,
        /// The new tree's node.
        new: Node<V, M>,
    },
}

/// The change type of a mapping implementation.
pub type ChangeOf<M> = Change<<M as TreeMap>::Value, M>;

impl<V, M> Change<V, M> {
    /// Returns `true` for an addition.
    pub fn is_added(&self) -> bool {
        matches!(self, Change::Added(_))
    }

    /// Returns `true` for a removal.
    pub fn is_removed(&self) -> bool {
        matches!(self, Change::Removed(_))
    }

    /// Returns `true` for a modification.
    pub fn is_changed(&self) -> bool {
        matches!(self, Change::Changed { .. })
    }
}

/// Compare two trees, reporting changes from both sides.
///
/// Walks both trees with [`combine`]: equal nodes are omitted, and at
/// branch-branch keys within `depth` the comparison recurses, so an
/// all-equal subtree contributes nothing at all. Keys only in `old`
/// report [`Change::Removed`], keys only in `new` report
/// [`Change::Added`], and differing present-present pairs report
/// [`Change::Changed`]. Branch pairs at the depth bound are compared
/// whole, like any other opaque value.
///
/// The output is a tree of the same mapping kind as the inputs with
/// [`Change`] leaves; absence of a path means "no difference there".
pub fn diff<M>(old: &M, new: &M, depth: Depth) -> M::Remapped<ChangeOf<M>>
where
    M: TreeMap + Clone + PartialEq,
    M::Value: Clone + PartialEq,
{
    let changes: M::Remapped<ChangeOf<M>> = combine(
        old,
        new,
        depth,
        Symmetry::Symmetric,
        |_, old_node, new_node| match (old_node, new_node) {
            (Some(a), Some(b)) if a == b => None,
            (Some(a), Some(b)) => Some(Node::Leaf(Change::Changed {
                old: a.clone(),
                new: b.clone(),
            })),
            (Some(a), None) => Some(Node::Leaf(Change::Removed(a.clone()))),
            (None, Some(b)) => Some(Node::Leaf(Change::Added(b.clone()))),
            (None, None) => None,
        },
    );
    trace!(top_level_changes = changes.len(), ?depth, "diffed trees");
    changes
}

/// Compare two trees, reporting only where `old`'s values differ.
///
/// Keys exclusive to `new` are never visited; wherever the trees
/// disagree the output holds `old`'s node, so the result is always a
/// sub-tree of `old`.
pub fn diff_asymmetric<M>(old: &M, new: &M, depth: Depth) -> M
where
    M: TreeMap + Clone + PartialEq,
    M::Value: Clone + PartialEq,
{
    combine(
        old,
        new,
        depth,
        Symmetry::Asymmetric,
        |_, old_node, new_node| match (old_node, new_node) {
            (Some(a), Some(b)) if a == b => None,
            (old_node, _) => old_node.cloned(),
        },
    )
}
