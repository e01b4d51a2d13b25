//! Leaf enumeration and whole-tree rebuilds.

use trellis_core::{Depth, Node, NodeOf, TreeMap};

use crate::error::PathResult;
use crate::mutate::set;

/// Depth-first enumeration of a tree's leaves, created by [`leaves`].
pub struct Leaves<'t, M: TreeMap + 't> {
    stack: Vec<M::Iter<'t>>,
    path: Vec<M::Key>,
    depth: Depth,
}

/// Enumerate `(path, node)` pairs for every leaf reachable within
/// `depth` key-levels, depth-first, in each mapping's native order.
///
/// A node sitting at exactly the depth bound is yielded whole, branch
/// or not; with `Depth::Unbounded` only true leaves are yielded. Empty
/// branches contribute no pairs. The iterator walks lazily and borrows
/// the tree for its lifetime, so the tree cannot be modified mid-walk.
pub fn leaves<M: TreeMap>(root: &M, depth: Depth) -> Leaves<'_, M> {
    Leaves {
        stack: vec![root.iter()],
        path: Vec::new(),
        depth,
    }
}

impl<'t, M: TreeMap + 't> Iterator for Leaves<'t, M>
where
    M::Value: 't,
{
    type Item = (Vec<M::Key>, &'t NodeOf<M>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entries) = self.stack.last_mut() {
            match entries.next() {
                Some((key, Node::Branch(branch))) if self.depth.allows(self.path.len() + 1) => {
                    self.path.push(key.clone());
                    self.stack.push(branch.iter());
                }
                Some((key, node)) => {
                    let mut leaf_path = self.path.clone();
                    leaf_path.push(key.clone());
                    return Some((leaf_path, node));
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
        None
    }
}

/// Rebuild a structurally independent tree by replaying [`leaves`]
/// through [`set`] into a fresh mapping of the root's kind.
///
/// Nodes sitting at the depth bound are cloned whole, sub-branches and
/// all.
pub fn copy<M>(root: &M, depth: Depth) -> M
where
    M: TreeMap + Clone,
    M::Value: Clone,
    M::Key: core::fmt::Debug,
{
    let mut replica = root.fresh();
    for (path, node) in leaves(root, depth) {
        set(&mut replica, &path, node.clone())
            .expect("leaf paths are non-empty and never cross a leaf");
    }
    replica
}

/// Apply a sequence of `(path, node)` pairs to `root` via [`set`].
///
/// Pairs are applied in order, so later entries overwrite earlier ones
/// at the same path.
pub fn extend<M, I>(root: &mut M, entries: I) -> PathResult<(), M::Key>
where
    M: TreeMap,
    I: IntoIterator<Item = (Vec<M::Key>, NodeOf<M>)>,
{
    for (path, node) in entries {
        set(root, &path, node)?;
    }
    Ok(())
}

/// Build a tree from `(path, node)` pairs, starting from an empty
/// mapping.
pub fn from_entries<M, I>(entries: I) -> PathResult<M, M::Key>
where
    M: TreeMap,
    I: IntoIterator<Item = (Vec<M::Key>, NodeOf<M>)>,
{
    let mut root = M::default();
    extend(&mut root, entries)?;
    Ok(root)
}
