use std::collections::BTreeMap;
use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::map::TreeMap;
use crate::node::{Node, NodeOf};

/// A key-ordered nested mapping.
///
/// Entries iterate in ascending key order regardless of insertion
/// history.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Ord + Serialize, V: Serialize",
    deserialize = "K: Ord + Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct SortedTree<K, V> {
    entries: BTreeMap<K, Node<V, SortedTree<K, V>>>,
}

/// Iterator over a [`SortedTree`]'s entries in key order.
pub type Iter<'a, K, V> = std::collections::btree_map::Iter<'a, K, Node<V, SortedTree<K, V>>>;

impl<K, V> SortedTree<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Ord, V> SortedTree<K, V> {
    /// The node at `key`, if any.
    pub fn get(&self, key: &K) -> Option<&Node<V, Self>> {
        self.entries.get(key)
    }

    /// Mutable access to the node at `key`, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut Node<V, Self>> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a node at `key`, returning the node it replaced, if any.
    pub fn insert(&mut self, key: K, node: Node<V, Self>) -> Option<Node<V, Self>> {
        self.entries.insert(key, node)
    }

    /// Remove the node at `key`.
    pub fn remove(&mut self, key: &K) -> Option<Node<V, Self>> {
        self.entries.remove(key)
    }
}

impl<K, V> Default for SortedTree<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K, V> Drop for SortedTree<K, V> {
    fn drop(&mut self) {
        // Same work-list unlinking as `Tree`: the generated drop glue
        // recurses once per nesting level.
        if self.entries.is_empty() {
            return;
        }
        let mut pending = vec![mem::take(&mut self.entries)];
        while let Some(level) = pending.pop() {
            for (_, node) in level {
                if let Node::Branch(mut branch) = node {
                    if !branch.entries.is_empty() {
                        pending.push(mem::take(&mut branch.entries));
                    }
                }
            }
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, Node<V, SortedTree<K, V>>)> for SortedTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, Node<V, Self>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> Extend<(K, Node<V, SortedTree<K, V>>)> for SortedTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, Node<V, Self>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a SortedTree<K, V> {
    type Item = (&'a K, &'a Node<V, SortedTree<K, V>>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone, V> TreeMap for SortedTree<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;
    type Remapped<U> = SortedTree<K, U>;

    fn fresh(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        SortedTree::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        SortedTree::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&NodeOf<Self>> {
        SortedTree::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut NodeOf<Self>> {
        SortedTree::get_mut(self, key)
    }

    fn insert(&mut self, key: K, node: NodeOf<Self>) -> Option<NodeOf<Self>> {
        SortedTree::insert(self, key, node)
    }

    fn remove(&mut self, key: &K) -> Option<NodeOf<Self>> {
        SortedTree::remove(self, key)
    }

    fn get_or_insert_with(
        &mut self,
        key: K,
        default: impl FnOnce() -> NodeOf<Self>,
    ) -> &mut NodeOf<Self> {
        self.entries.entry(key).or_insert_with(default)
    }

    fn iter(&self) -> Iter<'_, K, V> {
        SortedTree::iter(self)
    }
}
