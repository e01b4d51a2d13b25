use std::fmt;
use std::hash::Hash;
use std::mem;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::map::TreeMap;
use crate::node::{Node, NodeOf};

/// An insertion-ordered nested mapping.
///
/// Entries iterate in the order they were first inserted, and removal
/// preserves the order of the remaining entries. Equality is
/// order-insensitive: two trees are equal when they hold the same entries,
/// regardless of insertion history.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Hash + Eq + Serialize, V: Serialize",
    deserialize = "K: Hash + Eq + Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct Tree<K, V> {
    entries: IndexMap<K, Node<V, Tree<K, V>>>,
}

/// Iterator over a [`Tree`]'s entries in insertion order.
pub type Iter<'a, K, V> = indexmap::map::Iter<'a, K, Node<V, Tree<K, V>>>;

impl<K, V> Tree<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> Tree<K, V> {
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
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, node: Node<V, Self>) -> Option<Node<V, Self>> {
        self.entries.insert(key, node)
    }

    /// Remove the node at `key`, preserving the order of the remaining
    /// entries.
    pub fn remove(&mut self, key: &K) -> Option<Node<V, Self>> {
        self.entries.shift_remove(key)
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // The compiler-generated drop glue recurses once per nesting
        // level; deep chains must be unlinked onto a work list instead.
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

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Tree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Tree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Tree<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, Node<V, Tree<K, V>>)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, Node<V, Self>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, Node<V, Tree<K, V>>)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, Node<V, Self>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a Node<V, Tree<K, V>>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq + Clone, V> TreeMap for Tree<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;
    type Remapped<U> = Tree<K, U>;

    fn fresh(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        Tree::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&NodeOf<Self>> {
        Tree::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut NodeOf<Self>> {
        Tree::get_mut(self, key)
    }

    fn insert(&mut self, key: K, node: NodeOf<Self>) -> Option<NodeOf<Self>> {
        Tree::insert(self, key, node)
    }

    fn remove(&mut self, key: &K) -> Option<NodeOf<Self>> {
        Tree::remove(self, key)
    }

    fn get_or_insert_with(
        &mut self,
        key: K,
        default: impl FnOnce() -> NodeOf<Self>,
    ) -> &mut NodeOf<Self> {
        self.entries.entry(key).or_insert_with(default)
    }

    fn iter(&self) -> Iter<'_, K, V> {
        Tree::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    #[test]
    fn insert_get_remove() {
        let mut t: Tree<&str, i64> = Tree::new();
        assert!(t.is_empty());
        assert_eq!(t.insert("a", Node::Leaf(1)), None);
        assert_eq!(t.insert("a", Node::Leaf(2)), Some(Node::Leaf(1)));
        assert_eq!(t.get(&"a"), Some(&Node::Leaf(2)));
        assert!(t.contains_key(&"a"));
        assert_eq!(t.remove(&"a"), Some(Node::Leaf(2)));
        assert!(t.is_empty());
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut t: Tree<&str, i64> = Tree::new();
        t.insert("z", Node::Leaf(1));
        t.insert("a", Node::Leaf(2));
        t.insert("m", Node::Leaf(3));
        let keys: Vec<_> = t.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut t: Tree<&str, i64> = tree! { "z" => 1, "a" => 2, "m" => 3 };
        t.remove(&"a");
        let keys: Vec<_> = t.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let left: Tree<&str, i64> = tree! { "a" => 1, "b" => 2 };
        let right: Tree<&str, i64> = tree! { "b" => 2, "a" => 1 };
        assert_eq!(left, right);
    }

    #[test]
    fn tree_macro_nests_braced_values() {
        let t: Tree<&str, i64> = tree! {
            "a" => 1,
            "b" => { "x" => 2, "y" => { "z" => 3 } },
        };
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(&"a"), Some(&Node::Leaf(1)));
        let b = t.get(&"b").and_then(Node::as_branch).expect("branch");
        assert_eq!(b.len(), 2);
        let y = b.get(&"y").and_then(Node::as_branch).expect("branch");
        assert_eq!(y.get(&"z"), Some(&Node::Leaf(3)));
    }

    #[test]
    fn fresh_matches_kind() {
        let t: Tree<&str, i64> = tree! { "a" => 1 };
        let f = TreeMap::fresh(&t);
        assert!(f.is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let t: Tree<String, i64> = tree! {
            "a".to_string() => 1,
            "b".to_string() => { "x".to_string() => 2 },
        };
        let json = serde_json::to_string(&t).expect("serialize");
        let back: Tree<String, i64> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(t, back);
    }

    #[test]
    fn dropping_a_deep_chain_does_not_recurse() {
        let mut node: Node<i64, Tree<u32, i64>> = Node::Leaf(0);
        for level in (0..50_000u32).rev() {
            let mut t = Tree::new();
            t.insert(level, node);
            node = Node::Branch(t);
        }
        drop(node);
    }
}
