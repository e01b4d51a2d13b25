use crate::node::NodeOf;

/// One level of a nested mapping, holding [`Node`](crate::Node) values.
///
/// This is the mapping interface the combine and path algorithms operate
/// through: key lookup, assignment, deletion, membership, parameterless
/// construction (the [`Default`] supertrait), and iteration in the map's
/// native order. [`Tree`](crate::Tree) keeps insertion order,
/// [`SortedTree`](crate::SortedTree) keeps key order; any other mapping
/// that upholds the contract participates the same way.
pub trait TreeMap: Default + Sized {
    /// Key type addressing entries at this level.
    type Key: Clone;

    /// Leaf payload type.
    type Value;

    /// Iterator over entries in the map's native order.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a NodeOf<Self>)>
    where
        Self: 'a;

    /// The same kind of mapping with a different leaf type.
    ///
    /// Lets an algorithm hand back results of the caller's mapping kind
    /// even when the result's leaves have a new type, as a structural
    /// diff does.
    type Remapped<U>: TreeMap<Key = Self::Key, Value = U>;

    /// Create an empty mapping of the same kind as `self`.
    ///
    /// Children created while mutating a tree are built with this
    /// factory, so a specialized root yields the same mapping behavior
    /// at every level beneath it.
    fn fresh(&self) -> Self;

    /// Number of entries at this level.
    fn len(&self) -> usize;

    /// Returns `true` if this level has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` has an entry.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// The node at `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<&NodeOf<Self>>;

    /// Mutable access to the node at `key`, if any.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut NodeOf<Self>>;

    /// Insert a node at `key`, returning the node it replaced, if any.
    fn insert(&mut self, key: Self::Key, node: NodeOf<Self>) -> Option<NodeOf<Self>>;

    /// Remove the node at `key`, preserving the order of the remaining
    /// entries.
    fn remove(&mut self, key: &Self::Key) -> Option<NodeOf<Self>>;

    /// The node at `key`, inserting `default()` first if the key has no
    /// entry.
    fn get_or_insert_with(
        &mut self,
        key: Self::Key,
        default: impl FnOnce() -> NodeOf<Self>,
    ) -> &mut NodeOf<Self>;

    /// Iterate entries in the map's native order.
    fn iter(&self) -> Self::Iter<'_>;
}
