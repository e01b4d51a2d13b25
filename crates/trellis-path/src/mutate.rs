//! Path binding and removal.

use tracing::trace;
use trellis_core::{Node, NodeOf, TreeMap};

use crate::access::{contains, descend_mut, get_mut};
use crate::error::{PathError, PathResult};

/// Bind `node` at `path`, creating missing intermediate branches.
///
/// Intermediates are built with the root's [`TreeMap::fresh`] factory,
/// so every created level has the same mapping kind as `root`; once the
/// walk leaves the existing tree, every remaining level is freshly
/// created. Returns a reference to the stored node.
///
/// Fails only on an empty path or a leaf sitting in the middle of the
/// path — the final key is overwritten unconditionally.
pub fn set<'t, M: TreeMap>(
    root: &'t mut M,
    path: &[M::Key],
    node: NodeOf<M>,
) -> PathResult<&'t mut NodeOf<M>, M::Key> {
    let (last, prefix) = path.split_last().ok_or(PathError::EmptyPath)?;
    let mut current = root;
    for key in prefix {
        let fresh = Node::Branch(current.fresh());
        current = match current.get_or_insert_with(key.clone(), || fresh) {
            Node::Branch(branch) => branch,
            Node::Leaf(_) => return Err(PathError::NotABranch(key.clone())),
        };
    }
    current.insert(last.clone(), node);
    current
        .get_mut(last)
        .ok_or_else(|| PathError::KeyNotFound(last.clone()))
}

/// Fetch the node at `path`, inserting `default` first if any key along
/// the path is absent.
///
/// The insertion uses [`set`] semantics, so missing intermediates are
/// created on the way down.
pub fn or_insert<'t, M: TreeMap>(
    root: &'t mut M,
    path: &[M::Key],
    default: NodeOf<M>,
) -> PathResult<&'t mut NodeOf<M>, M::Key> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if contains(root, path) {
        get_mut(root, path)
    } else {
        set(root, path, default)
    }
}

/// Remove and return the node at `path`.
pub fn remove<M: TreeMap>(root: &mut M, path: &[M::Key]) -> PathResult<NodeOf<M>, M::Key> {
    let (last, prefix) = path.split_last().ok_or(PathError::EmptyPath)?;
    let parent = descend_mut(root, prefix)?;
    parent
        .remove(last)
        .ok_or_else(|| PathError::KeyNotFound(last.clone()))
}

/// Remove the node at `path`, then delete every intermediate branch the
/// removal left empty.
///
/// Pruning runs innermost-first and stops at the first ancestor that
/// still has entries; ancestors above a non-empty branch are never
/// touched, even if empty branches remain further up.
pub fn remove_path<M: TreeMap>(root: &mut M, path: &[M::Key]) -> PathResult<NodeOf<M>, M::Key> {
    let removed = remove(root, path)?;
    let mut pruned = 0usize;
    for cut in (1..path.len()).rev() {
        let parent = descend_mut(root, &path[..cut - 1])?;
        let key = &path[cut - 1];
        let emptied = matches!(parent.get(key), Some(Node::Branch(branch)) if branch.is_empty());
        if !emptied {
            break;
        }
        parent.remove(key);
        pruned += 1;
    }
    trace!(levels = path.len(), pruned, "removed path");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::get;
    use trellis_core::{tree, Tree};

    type T = Tree<i64, i64>;

    #[test]
    fn set_creates_intermediate_branches() {
        let mut d: T = Tree::new();
        set(&mut d, &[1, 2], Node::Leaf(3)).expect("set");
        assert_eq!(d, tree! { 1 => { 2 => 3 } });

        set(&mut d, &[1, 5, 4], Node::Leaf(6)).expect("set");
        assert_eq!(d, tree! { 1 => { 2 => 3, 5 => { 4 => 6 } } });
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut d: T = Tree::new();
        set(&mut d, &[9, 8, 7, 6], Node::Leaf(5)).expect("set");
        assert_eq!(get(&d, &[9, 8, 7, 6]), Ok(&Node::Leaf(5)));
    }

    #[test]
    fn set_returns_the_stored_node() {
        let mut d: T = Tree::new();
        let stored = set(&mut d, &[1, 2], Node::Leaf(3)).expect("set");
        if let Node::Leaf(value) = stored {
            *value = 4;
        }
        assert_eq!(get(&d, &[1, 2]), Ok(&Node::Leaf(4)));
    }

    #[test]
    fn set_overwrites_an_existing_leaf() {
        let mut d: T = tree! { 1 => { 2 => 3 } };
        set(&mut d, &[1, 2], Node::Leaf(9)).expect("set");
        assert_eq!(d, tree! { 1 => { 2 => 9 } });
    }

    #[test]
    fn set_through_a_leaf_fails() {
        let mut d: T = tree! { 1 => 2 };
        assert_eq!(
            set(&mut d, &[1, 2, 3], Node::Leaf(4)),
            Err(PathError::NotABranch(1))
        );
        // The failed call must not have altered the tree.
        assert_eq!(d, tree! { 1 => 2 });
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut d: T = Tree::new();
        assert_eq!(set(&mut d, &[], Node::Leaf(1)), Err(PathError::EmptyPath));
        assert_eq!(remove(&mut d, &[]), Err(PathError::EmptyPath));
        assert_eq!(or_insert(&mut d, &[], Node::Leaf(1)), Err(PathError::EmptyPath));
    }

    #[test]
    fn or_insert_returns_the_existing_node() {
        let mut d: T = tree! { 1 => { 2 => 3 } };
        let node = or_insert(&mut d, &[1, 2], Node::Leaf(9)).expect("present");
        assert_eq!(node, &mut Node::Leaf(3));
        assert_eq!(d, tree! { 1 => { 2 => 3 } });
    }

    #[test]
    fn or_insert_creates_missing_paths() {
        let mut d: T = tree! { 1 => { 2 => 3 } };
        or_insert(&mut d, &[1, 5, 6], Node::Leaf(7)).expect("created");
        assert_eq!(d, tree! { 1 => { 2 => 3, 5 => { 6 => 7 } } });
    }

    #[test]
    fn remove_returns_the_node_and_keeps_siblings() {
        let mut d: T = tree! { 1 => { 2 => 3, 4 => 5 } };
        assert_eq!(remove(&mut d, &[1, 2]), Ok(Node::Leaf(3)));
        assert_eq!(d, tree! { 1 => { 4 => 5 } });
    }

    #[test]
    fn remove_missing_key_fails() {
        let mut d: T = tree! { 1 => { 2 => 3 } };
        assert_eq!(remove(&mut d, &[1, 9]), Err(PathError::KeyNotFound(9)));
        assert_eq!(remove(&mut d, &[8, 2]), Err(PathError::KeyNotFound(8)));
    }

    #[test]
    fn remove_leaves_empty_branches_behind() {
        let mut d: T = tree! { 1 => { 2 => { 3 => 4 } } };
        remove(&mut d, &[1, 2, 3]).expect("removed");
        // Plain remove does not prune; the emptied chain stays.
        assert!(get(&d, &[1, 2]).is_ok_and(Node::is_branch));
    }

    #[test]
    fn remove_path_prunes_the_emptied_chain() {
        let mut d: T = tree! { 1 => { 2 => { 3 => 4 } }, 9 => 0 };
        assert_eq!(remove_path(&mut d, &[1, 2, 3]), Ok(Node::Leaf(4)));
        assert_eq!(d, tree! { 9 => 0 });
    }

    #[test]
    fn remove_path_stops_at_a_non_empty_ancestor() {
        let mut d: T = tree! { 1 => { 7 => 0, 2 => { 3 => 4 } } };
        remove_path(&mut d, &[1, 2, 3]).expect("removed");
        assert_eq!(d, tree! { 1 => { 7 => 0 } });
    }

    #[test]
    fn remove_path_on_a_single_key_path_prunes_nothing_else() {
        let mut d: T = tree! { 1 => 2, 3 => 4 };
        assert_eq!(remove_path(&mut d, &[1]), Ok(Node::Leaf(2)));
        assert_eq!(d, tree! { 3 => 4 });
    }

    #[test]
    fn deep_chain_set_and_remove_path() {
        let mut d: Tree<u32, i64> = Tree::new();
        let path: Vec<u32> = (0..2_000).collect();
        set(&mut d, &path, Node::Leaf(1)).expect("set");
        assert_eq!(get(&d, &path), Ok(&Node::Leaf(1)));
        assert_eq!(remove_path(&mut d, &path), Ok(Node::Leaf(1)));
        assert!(d.is_empty());
    }
}
