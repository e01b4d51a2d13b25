//! Read-only path lookup.

use trellis_core::{Node, NodeOf, TreeMap};

use crate::error::{PathError, PathResult};

/// Walk `keys` through branches only, returning the innermost mapping.
pub(crate) fn descend<'t, M: TreeMap>(root: &'t M, keys: &[M::Key]) -> PathResult<&'t M, M::Key> {
    let mut current = root;
    for key in keys {
        current = match current.get(key) {
            Some(Node::Branch(branch)) => branch,
            Some(Node::Leaf(_)) => return Err(PathError::NotABranch(key.clone())),
            None => return Err(PathError::KeyNotFound(key.clone())),
        };
    }
    Ok(current)
}

/// Mutable variant of [`descend`].
pub(crate) fn descend_mut<'t, M: TreeMap>(
    root: &'t mut M,
    keys: &[M::Key],
) -> PathResult<&'t mut M, M::Key> {
    let mut current = root;
    for key in keys {
        current = match current.get_mut(key) {
            Some(Node::Branch(branch)) => branch,
            Some(Node::Leaf(_)) => return Err(PathError::NotABranch(key.clone())),
            None => return Err(PathError::KeyNotFound(key.clone())),
        };
    }
    Ok(current)
}

/// Fetch the node at `path`.
///
/// Fails with [`PathError::KeyNotFound`] naming the first absent key,
/// or [`PathError::NotABranch`] if a leaf sits in the middle of the
/// path. The path must be non-empty.
pub fn get<'t, M: TreeMap>(root: &'t M, path: &[M::Key]) -> PathResult<&'t NodeOf<M>, M::Key> {
    let (last, prefix) = path.split_last().ok_or(PathError::EmptyPath)?;
    let parent = descend(root, prefix)?;
    parent
        .get(last)
        .ok_or_else(|| PathError::KeyNotFound(last.clone()))
}

/// Mutable access to the node at `path`.
pub fn get_mut<'t, M: TreeMap>(
    root: &'t mut M,
    path: &[M::Key],
) -> PathResult<&'t mut NodeOf<M>, M::Key> {
    let (last, prefix) = path.split_last().ok_or(PathError::EmptyPath)?;
    let parent = descend_mut(root, prefix)?;
    parent
        .get_mut(last)
        .ok_or_else(|| PathError::KeyNotFound(last.clone()))
}

/// Returns `true` iff a node exists at `path`.
pub fn contains<M: TreeMap>(root: &M, path: &[M::Key]) -> bool {
    get(root, path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{tree, Tree};

    type T = Tree<&'static str, i64>;

    #[test]
    fn walks_nested_branches() {
        let t: T = tree! { "a" => { "b" => { "c" => 7 } } };
        assert_eq!(get(&t, &["a", "b", "c"]), Ok(&Node::Leaf(7)));
        assert!(get(&t, &["a", "b"]).is_ok_and(Node::is_branch));
    }

    #[test]
    fn missing_key_reports_the_failing_key() {
        let t: T = tree! { "a" => { "b" => 1 } };
        assert_eq!(get(&t, &["a", "x"]), Err(PathError::KeyNotFound("x")));
        assert_eq!(get(&t, &["z", "b"]), Err(PathError::KeyNotFound("z")));
    }

    #[test]
    fn leaf_in_the_middle_is_not_a_branch() {
        let t: T = tree! { "a" => 1 };
        assert_eq!(get(&t, &["a", "b"]), Err(PathError::NotABranch("a")));
    }

    #[test]
    fn empty_path_is_rejected() {
        let t: T = tree! { "a" => 1 };
        assert_eq!(get(&t, &[]), Err(PathError::EmptyPath));
    }

    #[test]
    fn get_mut_allows_in_place_updates() {
        let mut t: T = tree! { "a" => { "b" => 1 } };
        if let Node::Leaf(value) = get_mut(&mut t, &["a", "b"]).expect("present") {
            *value = 9;
        }
        assert_eq!(get(&t, &["a", "b"]), Ok(&Node::Leaf(9)));
    }

    #[test]
    fn contains_mirrors_get() {
        let t: T = tree! { "a" => { "b" => 1 } };
        assert!(contains(&t, &["a"]));
        assert!(contains(&t, &["a", "b"]));
        assert!(!contains(&t, &["a", "x"]));
        assert!(!contains(&t, &["a", "b", "c"]));
    }
}
