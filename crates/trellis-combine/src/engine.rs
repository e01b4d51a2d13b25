//! The depth-bounded tree combinator.
//!
//! [`try_combine`] walks two trees in lockstep with an explicit frame
//! stack, so trees nested thousands of levels deep traverse without
//! stack-depth-proportional native recursion. [`combine`] is the
//! infallible wrapper.

use std::convert::Infallible;

use trellis_core::{Depth, Node, NodeOf, TreeMap};

/// Whether keys exclusive to the right tree are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// Visit keys from both trees; right-only keys reach the combinator
    /// with an absent left value.
    Symmetric,
    /// Visit only keys present in the left tree.
    Asymmetric,
}

/// Walk phase of one traversal frame.
enum Phase<'t, M: TreeMap + 't> {
    /// Walking the left tree's keys.
    Left(M::Iter<'t>),
    /// Walking the right tree's keys, skipping those the left tree has.
    RightOnly(M::Iter<'t>),
}

/// One in-flight level of the traversal.
struct Frame<'t, M: TreeMap, N> {
    /// Key under which this frame's result attaches in its parent;
    /// `None` for the root frame.
    key: Option<M::Key>,
    left: &'t M,
    right: &'t M,
    phase: Phase<'t, M>,
    out: N,
}

/// Next action decided while holding the top frame.
enum Step<'t, M: TreeMap> {
    /// Feed a key pair to the combinator or descend into it.
    Pair(M::Key, Option<&'t NodeOf<M>>, Option<&'t NodeOf<M>>),
    /// The top frame has no keys left.
    Finish,
}

/// Combine two trees into a new one, leaf pair by leaf pair.
///
/// Walks `left`'s keys in native order, pairing each node with the node
/// at the same key in `right` (`None` when absent). While fewer than
/// `depth` levels have been descended and both nodes are branches, the
/// walk descends instead of calling `op`; a descent's result is attached
/// only if non-empty. Everywhere else `op` decides: `Ok(Some(node))`
/// stores `node` at the key, `Ok(None)` omits the key, and `Err`
/// aborts the walk, discarding the partial result. With
/// [`Symmetry::Symmetric`], keys exclusive to `right` are visited after
/// `left`'s keys at each level.
///
/// The combinator receives the full key path from the root, including
/// the current key. Neither input is mutated; the output mapping kind
/// `N` is chosen by the caller and its levels are built with the output
/// kind's [`fresh`](TreeMap::fresh) factory.
pub fn try_combine<'t, M, N, F, E>(
    left: &'t M,
    right: &'t M,
    depth: Depth,
    symmetry: Symmetry,
    mut op: F,
) -> Result<N, E>
where
    M: TreeMap,
    N: TreeMap<Key = M::Key>,
    F: FnMut(&[M::Key], Option<&NodeOf<M>>, Option<&NodeOf<M>>) -> Result<Option<NodeOf<N>>, E>,
{
    let mut path: Vec<M::Key> = Vec::new();
    let mut stack: Vec<Frame<'t, M, N>> = vec![Frame {
        key: None,
        left,
        right,
        phase: Phase::Left(left.iter()),
        out: N::default(),
    }];

    loop {
        let frame = stack
            .last_mut()
            .expect("stack holds the root frame until the traversal returns");
        let step = loop {
            match &mut frame.phase {
                Phase::Left(entries) => match entries.next() {
                    Some((key, left_node)) => {
                        break Step::Pair(key.clone(), Some(left_node), frame.right.get(key));
                    }
                    None => match symmetry {
                        Symmetry::Symmetric => {
                            frame.phase = Phase::RightOnly(frame.right.iter());
                        }
                        Symmetry::Asymmetric => break Step::Finish,
                    },
                },
                Phase::RightOnly(entries) => match entries.next() {
                    Some((key, right_node)) => {
                        if !frame.left.contains_key(key) {
                            break Step::Pair(key.clone(), None, Some(right_node));
                        }
                    }
                    None => break Step::Finish,
                },
            }
        };

        match step {
            Step::Pair(key, left_node, right_node) => {
                if let (Some(Node::Branch(left_branch)), Some(Node::Branch(right_branch))) =
                    (left_node, right_node)
                {
                    if depth.allows(stack.len() - 1) {
                        let child_out = stack
                            .last_mut()
                            .expect("stack holds the root frame until the traversal returns")
                            .out
                            .fresh();
                        path.push(key.clone());
                        stack.push(Frame {
                            key: Some(key),
                            left: left_branch,
                            right: right_branch,
                            phase: Phase::Left(left_branch.iter()),
                            out: child_out,
                        });
                        continue;
                    }
                }
                path.push(key.clone());
                let combined = op(&path, left_node, right_node)?;
                path.pop();
                if let Some(node) = combined {
                    stack
                        .last_mut()
                        .expect("stack holds the root frame until the traversal returns")
                        .out
                        .insert(key, node);
                }
            }
            Step::Finish => {
                let finished = stack.pop().expect("a frame was just inspected");
                match finished.key {
                    Some(key) => {
                        path.pop();
                        if !finished.out.is_empty() {
                            stack
                                .last_mut()
                                .expect("non-root frames have a parent")
                                .out
                                .insert(key, Node::Branch(finished.out));
                        }
                    }
                    None => return Ok(finished.out),
                }
            }
        }
    }
}

/// [`try_combine`] with an infallible combinator.
pub fn combine<'t, M, N, F>(
    left: &'t M,
    right: &'t M,
    depth: Depth,
    symmetry: Symmetry,
    mut op: F,
) -> N
where
    M: TreeMap,
    N: TreeMap<Key = M::Key>,
    F: FnMut(&[M::Key], Option<&NodeOf<M>>, Option<&NodeOf<M>>) -> Option<NodeOf<N>>,
{
    let result: Result<N, Infallible> =
        try_combine(left, right, depth, symmetry, |path, l, r| Ok(op(path, l, r)));
    match result {
        Ok(out) => out,
        Err(never) => match never {},
    }
}
