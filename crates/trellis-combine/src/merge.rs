//! Later-wins overlay of any number of trees.

use tracing::trace;
use trellis_core::{Depth, TreeMap};

use crate::engine::{combine, Symmetry};

/// Merge an arbitrary number of trees, later values winning.
///
/// Folds [`combine`] over the input: at keys where both sides hold a
/// branch and the walk is within `depth`, the overlay recurses; anywhere
/// else the later node replaces the earlier one wholesale. Keys unique
/// to either side are preserved. An empty iterator yields the empty
/// mapping.
///
/// ```
/// use trellis_combine::merge;
/// use trellis_core::{tree, Depth, Tree};
///
/// let base: Tree<&str, i64> = tree! { "a" => 1, "b" => { "x" => 1 } };
/// let layer: Tree<&str, i64> = tree! { "b" => { "y" => 2 } };
/// let merged = merge([&base, &layer], Depth::Unbounded);
/// assert_eq!(merged, tree! { "a" => 1, "b" => { "x" => 1, "y" => 2 } });
/// ```
pub fn merge<'t, M, I>(trees: I, depth: Depth) -> M
where
    M: TreeMap + Clone + 't,
    M::Value: Clone,
    I: IntoIterator<Item = &'t M>,
{
    let mut merged = M::default();
    let mut folded = 0usize;
    for tree in trees {
        merged = combine(
            &merged,
            tree,
            depth,
            Symmetry::Symmetric,
            |_, earlier, later| later.or(earlier).cloned(),
        );
        folded += 1;
    }
    trace!(trees = folded, ?depth, "merged trees");
    merged
}
