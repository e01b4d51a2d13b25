//! Generic algorithms for combining, comparing, and path-addressing
//! nested key-value mappings.
//!
//! This is the main entry point for applications embedding trellis; it
//! re-exports the whole public surface of the workspace crates.
//!
//! A tree is any [`TreeMap`] whose values are [`Node`]s — leaf payloads
//! or nested mappings of the same kind. [`Tree`] (insertion-ordered)
//! and [`SortedTree`] (key-ordered) are the bundled implementations.
//!
//! # Examples
//!
//! Overlaying trees with [`merge`] and comparing them with [`diff`]:
//!
//! ```
//! use trellis::{diff, merge, tree, Depth, Node, Tree};
//!
//! let defaults: Tree<&str, i64> = tree! {
//!     "retries" => 3,
//!     "limits" => { "cpu" => 1 },
//! };
//! let overrides: Tree<&str, i64> = tree! { "limits" => { "mem" => 2 } };
//!
//! let merged = merge([&defaults, &overrides], Depth::Unbounded);
//! assert_eq!(merged, tree! {
//!     "retries" => 3,
//!     "limits" => { "cpu" => 1, "mem" => 2 },
//! });
//!
//! let changes = diff(&defaults, &merged, Depth::Unbounded);
//! let limits = changes.get(&"limits").and_then(Node::as_branch).unwrap();
//! assert!(limits.get(&"mem").and_then(Node::as_leaf).unwrap().is_added());
//! ```
//!
//! Path-addressed access with the [`path`] module:
//!
//! ```
//! use trellis::{path, Node, Tree};
//!
//! let mut tree: Tree<&str, i64> = Tree::new();
//! path::set(&mut tree, &["servers", "alpha", "port"], Node::Leaf(8080))?;
//!
//! assert!(path::contains(&tree, &["servers", "alpha"]));
//! assert_eq!(
//!     path::get(&tree, &["servers", "alpha", "port"])?,
//!     &Node::Leaf(8080),
//! );
//!
//! path::remove_path(&mut tree, &["servers", "alpha", "port"])?;
//! assert!(tree.is_empty());
//! # Ok::<(), trellis::PathError<&'static str>>(())
//! ```

pub use trellis_core::{tree, Depth, Node, NodeOf, SortedTree, Tree, TreeMap};

pub use trellis_combine::{
    combine, diff, diff_asymmetric, merge, try_combine, Change, ChangeOf, Symmetry,
};

pub use trellis_path as path;
pub use trellis_path::{PathError, PathResult};
