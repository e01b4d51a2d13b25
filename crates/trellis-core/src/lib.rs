//! Foundation types for the trellis nested-mapping toolkit.
//!
//! A tree is a mapping whose values are [`Node`]s: either opaque leaf
//! payloads or nested mappings of the same kind, so arbitrarily deep
//! key-value trees can be built out of any conforming mapping type.
//!
//! # Key Types
//!
//! - [`Node`] — a leaf payload or a nested branch
//! - [`TreeMap`] — the mapping abstraction the tree algorithms operate
//!   through, including the same-kind factory for created children
//! - [`Tree`] — insertion-ordered mapping backed by `IndexMap`
//! - [`SortedTree`] — key-ordered mapping backed by `BTreeMap`
//! - [`Depth`] — recursion bound for tree traversals
//! - [`tree!`] — literal construction macro for [`Tree`]

pub mod depth;
mod macros;
pub mod map;
pub mod node;
pub mod sorted;
pub mod tree;

pub use depth::Depth;
pub use map::TreeMap;
pub use node::{Node, NodeOf};
pub use sorted::SortedTree;
pub use tree::Tree;
