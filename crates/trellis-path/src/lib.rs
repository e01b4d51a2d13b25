//! Path-addressed access to nested mappings.
//!
//! Operations take a root mapping and a slice of keys (the path) and
//! navigate the tree in one call: reads fail fast naming the offending
//! key, writes create missing intermediate branches with the root's own
//! mapping kind, and removals can prune the empty branches they leave
//! behind.
//!
//! # Key Operations
//!
//! - [`get`] / [`get_mut`] / [`contains`] — path lookup
//! - [`set`] / [`or_insert`] — path binding with intermediate creation
//! - [`remove`] / [`remove_path`] — removal, the latter pruning emptied
//!   branches
//! - [`leaves`] — lazy depth-first leaf enumeration
//! - [`copy`] / [`extend`] / [`from_entries`] — whole-tree rebuilds from
//!   leaf paths

pub mod access;
pub mod error;
pub mod iter;
pub mod mutate;

pub use access::{contains, get, get_mut};
pub use error::{PathError, PathResult};
pub use iter::{copy, extend, from_entries, leaves, Leaves};
pub use mutate::{or_insert, remove, remove_path, set};
