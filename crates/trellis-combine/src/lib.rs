//! Combine engine for the trellis nested-mapping toolkit.
//!
//! [`combine`] walks two trees in lockstep, feeding key pairs to a
//! caller-supplied combinator and splicing recursive sub-results back
//! together; [`merge`] and [`diff`] are its two stock instantiations.
//! Traversal uses an explicit frame stack, so trees nested thousands of
//! levels deep are handled without native recursion.
//!
//! # Key Types
//!
//! - [`combine`] / [`try_combine`] — the depth-bounded tree combinator
//! - [`Symmetry`] — whether keys exclusive to the right tree are visited
//! - [`merge`] — later-wins overlay of any number of trees
//! - [`diff`] / [`diff_asymmetric`] — structural comparison
//! - [`Change`] — added/removed/changed verdict per path

pub mod diff;
pub mod engine;
pub mod merge;

pub use diff::{diff, diff_asymmetric, Change, ChangeOf};
pub use engine::{combine, try_combine, Symmetry};
pub use merge::merge;
