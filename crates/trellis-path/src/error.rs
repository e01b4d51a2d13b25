//! Error types for path-addressed operations.

use thiserror::Error;

/// Errors from path-addressed tree operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PathError<K> {
    /// A key along the path has no entry; carries the failing key.
    #[error("key not found: {0:?}")]
    KeyNotFound(K),

    /// A leaf value was reached before the end of the path.
    #[error("value at key {0:?} is a leaf, not a branch")]
    NotABranch(K),

    /// Path operations require at least one key.
    #[error("path is empty")]
    EmptyPath,
}

/// Convenience alias for path operation results.
pub type PathResult<T, K> = Result<T, PathError<K>>;
