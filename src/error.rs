//! Error types for growable arrays.

use thiserror::Error;

/// Result type for fallible array operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`GrowableArray`](crate::array::GrowableArray).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The index is not inside the logical range of the array.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Two elements could not be compared while sorting.
    #[error("elements have no total ordering")]
    Unorderable,
}
