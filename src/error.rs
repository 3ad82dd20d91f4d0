//! # Map errors
//!
//! Errors that a [`TreeMap`](crate::TreeMap) operation returns to its caller.
//! A missing key is not an error, it is reported as `Ok(None)`.

use thiserror::Error;

/// Map error
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MapError {
    /// The comparator could not order the given key against a key in the map.
    #[error("The key cannot be ordered against the keys of the map.")]
    Incomparable,
}

/// A `Result` whose error is a [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;
