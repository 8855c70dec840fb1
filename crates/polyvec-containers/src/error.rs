//! Container errors.

use thiserror::Error;

/// Errors reported by checked container access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The requested position lies outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the container at the time of access.
        len: usize,
    },
}
