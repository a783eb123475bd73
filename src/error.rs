//! Errors reported for rejected arguments.

use thiserror::Error;

/// A caller-supplied index or range violated a precondition.
///
/// Every operation validates its arguments before touching any state, so
/// a returned `ArgumentError` means the tree is exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The index does not refer to an appended frequency.
    #[error("idx must be non-negative and less than {len}, got {idx}")]
    IndexOutOfBounds {
        /// The rejected index.
        idx: isize,
        /// Number of frequencies at the time of the call.
        len: usize,
    },
    /// The range ends before it starts.
    #[error("indices must satisfy start <= end, got start {start} and end {end}")]
    InvertedRange {
        /// Requested first index.
        start: isize,
        /// Requested last index.
        end: isize,
    },
    /// The range starts at a negative index.
    #[error("start must be non-negative, got {start}")]
    NegativeStart {
        /// Requested first index.
        start: isize,
    },
    /// The range ends past the last appended frequency.
    #[error("end must be less than frequency count {len}, got {end}")]
    EndOutOfBounds {
        /// Requested last index.
        end: isize,
        /// Number of frequencies at the time of the call.
        len: usize,
    },
}
