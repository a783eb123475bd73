//! # `freqtree` - Appendable Binary Indexed Trees
//!
//! A compact Fenwick Tree over a growing sequence of integers, answering
//! prefix-sum and range-sum queries and applying point updates in
//! logarithmic time.
//!
//! ## Model
//!
//! An [`IndexedFrequencyTree`] owns two parallel sequences:
//!
//! 1. **Frequencies**: the raw value at each 0-indexed position. Grows only
//!    by [`append`](IndexedFrequencyTree::append); values are replaced in place
//!    by [`update`](IndexedFrequencyTree::update).
//! 2. **Tree**: 1-indexed partial sums with a zero sentinel in slot 0. Slot
//!    `i` holds the sum of the frequencies over `(i - lowbit(i), i]`, where
//!    `lowbit(i) = i & -i`.
//!
//! Every call validates its arguments before mutating anything; violations
//! are reported as an [`ArgumentError`] and leave the tree untouched.
//!
//! ## Concurrency
//!
//! The tree is a plain owned value: `Send` and `Sync` when its element type
//! is, with no internal locking. Share it across threads behind a lock,
//! for example an `RwLock` with appends and updates as writers.
//!
//! ## Example
//!
//! ```rust
//! use freqtree::{ArgumentError, IndexedFrequencyTree};
//!
//! let mut tree = IndexedFrequencyTree::<i64>::new();
//! for value in [2, 6, 5, 7, 13, 16, 22, 66, 20, 600, 2, 6] {
//!     tree.append(value);
//! }
//!
//! assert_eq!(tree.prefix_sum(3), Ok(20));
//! assert_eq!(tree.prefix_sum(9), Ok(757));
//! assert_eq!(tree.range_sum(1, 5), Ok(47));
//!
//! assert_eq!(
//!     tree.prefix_sum(12),
//!     Err(ArgumentError::IndexOutOfBounds { idx: 12, len: 12 })
//! );
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod element;
pub mod error;
pub mod tree;

pub use element::Frequency;
pub use error::ArgumentError;
pub use tree::IndexedFrequencyTree;

// Compile-time assertions for layout and thread-safety claims
const _: () = {
    use core::mem;

    const fn assert_send_sync<T: Send + Sync>() {}

    // Two vectors and nothing else.
    assert!(mem::size_of::<IndexedFrequencyTree<i64>>() == 2 * mem::size_of::<Vec<i64>>());

    assert_send_sync::<IndexedFrequencyTree<i64>>();
    assert_send_sync::<ArgumentError>();
};
