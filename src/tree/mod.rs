//! `IndexedFrequencyTree`: an appendable Binary Indexed Tree (Fenwick Tree).
//!
//! A Fenwick Tree answers prefix-sum queries and applies point updates
//! over a sequence of integers without recomputing sums from scratch.
//!
//! Time Complexity:
//! - Append: O(log n) amortized
//! - Update: O(log n)
//! - Prefix Sum: O(log n)
//! - Range Sum: O(log n)
//! - Prefix search ([`IndexedFrequencyTree::find_prefix`]): O(log n)
//!
//! Space Complexity: O(n)
//!
//! The structure keeps the raw frequencies next to the tree itself so
//! that updates can be expressed as value replacement rather than deltas,
//! and so that appending can seed the new tree slot from the frequencies
//! it covers.

mod bits;
mod iter;

pub use iter::{Iter, PrefixSums};

use crate::element::Frequency;
use crate::error::ArgumentError;
use crate::macros::trace_event;
use bits::{highest_power_of_two_leq, parent, predecessor};
use core::fmt;

/// A Binary Indexed Tree over a growable sequence of integer frequencies.
///
/// Positions are 0-indexed in the public API. Query and update indices are
/// `isize` so that negative indices are reported as an [`ArgumentError`]
/// rather than being unrepresentable.
///
/// # Example
///
/// ```rust
/// use freqtree::IndexedFrequencyTree;
///
/// let mut tree: IndexedFrequencyTree = [2, 6, 5, 7].into_iter().collect();
/// assert_eq!(tree.prefix_sum(3), Ok(20));
///
/// tree.update(1, 10).unwrap();
/// assert_eq!(tree.range_sum(1, 2), Ok(15));
/// ```
#[derive(Clone)]
pub struct IndexedFrequencyTree<T = i64> {
    /// Raw value at each position.
    frequencies: Vec<T>,
    /// 1-indexed partial sums; slot 0 is a zero sentinel.
    /// `tree[i]` holds the sum of `frequencies` over `(i - lowbit(i), i]`.
    tree: Vec<T>,
}

impl<T: Frequency> IndexedFrequencyTree<T> {
    /// Number of frequency slots reserved by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty tree with room for [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// frequencies.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty tree with room for `capacity` frequencies.
    pub fn with_capacity(capacity: usize) -> Self {
        let frequencies = Vec::with_capacity(capacity);
        let mut tree = Vec::with_capacity(capacity.saturating_add(1));
        tree.push(T::zero());
        trace_event!(capacity, "reserved frequency tree");
        Self { frequencies, tree }
    }

    /// Returns the number of appended frequencies.
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true if nothing has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Returns how many frequencies fit before the backing storage grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frequencies.capacity()
    }

    /// Reserves room for at least `additional` more frequencies.
    pub fn reserve(&mut self, additional: usize) {
        self.frequencies.reserve(additional);
        self.tree.reserve(additional);
    }

    /// Appends `value` as the new last frequency.
    ///
    /// The new tree slot at 1-indexed position `p` is seeded with the sum of
    /// the frequencies it covers, `(p - lowbit(p), p]`.
    pub fn append(&mut self, value: T) {
        self.frequencies.push(value);
        let pos = self.frequencies.len();

        // The covered range ends with `value` itself.
        let covered = &self.frequencies[predecessor(pos)..pos - 1];
        let sum = covered.iter().fold(value, |acc, f| acc.wrapping_add(f));
        self.tree.push(sum);

        debug_assert_eq!(self.tree.len(), self.frequencies.len() + 1);
        trace_event!(len = pos, "appended frequency");
    }

    /// Returns the sum of the frequencies at `0..=idx`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::IndexOutOfBounds`] unless `0 <= idx < len()`.
    pub fn prefix_sum(&self, idx: isize) -> Result<T, ArgumentError> {
        let idx = self.checked_index(idx)?;
        Ok(self.sum_first(idx + 1))
    }

    /// Returns the sum of the frequencies at `start..=end`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`ArgumentError::InvertedRange`] if `end < start`;
    /// - [`ArgumentError::NegativeStart`] if `start < 0`;
    /// - [`ArgumentError::EndOutOfBounds`] if `end >= len()`.
    pub fn range_sum(&self, start: isize, end: isize) -> Result<T, ArgumentError> {
        if end < start {
            return Err(ArgumentError::InvertedRange { start, end });
        }
        let Ok(first) = usize::try_from(start) else {
            return Err(ArgumentError::NegativeStart { start });
        };
        let len = self.len();
        let last = usize::try_from(end)
            .ok()
            .filter(|&last| last < len)
            .ok_or(ArgumentError::EndOutOfBounds { end, len })?;

        Ok(self.sum_first(last + 1).wrapping_sub(&self.sum_first(first)))
    }

    /// Replaces the frequency at `idx` with `value`.
    ///
    /// The difference is pushed through every tree slot whose range covers
    /// `idx`. Nothing is resized.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::IndexOutOfBounds`] unless `0 <= idx < len()`.
    /// The tree is left untouched in that case.
    pub fn update(&mut self, idx: isize, value: T) -> Result<(), ArgumentError> {
        let idx = self.checked_index(idx)?;
        let diff = value.wrapping_sub(&self.frequencies[idx]);
        self.frequencies[idx] = value;

        let mut pos = idx + 1;
        while pos < self.tree.len() {
            self.tree[pos] = self.tree[pos].wrapping_add(&diff);
            pos = parent(pos);
        }
        trace_event!(idx, delta = ?diff, "updated frequency");
        Ok(())
    }

    /// Returns the raw frequency at `idx`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.frequencies.get(idx).copied()
    }

    /// Returns the raw frequencies in append order.
    #[inline]
    pub fn frequencies(&self) -> &[T] {
        &self.frequencies
    }

    /// Returns the sum of every frequency, zero when empty.
    pub fn total(&self) -> T {
        self.sum_first(self.len())
    }

    /// Returns an iterator over the raw frequencies.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.frequencies)
    }

    /// Returns an iterator over `prefix_sum(0)` through `prefix_sum(len() - 1)`.
    pub fn prefix_sums(&self) -> PrefixSums<'_, T> {
        PrefixSums::new(&self.frequencies)
    }

    /// Returns the smallest index whose prefix sum is at least `target`.
    ///
    /// This is the order-statistics query: with frequencies used as counts,
    /// `find_prefix(k)` is the position holding the `k`-th counted item.
    /// Returns `None` when even the full sum stays below `target`.
    ///
    /// The answer is only meaningful when every frequency is non-negative,
    /// i.e. when prefix sums never decrease. Other contents yield some index
    /// or `None`, but never panic.
    pub fn find_prefix(&self, target: T) -> Option<usize> {
        let len = self.len();
        let mut pos = 0;
        let mut remaining = target;
        let mut step = highest_power_of_two_leq(len);

        // Largest `pos` whose first `pos` frequencies sum below `target`.
        while step > 0 {
            let next = pos + step;
            if next <= len && self.tree[next] < remaining {
                remaining = remaining.wrapping_sub(&self.tree[next]);
                pos = next;
            }
            step >>= 1;
        }
        (pos < len).then_some(pos)
    }

    /// Sum of the first `count` frequencies. `count` must not exceed `len()`.
    fn sum_first(&self, mut count: usize) -> T {
        let mut sum = T::zero();
        while count > 0 {
            sum = sum.wrapping_add(&self.tree[count]);
            count = predecessor(count);
        }
        sum
    }

    fn checked_index(&self, idx: isize) -> Result<usize, ArgumentError> {
        let len = self.len();
        usize::try_from(idx)
            .ok()
            .filter(|&i| i < len)
            .ok_or(ArgumentError::IndexOutOfBounds { idx, len })
    }
}

impl<T: Frequency> Default for IndexedFrequencyTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedFrequencyTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedFrequencyTree")
            .field("frequencies", &self.frequencies)
            .finish_non_exhaustive()
    }
}

/// Two trees are equal when they hold the same frequencies; the tree
/// slots are a function of those.
impl<T: PartialEq> PartialEq for IndexedFrequencyTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.frequencies == other.frequencies
    }
}

impl<T: Eq> Eq for IndexedFrequencyTree<T> {}

impl<T: Frequency> Extend<T> for IndexedFrequencyTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: Frequency> FromIterator<T> for IndexedFrequencyTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut tree = Self::with_capacity(lower.max(Self::DEFAULT_CAPACITY));
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Frequency> IntoIterator for &'a IndexedFrequencyTree<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
