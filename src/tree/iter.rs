//! Borrowing iterators over an [`IndexedFrequencyTree`](super::IndexedFrequencyTree).

use crate::element::Frequency;
use core::iter::FusedIterator;
use core::slice;

/// Iterator over the raw frequencies, in append order.
///
/// Created by [`IndexedFrequencyTree::iter`](super::IndexedFrequencyTree::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(frequencies: &'a [T]) -> Self {
        Self {
            inner: frequencies.iter(),
        }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().copied()
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}
impl<T: Copy> FusedIterator for Iter<'_, T> {}

/// Iterator over every prefix sum, from index 0 to the last frequency.
///
/// Runs in O(n) overall by carrying a running total instead of walking
/// the tree for each index.
///
/// Created by [`IndexedFrequencyTree::prefix_sums`](super::IndexedFrequencyTree::prefix_sums).
#[derive(Debug, Clone)]
pub struct PrefixSums<'a, T> {
    inner: slice::Iter<'a, T>,
    running: T,
}

impl<'a, T: Frequency> PrefixSums<'a, T> {
    pub(super) fn new(frequencies: &'a [T]) -> Self {
        Self {
            inner: frequencies.iter(),
            running: T::zero(),
        }
    }
}

impl<T: Frequency> Iterator for PrefixSums<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let frequency = self.inner.next()?;
        self.running = self.running.wrapping_add(frequency);
        Some(self.running)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Frequency> ExactSizeIterator for PrefixSums<'_, T> {}
impl<T: Frequency> FusedIterator for PrefixSums<'_, T> {}
