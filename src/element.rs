//! Element types accepted by [`IndexedFrequencyTree`](crate::IndexedFrequencyTree).

use core::fmt::Debug;
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingSub};

/// A fixed-width signed integer usable as a frequency.
///
/// Sums are combined with two's-complement wrapping arithmetic, so an
/// overflowing sum never panics and range sums stay exact modulo the width.
///
/// Implemented for every type meeting the bounds (`i8` through `i128`
/// and `isize`).
pub trait Frequency: PrimInt + Signed + WrappingAdd + WrappingSub + Debug {}

impl<T> Frequency for T where T: PrimInt + Signed + WrappingAdd + WrappingSub + Debug {}
