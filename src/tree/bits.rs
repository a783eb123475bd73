//! Lowest-set-bit arithmetic over 1-indexed tree positions.

/// Value of the lowest set bit of `pos` (`pos & -pos` in two's complement).
#[inline]
pub(crate) const fn lowbit(pos: usize) -> usize {
    pos & pos.wrapping_neg()
}

/// Next position whose range also covers `pos`. Used by point updates.
#[inline]
pub(crate) const fn parent(pos: usize) -> usize {
    pos + lowbit(pos)
}

/// Position just before the range stored at `pos`. Used by prefix walks.
#[inline]
pub(crate) const fn predecessor(pos: usize) -> usize {
    pos - lowbit(pos)
}

/// Largest power of two not exceeding `n`, or zero for `n == 0`.
#[inline]
pub(crate) const fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
