// src/bitrev.rs

//! Bit-reversed storage order for root tables.
//!
//! The first half of an `N`-element table is reordered so that index `i`,
//! read as a `log2(N/2)`-bit number, trades places with its bit reversal.
//! The second half receives the identical swaps offset by `N/2`, so an entry
//! and its negation stay exactly `N/2` apart.

use alloc::vec::Vec;
use tracing::debug;

use crate::common::{check_size, TableError};

/// Reverses the low `width` bits of `i`.
#[inline]
pub fn reverse_bits(i: usize, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - width)
}

/// Fills the bit-reversal table for `n` indices (`n` a power of two).
pub fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

/// Reorders `table` in place into bit-reversed storage order.
///
/// Each pair is exchanged once, so applying this twice restores the
/// original order.
pub fn permute_in_place<T>(table: &mut [T]) -> Result<(), TableError> {
    let n = table.len();
    check_size(n)?;

    let half = n / 2;
    debug!(n, width = half.trailing_zeros(), "bit-reversing root table");

    let mut bitrev = alloc::vec![0; half];
    precompute_bitrev(&mut bitrev, half);

    for i in 0..half {
        let j = bitrev[i];
        if i < j {
            table.swap(i, j);
            table.swap(i + half, j + half);
        }
    }

    Ok(())
}

/// Returns a copy of `table` in bit-reversed storage order.
pub fn bit_reverse<T: Clone>(table: &[T]) -> Result<Vec<T>, TableError> {
    let mut out = table.to_vec();
    permute_in_place(&mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
