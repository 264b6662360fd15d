// src/table.rs

use alloc::vec::Vec;
use core::fmt::{self, Display, Write};
use num_complex::Complex64;
use tracing::debug;

use crate::bitrev::permute_in_place;
use crate::common::{check_size, TableError};
use crate::quant::QuantizedRoot;
use crate::render::render;
use crate::roots::generate;

/// The `n` roots of unity in bit-reversed storage order.
///
/// For every `j < n/2`, `roots()[j + n/2]` is the negation of `roots()[j]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RootTable {
    roots: Vec<Complex64>,
}

impl RootTable {
    /// Generates and reorders the table. `n` must be a power of two, at least 2.
    pub fn new(n: usize) -> Result<Self, TableError> {
        check_size(n)?;

        let mut roots = generate(n);
        permute_in_place(&mut roots)?;
        debug!(n, "root table ready");

        Ok(Self { roots })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Always false, a table holds at least two roots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[inline]
    pub fn roots(&self) -> &[Complex64] {
        &self.roots
    }

    pub fn quantized(&self) -> impl Iterator<Item = QuantizedRoot> + '_ {
        self.roots.iter().map(|&w| QuantizedRoot::from(w))
    }

    /// Writes the table as a `roots.h` header.
    pub fn render<W: Write>(&self, out: &mut W, generated: impl Display) -> fmt::Result {
        render(out, &self.roots, generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MAX_ROOTS;
    use crate::quant::Q8;

    fn q(real: i8, imag: i8) -> QuantizedRoot {
        QuantizedRoot::new(Q8::from_bits(real), Q8::from_bits(imag))
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert_eq!(RootTable::new(0), Err(TableError::TooFewRoots { n: 0 }));
        assert_eq!(RootTable::new(1), Err(TableError::TooFewRoots { n: 1 }));
        assert_eq!(RootTable::new(6), Err(TableError::NotPowerOfTwo { n: 6 }));
        assert_eq!(RootTable::new(1000), Err(TableError::NotPowerOfTwo { n: 1000 }));
    }

    #[test]
    fn test_new_rejects_oversized_tables() {
        let n = MAX_ROOTS * 2;
        assert_eq!(RootTable::new(n), Err(TableError::TooLarge { n }));

        // Would overflow the allocation if it got that far
        let n = 1usize << (usize::BITS - 1);
        assert_eq!(RootTable::new(n), Err(TableError::TooLarge { n }));
    }

    #[test]
    fn test_quantized_four() {
        let table = RootTable::new(4).unwrap();
        let quantized: Vec<_> = table.quantized().collect();
        assert_eq!(quantized, [q(127, 0), q(0, 127), q(-127, 0), q(0, -127)]);
    }

    #[test]
    fn test_quantized_eight_is_bit_reversed() {
        let table = RootTable::new(8).unwrap();
        let quantized: Vec<_> = table.quantized().collect();
        // Natural order 0..8 stored as 0, 2, 1, 3, 4, 6, 5, 7
        assert_eq!(
            quantized,
            [
                q(127, 0),
                q(0, 127),
                q(90, 90),
                q(-90, 90),
                q(-127, 0),
                q(0, -127),
                q(-90, -90),
                q(90, -90),
            ]
        );
    }

    #[test]
    fn test_quantized_negation_pairs() {
        let table = RootTable::new(1024).unwrap();
        let quantized: Vec<_> = table.quantized().collect();
        let half = table.len() / 2;
        for j in 0..half {
            assert_eq!(quantized[j + half], -quantized[j], "root {}", j);
        }
    }

    #[test]
    fn test_render_line_count() {
        let table = RootTable::new(8).unwrap();
        let mut out = String::new();
        table.render(&mut out, "16 Oct 2026").unwrap();
        let entries = out.lines().filter(|line| line.starts_with("    { .real = ")).count();
        assert_eq!(entries, 8);
        assert!(!table.is_empty());
    }
}
