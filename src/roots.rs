// src/roots.rs

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;
use tracing::trace;

use crate::math::sin_cos;

/// Returns the `k`th of the `n` roots of unity, `exp(2*pi*i*k/n)`.
#[inline]
pub fn root(k: usize, n: usize) -> Complex64 {
    let angle = 2.0 * PI * (k as f64) / (n as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Fills `roots` with the `roots.len()` roots of unity in natural order.
pub fn fill_roots(roots: &mut [Complex64]) {
    let n = roots.len();
    for (k, w) in roots.iter_mut().enumerate() {
        *w = root(k, n);
    }
}

/// Generates the `n` roots of unity in natural order.
///
/// `n = 0` gives an empty sequence and `n = 1` gives `[1 + 0i]`. `n` is not
/// bounded here; [`RootTable::new`](crate::RootTable::new) caps it at [`MAX_ROOTS`](crate::MAX_ROOTS).
pub fn generate(n: usize) -> Vec<Complex64> {
    trace!(n, "generating roots of unity");
    let mut roots = alloc::vec![Complex64::new(0.0, 0.0); n];
    fill_roots(&mut roots);
    roots
}

#[cfg(test)]
#[path = "roots_tests.rs"]
mod tests;
