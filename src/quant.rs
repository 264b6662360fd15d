// src/quant.rs

use num_complex::Complex64;

use crate::math::round;

/// Signed 8-bit fixed-point value where 127 stands for 1.0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Q8(i8);

impl Q8 {
    /// Scale applied before rounding. Full scale is symmetric, so -128 is never produced.
    pub const SCALE: f64 = 127.0;
    pub const MAX: Self = Self(127);
    pub const MIN: Self = Self(-127);

    /// Creates a Q8 from the raw integer value (without scaling).
    /// -128 is outside the symmetric range and becomes -127.
    #[inline]
    pub const fn from_bits(bits: i8) -> Self {
        if bits < -127 { Self(-127) } else { Self(bits) }
    }

    /// Converts an f64 to Q8 as `round(value * 127)`.
    /// Out-of-range input saturates at +/-127 and NaN maps to 0.
    pub fn from_f64(value: f64) -> Self {
        let scaled = round(value * Self::SCALE).clamp(-Self::SCALE, Self::SCALE);
        Self(scaled as i8)
    }

    /// Returns the stored raw value.
    #[inline]
    pub fn to_bits(self) -> i8 {
        self.0
    }

    /// Value represented, `bits / 127`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }
}

use core::ops::Neg;

impl Neg for Q8 {
    type Output = Q8;

    #[inline]
    fn neg(self) -> Self::Output {
        // Range is symmetric, so this never overflows
        Q8(-self.0)
    }
}

use core::fmt;

impl fmt::Display for Q8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Q8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}

/// A root of unity with both parts quantized to [`Q8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuantizedRoot {
    pub real: Q8,
    pub imag: Q8,
}

impl QuantizedRoot {
    pub fn new(real: Q8, imag: Q8) -> Self {
        Self { real, imag }
    }
}

impl From<Complex64> for QuantizedRoot {
    fn from(value: Complex64) -> Self {
        Self {
            real: Q8::from_f64(value.re),
            imag: Q8::from_f64(value.im),
        }
    }
}

impl Neg for QuantizedRoot {
    type Output = QuantizedRoot;

    #[inline]
    fn neg(self) -> Self::Output {
        QuantizedRoot {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_unit_values() {
        assert_eq!(Q8::from_f64(1.0), Q8::MAX);
        assert_eq!(Q8::from_f64(-1.0), Q8::MIN);
        assert_eq!(Q8::from_f64(0.0).to_bits(), 0);
        assert_eq!(Q8::from_f64(-0.0).to_bits(), 0);
    }

    #[test]
    fn test_from_f64_rounding() {
        // sqrt(2)/2 * 127 = 89.80
        assert_eq!(Q8::from_f64(core::f64::consts::FRAC_1_SQRT_2).to_bits(), 90);
        assert_eq!(Q8::from_f64(-core::f64::consts::FRAC_1_SQRT_2).to_bits(), -90);
        // Tiny residue from cos(pi/2)
        assert_eq!(Q8::from_f64(6.123e-17).to_bits(), 0);
    }

    #[test]
    fn test_from_f64_saturates() {
        assert_eq!(Q8::from_f64(1.5), Q8::MAX);
        assert_eq!(Q8::from_f64(-7.0), Q8::MIN);
        assert_eq!(Q8::from_f64(f64::NAN).to_bits(), 0);
    }

    #[test]
    fn test_from_f64_stays_in_range() {
        let mut c = -1.0;
        while c <= 1.0 {
            let q = Q8::from_f64(c).to_bits();
            assert!((-127..=127).contains(&q), "{} quantized to {}", c, q);
            c += 1.0 / 1024.0;
        }
    }

    #[test]
    fn test_from_bits_keeps_range_symmetric() {
        assert_eq!(Q8::from_bits(i8::MIN), Q8::MIN);
        assert_eq!(-Q8::from_bits(i8::MIN), Q8::MAX);
        assert_eq!(-Q8::from_bits(i8::MAX), Q8::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Q8::from_bits(-90)), "-90");
        assert_eq!(format!("{:?}", Q8::MAX), "1.000000 (raw: 127)");
    }

    #[test]
    fn test_quantized_root_negation() {
        let w = QuantizedRoot::from(Complex64::new(0.6, -0.8));
        assert_eq!(w, QuantizedRoot::new(Q8::from_bits(76), Q8::from_bits(-102)));
        assert_eq!(-w, QuantizedRoot::new(Q8::from_bits(-76), Q8::from_bits(102)));
    }
}
