// src/math.rs

/// Agnostic helper for sin/cos
#[inline]
pub fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Rounds half away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}
