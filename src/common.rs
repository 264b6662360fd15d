// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableError {
    /// Fewer than two roots were requested.
    TooFewRoots { n: usize },
    /// Half the number of roots is not a power of two.
    NotPowerOfTwo { n: usize },
    /// More roots than [`MAX_ROOTS`] were requested.
    TooLarge { n: usize },
}

/// Largest table accepted, 2^24 entries (about 500 MiB of header text).
pub const MAX_ROOTS: usize = 1 << 24;

use core::fmt;

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooFewRoots { n } => write!(f, "Need at least 2 roots, got {}", n),
            TableError::NotPowerOfTwo { n } => write!(f, "Number of roots must be a power of 2, got {}", n),
            TableError::TooLarge { n } => write!(f, "At most {} roots are supported, got {}", MAX_ROOTS, n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

/// Checks that `n` roots can be stored in bit-reversed order.
pub(crate) fn check_size(n: usize) -> Result<(), TableError> {
    if n < 2 {
        return Err(TableError::TooFewRoots { n });
    }
    if n > MAX_ROOTS {
        return Err(TableError::TooLarge { n });
    }
    if !n.is_power_of_two() {
        return Err(TableError::NotPowerOfTwo { n });
    }
    Ok(())
}
