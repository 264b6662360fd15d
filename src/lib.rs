#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Generator for 8-bit fixed-point roots-of-unity tables.
//!
//! The roots are stored in bit-reversed order, with the negation of `root[j]`
//! at `root[j + N/2]`, and rendered as a C header for a fixed-point FFT.

extern crate alloc;

pub mod common;
pub mod math;
pub mod roots;
pub mod bitrev;
pub mod quant;
pub mod render;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use common::{TableError, MAX_ROOTS};
pub use quant::{Q8, QuantizedRoot};
pub use table::RootTable;
