// src/render.rs

//! C header emitter for quantized root tables.
//!
//! The output is meant to be saved as `roots.h`. It relies on `SAMPLE_SIZE`
//! and the `complex` struct (fields `real` and `imag`) from `data.h`.

use core::fmt::{self, Display, Write};
use num_complex::Complex64;

use crate::quant::QuantizedRoot;

/// `strftime` format of the "Last Generated" date in the header.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Writes the file comment and the opening of the include guard.
pub fn write_header<W: Write>(out: &mut W, generated: impl Display) -> fmt::Result {
    write!(
        out,
        r#"
/*
 * roots.h
 *
 * Constants representing the roots of unity.
 *
 * This file contains an array of the nth roots of unity. The total number of
 * roots is determined by the constant 'SAMPLE_SIZE', which should be defined in
 * the 'data.h' header file (or at compile time in the Makefile).
 *
 * DO NOT MODIFY THIS FILE BY HAND. IT IS GENERATED AUTOMATICALLY BY THE
 * genroots TOOL.
 *
 * Last Generated:
 *      {generated}
 */

#ifndef _ROOTS_H_
#define _ROOTS_H_


#include "data.h"

"#
    )
}

/// Writes the array documentation and the opening of the initializer.
pub fn write_array_open<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str(
        r#"
/*
 * root
 *
 * Description: This array contains the nth roots of unity for calculating the
 *              FFT. The roots in this array contain an 8-bit real part and an
 *              8-bit imaginary part. The roots are organized in a modified
 *              bit-reversed order in order to make the accesses easier.
 *
 * Notes:       Due to the ordering of the roots, if the ith root is at
 *              'root[j]', then its negative is at 'root[j + SAMPLE_SIZE/2]'.
 */
const complex root[SAMPLE_SIZE] = {
"#,
    )
}

/// Writes one initializer line.
pub fn write_entry<W: Write>(out: &mut W, root: QuantizedRoot) -> fmt::Result {
    writeln!(out, "    {{ .real = {}, .imag = {} }},", root.real, root.imag)
}

pub fn write_array_close<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("};\n")
}

/// Writes the end of the include guard.
pub fn write_footer<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("\n\n#endif /* _ROOTS_H_ */\n\n")
}

/// Renders a complete `roots.h` for `roots`, already in storage order.
pub fn render<W: Write>(out: &mut W, roots: &[Complex64], generated: impl Display) -> fmt::Result {
    write_header(out, generated)?;
    write_array_open(out)?;
    for &w in roots {
        write_entry(out, QuantizedRoot::from(w))?;
    }
    write_array_close(out)?;
    write_footer(out)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
