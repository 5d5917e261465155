//! Moving the decimal point by shifting digits between the integer and
//! fractional buffers of a decomposition.
//!
//! The integer buffer holds its most significant digit first, the fractional
//! buffer its least significant digit first, so a shift in either direction
//! moves a single digit between the backs of the two buffers. No digit is
//! ever dropped here; when a buffer is exhausted a zero digit is synthesized
//! instead.

use crate::common::buf::DigitBuf;
use crate::defs::Exponent;

/// Moves the most significant fractional digit to the end of the integer
/// buffer, multiplying the represented mantissa by 10.
pub(crate) fn shift_left(int: &mut DigitBuf, frac: &mut DigitBuf) {
    let d = frac.pop().unwrap_or(0);
    int.push(d);
}

/// Moves the least significant integer digit to the front of the fractional
/// part, dividing the represented mantissa by 10.
pub(crate) fn shift_right(int: &mut DigitBuf, frac: &mut DigitBuf) {
    let d = int.pop().unwrap_or(0);
    frac.push(d);
}

/// Applies `k` single-digit shifts: to the left for positive `k`, to the
/// right for negative `k`. The work is O(|k|).
pub(crate) fn shift_many(int: &mut DigitBuf, frac: &mut DigitBuf, mut k: Exponent) {
    while k > 0 {
        shift_left(int, frac);
        k -= 1;
    }
    while k < 0 {
        shift_right(int, frac);
        k += 1;
    }
}
