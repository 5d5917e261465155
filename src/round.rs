//! Rounding of a decomposition to a given number of decimal places.

use crate::common::buf::DigitBuf;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::Decomposition;
use crate::shift;

impl Decomposition {
    /// Rounds to `n` digits after the decimal point of the normalized
    /// (exponent-zero) representation, half away from zero in magnitude,
    /// regardless of sign. `n` may be negative: `round_to(-2)` rounds to the
    /// nearest multiple of 100.
    ///
    /// The returned decomposition carries an adjusted exponent and an empty
    /// fractional buffer. Rounding an invalid decomposition yields the
    /// invalid decomposition. The work and transient allocation are
    /// proportional to `|n + exponent|`, since the decimal point is moved
    /// one digit at a time.
    pub fn round_to(&self, n: Exponent) -> Self {
        if !self.is_valid() {
            return Self::invalid();
        }

        let mut d = self.clone();

        // adjust the requested decimal place by the exponent, so the shift
        // targets the point of the normalized representation: rounding
        // 12.1456 x 10 ^ 1 (= 121.456) to two places must consume three
        // fractional digits, not two
        let k = match n.checked_add(d.exponent()) {
            Some(k) => k,
            None => return Self::invalid(),
        };

        // every left shift decrements the exponent and every right shift
        // increments it, so the exponent lands at -n
        let e = match d.exponent().checked_sub(k) {
            Some(e) => e,
            None => return Self::invalid(),
        };
        let (int, frac) = d.buffers_mut();
        shift::shift_many(int, frac, k);

        // round half up by the digit immediately after the target point;
        // the fractional buffer has no trailing zeroes, so no look-ahead at
        // the remaining digits is needed
        if frac.last().map_or(false, |&dg| dg >= 5) {
            increment(int);
        }

        // the remaining fractional digits are rounded away
        frac.clear();

        if int.is_empty() {
            // the result is zero, drop the sign
            *d.sign_mut() = Sign::Pos;
        }

        d.set_exponent(e);
        d
    }
}

/// Increments the integer the buffer spells out (most significant digit
/// first) by one, propagating the carry towards the most significant digit
/// and growing the buffer when all digits were nines.
fn increment(int: &mut DigitBuf) {
    for d in int.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    int.prepend(1);
}
