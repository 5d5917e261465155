//! Decomposition formatting and string conversion.

use crate::defs::Exponent;
use crate::defs::Value;
use crate::defs::F32_SIG_DIGITS;
use crate::defs::F64_SIG_DIGITS;
use crate::num::Decomposition;
use crate::shift;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

const DIGIT_CHARS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Converts `v` to its textual form. Floats are formatted with the minimum
/// number of significant digits that guarantees an exact round trip through
/// decimal text (9 for `f32`, 17 for `f64`); everything else keeps its
/// default textual form.
///
/// This step never fails: text that is not a number (including `NaN` and
/// the infinities, which have no place in the recognition grammar) simply
/// fails to parse downstream.
pub fn stringify(v: &Value) -> String {
    match v {
        Value::F32(f) => format!("{:.*e}", F32_SIG_DIGITS - 1, f),
        Value::F64(f) => format!("{:.*e}", F64_SIG_DIGITS - 1, f),
        Value::Other(s) => s.clone(),
    }
}

impl Decomposition {
    /// Builds the canonical decimal string `[-]INTEGER[.FRACTIONAL]`:
    /// the exponent is normalized to zero by shifting digits across the
    /// decimal point, residual leading integer zeroes and trailing
    /// fractional zeroes are stripped, the integer part renders at least
    /// `0`, the fractional part is omitted entirely when empty, and a zero
    /// result carries no sign.
    ///
    /// Returns None for an invalid decomposition.
    pub fn join(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }

        let mut d = self.clone();
        let e = d.exponent();
        let (int, frac) = d.buffers_mut();

        // bring the exponent to zero by moving digits between the buffers
        shift::shift_many(int, frac, e);

        // the shifts can leave synthesized or repositioned zeroes at either
        // edge; frac holds its least significant digit first, so the
        // number's trailing zeroes sit at the front of the buffer
        int.trunc_leading_zeroes();
        frac.trunc_leading_zeroes();

        let negative = self.is_negative() && !(int.is_empty() && frac.is_empty());

        let mut out = String::with_capacity(int.len() + frac.len() + 2);

        if negative {
            out.push('-');
        }

        if int.is_empty() {
            out.push('0');
        } else {
            for &dg in int.iter() {
                out.push(DIGIT_CHARS[dg as usize]);
            }
        }

        if !frac.is_empty() {
            out.push('.');
            for &dg in frac.iter().rev() {
                out.push(DIGIT_CHARS[dg as usize]);
            }
        }

        Some(out)
    }
}

/// Rounds `v` to `n` decimal places and returns the canonical decimal
/// string, or None if `v` has no parseable numeric form.
pub fn round_decimal(v: &Value, n: Exponent) -> Option<String> {
    round_decimal_str(&stringify(v), n)
}

/// Rounds the number spelled out by `s` to `n` decimal places and returns
/// the canonical decimal string, or None if `s` does not parse.
pub fn round_decimal_str(s: &str, n: Exponent) -> Option<String> {
    Decomposition::parse(s).round_to(n).join()
}
