//! Conversion of a decomposition to machine floating point types.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::Decomposition;

/// Binary exponent range of an IEEE 754 double; a decimal exponent outside
/// of it cannot possibly produce a finite normal `f64`.
const F64_EXP_MIN: Exponent = -1022;
const F64_EXP_MAX: Exponent = 1023;

/// Binary exponent range of an IEEE 754 single.
const F32_EXP_MIN: Exponent = -126;
const F32_EXP_MAX: Exponent = 127;

impl Decomposition {
    /// Converts the decomposition to an `f64` by serializing it to the
    /// canonical decimal string and delegating to the platform's
    /// decimal-to-float conversion.
    ///
    /// ## Errors
    ///
    ///  - ParseFailure: the decomposition is invalid.
    ///  - ExponentOverflow: the value is too large in magnitude for `f64`.
    ///  - Conversion: the underlying conversion failed; passed through
    ///    verbatim.
    pub fn to_f64(&self) -> Result<f64, Error> {
        let s = self.join().ok_or(Error::ParseFailure)?;

        let f = s.parse::<f64>().map_err(Error::Conversion)?;

        // the platform conversion saturates to infinity instead of
        // reporting the value out of range
        if f.is_infinite() {
            return Err(Error::ExponentOverflow(self.sign()));
        }

        Ok(f)
    }

    /// Converts the decomposition to an `f32`. See [Decomposition::to_f64].
    pub fn to_f32(&self) -> Result<f32, Error> {
        let s = self.join().ok_or(Error::ParseFailure)?;

        let f = s.parse::<f32>().map_err(Error::Conversion)?;

        if f.is_infinite() {
            return Err(Error::ExponentOverflow(self.sign()));
        }

        Ok(f)
    }

    /// Checks that the decimal exponent lies within the binary exponent
    /// range of an `f64` and passes the decomposition through unchanged;
    /// an exponent outside of the range yields the invalid decomposition.
    ///
    /// This is a coarse pre-check only: it bounds the exponent field, not
    /// the magnitude of the represented value.
    pub fn ensure_exponent_f64(&self) -> Self {
        self.ensure_exponent_in(F64_EXP_MIN, F64_EXP_MAX)
    }

    /// Checks that the decimal exponent lies within the binary exponent
    /// range of an `f32`. See [Decomposition::ensure_exponent_f64].
    pub fn ensure_exponent_f32(&self) -> Self {
        self.ensure_exponent_in(F32_EXP_MIN, F32_EXP_MAX)
    }

    fn ensure_exponent_in(&self, min: Exponent, max: Exponent) -> Self {
        if !self.is_valid() || self.exponent() < min || self.exponent() > max {
            return Self::invalid();
        }
        self.clone()
    }
}
