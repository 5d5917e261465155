//! Decomposition of a decimal number into sign, digits, and exponent.

use crate::common::buf::DigitBuf;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::Value;
use crate::parser;
use crate::strop::stringify;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// A decimal number decomposed into a sign, integer digits, fractional
/// digits, and a decimal exponent.
///
/// A valid decomposition denotes the value
/// `sign × INTEGER.FRACTIONAL × 10 ^ exponent`, where the integer digits
/// carry no leading zeroes and the fractional digits carry no trailing
/// zeroes (an empty buffer stands for a zero part, so zero itself is two
/// empty buffers and a positive sign).
///
/// An invalid decomposition carries no information besides its invalidity;
/// its fields are always the canonical zero values, never partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    sign: Sign,
    /// Integer digits, most significant first.
    int_digits: DigitBuf,
    /// Fractional digits, least significant first. Keeping this buffer
    /// reversed lets the shift engine move digits across the decimal point
    /// by popping and pushing at the backs of both buffers.
    frac_digits: DigitBuf,
    e: Exponent,
    valid: bool,
}

impl Decomposition {
    /// Returns the canonical invalid decomposition.
    pub fn invalid() -> Self {
        Decomposition {
            sign: Sign::Pos,
            int_digits: DigitBuf::new(),
            frac_digits: DigitBuf::new(),
            e: 0,
            valid: false,
        }
    }

    /// Parses a decimal number, in plain or scientific notation
    /// (`e`, `x10^` and `*10^` markers, case insensitive), into its
    /// decomposition. All whitespace and commas are stripped first, so
    /// inputs like `"  2,000,000  "` or `"24124.2321699 x 10 ^ 51"` are
    /// accepted.
    ///
    /// Input that does not match the grammar, or carries an exponent that
    /// does not fit in [Exponent], yields the invalid decomposition.
    pub fn parse(s: &str) -> Self {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();

        let ps = parser::parse(&cleaned);
        if !ps.is_valid() {
            return Self::invalid();
        }

        let (sign, int_digits, mut frac_digits, e) = ps.into_raw_parts();
        frac_digits.reverse();

        Decomposition { sign, int_digits, frac_digits, e, valid: true }
    }

    /// Converts `v` to text with [stringify] and parses the result.
    pub fn from_value(v: &Value) -> Self {
        Self::parse(&stringify(v))
    }

    /// Assembles a decomposition from raw parts: digit values `0..=9` with
    /// the most significant digit first in both slices, and the decimal
    /// exponent of the combined mantissa.
    ///
    /// The parts are normalized on the way in: leading integer zeroes and
    /// trailing fractional zeroes are removed, and a zero mantissa loses its
    /// sign. A slice containing anything but decimal digit values yields the
    /// invalid decomposition.
    pub fn from_raw_parts(
        sign: Sign,
        int_digits: &[u8],
        frac_digits: &[u8],
        e: Exponent,
    ) -> Self {
        if int_digits.iter().chain(frac_digits.iter()).any(|&d| d > 9) {
            return Self::invalid();
        }

        let mut int_digits = DigitBuf::from(int_digits);
        int_digits.trunc_leading_zeroes();

        let mut frac_digits = DigitBuf::from(frac_digits);
        frac_digits.trunc_trailing_zeroes();
        frac_digits.reverse();

        let sign = if int_digits.is_empty() && frac_digits.is_empty() {
            Sign::Pos
        } else {
            sign
        };

        Decomposition { sign, int_digits, frac_digits, e, valid: true }
    }

    /// Returns true if the decomposition represents a parsed number.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the sign. Zero and invalid decompositions are positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if the represented value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns the decimal exponent.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the integer digits, most significant first.
    pub fn integer_digits(&self) -> &[u8] {
        &self.int_digits
    }

    /// Returns the fractional digits, most significant first (i.e. starting
    /// immediately after the decimal point).
    pub fn fractional_digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.frac_digits.iter().rev().copied()
    }

    pub(crate) fn sign_mut(&mut self) -> &mut Sign {
        &mut self.sign
    }

    pub(crate) fn buffers_mut(&mut self) -> (&mut DigitBuf, &mut DigitBuf) {
        (&mut self.int_digits, &mut self.frac_digits)
    }

    pub(crate) fn set_exponent(&mut self, e: Exponent) {
        self.e = e;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[cfg(not(feature = "std"))]
    use {alloc::vec, alloc::vec::Vec};

    #[test]
    fn test_parse() {
        // plain integers
        let d = Decomposition::parse("214888");
        assert!(d.is_valid());
        assert_eq!(d.sign(), Sign::Pos);
        assert_eq!(d.integer_digits(), [2, 1, 4, 8, 8, 8]);
        assert_eq!(d.fractional_digits().count(), 0);
        assert_eq!(d.exponent(), 0);

        // signs with whitespace
        assert_eq!(Decomposition::parse("+ 214888"), Decomposition::parse("214888"));
        let d = Decomposition::parse("- 214888");
        assert!(d.is_negative());

        // commas
        let d = Decomposition::parse("25,000,000");
        assert_eq!(d.integer_digits(), [2, 5, 0, 0, 0, 0, 0, 0]);

        // leading and trailing zeroes
        let d = Decomposition::parse("00000000021434000.00288800000000000000");
        assert_eq!(d.integer_digits(), [2, 1, 4, 3, 4, 0, 0, 0]);
        assert_eq!(d.fractional_digits().collect::<Vec<_>>(), vec![0, 0, 2, 8, 8, 8]);

        // scientific notation
        let d = Decomposition::parse("-1.234456e+78");
        assert!(d.is_negative());
        assert_eq!(d.integer_digits(), [1]);
        assert_eq!(d.fractional_digits().collect::<Vec<_>>(), vec![2, 3, 4, 4, 5, 6]);
        assert_eq!(d.exponent(), 78);
    }

    #[test]
    fn test_parse_negative_zero() {
        let d = Decomposition::parse("-0");
        assert!(d.is_valid());
        assert!(!d.is_negative());
        assert!(d.integer_digits().is_empty());
        assert_eq!(d.fractional_digits().count(), 0);

        let d = Decomposition::parse("-0.000e99");
        assert!(d.is_valid());
        assert!(!d.is_negative());
    }

    #[test]
    fn test_parse_invalid() {
        let d = Decomposition::parse(".00124");
        assert!(!d.is_valid());
        assert_eq!(d, Decomposition::invalid());

        let d = Decomposition::parse(
            "1 x 10 ^ 9999999999999999999999999999999999999999999999999999999999999999999",
        );
        assert!(!d.is_valid());
        assert_eq!(d, Decomposition::invalid());
    }

    #[test]
    fn test_scientific_notation_equivalence() {
        let a = Decomposition::parse("24124.2321699 x 10 ^ 51");
        let b = Decomposition::parse("24124.2321699 * 10 ^ 51");
        let c = Decomposition::parse("24124.2321699E51");

        assert!(a.is_valid());
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.integer_digits(), [2, 4, 1, 2, 4]);
        assert_eq!(a.fractional_digits().collect::<Vec<_>>(), vec![2, 3, 2, 1, 6, 9, 9]);
        assert_eq!(a.exponent(), 51);
    }

    #[test]
    fn test_from_raw_parts() {
        let d = Decomposition::from_raw_parts(Sign::Neg, &[0, 1, 2], &[3, 4, 0], -7);
        assert!(d.is_valid());
        assert!(d.is_negative());
        assert_eq!(d.integer_digits(), [1, 2]);
        assert_eq!(d.fractional_digits().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(d.exponent(), -7);
        assert_eq!(d, Decomposition::parse("-12.34e-7"));

        // zero loses the sign
        let d = Decomposition::from_raw_parts(Sign::Neg, &[0], &[0, 0], 3);
        assert!(!d.is_negative());

        // digit values above 9 are rejected
        let d = Decomposition::from_raw_parts(Sign::Pos, &[1, 10], &[], 0);
        assert_eq!(d, Decomposition::invalid());
    }

    #[test]
    fn test_from_value() {
        let d = Decomposition::from_value(&Value::other(i64::MAX));
        assert_eq!(d.integer_digits(), [9, 2, 2, 3, 3, 7, 2, 0, 3, 6, 8, 5, 4, 7, 7, 5, 8, 0, 7]);

        let d = Decomposition::from_value(&Value::other(i64::MIN));
        assert!(d.is_negative());
        assert_eq!(d.integer_digits(), [9, 2, 2, 3, 3, 7, 2, 0, 3, 6, 8, 5, 4, 7, 7, 5, 8, 0, 8]);

        // values without a numeric textual form fail downstream, at parse
        let d = Decomposition::from_value(&Value::other(true));
        assert!(!d.is_valid());

        let d = Decomposition::from_value(&Value::F64(f64::NAN));
        assert!(!d.is_valid());
    }
}
