//! Parser for decimal numbers in plain and scientific notation.
//!
//! The recognized grammar is `[+|-]DIGITS[.DIGITS][MARKER [+|-]DIGITS]`,
//! where `MARKER` is one of `e`, `x10^`, or `*10^` (case insensitive), and
//! the match must cover the whole input. The integer digits are mandatory;
//! in particular a leading-only decimal point like `.5` does not parse.

use crate::common::buf::DigitBuf;
use crate::defs::Exponent;
use crate::defs::Sign;

#[cfg(feature = "std")]
use std::str::Chars;

#[cfg(not(feature = "std"))]
use {alloc::string::String, core::str::Chars};

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    int_digits: DigitBuf,
    frac_digits: DigitBuf,
    e: Exponent,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            int_digits: DigitBuf::new(),
            frac_digits: DigitBuf::new(),
            e: 0,
            valid: false,
        }
    }

    /// Returns the next character of the input in lower case,
    /// or None if the end of the input was reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns sign, integer digits, fractional digits, and exponent.
    /// Both digit buffers hold their most significant digit first.
    pub fn into_raw_parts(self) -> (Sign, DigitBuf, DigitBuf, Exponent) {
        (self.sign, self.int_digits, self.frac_digits, self.e)
    }
}

/// Parses a decimal number. The input must already be free of whitespace
/// and separators.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    // the integer part is mandatory
    if matches!(ch, Some('0'..='9')) {
        parse_num(&mut parser_state);
    }

    parser_state
}

fn parse_num(parser_state: &mut ParserState) {
    parse_int_digits(parser_state);

    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        if parse_frac_digits(parser_state) == 0 {
            // a decimal point must be followed by at least one digit
            return;
        }
    }

    match parser_state.cur_char() {
        Some('e') => {
            parser_state.next_char();
            if !parse_exp(parser_state) {
                return;
            }
        }
        Some('x' | '*') => {
            if !parse_power_marker(parser_state) {
                return;
            }
            if !parse_exp(parser_state) {
                return;
            }
        }
        Some(_) => return,
        None => {}
    }

    if parser_state.cur_char().is_some() {
        return;
    }

    parser_state.frac_digits.trunc_trailing_zeroes();

    if parser_state.sign.is_negative()
        && parser_state.int_digits.is_empty()
        && parser_state.frac_digits.is_empty()
    {
        // the expression evaluates to zero, drop the sign
        parser_state.sign = Sign::Pos;
    }

    parser_state.valid = true;
}

/// Consumes the integer digits, skipping leading zeroes.
fn parse_int_digits(parser_state: &mut ParserState) {
    let mut ch = parser_state.cur_char();

    while let Some('0') = ch {
        ch = parser_state.next_char();
    }

    while let Some(c @ '0'..='9') = ch {
        parser_state.int_digits.push(c as u8 - b'0');
        ch = parser_state.next_char();
    }
}

/// Consumes the fractional digits and returns how many there were.
fn parse_frac_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c @ '0'..='9') = ch {
        parser_state.frac_digits.push(c as u8 - b'0');
        len += 1;
        ch = parser_state.next_char();
    }

    len
}

/// Consumes the `10^` tail of an `x10^` or `*10^` exponent marker.
fn parse_power_marker(parser_state: &mut ParserState) -> bool {
    let one = parser_state.next_char();
    let zero = parser_state.next_char();
    let caret = parser_state.next_char();

    if Some('1') == one && Some('0') == zero && Some('^') == caret {
        parser_state.next_char();
        true
    } else {
        false
    }
}

/// Consumes an optionally signed exponent and converts it with the platform's
/// bounded integer parser. Text that does not fit in [Exponent] fails.
fn parse_exp(parser_state: &mut ParserState) -> bool {
    let mut exp_text = String::new();
    let mut ch = parser_state.cur_char();

    if let Some(c @ ('+' | '-')) = ch {
        exp_text.push(c);
        ch = parser_state.next_char();
    }

    if !matches!(ch, Some('0'..='9')) {
        return false;
    }

    while let Some(c @ '0'..='9') = ch {
        exp_text.push(c);
        ch = parser_state.next_char();
    }

    match exp_text.parse::<Exponent>() {
        Ok(e) => {
            parser_state.e = e;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::iproduct;

    #[cfg(not(feature = "std"))]
    use {
        alloc::string::{String, ToString},
        alloc::vec,
        alloc::vec::Vec,
    };

    #[test]
    fn test_parser() {
        // combinations of possible valid components of a number and expected
        // resulting characteristics.
        let mantissas = [
            "0",
            "0.0",
            "00123",
            "456",
            "789.012",
            "0.0078",
            "1.000",
            "00021434000.002888000",
        ];
        let expected_ints: [Vec<u8>; 8] = [
            vec![],
            vec![],
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![],
            vec![1],
            vec![2, 1, 4, 3, 4, 0, 0, 0],
        ];
        let expected_fracs: [Vec<u8>; 8] = [
            vec![],
            vec![],
            vec![],
            vec![],
            vec![0, 1, 2],
            vec![0, 0, 7, 8],
            vec![],
            vec![0, 0, 2, 8, 8, 8],
        ];

        let signs = ["", "+", "-"];
        let expected_signs = [Sign::Pos, Sign::Pos, Sign::Neg];

        let exponents = ["", "e51", "E51", "x10^51", "X10^51", "*10^51", "e-51", "e+51", "E005"];
        let expected_exponents = [0, 51, 51, 51, 51, 51, -51, 51, 5];

        for (i, j, k) in iproduct!(0..signs.len(), 0..mantissas.len(), 0..exponents.len()) {
            let numstr = String::from(signs[i]) + mantissas[j] + exponents[k];

            let ps = parse(&numstr);
            assert!(ps.is_valid(), "{}", numstr);

            let zero = expected_ints[j].is_empty() && expected_fracs[j].is_empty();

            let (s, int, frac, e) = ps.into_raw_parts();
            if zero {
                // a zero never carries a sign
                assert_eq!(s, Sign::Pos, "{}", numstr);
            } else {
                assert_eq!(s, expected_signs[i], "{}", numstr);
            }
            assert_eq!(&int[..], &expected_ints[j][..], "{}", numstr);
            assert_eq!(&frac[..], &expected_fracs[j][..], "{}", numstr);
            assert_eq!(e, expected_exponents[k], "{}", numstr);
        }
    }

    #[test]
    fn test_parser_invalid() {
        for s in [
            "",
            "-",
            "+",
            ".5",
            "-.5",
            "1.",
            "1.e5",
            "e5",
            "1e",
            "1e+",
            "1x10^",
            "1x11^5",
            "1*10^+",
            "abc",
            "1a",
            "1.2.3",
            "1e5e5",
            "--1",
            "1 000", // separators must be stripped before parsing
            "nan",
            "inf",
            "-inf",
            "1e99999999999999999999999999999999999999999999999999999999999999999",
            "1e-99999999999999999999999999999999999999999999999999999999999999999",
        ] {
            let ps = parse(s);
            assert!(!ps.is_valid(), "{}", s);
        }
    }

    #[test]
    fn test_parser_exponent_bounds() {
        let max = Exponent::MAX;
        let min = Exponent::MIN;

        let numstr = ["1e", &max.to_string()].concat();
        let ps = parse(&numstr);
        assert!(ps.is_valid());
        assert_eq!(ps.into_raw_parts().3, max);

        let numstr = ["1e", &min.to_string()].concat();
        let ps = parse(&numstr);
        assert!(ps.is_valid());
        assert_eq!(ps.into_raw_parts().3, min);

        // one past either bound must fail as a whole
        let numstr = ["1e", &(max as i128 + 1).to_string()].concat();
        assert!(!parse(&numstr).is_valid());

        let numstr = ["1e", &(min as i128 - 1).to_string()].concat();
        assert!(!parse(&numstr).is_valid());
    }
}
