//! Decround implements exact, string-based parsing, normalization, and
//! rounding of decimal numbers of arbitrary magnitude and precision. The
//! core pipeline never touches binary floating point arithmetic: a number is
//! decomposed into sign, integer digits, fractional digits, and a decimal
//! exponent, reshaped by moving single digits across the decimal point, and
//! reassembled into a canonical decimal string.
//!
//! Input may be loosely formatted: signs, comma separators, whitespace, and
//! scientific notation in several spellings (`e`, `x10^`, `*10^`) are all
//! accepted.
//!
//! ``` rust
//! use decround::{round_decimal_str, Decomposition, Value};
//!
//! // round to two decimal places, exactly
//! assert_eq!(round_decimal_str("1,234.5 x 10 ^ -2", 2), Some("12.35".to_owned()));
//!
//! // floats round-trip exactly through their decomposition
//! let d = Decomposition::from_value(&Value::F64(0.1));
//! assert_eq!(d.to_f64().unwrap(), 0.1);
//!
//! // arbitrary magnitude without precision loss
//! let s = round_decimal_str("4 * 10 ^ 1000", 0).unwrap();
//! assert_eq!(s.len(), 1001);
//! ```
//!
//! All operations are pure transformations of their inputs; there is no
//! shared state, and independent call chains may run concurrently without
//! coordination. Malformed input never panics the pipeline: it degrades to
//! an invalid [Decomposition], `None`, or an [Error] at each stage boundary.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod conv;
mod defs;
mod num;
mod parser;
mod round;
mod shift;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::defs::Value;
pub use crate::defs::F32_SIG_DIGITS;
pub use crate::defs::F64_SIG_DIGITS;
pub use crate::num::Decomposition;
pub use crate::strop::round_decimal;
pub use crate::strop::round_decimal_str;
pub use crate::strop::stringify;
