//! Definitions.

use core::fmt::Display;
use core::num::ParseFloatError;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// An exponent.
///
/// The exponent of a decomposition is bounded by the platform's native signed
/// integer width; exponent text that does not fit invalidates the whole
/// decomposition.
pub type Exponent = isize;

/// Number of significant decimal digits that guarantees an `f32` can be
/// read back in exactly from its decimal text form.
pub const F32_SIG_DIGITS: usize = 9;

/// Number of significant decimal digits that guarantees an `f64` can be
/// read back in exactly from its decimal text form.
pub const F64_SIG_DIGITS: usize = 17;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// The decomposition does not represent a successfully parsed number.
    ParseFailure,

    /// The value is too large in magnitude for the requested float width.
    ExponentOverflow(Sign),

    /// Error passed through from the underlying decimal-to-float conversion.
    Conversion(ParseFloatError),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ParseFailure => f.write_str("failed to parse the input as a decimal number"),
            Error::ExponentOverflow(s) => {
                if s.is_positive() {
                    f.write_str("positive overflow")
                } else {
                    f.write_str("negative overflow")
                }
            }
            Error::Conversion(e) => e.fmt(f),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExponentOverflow(l0), Self::ExponentOverflow(r0)) => l0 == r0,
            (Self::Conversion(l0), Self::Conversion(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// An input value accepted by [stringify](crate::stringify).
///
/// The set of shapes is closed: 32-bit and 64-bit floats get
/// round-trip-exact formatting, anything else is carried in its default
/// textual form and stands or falls with the recognition grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit floating point number.
    F32(f32),

    /// A 64-bit floating point number.
    F64(f64),

    /// Any other value, in its default textual form.
    Other(String),
}

impl Value {
    /// Wraps a value using its default textual representation.
    pub fn other<T: Display>(v: T) -> Self {
        Value::Other(v.to_string())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Other(v)
    }
}

macro_rules! impl_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::other(v)
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, &str);
