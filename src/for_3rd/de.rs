//! Deserialization of Decomposition.

use core::fmt::Formatter;

use crate::defs::Value;
use crate::Decomposition;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

#[cfg(not(feature = "std"))]
use {alloc::format, alloc::string::String};

pub struct DecompositionVisitor {}

impl<'de> Deserialize<'de> for Decomposition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecompositionVisitor {})
    }
}

impl<'de> Visitor<'de> for DecompositionVisitor {
    type Value = Decomposition;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expected `String` or `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        self.checked(Decomposition::from_value(&Value::other(v)))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        self.checked(Decomposition::from_value(&Value::other(v)))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        self.checked(Decomposition::from_value(&Value::F32(v)))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        self.checked(Decomposition::from_value(&Value::F64(v)))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        self.checked(Decomposition::parse(v))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

impl DecompositionVisitor {
    fn checked<E: Error>(self, d: Decomposition) -> Result<Decomposition, E> {
        if d.is_valid() {
            Ok(d)
        } else {
            Err(Error::custom(format!("{}", crate::Error::ParseFailure)))
        }
    }
}
