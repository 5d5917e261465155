//! Serialization of Decomposition.
//! A valid decomposition serializes to its canonical decimal string.

use crate::Decomposition;
use serde::ser::Error;
use serde::{Serialize, Serializer};

impl Serialize for Decomposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.join() {
            Some(s) => serializer.serialize_str(&s),
            None => Err(Error::custom("invalid decomposition")),
        }
    }
}
