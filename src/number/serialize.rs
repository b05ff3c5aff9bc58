//! Serde support. Numbers are serialized as decimal strings to preserve precision.

use ::serde::{ de::{ self, Visitor }, Deserialize, Deserializer, Serialize, Serializer };
use std::fmt;
use super::Number;

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or its string representation")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Number, E> {
        Number::from_string(v).map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Number, E> {
        Ok( Number::from_int(v) )
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Number, E> {
        Ok( Number::from_int(v) )
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Number, E> {
        Ok( Number::from_int(v) )
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Number, E> {
        Ok( Number::from_int(v) )
    }

    // Display of f64 is the shortest text that reads back as the same value
    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Number, E> {
        Number::from_string(&v.to_string()).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}
