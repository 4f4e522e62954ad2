//! Sequence number decoding.
//!
//! JSON Schema's `integer` type accepts any number with a zero fractional
//! part, so `1.0` is as valid as `1`. Sequence numbers are decoded the same
//! way: any integral JSON number within `i64` range.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Upper bound (exclusive) of the `f64` values that fit in an `i64`.
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Decode a sequence number written as an integer or an integral float.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    to_sequence_number(&number)
        .ok_or_else(|| D::Error::custom(format!("{number} is not a valid sequence number")))
}

fn to_sequence_number(number: &Number) -> Option<i64> {
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return None;
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= -I64_END_F64 && f < I64_END_F64 {
        Some(f as i64)
    } else {
        None
    }
}
