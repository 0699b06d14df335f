use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

/// Struct to match the JSON structure
///
/// Fields stay optional so a missing key can be reported by name, and wide
/// and signed so negative or oversized counts reach the validator instead of
/// failing to decode.
#[derive(Debug, Default, Deserialize)]
pub struct RawInput {
    #[serde(default, deserialize_with = "integer::option_seq")]
    pub scooters: Option<Vec<i128>>,
    #[serde(rename = "C", default, deserialize_with = "integer::option")]
    pub manager_capacity: Option<i128>,
    #[serde(rename = "P", default, deserialize_with = "integer::option")]
    pub engineer_capacity: Option<i128>,
}

/// A JSON integer of any size.
///
/// serde_json hands literals beyond `u64` over as floats, so integral floats
/// outside the 64-bit range are kept as integers. Every other float is a type error.
struct Integer(i128);

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntegerVisitor)
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Integer, E> {
        Ok(Integer(v as i128))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Integer, E> {
        Ok(Integer(v as i128))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Integer, E> {
        let beyond_64_bits = v >= u64::MAX as f64 || v < i64::MIN as f64;
        if v.is_finite() && v.fract() == 0.0 && beyond_64_bits {
            // `as` saturates past the i128 range.
            return Ok(Integer(v as i128));
        }
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }
}

mod integer {
    use serde::{Deserialize, Deserializer};

    use super::Integer;

    pub fn option<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i128>, D::Error> {
        Ok(Option::<Integer>::deserialize(deserializer)?.map(|i| i.0))
    }

    pub fn option_seq<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<i128>>, D::Error> {
        Ok(Option::<Vec<Integer>>::deserialize(deserializer)?
            .map(|seq| seq.into_iter().map(|i| i.0).collect()))
    }
}
