//! Serde support for [`Ratio`].
//!
//! Serialization writes the canonical `{num, den}` pair. Deserialization
//! re-validates through the fallible constructor, so a payload cannot
//! smuggle in a zero denominator or a non-canonical form; inputs such as
//! `{"num": 2, "den": 4}` come back as the canonical `1/2`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Int;

use super::Ratio;

#[derive(Serialize, Deserialize)]
#[serde(rename = "Ratio")]
struct RawRatio {
    num: Int,
    den: Int,
}

impl Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawRatio {
            num: self.num(),
            den: self.den(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRatio::deserialize(deserializer)?;
        Ratio::try_new(raw.num.into(), raw.den.into()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_equality() {
        let r = Ratio::new(-3, 9);
        let json = serde_json::to_string(&r).unwrap();
        let back: Ratio = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn serializes_canonical_components() {
        let r = Ratio::new(4, -8);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json, serde_json::json!({ "num": -1, "den": 2 }));
    }

    #[test]
    fn deserialization_canonicalizes() {
        let r: Ratio = serde_json::from_str(r#"{"num": 2, "den": 4}"#).unwrap();
        assert_eq!(r, Ratio::new(1, 2));
    }

    #[test]
    fn zero_denominator_payload_is_rejected() {
        let err = serde_json::from_str::<Ratio>(r#"{"num": 1, "den": 0}"#).unwrap_err();
        assert!(err.to_string().contains("denominator"));
    }
}
