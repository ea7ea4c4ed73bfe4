//! Prices published either as JSON numbers or as JSON strings.
//!
//! GBFS allows `"price": 2.5` and `"price": "2.50"` alike. A [`Price`] accepts
//! both, validates the magnitude once, and remembers which form it came from
//! so it can be written back the same way.
//!
//! # Canonical strings
//!
//! A string source keeps its literal as the display form. A number source
//! derives its display form from the value, using the
//! [`NonNegativeFloat`] rendering. The two paths therefore disagree on zero:
//!
//! ```
//! use gbfs_fields::foundation::Field;
//! use gbfs_fields::types::Price;
//!
//! assert_eq!(Price::decode(br#""0""#).unwrap().as_str(), "0");
//! assert_eq!(Price::decode(b"0.0").unwrap().as_str(), "0.0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FieldError, FieldKind};
use crate::foundation::Field;
use crate::raw::{self, JsonKind};
use crate::types::NonNegativeFloat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Number,
    Text,
}

/// A non-negative, finite price with its canonical display string.
///
/// [`as_f64`](Self::as_f64) and [`as_str`](Self::as_str) always agree:
/// parsing the string yields the float.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    amount: NonNegativeFloat,
    display: String,
    origin: Origin,
}

impl Price {
    /// Creates a price from a numeric amount.
    ///
    /// # Errors
    ///
    /// [`FieldError::RangeViolation`] for negative amounts and
    /// [`FieldError::MalformedValue`] for infinities and `NaN`.
    pub fn from_number(value: f64) -> Result<Self, FieldError> {
        let amount = NonNegativeFloat::new_as(FieldKind::Price, value)?;
        Ok(Self {
            display: amount.to_string(),
            amount,
            origin: Origin::Number,
        })
    }

    /// Creates a price from its textual form, which becomes the display string.
    ///
    /// # Errors
    ///
    /// [`FieldError::MalformedValue`] when the text is not a finite JSON
    /// number literal, and [`FieldError::RangeViolation`] when it carries a
    /// minus sign.
    pub fn from_string(text: impl Into<String>) -> Result<Self, FieldError> {
        let display = text.into();
        let value = parse_amount(&display)?;
        // "-0" is numerically zero but would display a sign.
        if display.starts_with('-') {
            return Err(FieldError::RangeViolation {
                kind: FieldKind::Price,
                value: display,
                bound: ">= 0.0".to_owned(),
            });
        }
        let amount = NonNegativeFloat::new_as(FieldKind::Price, value)?;
        Ok(Self {
            amount,
            display,
            origin: Origin::Text,
        })
    }

    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.amount.get()
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn amount(&self) -> NonNegativeFloat {
        self.amount
    }

    /// Whether the price was given as a JSON string.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self.origin, Origin::Text)
    }
}

/// Parses `text` as a JSON number literal: no `+`, no bare `.5` or `5.`, no
/// leading zeros and no surrounding whitespace.
fn parse_amount(text: &str) -> Result<f64, FieldError> {
    let malformed =
        || FieldError::malformed(FieldKind::Price, format!("`{text}` is not a JSON number"));

    // serde_json tolerates surrounding whitespace, `str::parse` does not.
    serde_json::from_str::<serde_json::Number>(text).map_err(|_| malformed())?;
    text.parse().map_err(|_| malformed())
}

impl FromStr for Price {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<f64> for Price {
    type Error = FieldError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Field for Price {
    const KIND: FieldKind = FieldKind::Price;

    fn decode(raw: &[u8]) -> Result<Self, FieldError> {
        let kind = raw::sniff(raw, Self::KIND)?;
        tracing::trace!(source = %kind, "decoding price");

        match kind {
            JsonKind::Number => Self::from_number(raw::decode_f64(raw, Self::KIND)?),
            JsonKind::String => Self::from_string(raw::decode_string(raw, Self::KIND)?),
            found => Err(FieldError::InvalidPriceType { found }),
        }
    }
}

// ============================================================================
// SERDE
// ============================================================================

/// Largest integer every smaller integer of which an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.origin {
            Origin::Text => serializer.serialize_str(&self.display),
            Origin::Number => {
                let amount = self.as_f64();
                // Integral amounts print without a fraction, as `as_str` does.
                // Zero keeps its "0.0" form.
                if amount != 0.0 && amount.fract() == 0.0 && amount <= MAX_EXACT_INTEGER {
                    serializer.serialize_u64(amount as u64)
                } else {
                    serializer.serialize_f64(amount)
                }
            }
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_number(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::from_number(v as f64).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Price::from_number(v as f64).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::from_string(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Price, E> {
        Price::from_string(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Price, E> {
        Err(E::custom(FieldError::InvalidPriceType {
            found: JsonKind::Boolean,
        }))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Price, E> {
        Err(E::custom(FieldError::InvalidPriceType {
            found: JsonKind::Null,
        }))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<Price, A::Error> {
        Err(de::Error::custom(FieldError::InvalidPriceType {
            found: JsonKind::Array,
        }))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<Price, A::Error> {
        Err(de::Error::custom(FieldError::InvalidPriceType {
            found: JsonKind::Object,
        }))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(br#""3.14159""#, 3.14159, "3.14159")]
    #[case(b"3.14159", 3.14159, "3.14159")]
    #[case(br#""0""#, 0.0, "0")]
    #[case(br#""0.0""#, 0.0, "0.0")]
    #[case(b"0.0", 0.0, "0.0")]
    #[case(b"0", 0.0, "0.0")]
    #[case(br#""2.50""#, 2.5, "2.50")]
    #[case(b"2.50", 2.5, "2.5")]
    #[case(b"12", 12.0, "12")]
    fn decodes(#[case] raw: &[u8], #[case] amount: f64, #[case] display: &str) {
        let price = Price::decode(raw).unwrap();
        assert_eq!(price.as_f64(), amount);
        assert_eq!(price.as_str(), display);
    }

    #[rstest]
    #[case(b"{}", JsonKind::Object)]
    #[case(b"[]", JsonKind::Array)]
    #[case(b"true", JsonKind::Boolean)]
    #[case(b"false", JsonKind::Boolean)]
    #[case(b"null", JsonKind::Null)]
    #[case(br#"{"amount": 1}"#, JsonKind::Object)]
    fn rejects_other_kinds(#[case] raw: &[u8], #[case] found: JsonKind) {
        assert_eq!(
            Price::decode(raw).unwrap_err(),
            FieldError::InvalidPriceType { found }
        );
    }

    #[rstest]
    #[case(br#""-3.14159""#)]
    #[case(b"-3.14159")]
    #[case(b"-1")]
    #[case(br#""-0""#)]
    #[case(br#""-0.0""#)]
    fn rejects_negative(#[case] raw: &[u8]) {
        let err = Price::decode(raw).unwrap_err();
        assert_eq!(err.code(), "FIELD_RANGE");
        assert_eq!(err.kind(), Some(FieldKind::Price));
    }

    #[rstest]
    #[case(br#""NaN""#)]
    #[case(br#""inf""#)]
    #[case(br#""1e400""#)]
    #[case(br#""free""#)]
    #[case(br#""""#)]
    #[case(br#"" 2.0""#)]
    #[case(br#""2.0 ""#)]
    #[case(br#""+5""#)]
    #[case(br#"".5""#)]
    #[case(br#""5.""#)]
    #[case(br#""007""#)]
    #[case(br#""0x10""#)]
    fn rejects_non_numeric_strings(#[case] raw: &[u8]) {
        let err = Price::decode(raw).unwrap_err();
        assert_eq!(err.code(), "FIELD_MALFORMED");
        assert_eq!(err.kind(), Some(FieldKind::Price));
    }

    #[test]
    fn malformed_text_is_quoted_verbatim() {
        let err = Price::from_string("Infinity").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed Price value: `Infinity` is not a JSON number"
        );
    }

    #[test]
    fn negative_zero_text_keeps_its_literal_in_the_error() {
        assert_eq!(
            Price::from_string("-0").unwrap_err(),
            FieldError::RangeViolation {
                kind: FieldKind::Price,
                value: "-0".into(),
                bound: ">= 0.0".into(),
            }
        );
    }

    #[test]
    fn extremes_round_trip_as_numbers() {
        for value in [f64::MAX, 5e-324] {
            let price = Price::from_number(value).unwrap();
            assert_eq!(price.as_f64(), value);
            assert_eq!(price.as_str().parse::<f64>().unwrap(), value);

            let json = serde_json::to_string(&price).unwrap();
            let back: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(back.as_f64(), value);
        }
    }

    #[test]
    fn string_and_float_agree() {
        let cases: [&[u8]; 3] = [br#""7.25""#, b"7.25", br#""1e2""#];
        for raw in cases {
            let price = Price::decode(raw).unwrap();
            assert_eq!(price.as_str().parse::<f64>().unwrap(), price.as_f64());
        }
    }

    #[test]
    fn serializes_in_source_form() {
        let text = Price::from_string("2.50").unwrap();
        let number = Price::from_number(2.5).unwrap();
        assert!(text.is_textual());
        assert!(!number.is_textual());
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""2.50""#);
        assert_eq!(serde_json::to_string(&number).unwrap(), "2.5");
    }

    #[rstest]
    #[case(b"2", "2")]
    #[case(b"2.0", "2")]
    #[case(b"2.5", "2.5")]
    #[case(b"0", "0.0")]
    #[case(b"9007199254740992", "9007199254740992")]
    fn numeric_json_matches_display(#[case] raw: &[u8], #[case] json: &str) {
        let price = Price::decode(raw).unwrap();
        assert_eq!(price.as_str(), json);
        assert_eq!(serde_json::to_string(&price).unwrap(), json);

        let back: Price = serde_json::from_str(json).unwrap();
        assert_eq!((back.as_f64(), back.as_str()), (price.as_f64(), price.as_str()));
    }

    #[test]
    fn deserialize_rejects_other_kinds() {
        let err = serde_json::from_str::<Price>("true").unwrap_err();
        assert!(err.to_string().contains("price must be a number or a string, got boolean"));
        assert!(serde_json::from_str::<Price>("[1]").is_err());
        assert!(serde_json::from_str::<Price>(r#"{"a":1}"#).is_err());
        assert!(serde_json::from_str::<Price>("null").is_err());
    }
}
