//! Entity identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FieldError, FieldKind};
use crate::foundation::{Field, Validate};
use crate::raw::{self, JsonKind};
use crate::validators::no_whitespace;

/// How the identifier appeared in the feed.
#[derive(Debug, Clone, Copy)]
enum Origin {
    Text,
    Signed(i64),
    Unsigned(u64),
}

/// An identifier such as `station_id` or `vehicle_type_id`.
///
/// String identifiers may hold any text without whitespace; the empty string
/// is allowed. Some feeds publish integer identifiers instead, which are kept
/// as their decimal text. Two identifiers are equal when their text is, so
/// `"9000"` and `9000` name the same entity.
///
/// # Examples
///
/// ```
/// use gbfs_fields::foundation::Field;
/// use gbfs_fields::types::Id;
///
/// assert_eq!(Id::decode(br#""station_42""#).unwrap().as_str(), "station_42");
/// assert_eq!(Id::decode(b"9000").unwrap().as_str(), "9000");
/// assert!(Id::decode(br#""abc 123""#).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Id {
    text: String,
    origin: Origin,
}

impl Id {
    /// Creates an identifier from text, rejecting any whitespace code point.
    pub fn new(text: impl Into<String>) -> Result<Self, FieldError> {
        let text = text.into();
        no_whitespace().validate(&text)?;
        Ok(Self {
            text,
            origin: Origin::Text,
        })
    }

    fn from_number(number: &serde_json::Number) -> Result<Self, FieldError> {
        if let Some(n) = number.as_u64() {
            Ok(Self::from(n))
        } else if let Some(n) = number.as_i64() {
            Ok(Self::from(n))
        } else {
            Err(FieldError::malformed(
                FieldKind::Id,
                format!("numeric ID must be an integer, got {number}"),
            ))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the identifier was given as a JSON integer.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self.origin, Origin::Text)
    }

    /// Consumes the identifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Self {
            text: n.to_string(),
            origin: Origin::Unsigned(n),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Self {
            text: n.to_string(),
            origin: Origin::Signed(n),
        }
    }
}

impl FromStr for Id {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Id {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Id {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Id {}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Field for Id {
    const KIND: FieldKind = FieldKind::Id;

    fn decode(raw: &[u8]) -> Result<Self, FieldError> {
        match raw::sniff(raw, Self::KIND)? {
            JsonKind::String => Self::new(raw::decode_string(raw, Self::KIND)?),
            JsonKind::Number => Self::from_number(&raw::decode_number(raw, Self::KIND)?),
            other => Err(FieldError::malformed(
                Self::KIND,
                format!("expected a string or an integer, got {other}"),
            )),
        }
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.origin {
            Origin::Text => serializer.serialize_str(&self.text),
            Origin::Signed(n) => serializer.serialize_i64(n),
            Origin::Unsigned(n) => serializer.serialize_u64(n),
        }
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string without whitespace or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
        Id::new(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Id, E> {
        Id::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
        Ok(Id::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
        Ok(Id::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

// ============================================================================
// TESTS
// ============================================================================
