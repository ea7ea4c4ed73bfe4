//! Raw JSON spans: kind sniffing and generic scalar adapters.
//!
//! A field decoder receives the exact bytes of one JSON value, located by the
//! document decoder that owns the surrounding object. [`sniff`] classifies
//! those bytes by their leading structure without parsing them, and the
//! `decode_*` adapters turn them into host primitives through `serde_json`.
//!
//! ```
//! use gbfs_fields::raw::{self, JsonKind};
//! use gbfs_fields::FieldKind;
//!
//! assert_eq!(raw::sniff(br#""3.50""#, FieldKind::Price).unwrap(), JsonKind::String);
//! assert_eq!(raw::sniff(b"3.50", FieldKind::Price).unwrap(), JsonKind::Number);
//! assert_eq!(raw::decode_f64(b"3.50", FieldKind::Price).unwrap(), 3.5);
//! ```

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{FieldError, FieldKind, FieldResult};

// ============================================================================
// KIND SNIFFER
// ============================================================================

/// The outer kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Lowercase JSON name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Classifies a raw JSON value by its first significant byte.
///
/// Only the leading structure is inspected: `"[1,"` sniffs as an array even
/// though it would not parse. `field` names the type being decoded so that a
/// failure can be attributed.
///
/// # Errors
///
/// [`FieldError::MalformedValue`] when the span is empty, whitespace only, or
/// starts with a byte no JSON value can start with.
pub fn sniff(raw: &[u8], field: FieldKind) -> FieldResult<JsonKind> {
    let Some(start) = raw.iter().position(|b| !is_json_whitespace(*b)) else {
        return Err(FieldError::malformed(field, "empty value"));
    };
    let value = &raw[start..];

    match value[0] {
        b'"' => Ok(JsonKind::String),
        b'{' => Ok(JsonKind::Object),
        b'[' => Ok(JsonKind::Array),
        b't' | b'f' => Ok(JsonKind::Boolean),
        b'-' | b'0'..=b'9' => Ok(JsonKind::Number),
        b'n' if value.starts_with(b"null") => Ok(JsonKind::Null),
        other => Err(FieldError::malformed(
            field,
            format!("unexpected leading character '{}'", other.escape_ascii()),
        )),
    }
}

// ============================================================================
// SCALAR ADAPTERS
// ============================================================================

fn decode<T: DeserializeOwned>(raw: &[u8], field: FieldKind) -> FieldResult<T> {
    serde_json::from_slice(raw).map_err(|e| FieldError::malformed(field, e.to_string()))
}

/// Decodes a JSON number into an `f64`.
///
/// Integer literals are accepted; strings, booleans and `null` are not.
pub fn decode_f64(raw: &[u8], field: FieldKind) -> FieldResult<f64> {
    decode(raw, field)
}

/// Decodes a JSON integer into an `i64`.
///
/// Fractional literals such as `1.5` are rejected rather than truncated.
pub fn decode_i64(raw: &[u8], field: FieldKind) -> FieldResult<i64> {
    decode(raw, field)
}

/// Decodes a JSON string, resolving escapes.
pub fn decode_string(raw: &[u8], field: FieldKind) -> FieldResult<String> {
    decode(raw, field)
}

/// Decodes a JSON number without committing to a host representation.
pub(crate) fn decode_number(raw: &[u8], field: FieldKind) -> FieldResult<serde_json::Number> {
    decode(raw, field)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(br#""abc""#, JsonKind::String)]
    #[case(b"{}", JsonKind::Object)]
    #[case(b"[]", JsonKind::Array)]
    #[case(b"true", JsonKind::Boolean)]
    #[case(b"false", JsonKind::Boolean)]
    #[case(b"0", JsonKind::Number)]
    #[case(b"-3.5", JsonKind::Number)]
    #[case(b"9e3", JsonKind::Number)]
    #[case(b"null", JsonKind::Null)]
    #[case(b"  \n\"padded\"", JsonKind::String)]
    fn sniffs_leading_structure(#[case] raw: &[u8], #[case] expected: JsonKind) {
        assert_eq!(sniff(raw, FieldKind::Price).unwrap(), expected);
    }

    #[rstest]
    #[case(b"")]
    #[case(b"   ")]
    #[case(b"nul")]
    #[case(b"'single'")]
    #[case(b"+1")]
    fn sniff_rejects_non_values(#[case] raw: &[u8]) {
        let err = sniff(raw, FieldKind::Price).unwrap_err();
        assert_eq!(err.code(), "FIELD_MALFORMED");
        assert_eq!(err.kind(), Some(FieldKind::Price));
    }

    #[test]
    fn sniff_does_not_parse() {
        assert_eq!(sniff(b"[1,", FieldKind::Price).unwrap(), JsonKind::Array);
    }

    #[test]
    fn decode_f64_accepts_integers() {
        assert_eq!(decode_f64(b"42", FieldKind::Latitude).unwrap(), 42.0);
        assert_eq!(decode_f64(b"-0.25", FieldKind::Latitude).unwrap(), -0.25);
    }

    #[test]
    fn decode_f64_rejects_strings() {
        let err = decode_f64(br#""42""#, FieldKind::Latitude).unwrap_err();
        assert!(matches!(
            err,
            FieldError::MalformedValue {
                kind: FieldKind::Latitude,
                ..
            }
        ));
    }

    #[test]
    fn decode_i64_rejects_fractions() {
        assert_eq!(decode_i64(b"7", FieldKind::Day).unwrap(), 7);
        assert!(decode_i64(b"7.5", FieldKind::Day).is_err());
    }

    #[test]
    fn decode_string_resolves_escapes() {
        let s = decode_string(br#""caf\u00e9""#, FieldKind::Id).unwrap();
        assert_eq!(s, "café");
        assert!(decode_string(b"12", FieldKind::Id).is_err());
    }

    #[test]
    fn trailing_bytes_are_malformed() {
        assert!(decode_f64(b"1 2", FieldKind::Latitude).is_err());
    }
}
