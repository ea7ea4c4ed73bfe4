//! Non-negative counts and magnitudes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combinators::And;
use crate::error::{FieldError, FieldKind};
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::{AtLeast, Finite};

const NON_NEGATIVE_INT: AtLeast<i64> = AtLeast::new(FieldKind::NonNegativeInt, 0);
const NON_NEGATIVE_FLOAT: And<Finite, AtLeast<f64>> = And::new(
    Finite::new(FieldKind::NonNegativeFloat),
    AtLeast::new(FieldKind::NonNegativeFloat, 0.0),
);

// ============================================================================
// NON-NEGATIVE INT
// ============================================================================

/// An integer count `>= 0`, such as `num_bikes_available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct NonNegativeInt(u64);

impl NonNegativeInt {
    /// Creates a count from a signed integer, rejecting negatives.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        NON_NEGATIVE_INT.validate(&value)?;
        Ok(Self(value.unsigned_abs()))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for NonNegativeInt {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegativeInt> for u64 {
    fn from(n: NonNegativeInt) -> Self {
        n.0
    }
}

impl fmt::Display for NonNegativeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

field_decoder!(NonNegativeInt as NonNegativeInt via decode_i64);

// ============================================================================
// NON-NEGATIVE FLOAT
// ============================================================================

/// A finite floating-point magnitude `>= 0.0`.
///
/// Negative zero is stored as positive zero, so the sign never leaks into the
/// canonical rendering.
///
/// # Display
///
/// Zero renders as `"0.0"`. Every other value renders as the shortest decimal
/// that round-trips to the same `f64`, without an exponent and without
/// trailing zeros, so `3.0` renders as `"3"`.
///
/// ```
/// use gbfs_fields::types::NonNegativeFloat;
///
/// assert_eq!(NonNegativeFloat::new(0.0).unwrap().to_string(), "0.0");
/// assert_eq!(NonNegativeFloat::new(-0.0).unwrap().to_string(), "0.0");
/// assert_eq!(NonNegativeFloat::new(3.0).unwrap().to_string(), "3");
/// assert_eq!(NonNegativeFloat::new(0.25).unwrap().to_string(), "0.25");
/// assert!(NonNegativeFloat::new(-0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct NonNegativeFloat(f64);

impl NonNegativeFloat {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a magnitude, rejecting negatives, infinities and `NaN`.
    pub fn new(value: f64) -> Result<Self, FieldError> {
        NON_NEGATIVE_FLOAT.validate(&value)?;
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Like [`new`](Self::new), but reports failures against another field kind.
    pub(crate) fn new_as(field: FieldKind, value: f64) -> Result<Self, FieldError> {
        Finite::new(field).validate(&value)?;
        AtLeast::new(field, 0.0).validate(&value)?;
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for NonNegativeFloat {
    type Error = FieldError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegativeFloat> for f64 {
    fn from(n: NonNegativeFloat) -> Self {
        n.0
    }
}

impl fmt::Display for NonNegativeFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0.0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

field_decoder!(NonNegativeFloat as NonNegativeFloat via decode_f64);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use crate::foundation::Field;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"0", 0)]
    #[case(b"17", 17)]
    #[case(b"9223372036854775807", i64::MAX.unsigned_abs())]
    fn int_decodes(#[case] raw: &[u8], #[case] expected: u64) {
        assert_eq!(NonNegativeInt::decode(raw).unwrap().get(), expected);
    }

    #[test]
    fn negative_int_is_range_violation() {
        let err = NonNegativeInt::decode(b"-1").unwrap_err();
        assert_eq!(
            err,
            FieldError::RangeViolation {
                kind: FieldKind::NonNegativeInt,
                value: "-1".into(),
                bound: ">= 0".into(),
            }
        );
    }

    #[rstest]
    #[case(b"1.5")]
    #[case(b"1e3")]
    #[case(br#""12""#)]
    #[case(b"null")]
    fn int_rejects_non_integers(#[case] raw: &[u8]) {
        let err = NonNegativeInt::decode(raw).unwrap_err();
        assert_eq!(err.code(), "FIELD_MALFORMED");
    }

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(-0.0, "0.0")]
    #[case(1.0, "1")]
    #[case(3.14159, "3.14159")]
    #[case(0.1, "0.1")]
    #[case(1e21, "1000000000000000000000")]
    #[case(1.5e-7, "0.00000015")]
    fn float_display(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(NonNegativeFloat::new(value).unwrap().to_string(), expected);
    }

    #[test]
    fn float_display_round_trips() {
        for value in [0.1, 2.0 / 3.0, f64::MAX, f64::MIN_POSITIVE, 5e-324] {
            let rendered = NonNegativeFloat::new(value).unwrap().to_string();
            assert!(!rendered.contains('e'), "{rendered}");
            assert_eq!(rendered.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn negative_zero_is_normalized() {
        let zero = NonNegativeFloat::decode(b"-0.0").unwrap();
        assert!(zero.get().is_sign_positive());
        assert_eq!(zero, NonNegativeFloat::ZERO);
    }

    #[test]
    fn float_rejects_negative_and_non_finite() {
        let err = NonNegativeFloat::decode(b"-0.5").unwrap_err();
        assert_eq!(err.code(), "FIELD_RANGE");
        assert!(NonNegativeFloat::new(f64::INFINITY).is_err());
        assert!(NonNegativeFloat::new(f64::NAN).is_err());
    }

    #[test]
    fn new_as_reports_given_kind() {
        let err = NonNegativeFloat::new_as(FieldKind::Price, -2.0).unwrap_err();
        assert_eq!(err.kind(), Some(FieldKind::Price));
    }

    #[test]
    fn serde_uses_constructors() {
        let n: NonNegativeInt = serde_json::from_str("12").unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "12");
        assert!(serde_json::from_str::<NonNegativeInt>("-3").is_err());
        assert!(serde_json::from_str::<NonNegativeFloat>("-3.5").is_err());
    }
}
