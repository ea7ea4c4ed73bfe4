//! Price: the numeric-or-string union, through both entry points.

#![allow(clippy::approx_constant)]

mod common;

use gbfs_fields::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;

// ============================================================================
// RAW SPAN DECODING
// ============================================================================

#[rstest]
#[case::string_source(br#""3.14159""#, 3.14159, "3.14159")]
#[case::number_source(b"3.14159", 3.14159, "3.14159")]
#[case::string_zero(br#""0""#, 0.0, "0")]
#[case::string_zero_fraction(br#""0.0""#, 0.0, "0.0")]
#[case::number_zero(b"0.0", 0.0, "0.0")]
#[case::padded(b"  4.5", 4.5, "4.5")]
fn decodes_both_sources(#[case] raw: &[u8], #[case] amount: f64, #[case] display: &str) {
    common::init_tracing();
    let price: Price = decode(raw).unwrap();
    assert_eq!(price.as_f64(), amount);
    assert_eq!(price.as_str(), display);
}

#[rstest]
#[case::object(b"{}", JsonKind::Object)]
#[case::array(b"[]", JsonKind::Array)]
#[case::true_literal(b"true", JsonKind::Boolean)]
#[case::false_literal(b"false", JsonKind::Boolean)]
fn rejects_non_scalar_kinds_before_parsing(#[case] raw: &[u8], #[case] found: JsonKind) {
    common::init_tracing();
    let err = decode::<Price>(raw).unwrap_err();
    assert_eq!(err, FieldError::InvalidPriceType { found });
    assert_eq!(err.category(), "type");
}

#[rstest]
#[case(br#""-3.14159""#)]
#[case(b"-3.14159")]
fn negative_magnitudes_are_range_violations(#[case] raw: &[u8]) {
    common::init_tracing();
    let err = decode::<Price>(raw).unwrap_err();
    assert!(matches!(
        err,
        FieldError::RangeViolation {
            kind: FieldKind::Price,
            ..
        }
    ));
}

#[rstest]
#[case::plus_sign(br#""+5""#)]
#[case::bare_fraction(br#"".5""#)]
#[case::trailing_point(br#""5.""#)]
#[case::leading_zeros(br#""007""#)]
#[case::padded_text(br#"" 5""#)]
fn string_prices_must_be_json_number_literals(#[case] raw: &[u8]) {
    common::init_tracing();
    let err = decode::<Price>(raw).unwrap_err();
    assert_eq!(err.code(), "FIELD_MALFORMED");
    assert_eq!(err.kind(), Some(FieldKind::Price));
}

#[test]
fn signed_zero_text_is_a_range_violation() {
    let err = decode::<Price>(br#""-0""#).unwrap_err();
    assert_eq!(err.category(), "range");
}

#[test]
fn zero_asymmetry_is_preserved() {
    let from_text = Price::from_string("0").unwrap();
    let from_number = Price::from_number(0.0).unwrap();
    assert_eq!(from_text.as_f64(), from_number.as_f64());
    assert_eq!(from_text.as_str(), "0");
    assert_eq!(from_number.as_str(), "0.0");
}

#[test]
fn extreme_magnitudes_round_trip_as_numbers() {
    let max = decode::<Price>(b"1.7976931348623157e308").unwrap();
    assert_eq!(max.as_f64(), f64::MAX);

    let tiny = decode::<Price>(b"5e-324").unwrap();
    assert_eq!(tiny.as_f64(), 5e-324);
    assert_eq!(tiny.as_str().parse::<f64>().unwrap(), 5e-324);
}

// ============================================================================
// SERDE EMBEDDING
// ============================================================================

#[derive(Debug, Deserialize)]
struct Plan {
    plan_id: Id,
    price: Price,
    currency: Currency,
    #[serde(default)]
    per_km_price: Option<Price>,
}

#[test]
fn embeds_in_document_structs() {
    let plan: Plan = serde_json::from_str(
        r#"{"plan_id": "day-pass", "price": "12.00", "currency": "cad", "per_km_price": 0.25}"#,
    )
    .unwrap();

    assert_eq!(plan.plan_id, "day-pass");
    assert_eq!(plan.price.as_str(), "12.00");
    assert_eq!(plan.price.as_f64(), 12.0);
    assert_eq!(plan.currency.as_str(), "CAD");
    assert_eq!(plan.per_km_price.map(|p| p.as_f64()), Some(0.25));
}

#[test]
fn optional_price_may_be_absent_or_null() {
    let absent: Plan =
        serde_json::from_str(r#"{"plan_id": 1, "price": 0, "currency": "USD"}"#).unwrap();
    assert!(absent.per_km_price.is_none());
    assert_eq!(absent.price.as_str(), "0.0");
    assert!(!absent.price.is_textual());

    let null: Plan = serde_json::from_str(
        r#"{"plan_id": 1, "price": 0, "currency": "USD", "per_km_price": null}"#,
    )
    .unwrap();
    assert!(null.per_km_price.is_none());
}

#[test]
fn embedded_failures_carry_the_field_error_message() {
    let err = serde_json::from_str::<Plan>(
        r#"{"plan_id": "p", "price": true, "currency": "USD"}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("price must be a number or a string, got boolean"),
        "{err}"
    );
}

#[test]
fn serialization_keeps_source_kind() {
    let prices: Vec<Price> = serde_json::from_str(r#"["1.50", 1.5, 2]"#).unwrap();
    assert_eq!(
        serde_json::to_string(&prices).unwrap(),
        r#"["1.50",1.5,2]"#
    );
}
