//! Core decoding and validation types and traits
//!
//! This module contains the fundamental building blocks of the crate:
//!
//! - **Rules**: [`Validate`], [`ValidateExt`]: stateless predicates over
//!   decoded primitives
//! - **Fields**: [`Field`], [`decode`]: typed decoders over raw JSON spans
//!
//! # Architecture
//!
//! Decoding a field happens in three steps, always in this order:
//!
//! 1. the raw span is turned into a host primitive by an adapter from
//!    [`raw`](crate::raw) (`f64`, `i64` or `String`),
//! 2. the primitive is checked by the field's rules,
//! 3. the field's smart constructor wraps the checked value.
//!
//! The first failing step ends decoding with a [`FieldError`](crate::FieldError).

pub mod field;
pub mod traits;

pub use field::{Field, decode};
pub use traits::{Validate, ValidateExt};
