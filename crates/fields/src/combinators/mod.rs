//! Combinators for composing rules.
//!
//! Field types assemble their constraints from small rules joined with
//! [`And`]; the first failing rule decides the reported error.

pub mod and;

pub use and::{And, and};
