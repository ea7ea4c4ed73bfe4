//! Built-in rules
//!
//! Stateless predicates over decoded primitives. Each rule names the
//! [`FieldKind`](crate::FieldKind) it guards, either through a `field` member
//! or implicitly through the error variant it raises.

pub mod currency;
pub mod phone;
pub mod range;
pub mod scheme;
pub mod text;

pub use currency::{ISO_4217_CODES, Iso4217, iso_4217};
pub use phone::Phone;
pub use range::{AtLeast, Finite, InRange, at_least, finite, in_range};
pub use scheme::{HttpScheme, http_scheme};
pub use text::{EmailAddress, LanguageTag, NoWhitespace, email_address, language_tag, no_whitespace};
