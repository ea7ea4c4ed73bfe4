//! # gbfs-fields
//!
//! Typed, validated field decoders for GBFS (General Bikeshare Feed
//! Specification) documents.
//!
//! A feed decoder locates the raw JSON span of each field and hands it to the
//! matching type here. The type either produces a value that satisfies every
//! documented range, format and membership rule, or fails with a
//! [`FieldError`] naming the field kind and the violated rule.
//!
//! ## Quick Start
//!
//! ```
//! use gbfs_fields::prelude::*;
//!
//! let lat: Latitude = decode(b"45.5017").unwrap();
//! let price: Price = decode(br#""2.50""#).unwrap();
//! assert_eq!(lat.get(), 45.5017);
//! assert_eq!((price.as_f64(), price.as_str()), (2.5, "2.50"));
//!
//! let err = decode::<Url>(br#""ftp://example.com""#).unwrap_err();
//! assert_eq!(err.code(), "FIELD_URL_SCHEME");
//! ```
//!
//! Every type also implements `serde::Deserialize`, so it can sit directly in
//! a `#[derive(Deserialize)]` document struct.
//!
//! ## Layout
//!
//! - [`raw`]: kind sniffing and scalar adapters over raw JSON spans
//! - [`validators`]: stateless rules implementing
//!   [`Validate`](foundation::Validate), composed with
//!   [`ValidateExt::and`](foundation::ValidateExt::and)
//! - [`types`]: the field types themselves
//! - [`error`]: the [`FieldError`] taxonomy

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod raw;
pub mod types;
pub mod validators;

pub use error::{FieldError, FieldKind, FieldResult};
pub use foundation::{Field, decode};
