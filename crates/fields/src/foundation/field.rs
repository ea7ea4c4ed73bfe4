//! The field decoder trait.

use crate::error::{FieldError, FieldKind};

/// A GBFS field type decodable from one raw JSON value.
///
/// Implementors are immutable value types whose every constructor validates:
/// a successfully decoded value always satisfies the type's documented rules.
/// Decoding is a pure function of `raw`, so sibling fields of one document may
/// be decoded in any order or concurrently.
///
/// # Examples
///
/// ```
/// use gbfs_fields::foundation::Field;
/// use gbfs_fields::types::Latitude;
///
/// let lat = Latitude::decode(b"45.5017").unwrap();
/// assert_eq!(lat.get(), 45.5017);
/// assert!(Latitude::decode(b"91").is_err());
/// ```
pub trait Field: Sized {
    /// The kind reported in errors raised while decoding this type.
    const KIND: FieldKind;

    /// Decodes and validates one raw JSON value.
    fn decode(raw: &[u8]) -> Result<Self, FieldError>;
}

/// Decodes `raw` as `T`, logging rejections.
///
/// This is the entry point a document decoder calls once per field. It behaves
/// exactly like [`Field::decode`] and additionally emits a `debug` event naming
/// the field kind whenever a value is rejected.
///
/// ```
/// use gbfs_fields::decode;
/// use gbfs_fields::types::DayOfWeek;
///
/// let day: DayOfWeek = decode(br#""sat""#).unwrap();
/// assert_eq!(day.ordinal(), 6);
/// ```
pub fn decode<T: Field>(raw: &[u8]) -> Result<T, FieldError> {
    T::decode(raw).inspect_err(|error| {
        tracing::debug!(
            field = %T::KIND,
            code = error.code(),
            %error,
            "rejected field value"
        );
    })
}
