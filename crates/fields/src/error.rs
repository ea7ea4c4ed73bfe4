//! Error types for field decoding failures.
//!
//! Every decoder in this crate fails with a [`FieldError`]. The variants form a
//! closed taxonomy: one variant per violation category, each naming the
//! [`FieldKind`] it concerns where that is not implied by the variant itself.

use std::fmt;

use crate::raw::JsonKind;

// ============================================================================
// FIELD KIND
// ============================================================================

/// Identifies which GBFS field type a value was being decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Latitude,
    Longitude,
    NonNegativeInt,
    NonNegativeFloat,
    Day,
    Month,
    Year,
    AlertType,
    DayOfWeek,
    Mobile,
    RentalMethod,
    UserType,
    Id,
    Email,
    Url,
    Uri,
    Timezone,
    Language,
    Currency,
    Date,
    Time,
    Timestamp,
    PhoneNumber,
    Price,
}

impl FieldKind {
    /// The type name as it appears in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::NonNegativeInt => "NonNegativeInt",
            Self::NonNegativeFloat => "NonNegativeFloat",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::AlertType => "AlertType",
            Self::DayOfWeek => "DayOfWeek",
            Self::Mobile => "Mobile",
            Self::RentalMethod => "RentalMethod",
            Self::UserType => "UserType",
            Self::Id => "ID",
            Self::Email => "Email",
            Self::Url => "URL",
            Self::Uri => "URI",
            Self::Timezone => "Timezone",
            Self::Language => "Language",
            Self::Currency => "Currency",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Timestamp => "Timestamp",
            Self::PhoneNumber => "PhoneNumber",
            Self::Price => "Price",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// Error returned when a raw JSON value cannot become a typed field.
///
/// Decoding fails fast: the first violated rule is reported and no partially
/// validated value is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The bytes do not hold the base primitive the field expects.
    #[error("malformed {kind} value: {reason}")]
    MalformedValue { kind: FieldKind, reason: String },

    /// A well-formed value lies outside the field's declared bound.
    #[error("{kind} value {value} is out of range: must be {bound}")]
    RangeViolation {
        kind: FieldKind,
        value: String,
        bound: String,
    },

    /// A well-formed string is not a member of the field's closed set.
    #[error("unknown {kind} member `{literal}`")]
    UnknownEnumMember { kind: FieldKind, literal: String },

    /// A price literal was neither a JSON number nor a JSON string.
    #[error("price must be a number or a string, got {found}")]
    InvalidPriceType { found: JsonKind },

    /// The value is not a single mailbox address.
    #[error("invalid email `{input}`: {reason}")]
    InvalidEmail { input: String, reason: String },

    /// The value is not an absolute URL.
    #[error("invalid URL `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The URL parsed but its scheme is neither `http` nor `https`.
    #[error("URL scheme must be 'http' or 'https', got '{scheme}'")]
    DisallowedScheme { scheme: String },

    /// The value is not a syntactically valid URI.
    #[error("invalid URI `{input}`: {reason}")]
    InvalidUri { input: String, reason: String },

    /// The value does not name a zone in the IANA time zone database.
    #[error("unknown time zone `{name}`")]
    UnknownTimezone { name: String },

    /// The value is not a well-formed BCP 47 language tag.
    #[error("invalid language tag `{tag}`")]
    InvalidLanguageTag { tag: String },

    /// The value is not an ISO 4217 alphabetic currency code.
    #[error("invalid currency code `{code}`")]
    InvalidCurrencyCode { code: String },

    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date `{input}`: expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    /// The value is not an `HH:MM:SS` time of day.
    #[error("invalid time `{input}`: expected HH:MM:SS")]
    InvalidTimeFormat { input: String },

    /// An identifier contains a whitespace code point.
    #[error("ID `{id}` cannot contain whitespace")]
    WhitespaceInId { id: String },

    /// The value is not a dialable phone number.
    #[error("invalid phone number `{input}`: {reason}")]
    InvalidPhoneNumber { input: String, reason: String },
}

impl FieldError {
    /// Creates a [`FieldError::MalformedValue`].
    pub fn malformed(kind: FieldKind, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            kind,
            reason: reason.into(),
        }
    }

    /// Creates a [`FieldError::RangeViolation`] for an inclusive `[min, max]` bound.
    pub fn out_of_range<T: fmt::Debug>(kind: FieldKind, actual: T, min: T, max: T) -> Self {
        Self::RangeViolation {
            kind,
            value: format!("{actual:?}"),
            bound: format!("within [{min:?}, {max:?}]"),
        }
    }

    /// Creates a [`FieldError::RangeViolation`] for a lower bound.
    pub fn below_minimum<T: fmt::Debug>(kind: FieldKind, actual: T, min: T) -> Self {
        Self::RangeViolation {
            kind,
            value: format!("{actual:?}"),
            bound: format!(">= {min:?}"),
        }
    }

    /// Creates a [`FieldError::UnknownEnumMember`].
    pub fn unknown_member(kind: FieldKind, literal: impl Into<String>) -> Self {
        Self::UnknownEnumMember {
            kind,
            literal: literal.into(),
        }
    }

    /// The field kind this error concerns, when the variant carries one.
    #[must_use]
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::MalformedValue { kind, .. }
            | Self::RangeViolation { kind, .. }
            | Self::UnknownEnumMember { kind, .. } => Some(*kind),
            Self::InvalidPriceType { .. } => Some(FieldKind::Price),
            Self::InvalidEmail { .. } => Some(FieldKind::Email),
            Self::InvalidUrl { .. } | Self::DisallowedScheme { .. } => Some(FieldKind::Url),
            Self::InvalidUri { .. } => Some(FieldKind::Uri),
            Self::UnknownTimezone { .. } => Some(FieldKind::Timezone),
            Self::InvalidLanguageTag { .. } => Some(FieldKind::Language),
            Self::InvalidCurrencyCode { .. } => Some(FieldKind::Currency),
            Self::InvalidDateFormat { .. } => Some(FieldKind::Date),
            Self::InvalidTimeFormat { .. } => Some(FieldKind::Time),
            Self::WhitespaceInId { .. } => Some(FieldKind::Id),
            Self::InvalidPhoneNumber { .. } => Some(FieldKind::PhoneNumber),
        }
    }

    /// Broad error category for grouping in logs and metrics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedValue { .. } => "syntax",
            Self::RangeViolation { .. } => "range",
            Self::UnknownEnumMember { .. } => "membership",
            Self::InvalidPriceType { .. } => "type",
            _ => "format",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedValue { .. } => "FIELD_MALFORMED",
            Self::RangeViolation { .. } => "FIELD_RANGE",
            Self::UnknownEnumMember { .. } => "FIELD_UNKNOWN_MEMBER",
            Self::InvalidPriceType { .. } => "FIELD_PRICE_TYPE",
            Self::InvalidEmail { .. } => "FIELD_EMAIL",
            Self::InvalidUrl { .. } => "FIELD_URL",
            Self::DisallowedScheme { .. } => "FIELD_URL_SCHEME",
            Self::InvalidUri { .. } => "FIELD_URI",
            Self::UnknownTimezone { .. } => "FIELD_TIMEZONE",
            Self::InvalidLanguageTag { .. } => "FIELD_LANGUAGE",
            Self::InvalidCurrencyCode { .. } => "FIELD_CURRENCY",
            Self::InvalidDateFormat { .. } => "FIELD_DATE",
            Self::InvalidTimeFormat { .. } => "FIELD_TIME",
            Self::WhitespaceInId { .. } => "FIELD_ID_WHITESPACE",
            Self::InvalidPhoneNumber { .. } => "FIELD_PHONE",
        }
    }

    /// Whether decoding might succeed if retried with the same input.
    ///
    /// Decoding is a pure function of its input, so this is always `false`.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Result alias used throughout the crate.
pub type FieldResult<T> = Result<T, FieldError>;

// ============================================================================
// TESTS
// ============================================================================
