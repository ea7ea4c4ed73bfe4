//! Time zone, language and currency identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::{iso_4217, language_tag};

// ============================================================================
// TIMEZONE
// ============================================================================

/// An IANA time zone such as `America/Montreal`.
///
/// Names are resolved against the `chrono-tz` database and compared
/// case-sensitively, so `america/montreal` is rejected.
///
/// ```
/// use gbfs_fields::types::Timezone;
///
/// let tz: Timezone = "America/Montreal".parse().unwrap();
/// assert_eq!(tz.name(), "America/Montreal");
/// assert!("Mars/Olympus_Mons".parse::<Timezone>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(chrono_tz::Tz);

impl Timezone {
    pub fn new(name: &str) -> Result<Self, FieldError> {
        name.parse::<chrono_tz::Tz>()
            .map(Self)
            .map_err(|_| FieldError::UnknownTimezone {
                name: name.to_owned(),
            })
    }

    /// The canonical IANA name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// The zone, for converting instants to local time.
    #[must_use]
    pub const fn tz(self) -> chrono_tz::Tz {
        self.0
    }
}

impl FromStr for Timezone {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Timezone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.name().to_owned()
    }
}

impl From<Timezone> for chrono_tz::Tz {
    fn from(tz: Timezone) -> Self {
        tz.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

field_decoder!(Timezone as Timezone via decode_string);

// ============================================================================
// LANGUAGE
// ============================================================================

/// A BCP 47 language tag, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub fn new(tag: impl Into<String>) -> Result<Self, FieldError> {
        let tag = tag.into();
        language_tag().validate(&tag)?;
        Ok(Self(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, `zh` for `zh-Hant-TW`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Language {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

field_decoder!(Language as Language via decode_string);

// ============================================================================
// CURRENCY
// ============================================================================

/// An ISO 4217 alphabetic currency code, stored in upper case.
///
/// Lower- and mixed-case input is accepted and canonicalized.
///
/// ```
/// use gbfs_fields::types::Currency;
///
/// assert_eq!("cad".parse::<Currency>().unwrap().as_str(), "CAD");
/// assert!("XYZ".parse::<Currency>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self, FieldError> {
        let upper = code.to_ascii_uppercase();
        iso_4217().validate(&upper).map_err(|_| FieldError::InvalidCurrencyCode {
            code: code.to_owned(),
        })?;
        Ok(Self(upper))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

field_decoder!(Currency as Currency via decode_string);

// ============================================================================
// TESTS
// ============================================================================
