//! Contact phone numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::Phone;

/// A contact phone number, kept exactly as published.
///
/// ```
/// use gbfs_fields::types::PhoneNumber;
///
/// let phone: PhoneNumber = "+1 (514) 555-0199".parse().unwrap();
/// assert_eq!(phone.digits(), "15145550199");
/// assert_eq!(phone.to_string(), "+1 (514) 555-0199");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(input: impl Into<String>) -> Result<Self, FieldError> {
        let input = input.into();
        Phone::lenient().validate(&input)?;
        Ok(Self(input))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number with separators removed, keeping a leading `+`.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

impl FromStr for PhoneNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

field_decoder!(PhoneNumber as PhoneNumber via decode_string);
