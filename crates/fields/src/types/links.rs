//! Web links and general URIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::http_scheme;

// ============================================================================
// URL
// ============================================================================

/// An absolute `http` or `https` URL, such as a rental deep link.
///
/// # Examples
///
/// ```
/// use gbfs_fields::types::Url;
///
/// let url: Url = "https://example.com/app".parse().unwrap();
/// assert_eq!(url.as_url().host_str(), Some("example.com"));
/// assert!("ftp://example.com".parse::<Url>().is_err());
/// assert!("/relative/path".parse::<Url>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Url(url::Url);

impl Url {
    /// Parses an absolute URL and checks its scheme.
    pub fn new(input: &str) -> Result<Self, FieldError> {
        let parsed = url::Url::parse(input).map_err(|e| FieldError::InvalidUrl {
            input: input.to_owned(),
            reason: e.to_string(),
        })?;
        http_scheme().validate(&parsed)?;
        Ok(Self(parsed))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn as_url(&self) -> &url::Url {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> url::Url {
        self.0
    }
}

impl FromStr for Url {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Url {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0.into()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

field_decoder!(Url as Url via decode_string);

// ============================================================================
// URI
// ============================================================================

/// An absolute URI with any scheme: `tel:`, `mailto:`, app schemes and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(url::Url);

impl Uri {
    pub fn new(input: &str) -> Result<Self, FieldError> {
        url::Url::parse(input)
            .map(Self)
            .map_err(|e| FieldError::InvalidUri {
                input: input.to_owned(),
                reason: e.to_string(),
            })
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn as_url(&self) -> &url::Url {
        &self.0
    }
}

impl FromStr for Uri {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.0.into()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

field_decoder!(Uri as Uri via decode_string);

// ============================================================================
// TESTS
// ============================================================================
