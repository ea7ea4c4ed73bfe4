//! Mailbox addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::email_address;

/// Characters that force a display name to be quoted.
const NAME_SPECIALS: &[char] = &['<', '>', '@', ',', ';', ':', '"', '\\', '(', ')', '[', ']'];

/// A single mailbox: `local@domain`, optionally with a display name written
/// as `Name <local@domain>`.
///
/// ```
/// use gbfs_fields::types::Email;
///
/// let plain: Email = "ops@example.com".parse().unwrap();
/// assert_eq!(plain.address(), "ops@example.com");
/// assert_eq!(plain.display_name(), None);
///
/// let named: Email = "Support Desk <help@example.com>".parse().unwrap();
/// assert_eq!(named.display_name(), Some("Support Desk"));
/// assert_eq!(named.to_string(), "Support Desk <help@example.com>");
///
/// assert!("two@example.com, three@example.com".parse::<Email>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    name: Option<String>,
    address: String,
}

impl Email {
    /// Parses a single mailbox.
    pub fn new(input: &str) -> Result<Self, FieldError> {
        let trimmed = input.trim();
        let reject = |reason: &str| FieldError::InvalidEmail {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };

        let (name, address) = match trimmed.strip_suffix('>') {
            Some(head) => {
                let open = head.rfind('<').ok_or_else(|| reject("unbalanced angle brackets"))?;
                (parse_display_name(head[..open].trim()).map_err(reject)?, head[open + 1..].trim())
            }
            None if trimmed.contains(['<', '>']) => return Err(reject("unbalanced angle brackets")),
            None => (None, trimmed),
        };

        email_address().validate(address)?;
        Ok(Self {
            name,
            address: address.to_owned(),
        })
    }

    /// The bare `local@domain` address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }
}

fn parse_display_name(name: &str) -> Result<Option<String>, &'static str> {
    if name.is_empty() {
        return Ok(None);
    }
    if let Some(quoted) = name.strip_prefix('"').and_then(|n| n.strip_suffix('"')) {
        if quoted.contains(['"', '\\']) {
            return Err("escaped characters in display name are not supported");
        }
        return Ok(Some(quoted.to_owned()));
    }
    if name.contains(NAME_SPECIALS) {
        return Err("display name contains special characters and is not quoted");
    }
    Ok(Some(name.to_owned()))
}

impl FromStr for Email {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.to_string()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            None => f.write_str(&self.address),
            Some(name) if name.contains(NAME_SPECIALS) => {
                write!(f, "\"{name}\" <{}>", self.address)
            }
            Some(name) => write!(f, "{name} <{}>", self.address),
        }
    }
}

field_decoder!(Email as Email via decode_string);
