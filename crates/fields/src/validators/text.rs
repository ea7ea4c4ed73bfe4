//! String content validators
//!
//! Syntax rules for identifiers, mailbox addresses and language tags.

use std::sync::LazyLock;

use crate::error::FieldError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email pattern compiles")
});

// RFC 5646 `Language-Tag`: langtag / privateuse / grandfathered.
static LANGUAGE_TAG_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        r"(?i)^(?:",
        r"(?:[a-z]{2,3}(?:-[a-z]{3}){0,3}|[a-z]{4}|[a-z]{5,8})",
        r"(?:-[a-z]{4})?",
        r"(?:-(?:[a-z]{2}|[0-9]{3}))?",
        r"(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*",
        r"(?:-[0-9a-wyz](?:-[a-z0-9]{2,8})+)*",
        r"(?:-x(?:-[a-z0-9]{1,8})+)?",
        r"|x(?:-[a-z0-9]{1,8})+",
        r"|en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux",
        r"|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE",
        r"|art-lojban|cel-gaulish|no-bok|no-nyn|zh-guoyu|zh-hakka|zh-min|zh-min-nan|zh-xiang",
        r")$",
    ))
    .expect("language tag pattern compiles")
});

// ============================================================================
// IDENTIFIER
// ============================================================================

crate::validator! {
    /// Rejects strings containing any Unicode whitespace code point.
    pub NoWhitespace for str;
    rule(input) { !input.chars().any(char::is_whitespace) }
    error(input) { FieldError::WhitespaceInId { id: input.to_owned() } }
    fn no_whitespace();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates a bare `local@domain` address.
    ///
    /// Display names and angle brackets are stripped by the caller; this
    /// only checks the address itself.
    pub EmailAddress for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        FieldError::InvalidEmail {
            input: input.to_owned(),
            reason: "not a local@domain address".to_owned(),
        }
    }
    fn email_address();
}

// ============================================================================
// LANGUAGE TAG
// ============================================================================

crate::validator! {
    /// Validates a well-formed BCP 47 language tag.
    ///
    /// Well-formedness only: subtags are not checked against the IANA registry,
    /// so `"qq-ZZ"` passes while `"en_US"` does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbfs_fields::validators::language_tag;
    /// use gbfs_fields::foundation::Validate;
    ///
    /// assert!(language_tag().validate("zh-Hant-TW").is_ok());
    /// assert!(language_tag().validate("x-private").is_ok());
    /// assert!(language_tag().validate("en_US").is_err());
    /// ```
    pub LanguageTag for str;
    rule(input) { LANGUAGE_TAG_REGEX.is_match(input) }
    error(input) { FieldError::InvalidLanguageTag { tag: input.to_owned() } }
    fn language_tag();
}

// ============================================================================
// TESTS
// ============================================================================
