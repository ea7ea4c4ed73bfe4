//! URL scheme validator

use crate::error::FieldError;

crate::validator! {
    /// Accepts only `http` and `https` URLs.
    ///
    /// `url::Url` lower-cases the scheme while parsing, so `HTTPS://` passes.
    pub HttpScheme for url::Url;
    rule(input) { matches!(input.scheme(), "http" | "https") }
    error(input) { FieldError::DisallowedScheme { scheme: input.scheme().to_owned() } }
    fn http_scheme();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn parse(s: &str) -> url::Url {
        url::Url::parse(s).unwrap()
    }

    #[test]
    fn http_and_https_pass() {
        assert!(http_scheme().validate(&parse("http://example.com")).is_ok());
        assert!(http_scheme().validate(&parse("HTTPS://example.com/x")).is_ok());
    }

    #[test]
    fn other_schemes_fail() {
        for (input, scheme) in [
            ("ftp://example.com", "ftp"),
            ("mailto:ops@example.com", "mailto"),
            ("tel:+15145550199", "tel"),
        ] {
            let err = http_scheme().validate(&parse(input)).unwrap_err();
            assert_eq!(
                err,
                FieldError::DisallowedScheme {
                    scheme: scheme.to_owned()
                }
            );
        }
    }
}
