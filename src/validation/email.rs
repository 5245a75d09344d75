//! E-mail address check

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("e-mail pattern is valid")
});

/// Whether `text` is a non-empty, well-formed e-mail address
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    !text.is_empty() && EMAIL_ADDRESS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for address in [
            "user@example.com",
            "first.last+tag@mail.example.co.uk",
            "a_b%c-d@sub-domain.io",
        ] {
            assert!(is_valid_email(address), "{address} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for address in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@-example.com",
            "user@example.com ",
            "us er@example.com",
        ] {
            assert!(!is_valid_email(address), "{address:?} should be invalid");
        }
    }
}
