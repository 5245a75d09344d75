//! Ordered password rule chain

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum length, counted in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message returned when every rule passes
pub const VALID_PASSWORD_MESSAGE: &str = "Validate password";

static ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]").expect("alphabet pattern is valid"));

// ASCII punctuation, backslash included
static SPECIAL_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[!"#$%&'()*+,\-./:;\\<=>?@\[\]^_`{|}~]"##)
        .expect("special character pattern is valid")
});

// Unicode decimal digit (Nd)
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// A single password rule, listed in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    /// Password is not empty
    Required,
    /// Contains an ASCII letter
    Alphabet,
    /// Contains a character with the Unicode Uppercase property
    /// (category Lu plus Other_Uppercase)
    Uppercase,
    /// Contains an ASCII punctuation character
    SpecialCharacter,
    /// Contains a decimal digit
    Digit,
    /// At least [`MIN_PASSWORD_LENGTH`] long
    MinLength,
}

impl PasswordRule {
    /// Rules in the order they are checked
    pub const ORDER: [PasswordRule; 6] = [
        PasswordRule::Required,
        PasswordRule::Alphabet,
        PasswordRule::Uppercase,
        PasswordRule::SpecialCharacter,
        PasswordRule::Digit,
        PasswordRule::MinLength,
    ];

    /// User-facing message shown when this rule fails
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PasswordRule::Required => "Please Enter Password",
            PasswordRule::Alphabet => "Password must contain alphabet",
            PasswordRule::Uppercase => "Password must contain 1 capital letter",
            PasswordRule::SpecialCharacter => "Password must contain special character",
            PasswordRule::Digit => "Password must contain number",
            PasswordRule::MinLength => "Password length must be 8",
        }
    }

    /// Check this rule alone
    #[must_use]
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            PasswordRule::Required => !password.is_empty(),
            PasswordRule::Alphabet => ALPHABET.is_match(password),
            PasswordRule::Uppercase => password.chars().any(char::is_uppercase),
            PasswordRule::SpecialCharacter => SPECIAL_CHARACTER.is_match(password),
            PasswordRule::Digit => DIGIT.is_match(password),
            PasswordRule::MinLength => password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PasswordRule {}

/// Return the first rule `password` fails, if any
///
/// # Errors
///
/// Returns the first failing [`PasswordRule`] in [`PasswordRule::ORDER`].
pub fn check_password(password: &str) -> Result<(), PasswordRule> {
    match PasswordRule::ORDER
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(password))
    {
        Some(rule) => Err(rule),
        None => Ok(()),
    }
}

/// Message for the first failing rule, or [`VALID_PASSWORD_MESSAGE`]
///
/// ```rust
/// use appext::validation::validate_password;
///
/// assert_eq!(validate_password(""), "Please Enter Password");
/// assert_eq!(validate_password("Ab1!"), "Password length must be 8");
/// assert_eq!(validate_password("Ab1!efgh"), "Validate password");
/// ```
#[must_use]
pub fn validate_password(password: &str) -> &'static str {
    match check_password(password) {
        Ok(()) => VALID_PASSWORD_MESSAGE,
        Err(rule) => rule.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_chain_messages() {
        let cases = [
            ("", "Please Enter Password"),
            ("1234567", "Password must contain alphabet"),
            ("abcdefgh", "Password must contain 1 capital letter"),
            ("Abcdefgh", "Password must contain special character"),
            ("Abcdefg!", "Password must contain number"),
            ("Ab1!", "Password length must be 8"),
            ("Ab1!efgh", "Validate password"),
        ];

        for (input, expected) in cases {
            assert_eq!(validate_password(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_every_special_character_counts() {
        for c in r##"!"#$%&'()*+,-./:;<=>?@[]^_`{|}~\"##.chars() {
            assert!(
                PasswordRule::SpecialCharacter.is_satisfied_by(&c.to_string()),
                "{c} should count as special"
            );
        }
        assert!(!PasswordRule::SpecialCharacter.is_satisfied_by("abc 123 £€"));
    }

    #[test]
    fn test_alphabet_is_ascii_only() {
        // Non-ASCII letters do not satisfy the alphabet rule
        assert_eq!(check_password("Ä1!ÄÄÄÄÄ"), Err(PasswordRule::Alphabet));
    }

    #[test]
    fn test_uppercase_is_unicode_aware() {
        assert!(PasswordRule::Uppercase.is_satisfied_by("aÄ"));
        assert!(PasswordRule::Uppercase.is_satisfied_by("aΩ"));
    }

    #[test]
    fn test_uppercase_uses_derived_uppercase_property() {
        // Lu letters and Other_Uppercase symbols count; titlecase (Lt) does not
        assert!(PasswordRule::Uppercase.is_satisfied_by("aⒶ"));
        assert!(PasswordRule::Uppercase.is_satisfied_by("aⅫ"));
        assert!(!PasswordRule::Uppercase.is_satisfied_by("aǅ"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 7 chars, one outside the BMP, is 8 UTF-16 units
        assert!(PasswordRule::MinLength.is_satisfied_by("Ab1!ef😀"));
        assert!(!PasswordRule::MinLength.is_satisfied_by("Ab1!efg"));
    }

    #[test]
    fn test_check_password_returns_rule() {
        assert_eq!(check_password("Ab1!efgh"), Ok(()));
        let rule = check_password("abc").unwrap_err();
        assert_eq!(rule, PasswordRule::Uppercase);
        assert_eq!(rule.to_string(), "Password must contain 1 capital letter");
    }
}
