//! Rupee amount formatting
//!
//! Grouping works on the decimal text of the amount: the text is reversed,
//! cut into runs of three characters, joined with commas and reversed
//! back. For non-negative amounts this is ordinary thousands grouping.
//!
//! A leading `-` counts as one of the characters being grouped, so some
//! negative amounts get a comma right after the sign (`-123456` becomes
//! `-,123,456`). Existing callers may rely on the exact output, so this is
//! kept as is; it is not necessarily the desired rendering for negatives.

/// Label placed before formatted amounts
pub const CURRENCY_PREFIX: &str = "Rs. ";

/// How [`format_currency`] decorates the grouped digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyStyle<'a> {
    /// `Rs. 1,234`
    Prefixed,
    /// `1,234`
    Plain,
    /// `Rs. ` followed by the sign text, e.g. `Rs. -1,234`
    Signed(&'a str),
}

/// Insert a comma every three characters counting from the right
pub fn group_thousands(amount: i64) -> String {
    let reversed: Vec<char> = amount.to_string().chars().rev().collect();
    let chunks: Vec<String> = reversed
        .chunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    chunks.join(",").chars().rev().collect()
}

/// Format `amount` in the given style
pub fn format_currency(amount: i64, style: CurrencyStyle<'_>) -> String {
    let grouped = group_thousands(amount);
    match style {
        CurrencyStyle::Prefixed => format!("{CURRENCY_PREFIX}{grouped}"),
        CurrencyStyle::Plain => grouped,
        CurrencyStyle::Signed(sign) => format!("{CURRENCY_PREFIX}{sign}{grouped}"),
    }
}

/// Currency formatting as methods on integer amounts
///
/// ```rust
/// use appext::currency::ThousandsExt;
///
/// assert_eq!(1234567i32.format_decimal_separator(), "Rs. 1,234,567");
/// assert_eq!(1234567i32.format_decimal_separator_plain(), "1,234,567");
/// assert_eq!(1234567i64.format_decimal_separator_with_sign("+"), "Rs. +1,234,567");
/// ```
pub trait ThousandsExt {
    /// `Rs. ` followed by the grouped amount
    fn format_decimal_separator(&self) -> String;

    /// Grouped amount without a label
    fn format_decimal_separator_plain(&self) -> String;

    /// `Rs. `, then `sign`, then the grouped amount
    fn format_decimal_separator_with_sign(&self, sign: &str) -> String;
}

macro_rules! thousands_ext {
    ($($ty:ty),*) => {
        $(
            impl ThousandsExt for $ty {
                fn format_decimal_separator(&self) -> String {
                    format_currency(i64::from(*self), CurrencyStyle::Prefixed)
                }

                fn format_decimal_separator_plain(&self) -> String {
                    format_currency(i64::from(*self), CurrencyStyle::Plain)
                }

                fn format_decimal_separator_with_sign(&self, sign: &str) -> String {
                    format_currency(i64::from(*self), CurrencyStyle::Signed(sign))
                }
            }
        )*
    };
}

thousands_ext!(i32, i64);
