//! Date formatting and timestamp parsing
//!
//! Month names come from an explicit [`Locale`] argument; nothing here reads
//! a process-wide default.
//!
//! ```rust
//! use appext::datetime::{Locale, format_display_date, parse_iso_to_display};
//! use time::macros::datetime;
//!
//! let instant = datetime!(2023-05-04 13:26:08 UTC);
//! assert_eq!(format_display_date(instant, &Locale::ENGLISH), "04 May 2023");
//!
//! assert_eq!(
//!     parse_iso_to_display("2023-05-04T13:26:08.000Z").as_deref(),
//!     Some("04/05/2023 13:26:08")
//! );
//! assert_eq!(parse_iso_to_display("not-a-date"), None);
//! ```

use crate::error::{Error, Result};
use log::debug;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Month, OffsetDateTime, PrimitiveDateTime};

/// `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`
const ISO_INPUT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// `dd/MM/yyyy HH:mm:ss`
const ISO_DISPLAY: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

// =============================================================================
// Locale
// =============================================================================

/// Month-name table used when rendering dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    short_months: [&'static str; 12],
}

impl Locale {
    pub const ENGLISH: Locale = Locale::new(
        "en",
        [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    );

    /// Build a locale from a language tag and abbreviated month names, January first
    #[must_use]
    pub const fn new(tag: &'static str, short_months: [&'static str; 12]) -> Self {
        Self { tag, short_months }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Abbreviated name of `month`
    pub fn short_month(&self, month: Month) -> &'static str {
        self.short_months[usize::from(u8::from(month)) - 1]
    }
}

// =============================================================================
// Current Time
// =============================================================================

/// Current date-time in the local offset
///
/// Falls back to UTC when the local offset cannot be determined (for
/// example in a multi-threaded process on some Unix platforms).
pub fn current_date_time() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        debug!("Local offset unavailable ({e}), using UTC");
        OffsetDateTime::now_utc()
    })
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Render `instant` as `dd MMM yyyy`, e.g. `04 May 2023`
pub fn format_display_date(instant: OffsetDateTime, locale: &Locale) -> String {
    format!(
        "{:02} {} {:04}",
        instant.day(),
        locale.short_month(instant.month()),
        instant.year()
    )
}

/// Today's date as `dd MMM yyyy`
pub fn current_display_date(locale: &Locale) -> String {
    format_display_date(current_date_time(), locale)
}

// =============================================================================
// ISO Timestamps
// =============================================================================

/// Parse a `yyyy-MM-ddTHH:mm:ss.SSSZ` timestamp
///
/// The trailing `Z` is matched literally and the wall-clock fields are kept
/// as written.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text does not match the pattern exactly
/// or a component is out of range.
pub fn parse_iso(text: &str) -> Result<PrimitiveDateTime> {
    PrimitiveDateTime::parse(text, ISO_INPUT).map_err(|e| Error::Parse(format!("{text:?}: {e}")))
}

/// Reformat an ISO timestamp as `dd/MM/yyyy HH:mm:ss`
///
/// Malformed input yields `None`; callers treat that as "nothing to show".
/// Use [`parse_iso`] when the failure reason matters.
pub fn parse_iso_to_display(text: &str) -> Option<String> {
    let rendered = parse_iso(text).and_then(|parsed| {
        parsed
            .format(ISO_DISPLAY)
            .map_err(|e| Error::Parse(e.to_string()))
    });

    match rendered {
        Ok(display) => Some(display),
        Err(e) => {
            debug!("Ignoring unparseable timestamp: {e}");
            None
        }
    }
}
