// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date parsing, write-back serialization, and the label formatter contract.

use alloc::string::{String, ToString};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Formats a committed date for display in the field's label.
///
/// The widget is purely a consumer: it invokes the formatter with the
/// committed value and the element's raw `format` attribute (if any) and
/// renders whatever comes back. Implementations must supply a sensible
/// default when the pattern is absent.
pub trait DateFormatter {
    /// Formats `date` for display; `pattern` is the element's `format`
    /// attribute, verbatim and unvalidated.
    fn format(&self, date: &DateTime<Utc>, pattern: Option<&str>) -> String;
}

/// A [`DateFormatter`] using chrono strftime patterns.
///
/// An absent, empty, or malformed pattern falls back to
/// [`StrftimeFormatter::DEFAULT_PATTERN`] rather than surfacing an error,
/// matching the field's lenient treatment of authored attributes.
///
/// ```rust
/// use bower_date_field::{DateFormatter, StrftimeFormatter};
/// use chrono::{DateTime, Utc};
///
/// let date: DateTime<Utc> = "2024-04-15T00:00:00.000Z".parse().unwrap();
///
/// assert_eq!(StrftimeFormatter.format(&date, Some("%d %b %Y")), "15 Apr 2024");
/// assert_eq!(StrftimeFormatter.format(&date, None), "2024-04-15");
/// assert_eq!(StrftimeFormatter.format(&date, Some("%Q")), "2024-04-15");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StrftimeFormatter;

impl StrftimeFormatter {
    /// Pattern used when the `format` attribute is absent or unusable.
    pub const DEFAULT_PATTERN: &'static str = "%Y-%m-%d";
}

impl DateFormatter for StrftimeFormatter {
    fn format(&self, date: &DateTime<Utc>, pattern: Option<&str>) -> String {
        let pattern = pattern
            .filter(|p| !p.is_empty() && pattern_is_well_formed(p))
            .unwrap_or(Self::DEFAULT_PATTERN);
        date.format(pattern).to_string()
    }
}

fn pattern_is_well_formed(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Parses an authored date attribute.
///
/// Accepts an RFC 3339 date-time (normalized to UTC) or a bare `YYYY-MM-DD`
/// date, which is taken as midnight UTC. Anything else is `None`; malformed
/// values are indistinguishable from absent ones.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Serializes a date for the `value` attribute write-back.
///
/// Always an RFC 3339 UTC date-time with millisecond precision and a `Z`
/// suffix, e.g. `2024-04-15T00:00:00.000Z`.
pub fn iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
