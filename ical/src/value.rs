// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value data types (RFC 5545 Section 3.3) used by all-day feeds.

use std::fmt::{self, Display};
use std::str::{Chars, FromStr};

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Error raised when a textual value cannot be read as the expected type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Not a `DATE` value (`YYYYMMDD`)
    #[error("invalid DATE value '{0}'")]
    Date(String),

    /// Not a UTC `DATE-TIME` value (`YYYYMMDDTHHMMSSZ`)
    #[error("invalid UTC DATE-TIME value '{0}'")]
    DateTime(String),

    /// Not one of the values allowed for the property
    #[error("unknown value '{0}'")]
    Enumerated(String),
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    /// Year component.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl ValueDate {
    /// Create a date, checking the day against the month length.
    ///
    /// # Errors
    /// Returns an error if the year is outside 0..=9999 or the month/day is impossible.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self, ValueError> {
        if (0..=9999).contains(&year) && jiff::civil::Date::new(year, month, day).is_ok() {
            Ok(Self { year, month, day })
        } else {
            Err(ValueError::Date(format!("{year:04}{month:02}{day:02}")))
        }
    }

    /// Convert to `jiff::civil::Date`.
    #[must_use]
    pub fn civil_date(self) -> jiff::civil::Date {
        self.into()
    }
}

impl Display for ValueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ValueDate {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chars(value_date(), s).ok_or_else(|| ValueError::Date(s.to_string()))
    }
}

impl From<ValueDate> for jiff::civil::Date {
    fn from(value: ValueDate) -> Self {
        jiff::civil::date(value.year, value.month, value.day)
    }
}

impl From<jiff::civil::Date> for ValueDate {
    fn from(value: jiff::civil::Date) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

/// A `DATE-TIME` value in UTC form (`FORM #2: DATE WITH UTC TIME`), the only form
/// required for `DTSTAMP`.
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDateTime {
    /// Date part.
    pub date: ValueDate,

    /// Hour, 0-23.
    pub hour: i8,

    /// Minute, 0-59.
    pub minute: i8,

    /// Second, 0-60 (60 only for a leap second).
    pub second: i8,
}

impl ValueDateTime {
    /// Convert to `jiff::Timestamp`.
    #[must_use]
    pub fn timestamp(self) -> jiff::Timestamp {
        let dt = jiff::civil::DateTime::from_parts(
            self.date.into(),
            jiff::civil::time(self.hour, self.minute, self.second.min(59), 0),
        );
        dt.to_zoned(jiff::tz::TimeZone::UTC)
            .map(|z| z.timestamp())
            .unwrap_or(jiff::Timestamp::UNIX_EPOCH)
    }
}

impl Display for ValueDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}{:02}{:02}Z",
            self.date, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for ValueDateTime {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chars(value_date_time(), s).ok_or_else(|| ValueError::DateTime(s.to_string()))
    }
}

impl From<jiff::Timestamp> for ValueDateTime {
    fn from(value: jiff::Timestamp) -> Self {
        let dt = value.to_zoned(jiff::tz::TimeZone::UTC).datetime();
        Self {
            date: dt.date().into(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Escape a `TEXT` value per RFC 5545 Section 3.3.11:
/// - Backslash → \\
/// - Semicolon → \;
/// - Comma → \,
/// - Newline → \n
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {} // Skip CR characters
            _ => result.push(c),
        }
    }
    result
}

/// Reverse of [`escape_text`]. Unknown escapes keep the escaped character.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    parse_chars(text_value(), text).unwrap_or_else(|| text.to_string())
}

/// Split a multi-valued `TEXT` property (such as `CATEGORIES`) on its unescaped commas
/// and unescape each item.
#[must_use]
pub fn unescape_text_list(text: &str) -> Vec<String> {
    parse_chars(text_list(), text).unwrap_or_else(|| vec![unescape_text(text)])
}

/// Run a character-level value parser over the whole of `src`.
fn parse_chars<'src, T>(
    parser: impl Parser<'src, Stream<Chars<'src>>, T, Extra<'src>>,
    src: &'src str,
) -> Option<T> {
    parser
        .then_ignore(end())
        .parse(Stream::from_iter(src.chars()))
        .into_result()
        .ok()
}

/// A fixed-width run of ASCII digits.
fn digits<'src, I, T>(width: usize) -> impl Parser<'src, I, T, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
    T: TryFrom<u32>,
{
    any()
        .filter(char::is_ascii_digit)
        .repeated()
        .exactly(width)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<u32>()
                .ok()
                .and_then(|n| T::try_from(n).ok())
                .ok_or_else(|| Rich::custom(span, "number out of range"))
        })
}

fn value_date<'src, I>() -> impl Parser<'src, I, ValueDate, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
{
    digits::<_, i16>(4)
        .then(digits::<_, i8>(2))
        .then(digits::<_, i8>(2))
        .try_map(|((year, month), day), span| {
            ValueDate::new(year, month, day).map_err(|e| Rich::custom(span, e))
        })
}

/// `date "T" time "Z"`, the UTC form only.
fn value_date_time<'src, I>() -> impl Parser<'src, I, ValueDateTime, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
{
    value_date()
        .then_ignore(just('T'))
        .then(digits::<_, i8>(2))
        .then(digits::<_, i8>(2))
        .then(digits::<_, i8>(2))
        .then_ignore(just('Z'))
        .try_map(|(((date, hour), minute), second), span| {
            if hour > 23 || minute > 59 || second > 60 {
                return Err(Rich::custom(span, "invalid time"));
            }
            Ok(ValueDateTime {
                date,
                hour,
                minute,
                second,
            })
        })
}

/// A backslash escape; a lone trailing backslash stands for itself.
fn escaped_char<'src, I>() -> impl Parser<'src, I, char, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
{
    just('\\').ignore_then(choice((
        one_of("nN").to('\n'),
        any(),
        end().to('\\'),
    )))
}

fn text_value<'src, I>() -> impl Parser<'src, I, String, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
{
    choice((escaped_char(), any())).repeated().collect()
}

fn text_list<'src, I>() -> impl Parser<'src, I, Vec<String>, Extra<'src>> + Clone
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
{
    choice((escaped_char(), none_of(",\\")))
        .repeated()
        .collect::<String>()
        .separated_by(just(','))
        .collect()
}
