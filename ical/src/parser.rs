// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Content-line parser building [`ICalendar`] values.

use crate::component::{ICalendar, TimeTransparency, UnrecognizedProperty, VEvent};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_CATEGORIES, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART,
    KW_END, KW_METHOD, KW_PRODID, KW_SUMMARY, KW_TRANSP, KW_UID, KW_URL, KW_VCALENDAR,
    KW_VERSION, KW_VEVENT, KW_X_WR_CALNAME,
};
use crate::syntax::{ContentLine, SyntaxError, content_lines};
use crate::value::{ValueDate, ValueDateTime, ValueError, unescape_text, unescape_text_list};

/// Parse iCalendar source into its calendar objects.
///
/// Components other than `VEVENT` inside a calendar are skipped.
///
/// ## Errors
///
/// Returns the first lexing, structural or value error encountered.
///
/// ## Examples
///
/// ```
/// # use badical_ical::parse;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// PRODID:-//Test//EN\r\n\
/// VERSION:2.0\r\n\
/// BEGIN:VEVENT\r\n\
/// UID:1@test\r\n\
/// DTSTAMP:20250101T000000Z\r\n\
/// DTSTART;VALUE=DATE:20240320\r\n\
/// SUMMARY:Naw-Rúz\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let calendars = parse(src).unwrap();
/// assert_eq!(calendars[0].events[0].summary.as_deref(), Some("Naw-Rúz"));
/// ```
pub fn parse(src: &str) -> Result<Vec<ICalendar>, ParseError> {
    let lines = content_lines(src).map_err(|e| syntax_error(src, e))?;
    build_calendars(src, lines)
}

/// Errors that can occur during parsing
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Character not allowed in a content line
    #[error("line {line}: unexpected character {text:?}")]
    Lex {
        /// Line number in the source, starting at 1
        line: usize,
        /// Offending text
        text: String,
    },

    /// Content line does not follow `name *(";" param) ":" value`
    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Line number in the source, starting at 1
        line: usize,
        /// What the grammar accepted there
        expected: String,
        /// What was actually there
        found: String,
    },

    /// `END` does not close the innermost open component
    #[error("line {line}: END:{found} does not match BEGIN:{expected}")]
    MismatchedEnd {
        /// Line number in the source, starting at 1
        line: usize,
        /// Component that is open
        expected: String,
        /// Component named by `END`
        found: String,
    },

    /// Input ended with an open component
    #[error("unexpected end of input inside {0}")]
    UnexpectedEof(String),

    /// Property or component outside of any `VCALENDAR`
    #[error("line {line}: {name} outside of VCALENDAR")]
    OutsideCalendar {
        /// Line number in the source, starting at 1
        line: usize,
        /// Property or component name
        name: String,
    },

    /// A required property is absent
    #[error("{component} is missing required property {property}")]
    MissingProperty {
        /// Component name
        component: &'static str,
        /// Property name
        property: &'static str,
    },

    /// A property value could not be interpreted
    #[error("line {line}: invalid {property} value: {source}")]
    InvalidValue {
        /// Line number in the source, starting at 1
        line: usize,
        /// Property name
        property: String,
        /// Underlying value error
        source: ValueError,
    },
}

/// Line number of a byte offset, starting at 1. Folded lines count separately.
fn line_of(src: &str, offset: usize) -> usize {
    let before = src.get(..offset).unwrap_or(src);
    before.bytes().filter(|&b| b == b'\n').count() + 1
}

fn syntax_error(src: &str, err: SyntaxError) -> ParseError {
    let line = line_of(src, err.offset);
    if err.lexical {
        ParseError::Lex {
            line,
            text: err.found,
        }
    } else {
        ParseError::UnexpectedToken {
            line,
            expected: err.expected,
            found: err.found,
        }
    }
}

enum Frame {
    Calendar(ICalendar, CalendarFields),
    Event(EventFields),
    Skipped(String),
}

#[derive(Default)]
struct CalendarFields {
    prod_id: Option<String>,
    version: Option<String>,
}

#[derive(Default)]
struct EventFields {
    uid: Option<String>,
    dt_stamp: Option<ValueDateTime>,
    dt_start: Option<ValueDate>,
    dt_end: Option<ValueDate>,
    summary: Option<String>,
    description: Option<String>,
    url: Option<String>,
    categories: Vec<String>,
    transparency: Option<TimeTransparency>,
    retained_properties: Vec<UnrecognizedProperty>,
}

fn build_calendars(src: &str, lines: Vec<ContentLine>) -> Result<Vec<ICalendar>, ParseError> {
    let mut calendars = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for cl in lines {
        let line = line_of(src, cl.span.start);
        if cl.name == KW_BEGIN {
            let name = cl.value.to_ascii_uppercase();
            let frame = match (stack.last(), name.as_str()) {
                (None, KW_VCALENDAR) => {
                    let calendar = ICalendar {
                        calscale: None,
                        ..ICalendar::new(String::new())
                    };
                    Frame::Calendar(calendar, CalendarFields::default())
                }
                (None, _) => {
                    return Err(ParseError::OutsideCalendar { line, name });
                }
                (Some(Frame::Calendar(..)), KW_VEVENT) => Frame::Event(EventFields::default()),
                (Some(_), _) => Frame::Skipped(name),
            };
            stack.push(frame);
            continue;
        }

        if cl.name == KW_END {
            let found = cl.value.to_ascii_uppercase();
            let Some(frame) = stack.pop() else {
                return Err(ParseError::OutsideCalendar {
                    line,
                    name: format!("END:{found}"),
                });
            };
            let expected = frame_name(&frame);
            if expected != found {
                return Err(ParseError::MismatchedEnd {
                    line,
                    expected,
                    found,
                });
            }

            match frame {
                Frame::Calendar(mut calendar, fields) => {
                    calendar.prod_id = fields.prod_id.ok_or(ParseError::MissingProperty {
                        component: KW_VCALENDAR,
                        property: KW_PRODID,
                    })?;
                    calendar.version = fields.version.ok_or(ParseError::MissingProperty {
                        component: KW_VCALENDAR,
                        property: KW_VERSION,
                    })?;
                    calendars.push(calendar);
                }
                Frame::Event(fields) => {
                    let event = finish_event(fields)?;
                    if let Some(Frame::Calendar(calendar, _)) = stack.last_mut() {
                        calendar.events.push(event);
                    }
                }
                Frame::Skipped(_) => {}
            }
            continue;
        }

        match stack.last_mut() {
            None => {
                return Err(ParseError::OutsideCalendar {
                    line,
                    name: cl.name,
                });
            }
            Some(Frame::Calendar(calendar, fields)) => apply_calendar_property(calendar, fields, cl),
            Some(Frame::Event(fields)) => apply_event_property(fields, line, cl)?,
            Some(Frame::Skipped(_)) => {}
        }
    }

    match stack.last() {
        Some(frame) => Err(ParseError::UnexpectedEof(frame_name(frame))),
        None => Ok(calendars),
    }
}

fn frame_name(frame: &Frame) -> String {
    match frame {
        Frame::Calendar(..) => KW_VCALENDAR.to_string(),
        Frame::Event(_) => KW_VEVENT.to_string(),
        Frame::Skipped(name) => name.clone(),
    }
}

fn apply_calendar_property(calendar: &mut ICalendar, fields: &mut CalendarFields, cl: ContentLine) {
    match cl.name.as_str() {
        KW_PRODID => fields.prod_id = Some(unescape_text(&cl.value)),
        KW_VERSION => fields.version = Some(cl.value),
        KW_CALSCALE => calendar.calscale = Some(cl.value),
        KW_METHOD => calendar.method = Some(cl.value),
        KW_X_WR_CALNAME => calendar.name = Some(unescape_text(&cl.value)),
        _ => calendar.retained_properties.push(UnrecognizedProperty {
            name: cl.name,
            params: cl.params,
            value: cl.value,
        }),
    }
}

fn apply_event_property(
    fields: &mut EventFields,
    line: usize,
    cl: ContentLine,
) -> Result<(), ParseError> {
    let invalid = |source: ValueError| ParseError::InvalidValue {
        line,
        property: cl.name.clone(),
        source,
    };

    match cl.name.as_str() {
        KW_UID => fields.uid = Some(unescape_text(&cl.value)),
        KW_DTSTAMP => fields.dt_stamp = Some(cl.value.parse().map_err(invalid)?),
        KW_DTSTART => fields.dt_start = Some(parse_date(&cl.value).map_err(invalid)?),
        KW_DTEND => fields.dt_end = Some(parse_date(&cl.value).map_err(invalid)?),
        KW_SUMMARY => fields.summary = Some(unescape_text(&cl.value)),
        KW_DESCRIPTION => fields.description = Some(unescape_text(&cl.value)),
        KW_URL => fields.url = Some(cl.value),
        KW_CATEGORIES => fields.categories.extend(unescape_text_list(&cl.value)),
        KW_TRANSP => {
            let transp: TimeTransparency = cl
                .value
                .parse()
                .map_err(|_| invalid(ValueError::Enumerated(cl.value.clone())))?;
            fields.transparency = Some(transp);
        }
        _ => fields.retained_properties.push(UnrecognizedProperty {
            name: cl.name,
            params: cl.params,
            value: cl.value,
        }),
    }
    Ok(())
}

fn finish_event(fields: EventFields) -> Result<VEvent, ParseError> {
    let missing = |property| ParseError::MissingProperty {
        component: KW_VEVENT,
        property,
    };

    let mut event = VEvent::new(
        fields.uid.ok_or_else(|| missing(KW_UID))?,
        fields.dt_stamp.ok_or_else(|| missing(KW_DTSTAMP))?,
        fields.dt_start.ok_or_else(|| missing(KW_DTSTART))?,
    );
    event.dt_end = fields.dt_end;
    event.summary = fields.summary;
    event.description = fields.description;
    event.url = fields.url;
    event.categories = fields.categories;
    event.transparency = fields.transparency;
    event.retained_properties = fields.retained_properties;
    Ok(event)
}

/// Accepts a `DATE`, or the date part of a UTC `DATE-TIME`.
fn parse_date(value: &str) -> Result<ValueDate, ValueError> {
    if value.contains('T') {
        value.parse::<ValueDateTime>().map(|dt| dt.date)
    } else {
        value.parse()
    }
}
