// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for the iCalendar parser and formatter.
//!
//! These tests verify that formatting and parsing again produces equivalent results.

use badical_ical::{
    FormatOptions, ICalendar, TimeTransparency, VEvent, ValueDate, ValueDateTime, format, parse,
};

fn stamp() -> ValueDateTime {
    "20250110T120000Z".parse().unwrap()
}

fn all_day(uid: &str, start: &str, end: &str, summary: &str) -> VEvent {
    let mut event = VEvent::new(uid, stamp(), start.parse().unwrap());
    event.dt_end = Some(end.parse().unwrap());
    event.summary = Some(summary.to_string());
    event.transparency = Some(TimeTransparency::Transparent);
    event
}

#[test]
fn round_trip_simple_calendar() {
    let original = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp.//Cal Client 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
DTSTART;VALUE=DATE:20250110\r\n\
DTEND;VALUE=DATE:20250111\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    let calendars1 = parse(original).unwrap();
    let formatted = format(&calendars1[0]).unwrap();
    let calendars2 = parse(&formatted).unwrap();
    assert_eq!(calendars1, calendars2);
}

#[test]
fn round_trip_calendar_with_multiple_events() {
    let mut calendar = ICalendar::new("-//Bahá'í Calendar//ES");
    calendar.method = Some("PUBLISH".to_string());
    calendar.name = Some("Calendario Badí".to_string());
    calendar
        .events
        .push(all_day("a@badical", "20240320", "20240321", "Naw-Rúz"));
    calendar.events.push(all_day(
        "b@badical",
        "20240420",
        "20240421",
        "Primer día de Riḍván",
    ));

    let formatted = format(&calendar).unwrap();
    let parsed = parse(&formatted).unwrap();
    assert_eq!(parsed, vec![calendar]);
}

#[test]
fn round_trip_long_escaped_text() {
    let description = "Línea uno; con punto y coma, y coma.\nLínea dos: \\ barra. ".repeat(8);
    let mut event = all_day("c@badical", "20241102", "20241103", "Nacimiento del Báb");
    event.description = Some(description.clone());
    event.categories = vec!["holy-day".to_string(), "a,b".to_string()];
    event.url = Some("https://www.bahai.org/es/".to_string());

    let mut calendar = ICalendar::new("-//Test//EN");
    calendar.events.push(event);

    let formatted = format(&calendar).unwrap();
    for line in formatted.split_terminator("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }

    let parsed = parse(&formatted).unwrap();
    let event = &parsed[0].events[0];
    assert_eq!(event.description.as_deref(), Some(description.as_str()));
    assert_eq!(event.categories, ["holy-day", "a,b"]);
    assert_eq!(event.dt_start, ValueDate::new(2024, 11, 2).unwrap());
}

#[test]
fn round_trip_without_folding() {
    let mut event = all_day("d@badical", "20240320", "20240321", "Naw-Rúz");
    event.description = Some("x".repeat(200));
    let mut calendar = ICalendar::new("-//Test//EN");
    calendar.events.push(event);

    let formatted = FormatOptions::default()
        .folding(None)
        .write_to_string(&calendar)
        .unwrap();
    assert!(formatted.split_terminator("\r\n").any(|l| l.len() > 75));
    assert_eq!(parse(&formatted).unwrap(), vec![calendar]);
}
