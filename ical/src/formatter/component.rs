// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component and property formatting for `VCALENDAR` and `VEVENT`.

use std::io::{self, Write};

use crate::component::{ICalendar, UnrecognizedProperty, VEvent};
use crate::formatter::Formatter;
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_CATEGORIES, KW_DATE, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP,
    KW_DTSTART, KW_END, KW_METHOD, KW_PRODID, KW_SUMMARY, KW_TRANSP, KW_UID, KW_URL, KW_VALUE,
    KW_VCALENDAR, KW_VERSION, KW_VEVENT, KW_X_WR_CALNAME,
};
use crate::value::{ValueDate, escape_text};

/// Format an `ICalendar` component.
pub fn write_icalendar<W: Write>(f: &mut Formatter<W>, calendar: &ICalendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        // Required properties
        write_prop_text(f, KW_PRODID, &calendar.prod_id)?;
        write_prop_raw(f, KW_VERSION, &calendar.version)?;

        // Optional properties
        if let Some(calscale) = &calendar.calscale {
            write_prop_raw(f, KW_CALSCALE, calscale)?;
        }
        if let Some(method) = &calendar.method {
            write_prop_raw(f, KW_METHOD, method)?;
        }
        if let Some(name) = &calendar.name {
            write_prop_text(f, KW_X_WR_CALNAME, name)?;
        }

        // Unrecognized properties
        for prop in &calendar.retained_properties {
            write_property(f, prop)?;
        }

        for event in &calendar.events {
            write_vevent(f, event)?;
        }

        Ok(())
    })
}

/// Format a `VEvent` component.
fn write_vevent<W: Write>(f: &mut Formatter<W>, event: &VEvent) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        // Required properties
        write_prop_text(f, KW_UID, &event.uid)?;
        write_prop_raw(f, KW_DTSTAMP, &event.dt_stamp.to_string())?;
        write_prop_date(f, KW_DTSTART, event.dt_start)?;

        // Optional properties
        if let Some(dt_end) = event.dt_end {
            write_prop_date(f, KW_DTEND, dt_end)?;
        }
        if let Some(summary) = &event.summary {
            write_prop_text(f, KW_SUMMARY, summary)?;
        }
        if let Some(description) = &event.description {
            write_prop_text(f, KW_DESCRIPTION, description)?;
        }
        if let Some(url) = &event.url {
            write_prop_raw(f, KW_URL, url)?;
        }
        if !event.categories.is_empty() {
            let joined = event
                .categories
                .iter()
                .map(|c| escape_text(c))
                .collect::<Vec<_>>()
                .join(",");
            write_prop_raw(f, KW_CATEGORIES, &joined)?;
        }
        if let Some(transparency) = event.transparency {
            write_prop_raw(f, KW_TRANSP, transparency.as_ref())?;
        }

        for prop in &event.retained_properties {
            write_property(f, prop)?;
        }

        Ok(())
    })
}

/// Write `BEGIN:<name>`, the body, then `END:<name>`.
fn with_block<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    body: impl FnOnce(&mut Formatter<W>) -> io::Result<()>,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;
    body(f)?;
    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}

fn write_prop_text<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{}", escape_text(value))?;
    f.writeln()
}

fn write_prop_raw<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

fn write_prop_date<W: Write>(f: &mut Formatter<W>, name: &str, date: ValueDate) -> io::Result<()> {
    write!(f, "{name};{KW_VALUE}={KW_DATE}:{date}")?;
    f.writeln()
}

fn write_property<W: Write>(f: &mut Formatter<W>, prop: &UnrecognizedProperty) -> io::Result<()> {
    match &prop.params {
        Some(params) => write!(f, "{};{params}:{}", prop.name, prop.value)?,
        None => write!(f, "{}:{}", prop.name, prop.value)?,
    }
    f.writeln()
}
