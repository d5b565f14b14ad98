// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar export of events and month starts as all-day entries.

use badical_ical::{ICalendar, TimeTransparency, VEvent, ValueDate, ValueDateTime};
use jiff::Timestamp;
use uuid::Uuid;

use crate::badi::{BadiDate, BadiMonth, GregorianInstant};
use crate::error::Error;
use crate::event::{Category, LocalizedEvent, LocalizedMonth};
use crate::localization::Labels;

const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_4a0e_8d2b_5b7e_9a43_1f0c_2d5e_8b61);
const UID_DOMAIN: &str = "badical";
const METHOD_PUBLISH: &str = "PUBLISH";

/// Calendar-level settings of an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub prod_id: String,
    pub calendar_name: String,
    /// Written as `DTSTAMP` on every entry; the only part that varies between runs.
    pub dt_stamp: Timestamp,
    pub labels: Labels,
}

/// Render events as an iCalendar document.
///
/// # Errors
/// Returns [`Error::Export`] if rendering fails.
pub fn export_ics(events: &[LocalizedEvent], options: &ExportOptions) -> Result<Vec<u8>, Error> {
    let mut calendar = calendar(options);
    calendar
        .events
        .extend(events.iter().map(|e| event_entry(e, options)));
    render(&calendar)
}

/// Render month starts as Nineteen Day Feast entries; a start of Ayyám-i-Há becomes an
/// intercalary entry.
///
/// # Errors
/// Returns [`Error::Export`] if rendering fails.
pub fn export_month_starts(
    months: &[LocalizedMonth],
    options: &ExportOptions,
) -> Result<Vec<u8>, Error> {
    let mut calendar = calendar(options);
    calendar
        .events
        .extend(months.iter().map(|m| month_entry(m, options)));
    render(&calendar)
}

/// Render events and month starts in one document.
///
/// Feast events are left out since the month entries already mark those days.
///
/// # Errors
/// Returns [`Error::Export`] if rendering fails.
pub fn export_complete(
    events: &[LocalizedEvent],
    months: &[LocalizedMonth],
    options: &ExportOptions,
) -> Result<Vec<u8>, Error> {
    let mut calendar = calendar(options);
    calendar.events.extend(
        events
            .iter()
            .filter(|e| e.event.category != Category::Feast)
            .map(|e| event_entry(e, options)),
    );
    calendar
        .events
        .extend(months.iter().map(|m| month_entry(m, options)));
    calendar
        .events
        .sort_by_key(|e| (e.dt_start.civil_date(), e.uid.clone()));
    render(&calendar)
}

fn calendar(options: &ExportOptions) -> ICalendar {
    let mut calendar = ICalendar::new(&options.prod_id);
    calendar.method = Some(METHOD_PUBLISH.to_string());
    calendar.name = Some(options.calendar_name.clone());
    calendar
}

fn event_entry(event: &LocalizedEvent, options: &ExportOptions) -> VEvent {
    let badi = event.event.badi;
    let mut description = event.description.clone();
    if let Some(url) = &event.url {
        description.push_str(&format!("\n\n{}: {url}", options.labels.more_info));
    }
    description.push_str(&format!(
        "\n\n{}: {}",
        options.labels.badi_date,
        describe(badi)
    ));

    let mut entry = all_day(
        &format!("{}/{}", event.event.id, badi.year()),
        event.event.instant,
        options,
    );
    entry.summary = Some(event.title.clone());
    entry.description = Some(description);
    entry.url = event.url.clone();
    entry.categories = vec![event.event.category.to_string()];
    entry
}

fn month_entry(month: &LocalizedMonth, options: &ExportOptions) -> VEvent {
    let start = &month.start;
    let summary = match start.month {
        BadiMonth::AyyamIHa => month.transliteration.to_string(),
        _ => format!(
            "{} {} ({})",
            options.labels.feast_prefix, month.transliteration, month.name
        ),
    };
    let description = if month.description.is_empty() {
        options.labels.sunset_note.clone()
    } else {
        format!("{}\n{}", month.description, options.labels.sunset_note)
    };
    let category = match start.month {
        BadiMonth::AyyamIHa => Category::Intercalary,
        _ => Category::Feast,
    };

    let mut entry = all_day(
        &format!("MONTH_{}/{}", start.month.number(), start.badi_year),
        start.instant,
        options,
    );
    entry.summary = Some(summary);
    entry.description = Some(description);
    entry.categories = vec![category.to_string()];
    entry
}

fn all_day(key: &str, instant: GregorianInstant, options: &ExportOptions) -> VEvent {
    let date = instant.date();
    let mut entry = VEvent::new(
        event_uid(key),
        ValueDateTime::from(options.dt_stamp),
        ValueDate::from(date),
    );
    entry.dt_end = date.tomorrow().ok().map(ValueDate::from);
    entry.transparency = Some(TimeTransparency::Transparent);
    entry
}

/// Stable across runs: the same event in the same Badí year always gets the same UID.
fn event_uid(key: &str) -> String {
    let uuid = Uuid::new_v5(&UID_NAMESPACE, key.as_bytes());
    format!("{uuid}@{UID_DOMAIN}")
}

fn describe(badi: BadiDate) -> String {
    format!(
        "{} {} {} B.E.",
        badi.day(),
        badi.month().transliteration(),
        badi.year()
    )
}

fn render(calendar: &ICalendar) -> Result<Vec<u8>, Error> {
    let text = badical_ical::format(calendar)?;
    tracing::debug!(
        events = calendar.events.len(),
        bytes = text.len(),
        "calendar rendered"
    );
    Ok(text.into_bytes())
}
