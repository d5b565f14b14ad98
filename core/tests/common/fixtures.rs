// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use badical_core::{Badical, Config, EventId, Language, LocalizedEvent, Query};
use jiff::civil::Date;

/// Creates an engine with the default configuration and embedded translations.
///
/// # Panics
///
/// Panics if the engine cannot be built.
pub async fn engine() -> Badical {
    Badical::new(Config::default())
        .await
        .expect("default engine should build")
}

/// Creates an English query for a Gregorian year.
///
/// # Panics
///
/// Panics if the year is out of range.
pub fn english(year: i64) -> Query {
    Query::new(year, Language::En).expect("year should be supported")
}

/// Dates on which an event falls.
pub fn find_dates(events: &[LocalizedEvent], id: EventId) -> Vec<Date> {
    events
        .iter()
        .filter(|e| e.event.id == id)
        .map(|e| e.event.instant.date())
        .collect()
}
