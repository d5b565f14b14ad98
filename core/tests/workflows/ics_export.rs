// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar file export workflow tests.

use badical_core::{Category, IcsKind, Language, Query};
use jiff::Timestamp;

use crate::common::{assert_folded, engine, english};

fn stamp() -> Timestamp {
    "2024-01-01T00:00:00Z".parse().unwrap()
}

#[tokio::test]
async fn events_file_parses_back_into_the_same_entries() {
    // Arrange
    let badical = engine().await;
    let query = english(2024);
    let events = badical.events(&query).unwrap();

    // Act
    let bytes = badical.ics_at(IcsKind::Events, &query, stamp()).unwrap();

    // Assert
    assert_folded(&bytes);
    let calendars = badical_ical::parse(std::str::from_utf8(&bytes).unwrap()).unwrap();
    assert_eq!(calendars.len(), 1);

    let parsed: Vec<_> = calendars[0]
        .events
        .iter()
        .map(|e| (e.dt_start.civil_date(), e.summary.clone().unwrap()))
        .collect();
    let expected: Vec<_> = events
        .iter()
        .map(|e| (e.event.instant.date(), e.title.clone()))
        .collect();
    assert_eq!(parsed, expected);
}

#[tokio::test]
async fn months_file_titles() {
    let badical = engine().await;
    let query = Query::new(2024, Language::Es).unwrap();

    let bytes = badical.ics_at(IcsKind::Months, &query, stamp()).unwrap();

    assert_folded(&bytes);
    let calendars = badical_ical::parse(std::str::from_utf8(&bytes).unwrap()).unwrap();
    let calendar = &calendars[0];
    assert_eq!(calendar.prod_id, "-//Bahá'í Calendar//ES");
    assert_eq!(calendar.name.as_deref(), Some("Calendario Bahá'í"));
    assert_eq!(calendar.events.len(), 20);
    let intercalary: Vec<_> = calendar
        .events
        .iter()
        .filter(|e| e.summary.as_deref() == Some("Ayyám-i-Há"))
        .map(|e| e.dt_start.civil_date())
        .collect();
    assert_eq!(intercalary, [jiff::civil::date(2024, 2, 26)]);
    assert!(
        calendar
            .events
            .iter()
            .any(|e| e.summary.as_deref() == Some("Fiesta de Bahá (Esplendor)"))
    );
    assert!(calendar.events.iter().all(|e| {
        e.description
            .as_deref()
            .is_some_and(|d| d.ends_with("Comienza en el atardecer del día anterior."))
    }));
}

#[tokio::test]
async fn complete_file_merges_without_duplicate_feasts() {
    let badical = engine().await;
    let query = english(2024);
    let events = badical.events(&query).unwrap();
    let months = badical.months(&query).unwrap();

    let bytes = badical.ics_at(IcsKind::Complete, &query, stamp()).unwrap();

    assert_folded(&bytes);
    let calendars = badical_ical::parse(std::str::from_utf8(&bytes).unwrap()).unwrap();
    let entries = &calendars[0].events;
    let feasts = events
        .iter()
        .filter(|e| e.event.category == Category::Feast)
        .count();
    assert_eq!(entries.len(), events.len() - feasts + months.len());
    assert!(
        entries
            .windows(2)
            .all(|w| w[0].dt_start.civil_date() <= w[1].dt_start.civil_date())
    );
}

#[tokio::test]
async fn export_is_deterministic() {
    let badical = engine().await;
    let query = english(2030);

    let first = badical.ics_at(IcsKind::Complete, &query, stamp()).unwrap();
    let second = badical.clone().ics_at(IcsKind::Complete, &query, stamp()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn every_entry_has_a_unique_uid() {
    let badical = engine().await;

    let bytes = badical.ics_at(IcsKind::Complete, &english(2024), stamp()).unwrap();

    let calendars = badical_ical::parse(std::str::from_utf8(&bytes).unwrap()).unwrap();
    let mut uids: Vec<_> = calendars[0].events.iter().map(|e| e.uid.clone()).collect();
    let total = uids.len();
    uids.sort();
    uids.dedup();
    assert_eq!(uids.len(), total);
}
