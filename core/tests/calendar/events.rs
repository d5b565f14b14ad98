// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use badical_core::{Category, Error, EventId, Language, Query};
use jiff::civil::date;

use crate::common::{assert_chronological, engine, english, find_dates};

#[tokio::test]
async fn events_2024_holy_days() {
    // Arrange
    let badical = engine().await;

    // Act
    let events = badical.events(&english(2024)).unwrap();

    // Assert
    let expected = [
        (EventId::Nawruz, date(2024, 3, 20)),
        (EventId::Ridvan1, date(2024, 4, 20)),
        (EventId::Ridvan9, date(2024, 4, 28)),
        (EventId::Ridvan12, date(2024, 5, 1)),
        (EventId::DeclarationOfTheBab, date(2024, 5, 23)),
        (EventId::AscensionOfBahaullah, date(2024, 5, 28)),
        (EventId::MartyrdomOfTheBab, date(2024, 7, 9)),
        (EventId::BirthOfTheBab, date(2024, 11, 2)),
        (EventId::BirthOfBahaullah, date(2024, 11, 3)),
        (EventId::DayOfTheCovenant, date(2024, 11, 25)),
        (EventId::AscensionOfAbdulBaha, date(2024, 11, 27)),
    ];
    for (id, day) in expected {
        assert_eq!(find_dates(&events, id), [day], "{id}");
    }
}

#[tokio::test]
async fn events_2024_are_complete_and_ordered() {
    let badical = engine().await;
    let events = badical.events(&english(2024)).unwrap();

    let count = |category| events.iter().filter(|e| e.event.category == category).count();
    assert_eq!(count(Category::HolyDay), 9);
    assert_eq!(count(Category::Commemoration), 2);
    assert_eq!(count(Category::Feast), 19);
    assert_eq!(count(Category::Intercalary), 4);
    assert_eq!(count(Category::FastBoundary), 2);
    assert_chronological(&events);

    assert!(events.iter().all(|e| e.event.instant.date().year() == 2024));
}

#[tokio::test]
async fn events_are_titled_in_the_requested_language() {
    let badical = engine().await;

    let english = badical.events(&Query::new(2024, Language::En).unwrap()).unwrap();
    let spanish = badical.events(&Query::new(2024, Language::Es).unwrap()).unwrap();

    let title = |events: &[badical_core::LocalizedEvent], id| {
        events
            .iter()
            .find(|e| e.event.id == id)
            .map(|e| e.title.clone())
            .unwrap()
    };
    assert_eq!(title(&english, EventId::FastStart), "First Day of the Fast");
    assert_eq!(title(&spanish, EventId::FastStart), "Primer Día del Ayuno");
    assert_eq!(title(&english, EventId::BirthOfTheBab), "Birth of the Báb");
    assert_eq!(title(&spanish, EventId::BirthOfTheBab), "Nacimiento del Báb");
    assert_eq!(english.len(), spanish.len());
}

#[tokio::test]
async fn unknown_language_falls_back_to_english() {
    let badical = engine().await;

    let query = badical.query(2024, Some("fr")).unwrap();
    let events = badical.events(&query).unwrap();

    assert_eq!(query.language(), Language::En);
    let naw_ruz = events.iter().find(|e| e.event.id == EventId::Nawruz).unwrap();
    assert_eq!(naw_ruz.title, "Naw-Rúz");
}

#[tokio::test]
async fn years_outside_the_supported_range_are_invalid_input() {
    let badical = engine().await;

    for year in [1843, 2345] {
        assert!(
            matches!(badical.query(year, None), Err(Error::InvalidInput(_))),
            "{year}"
        );
    }
}

#[tokio::test]
async fn holy_days_move_with_the_2015_calendar_reform() {
    let badical = engine().await;

    let before = badical.events(&english(2014)).unwrap();
    let after = badical.events(&english(2016)).unwrap();

    assert_eq!(find_dates(&before, EventId::DeclarationOfTheBab), [date(2014, 5, 23)]);
    assert_eq!(find_dates(&before, EventId::BirthOfTheBab), [date(2014, 10, 20)]);
    assert_eq!(find_dates(&before, EventId::BirthOfBahaullah), [date(2014, 11, 12)]);
    assert_eq!(find_dates(&after, EventId::Nawruz), [date(2016, 3, 20)]);
}

#[tokio::test]
async fn events_json_shape() {
    let badical = engine().await;
    let events = badical.events(&english(2024)).unwrap();

    let json = serde_json::to_value(&events).unwrap();
    let naw_ruz = json
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == "NAWRUZ")
        .unwrap();
    assert_eq!(naw_ruz["date"], "2024-03-20");
    assert_eq!(naw_ruz["title"], "Naw-Rúz");
    assert_eq!(naw_ruz["category"], "holy-day");
    assert_eq!(naw_ruz["badi_year"], 181);
    assert_eq!(naw_ruz["badi_month"], 1);
    assert_eq!(naw_ruz["badi_day"], 1);
    assert!(naw_ruz["url"].is_string());

    let fast_end = json
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == "FAST_END")
        .unwrap();
    assert!(fast_end.get("url").is_none());
}

#[tokio::test]
async fn fast_period() {
    let badical = engine().await;

    let fast = badical.fast(&english(2025)).unwrap();

    assert_eq!(fast.badi_year, 181);
    assert_eq!(fast.start.date(), date(2025, 3, 1));
    assert_eq!(fast.end.date(), date(2025, 3, 19));
}

#[tokio::test]
async fn complete_of_the_first_year_has_no_fast() {
    let badical = engine().await;

    let complete = badical.complete(&english(1844)).unwrap();

    assert_eq!(complete.year, 1844);
    assert!(complete.fast.is_none());
    assert_eq!(complete.months.len(), 16);
    assert_eq!(find_dates(&complete.events, EventId::Nawruz), [date(1844, 3, 21)]);
    assert!(
        complete
            .events
            .iter()
            .all(|e| e.event.instant.date() >= date(1844, 3, 21))
    );
}

#[tokio::test]
async fn complete_json_shape() {
    let badical = engine().await;
    let query = Query::new(2024, Language::Es).unwrap();

    let complete = badical.complete(&query).unwrap();
    let json = serde_json::to_value(&complete).unwrap();

    assert_eq!(json["year"], 2024);
    assert_eq!(json["language"], "es");
    assert_eq!(json["events"].as_array().unwrap().len(), complete.events.len());
    assert_eq!(json["months"].as_array().unwrap().len(), 19);
    assert_eq!(json["fast"]["start"], "2024-03-01");
}
