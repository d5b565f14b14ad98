// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use badical_core::{BadiMonth, Language, Query};
use jiff::civil::date;

use crate::common::{engine, english};

#[tokio::test]
async fn months_2024() {
    // Arrange
    let badical = engine().await;

    // Act
    let months = badical.months(&english(2024)).unwrap();

    // Assert
    assert_eq!(months.len(), 19);
    let first = &months[0];
    assert_eq!(first.start.month, BadiMonth::Sultan);
    assert_eq!(first.start.instant.date(), date(2024, 1, 19));
    let last = &months[18];
    assert_eq!(last.start.month, BadiMonth::Sharaf);
    assert_eq!(last.start.instant.date(), date(2024, 12, 30));

    let baha = months
        .iter()
        .find(|m| m.start.month == BadiMonth::Baha)
        .unwrap();
    assert_eq!(baha.start.badi_year, 181);
    assert_eq!(baha.start.instant.date(), date(2024, 3, 20));
    assert_eq!(baha.transliteration, "Bahá");
    assert_eq!(baha.name, "Splendour");

    assert!(months.windows(2).all(|w| w[0].start.instant < w[1].start.instant));
    assert!(months.iter().all(|m| m.start.month != BadiMonth::AyyamIHa));
}

#[tokio::test]
async fn months_are_named_in_the_requested_language() {
    let badical = engine().await;

    let months = badical.months(&Query::new(2024, Language::Es).unwrap()).unwrap();

    let baha = months
        .iter()
        .find(|m| m.start.month == BadiMonth::Baha)
        .unwrap();
    assert_eq!(baha.name, "Esplendor");
}

#[tokio::test]
async fn months_json_shape() {
    let badical = engine().await;
    let months = badical.months(&english(2024)).unwrap();

    let json = serde_json::to_value(&months).unwrap();

    let first = &json[0];
    assert_eq!(first["month"], 17);
    assert_eq!(first["badi_year"], 180);
    assert_eq!(first["date"], "2024-01-19");
    assert_eq!(first["transliteration"], "Sulṭán");
    assert!(first["name"].is_string());
    assert!(first["description"].is_string());
}

#[tokio::test]
async fn badi_year_overview() {
    let badical = engine().await;

    let year = badical.badi_year(174, Language::En).unwrap();

    assert_eq!(year.naw_ruz, date(2017, 3, 20));
    assert!(year.leap);
    assert_eq!(year.ayyam_i_ha_len, 5);
    assert_eq!(year.months.len(), 20);
    assert!(year.events.iter().all(|e| e.event.badi.year() == 174));
}
