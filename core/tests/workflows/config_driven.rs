// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the engine: translation
//! overrides, calendar metadata and the leap-year rule.

use badical_core::{Badical, Config, Error, EventId, IcsKind, Language, OracleKind, Query};

use crate::common::{TranslationDir, english};

#[tokio::test]
async fn translations_dir_overrides_embedded_tables() {
    // Arrange
    let dir = TranslationDir::new().await.unwrap();
    let mut en: serde_json::Value =
        serde_json::from_str(include_str!("../../data/en.json")).unwrap();
    en["events"]["NAWRUZ"]["title"] = "New Year".into();
    dir.write("en.json", &en.to_string()).await.unwrap();

    let config = Config {
        translations_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    // Act
    let badical = Badical::new(config).await.unwrap();
    let events = badical.events(&english(2024)).unwrap();

    // Assert
    let naw_ruz = events.iter().find(|e| e.event.id == EventId::Nawruz).unwrap();
    assert_eq!(naw_ruz.title, "New Year");
}

#[tokio::test]
async fn missing_spanish_entries_fall_back_to_english() {
    let dir = TranslationDir::new().await.unwrap();
    let mut es: serde_json::Value =
        serde_json::from_str(include_str!("../../data/es.json")).unwrap();
    es["events"].as_object_mut().unwrap().remove("FAST_START");
    dir.write("es.json", &es.to_string()).await.unwrap();

    let config = Config {
        translations_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let badical = Badical::new(config).await.unwrap();
    let events = badical.events(&Query::new(2024, Language::Es).unwrap()).unwrap();

    let title = |id| events.iter().find(|e| e.event.id == id).map(|e| e.title.as_str());
    assert_eq!(title(EventId::FastStart), Some("First Day of the Fast"));
    assert_eq!(title(EventId::FastEnd), Some("Último Día del Ayuno"));
}

#[tokio::test]
async fn missing_translation_file_fails_startup() {
    let dir = TranslationDir::new().await.unwrap();
    dir.remove("es.json").await.unwrap();

    let config = Config {
        translations_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let result = Badical::new(config).await;

    assert!(matches!(result, Err(Error::Translation { .. })));
}

#[tokio::test]
async fn incomplete_english_table_fails_startup() {
    let dir = TranslationDir::new().await.unwrap();
    let mut en: serde_json::Value =
        serde_json::from_str(include_str!("../../data/en.json")).unwrap();
    en["events"].as_object_mut().unwrap().remove("NAWRUZ");
    dir.write("en.json", &en.to_string()).await.unwrap();

    let config = Config {
        translations_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let result = Badical::new(config).await;

    assert!(matches!(result, Err(Error::Translation { .. })));
}

#[tokio::test]
async fn calendar_metadata_from_config() {
    let config = Config {
        prod_id: Some("-//Example Community//EN".to_string()),
        calendar_name: Some("Community Calendar".to_string()),
        ..Config::default()
    };
    let badical = Badical::new(config).await.unwrap();

    let bytes = badical
        .ics_at(IcsKind::Events, &english(2024), "2024-01-01T00:00:00Z".parse().unwrap())
        .unwrap();

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\r\nPRODID:-//Example Community//EN\r\n"));
    assert!(text.contains("\r\nX-WR-CALNAME:Community Calendar\r\n"));
}

#[tokio::test]
async fn leap_year_rules_agree_on_published_years() {
    let published = Badical::new(Config::default()).await.unwrap();
    let astronomical = Badical::new(Config {
        oracle: OracleKind::Astronomical,
        ..Config::default()
    })
    .await
    .unwrap();

    for year in [2015, 2024, 2050, 2064] {
        let query = english(year);
        assert_eq!(
            published.events(&query).unwrap(),
            astronomical.events(&query).unwrap(),
            "{year}"
        );
    }
}
