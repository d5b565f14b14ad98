// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Titles, descriptions and month names in the supported languages.
//!
//! English and Spanish tables are embedded in the binary. A translations directory holding
//! `en.json` and `es.json` replaces them at startup. Lookups fall back to English, so a
//! table for another language may be partial; the English table must be complete.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tokio::fs;

use crate::badi::BadiMonth;
use crate::error::Error;
use crate::event::EventId;

/// Supported languages.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the fallback for every lookup
    #[default]
    En,
    /// Spanish
    Es,
}

impl Language {
    /// Parse a language code such as `en`, `ES` or `es-MX`, falling back to English.
    pub fn from_code_lossy(code: &str) -> Self {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.parse() {
            Ok(language) => language,
            Err(_) => {
                tracing::warn!(code, "unsupported language, falling back to English");
                Self::En
            }
        }
    }

    /// Two-letter code
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    fn file_name(self) -> String {
        format!("{}.json", self.code())
    }

    fn embedded(self) -> &'static str {
        match self {
            Self::En => include_str!("../data/en.json"),
            Self::Es => include_str!("../data/es.json"),
        }
    }
}

/// Title and description of an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventText {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Translated name and description of a month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthText {
    pub name: String,
    pub description: String,
}

/// Fixed phrases used when rendering calendars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labels {
    /// Calendar display name
    pub calendar_name: String,
    /// Put before a month name to title its feast, "Feast of"
    pub feast_prefix: String,
    /// Reminder that Badí days start at sunset
    pub sunset_note: String,
    /// Introduces a link
    pub more_info: String,
    /// Introduces a Badí date
    pub badi_date: String,
}

/// All texts of one language.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    pub labels: Labels,
    events: HashMap<EventId, EventText>,
    months: HashMap<u8, MonthText>,
}

#[derive(Debug, Deserialize)]
struct TranslationTableRaw {
    #[serde(flatten)]
    labels: Labels,
    events: HashMap<String, EventText>,
    months: HashMap<u8, MonthText>,
}

impl TranslationTable {
    /// Parse a table from its JSON form. Unknown event ids are ignored with a warning.
    ///
    /// # Errors
    /// Returns [`Error::Translation`] if the JSON is malformed.
    pub fn from_json(source: impl AsRef<Path>, json: &str) -> Result<Self, Error> {
        let source = source.as_ref();
        let raw: TranslationTableRaw =
            serde_json::from_str(json).map_err(|e| Error::translation(source, e))?;

        let mut events = HashMap::with_capacity(raw.events.len());
        for (key, text) in raw.events {
            match key.parse::<EventId>() {
                Ok(id) => {
                    events.insert(id, text);
                }
                Err(_) => tracing::warn!(path = %source.display(), %key, "unknown event id"),
            }
        }

        Ok(Self {
            labels: raw.labels,
            events,
            months: raw.months,
        })
    }

    pub fn event(&self, id: EventId) -> Option<&EventText> {
        self.events.get(&id)
    }

    pub fn month(&self, month: BadiMonth) -> Option<&MonthText> {
        self.months.get(&month.number())
    }
}

/// Translation tables for every supported language.
#[derive(Debug, Clone)]
pub struct Translations {
    en: TranslationTable,
    es: TranslationTable,
}

impl Translations {
    /// The tables compiled into the binary.
    ///
    /// # Errors
    /// Returns [`Error::Translation`] if an embedded table is malformed.
    pub fn embedded() -> Result<Self, Error> {
        let load = |language: Language| {
            let path = format!("<embedded>/{}", language.file_name());
            TranslationTable::from_json(path, language.embedded())
        };
        Ok(Self {
            en: load(Language::En)?,
            es: load(Language::Es)?,
        })
    }

    /// Load `en.json` and `es.json` from a directory.
    ///
    /// # Errors
    /// Returns [`Error::Translation`] if a file is missing or malformed.
    #[tracing::instrument]
    pub async fn load_dir(dir: &Path) -> Result<Self, Error> {
        async fn load(dir: &Path, language: Language) -> Result<TranslationTable, Error> {
            let path = dir.join(language.file_name());
            let json = fs::read_to_string(&path)
                .await
                .map_err(|e| Error::translation(&path, e))?;
            TranslationTable::from_json(&path, &json)
        }

        Ok(Self {
            en: load(dir, Language::En).await?,
            es: load(dir, Language::Es).await?,
        })
    }

    /// Check that English covers every event and month; report gaps in other languages.
    ///
    /// # Errors
    /// Returns [`Error::Translation`] naming the first missing English entry.
    pub fn verify(&self) -> Result<(), Error> {
        for id in EventId::iter() {
            if self.en.event(id).is_none() {
                return Err(Error::translation("en.json", format!("missing event {id}")));
            }
        }
        for month in BadiMonth::named().chain([BadiMonth::AyyamIHa]) {
            if self.en.month(month).is_none() {
                return Err(Error::translation(
                    "en.json",
                    format!("missing month {}", month.number()),
                ));
            }
        }

        for language in Language::iter().filter(|l| *l != Language::En) {
            let table = self.table(language);
            let missing_events = EventId::iter().filter(|id| table.event(*id).is_none()).count();
            let missing_months = BadiMonth::named()
                .chain([BadiMonth::AyyamIHa])
                .filter(|m| table.month(*m).is_none())
                .count();
            if missing_events + missing_months > 0 {
                tracing::warn!(
                    %language,
                    missing_events,
                    missing_months,
                    "incomplete translation, English is used for missing entries"
                );
            }
        }
        Ok(())
    }

    /// The table of a language.
    pub fn table(&self, language: Language) -> &TranslationTable {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    /// Text of an event, in English if the language lacks it.
    ///
    /// # Errors
    /// Returns [`Error::UnknownEvent`] if not even English has it.
    pub fn resolve(&self, id: EventId, language: Language) -> Result<&EventText, Error> {
        self.table(language)
            .event(id)
            .or_else(|| self.en.event(id))
            .ok_or_else(|| Error::UnknownEvent(id.to_string()))
    }

    /// Name and description of a month, in English if the language lacks it.
    ///
    /// # Errors
    /// Returns [`Error::UnknownMonth`] if not even English has it.
    pub fn month(&self, month: BadiMonth, language: Language) -> Result<&MonthText, Error> {
        self.table(language)
            .month(month)
            .or_else(|| self.en.month(month))
            .ok_or(Error::UnknownMonth(month.number()))
    }

    /// Fixed phrases of a language.
    pub fn labels(&self, language: Language) -> &Labels {
        &self.table(language).labels
    }
}
