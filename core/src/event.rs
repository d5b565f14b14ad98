// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::badi::{BadiDate, BadiMonth, GregorianInstant};

/// Stable identifier of a calendar event, independent of language.
///
/// The textual form is `SCREAMING_SNAKE_CASE`; events falling on the same day are ordered
/// by it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventId {
    Nawruz,
    #[strum(serialize = "RIDVAN_1")]
    Ridvan1,
    #[strum(serialize = "RIDVAN_9")]
    Ridvan9,
    #[strum(serialize = "RIDVAN_12")]
    Ridvan12,
    DeclarationOfTheBab,
    AscensionOfBahaullah,
    MartyrdomOfTheBab,
    BirthOfTheBab,
    BirthOfBahaullah,
    DayOfTheCovenant,
    AscensionOfAbdulBaha,
    #[strum(serialize = "FEAST_1")]
    Feast1,
    #[strum(serialize = "FEAST_2")]
    Feast2,
    #[strum(serialize = "FEAST_3")]
    Feast3,
    #[strum(serialize = "FEAST_4")]
    Feast4,
    #[strum(serialize = "FEAST_5")]
    Feast5,
    #[strum(serialize = "FEAST_6")]
    Feast6,
    #[strum(serialize = "FEAST_7")]
    Feast7,
    #[strum(serialize = "FEAST_8")]
    Feast8,
    #[strum(serialize = "FEAST_9")]
    Feast9,
    #[strum(serialize = "FEAST_10")]
    Feast10,
    #[strum(serialize = "FEAST_11")]
    Feast11,
    #[strum(serialize = "FEAST_12")]
    Feast12,
    #[strum(serialize = "FEAST_13")]
    Feast13,
    #[strum(serialize = "FEAST_14")]
    Feast14,
    #[strum(serialize = "FEAST_15")]
    Feast15,
    #[strum(serialize = "FEAST_16")]
    Feast16,
    #[strum(serialize = "FEAST_17")]
    Feast17,
    #[strum(serialize = "FEAST_18")]
    Feast18,
    #[strum(serialize = "FEAST_19")]
    Feast19,
    #[strum(serialize = "AYYAMIHA_1")]
    AyyamIHa1,
    #[strum(serialize = "AYYAMIHA_2")]
    AyyamIHa2,
    #[strum(serialize = "AYYAMIHA_3")]
    AyyamIHa3,
    #[strum(serialize = "AYYAMIHA_4")]
    AyyamIHa4,
    #[strum(serialize = "AYYAMIHA_5")]
    AyyamIHa5,
    FastStart,
    FastEnd,
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

/// Kind of observance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// One of the nine holy days on which work is suspended
    HolyDay,
    /// Anniversary without suspension of work
    Commemoration,
    /// Nineteen Day Feast, the first day of a month
    Feast,
    /// Ayyám-i-Há
    Intercalary,
    /// First or last day of the Fast
    FastBoundary,
}

/// Which of the Twin Holy Days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinDay {
    /// Birth of the Báb
    First,
    /// Birth of Bahá'u'lláh
    Second,
}

/// How an event is placed in a Badí year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRule {
    /// Fixed Badí coordinates.
    Fixed { month: BadiMonth, day: u8 },

    /// Fixed Badí coordinates that moved when the calendar was unified in 172 B.E.
    Revised {
        legacy: (BadiMonth, u8),
        current: (BadiMonth, u8),
    },

    /// First day of the month.
    MonthStart(BadiMonth),

    /// Follows the eighth new moon after Naw-Rúz.
    TwinHolyDay(TwinDay),
}

/// Language-independent description of a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDefinition {
    pub id: EventId,
    pub rule: EventRule,
    pub category: Category,
}

const fn fixed(id: EventId, month: BadiMonth, day: u8, category: Category) -> EventDefinition {
    EventDefinition {
        id,
        rule: EventRule::Fixed { month, day },
        category,
    }
}

const fn revised(id: EventId, legacy: (BadiMonth, u8), current: (BadiMonth, u8)) -> EventDefinition {
    EventDefinition {
        id,
        rule: EventRule::Revised { legacy, current },
        category: Category::HolyDay,
    }
}

const fn feast(id: EventId, month: BadiMonth) -> EventDefinition {
    EventDefinition {
        id,
        rule: EventRule::MonthStart(month),
        category: Category::Feast,
    }
}

const fn twin(id: EventId, day: TwinDay) -> EventDefinition {
    EventDefinition {
        id,
        rule: EventRule::TwinHolyDay(day),
        category: Category::HolyDay,
    }
}

/// Every recurring event of the Badí year.
pub static DEFINITIONS: [EventDefinition; 37] = {
    use BadiMonth as M;
    use Category::{Commemoration, FastBoundary, HolyDay, Intercalary};
    use EventId as E;
    [
        fixed(E::Nawruz, M::Baha, 1, HolyDay),
        fixed(E::Ridvan1, M::Jalal, 13, HolyDay),
        fixed(E::Ridvan9, M::Jamal, 2, HolyDay),
        fixed(E::Ridvan12, M::Jamal, 5, HolyDay),
        revised(E::DeclarationOfTheBab, (M::Azamat, 7), (M::Azamat, 8)),
        fixed(E::AscensionOfBahaullah, M::Azamat, 13, HolyDay),
        revised(E::MartyrdomOfTheBab, (M::Rahmat, 16), (M::Rahmat, 17)),
        twin(E::BirthOfTheBab, TwinDay::First),
        twin(E::BirthOfBahaullah, TwinDay::Second),
        fixed(E::DayOfTheCovenant, M::Qawl, 4, Commemoration),
        fixed(E::AscensionOfAbdulBaha, M::Qawl, 6, Commemoration),
        feast(E::Feast1, M::Baha),
        feast(E::Feast2, M::Jalal),
        feast(E::Feast3, M::Jamal),
        feast(E::Feast4, M::Azamat),
        feast(E::Feast5, M::Nur),
        feast(E::Feast6, M::Rahmat),
        feast(E::Feast7, M::Kalimat),
        feast(E::Feast8, M::Kamal),
        feast(E::Feast9, M::Asma),
        feast(E::Feast10, M::Izzat),
        feast(E::Feast11, M::Mashiyyat),
        feast(E::Feast12, M::Ilm),
        feast(E::Feast13, M::Qudrat),
        feast(E::Feast14, M::Qawl),
        feast(E::Feast15, M::Masail),
        feast(E::Feast16, M::Sharaf),
        feast(E::Feast17, M::Sultan),
        feast(E::Feast18, M::Mulk),
        feast(E::Feast19, M::Ala),
        fixed(E::AyyamIHa1, M::AyyamIHa, 1, Intercalary),
        fixed(E::AyyamIHa2, M::AyyamIHa, 2, Intercalary),
        fixed(E::AyyamIHa3, M::AyyamIHa, 3, Intercalary),
        fixed(E::AyyamIHa4, M::AyyamIHa, 4, Intercalary),
        fixed(E::AyyamIHa5, M::AyyamIHa, 5, Intercalary),
        fixed(E::FastStart, M::Ala, 1, FastBoundary),
        fixed(E::FastEnd, M::Ala, 19, FastBoundary),
    ]
};

/// Look up the definition of an event.
#[must_use]
pub fn definition(id: EventId) -> Option<&'static EventDefinition> {
    DEFINITIONS.iter().find(|d| d.id == id)
}

/// An event placed on a Gregorian day, before any text is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    pub id: EventId,
    pub category: Category,
    pub badi: BadiDate,
    pub instant: GregorianInstant,
}

impl ResolvedEvent {
    /// Chronological order, ties broken by the textual id.
    pub(crate) fn chronological(a: &Self, b: &Self) -> std::cmp::Ordering {
        a.instant
            .cmp(&b.instant)
            .then_with(|| a.id.as_ref().cmp(b.id.as_ref()))
    }
}

/// A resolved event with its title and description in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEvent {
    pub event: ResolvedEvent,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

impl Serialize for LocalizedEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.url.is_some() { 9 } else { 8 };
        let mut s = serializer.serialize_struct("LocalizedEvent", len)?;
        s.serialize_field("id", &self.event.id)?;
        s.serialize_field("date", &self.event.instant)?;
        s.serialize_field("title", &self.title)?;
        s.serialize_field("description", &self.description)?;
        if let Some(url) = &self.url {
            s.serialize_field("url", url)?;
        }
        s.serialize_field("category", &self.event.category)?;
        s.serialize_field("badi_year", &self.event.badi.year())?;
        s.serialize_field("badi_month", &self.event.badi.month())?;
        s.serialize_field("badi_day", &self.event.badi.day())?;
        s.end()
    }
}

/// First day of a Badí month, the day of its Nineteen Day Feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthStart {
    pub month: BadiMonth,
    pub badi_year: i32,
    #[serde(rename = "date")]
    pub instant: GregorianInstant,
}

/// A month start with its names and description in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedMonth {
    #[serde(flatten)]
    pub start: MonthStart,
    pub transliteration: &'static str,
    pub name: String,
    pub description: String,
}

/// The nineteen days of fasting, from the first to the last day of ʻAláʼ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FastPeriod {
    pub badi_year: i32,
    pub start: GregorianInstant,
    pub end: GregorianInstant,
}
