// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use badical_core::{Category, LocalizedEvent};
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Date(EventColumnDate),
                EventColumn::BadiDate(EventColumnBadiDate),
                EventColumn::Title(EventColumnTitle),
            ],
        }
    }

    /// Show the event id and category as well.
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.insert(0, EventColumn::Id(EventColumnId));
            self.columns
                .insert(self.columns.len() - 1, EventColumn::Category(EventColumnCategory));
        }
        self
    }

    pub fn format<'a>(&'a self, events: &'a [LocalizedEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [LocalizedEvent],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Table::new(&self.formatter.columns, self.events))
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id(EventColumnId),
    Date(EventColumnDate),
    BadiDate(EventColumnBadiDate),
    Category(EventColumnCategory),
    Title(EventColumnTitle),
}

impl TableColumn<LocalizedEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id(_) => "Id",
            EventColumn::Date(_) => "Date",
            EventColumn::BadiDate(_) => "Badí Date",
            EventColumn::Category(_) => "Category",
            EventColumn::Title(_) => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a LocalizedEvent) -> Cow<'a, str> {
        match self {
            EventColumn::Id(a) => a.format(data),
            EventColumn::Date(a) => a.format(data),
            EventColumn::BadiDate(a) => a.format(data),
            EventColumn::Category(a) => a.format(data),
            EventColumn::Title(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::BadiDate(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &LocalizedEvent) -> Option<Color> {
        match self {
            EventColumn::Title(_) => Some(category_color(data.event.category)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId;

impl EventColumnId {
    fn format<'a>(&self, event: &'a LocalizedEvent) -> Cow<'a, str> {
        Cow::Borrowed(event.event.id.as_ref())
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDate;

impl EventColumnDate {
    fn format<'a>(&self, event: &'a LocalizedEvent) -> Cow<'a, str> {
        event.event.instant.to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnBadiDate;

impl EventColumnBadiDate {
    fn format<'a>(&self, event: &'a LocalizedEvent) -> Cow<'a, str> {
        let badi = event.event.badi;
        format!(
            "{} {} {}",
            badi.day(),
            badi.month().transliteration(),
            badi.year()
        )
        .into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnCategory;

impl EventColumnCategory {
    fn format<'a>(&self, event: &'a LocalizedEvent) -> Cow<'a, str> {
        event.event.category.to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTitle;

impl EventColumnTitle {
    fn format<'a>(&self, event: &'a LocalizedEvent) -> Cow<'a, str> {
        Cow::Borrowed(&event.title)
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::HolyDay => Color::Yellow,
        Category::Commemoration => Color::Cyan,
        Category::Intercalary => Color::Magenta,
        Category::FastBoundary => Color::Blue,
        Category::Feast => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use badical_core::{BadiDate, BadiMonth, EventId, ResolvedEvent};
    use jiff::civil::date;

    use super::*;

    fn naw_ruz() -> LocalizedEvent {
        LocalizedEvent {
            event: ResolvedEvent {
                id: EventId::Nawruz,
                category: Category::HolyDay,
                badi: BadiDate::new(181, BadiMonth::Baha, 1).unwrap(),
                instant: date(2024, 3, 20).into(),
            },
            title: "Naw-Rúz".to_string(),
            description: String::new(),
            url: None,
        }
    }

    #[test]
    fn test_format_events() {
        colored::control::set_override(false);
        let events = [naw_ruz()];
        let formatter = EventFormatter::new();

        let text = formatter.format(&events).to_string();
        assert_eq!(
            text,
            "Date        Badí Date   Title\n2024-03-20  1 Bahá 181  Naw-Rúz\n"
        );
    }

    #[test]
    fn test_format_verbose() {
        colored::control::set_override(false);
        let events = [naw_ruz()];
        let formatter = EventFormatter::new().verbose(true);

        let text = formatter.format(&events).to_string();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("Id"));
        assert!(header.contains("Category"));
        assert!(text.contains("NAWRUZ"));
        assert!(text.contains("holy-day"));
    }
}
