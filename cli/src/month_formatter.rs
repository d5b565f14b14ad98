// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use badical_core::{BadiMonth, LocalizedMonth};
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct MonthFormatter {
    columns: Vec<MonthColumn>,
}

impl MonthFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                MonthColumn::Date,
                MonthColumn::Number,
                MonthColumn::Transliteration,
                MonthColumn::Name,
            ],
        }
    }

    pub fn format<'a>(&'a self, months: &'a [LocalizedMonth]) -> Display<'a> {
        Display {
            months,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    months: &'a [LocalizedMonth],
    formatter: &'a MonthFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Table::new(&self.formatter.columns, self.months))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MonthColumn {
    Date,
    Number,
    Transliteration,
    Name,
}

impl TableColumn<LocalizedMonth> for MonthColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            MonthColumn::Date => "Date",
            MonthColumn::Number => "#",
            MonthColumn::Transliteration => "Month",
            MonthColumn::Name => "Meaning",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a LocalizedMonth) -> Cow<'a, str> {
        match self {
            MonthColumn::Date => data.start.instant.to_string().into(),
            MonthColumn::Number => data.start.month.number().to_string().into(),
            MonthColumn::Transliteration => data.transliteration.into(),
            MonthColumn::Name => Cow::Borrowed(&data.name),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            MonthColumn::Number => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &LocalizedMonth) -> Option<Color> {
        match (self, data.start.month) {
            (MonthColumn::Transliteration, BadiMonth::Ala) => Some(Color::Blue),
            (MonthColumn::Transliteration, BadiMonth::AyyamIHa) => Some(Color::Magenta),
            (MonthColumn::Transliteration, _) => Some(Color::Green),
            _ => None,
        }
    }
}
