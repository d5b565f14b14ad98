// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a table over rows of type `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain-text table, padded by display width so that accented names line up.
#[derive(Debug)]
pub struct Table<'a, T, C> {
    columns: &'a [C],
    data: &'a [T],
    header: bool,
    separator: &'static str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            header: true,
            separator: "  ",
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.columns.iter().map(|col| col.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|data| self.columns.iter().map(|col| col.format(data)).collect())
            .collect();
        let widths = column_widths(self.header.then_some(&names[..]), &rows);
        let last = self.columns.len().saturating_sub(1);

        if self.header {
            for (i, name) in names.iter().enumerate() {
                let cell = pad(name, widths[i], PaddingDirection::Left, i == last);
                write!(f, "{}", cell.bold())?;
                write_end(f, i == last, self.separator)?;
            }
        }

        for (data, row) in self.data.iter().zip(&rows) {
            for (i, (col, cell)) in self.columns.iter().zip(row).enumerate() {
                let cell = pad(cell, widths[i], col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write_end(f, i == last, self.separator)?;
            }
        }
        Ok(())
    }
}

fn column_widths(names: Option<&[Cow<'_, str>]>, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths: Vec<usize> = match (names, rows.first()) {
        (Some(names), _) => names.iter().map(|a| a.width()).collect(),
        (None, Some(row)) => vec![0; row.len()],
        (None, None) => Vec::new(),
    };
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn write_end(f: &mut fmt::Formatter<'_>, last: bool, separator: &str) -> fmt::Result {
    match last {
        true => writeln!(f),
        false => write!(f, "{separator}"),
    }
}
