// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module formats [`ICalendar`] values to the RFC 5545 text format, writing to any
//! `std::io::Write` implementer.
//!
//! # Example
//!
//! ```
//! use badical_ical::{ICalendar, format};
//!
//! let calendar = ICalendar::new("-//Example//EN");
//! let ics = format(&calendar).unwrap();
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

mod component;

use std::io::{self, Write};

use crate::component::ICalendar;
use crate::formatter::component::write_icalendar;

/// Convenience function to format an `ICalendar` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(calendar: &ICalendar) -> io::Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Convenience method to write an `ICalendar` to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, calendar: &ICalendar, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        formatter.write_calendar(calendar)?;
        formatter.flush()
    }

    /// Convenience method to write an `ICalendar` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, calendar: &ICalendar) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through the [`Write`] impl are collected into the current content
/// line; [`Formatter::writeln`] folds that line and terminates it with CRLF.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// The unfolded content line being built.
    line: Vec<u8>,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line: Vec::with_capacity(128),
        }
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    ///
    /// Any pending partial line is discarded; call [`Formatter::writeln`] first.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write an `ICalendar` to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_calendar(&mut self, calendar: &ICalendar) -> io::Result<()> {
        write_icalendar(self, calendar)
    }

    /// Terminate the current content line, folding it as configured.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn writeln(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.line);
        let result = self.write_folded(&line);
        self.line = line;
        self.line.clear();
        result
    }

    fn write_folded(&mut self, line: &[u8]) -> io::Result<()> {
        let Some(max_len) = self.options.folding else {
            self.writer.write_all(line)?;
            return self.writer.write_all(b"\r\n");
        };

        let mut start = 0;
        let mut limit = max_len;
        while line.len() - start > limit {
            let end = find_fold_position(line, start, start + limit);
            #[expect(clippy::indexing_slicing)]
            self.writer.write_all(&line[start..end])?;
            self.insert_fold()?;
            start = end;
            limit = max_len.saturating_sub(FoldingStyle::continuation_len()).max(1);
        }

        #[expect(clippy::indexing_slicing)]
        self.writer.write_all(&line[start..])?;
        self.writer.write_all(b"\r\n")
    }

    /// Insert line folding: CRLF + whitespace.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the last position in `start..=max` where a line may be folded.
///
/// A fold never lands inside a UTF-8 sequence nor between a backslash and the
/// character it escapes. Always makes progress, even if that overruns `max`.
fn find_fold_position(line: &[u8], start: usize, max: usize) -> usize {
    let escape_at = escape_continuations(line);
    let is_safe = |pos: usize| {
        let on_char = line.get(pos).is_none_or(|b| (b & 0xC0) != 0x80);
        let in_escape = escape_at.get(pos).copied().unwrap_or(false);
        on_char && !in_escape
    };

    let mut pos = max.min(line.len());
    while pos > start && !is_safe(pos) {
        pos -= 1;
    }
    if pos > start {
        return pos;
    }

    // Limit smaller than a single character: take one whole unit
    let mut pos = start + 1;
    while pos < line.len() && !is_safe(pos) {
        pos += 1;
    }
    pos
}

/// Marks the positions that immediately follow an escaping backslash.
fn escape_continuations(line: &[u8]) -> Vec<bool> {
    let mut marks = vec![false; line.len() + 1];
    let mut in_escape = false;
    for (i, &byte) in line.iter().enumerate() {
        if in_escape {
            in_escape = false;
        } else if byte == b'\\' {
            in_escape = true;
            if let Some(mark) = marks.get_mut(i + 1) {
                *mark = true;
            }
        }
    }
    marks
}
