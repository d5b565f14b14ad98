// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// Errors raised by the calendar engine.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The day does not exist in that month of that Badí year
    #[error("invalid Badí date {year}-{month:02}-{day:02}: {reason}")]
    InvalidBadiDate {
        /// Badí year
        year: i32,
        /// Month number, `0` for Ayyám-i-Há
        month: u8,
        /// Day of the month
        day: u8,
        /// What is wrong with it
        reason: &'static str,
    },

    /// No translation exists for the event, not even in English
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    /// No translation exists for the month, not even in English
    #[error("unknown month {0}")]
    UnknownMonth(u8),

    /// Request parameters that cannot be interpreted
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A year or date outside the range the engine supports
    #[error("{what} {value} is outside the supported range {min}..={max}")]
    OutOfRange {
        /// What was out of range
        what: &'static str,
        /// The offending value
        value: i64,
        /// Smallest supported value
        min: i64,
        /// Largest supported value
        max: i64,
    },

    /// The leap-year rule has no answer for a year inside the supported range
    #[error("leap-year oracle '{oracle}' does not cover Badí year {year}")]
    UncoveredYear {
        /// Oracle that was asked
        oracle: &'static str,
        /// Badí year without an answer
        year: i32,
    },

    /// Translation tables could not be loaded or are incomplete
    #[error("translation table {}: {message}", path.display())]
    Translation {
        /// File (or embedded table name) at fault
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Rendering the calendar file failed
    #[error("failed to export calendar: {0}")]
    Export(#[from] io::Error),
}

impl Error {
    pub(crate) fn translation(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Translation {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
