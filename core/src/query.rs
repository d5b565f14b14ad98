// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calculator::{MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR};
use crate::error::Error;
use crate::localization::Language;

/// A validated request for one Gregorian year in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    year: i16,
    language: Language,
}

impl Query {
    /// Validate the year before any computation takes place.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for years outside 1844-2344.
    pub fn new(year: i64, language: Language) -> Result<Self, Error> {
        let out_of_range = || {
            Error::InvalidInput(format!(
                "year {year} is outside the supported range {MIN_GREGORIAN_YEAR}-{MAX_GREGORIAN_YEAR}"
            ))
        };

        let year = i16::try_from(year).map_err(|_| out_of_range())?;
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(out_of_range());
        }
        Ok(Self { year, language })
    }

    /// Like [`Query::new`], with the language given as a code and unknown codes read as
    /// English.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for years outside 1844-2344.
    pub fn parse(year: i64, language: &str) -> Result<Self, Error> {
        Self::new(year, Language::from_code_lossy(language))
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
