// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Leap-year rules of the Badí calendar.
//!
//! A Badí year is leap when Ayyám-i-Há has five days instead of four, which happens when
//! 366 days separate its Naw-Rúz from the next one. Two sources answer that question:
//!
//! - [`PublishedTable`]: the rule in force until 171 B.E. (Naw-Rúz fixed on 21 March) and
//!   the Naw-Rúz dates for 172-221 B.E. (2015-2064) published by the Universal House of
//!   Justice in its letter of 10 July 2014.
//! - [`EquinoxOracle`]: the astronomical definition adopted from 172 B.E.: Naw-Rúz is the
//!   day, counted from sunset in Tehran, on which the March equinox occurs.
//!
//! [`OracleChain`] asks its members in turn and returns the first answer.

use std::fmt;
use std::sync::Arc;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::astro::{REFERENCE_SUNSET_UTC_HOURS, from_julian_day, march_equinox};
use crate::badi::{add_days, days_between};

/// First Badí year of the astronomical calendar (2015 CE).
pub const FIRST_ASTRONOMICAL_YEAR: i32 = 172;

/// Badí year of 1844 CE.
pub const GREGORIAN_YEAR_OFFSET: i32 = 1843;

/// Day of March of Naw-Rúz for 172-221 B.E.
const PUBLISHED_NAW_RUZ: [i8; 50] = [
    21, 20, 20, 21, 21, 20, 20, 21, 21, 20, // 172-181
    20, 21, 21, 20, 20, 20, 21, 20, 20, 20, // 182-191
    21, 20, 20, 20, 21, 20, 20, 20, 21, 20, // 192-201
    20, 20, 21, 20, 20, 20, 21, 20, 20, 20, // 202-211
    21, 20, 20, 20, 20, 20, 20, 20, 20, 20, // 212-221
];

/// Answers whether a Badí year has five intercalary days.
pub trait LeapYearOracle: fmt::Debug + Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the year is leap, or `None` if this oracle does not cover it.
    fn is_leap(&self, badi_year: i32) -> Option<bool>;
}

/// Leap years from the pre-2015 rule and the published Naw-Rúz dates for 172-221 B.E.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishedTable;

impl PublishedTable {
    /// Last Badí year whose length is fixed by the table.
    pub const LAST_YEAR: i32 = FIRST_ASTRONOMICAL_YEAR + PUBLISHED_NAW_RUZ.len() as i32 - 2;

    /// Published Naw-Rúz date, for 172-221 B.E.
    #[must_use]
    pub fn naw_ruz(badi_year: i32) -> Option<Date> {
        let index = usize::try_from(badi_year - FIRST_ASTRONOMICAL_YEAR).ok()?;
        let day = *PUBLISHED_NAW_RUZ.get(index)?;
        let year = i16::try_from(badi_year + GREGORIAN_YEAR_OFFSET).ok()?;
        Date::new(year, 3, day).ok()
    }
}

impl LeapYearOracle for PublishedTable {
    fn name(&self) -> &'static str {
        "published"
    }

    fn is_leap(&self, badi_year: i32) -> Option<bool> {
        match badi_year {
            // Naw-Rúz on 21 March every year; the year spans February of the next
            // Gregorian year.
            1..FIRST_ASTRONOMICAL_YEAR => {
                let year = i16::try_from(badi_year + GREGORIAN_YEAR_OFFSET + 1).ok()?;
                Some(Date::new(year, 1, 1).ok()?.in_leap_year())
            }
            FIRST_ASTRONOMICAL_YEAR..=Self::LAST_YEAR => {
                let this = Self::naw_ruz(badi_year)?;
                let next = Self::naw_ruz(badi_year + 1)?;
                Some(days_between(this, next) == 366)
            }
            _ => None,
        }
    }
}

/// Leap years derived from the computed March equinox, from 172 B.E. onward.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquinoxOracle;

impl EquinoxOracle {
    /// Naw-Rúz of the Badí year: the Gregorian day after the equinox if it falls at or after
    /// the reference sunset, the day of the equinox otherwise.
    #[must_use]
    pub fn naw_ruz(badi_year: i32) -> Option<Date> {
        let equinox = march_equinox(badi_year + GREGORIAN_YEAR_OFFSET);
        let (date, hours) = from_julian_day(equinox)?;
        if hours < REFERENCE_SUNSET_UTC_HOURS {
            Some(date)
        } else {
            add_days(date, 1)
        }
    }
}

impl LeapYearOracle for EquinoxOracle {
    fn name(&self) -> &'static str {
        "equinox"
    }

    fn is_leap(&self, badi_year: i32) -> Option<bool> {
        if badi_year < FIRST_ASTRONOMICAL_YEAR {
            return None;
        }
        let this = Self::naw_ruz(badi_year)?;
        let next = Self::naw_ruz(badi_year + 1)?;
        Some(days_between(this, next) == 366)
    }
}

/// Oracles consulted in order; the first one covering a year answers.
#[derive(Debug, Clone)]
pub struct OracleChain {
    oracles: Vec<Arc<dyn LeapYearOracle>>,
}

impl OracleChain {
    /// Chain the oracles, highest priority first.
    #[must_use]
    pub fn new(oracles: Vec<Arc<dyn LeapYearOracle>>) -> Self {
        Self { oracles }
    }

    /// The chain selected by configuration.
    #[must_use]
    pub fn from_kind(kind: OracleKind) -> Self {
        let published: Arc<dyn LeapYearOracle> = Arc::new(PublishedTable);
        let equinox: Arc<dyn LeapYearOracle> = Arc::new(EquinoxOracle);
        match kind {
            OracleKind::Published => Self::new(vec![published, equinox]),
            OracleKind::Astronomical => Self::new(vec![equinox, published]),
        }
    }
}

impl Default for OracleChain {
    fn default() -> Self {
        Self::from_kind(OracleKind::default())
    }
}

impl LeapYearOracle for OracleChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn is_leap(&self, badi_year: i32) -> Option<bool> {
        self.oracles.iter().find_map(|oracle| {
            let answer = oracle.is_leap(badi_year);
            if answer.is_some() {
                tracing::trace!(oracle = oracle.name(), badi_year, ?answer, "leap year");
            }
            answer
        })
    }
}

/// Which leap-year source takes precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OracleKind {
    /// Published dates where available, the computed equinox beyond them.
    #[default]
    Published,

    /// The computed equinox for every year from 172 B.E., published rule before.
    Astronomical,
}
