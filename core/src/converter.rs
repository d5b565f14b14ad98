// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::RangeInclusive;
use std::sync::Arc;

use jiff::Timestamp;
use jiff::civil::{Date, date};

use crate::astro::{
    REFERENCE_UTC_OFFSET_HOURS, UNIX_EPOCH_JULIAN_DAY, from_julian_day, tehran_sunset,
};
use crate::badi::{BadiDate, BadiMonth, GregorianInstant, add_days, days_between};
use crate::error::Error;
use crate::leap::{GREGORIAN_YEAR_OFFSET, LeapYearOracle};

/// First Badí year the converter handles.
pub const MIN_BADI_YEAR: i32 = 1;

/// Last Badí year the converter handles.
pub const MAX_BADI_YEAR: i32 = 500;

/// Naw-Rúz of 1 B.E.
pub const EPOCH: Date = date(1844, 3, 21);

/// Days from Naw-Rúz to the first day of Ayyám-i-Há.
const DAYS_BEFORE_AYYAM_I_HA: i64 = 18 * 19;

/// Converts between Gregorian and Badí dates.
///
/// Naw-Rúz of every supported year is computed once at construction, so conversions are
/// table lookups. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct DateConverter {
    /// Naw-Rúz of year `i + 1`, plus the one following the last supported year.
    naw_ruz: Arc<[Date]>,
}

impl DateConverter {
    /// Build the Naw-Rúz table from the leap-year rule.
    ///
    /// # Errors
    /// Returns [`Error::UncoveredYear`] if the oracle cannot answer for a supported year.
    #[tracing::instrument(skip_all, fields(oracle = oracle.name()))]
    pub fn new(oracle: &dyn LeapYearOracle) -> Result<Self, Error> {
        let mut naw_ruz = Vec::with_capacity((MAX_BADI_YEAR + 1) as usize);
        let mut current = EPOCH;
        naw_ruz.push(current);
        for year in MIN_BADI_YEAR..=MAX_BADI_YEAR {
            let leap = oracle.is_leap(year).ok_or(Error::UncoveredYear {
                oracle: oracle.name(),
                year,
            })?;
            current = add_days(current, if leap { 366 } else { 365 }).ok_or(
                Error::OutOfRange {
                    what: "Badí year",
                    value: year.into(),
                    min: MIN_BADI_YEAR.into(),
                    max: MAX_BADI_YEAR.into(),
                },
            )?;
            naw_ruz.push(current);
        }

        tracing::debug!(last = %current, "Naw-Rúz table built");
        Ok(Self {
            naw_ruz: naw_ruz.into(),
        })
    }

    /// Gregorian years with at least one supported day.
    #[must_use]
    pub fn supported_gregorian_years(&self) -> RangeInclusive<i16> {
        EPOCH.year()..=self.last_supported_date().year()
    }

    /// Last Gregorian day of the last supported Badí year.
    #[must_use]
    pub fn last_supported_date(&self) -> Date {
        self.naw_ruz
            .last()
            .and_then(|d| d.yesterday().ok())
            .unwrap_or(EPOCH)
    }

    /// Naw-Rúz, the first day of the Badí year.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported years.
    pub fn naw_ruz(&self, badi_year: i32) -> Result<Date, Error> {
        Ok(self.naw_ruz[year_index(badi_year)?])
    }

    /// Whether the year has five days of Ayyám-i-Há.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported years.
    pub fn is_leap_year(&self, badi_year: i32) -> Result<bool, Error> {
        Ok(self.year_len(badi_year)? == 366)
    }

    /// Number of days in the Badí year.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported years.
    pub fn year_len(&self, badi_year: i32) -> Result<i64, Error> {
        let index = year_index(badi_year)?;
        Ok(days_between(self.naw_ruz[index], self.naw_ruz[index + 1]))
    }

    /// Number of days of Ayyám-i-Há, 4 or 5.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported years.
    pub fn ayyam_i_ha_len(&self, badi_year: i32) -> Result<u8, Error> {
        Ok(if self.is_leap_year(badi_year)? { 5 } else { 4 })
    }

    /// The Badí date of a Gregorian day: the Badí day that began at sunset on the eve.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for days outside the supported range.
    pub fn gregorian_to_badi(&self, date: Date) -> Result<BadiDate, Error> {
        let year = self.naw_ruz.partition_point(|naw_ruz| *naw_ruz <= date);
        if year == 0 || year == self.naw_ruz.len() {
            return Err(Error::InvalidInput(format!(
                "{date} is outside the supported range {EPOCH}..={}",
                self.last_supported_date()
            )));
        }

        let badi_year = i32::try_from(year).map_err(|e| Error::InvalidInput(e.to_string()))?;
        let offset = days_between(self.naw_ruz[year - 1], date);
        let ayyam_i_ha = i64::from(self.ayyam_i_ha_len(badi_year)?);

        let (month, day) = if offset < DAYS_BEFORE_AYYAM_I_HA {
            let month = u8::try_from(offset / 19 + 1).ok();
            (month.and_then(BadiMonth::from_number), offset % 19)
        } else if offset < DAYS_BEFORE_AYYAM_I_HA + ayyam_i_ha {
            (Some(BadiMonth::AyyamIHa), offset - DAYS_BEFORE_AYYAM_I_HA)
        } else {
            (Some(BadiMonth::Ala), offset - DAYS_BEFORE_AYYAM_I_HA - ayyam_i_ha)
        };

        let month = month.ok_or_else(|| Error::InvalidInput(format!("no Badí month for {date}")))?;
        let day = u8::try_from(day + 1).map_err(|e| Error::InvalidInput(e.to_string()))?;
        BadiDate::new(badi_year, month, day)
    }

    /// The Badí date in effect at an instant, with the day changing at sunset in Tehran.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for instants outside the supported range.
    pub fn badi_date_at(&self, instant: Timestamp) -> Result<BadiDate, Error> {
        #[allow(clippy::cast_precision_loss)]
        let jd = UNIX_EPOCH_JULIAN_DAY + instant.as_millisecond() as f64 / 86_400_000.0;
        let (local, hours) = from_julian_day(jd + REFERENCE_UTC_OFFSET_HOURS / 24.0)
            .ok_or_else(|| Error::InvalidInput(format!("{instant} is not representable")))?;

        let sunset = tehran_sunset(local) + REFERENCE_UTC_OFFSET_HOURS;
        let day = if hours >= sunset {
            add_days(local, 1)
                .ok_or_else(|| Error::InvalidInput(format!("{instant} is not representable")))?
        } else {
            local
        };
        tracing::trace!(%instant, %local, hours, sunset, "sunset boundary");
        self.gregorian_to_badi(day)
    }

    /// The public Gregorian day of a Badí date.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported years and
    /// [`Error::InvalidBadiDate`] for the fifth day of Ayyám-i-Há in a common year.
    pub fn badi_to_gregorian(&self, badi: BadiDate) -> Result<GregorianInstant, Error> {
        let naw_ruz = self.naw_ruz(badi.year())?;
        let ayyam_i_ha = self.ayyam_i_ha_len(badi.year())?;
        let day = i64::from(badi.day()) - 1;

        let offset = match badi.month() {
            BadiMonth::AyyamIHa if badi.day() > ayyam_i_ha => {
                return Err(Error::InvalidBadiDate {
                    year: badi.year(),
                    month: badi.month().number(),
                    day: badi.day(),
                    reason: "Ayyám-i-Há has only four days in this year",
                });
            }
            BadiMonth::AyyamIHa => DAYS_BEFORE_AYYAM_I_HA + day,
            BadiMonth::Ala => DAYS_BEFORE_AYYAM_I_HA + i64::from(ayyam_i_ha) + day,
            month => (i64::from(month.number()) - 1) * 19 + day,
        };

        add_days(naw_ruz, offset)
            .map(GregorianInstant::new)
            .ok_or(Error::OutOfRange {
                what: "Badí year",
                value: badi.year().into(),
                min: MIN_BADI_YEAR.into(),
                max: MAX_BADI_YEAR.into(),
            })
    }
}

/// Badí years overlapping a Gregorian year: the one ending in March and the one starting then.
#[must_use]
pub fn badi_years_of(gregorian_year: i16) -> [i32; 2] {
    let second = i32::from(gregorian_year) - GREGORIAN_YEAR_OFFSET;
    [second - 1, second]
}

fn year_index(badi_year: i32) -> Result<usize, Error> {
    if !(MIN_BADI_YEAR..=MAX_BADI_YEAR).contains(&badi_year) {
        return Err(Error::OutOfRange {
            what: "Badí year",
            value: badi_year.into(),
            min: MIN_BADI_YEAR.into(),
            max: MAX_BADI_YEAR.into(),
        });
    }
    usize::try_from(badi_year - MIN_BADI_YEAR).map_err(|e| Error::InvalidInput(e.to_string()))
}
