// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, date};
use serde::Serialize;

use crate::badi::{BadiDate, BadiMonth, GregorianInstant};
use crate::converter::{DateConverter, MAX_BADI_YEAR, MIN_BADI_YEAR, badi_years_of};
use crate::error::Error;
use crate::event::{
    DEFINITIONS, EventDefinition, EventRule, FastPeriod, MonthStart, ResolvedEvent, TwinDay,
};
use crate::leap::FIRST_ASTRONOMICAL_YEAR;
use crate::lunar::twin_holy_days;

/// First Gregorian year with Badí dates.
pub const MIN_GREGORIAN_YEAR: i16 = 1844;

/// Last Gregorian year with Badí dates.
pub const MAX_GREGORIAN_YEAR: i16 = 2344;

/// Places the recurring events of the Badí calendar on Gregorian days.
#[derive(Debug, Clone)]
pub struct EventCalculator {
    converter: DateConverter,
}

/// Everything that happens in one Badí year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadiYear {
    pub year: i32,
    pub naw_ruz: Date,
    pub leap: bool,
    pub ayyam_i_ha_len: u8,
    /// Events in date order.
    pub events: Vec<ResolvedEvent>,
    /// Month starts in date order, including the first day of Ayyám-i-Há.
    pub months: Vec<MonthStart>,
}

impl EventCalculator {
    pub fn new(converter: DateConverter) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &DateConverter {
        &self.converter
    }

    /// Events falling in the Gregorian year, sorted by date then id.
    ///
    /// Both Badí years overlapping the Gregorian year are resolved; events outside
    /// 1 January to 31 December are dropped, as are Badí years before the epoch.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] for years outside 1844-2344.
    #[tracing::instrument(skip(self))]
    pub fn compute_events(&self, gregorian_year: i16) -> Result<Vec<ResolvedEvent>, Error> {
        let (first, last) = year_bounds(gregorian_year)?;

        let mut events = Vec::new();
        for badi_year in supported(badi_years_of(gregorian_year)) {
            events.extend(
                self.resolve_year(badi_year)?
                    .into_iter()
                    .filter(|e| (first..=last).contains(&e.instant.date())),
            );
        }
        events.sort_by(ResolvedEvent::chronological);

        tracing::debug!(count = events.len(), "events computed");
        Ok(events)
    }

    /// The month starts falling in the Gregorian year, in date order.
    ///
    /// There are 19 of them, except when Naw-Rúz falls on 22 March: Sharaf then starts
    /// on 1 January of the next year, so one year holds 18 starts and the next 20.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] for years outside 1844-2344.
    #[tracing::instrument(skip(self))]
    pub fn compute_month_starts(&self, gregorian_year: i16) -> Result<Vec<MonthStart>, Error> {
        self.starts_in_year(gregorian_year, BadiMonth::named().collect())
    }

    /// Month starts as in [`Self::compute_month_starts`], together with the first day of
    /// Ayyám-i-Há.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] for years outside 1844-2344.
    #[tracing::instrument(skip(self))]
    pub fn compute_period_starts(&self, gregorian_year: i16) -> Result<Vec<MonthStart>, Error> {
        let periods = BadiMonth::named().chain([BadiMonth::AyyamIHa]).collect();
        self.starts_in_year(gregorian_year, periods)
    }

    /// The Fast observed in the Gregorian year: the month of ʻAláʼ that ends at the
    /// following Naw-Rúz.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if that month lies outside the supported years, as it
    /// does for 1844.
    pub fn compute_fast_period(&self, gregorian_year: i16) -> Result<FastPeriod, Error> {
        year_bounds(gregorian_year)?;
        let [badi_year, _] = badi_years_of(gregorian_year);
        if badi_year < MIN_BADI_YEAR {
            return Err(Error::OutOfRange {
                what: "Badí year",
                value: badi_year.into(),
                min: MIN_BADI_YEAR.into(),
                max: MAX_BADI_YEAR.into(),
            });
        }

        let start = self.instant(BadiDate::new(badi_year, BadiMonth::Ala, 1)?)?;
        let end = self.instant(BadiDate::new(badi_year, BadiMonth::Ala, 19)?)?;
        Ok(FastPeriod {
            badi_year,
            start,
            end,
        })
    }

    /// Every event and month start of one Badí year.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside the supported Badí years.
    #[tracing::instrument(skip(self))]
    pub fn compute_badi_year(&self, badi_year: i32) -> Result<BadiYear, Error> {
        let naw_ruz = self.converter.naw_ruz(badi_year)?;
        let leap = self.converter.is_leap_year(badi_year)?;
        let ayyam_i_ha_len = self.converter.ayyam_i_ha_len(badi_year)?;

        let mut events = self.resolve_year(badi_year)?;
        events.sort_by(ResolvedEvent::chronological);

        let mut months = Vec::with_capacity(20);
        for month in BadiMonth::named().chain([BadiMonth::AyyamIHa]) {
            months.push(self.month_start(badi_year, month)?);
        }
        months.sort_by_key(|m| m.instant);

        Ok(BadiYear {
            year: badi_year,
            naw_ruz,
            leap,
            ayyam_i_ha_len,
            events,
            months,
        })
    }

    /// Resolve every definition against one Badí year.
    fn resolve_year(&self, badi_year: i32) -> Result<Vec<ResolvedEvent>, Error> {
        let ayyam_i_ha_len = self.converter.ayyam_i_ha_len(badi_year)?;
        let mut twin_days = None;

        let mut events = Vec::with_capacity(DEFINITIONS.len());
        for definition in &DEFINITIONS {
            let badi = match definition.rule {
                EventRule::Fixed {
                    month: BadiMonth::AyyamIHa,
                    day,
                } if day > ayyam_i_ha_len => continue,

                EventRule::Fixed { month, day } => BadiDate::new(badi_year, month, day)?,
                EventRule::Revised { legacy, current } => {
                    let (month, day) = if badi_year < FIRST_ASTRONOMICAL_YEAR {
                        legacy
                    } else {
                        current
                    };
                    BadiDate::new(badi_year, month, day)?
                }
                EventRule::MonthStart(month) => BadiDate::new(badi_year, month, 1)?,
                EventRule::TwinHolyDay(which) => {
                    let [first, second] = match twin_days {
                        Some(days) => days,
                        None => *twin_days.insert(twin_holy_days(&self.converter, badi_year)?),
                    };
                    let day = match which {
                        TwinDay::First => first,
                        TwinDay::Second => second,
                    };
                    let badi = self.converter.gregorian_to_badi(day)?;
                    events.push(resolved(definition, badi, day));
                    continue;
                }
            };

            let instant = self.instant(badi)?;
            events.push(resolved(definition, badi, instant.date()));
        }
        Ok(events)
    }

    fn starts_in_year(
        &self,
        gregorian_year: i16,
        months: Vec<BadiMonth>,
    ) -> Result<Vec<MonthStart>, Error> {
        let (first, last) = year_bounds(gregorian_year)?;

        let mut starts = Vec::with_capacity(months.len());
        for badi_year in supported(badi_years_of(gregorian_year)) {
            for &month in &months {
                let start = self.month_start(badi_year, month)?;
                if (first..=last).contains(&start.instant.date()) {
                    starts.push(start);
                }
            }
        }
        starts.sort_by_key(|m| m.instant);
        Ok(starts)
    }

    fn month_start(&self, badi_year: i32, month: BadiMonth) -> Result<MonthStart, Error> {
        let instant = self.instant(BadiDate::new(badi_year, month, 1)?)?;
        Ok(MonthStart {
            month,
            badi_year,
            instant,
        })
    }

    fn instant(&self, badi: BadiDate) -> Result<GregorianInstant, Error> {
        self.converter.badi_to_gregorian(badi)
    }
}

fn year_bounds(gregorian_year: i16) -> Result<(Date, Date), Error> {
    if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&gregorian_year) {
        return Err(Error::OutOfRange {
            what: "Gregorian year",
            value: gregorian_year.into(),
            min: MIN_GREGORIAN_YEAR.into(),
            max: MAX_GREGORIAN_YEAR.into(),
        });
    }
    Ok((date(gregorian_year, 1, 1), date(gregorian_year, 12, 31)))
}

fn resolved(definition: &EventDefinition, badi: BadiDate, day: Date) -> ResolvedEvent {
    ResolvedEvent {
        id: definition.id,
        category: definition.category,
        badi,
        instant: GregorianInstant::new(day),
    }
}

fn supported(badi_years: [i32; 2]) -> impl Iterator<Item = i32> {
    badi_years
        .into_iter()
        .filter(|y| (MIN_BADI_YEAR..=MAX_BADI_YEAR).contains(y))
}
