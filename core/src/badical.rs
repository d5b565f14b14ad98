// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use jiff::{Timestamp, civil::Date};
use serde::Serialize;

use crate::badi::{BadiDate, GregorianInstant};
use crate::calculator::EventCalculator;
use crate::config::Config;
use crate::converter::DateConverter;
use crate::error::Error;
use crate::event::{FastPeriod, LocalizedEvent, LocalizedMonth, MonthStart, ResolvedEvent};
use crate::export::{ExportOptions, export_complete, export_ics, export_month_starts};
use crate::leap::OracleChain;
use crate::localization::{Language, Translations};
use crate::query::Query;

/// Badí calendar engine: every table is built once and shared by all clones.
#[derive(Debug, Clone)]
pub struct Badical {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    calculator: EventCalculator,
    translations: Translations,
}

impl Badical {
    /// Load translations, check them and precompute the Naw-Rúz table.
    ///
    /// # Errors
    /// Returns [`Error::Translation`] if a translation table cannot be loaded or lacks
    /// English text, and [`Error::UncoveredYear`] if the leap-year rule leaves a gap.
    #[tracing::instrument(skip_all)]
    pub async fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;

        let translations = match &config.translations_dir {
            Some(dir) => Translations::load_dir(dir).await?,
            None => Translations::embedded()?,
        };
        translations.verify()?;

        let oracle = OracleChain::from_kind(config.oracle);
        let converter = DateConverter::new(&oracle)?;
        let calculator = EventCalculator::new(converter);

        tracing::debug!(?config, "calendar engine ready");
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                calculator,
                translations,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn converter(&self) -> &DateConverter {
        self.inner.calculator.converter()
    }

    pub fn translations(&self) -> &Translations {
        &self.inner.translations
    }

    /// Build a query, using the configured default language when none is given.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for years outside 1844-2344.
    pub fn query(&self, year: i64, language: Option<&str>) -> Result<Query, Error> {
        match language {
            Some(code) => Query::parse(year, code),
            None => Query::new(year, self.inner.config.default_language),
        }
    }

    /// Holy days, commemorations, feasts, intercalary days and fast boundaries of a
    /// Gregorian year, in date order.
    ///
    /// # Errors
    /// Fails as a whole if any event cannot be computed or described.
    pub fn events(&self, query: &Query) -> Result<Vec<LocalizedEvent>, Error> {
        let events = self.inner.calculator.compute_events(query.year())?;
        self.localize_events(events, query.language())
    }

    /// Month starts of a Gregorian year, in date order.
    ///
    /// # Errors
    /// Fails as a whole if any month cannot be computed or described.
    pub fn months(&self, query: &Query) -> Result<Vec<LocalizedMonth>, Error> {
        let months = self.inner.calculator.compute_month_starts(query.year())?;
        self.localize_months(months, query.language())
    }

    /// Month starts of a Gregorian year together with the start of Ayyám-i-Há, in date
    /// order.
    ///
    /// # Errors
    /// Fails as a whole if any period cannot be computed or described.
    pub fn periods(&self, query: &Query) -> Result<Vec<LocalizedMonth>, Error> {
        let periods = self.inner.calculator.compute_period_starts(query.year())?;
        self.localize_months(periods, query.language())
    }

    /// The Fast observed in a Gregorian year.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] for 1844, whose March precedes the first Badí year.
    pub fn fast(&self, query: &Query) -> Result<FastPeriod, Error> {
        self.inner.calculator.compute_fast_period(query.year())
    }

    /// Events, month starts and the Fast of a Gregorian year.
    ///
    /// # Errors
    /// Fails as a whole if any part fails, except for a Fast that lies before the epoch.
    pub fn complete(&self, query: &Query) -> Result<Complete, Error> {
        let fast = match self.fast(query) {
            Ok(fast) => Some(fast),
            Err(Error::OutOfRange { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(Complete {
            year: query.year(),
            language: query.language(),
            events: self.events(query)?,
            months: self.months(query)?,
            fast,
        })
    }

    /// Everything that happens in one Badí year, described in a language.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] outside Badí years 1-500.
    pub fn badi_year(&self, badi_year: i32, language: Language) -> Result<LocalizedBadiYear, Error> {
        let year = self.inner.calculator.compute_badi_year(badi_year)?;
        Ok(LocalizedBadiYear {
            year: year.year,
            naw_ruz: year.naw_ruz,
            leap: year.leap,
            ayyam_i_ha_len: year.ayyam_i_ha_len,
            events: self.localize_events(year.events, language)?,
            months: self.localize_months(year.months, language)?,
        })
    }

    /// Render a calendar file of a Gregorian year.
    ///
    /// # Errors
    /// Fails as a whole if any entry cannot be computed or the file cannot be rendered.
    pub fn ics(&self, kind: IcsKind, query: &Query) -> Result<Vec<u8>, Error> {
        self.ics_at(kind, query, Timestamp::now())
    }

    /// Like [`Badical::ics`], stamping every entry with the given time.
    ///
    /// # Errors
    /// Fails as a whole if any entry cannot be computed or the file cannot be rendered.
    #[tracing::instrument(skip(self))]
    pub fn ics_at(&self, kind: IcsKind, query: &Query, dt_stamp: Timestamp) -> Result<Vec<u8>, Error> {
        let options = self.export_options(query.language(), dt_stamp);
        match kind {
            IcsKind::Events => export_ics(&self.events(query)?, &options),
            IcsKind::Months => export_month_starts(&self.periods(query)?, &options),
            IcsKind::Complete => {
                export_complete(&self.events(query)?, &self.months(query)?, &options)
            }
        }
    }

    /// The Badí date whose daylight falls on a Gregorian day.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] outside the supported dates.
    pub fn to_badi(&self, date: Date) -> Result<BadiDate, Error> {
        self.converter().gregorian_to_badi(date)
    }

    /// The Badí day in progress at an instant, changing at sunset in Tehran.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] outside the supported dates.
    pub fn to_badi_at(&self, instant: Timestamp) -> Result<BadiDate, Error> {
        self.converter().badi_date_at(instant)
    }

    /// The Gregorian day of a Badí date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBadiDate`] if the day does not exist in that year.
    pub fn to_gregorian(&self, date: BadiDate) -> Result<GregorianInstant, Error> {
        self.converter().badi_to_gregorian(date)
    }

    fn localize_events(
        &self,
        events: Vec<ResolvedEvent>,
        language: Language,
    ) -> Result<Vec<LocalizedEvent>, Error> {
        events
            .into_iter()
            .map(|event| {
                let text = self.inner.translations.resolve(event.id, language)?;
                Ok(LocalizedEvent {
                    event,
                    title: text.title.clone(),
                    description: text.description.clone(),
                    url: text.url.clone(),
                })
            })
            .collect()
    }

    fn localize_months(
        &self,
        months: Vec<MonthStart>,
        language: Language,
    ) -> Result<Vec<LocalizedMonth>, Error> {
        months
            .into_iter()
            .map(|start| {
                let text = self.inner.translations.month(start.month, language)?;
                Ok(LocalizedMonth {
                    start,
                    transliteration: start.month.transliteration(),
                    name: text.name.clone(),
                    description: text.description.clone(),
                })
            })
            .collect()
    }

    fn export_options(&self, language: Language, dt_stamp: Timestamp) -> ExportOptions {
        let config = &self.inner.config;
        let labels = self.inner.translations.labels(language).clone();
        ExportOptions {
            prod_id: config.prod_id(language),
            calendar_name: config
                .calendar_name
                .clone()
                .unwrap_or_else(|| labels.calendar_name.clone()),
            dt_stamp,
            labels,
        }
    }
}

/// Which entries a calendar file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[strum(serialize_all = "lowercase")]
pub enum IcsKind {
    /// Holy days, commemorations, feasts, intercalary days and fast boundaries
    Events,
    /// One entry per Nineteen Day Feast
    Months,
    /// Events and month starts without duplicate feasts
    Complete,
}

impl IcsKind {
    /// Suggested file name for the calendar of a Gregorian year.
    pub fn file_name(self, year: i16) -> String {
        match self {
            Self::Events => format!("bahai_events_{year}.ics"),
            Self::Months => format!("bahai_months_{year}.ics"),
            Self::Complete => format!("Bahai Calendar {year}-{}.ics", year + 1),
        }
    }
}

/// Events, month starts and the Fast of a Gregorian year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complete {
    pub year: i16,
    pub language: Language,
    pub events: Vec<LocalizedEvent>,
    pub months: Vec<LocalizedMonth>,
    /// Absent for 1844.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<FastPeriod>,
}

/// Everything that happens in one Badí year, described in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedBadiYear {
    pub year: i32,
    pub naw_ruz: Date,
    pub leap: bool,
    pub ayyam_i_ha_len: u8,
    pub events: Vec<LocalizedEvent>,
    pub months: Vec<LocalizedMonth>,
}
