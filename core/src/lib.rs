// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Badí calendar engine: conversion between the Gregorian and Badí calendars, holy days,
//! Nineteen Day Feasts and iCalendar export.

mod astro;
mod badi;
mod badical;
mod calculator;
mod config;
mod converter;
mod error;
mod event;
mod export;
mod leap;
mod localization;
mod lunar;
mod query;

pub use crate::badi::{BadiDate, BadiMonth, GregorianInstant};
pub use crate::badical::{Badical, Complete, IcsKind, LocalizedBadiYear};
pub use crate::calculator::{BadiYear, EventCalculator, MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR};
pub use crate::config::{APP_NAME, Config};
pub use crate::converter::{DateConverter, EPOCH, MAX_BADI_YEAR, MIN_BADI_YEAR, badi_years_of};
pub use crate::error::Error;
pub use crate::event::{
    Category, DEFINITIONS, EventDefinition, EventId, EventRule, FastPeriod, LocalizedEvent,
    LocalizedMonth, MonthStart, ResolvedEvent, TwinDay, definition,
};
pub use crate::export::{ExportOptions, export_complete, export_ics, export_month_starts};
pub use crate::leap::{
    EquinoxOracle, FIRST_ASTRONOMICAL_YEAR, LeapYearOracle, OracleChain, OracleKind,
    PublishedTable,
};
pub use crate::localization::{
    EventText, Labels, Language, MonthText, TranslationTable, Translations,
};
pub use crate::lunar::twin_holy_days;
pub use crate::query::Query;
