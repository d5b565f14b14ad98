// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar components (RFC 5545 Section 3.6) for all-day feeds.

use crate::keyword::{KW_CALSCALE_GREGORIAN, KW_VERSION_2_0};
use crate::value::{ValueDate, ValueDateTime};

/// Top-level iCalendar object (`VCALENDAR`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// `PRODID`: identifier of the product that created the object
    pub prod_id: String,

    /// `VERSION`: always `2.0` for RFC 5545
    pub version: String,

    /// `CALSCALE`: calendar scale, `GREGORIAN` when present
    pub calscale: Option<String>,

    /// `METHOD`: iTIP method such as `PUBLISH`
    pub method: Option<String>,

    /// `X-WR-CALNAME`: display name understood by most calendar clients
    pub name: Option<String>,

    /// Events in document order
    pub events: Vec<VEvent>,

    /// Unrecognized properties (preserved for round-trip)
    pub retained_properties: Vec<UnrecognizedProperty>,
}

impl ICalendar {
    /// Create an empty Gregorian calendar with the given product identifier.
    #[must_use]
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            version: KW_VERSION_2_0.to_string(),
            calscale: Some(KW_CALSCALE_GREGORIAN.to_string()),
            method: None,
            name: None,
            events: Vec::new(),
            retained_properties: Vec::new(),
        }
    }
}

/// Event component (`VEVENT`) carrying an all-day date span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier for the event
    pub uid: String,

    /// Date/time the object was created
    pub dt_stamp: ValueDateTime,

    /// First day of the event (`VALUE=DATE`)
    pub dt_start: ValueDate,

    /// Exclusive end day (`VALUE=DATE`)
    pub dt_end: Option<ValueDate>,

    /// Summary/title of the event
    pub summary: Option<String>,

    /// Description of the event
    pub description: Option<String>,

    /// URL associated with the event
    pub url: Option<String>,

    /// Categories
    pub categories: Vec<String>,

    /// Time transparency
    pub transparency: Option<TimeTransparency>,

    /// Unrecognized properties (preserved for round-trip)
    pub retained_properties: Vec<UnrecognizedProperty>,
}

impl VEvent {
    /// Create an event with only the required properties set.
    #[must_use]
    pub fn new(uid: impl Into<String>, dt_stamp: ValueDateTime, dt_start: ValueDate) -> Self {
        Self {
            uid: uid.into(),
            dt_stamp,
            dt_start,
            dt_end: None,
            summary: None,
            description: None,
            url: None,
            categories: Vec::new(),
            transparency: None,
            retained_properties: Vec::new(),
        }
    }
}

/// Time transparency (RFC 5545 Section 3.8.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TimeTransparency {
    /// Blocks or opaque on busy time searches
    Opaque,

    /// Transparent on busy time searches
    Transparent,
}

/// A property this crate does not model, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedProperty {
    /// Property name in upper case
    pub name: String,

    /// Raw parameter text between the name and the colon, without the leading `;`
    pub params: Option<String>,

    /// Raw value text, unfolded but still escaped
    pub value: String,
}
