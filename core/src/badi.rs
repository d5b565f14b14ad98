// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::Span;
use jiff::civil::Date;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Months of the Badí year in calendar order.
///
/// Ayyám-i-Há is not a month but the intercalary days between Mulk and ʻAláʼ; it is
/// placed here so that a [`BadiDate`] can address every day of the year. Its
/// conventional month number is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum BadiMonth {
    /// Splendour
    Baha,
    /// Glory
    Jalal,
    /// Beauty
    Jamal,
    /// Grandeur
    Azamat,
    /// Light
    Nur,
    /// Mercy
    Rahmat,
    /// Words
    Kalimat,
    /// Perfection
    Kamal,
    /// Names
    Asma,
    /// Might
    Izzat,
    /// Will
    Mashiyyat,
    /// Knowledge
    Ilm,
    /// Power
    Qudrat,
    /// Speech
    Qawl,
    /// Questions
    Masail,
    /// Honour
    Sharaf,
    /// Sovereignty
    Sultan,
    /// Dominion
    Mulk,
    /// Intercalary days
    AyyamIHa,
    /// Loftiness, the month of fasting
    Ala,
}

impl BadiMonth {
    /// Month number: 1-19 for named months, `0` for Ayyám-i-Há.
    #[must_use]
    pub const fn number(self) -> u8 {
        use BadiMonth::*;
        match self {
            Baha => 1,
            Jalal => 2,
            Jamal => 3,
            Azamat => 4,
            Nur => 5,
            Rahmat => 6,
            Kalimat => 7,
            Kamal => 8,
            Asma => 9,
            Izzat => 10,
            Mashiyyat => 11,
            Ilm => 12,
            Qudrat => 13,
            Qawl => 14,
            Masail => 15,
            Sharaf => 16,
            Sultan => 17,
            Mulk => 18,
            AyyamIHa => 0,
            Ala => 19,
        }
    }

    /// Inverse of [`BadiMonth::number`].
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|m| m.number() == number)
    }

    /// Transliterated Arabic name.
    #[must_use]
    pub const fn transliteration(self) -> &'static str {
        use BadiMonth::*;
        match self {
            Baha => "Bahá",
            Jalal => "Jalál",
            Jamal => "Jamál",
            Azamat => "ʻAẓamat",
            Nur => "Núr",
            Rahmat => "Raḥmat",
            Kalimat => "Kalimát",
            Kamal => "Kamál",
            Asma => "Asmáʼ",
            Izzat => "ʻIzzat",
            Mashiyyat => "Mashíyyat",
            Ilm => "ʻIlm",
            Qudrat => "Qudrat",
            Qawl => "Qawl",
            Masail => "Masáʼil",
            Sharaf => "Sharaf",
            Sultan => "Sulṭán",
            Mulk => "Mulk",
            AyyamIHa => "Ayyám-i-Há",
            Ala => "ʻAláʼ",
        }
    }

    /// The 19 named months in calendar order, without Ayyám-i-Há.
    pub fn named() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter().filter(|m| *m != Self::AyyamIHa)
    }

    /// Days in the month given the length of Ayyám-i-Há in that year.
    #[must_use]
    pub const fn len(self, ayyam_i_ha_len: u8) -> u8 {
        match self {
            Self::AyyamIHa => ayyam_i_ha_len,
            _ => 19,
        }
    }
}

impl fmt::Display for BadiMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.transliteration())
    }
}

impl Serialize for BadiMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// A day of the Badí calendar. Year 1 began at sunset on 20 March 1844.
///
/// Fields are ordered so that the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BadiDate {
    year: i32,
    month: BadiMonth,
    day: u8,
}

impl BadiDate {
    /// Structural validation only: day 1-19, or 1-5 in Ayyám-i-Há.
    ///
    /// Whether Ayyám-i-Há day 5 exists in a given year is checked by the converter.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBadiDate`] if the year is before 1 or the day is out of range.
    pub fn new(year: i32, month: BadiMonth, day: u8) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidBadiDate {
            year,
            month: month.number(),
            day,
            reason,
        };

        if year < 1 {
            return Err(invalid("years start at 1"));
        }
        if day == 0 || day > month.len(5) {
            return Err(invalid("day out of range for the month"));
        }
        Ok(Self { year, month, day })
    }

    /// Badí year
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, or Ayyám-i-Há
    #[must_use]
    pub const fn month(&self) -> BadiMonth {
        self.month
    }

    /// Day of the month, starting at 1
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for BadiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl FromStr for BadiDate {
    type Err = Error;

    /// Parse `YEAR-MONTH-DAY`, with month `0` for Ayyám-i-Há.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInput(format!("'{s}' is not a Badí date (YEAR-MONTH-DAY)"));

        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        let month = BadiMonth::from_number(month).ok_or_else(invalid)?;
        Self::new(year, month, day)
    }
}

/// The Gregorian day that carries a Badí day in public calendars.
///
/// The Badí day itself begins at sunset of the previous Gregorian day, the *eve*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GregorianInstant {
    date: Date,
}

impl GregorianInstant {
    /// Wrap a Gregorian date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }

    /// The Gregorian date
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// The Gregorian date on whose sunset this Badí day begins.
    #[must_use]
    pub fn eve(&self) -> Date {
        self.date.yesterday().unwrap_or(self.date)
    }
}

impl From<Date> for GregorianInstant {
    fn from(date: Date) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for GregorianInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.date.fmt(f)
    }
}

pub(crate) fn add_days(date: Date, days: i64) -> Option<Date> {
    let span = Span::new().try_days(days).ok()?;
    date.checked_add(span).ok()
}

pub(crate) fn days_between(from: Date, to: Date) -> i64 {
    i64::from((to - from).get_days())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn month_numbers_round_trip() {
        for n in 0..=19 {
            let month = BadiMonth::from_number(n).unwrap();
            assert_eq!(month.number(), n);
        }
        assert_eq!(BadiMonth::from_number(20), None);
    }

    #[test]
    fn named_months_skip_ayyam_i_ha() {
        let named: Vec<_> = BadiMonth::named().collect();
        assert_eq!(named.len(), 19);
        assert_eq!(named.first(), Some(&BadiMonth::Baha));
        assert_eq!(named.last(), Some(&BadiMonth::Ala));
        assert!(!named.contains(&BadiMonth::AyyamIHa));
    }

    #[test]
    fn ayyam_i_ha_sits_between_mulk_and_ala() {
        assert!(BadiMonth::Mulk < BadiMonth::AyyamIHa);
        assert!(BadiMonth::AyyamIHa < BadiMonth::Ala);
    }

    #[test]
    fn validates_structure() {
        assert!(BadiDate::new(181, BadiMonth::Baha, 19).is_ok());
        assert!(BadiDate::new(181, BadiMonth::AyyamIHa, 5).is_ok());
        assert!(BadiDate::new(181, BadiMonth::Baha, 0).is_err());
        assert!(BadiDate::new(181, BadiMonth::Baha, 20).is_err());
        assert!(BadiDate::new(181, BadiMonth::AyyamIHa, 6).is_err());
        assert!(BadiDate::new(0, BadiMonth::Baha, 1).is_err());
    }

    #[test]
    fn displays_and_parses() {
        let date = BadiDate::new(181, BadiMonth::AyyamIHa, 3).unwrap();
        assert_eq!(date.to_string(), "181-00-03");
        assert_eq!("181-00-03".parse::<BadiDate>().unwrap(), date);
        assert_eq!(
            "181-1-1".parse::<BadiDate>().unwrap(),
            BadiDate::new(181, BadiMonth::Baha, 1).unwrap()
        );
        assert!("181-20-1".parse::<BadiDate>().is_err());
        assert!("181-01".parse::<BadiDate>().is_err());
        assert!("x-01-01".parse::<BadiDate>().is_err());
    }

    #[test]
    fn chronological_ordering() {
        let a = BadiDate::new(181, BadiMonth::Mulk, 19).unwrap();
        let b = BadiDate::new(181, BadiMonth::AyyamIHa, 1).unwrap();
        let c = BadiDate::new(181, BadiMonth::Ala, 1).unwrap();
        let d = BadiDate::new(182, BadiMonth::Baha, 1).unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn instant_eve_is_previous_day() {
        let instant = GregorianInstant::new(date(2024, 3, 1));
        assert_eq!(instant.eve(), date(2024, 2, 29));
        assert_eq!(instant.to_string(), "2024-03-01");
    }

    #[test]
    fn day_arithmetic() {
        assert_eq!(add_days(date(2024, 2, 28), 2), Some(date(2024, 3, 1)));
        assert_eq!(days_between(date(1844, 3, 21), date(1845, 3, 21)), 365);
    }
}
