// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The Twin Holy Days: Birth of the Báb and Birth of Bahá'u'lláh.
//!
//! Until 171 B.E. they were kept on fixed dates, 20 October and 12 November. From 172 B.E.
//! they fall on the first and second days following the eighth new moon after Naw-Rúz.

use jiff::civil::Date;

use crate::astro::{from_julian_day, julian_day, lunation_before, new_moon, tehran_sunset};
use crate::badi::{BadiDate, BadiMonth, add_days};
use crate::converter::DateConverter;
use crate::error::Error;
use crate::leap::FIRST_ASTRONOMICAL_YEAR;

/// Ordinal of the new moon after Naw-Rúz that precedes the Twin Holy Days.
const NEW_MOON_ORDINAL: usize = 8;

/// Gregorian days of the Birth of the Báb and the Birth of Bahá'u'lláh in the Badí year.
///
/// # Errors
/// Returns [`Error::OutOfRange`] outside the years the converter supports.
pub fn twin_holy_days(converter: &DateConverter, badi_year: i32) -> Result<[Date; 2], Error> {
    if badi_year < FIRST_ASTRONOMICAL_YEAR {
        let first = BadiDate::new(badi_year, BadiMonth::Ilm, 5)?;
        let second = BadiDate::new(badi_year, BadiMonth::Qudrat, 9)?;
        return Ok([
            converter.badi_to_gregorian(first)?.date(),
            converter.badi_to_gregorian(second)?.date(),
        ]);
    }

    let naw_ruz = converter.naw_ruz(badi_year)?;
    let unrepresentable = || Error::InvalidInput(format!("no lunar dates for {badi_year} B.E."));

    let eve = naw_ruz.yesterday().map_err(|_| unrepresentable())?;
    let year_start = julian_day(eve) + tehran_sunset(eve) / 24.0;

    let mut k = lunation_before(year_start);
    let mut seen = 0;
    let conjunction = loop {
        let t = new_moon(k);
        if t > year_start {
            seen += 1;
            if seen == NEW_MOON_ORDINAL {
                break t;
            }
        }
        k += 1.0;
    };

    // The Badí day holding the conjunction: it ends at sunset of its Gregorian date.
    let (date, hours) = from_julian_day(conjunction).ok_or_else(unrepresentable)?;
    let sunset = tehran_sunset(date);
    let new_moon_day = if hours >= sunset {
        add_days(date, 1).ok_or_else(unrepresentable)?
    } else {
        date
    };
    tracing::debug!(badi_year, %new_moon_day, hours, sunset, "eighth new moon");

    let first = add_days(new_moon_day, 1).ok_or_else(unrepresentable)?;
    let second = add_days(new_moon_day, 2).ok_or_else(unrepresentable)?;
    Ok([first, second])
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::leap::OracleChain;

    fn converter() -> DateConverter {
        DateConverter::new(&OracleChain::default()).unwrap()
    }

    #[test]
    fn fixed_dates_before_172() {
        let c = converter();
        assert_eq!(
            twin_holy_days(&c, 171).unwrap(),
            [date(2014, 10, 20), date(2014, 11, 12)]
        );
        assert_eq!(
            twin_holy_days(&c, 1).unwrap(),
            [date(1844, 10, 20), date(1844, 11, 12)]
        );
    }

    #[test]
    fn lunar_dates_from_172() {
        let c = converter();
        let cases = [
            (172, date(2015, 11, 13)),
            (173, date(2016, 11, 1)),
            (174, date(2017, 10, 21)),
            (176, date(2019, 10, 29)),
            (178, date(2021, 11, 6)),
            (181, date(2024, 11, 2)),
            (182, date(2025, 10, 22)),
            (183, date(2026, 11, 10)),
        ];
        for (year, birth_of_the_bab) in cases {
            let [first, second] = twin_holy_days(&c, year).unwrap();
            assert_eq!(first, birth_of_the_bab, "Birth of the Báb in {year} B.E.");
            assert_eq!(second, birth_of_the_bab.tomorrow().unwrap());
        }
    }

    #[test]
    fn twin_days_stay_in_autumn() {
        let c = converter();
        for year in 172..=400 {
            let [first, _] = twin_holy_days(&c, year).unwrap();
            assert!(
                (date(first.year(), 10, 12)..=date(first.year(), 11, 14)).contains(&first),
                "{year} B.E.: {first}"
            );
        }
    }
}
