// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Low-precision astronomy for the Badí calendar.
//!
//! Everything here is pinned to one reference location, Tehran, and to the accuracy needed
//! to decide which sunset-to-sunset day an event falls in. Algorithms follow Jean Meeus,
//! *Astronomical Algorithms* (2nd ed.): chapter 7 for Julian days, chapter 27 for the
//! March equinox and chapter 49 for new moons. ΔT follows the piecewise polynomials used
//! by Reingold and Dershowitz in *Calendrical Calculations*.
//!
//! Results are approximations. They reproduce the Naw-Rúz dates published for
//! 172-221 B.E. but are not guaranteed to agree with future official announcements when an
//! equinox falls within minutes of sunset.

use jiff::civil::Date;

/// Julian day of the Unix epoch, 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

/// Sunset in Tehran used to place the March equinox, in hours after 00:00 UTC.
///
/// 14:45 UTC is 18:15 Tehran standard time.
pub const REFERENCE_SUNSET_UTC_HOURS: f64 = 14.75;

/// Offset of Tehran standard time from UTC, in hours.
pub const REFERENCE_UTC_OFFSET_HOURS: f64 = 3.5;

const TEHRAN_LATITUDE: f64 = 35.6892;
const TEHRAN_LONGITUDE: f64 = 51.389;
const SUNSET_ALTITUDE: f64 = -0.833;

/// Periodic terms for the March equinox, (A, B, C) in Meeus table 27.C.
const EQUINOX_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136),
    (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445_267.112),
    (156.0, 73.14, 45036.886),
    (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934),
    (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562),
    (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452),
    (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921),
    (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114),
    (8.0, 15.45, 16859.074),
];

/// Planetary arguments for new moons, (phase, rate, amplitude) in Meeus chapter 49.
const NEW_MOON_PLANETARY: [(f64, f64, f64); 13] = [
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Julian ephemeris day of the new moon with lunation number 0 (2000-01-06).
const NEW_MOON_EPOCH: f64 = 2_451_550.097_66;

/// Julian day at the given Gregorian date; the fractional part of `day` is the time of day.
#[must_use]
pub fn julian_day_of(year: i32, month: i32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian day at 00:00 UTC of the date.
#[must_use]
pub fn julian_day(date: Date) -> f64 {
    julian_day_of(
        i32::from(date.year()),
        i32::from(date.month()),
        f64::from(date.day()),
    )
}

/// Gregorian date and UTC hour of a Julian day.
///
/// Returns `None` when the day lies outside the range `jiff` can represent.
#[must_use]
pub fn from_julian_day(jd: f64) -> Option<(Date, f64)> {
    let jd = jd + 0.5;
    let z = jd.floor();
    let fraction = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    if !(-9999.0..=9999.0).contains(&year) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let date = Date::new(year as i16, month as i8, day as i8).ok()?;
    Some((date, fraction * 24.0))
}

/// ΔT = TT − UT for the given Gregorian year, in days.
#[must_use]
pub fn ephemeris_correction(year: i32) -> f64 {
    let y = f64::from(year);
    let y2000 = y - 2000.0;
    let y1820 = (y - 1820.0) / 100.0;
    let seconds = match year {
        2051..=2150 => -20.0 + 32.0 * y1820 * y1820 + 0.5628 * (2150.0 - y),
        2006..=2050 => 62.92 + 0.32217 * y2000 + 0.005589 * y2000 * y2000,
        1987..=2005 => polynomial(
            y2000,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000_651_814, 0.000_023_735_99],
        ),
        1800..=1986 => {
            let c = (julian_day_of(year, 7, 1.0) - julian_day_of(1900, 1, 1.0)) / 36525.0;
            let days = if year >= 1900 {
                polynomial(
                    c,
                    &[
                        -0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066,
                        -0.212591,
                    ],
                )
            } else {
                polynomial(
                    c,
                    &[
                        -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267,
                        38.291999, 28.316289, 11.636204, 2.043794,
                    ],
                )
            };
            return days;
        }
        _ => -20.0 + 32.0 * y1820 * y1820,
    };
    seconds / 86400.0
}

/// Instant of the March equinox in the given Gregorian year, as a Julian day in UT.
#[must_use]
pub fn march_equinox(year: i32) -> f64 {
    let y = (f64::from(year) - 2000.0) / 1000.0;
    let jde0 = polynomial(
        y,
        &[2_451_623.809_84, 365_242.374_04, 0.05169, -0.00411, -0.00057],
    );

    let t = (jde0 - 2_451_545.0) / 36525.0;
    let w = (35999.373 * t - 2.47).to_radians();
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = EQUINOX_TERMS
        .iter()
        .map(|(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum();

    jde0 + 0.00001 * s / delta_lambda - ephemeris_correction(year)
}

/// Instant of the new moon with lunation number `k` (0 = 2000-01-06), as a Julian day in UT.
#[must_use]
pub fn new_moon(k: f64) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = NEW_MOON_EPOCH + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let omega = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let correction = -0.40720 * mp.sin() + 0.17241 * e * m.sin() + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * omega.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    let a1 = (299.77 + 0.107_408 * k - 0.009_173 * t2).to_radians();
    let planetary = 0.000_325 * a1.sin()
        + NEW_MOON_PLANETARY
            .iter()
            .map(|(phase, rate, amplitude)| amplitude * (phase + rate * k).to_radians().sin())
            .sum::<f64>();

    let jde = jde + correction + planetary;
    let year = from_julian_day(jde).map_or(2000, |(date, _)| i32::from(date.year()));
    jde - ephemeris_correction(year)
}

/// Lunation number of the last new moon at or before the Julian day, give or take one.
#[must_use]
pub fn lunation_before(jd: f64) -> f64 {
    ((jd - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor()
}

/// Sunset in Tehran on the given date, in hours after 00:00 UTC.
///
/// Uses the low-precision solar coordinates of the Astronomical Almanac, good to about a
/// minute, with the standard −0.833° altitude for refraction and the solar semidiameter.
#[must_use]
pub fn tehran_sunset(date: Date) -> f64 {
    let n = julian_day(date) + 0.5 - 2_451_545.0;

    let mean_longitude = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let anomaly = (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians();
    let lambda = (mean_longitude + 1.915 * anomaly.sin() + 0.020 * (2.0 * anomaly).sin())
        .to_radians();
    let obliquity = (23.439 - 0.000_000_4 * n).to_radians();

    let declination = (obliquity.sin() * lambda.sin()).asin();
    let right_ascension = (obliquity.cos() * lambda.sin())
        .atan2(lambda.cos())
        .to_degrees();
    let equation_of_time = (mean_longitude - right_ascension + 540.0).rem_euclid(360.0) - 180.0;

    let latitude = TEHRAN_LATITUDE.to_radians();
    let cos_hour_angle = (SUNSET_ALTITUDE.to_radians().sin()
        - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());
    let hour_angle = cos_hour_angle.clamp(-1.0, 1.0).acos().to_degrees();

    let noon = 12.0 - TEHRAN_LONGITUDE / 15.0 - equation_of_time / 15.0;
    noon + hour_angle / 15.0
}

fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}
