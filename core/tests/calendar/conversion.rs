// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use badical_core::{BadiDate, BadiMonth, Error};
use jiff::{Timestamp, ToSpan, civil::date};

use crate::common::engine;

#[tokio::test]
async fn gregorian_to_badi() {
    let badical = engine().await;

    let cases = [
        (date(1844, 3, 21), (1, BadiMonth::Baha, 1)),
        (date(2024, 2, 26), (180, BadiMonth::AyyamIHa, 1)),
        (date(2024, 3, 19), (180, BadiMonth::Ala, 19)),
        (date(2024, 3, 20), (181, BadiMonth::Baha, 1)),
        (date(2018, 3, 1), (174, BadiMonth::AyyamIHa, 5)),
    ];
    for (day, (year, month, d)) in cases {
        let expected = BadiDate::new(year, month, d).unwrap();
        assert_eq!(badical.to_badi(day).unwrap(), expected, "{day}");
    }
}

#[tokio::test]
async fn conversion_round_trips_every_day_of_a_year() {
    let badical = engine().await;

    let mut day = date(2024, 1, 1);
    while day.year() == 2024 {
        let badi = badical.to_badi(day).unwrap();
        assert_eq!(badical.to_gregorian(badi).unwrap().date(), day, "{badi}");
        day = day.checked_add(1.day()).unwrap();
    }
}

#[tokio::test]
async fn day_changes_at_sunset() {
    let badical = engine().await;

    let afternoon: Timestamp = "2024-03-19T12:00:00Z".parse().unwrap();
    let evening: Timestamp = "2024-03-19T16:00:00Z".parse().unwrap();

    assert_eq!(badical.to_badi_at(afternoon).unwrap().to_string(), "180-19-19");
    assert_eq!(badical.to_badi_at(evening).unwrap().to_string(), "181-01-01");
}

#[tokio::test]
async fn badi_date_text_form() {
    let badical = engine().await;

    let badi: BadiDate = "181-01-01".parse().unwrap();
    assert_eq!(badical.to_gregorian(badi).unwrap().date(), date(2024, 3, 20));
    assert_eq!(badical.to_gregorian(badi).unwrap().eve(), date(2024, 3, 19));

    let ayyam_i_ha = BadiDate::new(180, BadiMonth::AyyamIHa, 3).unwrap();
    assert_eq!(ayyam_i_ha.to_string(), "180-00-03");
}

#[tokio::test]
async fn dates_outside_the_supported_range() {
    let badical = engine().await;

    assert!(matches!(
        badical.to_badi(date(1844, 3, 20)),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        badical.to_gregorian(BadiDate::new(501, BadiMonth::Baha, 1).unwrap()),
        Err(Error::OutOfRange { .. })
    ));
}

#[tokio::test]
async fn fifth_intercalary_day_only_in_leap_years() {
    let badical = engine().await;

    let leap = BadiDate::new(174, BadiMonth::AyyamIHa, 5).unwrap();
    let common = BadiDate::new(181, BadiMonth::AyyamIHa, 5).unwrap();

    assert_eq!(badical.to_gregorian(leap).unwrap().date(), date(2018, 3, 1));
    assert!(matches!(
        badical.to_gregorian(common),
        Err(Error::InvalidBadiDate { year: 181, .. })
    ));
}
