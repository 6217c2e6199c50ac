#![forbid(unsafe_code)]
use semainier::{normalize, DisplayZone, ProjectionError};
use chrono::{Datelike, NaiveDate, Timelike};

fn london() -> DisplayZone {
    DisplayZone::parse("Europe/London").unwrap()
}

#[test]
fn spring_forward_weekend_in_london() {
    let zone = london();

    // BST commence le 31/03/2024 à 01:00 UTC
    let before = normalize("2024-03-30T23:30:00Z", &zone).unwrap();
    assert_eq!(before.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
    assert_eq!((before.hour(), before.minute()), (23, 30));

    let still_gmt = normalize("2024-03-31T00:30:00Z", &zone).unwrap();
    assert_eq!((still_gmt.hour(), still_gmt.minute()), (0, 30));

    let bst = normalize("2024-03-31T01:30:00Z", &zone).unwrap();
    assert_eq!((bst.hour(), bst.minute()), (2, 30));
    assert_eq!(bst.day(), 31);
}

#[test]
fn summer_instant_crosses_midnight() {
    let local = normalize("2024-06-12T23:30:00Z", &london()).unwrap();
    assert_eq!(local.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
    assert_eq!((local.hour(), local.minute()), (0, 30));
}

#[test]
fn same_instant_in_other_zone() {
    let tokyo = DisplayZone::parse("Asia/Tokyo").unwrap();
    let local = normalize("2024-06-12T13:30:00Z", &tokyo).unwrap();
    assert_eq!((local.hour(), local.minute()), (22, 30));
    assert_eq!(tokyo.name(), "Asia/Tokyo");
}

#[test]
fn malformed_timestamp_is_an_error() {
    let err = normalize("12/06/2024 09:00", &london()).unwrap_err();
    assert!(matches!(err, ProjectionError::MalformedTimestamp { .. }));
    assert_eq!(err.code(), "MALFORMED_TIMESTAMP");
}

#[test]
fn default_zone_is_london() {
    assert_eq!(DisplayZone::default().name(), "Europe/London");
}
