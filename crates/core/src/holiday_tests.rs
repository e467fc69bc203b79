// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn day(y: i32, m: u32, d: u32) -> Day {
    Day::new(y, m, d).unwrap()
}

#[test]
fn no_holidays_never_matches() {
    assert!(!NoHolidays.is_holiday(day(2019, 1, 1)));
    assert!(!NoHolidays.is_holiday(day(2019, 12, 25)));
}

#[test]
fn fixed_holiday_matches_only_its_date() {
    let list = HolidayList::from_days([day(2019, 9, 16)]);
    assert!(list.is_holiday(day(2019, 9, 16)));
    assert!(!list.is_holiday(day(2019, 9, 17)));
    assert!(!list.is_holiday(day(2020, 9, 16)));
}

#[test]
fn recurring_holiday_matches_every_year() {
    let list = HolidayList::new([Holiday::recurring(day(2000, 1, 1)).with_name("New Year")]);
    assert!(list.is_holiday(day(2019, 1, 1)));
    assert!(list.is_holiday(day(2031, 1, 1)));
    assert!(!list.is_holiday(day(2019, 1, 2)));
}

#[test]
fn list_len_counts_both_kinds() {
    let mut list = HolidayList::default();
    assert!(list.is_empty());

    list.insert(Holiday::new(day(2019, 9, 16)));
    list.insert(Holiday::new(day(2019, 9, 16)));
    list.insert(Holiday::recurring(day(2019, 1, 1)));
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
}

#[test]
fn reference_delegates() {
    let list = HolidayList::from_days([day(2019, 9, 23)]);
    let by_ref = &list;
    assert!(by_ref.is_holiday(day(2019, 9, 23)));
}

#[test]
fn holiday_deserializes_with_defaults() {
    let holiday: Holiday = serde_json::from_str(r#"{"date": "2019-09-16"}"#).unwrap();
    assert_eq!(holiday, Holiday::new(day(2019, 9, 16)));

    let holiday: Holiday =
        serde_json::from_str(r#"{"date": "2019-01-01", "name": "New Year", "recurring": true}"#)
            .unwrap();
    assert!(holiday.recurring);
    assert_eq!(holiday.name.as_deref(), Some("New Year"));
}
