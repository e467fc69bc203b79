// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::holiday::HolidayList;

fn day(y: i32, m: u32, d: u32) -> Day {
    Day::new(y, m, d).unwrap()
}

fn no_holiday() -> SkipConfig {
    SkipConfig::default().with_skip_holiday(false)
}

//       Oct 2017
// Su Mo Tu We Th Fr Sa
// 29 30 31
//       Nov 2017
//           1  2  3  4
//  5  6  7  8  9 10 11
fn mixed_issues() -> Vec<Issue> {
    vec![
        Issue::closed(day(2017, 10, 29), day(2017, 10, 31)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 6)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 3)),
        Issue::opened(day(2017, 11, 1)),
        Issue::opened(day(2017, 11, 2)),
    ]
}

fn two_closed_two_open() -> Vec<Issue> {
    vec![
        Issue::closed(day(2017, 10, 29), day(2017, 10, 31)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 6)),
        Issue::opened(day(2017, 11, 1)),
        Issue::opened(day(2017, 11, 2)),
    ]
}

#[test]
fn burndown_skips_weekends() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![3, 2, 3, 4, 3, 2, 2, 2, 2, 2]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 2, 3, 3, 3, 3, 3]);
    assert_eq!(result.velocity_total, -1.0 / 9.0);
    assert_eq!(result.velocity_close, -3.0 / 9.0);
    assert_eq!(result.velocity_ideal, None);
}

#[test]
fn burndown_all_open() {
    let issues = vec![
        Issue::opened(day(2017, 10, 29)),
        Issue::opened(day(2017, 10, 30)),
        Issue::opened(day(2017, 11, 1)),
        Issue::opened(day(2017, 11, 2)),
    ];
    let burndown = Burndown::with_config(&issues, no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 2), None).unwrap();

    assert_eq!(result.downs, vec![2, 2, 3, 4]);
    assert_eq!(result.ups, vec![0, 0, 0, 0]);
    assert_eq!(result.velocity_total, 2.0 / 3.0);
    assert_eq!(result.velocity_close, 0.0);
}

#[test]
fn burndown_all_closed() {
    let issues = vec![
        Issue::closed(day(2017, 10, 29), day(2017, 10, 31)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 2)),
        Issue::closed(day(2017, 11, 1), day(2017, 11, 6)),
        Issue::closed(day(2017, 11, 2), day(2017, 11, 3)),
    ];
    let burndown = Burndown::with_config(&issues, no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 6), None).unwrap();

    assert_eq!(result.downs, vec![2, 1, 2, 2, 1, 0]);
    assert_eq!(result.ups, vec![0, 1, 1, 2, 3, 4]);
    assert_eq!(result.velocity_total, -2.0 / 5.0);
    assert_eq!(result.velocity_close, -4.0 / 5.0);
}

#[test]
fn burndown_all_closed_before_end_day() {
    let issues = vec![
        Issue::closed(day(2017, 10, 29), day(2017, 10, 31)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 6)),
        Issue::closed(day(2017, 10, 30), day(2017, 11, 3)),
        Issue::closed(day(2017, 11, 1), day(2017, 11, 3)),
        Issue::closed(day(2017, 11, 2), day(2017, 11, 3)),
    ];
    let burndown = Burndown::with_config(&issues, no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![3, 2, 3, 4, 1, 0, 0, 0, 0, 0]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 4, 5, 5, 5, 5, 5]);
    assert_eq!(result.velocity_total, -3.0 / 5.0);
    assert_eq!(result.velocity_close, -5.0 / 5.0);
}

#[test]
fn burndown_completion_resets_when_backlog_reopens() {
    let issues = vec![
        Issue::closed(day(2017, 10, 30), day(2017, 10, 31)),
        Issue::opened(day(2017, 11, 2)),
    ];
    let burndown = Burndown::with_config(&issues, no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 3), None).unwrap();

    assert_eq!(result.downs, vec![1, 0, 0, 1, 1]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 1]);
    assert_eq!(result.velocity_total, 0.0);
    assert_eq!(result.velocity_close, -1.0 / 4.0);
}

#[test]
fn burndown_completion_on_skipped_day_counts_to_previous_working_day() {
    // Closed on Saturday 11-04: Friday still reports the backlog, yet the
    // denominator stops at Friday (5 working days - 1).
    let issues = vec![Issue::closed(day(2017, 10, 30), day(2017, 11, 4))];
    let burndown = Burndown::with_config(&issues, no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
    assert_eq!(result.ups, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    assert_eq!(result.velocity_total, -1.0 / 4.0);
    assert_eq!(result.velocity_close, -1.0 / 4.0);
}

#[test]
fn burndown_without_skip_weekend() {
    let config = no_holiday().with_skip_weekend(false);
    let burndown = Burndown::with_config(&two_closed_two_open(), config).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![2, 1, 2, 3, 3, 3, 3, 2, 2, 2, 2, 2]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
    assert_eq!(result.velocity_total, 0.0);
    assert_eq!(result.velocity_close, -2.0 / 11.0);
}

#[test]
fn burndown_with_skipped_days() {
    let config = no_holiday().with_skipped_days([day(2017, 10, 31), day(2017, 11, 6)]);
    let burndown = Burndown::with_config(&two_closed_two_open(), config).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![2, 2, 3, 3, 2, 2, 2, 2]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 2, 2, 2, 2]);
    assert_eq!(result.velocity_total, 0.0);
    assert_eq!(result.velocity_close, -2.0 / 7.0);
}

#[test]
fn burndown_with_skipped_days_and_weekends_counted() {
    let config = no_holiday().with_skip_weekend(false).with_skipped_days([
        day(2017, 10, 31),
        day(2017, 11, 3),
        day(2017, 11, 6),
    ]);
    let burndown = Burndown::with_config(&two_closed_two_open(), config).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), None).unwrap();

    assert_eq!(result.downs, vec![2, 2, 3, 3, 3, 2, 2, 2, 2]);
    assert_eq!(result.ups, vec![0, 1, 1, 1, 1, 2, 2, 2, 2]);
    assert_eq!(result.velocity_total, 0.0);
    assert_eq!(result.velocity_close, -2.0 / 8.0);
}

//       Sep 2019
// 15 16 17 18 19 20 21
//     ^
// 22 23 24 25 26 27 28
//     ^
#[test]
fn burndown_skips_holidays() {
    let issues = vec![
        Issue::closed(day(2019, 9, 15), day(2019, 9, 15)),
        Issue::closed(day(2019, 9, 15), day(2019, 9, 18)),
        Issue::opened(day(2019, 9, 16)),
        Issue::opened(day(2019, 9, 17)),
    ];
    let holidays = HolidayList::from_days([day(2019, 9, 16), day(2019, 9, 23)]);
    let policy =
        SkipPolicy::with_holidays(SkipConfig::default().with_skip_weekend(false), holidays);
    let burndown = Burndown::new(&issues, policy).unwrap();
    let result = burndown.burndown(day(2019, 9, 15), day(2019, 9, 18), None).unwrap();

    assert_eq!(result.downs, vec![1, 3, 2]);
    assert_eq!(result.ups, vec![1, 1, 2]);
    assert_eq!(result.velocity_total, 1.0 / 2.0);
    assert_eq!(result.velocity_close, -1.0 / 2.0);
}

#[test]
fn ideal_velocity_reaches_zero_on_due_day() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    // Mon 10-30 .. Fri 11-17 has 15 working days.
    let result =
        burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), Some(day(2017, 11, 17))).unwrap();

    assert_eq!(result.velocity_ideal, Some(-3.0 / 14.0));
}

#[test]
fn ideal_velocity_absent_for_single_working_day() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let result =
        burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), Some(day(2017, 10, 30))).unwrap();

    assert_eq!(result.velocity_ideal, None);
}

#[test]
fn single_day_window_has_zero_velocity() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 11, 1), day(2017, 11, 1), None).unwrap();

    assert_eq!(result.downs, vec![3]);
    assert_eq!(result.ups, vec![1]);
    assert_eq!(result.velocity_total, 0.0);
    assert_eq!(result.velocity_close, 0.0);
}

#[test]
fn burndown_rejects_reversed_range() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let err = burndown.burndown(day(2017, 11, 10), day(2017, 10, 30), None).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { .. }));
}

#[test]
fn burndown_rejects_fully_skipped_window() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let err = burndown.burndown(day(2017, 11, 4), day(2017, 11, 5), None).unwrap_err();
    assert!(matches!(err, Error::EmptyWindow { .. }));
}

#[test]
fn burndown_is_idempotent() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let due = Some(day(2017, 11, 17));
    let first = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), due).unwrap();
    let second = burndown.burndown(day(2017, 10, 30), day(2017, 11, 10), due).unwrap();
    assert_eq!(first, second);
}

#[test]
fn new_rejects_close_before_open() {
    let issues = vec![Issue::closed(day(2017, 11, 2), day(2017, 11, 1))];
    let err = Burndown::with_config(&issues, no_holiday()).unwrap_err();
    assert!(matches!(err, Error::InvalidIssue { .. }));
}

#[test]
fn first_and_last_day_cover_opens_and_closes() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    assert_eq!(burndown.first_day(), Some(day(2017, 10, 29)));
    assert_eq!(burndown.last_day(), Some(day(2017, 11, 6)));
}

#[test]
fn empty_issue_list_has_no_range() {
    let burndown = Burndown::with_config(&[], no_holiday()).unwrap();
    assert_eq!(burndown.first_day(), None);
    assert_eq!(burndown.last_day(), None);

    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 1), None).unwrap();
    assert_eq!(result.downs, vec![0, 0, 0]);
    assert_eq!(result.velocity_total, 0.0);
}

#[test]
fn skip_days_before_finds_previous_working_day() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    // Sunday 11-05 walks back to Friday 11-03.
    assert_eq!(burndown.skip_days_before(day(2017, 11, 5), day(2017, 10, 30)), day(2017, 11, 3));
    assert_eq!(burndown.skip_days_before(day(2017, 11, 6), day(2017, 10, 30)), day(2017, 11, 6));
}

#[test]
fn skip_days_before_falls_back_to_stop() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    assert_eq!(burndown.skip_days_before(day(2017, 11, 5), day(2017, 11, 4)), day(2017, 11, 4));
}

#[test]
fn result_serializes_without_missing_ideal() {
    let burndown = Burndown::with_config(&mixed_issues(), no_holiday()).unwrap();
    let result = burndown.burndown(day(2017, 10, 30), day(2017, 11, 1), None).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["downs"], serde_json::json!([3, 2, 3]));
    assert!(json.get("velocity_ideal").is_none());
}
