// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for burndown series invariants.

#![allow(clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;
use std::collections::HashMap;

fn base_day() -> Day {
    Day::new(2017, 10, 1).unwrap()
}

fn offset(days: u32) -> Day {
    base_day().until(None).nth(days as usize).unwrap()
}

// Issues opened within 40 days of the base day, some closed up to 20 days later.
fn issue_strategy() -> impl Strategy<Value = Issue> {
    (0u32..40, prop::option::of(0u32..20)).prop_map(|(open, close)| {
        let open_day = offset(open);
        Issue::new(open_day, close.map(|c| offset(open + c)))
    })
}

fn config_strategy() -> impl Strategy<Value = SkipConfig> {
    (any::<bool>(), prop::collection::vec(0u32..60, 0..5)).prop_map(|(weekend, skipped)| {
        SkipConfig::default()
            .with_skip_weekend(weekend)
            .with_skipped_days(skipped.into_iter().map(offset))
    })
}

// Independent reconstruction: counts every issue opened/closed on or before each day.
fn expected_series(issues: &[Issue], policy: &SkipPolicy, start: Day, end: Day) -> (Vec<i64>, Vec<i64>) {
    let mut downs = Vec::new();
    let mut ups = Vec::new();
    for day in start.until(Some(end)).filter(|d| !policy.is_skipped(*d)) {
        let opened = issues.iter().filter(|i| i.open <= day).count() as i64;
        let closed = issues.iter().filter(|i| i.close.is_some_and(|c| c <= day)).count() as i64;
        downs.push(opened - closed);
        ups.push(closed);
    }
    (downs, ups)
}

fn series_by_day(policy: &SkipPolicy, start: Day, end: Day, result: &BurndownResult) -> HashMap<Day, (i64, i64)> {
    start
        .until(Some(end))
        .filter(|d| !policy.is_skipped(*d))
        .zip(result.downs.iter().zip(result.ups.iter()))
        .map(|(day, (down, up))| (day, (*down, *up)))
        .collect()
}

proptest! {
    #[test]
    fn prop_series_match_reconstruction(
        issues in prop::collection::vec(issue_strategy(), 0..25),
        config in config_strategy(),
        start in 0u32..50,
        len in 0u32..30,
    ) {
        let start = offset(start);
        let end = start.until(None).nth(len as usize).unwrap();
        let burndown = Burndown::with_config(&issues, config.clone()).unwrap();
        let policy = SkipPolicy::new(config);
        let working = policy.working_days(start, end);

        match burndown.burndown(start, end, None) {
            Ok(result) => {
                prop_assert_eq!(result.downs.len(), result.ups.len());
                prop_assert_eq!(result.downs.len(), working);
                let (downs, ups) = expected_series(&issues, &policy, start, end);
                prop_assert_eq!(result.downs, downs);
                prop_assert_eq!(result.ups, ups);
                prop_assert!(result.velocity_total.is_finite());
                prop_assert!(result.velocity_close.is_finite());
            }
            Err(err) => {
                prop_assert_eq!(working, 0);
                let empty = matches!(err, Error::EmptyWindow { .. });
                prop_assert!(empty, "unexpected error: {:?}", err);
            }
        }
    }

    #[test]
    fn prop_burndown_idempotent(
        issues in prop::collection::vec(issue_strategy(), 0..25),
        start in 0u32..30,
        len in 0u32..30,
        due in 0u32..20,
    ) {
        let start = offset(start);
        let end = start.until(None).nth(len as usize).unwrap();
        let due = Some(end.until(None).nth(due as usize).unwrap());
        let burndown = Burndown::with_config(&issues, SkipConfig::default().with_skip_weekend(false)).unwrap();

        let first = burndown.burndown(start, end, due).unwrap();
        let second = burndown.burndown(start, end, due).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extra_skipped_day_only_filters(
        issues in prop::collection::vec(issue_strategy(), 0..25),
        start in 0u32..30,
        len in 1u32..30,
        extra in 0u32..30,
    ) {
        let start = offset(start);
        let end = start.until(None).nth(len as usize).unwrap();
        let extra = start.until(None).nth(extra as usize).unwrap();
        let base_config = SkipConfig::default().with_skip_weekend(false);
        let skip_config = base_config.clone().with_skipped_days([extra]);

        let base = Burndown::with_config(&issues, base_config.clone()).unwrap();
        let skipped = Burndown::with_config(&issues, skip_config.clone()).unwrap();
        let base_result = base.burndown(start, end, None).unwrap();
        let skipped_result = skipped.burndown(start, end, None).unwrap();

        prop_assert!(skipped_result.downs.len() <= base_result.downs.len());

        let base_days = series_by_day(&SkipPolicy::new(base_config), start, end, &base_result);
        let skipped_days = series_by_day(&SkipPolicy::new(skip_config), start, end, &skipped_result);
        for (day, values) in skipped_days {
            prop_assert_eq!(base_days.get(&day), Some(&values));
        }
    }
}
