// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-day open/close event counts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::day::Day;
use crate::issue::Issue;

/// Number of issues opened and closed on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    pub opened: u32,
    pub closed: u32,
}

/// Maps each day to the issues opened and closed on it.
///
/// Days with no recorded events read as `DayCounts::default()`.
#[derive(Debug, Clone, Default)]
pub struct DayCounter {
    map: HashMap<Day, DayCounts>,
}

impl DayCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an open event on every issue's open day and a close event on
    /// every close day.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut counter = Self::new();
        for issue in issues {
            counter.record_open(issue.open);
            if let Some(close) = issue.close {
                counter.record_close(close);
            }
        }
        counter
    }

    pub fn record_open(&mut self, day: Day) {
        self.map.entry(day).or_default().opened += 1;
    }

    pub fn record_close(&mut self, day: Day) {
        self.map.entry(day).or_default().closed += 1;
    }

    pub fn counts_on(&self, day: Day) -> DayCounts {
        self.map.get(&day).copied().unwrap_or_default()
    }

    /// Days with at least one event, in no particular order.
    pub fn known_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.map.keys().copied()
    }

    /// Sums the counts of every known day strictly before `day`.
    pub fn totals_before(&self, day: Day) -> DayCounts {
        self.map.iter().filter(|(known, _)| **known < day).fold(
            DayCounts::default(),
            |acc, (_, counts)| DayCounts {
                opened: acc.opened + counts.opened,
                closed: acc.closed + counts.closed,
            },
        )
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
#[path = "counts_tests.rs"]
mod tests;
