// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working-calendar rules.
//!
//! A day is skipped if ANY enabled rule matches it:
//! 1. `skip_weekend` and the day is Saturday or Sunday
//! 2. `skip_holiday` and the holiday calendar reports the day
//! 3. The day is listed in `skipped_days`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::day::Day;
use crate::holiday::{HolidayCalendar, NoHolidays};

fn default_true() -> bool {
    true
}

/// Options controlling which days are excluded from the working calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipConfig {
    /// Exclude Saturdays and Sundays.
    #[serde(default = "default_true")]
    pub skip_weekend: bool,
    /// Exclude days reported by the holiday calendar.
    #[serde(default = "default_true")]
    pub skip_holiday: bool,
    /// Explicit exclusions.
    #[serde(default)]
    pub skipped_days: Vec<Day>,
}

impl Default for SkipConfig {
    fn default() -> Self {
        SkipConfig { skip_weekend: true, skip_holiday: true, skipped_days: Vec::new() }
    }
}

impl SkipConfig {
    pub fn with_skip_weekend(mut self, skip: bool) -> Self {
        self.skip_weekend = skip;
        self
    }

    pub fn with_skip_holiday(mut self, skip: bool) -> Self {
        self.skip_holiday = skip;
        self
    }

    pub fn with_skipped_days(mut self, days: impl IntoIterator<Item = Day>) -> Self {
        self.skipped_days.extend(days);
        self
    }
}

/// The combined "is this day excluded" predicate.
#[derive(Debug, Clone)]
pub struct SkipPolicy<H: HolidayCalendar = NoHolidays> {
    skip_weekend: bool,
    skip_holiday: bool,
    skipped_days: HashSet<Day>,
    holidays: H,
}

impl SkipPolicy<NoHolidays> {
    /// Creates a policy with no holiday source.
    pub fn new(config: SkipConfig) -> Self {
        Self::with_holidays(config, NoHolidays)
    }
}

impl Default for SkipPolicy<NoHolidays> {
    fn default() -> Self {
        Self::new(SkipConfig::default())
    }
}

impl<H: HolidayCalendar> SkipPolicy<H> {
    /// Creates a policy with a custom holiday calendar.
    pub fn with_holidays(config: SkipConfig, holidays: H) -> Self {
        SkipPolicy {
            skip_weekend: config.skip_weekend,
            skip_holiday: config.skip_holiday,
            skipped_days: config.skipped_days.into_iter().collect(),
            holidays,
        }
    }

    /// Returns true if the day is excluded from the working calendar.
    pub fn is_skipped(&self, day: Day) -> bool {
        let skipped = (self.skip_weekend && day.is_weekend())
            || self.skipped_days.contains(&day)
            || (self.skip_holiday && self.holidays.is_holiday(day));
        if skipped {
            tracing::trace!(%day, "skipping day");
        }
        skipped
    }

    /// Counts the days in `[start, end]` that are not skipped.
    pub fn working_days(&self, start: Day, end: Day) -> usize {
        start.until(Some(end)).filter(|day| !self.is_skipped(*day)).count()
    }
}

#[cfg(test)]
#[path = "skip_tests.rs"]
mod tests;
