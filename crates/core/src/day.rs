// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar day value type.
//!
//! A `Day` is a date without a time-of-day component. Equality, ordering and
//! hashing are defined by (year, month, day-of-month) only, so two `Day`
//! values for the same date are interchangeable everywhere, including as map
//! keys.
//!
//! Format: `YYYY-MM-DD` (canonical), `M/D` (short label).
//!
//! Day arithmetic is delegated to `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An immutable calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    /// Creates a day from year, month (1-12) and day of month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Day)
            .ok_or_else(|| Error::InvalidDay(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parses a day from its canonical `YYYY-MM-DD` representation.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Returns the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month between 1 and 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Day of week where 0 is Sunday and 6 is Saturday.
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if this day is strictly later than the other.
    pub fn is_after(&self, other: &Day) -> bool {
        self > other
    }

    /// Returns true if this day is strictly earlier than the other.
    pub fn is_before(&self, other: &Day) -> bool {
        self < other
    }

    /// The following calendar day, or `None` past the last representable date.
    pub fn succ(&self) -> Option<Day> {
        self.0.succ_opt().map(Day)
    }

    /// The preceding calendar day, or `None` before the first representable date.
    pub fn pred(&self) -> Option<Day> {
        self.0.pred_opt().map(Day)
    }

    /// Walks forward one day at a time, starting at this day.
    ///
    /// With `Some(end)` the walk stops after yielding `end`. With `None` it
    /// continues until the calendar runs out, so callers must bound it
    /// themselves (e.g. with `take_while`).
    pub fn until(self, end: Option<Day>) -> Days {
        Days { next: Some(self), bound: end, direction: Direction::Forward }
    }

    /// Walks backward one day at a time, starting at this day.
    ///
    /// With `Some(stop)` the walk stops after yielding `stop`.
    pub fn until_back(self, stop: Option<Day>) -> Days {
        Days { next: Some(self), bound: stop, direction: Direction::Backward }
    }

    /// Formats the day as `M/D` for axis labels.
    pub fn short_label(&self) -> String {
        format!("{}/{}", self.month(), self.day_of_month())
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day_of_month())
    }
}

impl FromStr for Day {
    type Err = Error;

    /// Accepts only the canonical zero-padded form, so every parsed day
    /// formats back to the same string.
    fn from_str(s: &str) -> Result<Self> {
        let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Day)
            .map_err(|e| Error::InvalidDay(format!("'{s}' ({e})")))?;
        if day.to_string() != s {
            return Err(Error::InvalidDay(format!("'{s}' is not in YYYY-MM-DD form")));
        }
        Ok(day)
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A bounded or unbounded walk over consecutive days.
///
/// Created by [`Day::until`] and [`Day::until_back`]. Each walk owns its own
/// cursor; cloning or creating another walk never affects this one.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Day>,
    bound: Option<Day>,
    direction: Direction,
}

impl Iterator for Days {
    type Item = Day;

    fn next(&mut self) -> Option<Day> {
        let day = self.next?;
        if let Some(bound) = self.bound {
            let past = match self.direction {
                Direction::Forward => day > bound,
                Direction::Backward => day < bound,
            };
            if past {
                self.next = None;
                return None;
            }
        }
        self.next = match self.direction {
            Direction::Forward => day.succ(),
            Direction::Backward => day.pred(),
        };
        Some(day)
    }
}

impl FusedIterator for Days {}

#[cfg(test)]
#[path = "day_tests.rs"]
mod tests;
