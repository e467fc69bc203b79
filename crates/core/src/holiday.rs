// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Holiday lookup.
//!
//! The engine only needs to ask "is this day a holiday?". Where the answer
//! comes from is injected through [`HolidayCalendar`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::day::Day;

/// Trait for answering whether a day is a holiday.
///
/// Implementations must be pure: the same day always gets the same answer.
pub trait HolidayCalendar {
    fn is_holiday(&self, day: Day) -> bool;
}

impl<C: HolidayCalendar> HolidayCalendar for &C {
    fn is_holiday(&self, day: Day) -> bool {
        (*self).is_holiday(day)
    }
}

/// Calendar without holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _day: Day) -> bool {
        false
    }
}

/// A single holiday entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// If true, repeats annually on the same month and day.
    #[serde(default)]
    pub recurring: bool,
}

impl Holiday {
    pub fn new(date: Day) -> Self {
        Holiday { date, name: None, recurring: false }
    }

    pub fn recurring(date: Day) -> Self {
        Holiday { date, name: None, recurring: true }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Holiday calendar backed by an explicit list of entries.
#[derive(Debug, Clone, Default)]
pub struct HolidayList {
    fixed: HashSet<Day>,
    annual: HashSet<(u32, u32)>,
}

impl HolidayList {
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut list = HolidayList::default();
        for holiday in holidays {
            list.insert(holiday);
        }
        list
    }

    /// Builds a list of one-off holidays.
    pub fn from_days(days: impl IntoIterator<Item = Day>) -> Self {
        Self::new(days.into_iter().map(Holiday::new))
    }

    pub fn insert(&mut self, holiday: Holiday) {
        if holiday.recurring {
            self.annual.insert((holiday.date.month(), holiday.date.day_of_month()));
        } else {
            self.fixed.insert(holiday.date);
        }
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.annual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.annual.is_empty()
    }
}

impl HolidayCalendar for HolidayList {
    fn is_holiday(&self, day: Day) -> bool {
        self.fixed.contains(&day) || self.annual.contains(&(day.month(), day.day_of_month()))
    }
}

#[cfg(test)]
#[path = "holiday_tests.rs"]
mod tests;
