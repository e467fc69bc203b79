// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Burndown/burnup series and velocity.
//!
//! The engine aggregates issue events once at construction and answers
//! window queries without further mutation.
//!
//! For a window `[start, end]`:
//! 1. Events on days before `start` seed the running open/close totals.
//! 2. Each day in the window adds its events to the totals; non-skipped days
//!    report `open - close` (downs) and `close` (ups).
//! 3. Velocity is the change per working day. If the backlog reaches zero
//!    and stays there to the end of the window, the working days up to that
//!    point are the denominator instead of the whole window.
//!
//! Completion is tracked on every calendar day of the scan, skipped days
//! included. A backlog cleared on a Saturday completes on that Saturday, so
//! the denominator counts working days only up to the Friday before.

use serde::Serialize;

use crate::counts::DayCounter;
use crate::day::Day;
use crate::error::{Error, Result};
use crate::holiday::{HolidayCalendar, NoHolidays};
use crate::issue::Issue;
use crate::skip::{SkipConfig, SkipPolicy};

/// Series and velocities for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurndownResult {
    /// Open backlog on each non-skipped day.
    pub downs: Vec<i64>,
    /// Cumulative closed count on each non-skipped day.
    pub ups: Vec<i64>,
    /// Change in backlog per working day.
    pub velocity_total: f64,
    /// Negated change in closed count per working day.
    pub velocity_close: f64,
    /// Rate needed to reach zero backlog on the due day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_ideal: Option<f64>,
}

/// Burndown engine over a fixed set of issues.
#[derive(Debug, Clone)]
pub struct Burndown<H: HolidayCalendar = NoHolidays> {
    counts: DayCounter,
    first_day: Option<Day>,
    last_day: Option<Day>,
    policy: SkipPolicy<H>,
}

impl Burndown<NoHolidays> {
    /// Creates an engine with no holiday source.
    pub fn with_config(issues: &[Issue], config: SkipConfig) -> Result<Self> {
        Self::new(issues, SkipPolicy::new(config))
    }
}

impl<H: HolidayCalendar> Burndown<H> {
    /// Aggregates the issues and records the first and last event days.
    ///
    /// Fails with `InvalidIssue` if any issue was closed before it was opened.
    pub fn new(issues: &[Issue], policy: SkipPolicy<H>) -> Result<Self> {
        let mut counts = DayCounter::new();
        let mut first_day: Option<Day> = None;
        let mut last_day: Option<Day> = None;

        for issue in issues {
            issue.validate()?;
            counts.record_open(issue.open);
            extend_range(&mut first_day, &mut last_day, issue.open);
            if let Some(close) = issue.close {
                counts.record_close(close);
                extend_range(&mut first_day, &mut last_day, close);
            }
        }

        tracing::debug!(
            issues = issues.len(),
            first_day = ?first_day.map(|d| d.to_string()),
            last_day = ?last_day.map(|d| d.to_string()),
            "built burndown"
        );

        Ok(Burndown { counts, first_day, last_day, policy })
    }

    /// Earliest open or close day, `None` without issues.
    pub fn first_day(&self) -> Option<Day> {
        self.first_day
    }

    /// Latest open or close day, `None` without issues.
    pub fn last_day(&self) -> Option<Day> {
        self.last_day
    }

    pub fn counts(&self) -> &DayCounter {
        &self.counts
    }

    pub fn policy(&self) -> &SkipPolicy<H> {
        &self.policy
    }

    pub fn is_day_skipped(&self, day: Day) -> bool {
        self.policy.is_skipped(day)
    }

    /// Computes the series for `[start, end]` and, with a due day, the ideal
    /// velocity.
    ///
    /// Fails with `InvalidRange` if `end` is before `start` and with
    /// `EmptyWindow` if every day in the window is skipped. A velocity whose
    /// working-day denominator is zero is reported as `0.0`.
    pub fn burndown(&self, start: Day, end: Day, due: Option<Day>) -> Result<BurndownResult> {
        if end < start {
            return Err(Error::InvalidRange { start: start.to_string(), end: end.to_string() });
        }

        let carried = self.counts.totals_before(start);
        let mut open_total = i64::from(carried.opened);
        let mut close_total = i64::from(carried.closed);
        let mut downs = Vec::new();
        let mut ups = Vec::new();
        let mut completed: Option<Day> = None;

        for day in start.until(Some(end)) {
            let counts = self.counts.counts_on(day);
            open_total += i64::from(counts.opened);
            close_total += i64::from(counts.closed);

            if !self.policy.is_skipped(day) {
                downs.push(open_total - close_total);
                ups.push(close_total);
            }

            // Skipped days can start the zero-backlog streak too.
            if open_total == close_total {
                completed.get_or_insert(day);
            } else {
                completed = None;
            }
        }

        let (Some(&first_down), Some(&last_down), Some(&first_up), Some(&last_up)) =
            (downs.first(), downs.last(), ups.first(), ups.last())
        else {
            return Err(Error::EmptyWindow { start: start.to_string(), end: end.to_string() });
        };

        let total_days = match completed {
            Some(day) => self.policy.working_days(start, day) as i64 - 1,
            None => downs.len() as i64 - 1,
        };

        tracing::debug!(
            %start,
            %end,
            days = downs.len(),
            completed = ?completed.map(|d| d.to_string()),
            total_days,
            "computed burndown"
        );

        let velocity_ideal = due.and_then(|due| self.ideal_velocity(first_down, start, due));

        Ok(BurndownResult {
            velocity_total: rate(last_down - first_down, total_days),
            velocity_close: rate(first_up - last_up, total_days),
            velocity_ideal,
            downs,
            ups,
        })
    }

    /// Walks back from `origin` to `stop` (inclusive) and returns the first
    /// day that is not skipped, or `stop` if all of them are.
    pub fn skip_days_before(&self, origin: Day, stop: Day) -> Day {
        origin.until_back(Some(stop)).find(|day| !self.policy.is_skipped(*day)).unwrap_or(stop)
    }

    fn ideal_velocity(&self, first_down: i64, start: Day, due: Day) -> Option<f64> {
        let days = self.policy.working_days(start, due) as i64;
        if days < 2 {
            tracing::warn!(%start, %due, days, "too few working days for an ideal velocity");
            return None;
        }
        Some(-(first_down as f64) / (days - 1) as f64)
    }
}

fn extend_range(first: &mut Option<Day>, last: &mut Option<Day>, day: Day) {
    *first = Some(first.map_or(day, |d| d.min(day)));
    *last = Some(last.map_or(day, |d| d.max(day)));
}

fn rate(delta: i64, days: i64) -> f64 {
    if days <= 0 {
        if delta != 0 {
            tracing::warn!(delta, days, "no working days to spread change over, reporting 0");
        }
        return 0.0;
    }
    delta as f64 / days as f64
}

#[cfg(test)]
#[path = "burndown_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "burndown_proptests.rs"]
mod proptests;
