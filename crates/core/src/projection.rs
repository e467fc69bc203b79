// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Forward projection of a burndown.
//!
//! Projections are plain numeric unrolling of a velocity: no aggregation
//! happens here. The series produced line up with the working days of a
//! chart's x-axis, one point per label at most.

use serde::Serialize;

use crate::burndown::{Burndown, BurndownResult};
use crate::day::Day;
use crate::error::{Error, Result};
use crate::holiday::HolidayCalendar;

/// Returns true if `value` may follow `last` in a settling series.
///
/// Positive values are always kept. The first non-positive value after a
/// positive one is kept too; after that the series has settled.
fn keeps(last: Option<f64>, value: f64) -> bool {
    value > 0.0 || last.is_some_and(|last| last > 0.0)
}

/// Steps `start` by `velocity` up to `steps` times, dropping points once the
/// series has settled at or below zero.
pub fn extrapolate(start: f64, velocity: f64, steps: usize) -> Vec<f64> {
    let mut series = vec![start];
    let mut value = start;
    for _ in 0..steps {
        value += velocity;
        if keeps(series.last().copied(), value) {
            series.push(value);
        }
    }
    series
}

/// Chart-ready series over the working days from `start` to `due`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// `M/D` label for each working day.
    pub labels: Vec<String>,
    /// Actual series for `[start, end]`.
    pub burndown: BurndownResult,
    /// Backlog extrapolated from the first day at `velocity_total`.
    pub estimates: Vec<f64>,
    /// Backlog extrapolated from the last reported day at `velocity_close`.
    /// `None` before that day.
    pub optimistic: Vec<Option<f64>>,
    /// Backlog falling at `velocity_ideal`; a single point without one.
    pub ideals: Vec<f64>,
}

impl Projection {
    /// Builds the projection for a window ending on `end` and a target of `due`.
    ///
    /// Fails like [`Burndown::burndown`], and with `InvalidRange` if `due`
    /// is before `end`.
    pub fn build<H: HolidayCalendar>(
        engine: &Burndown<H>,
        start: Day,
        end: Day,
        due: Day,
    ) -> Result<Self> {
        if due < end {
            return Err(Error::InvalidRange { start: end.to_string(), end: due.to_string() });
        }
        let burndown = engine.burndown(start, end, Some(due))?;
        let last_reported = engine.skip_days_before(end, start);
        let first = burndown.downs.first().copied().unwrap_or_default() as f64;
        let ideal_step = burndown.velocity_ideal.filter(|v| *v != 0.0);

        let working: Vec<Day> =
            start.until(Some(due)).filter(|day| !engine.is_day_skipped(*day)).collect();
        let labels: Vec<String> = working.iter().map(Day::short_label).collect();

        let mut estimates = Vec::with_capacity(working.len());
        let mut ideals = vec![first];
        let mut estimate = first;
        for i in 0..working.len() {
            if i > 0 {
                estimate += burndown.velocity_total;
                if let Some(step) = ideal_step {
                    ideals.push(first + step * i as f64);
                }
            }
            estimates.push(estimate);
        }

        let mut optimistic: Vec<Option<f64>> = Vec::new();
        if let Some(reported) = working.iter().position(|day| *day == last_reported) {
            optimistic.resize(reported, None);
            // A settled backlog has no optimistic tail.
            if let Some(down) = burndown.downs.get(reported).filter(|down| **down > 0) {
                let steps = working.len() - reported - 1;
                let tail = extrapolate(*down as f64, burndown.velocity_close, steps);
                optimistic.extend(tail.into_iter().map(Some));
            }
        } else {
            optimistic.resize(working.len(), None);
        }

        tracing::debug!(%start, %end, %due, labels = labels.len(), "built projection");

        Ok(Projection { labels, burndown, estimates, optimistic, ideals })
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
