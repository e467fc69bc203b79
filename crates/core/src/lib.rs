// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! burndown-core: burndown/burnup series from issue lifecycle events
//!
//! This crate turns a list of issues (open day, optional close day) into
//! per-working-day backlog and closed-count series over a date window,
//! skipping weekends, holidays and explicitly listed days, and derives
//! velocities and forward projections from them. Rendering is left to the
//! caller.

pub mod burndown;
pub mod config;
pub mod counts;
pub mod day;
pub mod error;
pub mod holiday;
pub mod issue;
pub mod jsonl;
pub mod projection;
pub mod skip;

pub use burndown::{Burndown, BurndownResult};
pub use config::{load_config, BurndownConfig};
pub use counts::{DayCounter, DayCounts};
pub use day::{Day, Days};
pub use error::{Error, Result};
pub use holiday::{Holiday, HolidayCalendar, HolidayList, NoHolidays};
pub use issue::Issue;
pub use projection::{extrapolate, Projection};
pub use skip::{SkipConfig, SkipPolicy};
