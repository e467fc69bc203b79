// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for burndown computations.

use thiserror::Error;

/// All possible errors that can occur while building or querying a burndown.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid day: {0}\n  hint: days are written as YYYY-MM-DD")]
    InvalidDay(String),

    #[error("invalid issue: closed on {close} before it was opened on {open}")]
    InvalidIssue { open: String, close: String },

    #[error("invalid range: end day {end} is before start day {start}")]
    InvalidRange { start: String, end: String },

    #[error(
        "empty window: every day from {start} to {end} is skipped\n  hint: check skip_weekend, skip_holiday and skipped_days"
    )]
    EmptyWindow { start: String, end: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for burndown operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
