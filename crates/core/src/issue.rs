// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue lifecycle records.
//!
//! An issue is reduced to the two days the burndown cares about: the day it
//! was opened and, once resolved, the day it was closed.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{Error, Result};

/// A tracked work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Day the issue was opened.
    pub open: Day,
    /// Day the issue was closed, if resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<Day>,
}

impl Issue {
    pub fn new(open: Day, close: Option<Day>) -> Self {
        Issue { open, close }
    }

    /// Creates an issue that is still open.
    pub fn opened(open: Day) -> Self {
        Issue { open, close: None }
    }

    /// Creates an issue resolved on `close`.
    pub fn closed(open: Day, close: Day) -> Self {
        Issue { open, close: Some(close) }
    }

    pub fn is_closed(&self) -> bool {
        self.close.is_some()
    }

    /// Checks that the issue was not closed before it was opened.
    pub fn validate(&self) -> Result<()> {
        match self.close {
            Some(close) if close < self.open => Err(Error::InvalidIssue {
                open: self.open.to_string(),
                close: close.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
