// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading issue records from JSON Lines files.
//!
//! Each non-empty line holds one issue: `{"open": "YYYY-MM-DD", "close": "YYYY-MM-DD"}`
//! with `close` omitted (or null) for issues that are still open.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Reads all issues from a JSONL file.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut issues = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(&line).map_err(|e| {
            Error::InvalidInput(format!("{}:{}: {e}", path.display(), index + 1))
        })?;
        issues.push(issue);
    }

    tracing::debug!(path = %path.display(), count = issues.len(), "read issues");
    Ok(issues)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
