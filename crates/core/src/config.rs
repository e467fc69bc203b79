// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Burndown configuration loading from TOML and JSON files.
//!
//! ```toml
//! skip_weekend = true
//! skip_holiday = true
//! skipped_days = ["2017-10-31"]
//!
//! [[holidays]]
//! date = "2019-09-16"
//! name = "Respect for the Aged Day"
//!
//! [[holidays]]
//! date = "2019-01-01"
//! recurring = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::holiday::{Holiday, HolidayList};
use crate::skip::{SkipConfig, SkipPolicy};

const CONFIG_TOML_FILE: &str = "burndown.toml";
const CONFIG_JSON_FILE: &str = "burndown.json";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurndownConfig {
    #[serde(flatten)]
    pub skip: SkipConfig,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl BurndownConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse TOML: {e}")))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse JSON: {e}")))
    }

    /// Builds the skip policy backed by the configured holidays.
    pub fn into_policy(self) -> SkipPolicy<HolidayList> {
        SkipPolicy::with_holidays(self.skip, HolidayList::new(self.holidays))
    }
}

/// Load configuration from `burndown.toml` or `burndown.json` in `work_dir`.
///
/// Returns `None` if neither file exists. Having both is an error.
pub fn load_config(work_dir: &Path) -> Result<Option<BurndownConfig>> {
    let toml_path = work_dir.join(CONFIG_TOML_FILE);
    let json_path = work_dir.join(CONFIG_JSON_FILE);

    let config = match (toml_path.exists(), json_path.exists()) {
        (false, false) => return Ok(None),
        (true, true) => {
            return Err(Error::Config(format!(
                "both {CONFIG_TOML_FILE} and {CONFIG_JSON_FILE} found in {}\n  hint: keep only one",
                work_dir.display()
            )))
        }
        (true, false) => {
            let content = fs::read_to_string(&toml_path)
                .map_err(|e| Error::Config(format!("failed to read {CONFIG_TOML_FILE}: {e}")))?;
            BurndownConfig::from_toml_str(&content)?
        }
        (false, true) => {
            let content = fs::read_to_string(&json_path)
                .map_err(|e| Error::Config(format!("failed to read {CONFIG_JSON_FILE}: {e}")))?;
            BurndownConfig::from_json_str(&content)?
        }
    };

    tracing::debug!(
        dir = %work_dir.display(),
        skipped_days = config.skip.skipped_days.len(),
        holidays = config.holidays.len(),
        "loaded burndown config"
    );
    Ok(Some(config))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
