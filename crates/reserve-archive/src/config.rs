// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Configuration for the archive builder

use crate::error::{ArchiveError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://mimer.svk.se";

const ENV_DATA_DIR: &str = "RESERVE_ARCHIVE_DATA_DIR";
const ENV_BASE_URL: &str = "RESERVE_ARCHIVE_BASE_URL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("dist/data")
}

fn default_starting_year() -> i32 {
    2023
}

fn default_settlement_lag_days() -> u64 {
    2
}

fn default_min_hours() -> usize {
    // 2024-03-31 and a few other days are missing 1-2 hours
    22
}

fn default_grid_area() -> String {
    "SN4".to_owned()
}

fn default_3() -> u64 {
    3
}

fn default_10() -> u64 {
    10
}

fn default_30() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Base URL of the Mimer data service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding one `<year>.csv` archive per year
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// First year to archive
    #[serde(default = "default_starting_year")]
    pub starting_year: i32,

    /// Days before today that the source may not have published yet
    #[serde(default = "default_settlement_lag_days")]
    pub settlement_lag_days: u64,

    /// Minimum hourly samples per product before a day is accepted
    #[serde(default = "default_min_hours")]
    pub min_hours: usize,

    /// Grid area code selecting aFFR/mFFR rows
    #[serde(default = "default_grid_area")]
    pub grid_area: String,

    /// Pause between the three product downloads (seconds)
    #[serde(default = "default_3")]
    pub query_delay_secs: u64,

    /// Pause after a full-year download (seconds)
    #[serde(default = "default_10")]
    pub year_delay_secs: u64,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_30")]
    pub request_timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_dir: default_data_dir(),
            starting_year: default_starting_year(),
            settlement_lag_days: default_settlement_lag_days(),
            min_hours: default_min_hours(),
            grid_area: default_grid_area(),
            query_delay_secs: default_3(),
            year_delay_secs: default_10(),
            request_timeout_secs: default_30(),
        }
    }
}

impl ArchiveConfig {
    /// Load configuration from an optional TOML file, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    ArchiveError::Config(format!("Failed to read {}: {e}", path.display()))
                })?;
                let config = Self::from_toml_str(&content)?;
                info!("Loaded configuration from {}", path.display());
                config
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ArchiveError::Config(format!("Failed to parse config: {e}")))
    }

    /// Override fields from `RESERVE_ARCHIVE_*` variables resolved by `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ArchiveError::Config("base_url must not be empty".to_owned()));
        }
        if self.grid_area.trim().is_empty() {
            return Err(ArchiveError::Config("grid_area must not be empty".to_owned()));
        }
        if !(1..=25).contains(&self.min_hours) {
            return Err(ArchiveError::Config(format!(
                "min_hours must be between 1 and 25, got {}",
                self.min_hours
            )));
        }
        if NaiveDate::from_ymd_opt(self.starting_year, 1, 1).is_none() {
            return Err(ArchiveError::Config(format!(
                "starting_year {} is out of range",
                self.starting_year
            )));
        }
        Ok(())
    }

    /// Last day considered published: `today` minus the settlement lag
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(self.settlement_lag_days))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn query_delay(&self) -> Duration {
        Duration::from_secs(self.query_delay_secs)
    }

    pub fn year_delay(&self) -> Duration {
        Duration::from_secs(self.year_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
