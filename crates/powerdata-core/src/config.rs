// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of PowerData.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calendar::{DateRange, PeakWindow};
use crate::error::{ConfigError, UtilityTableError};

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub parameters: Parameters,
    pub client: ClientSources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameters {
    /// Schema scripts, executed in order
    #[serde(default)]
    pub sql_files: Vec<PathBuf>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// First On-Peak hour of day
    #[serde(default = "default_start_peak")]
    pub start_peak: u32,
    /// Last On-Peak hour of day, inclusive
    #[serde(default = "default_end_peak")]
    pub end_peak: u32,
}

/// Client spreadsheets
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSources {
    pub prices: PriceSources,
    pub generation: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceSources {
    pub hourly: PathBuf,
    pub daily: PathBuf,
}

fn default_start_peak() -> u32 {
    7
}

fn default_end_peak() -> u32 {
    22
}

impl DatasetConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let params = &self.parameters;
        if params.start_date > params.end_date {
            return Err(ConfigError::Invalid(format!(
                "parameters.start_date {} is after parameters.end_date {}",
                params.start_date, params.end_date
            )));
        }
        for (name, hour) in [("start_peak", params.start_peak), ("end_peak", params.end_peak)] {
            if hour > 23 {
                return Err(ConfigError::Invalid(format!(
                    "parameters.{name} must be an hour of day (0-23), got {hour}"
                )));
            }
        }
        Ok(())
    }
}

impl Parameters {
    pub fn date_range(&self) -> Result<DateRange, UtilityTableError> {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn peak_window(&self) -> Result<PeakWindow, UtilityTableError> {
        PeakWindow::new(self.start_peak, self.end_peak)
    }
}
