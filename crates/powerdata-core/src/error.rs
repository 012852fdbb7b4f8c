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

//! Error types for dataset construction
//!
//! Only two severities exist: row-level problems are logged and skipped inside
//! the extractors, everything surfaced here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure while loading client spreadsheets
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("workbook {path} has no sheets")]
    NoSheets { path: PathBuf },

    #[error("sheet '{sheet}' not found in {path}")]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("no entry '{key}' in {table}")]
    MissingReference { table: &'static str, key: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Failure while generating the calendar utility tables
#[derive(Debug, Error)]
pub enum UtilityTableError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("peak hour {0} is outside 0-23")]
    InvalidPeakHour(u32),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read SQL script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to execute SQL script {path}: {source}")]
    ScriptExecute {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("error in parsing client's data: {0}")]
    ClientData(#[from] ExtractionError),

    #[error("error in creating utility tables: {0}")]
    UtilityTables(#[from] UtilityTableError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;
