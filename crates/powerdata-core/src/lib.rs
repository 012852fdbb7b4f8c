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

//! Loads client spreadsheets (prices, generation) into a SQLite dataset and
//! builds the calendar utility tables used by downstream analyses.

pub mod calendar;
pub mod config;
pub mod error;
pub mod extract;
pub mod numeric;
pub mod pipeline;
pub mod sheet;
pub mod store;
pub mod utility_tables;

pub use config::DatasetConfig;
pub use error::{ConfigError, DatasetError, ExtractionError, Result, UtilityTableError};
pub use pipeline::{RunOptions, RunReport, build_dataset};
pub use store::Store;
