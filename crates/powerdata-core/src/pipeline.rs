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

//! End-to-end dataset build: schema scripts, client data, utility tables.

use std::path::PathBuf;
use tracing::info;

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::extract::{ClientDataCounts, populate_client_data};
use crate::store::Store;
use crate::utility_tables::{UtilityCounts, create_utility_tables};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Run the schema scripts only
    pub create_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub scripts: Vec<PathBuf>,
    pub client: Option<ClientDataCounts>,
    pub utility: Option<UtilityCounts>,
}

/// Execute the configured SQL files in order.
pub fn run_schema_scripts(store: &Store, config: &DatasetConfig) -> Result<Vec<PathBuf>> {
    let mut executed = Vec::with_capacity(config.parameters.sql_files.len());
    for path in &config.parameters.sql_files {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        info!("Executing '{name}'");
        store.run_script(path)?;
        executed.push(path.clone());
    }
    Ok(executed)
}

/// Build the dataset into `store`.
///
/// Steps run in order and stop at the first failure; steps already
/// completed stay committed.
pub fn build_dataset(
    store: &mut Store,
    config: &DatasetConfig,
    options: RunOptions,
) -> Result<RunReport> {
    let mut report = RunReport {
        scripts: run_schema_scripts(store, config)?,
        ..RunReport::default()
    };
    if options.create_only {
        info!("Database created, skipping population");
        return Ok(report);
    }

    report.client = Some(populate_client_data(store, &config.client)?);

    let params = &config.parameters;
    let range = params.date_range()?;
    let window = params.peak_window()?;
    report.utility = Some(create_utility_tables(store, range, window)?);

    Ok(report)
}
