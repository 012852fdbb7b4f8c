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

//! Client data extractors.
//!
//! Each extractor is bound to one fixed spreadsheet layout. Column positions
//! are contractual: a layout change extracts the wrong cells or skips rows, it
//! is not detected.

pub mod daily_prices;
pub mod generation;
pub mod hourly_prices;

use std::path::Path;
use tracing::info;

use crate::config::ClientSources;
use crate::error::ExtractionError;
use crate::store::Store;

pub use daily_prices::{DailyPriceCounts, populate_daily_prices};
pub use generation::populate_generation;
pub use hourly_prices::populate_hourly_prices;

/// Rows written per client data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientDataCounts {
    pub hourly_prices: usize,
    pub gas_prices: usize,
    pub carbon_prices: usize,
    pub generation: usize,
}

/// Load every client spreadsheet: hourly prices, daily prices, generation.
///
/// Each source replaces the history of its own product or plant. A failure
/// aborts the remaining sources; sources already loaded stay committed.
pub fn populate_client_data(
    store: &mut Store,
    sources: &ClientSources,
) -> Result<ClientDataCounts, ExtractionError> {
    info!("Populating data associated with generating assets");

    let hourly_prices = populate_hourly_prices(store, &sources.prices.hourly)?;
    let daily = populate_daily_prices(store, &sources.prices.daily)?;
    let generation = populate_generation(store, &sources.generation)?;

    Ok(ClientDataCounts {
        hourly_prices,
        gas_prices: daily.gas,
        carbon_prices: daily.carbon,
        generation,
    })
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
