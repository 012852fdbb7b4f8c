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

//! Calendar utility tables: one row per hour and one row per day.

use tracing::info;

use crate::calendar::{DateRange, PeakWindow, daily_periods, hourly_periods};
use crate::error::UtilityTableError;
use crate::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtilityCounts {
    pub hourly: usize,
    pub daily: usize,
}

/// Replace both utility tables with rows covering `range`.
///
/// Existing rows are removed regardless of their dates.
pub fn create_utility_tables(
    store: &mut Store,
    range: DateRange,
    window: PeakWindow,
) -> Result<UtilityCounts, UtilityTableError> {
    info!("Creating utility tables");

    info!("Creating hourly table");
    let hourly = store.replace_hourly_periods(&hourly_periods(range, window))?;

    info!("Creating daily table");
    let daily = store.replace_daily_periods(&daily_periods(range))?;

    Ok(UtilityCounts { hourly, daily })
}
