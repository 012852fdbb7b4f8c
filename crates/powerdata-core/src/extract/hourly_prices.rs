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

//! Day-ahead power prices: one row per day, one column per hour.

use calamine::{Data, Range};
use chrono::{Duration, NaiveTime};
use powerdata_types::PriceRecord;
use std::path::Path;
use tracing::info;

use super::file_label;
use crate::error::ExtractionError;
use crate::numeric::numeric_value;
use crate::sheet::{SheetSelector, dated_rows, open_sheet};
use crate::store::Store;

/// Reference code of the day-ahead power product
pub const PRODUCT_CODE: &str = "DAH";

/// Row 1 holds the column headers
const FIRST_DATA_ROW: u32 = 1;
/// Column E
const DATE_COLUMN: u32 = 4;
/// Column G holds hour 0, column AD hour 23
const FIRST_HOUR_COLUMN: u32 = 6;
const HOURS_PER_DAY: u32 = 24;

/// Turn the price sheet into hourly records.
///
/// Hour cells without a number (blank, error, text markers such as `n.a.`)
/// are left out rather than stored as zero.
#[must_use]
pub fn extract_hourly_prices(sheet: &Range<Data>, product_id: i64) -> Vec<PriceRecord> {
    dated_rows(sheet, FIRST_DATA_ROW, DATE_COLUMN)
        .flat_map(|row| {
            let day_start = row.date().and_time(NaiveTime::MIN);
            (0..HOURS_PER_DAY).filter_map(move |hour| {
                let price = row.cell(FIRST_HOUR_COLUMN + hour).and_then(numeric_value)?;
                Some(PriceRecord {
                    timestamp: day_start + Duration::hours(i64::from(hour)),
                    product_id,
                    price,
                })
            })
        })
        .collect()
}

/// Replace the day-ahead price history with the content of `path`.
pub fn populate_hourly_prices(store: &mut Store, path: &Path) -> Result<usize, ExtractionError> {
    info!("Reading '{}'", file_label(path));
    let sheet = open_sheet(path, SheetSelector::First)?;

    let product_id = store.product_id(PRODUCT_CODE)?;

    info!("Processing power spot prices");
    let records = extract_hourly_prices(&sheet, product_id);
    let written = store.replace_intraday_prices(product_id, &records)?;
    info!("Stored {written} hourly prices for {PRODUCT_CODE}");

    Ok(written)
}
