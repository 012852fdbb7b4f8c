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

//! Daily gas and carbon settlement prices.
//!
//! Both products live in one workbook, on the `Gas` and `Carbon` sheets, and
//! are written to the same table keyed by product.

use calamine::{CellErrorType, Data, Range};
use powerdata_types::DailyPriceRecord;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use super::file_label;
use crate::error::ExtractionError;
use crate::numeric::to_numeric_opt;
use crate::sheet::{DatedRow, SheetSelector, dated_rows, open_sheet};
use crate::store::Store;

pub const GAS_SHEET: &str = "Gas";
pub const GAS_PRODUCT_CODE: &str = "Z1";
pub const CARBON_SHEET: &str = "Carbon";
pub const CARBON_PRODUCT_CODE: &str = "Carbon";

mod gas {
    pub const FIRST_DATA_ROW: u32 = 4;
    /// Column A carries the price type label
    pub const LABEL_COLUMN: u32 = 0;
    /// Column D
    pub const DATE_COLUMN: u32 = 3;
    /// Column E
    pub const PRICE_COLUMN: u32 = 4;
}

mod carbon {
    pub const FIRST_DATA_ROW: u32 = 5;
    /// Column A
    pub const DATE_COLUMN: u32 = 0;
    /// Column B
    pub const PRICE_COLUMN: u32 = 1;
}

/// Reason a dated row is left out of the load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowRejection {
    #[error("does not recognize price type '{label}' in row {row}: {error}")]
    UnrecognizedPriceType {
        row: u32,
        label: String,
        error: CellErrorType,
    },
}

/// Rows written per product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyPriceCounts {
    pub gas: usize,
    pub carbon: usize,
}

/// Gas quote for one dated row.
///
/// A price cell holding a spreadsheet error (`#N/A` from a failed lookup in
/// the workbook) rejects the row.
pub fn gas_quote(row: &DatedRow<'_>, product_id: i64) -> Result<DailyPriceRecord, RowRejection> {
    let price = row.cell(gas::PRICE_COLUMN);
    if let Some(Data::Error(error)) = price {
        return Err(RowRejection::UnrecognizedPriceType {
            row: row.sheet_row(),
            label: row
                .cell(gas::LABEL_COLUMN)
                .map(ToString::to_string)
                .unwrap_or_default(),
            error: error.clone(),
        });
    }

    Ok(DailyPriceRecord::settlement(
        row.date(),
        product_id,
        to_numeric_opt(price),
    ))
}

/// Gas quotes from the `Gas` sheet; rejected rows are logged and skipped.
#[must_use]
pub fn extract_gas_prices(sheet: &Range<Data>, product_id: i64) -> Vec<DailyPriceRecord> {
    dated_rows(sheet, gas::FIRST_DATA_ROW, gas::DATE_COLUMN)
        .filter_map(|row| match gas_quote(&row, product_id) {
            Ok(quote) => Some(quote),
            Err(rejection) => {
                warn!("{rejection}");
                None
            }
        })
        .collect()
}

/// Carbon quotes from the `Carbon` sheet.
#[must_use]
pub fn extract_carbon_prices(sheet: &Range<Data>, product_id: i64) -> Vec<DailyPriceRecord> {
    dated_rows(sheet, carbon::FIRST_DATA_ROW, carbon::DATE_COLUMN)
        .map(|row| {
            DailyPriceRecord::settlement(
                row.date(),
                product_id,
                to_numeric_opt(row.cell(carbon::PRICE_COLUMN)),
            )
        })
        .collect()
}

/// Replace the gas and carbon histories with the content of `path`.
///
/// The passes are independent: the gas history is already replaced when the
/// carbon pass starts.
pub fn populate_daily_prices(
    store: &mut Store,
    path: &Path,
) -> Result<DailyPriceCounts, ExtractionError> {
    info!("Reading gas prices from '{}'", file_label(path));
    let sheet = open_sheet(path, SheetSelector::Named(GAS_SHEET))?;
    let product_id = store.product_id(GAS_PRODUCT_CODE)?;

    info!("Processing gas cash prices");
    let quotes = extract_gas_prices(&sheet, product_id);
    let gas = store.replace_daily_prices(product_id, &quotes)?;
    info!("Stored {gas} daily prices for {GAS_PRODUCT_CODE}");

    info!("Reading carbon prices from '{}'", file_label(path));
    let sheet = open_sheet(path, SheetSelector::Named(CARBON_SHEET))?;
    let product_id = store.product_id(CARBON_PRODUCT_CODE)?;

    info!("Processing carbon prices");
    let quotes = extract_carbon_prices(&sheet, product_id);
    let carbon = store.replace_daily_prices(product_id, &quotes)?;
    info!("Stored {carbon} daily prices for {CARBON_PRODUCT_CODE}");

    Ok(DailyPriceCounts { gas, carbon })
}
