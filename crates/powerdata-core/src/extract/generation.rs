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

//! Metered generation of the client's plant.

use calamine::{Data, Range};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use powerdata_types::GenerationRecord;
use std::path::Path;
use tracing::info;

use super::file_label;
use crate::error::ExtractionError;
use crate::numeric::to_numeric_opt;
use crate::sheet::{SheetSelector, dated_rows, open_sheet};
use crate::store::Store;

/// Reference name of the generating plant
pub const PLANT_NAME: &str = "PP";

const FIRST_DATA_ROW: u32 = 4;
/// Column B
const TIMESTAMP_COLUMN: u32 = 1;
/// Column C
const GENERATION_COLUMN: u32 = 2;

fn truncate_to_hour(stamp: NaiveDateTime) -> NaiveDateTime {
    stamp.date().and_time(NaiveTime::MIN) + Duration::hours(i64::from(stamp.hour()))
}

/// One record per reading, stamped with the start of its hour.
///
/// Sub-hourly readings are not aggregated: several records may share the
/// same hour.
#[must_use]
pub fn extract_generation(sheet: &Range<Data>, plant_id: i64) -> Vec<GenerationRecord> {
    dated_rows(sheet, FIRST_DATA_ROW, TIMESTAMP_COLUMN)
        .map(|row| GenerationRecord {
            timestamp: truncate_to_hour(row.stamp),
            plant_id,
            generation: to_numeric_opt(row.cell(GENERATION_COLUMN)),
        })
        .collect()
}

/// Replace the plant's generation history with the content of `path`.
pub fn populate_generation(store: &mut Store, path: &Path) -> Result<usize, ExtractionError> {
    info!("Reading generation from '{}'", file_label(path));
    let sheet = open_sheet(path, SheetSelector::First)?;

    let plant_id = store.plant_id(PLANT_NAME)?;

    info!("Processing generation for {PLANT_NAME}");
    let records = extract_generation(&sheet, plant_id);
    let written = store.replace_generation(plant_id, &records)?;
    info!("Stored {written} generation readings for {PLANT_NAME}");

    Ok(written)
}
