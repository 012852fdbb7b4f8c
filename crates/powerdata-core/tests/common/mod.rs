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

//! Workbook fixtures and database helpers shared by the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use powerdata_core::Store;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

pub fn sql_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../sql")
}

pub fn schema_scripts() -> Vec<PathBuf> {
    vec![sql_dir().join("schema.sql"), sql_dir().join("reference.sql")]
}

/// File-backed store with schema and reference rows loaded
pub fn open_store(dir: &Path) -> Store {
    let store = Store::open(&dir.join("dataset.db")).unwrap();
    for script in schema_scripts() {
        store.run_script(&script).unwrap();
    }
    store
}

pub fn count(store: &Store, table: &str) -> i64 {
    store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Cell content for fixture sheets
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Stamp(NaiveDateTime),
}

fn write_row(sheet: &mut Worksheet, row: u32, cells: &[(u16, Cell<'_>)]) {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let stamp_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");
    for (column, cell) in cells {
        match cell {
            Cell::Text(text) => sheet.write_string(row, *column, *text),
            Cell::Number(value) => sheet.write_number(row, *column, *value),
            Cell::Date(value) => sheet.write_datetime_with_format(row, *column, value, &date_format),
            Cell::Stamp(value) => {
                sheet.write_datetime_with_format(row, *column, value, &stamp_format)
            }
        }
        .unwrap();
    }
}

/// Sheet rows keyed by absolute row index
pub type SheetRows<'a> = Vec<(u32, Vec<(u16, Cell<'a>)>)>;

/// Write a workbook with one sheet per `(name, rows)` entry
pub fn write_workbook(path: &Path, sheets: Vec<(&str, SheetRows<'_>)>) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).unwrap();
        for (row, cells) in rows {
            write_row(sheet, row, &cells);
        }
    }
    workbook.save(path).unwrap();
}
