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

//! Workbook access shared by the extractors.
//!
//! Positions are absolute sheet coordinates: row 0 is the first row of the
//! sheet and column 0 is column A, no matter where the used range starts.

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

use crate::error::ExtractionError;

/// Which sheet of a workbook to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSelector<'a> {
    First,
    Named(&'a str),
}

/// Open a workbook (xlsx, xlsm, xlsb, xls or ods) and load one sheet.
pub fn open_sheet(path: &Path, selector: SheetSelector<'_>) -> Result<Range<Data>, ExtractionError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| ExtractionError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    let name = match selector {
        SheetSelector::First => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ExtractionError::NoSheets {
                path: path.to_path_buf(),
            })?,
        SheetSelector::Named(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(ExtractionError::MissingSheet {
                    path: path.to_path_buf(),
                    sheet: name.to_owned(),
                });
            }
            name.to_owned()
        }
    };

    workbook
        .worksheet_range(&name)
        .map_err(|source| ExtractionError::Workbook {
            path: path.to_path_buf(),
            source,
        })
}

/// Date-time held by a date cell.
///
/// Only genuine date cells qualify: Excel serials carrying a date format and
/// ISO text written by OpenDocument files. Plain numbers, strings and
/// durations are not dates.
#[must_use]
pub fn cell_datetime(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(value) if value.is_datetime() => value.as_datetime(),
        Data::DateTimeIso(text) => parse_iso_datetime(text),
        _ => None,
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    text.parse::<NaiveDateTime>().ok().or_else(|| {
        text.parse::<NaiveDate>()
            .ok()
            .map(|date| date.and_time(chrono::NaiveTime::MIN))
    })
}

/// A sheet row whose date column holds a date
#[derive(Debug, Clone, Copy)]
pub struct DatedRow<'a> {
    range: &'a Range<Data>,
    /// Absolute row index (0-based)
    pub row: u32,
    pub stamp: NaiveDateTime,
}

impl<'a> DatedRow<'a> {
    /// Cell at an absolute column of this row, `None` outside the used range.
    #[must_use]
    pub fn cell(&self, column: u32) -> Option<&'a Data> {
        self.range.get_value((self.row, column))
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.stamp.date()
    }

    /// Row number as shown by spreadsheet applications (1-based)
    #[must_use]
    pub fn sheet_row(&self) -> u32 {
        self.row + 1
    }
}

/// Rows from `first_row` to the end of the sheet whose `date_column` holds a
/// date. Headers, notes, totals and blank lines fall out of the scan.
pub fn dated_rows(
    range: &Range<Data>,
    first_row: u32,
    date_column: u32,
) -> impl Iterator<Item = DatedRow<'_>> {
    let end_row = range.end().map_or(0, |(row, _)| row.saturating_add(1));
    (first_row..end_row).filter_map(move |row| {
        let stamp = range.get_value((row, date_column)).and_then(cell_datetime)?;
        Some(DatedRow { range, row, stamp })
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn test_only_date_cells_are_dates() {
        let stamp = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(cell_datetime(&excel_date(2024, 5, 1)), Some(stamp));
        assert_eq!(
            cell_datetime(&Data::DateTimeIso("2024-05-01".to_owned())),
            Some(stamp)
        );
        assert_eq!(cell_datetime(&Data::Float(45413.0)), None);
        assert_eq!(cell_datetime(&Data::String("2024-05-01".to_owned())), None);
        assert_eq!(cell_datetime(&Data::Empty), None);

        let duration = Data::DateTime(ExcelDateTime::new(
            0.5,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_datetime(&duration), None);
    }

    #[test]
    fn test_iso_datetime_text() {
        let parsed = cell_datetime(&Data::DateTimeIso("2024-05-01T14:37:00".to_owned()));
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(14, 37, 0)
        );
    }

    #[test]
    fn test_dated_rows_skip_headers_and_footers() {
        let mut sheet = blank_sheet(6, 2);
        sheet.set_value((0, 1), Data::String("Date".to_owned()));
        sheet.set_value((1, 1), excel_date(2024, 1, 1));
        sheet.set_value((2, 1), excel_date(2024, 1, 2));
        sheet.set_value((3, 1), Data::String("Subtotal".to_owned()));
        sheet.set_value((5, 1), excel_date(2024, 1, 3));
        sheet.set_value((6, 1), Data::Float(45000.0));

        let rows: Vec<u32> = dated_rows(&sheet, 0, 1).map(|r| r.row).collect();
        assert_eq!(rows, [1, 2, 5]);

        let from_third: Vec<u32> = dated_rows(&sheet, 2, 1).map(|r| r.row).collect();
        assert_eq!(from_third, [2, 5]);
    }

    #[test]
    fn test_positions_are_absolute() {
        // Used range starting at C3, as calamine reports for sparse sheets
        let mut sheet: Range<Data> = Range::new((2, 2), (3, 3));
        sheet.set_value((3, 2), excel_date(2024, 2, 1));
        sheet.set_value((3, 3), Data::Float(9.5));

        let rows: Vec<_> = dated_rows(&sheet, 0, 2).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sheet_row(), 4);
        assert_eq!(rows[0].cell(3), Some(&Data::Float(9.5)));
        assert_eq!(rows[0].cell(7), None);
    }

    #[test]
    fn test_empty_sheet_has_no_rows() {
        let sheet: Range<Data> = Range::empty();
        assert_eq!(dated_rows(&sheet, 0, 0).count(), 0);
    }
}
