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

use calamine::Data;

/// Numeric value of a cell, if it holds one.
///
/// Numbers, booleans and text that parses to a finite number qualify. Empty
/// cells, error values, dates and free text do not.
#[must_use]
pub fn numeric_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value).filter(|v| v.is_finite()),
        #[expect(clippy::cast_precision_loss)]
        Data::Int(value) => Some(*value as f64),
        Data::Bool(value) => Some(f64::from(u8::from(*value))),
        Data::String(text) => text.trim().parse().ok().filter(|v: &f64| v.is_finite()),
        Data::DateTime(_)
        | Data::DateTimeIso(_)
        | Data::DurationIso(_)
        | Data::Error(_)
        | Data::Empty => None,
    }
}

/// Coerce a spreadsheet cell to a number.
///
/// Never fails: anything that does not read as a finite number becomes `0.0`.
#[must_use]
pub fn to_numeric(cell: &Data) -> f64 {
    numeric_value(cell).unwrap_or_default()
}

/// Parse free text as a number, falling back to `0.0`.
///
/// `NaN` and infinities are not stored, so they fall back as well.
#[must_use]
pub fn parse_numeric(text: &str) -> f64 {
    text.trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .unwrap_or_default()
}

/// Same as [`to_numeric`] for a cell that may lie outside the used range.
#[must_use]
pub fn to_numeric_opt(cell: Option<&Data>) -> f64 {
    cell.map_or(0.0, to_numeric)
}
