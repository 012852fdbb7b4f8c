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

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Hourly spot price for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Start of the delivery hour
    pub timestamp: NaiveDateTime,
    pub product_id: i64,
    pub price: f64,
}

/// Daily quote for one product.
///
/// The source sheets carry a single settlement value, so `bid` and `ask`
/// always hold the same number and both sizes stay at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPriceRecord {
    pub date: NaiveDate,
    pub product_id: i64,
    pub bid: f64,
    pub ask: f64,
    pub bid_size: i64,
    pub ask_size: i64,
}

impl DailyPriceRecord {
    /// Build a quote from a single settlement value.
    #[must_use]
    pub fn settlement(date: NaiveDate, product_id: i64, value: f64) -> Self {
        Self {
            date,
            product_id,
            bid: value,
            ask: value,
            bid_size: 0,
            ask_size: 0,
        }
    }
}

/// Metered generation of one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Reading time truncated to the whole hour
    pub timestamp: NaiveDateTime,
    pub plant_id: i64,
    /// Generated energy (MWh)
    pub generation: f64,
}
