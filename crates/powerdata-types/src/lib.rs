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

//! Row types shared by the PowerData extractors, the calendar generator and the store.

pub mod periods;
pub mod records;

pub use periods::{DailyPeriod, HourlyPeriod, PeriodType, Season};
pub use records::{DailyPriceRecord, GenerationRecord, PriceRecord};
