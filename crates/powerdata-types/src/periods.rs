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
use std::fmt;

/// Tariff classification of a single hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    #[serde(rename = "On-Peak")]
    OnPeak,
    #[serde(rename = "Off-Peak")]
    OffPeak,
}

impl PeriodType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnPeak => "On-Peak",
            Self::OffPeak => "Off-Peak",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Astronomical season, using fixed boundary dates independent of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Dec 21 - Mar 20
    Winter,
    /// Mar 21 - Jun 20
    Spring,
    /// Jun 21 - Sep 22
    Summer,
    /// Sep 23 - Dec 20
    Autumn,
}

impl Season {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of one hour of the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPeriod {
    pub date: NaiveDate,
    /// Hour ending, 1-24
    pub hour: u32,
    /// Start of the hour
    pub timestamp: NaiveDateTime,
    /// Hour of the week, 1 (Monday 00:00) to 168 (Sunday 23:00)
    pub week_hour: u32,
    pub period_type: PeriodType,
}

/// Attributes of one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPeriod {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub iso_week: u32,
    /// 1 = Monday .. 7 = Sunday
    pub weekday: u32,
    /// e.g. `Q20241`
    pub quarter_id: String,
    /// e.g. `M202401`
    pub month_id: String,
    /// e.g. `W202401`
    pub week_id: String,
    pub season: Season,
}
