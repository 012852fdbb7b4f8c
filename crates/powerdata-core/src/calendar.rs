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

//! Calendar attributes: seasons, peak windows and the hourly/daily period rows.

use calamine::Data;
use chrono::{Datelike, NaiveDate, NaiveTime};
use powerdata_types::{DailyPeriod, HourlyPeriod, PeriodType, Season};

use crate::error::{ExtractionError, UtilityTableError};
use crate::sheet::cell_datetime;

/// Season boundaries as (month, day) of the first day, in calendar order.
/// Feb 29 sits inside winter, so every real date maps to exactly one season.
const SEASON_STARTS: [((u32, u32), Season); 4] = [
    ((3, 21), Season::Spring),
    ((6, 21), Season::Summer),
    ((9, 23), Season::Autumn),
    ((12, 21), Season::Winter),
];

/// Season of a calendar date; the year is ignored.
#[must_use]
pub fn season_of<D: Datelike>(date: &D) -> Season {
    let month_day = (date.month(), date.day());
    SEASON_STARTS
        .iter()
        .rev()
        .find(|(start, _)| month_day >= *start)
        .map_or(Season::Winter, |(_, season)| *season)
}

/// Season of a spreadsheet cell, which must hold a date.
pub fn season_of_cell(cell: &Data) -> Result<Season, ExtractionError> {
    cell_datetime(cell)
        .map(|stamp| season_of(&stamp))
        .ok_or_else(|| ExtractionError::InvalidInput(format!("'{cell}' is not a valid date")))
}

/// Inclusive hour-of-day window (0-23) during which weekdays are On-Peak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start: u32,
    end: u32,
}

impl PeakWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, UtilityTableError> {
        for hour in [start, end] {
            if hour > 23 {
                return Err(UtilityTableError::InvalidPeakHour(hour));
            }
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Classify an hour of day (0-23) on a given date.
    /// Sundays are Off-Peak all day; Saturdays follow the weekday window.
    #[must_use]
    pub fn classify(&self, date: NaiveDate, hour_of_day: u32) -> PeriodType {
        let weekday = date.weekday().num_days_from_monday();
        if weekday < 6 && (self.start..=self.end).contains(&hour_of_day) {
            PeriodType::OnPeak
        } else {
            PeriodType::OffPeak
        }
    }
}

/// Inclusive date range for the utility tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, UtilityTableError> {
        if start > end {
            return Err(UtilityTableError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// One row per hour of every day in the range.
#[must_use]
pub fn hourly_periods(range: DateRange, window: PeakWindow) -> Vec<HourlyPeriod> {
    range
        .days()
        .flat_map(|date| {
            let weekday = date.weekday().num_days_from_monday();
            (0..24).map(move |hour_of_day| HourlyPeriod {
                date,
                hour: hour_of_day + 1,
                timestamp: date.and_time(NaiveTime::MIN) + chrono::Duration::hours(i64::from(hour_of_day)),
                week_hour: weekday * 24 + hour_of_day + 1,
                period_type: window.classify(date, hour_of_day),
            })
        })
        .collect()
}

/// One row per day in the range.
#[must_use]
pub fn daily_periods(range: DateRange) -> Vec<DailyPeriod> {
    range.days().map(daily_period).collect()
}

fn daily_period(date: NaiveDate) -> DailyPeriod {
    let year = date.year();
    let month = date.month();
    // Week ids pair the calendar year with the ISO week number
    let iso_week = date.iso_week().week();
    let quarter = match month {
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    };

    DailyPeriod {
        date,
        year,
        month,
        iso_week,
        weekday: date.weekday().number_from_monday(),
        quarter_id: format!("Q{year}{quarter}"),
        month_id: format!("M{year}{month:02}"),
        week_id: format!("W{year}{iso_week:02}"),
        season: season_of(&date),
    }
}
