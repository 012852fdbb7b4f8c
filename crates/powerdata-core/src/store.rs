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

//! SQLite access for the dataset builder.
//!
//! The schema is owned by the SQL scripts listed in the configuration; this
//! module only looks up reference ids and replaces rows.

use rusqlite::{Connection, OptionalExtension, Params, Statement, params};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DatasetError, ExtractionError};
use powerdata_types::{DailyPeriod, DailyPriceRecord, GenerationRecord, HourlyPeriod, PriceRecord};

const PRODUCTS_TABLE: &str = "tbl_ref_price_products";
const PLANTS_TABLE: &str = "tbl_ref_power_plants";

/// Single database connection used for the whole run
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the database file
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        Connection::open(path).map(Self::from_connection)
    }

    pub fn in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(Self::from_connection)
    }

    #[must_use]
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Execute every statement of a SQL file as one batch.
    pub fn run_script(&self, path: &Path) -> Result<(), DatasetError> {
        let sql = std::fs::read_to_string(path).map_err(|source| DatasetError::ScriptRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.conn
            .execute_batch(&sql)
            .map_err(|source| DatasetError::ScriptExecute {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Id of a price product, e.g. `DAH`
    pub fn product_id(&self, code: &str) -> Result<i64, ExtractionError> {
        self.lookup_id(
            PRODUCTS_TABLE,
            "SELECT id FROM tbl_ref_price_products WHERE product = ?1",
            code,
        )
    }

    /// Id of a generating plant
    pub fn plant_id(&self, name: &str) -> Result<i64, ExtractionError> {
        self.lookup_id(
            PLANTS_TABLE,
            "SELECT id FROM tbl_ref_power_plants WHERE name = ?1",
            name,
        )
    }

    fn lookup_id(&self, table: &'static str, sql: &str, key: &str) -> Result<i64, ExtractionError> {
        let id = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?
            .ok_or_else(|| ExtractionError::MissingReference {
                table,
                key: key.to_owned(),
            })?;
        debug!("Resolved {key} in {table} to id {id}");
        Ok(id)
    }

    pub fn replace_intraday_prices(
        &mut self,
        product_id: i64,
        records: &[PriceRecord],
    ) -> rusqlite::Result<usize> {
        self.replace_rows(
            "DELETE FROM tbl_hist_intradayprices WHERE product_id = ?1",
            [product_id],
            "INSERT INTO tbl_hist_intradayprices (datehour, product_id, price)
             VALUES (?1, ?2, ?3)",
            records,
            |stmt, r| stmt.execute(params![r.timestamp, r.product_id, r.price]),
        )
    }

    pub fn replace_daily_prices(
        &mut self,
        product_id: i64,
        records: &[DailyPriceRecord],
    ) -> rusqlite::Result<usize> {
        self.replace_rows(
            "DELETE FROM tbl_hist_dailyprices WHERE product_id = ?1",
            [product_id],
            "INSERT INTO tbl_hist_dailyprices (date, product_id, bid, ask, bid_size, ask_size)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            records,
            |stmt, r| {
                stmt.execute(params![
                    r.date,
                    r.product_id,
                    r.bid,
                    r.ask,
                    r.bid_size,
                    r.ask_size
                ])
            },
        )
    }

    pub fn replace_generation(
        &mut self,
        plant_id: i64,
        records: &[GenerationRecord],
    ) -> rusqlite::Result<usize> {
        self.replace_rows(
            "DELETE FROM tbl_hist_generation WHERE plant_id = ?1",
            [plant_id],
            "INSERT INTO tbl_hist_generation (datehour, plant_id, generation)
             VALUES (?1, ?2, ?3)",
            records,
            |stmt, r| stmt.execute(params![r.timestamp, r.plant_id, r.generation]),
        )
    }

    /// Deletes every existing row, whatever its date, before inserting.
    pub fn replace_hourly_periods(&mut self, rows: &[HourlyPeriod]) -> rusqlite::Result<usize> {
        self.replace_rows(
            "DELETE FROM tbl_util_hourly_periods",
            params![],
            "INSERT INTO tbl_util_hourly_periods (date, hour, datehour, weekhour, periodtype)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rows,
            |stmt, r| {
                stmt.execute(params![
                    r.date,
                    r.hour,
                    r.timestamp,
                    r.week_hour,
                    r.period_type.as_str()
                ])
            },
        )
    }

    /// Deletes every existing row, whatever its date, before inserting.
    pub fn replace_daily_periods(&mut self, rows: &[DailyPeriod]) -> rusqlite::Result<usize> {
        self.replace_rows(
            "DELETE FROM tbl_util_daily_periods",
            params![],
            "INSERT INTO tbl_util_daily_periods
                (Date, Year, Month, Week, Weekday, QuarterID, MonthID, WeekID, Season)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rows,
            |stmt, r| {
                stmt.execute(params![
                    r.date,
                    r.year,
                    r.month,
                    r.iso_week,
                    r.weekday,
                    r.quarter_id,
                    r.month_id,
                    r.week_id,
                    r.season.as_str()
                ])
            },
        )
    }

    /// Delete the scoped rows, then insert the batch.
    ///
    /// The delete commits on its own before the insert transaction starts, so
    /// a failed insert leaves the scope empty rather than restoring it.
    fn replace_rows<T, P: Params>(
        &mut self,
        delete_sql: &str,
        scope: P,
        insert_sql: &str,
        rows: &[T],
        bind: impl Fn(&mut Statement<'_>, &T) -> rusqlite::Result<usize>,
    ) -> rusqlite::Result<usize> {
        let deleted = self.conn.execute(delete_sql, scope)?;
        debug!("Deleted {deleted} previous rows");

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(insert_sql)?;
            for row in rows {
                bind(&mut stmt, row)?;
            }
        }
        tx.commit()?;

        info!("Inserted {} rows", rows.len());
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    const SCHEMA: &str = include_str!("../../../sql/schema.sql");
    const REFERENCE: &str = include_str!("../../../sql/reference.sql");

    fn store() -> Store {
        let store = Store::in_memory().unwrap();
        store.connection().execute_batch(SCHEMA).unwrap();
        store.connection().execute_batch(REFERENCE).unwrap();
        store
    }

    fn hour(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn count(store: &Store, sql: &str) -> i64 {
        store.connection().query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[test]
    fn test_reference_lookups() {
        let store = store();
        assert!(store.product_id("DAH").is_ok());
        assert!(store.product_id("Z1").is_ok());
        assert!(store.product_id("Carbon").is_ok());
        assert!(store.plant_id("PP").is_ok());

        let err = store.product_id("XYZ").unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingReference { table: "tbl_ref_price_products", ref key } if key == "XYZ"
        ));
    }

    #[test]
    fn test_replace_is_scoped_to_product() {
        let mut store = store();
        let first = vec![
            PriceRecord { timestamp: hour(1, 0), product_id: 1, price: 40.0 },
            PriceRecord { timestamp: hour(1, 1), product_id: 1, price: 41.0 },
        ];
        let other = vec![PriceRecord { timestamp: hour(1, 0), product_id: 2, price: 5.0 }];

        store.replace_intraday_prices(1, &first).unwrap();
        store.replace_intraday_prices(2, &other).unwrap();
        assert_eq!(count(&store, "SELECT COUNT(*) FROM tbl_hist_intradayprices"), 3);

        let second = vec![PriceRecord { timestamp: hour(2, 5), product_id: 1, price: 50.0 }];
        assert_eq!(store.replace_intraday_prices(1, &second).unwrap(), 1);

        assert_eq!(
            count(&store, "SELECT COUNT(*) FROM tbl_hist_intradayprices WHERE product_id = 1"),
            1
        );
        assert_eq!(
            count(&store, "SELECT COUNT(*) FROM tbl_hist_intradayprices WHERE product_id = 2"),
            1
        );

        let stored: (NaiveDateTime, f64) = store
            .connection()
            .query_row(
                "SELECT datehour, price FROM tbl_hist_intradayprices WHERE product_id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(stored, (hour(2, 5), 50.0));
    }

    #[test]
    fn test_utility_replace_clears_whole_table() {
        let mut store = store();
        store
            .connection()
            .execute(
                "INSERT INTO tbl_util_daily_periods
                    (Date, Year, Month, Week, Weekday, QuarterID, MonthID, WeekID, Season)
                 VALUES ('1999-01-01', 1999, 1, 53, 5, 'Q19991', 'M199901', 'W199953', 'winter')",
                [],
            )
            .unwrap();

        let day = DailyPeriod {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            year: 2024,
            month: 1,
            iso_week: 1,
            weekday: 1,
            quarter_id: "Q20241".to_owned(),
            month_id: "M202401".to_owned(),
            week_id: "W202401".to_owned(),
            season: powerdata_types::Season::Winter,
        };
        store.replace_daily_periods(&[day]).unwrap();

        let (date, season): (String, String) = store
            .connection()
            .query_row("SELECT Date, Season FROM tbl_util_daily_periods", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(date, "2024-01-01");
        assert_eq!(season, "winter");
        assert_eq!(count(&store, "SELECT COUNT(*) FROM tbl_util_daily_periods"), 1);
    }

    #[test]
    fn test_run_script_reports_path() {
        let store = Store::in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.sql");
        std::fs::write(&path, "CREATE TABLE oops (").unwrap();

        let err = store.run_script(&path).unwrap_err();
        assert!(matches!(err, DatasetError::ScriptExecute { .. }));
        assert!(err.to_string().contains("broken.sql"));

        let missing = store.run_script(&dir.path().join("missing.sql")).unwrap_err();
        assert!(matches!(missing, DatasetError::ScriptRead { .. }));
    }
}
