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

//! make-dataset: populate client data into a SQLite database.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use powerdata_core::{DatasetConfig, RunOptions, RunReport, Store, build_dataset};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "make-dataset")]
#[command(version, disable_version_flag = true)]
#[command(about = "Populates client's data into a SQLite database", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// SQLite database file (will be created if it doesn't exist)
    #[arg(short, long)]
    db: PathBuf,

    /// Log progress at info level
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Just create the database without populating it
    #[arg(long)]
    create_db: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!(
        "Populates client's data into a SQLite database (version {})",
        env!("CARGO_PKG_VERSION")
    );

    finish(run(&cli))
}

/// Exit status for a fatal error
const FAILURE_STATUS: u8 = 2;

fn finish(outcome: Result<RunReport>) -> ExitCode {
    match outcome {
        Ok(report) => {
            log_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(FAILURE_STATUS)
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport> {
    let config = DatasetConfig::from_file(&cli.config)
        .with_context(|| format!("Error in loading config {}", cli.config.display()))?;

    let mut store = Store::open(&cli.db)
        .with_context(|| format!("Failed to open database {}", cli.db.display()))?;

    let options = RunOptions {
        create_only: cli.create_db,
    };
    Ok(build_dataset(&mut store, &config, options)?)
}

fn log_summary(report: &RunReport) {
    info!("Executed {} SQL scripts", report.scripts.len());
    if let Some(client) = &report.client {
        info!(
            "Client data: {} hourly prices, {} gas prices, {} carbon prices, {} generation readings",
            client.hourly_prices, client.gas_prices, client.carbon_prices, client.generation
        );
    }
    if let Some(utility) = &report.utility {
        info!(
            "Utility tables: {} hourly periods, {} daily periods",
            utility.hourly, utility.daily
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["make-dataset", "-d", "out.db", "-V", "--create-db"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.db, PathBuf::from("out.db"));
        assert!(cli.verbose);
        assert!(cli.create_db);
    }

    #[test]
    fn test_db_is_required() {
        assert!(Cli::try_parse_from(["make-dataset", "-c", "other.toml"]).is_err());
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["make-dataset", "-v"]).map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_invalid_config_leaves_db_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(
            &config,
            r#"
[parameters]
start_date = "2021-01-01"
end_date = "2020-01-01"

[client.prices]
hourly = "hourly.xlsx"
daily = "daily.xlsx"

[client]
generation = "generation.xlsx"
"#,
        )
        .unwrap();
        let db = dir.path().join("dataset.db");
        let cli = Cli {
            config,
            db: db.clone(),
            verbose: false,
            create_db: false,
            version: None,
        };

        let outcome = run(&cli);

        assert!(outcome.is_err());
        assert!(!db.exists());
        assert_eq!(finish(outcome), ExitCode::from(2));
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("dataset.db");
        let cli = Cli {
            config: dir.path().join("absent.toml"),
            db: db.clone(),
            verbose: false,
            create_db: false,
            version: None,
        };

        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
        assert!(!db.exists());
    }
}
