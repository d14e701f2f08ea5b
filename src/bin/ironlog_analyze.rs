// ABOUTME: Command-line front end for the workout balance analyzer
// ABOUTME: Reads workout records as JSON and prints the analysis report (and optional stats) as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
//!
//! Usage:
//! ```bash
//! # Analyze a file of records over the default window
//! ironlog-analyze --input workouts.json
//!
//! # Read from stdin, custom catalog, frozen clock, include profile stats
//! cat workouts.json | ironlog-analyze --catalog catalog.json --now 2025-05-01T18:00:00Z --stats
//! ```

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use ironlog::config::RuntimeConfig;
use ironlog::errors::AppError;
use ironlog::intelligence::{
    AnalysisError, AnalysisReport, Clock, FixedClock, SystemClock, WorkoutStats,
    WorkoutStatsCalculator,
};
use ironlog::models::WorkoutRecord;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "ironlog-analyze",
    about = "Analyze muscle balance across logged workouts",
    long_about = "Reads a JSON array of workout records and prints per-region status, push/pull balance, and paired warnings and recommendations as JSON."
)]
struct Cli {
    /// JSON file of workout records ("-" or omitted reads stdin)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Normalization window in days (defaults to configuration)
    #[arg(long, short = 'w')]
    window_days: Option<u32>,

    /// JSON exercise catalog replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Freeze "now" at an RFC 3339 instant
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Also compute profile statistics
    #[arg(long)]
    stats: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<WorkoutStats>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(exit_code = code, "ironlog-analyze failed: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = RuntimeConfig::from_env()?.with_catalog_path(cli.catalog.clone());

    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let clock: Arc<dyn Clock> = match cli.now {
        Some(instant) => Arc::new(FixedClock::new(instant)),
        None => Arc::new(SystemClock),
    };
    let analyzer = config.build_analyzer_with_clock(Arc::clone(&clock))?;
    let window_days = cli
        .window_days
        .unwrap_or(analyzer.config().default_window_days);

    let records = read_records(cli.input.as_deref())?;
    info!(records = records.len(), window_days, "Analyzing workout records");

    let output = match analyzer.analyze(&records, window_days) {
        Ok(report) => {
            let stats = cli
                .stats
                .then(|| WorkoutStatsCalculator::new(clock).calculate(&records));
            serde_json::to_value(AnalyzeOutput { report, stats }).map_err(AppError::from)?
        }
        Err(AnalysisError::InsufficientData) => json!({
            "status": "insufficient_data",
            "message": "No workouts logged yet. Log a few sessions to see your muscle balance.",
        }),
    };

    let rendered = if cli.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .map_err(AppError::from)?;
    println!("{rendered}");

    Ok(())
}

fn read_records(input: Option<&Path>) -> Result<Vec<WorkoutRecord>> {
    let contents = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|err| AppError::from(err).with_resource_id(path.display().to_string()))?,
        _ => io::read_to_string(io::stdin()).map_err(AppError::from)?,
    };

    let records = serde_json::from_str(&contents).map_err(|err| {
        AppError::invalid_format("Input must be a JSON array of workout records").with_source(err)
    })?;
    Ok(records)
}
