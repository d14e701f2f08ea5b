// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a fixed clock, and workout record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::intelligence::{FixedClock, WorkoutAnalyzer, WorkoutStatsCalculator};
use ironlog::models::{WorkoutRecord, WorkoutRecordBuilder};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Instant every fixture is anchored to: Thursday 2025-05-01 18:00 UTC
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap()
}

/// `days` whole days before [`test_now`]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    test_now() - Duration::days(days)
}

/// Analyzer with the built-in catalog, default config, and a clock frozen at [`test_now`]
pub fn create_test_analyzer() -> WorkoutAnalyzer {
    init_test_logging();
    WorkoutAnalyzer::default().with_clock(FixedClock::new(test_now()))
}

/// Stats calculator with a clock frozen at [`test_now`]
pub fn create_test_stats_calculator() -> WorkoutStatsCalculator {
    init_test_logging();
    WorkoutStatsCalculator::new(Arc::new(FixedClock::new(test_now())))
}

/// A typical working set of `category` at `occurred_at`
pub fn workout(category: &str, occurred_at: DateTime<Utc>) -> WorkoutRecord {
    WorkoutRecordBuilder::new(category, occurred_at)
        .load(100.0)
        .sets(3)
        .reps(10)
        .build()
}

/// One session of `category` on each of the last `days` days, most recent today
pub fn daily_workouts(category: &str, days: i64) -> Vec<WorkoutRecord> {
    (0..days).map(|day| workout(category, days_ago(day))).collect()
}

/// A week touching every region, ending today
pub fn balanced_week() -> Vec<WorkoutRecord> {
    vec![
        workout("Bench Press", days_ago(6)),
        workout("Barbell Row", days_ago(5)),
        workout("Squat", days_ago(4)),
        workout("Overhead Press", days_ago(3)),
        workout("Pull-ups", days_ago(2)),
        workout("Leg Press", days_ago(1)),
        workout("Plank", days_ago(0)),
    ]
}
