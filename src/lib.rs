// ABOUTME: Main library entry point for the Ironlog workout analysis tools
// ABOUTME: Wires logging and runtime configuration around the core and intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Muscle-balance analysis and profile statistics for logged strength workouts.
//!
//! ## Architecture
//!
//! - **`ironlog_core`**: workout records, body regions, errors, constants
//! - **`ironlog_intelligence`**: the balance analyzer, exercise catalog, stats
//! - **config**: environment-driven runtime configuration
//! - **logging**: tracing subscriber setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use ironlog::intelligence::{FixedClock, WorkoutAnalyzer};
//! use ironlog::models::{BodyRegion, WorkoutRecord};
//!
//! let now = Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap();
//! let analyzer = WorkoutAnalyzer::default().with_clock(FixedClock::new(now));
//! let records = vec![
//!     WorkoutRecord::new("Bench Press", 185.0, 3, 8, now),
//!     WorkoutRecord::new("Pull-ups", 0.0, 3, 10, now),
//! ];
//!
//! let report = analyzer.analyze(&records, 30).unwrap();
//! assert!((report.push_pull_ratio - 1.0).abs() < f64::EPSILON);
//! assert_eq!(report.region(BodyRegion::Chest).unwrap().training_count, 1);
//! ```

/// Environment-driven runtime configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use ironlog_core::{constants, errors, models};

/// Re-export of the analysis crate
pub use ironlog_intelligence as intelligence;
