// ABOUTME: Workout intelligence crate for muscle-balance analysis and profile statistics
// ABOUTME: Exercise catalog, injectable clock, tunable thresholds, and the analyzer itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Pure computation over [`WorkoutRecord`](ironlog_core::models::WorkoutRecord)
//! lists. Nothing here performs I/O except loading an exercise catalog from a
//! file on request.
//!
//! ## Modules
//!
//! - **`balance_analyzer`**: region status, push/pull ratio, strength scores, findings
//! - **membership**: exercise name to body region catalog
//! - **config**: thresholds and scoring weights with environment overrides
//! - **clock**: time source injected into anything that depends on "now"
//! - **stats**: totals and streaks for a profile summary

/// Muscle-balance analysis
pub mod balance_analyzer;

/// Injectable time sources
pub mod clock;

/// Analysis thresholds and scoring configuration
pub mod config;

/// Analysis error types
pub mod errors;

/// Exercise to body region catalog
pub mod membership;

/// Profile statistics
pub mod stats;

pub use balance_analyzer::{
    push_pull_ratio, AnalysisReport, BalanceFinding, FindingKind, MovementClassification,
    PushPullBalance, RegionStatus, StrengthScoreBreakdown, WorkoutAnalyzer,
};
pub use clock::{Clock, FixedClock, FnClock, SystemClock};
pub use config::{BalanceAnalysisConfig, BalanceThresholds, ConfigError, StrengthScoring};
pub use errors::AnalysisError;
pub use membership::{CategoryMembership, MembershipError};
pub use stats::{WorkoutStats, WorkoutStatsCalculator};
