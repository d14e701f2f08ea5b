// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default analysis tunables and service identifiers for Ironlog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Constants module
//!
//! Every number here is a default. The analyzer reads its working values from
//! `BalanceAnalysisConfig`, which starts from these and may be overridden.

/// Defaults for muscle-balance analysis
pub mod analysis {
    /// Lookback window used to normalize volume when the caller gives none
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Push/pull ratio above which training is push-dominant
    pub const PUSH_DOMINANT_RATIO: f64 = 1.5;
    /// Push/pull ratio below which training is pull-dominant
    pub const PULL_DOMINANT_RATIO: f64 = 0.67;

    /// Days without a session before a trained region is reported as stale
    pub const STALE_REGION_DAYS: i64 = 7;
    /// Fraction of the window a region may be trained before overtraining is flagged
    pub const OVERTRAINING_WINDOW_FRACTION: f64 = 0.5;

    /// Frequency points awarded per session
    pub const FREQUENCY_POINTS_PER_SESSION: f64 = 10.0;
    /// Upper bound of the frequency sub-score
    pub const FREQUENCY_SCORE_CAP: f64 = 40.0;
    /// Upper bound of the volume sub-score
    pub const VOLUME_SCORE_CAP: f64 = 40.0;
    /// Upper bound of the consistency sub-score
    pub const CONSISTENCY_SCORE_CAP: f64 = 20.0;
    /// Upper bound of the composite strength score
    pub const MAX_STRENGTH_SCORE: f64 = 100.0;

    /// Scale divisor applied to daily volume (load x sets x reps per day).
    /// An arbitrary scale choice, not a physical unit.
    pub const VOLUME_NORMALIZATION_DIVISOR: f64 = 1000.0;

    /// Average gap between sessions (days) that earns the full consistency score
    pub const OPTIMAL_TRAINING_GAP_DAYS: f64 = 3.5;
    /// Deviation from the optimal gap (days) at which consistency reaches zero
    pub const MAX_GAP_DEVIATION_DAYS: f64 = 7.0;

    /// Minimum sessions in a region before consistency is scored
    pub const MIN_SESSIONS_FOR_CONSISTENCY: usize = 2;
}

/// Time conversion helpers
pub mod time {
    /// Seconds in one day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// The analysis command-line tool
    pub const IRONLOG_ANALYZE: &str = "ironlog-analyze";
}
