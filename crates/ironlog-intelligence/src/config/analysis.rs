// ABOUTME: Balance analysis configuration replacing magic numbers with named tunables
// ABOUTME: Provides defaults, environment overrides, and validation for analyzer parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Balance Analysis Configuration
//!
//! Every threshold and scale factor the analyzer uses lives here so it can be
//! recalibrated without touching the algorithm. Defaults come from
//! `ironlog_core::constants::analysis`.

use super::error::ConfigError;
use ironlog_core::constants::analysis;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Environment variable names for analysis overrides
pub mod env_vars {
    /// Default normalization window in days
    pub const WINDOW_DAYS: &str = "IRONLOG_ANALYSIS_WINDOW_DAYS";
    /// Push-dominant ratio threshold
    pub const PUSH_DOMINANT_RATIO: &str = "IRONLOG_ANALYSIS_PUSH_DOMINANT_RATIO";
    /// Pull-dominant ratio threshold
    pub const PULL_DOMINANT_RATIO: &str = "IRONLOG_ANALYSIS_PULL_DOMINANT_RATIO";
    /// Days before a trained region is stale
    pub const STALE_DAYS: &str = "IRONLOG_ANALYSIS_STALE_DAYS";
    /// Fraction of the window that triggers an overtraining warning
    pub const OVERTRAINING_FRACTION: &str = "IRONLOG_ANALYSIS_OVERTRAINING_FRACTION";
    /// Volume normalization divisor
    pub const VOLUME_DIVISOR: &str = "IRONLOG_ANALYSIS_VOLUME_DIVISOR";
    /// Optimal average gap between sessions, in days
    pub const OPTIMAL_GAP_DAYS: &str = "IRONLOG_ANALYSIS_OPTIMAL_GAP_DAYS";
}

/// Thresholds that trigger warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceThresholds {
    /// Push/pull ratio above which training is push-dominant
    pub push_dominant_ratio: f64,
    /// Push/pull ratio below which training is pull-dominant
    pub pull_dominant_ratio: f64,
    /// Days since last session after which a region is stale
    pub stale_after_days: i64,
    /// Sessions above `window_days * fraction` flag possible overtraining
    pub overtraining_window_fraction: f64,
}

/// Parameters of the per-region strength score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthScoring {
    /// Frequency points per session
    pub points_per_session: f64,
    /// Frequency sub-score ceiling
    pub frequency_cap: f64,
    /// Volume sub-score ceiling
    pub volume_cap: f64,
    /// Consistency sub-score ceiling
    pub consistency_cap: f64,
    /// Divisor applied to per-day volume; a scale choice, not a unit
    pub volume_divisor: f64,
    /// Average gap (days) that earns the full consistency score
    pub optimal_gap_days: f64,
    /// Gap deviation (days) at which consistency reaches zero
    pub max_gap_deviation_days: f64,
}

/// Main balance analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAnalysisConfig {
    /// Warning thresholds
    pub thresholds: BalanceThresholds,
    /// Strength score parameters
    pub scoring: StrengthScoring,
    /// Window used by `analyze_default`
    pub default_window_days: u32,
}

impl Default for BalanceThresholds {
    fn default() -> Self {
        Self {
            push_dominant_ratio: analysis::PUSH_DOMINANT_RATIO,
            pull_dominant_ratio: analysis::PULL_DOMINANT_RATIO,
            stale_after_days: analysis::STALE_REGION_DAYS,
            overtraining_window_fraction: analysis::OVERTRAINING_WINDOW_FRACTION,
        }
    }
}

impl Default for StrengthScoring {
    fn default() -> Self {
        Self {
            points_per_session: analysis::FREQUENCY_POINTS_PER_SESSION,
            frequency_cap: analysis::FREQUENCY_SCORE_CAP,
            volume_cap: analysis::VOLUME_SCORE_CAP,
            consistency_cap: analysis::CONSISTENCY_SCORE_CAP,
            volume_divisor: analysis::VOLUME_NORMALIZATION_DIVISOR,
            optimal_gap_days: analysis::OPTIMAL_TRAINING_GAP_DAYS,
            max_gap_deviation_days: analysis::MAX_GAP_DEVIATION_DAYS,
        }
    }
}

impl Default for BalanceAnalysisConfig {
    fn default() -> Self {
        Self {
            thresholds: BalanceThresholds::default(),
            scoring: StrengthScoring::default(),
            default_window_days: analysis::DEFAULT_WINDOW_DAYS,
        }
    }
}

impl BalanceAnalysisConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env(env_vars::WINDOW_DAYS, &mut config.default_window_days)?;
        override_from_env(
            env_vars::PUSH_DOMINANT_RATIO,
            &mut config.thresholds.push_dominant_ratio,
        )?;
        override_from_env(
            env_vars::PULL_DOMINANT_RATIO,
            &mut config.thresholds.pull_dominant_ratio,
        )?;
        override_from_env(env_vars::STALE_DAYS, &mut config.thresholds.stale_after_days)?;
        override_from_env(
            env_vars::OVERTRAINING_FRACTION,
            &mut config.thresholds.overtraining_window_fraction,
        )?;
        override_from_env(env_vars::VOLUME_DIVISOR, &mut config.scoring.volume_divisor)?;
        override_from_env(
            env_vars::OPTIMAL_GAP_DAYS,
            &mut config.scoring.optimal_gap_days,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_window_days must be > 0",
            ));
        }

        let thresholds = &self.thresholds;
        if !thresholds.pull_dominant_ratio.is_finite() || thresholds.pull_dominant_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "pull_dominant_ratio must be a positive number",
            ));
        }

        if !thresholds.push_dominant_ratio.is_finite()
            || thresholds.push_dominant_ratio <= thresholds.pull_dominant_ratio
        {
            return Err(ConfigError::InvalidRange(
                "push_dominant_ratio must be greater than pull_dominant_ratio",
            ));
        }

        if thresholds.stale_after_days <= 0 {
            return Err(ConfigError::ValueOutOfRange("stale_after_days must be > 0"));
        }

        if !(thresholds.overtraining_window_fraction > 0.0
            && thresholds.overtraining_window_fraction <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "overtraining_window_fraction must be in (0, 1]",
            ));
        }

        self.validate_scoring()
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        let caps = [
            scoring.frequency_cap,
            scoring.volume_cap,
            scoring.consistency_cap,
        ];

        if caps.iter().any(|cap| !cap.is_finite() || *cap < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "score caps must be non-negative",
            ));
        }

        if caps.iter().sum::<f64>() > analysis::MAX_STRENGTH_SCORE {
            return Err(ConfigError::InvalidWeights(
                "frequency, volume and consistency caps must sum to at most 100",
            ));
        }

        if !scoring.points_per_session.is_finite() || scoring.points_per_session < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "points_per_session must be >= 0",
            ));
        }

        if !scoring.volume_divisor.is_finite() || scoring.volume_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("volume_divisor must be > 0"));
        }

        if !scoring.optimal_gap_days.is_finite() || scoring.optimal_gap_days < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "optimal_gap_days must be >= 0",
            ));
        }

        if !scoring.max_gap_deviation_days.is_finite() || scoring.max_gap_deviation_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_gap_deviation_days must be > 0",
            ));
        }

        Ok(())
    }

    /// Session count above which a region is flagged for possible overtraining
    #[must_use]
    pub fn overtraining_session_limit(&self, window_days: u32) -> f64 {
        f64::from(window_days) * self.thresholds.overtraining_window_fraction
    }
}

fn override_from_env<T: FromStr>(variable: &'static str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(variable) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            if let Ok(parsed) = parsed {
                *target = parsed;
                Ok(())
            } else {
                warn!(variable, value = %value, "Rejecting unparseable analysis override");
                Err(ConfigError::Parse { variable, value })
            }
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(error) => Err(error.into()),
    }
}
