// ABOUTME: Configuration module for ironlog-intelligence crate
// ABOUTME: Re-exports balance analysis configuration and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

/// Balance analysis thresholds and scoring parameters
pub mod analysis;

/// Configuration validation errors
pub mod error;

pub use analysis::{env_vars, BalanceAnalysisConfig, BalanceThresholds, StrengthScoring};
pub use error::ConfigError;
