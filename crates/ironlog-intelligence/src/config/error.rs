// ABOUTME: Configuration error types for balance analysis validation
// ABOUTME: Defines error variants for invalid ranges, bad overrides, and cap budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Configuration error types for analysis configuration validation.

use ironlog_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., fraction not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error (non-unicode value)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Environment override could not be parsed
    #[error("Failed to parse {variable}={value:?}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Sub-score caps exceed the composite score ceiling
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let resource = match &error {
            ConfigError::Parse { variable, .. } => Some(*variable),
            _ => None,
        };
        let app_error = Self::config(error.to_string());
        match resource {
            Some(variable) => app_error.with_resource_id(variable),
            None => app_error,
        }
    }
}
