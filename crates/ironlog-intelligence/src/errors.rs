// ABOUTME: Error types for workout analysis operations
// ABOUTME: Empty input is the only analysis failure, with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use ironlog_core::errors::AppError;
use thiserror::Error;

/// Failures of a single analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No workout records were supplied.
    ///
    /// Callers should show an empty-state or onboarding message rather than
    /// surfacing this as a failure.
    #[error("No workout records to analyze")]
    InsufficientData,
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InsufficientData => Self::insufficient_data(error.to_string()),
        }
    }
}
