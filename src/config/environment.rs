// ABOUTME: Environment-based runtime configuration for the Ironlog binaries
// ABOUTME: Loads logging and analysis settings plus an optional exercise catalog path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::logging::LoggingConfig;
use ironlog_core::errors::AppResult;
use ironlog_intelligence::{
    BalanceAnalysisConfig, CategoryMembership, Clock, SystemClock, WorkoutAnalyzer,
};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Environment variable names read by [`RuntimeConfig`]
pub mod env_vars {
    /// JSON exercise catalog replacing the built-in one
    pub const CATALOG_PATH: &str = "IRONLOG_CATALOG_PATH";
}

/// Everything a binary needs before it can analyze records
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Tracing subscriber settings
    pub logging: LoggingConfig,
    /// Analyzer thresholds and scoring
    pub analysis: BalanceAnalysisConfig,
    /// Catalog file; the built-in catalog is used when absent
    pub catalog_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an analysis override is malformed or fails validation
    pub fn from_env() -> AppResult<Self> {
        let analysis = BalanceAnalysisConfig::from_environment()?;
        let catalog_path = env::var(env_vars::CATALOG_PATH)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            logging: LoggingConfig::from_env(),
            analysis,
            catalog_path,
        })
    }

    /// Replace the catalog path, typically from a command-line flag
    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }

    /// Load the configured catalog, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or parsed
    pub fn load_membership(&self) -> AppResult<CategoryMembership> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(CategoryMembership::default()), load_catalog)
    }

    /// Build an analyzer reading time from the system clock
    ///
    /// # Errors
    ///
    /// See [`Self::build_analyzer_with_clock`]
    pub fn build_analyzer(&self) -> AppResult<WorkoutAnalyzer> {
        self.build_analyzer_with_clock(Arc::new(SystemClock))
    }

    /// Build an analyzer reading time from `clock`
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis config is invalid or the catalog
    /// cannot be loaded
    pub fn build_analyzer_with_clock(&self, clock: Arc<dyn Clock>) -> AppResult<WorkoutAnalyzer> {
        Ok(WorkoutAnalyzer::try_new(
            self.analysis.clone(),
            self.load_membership()?,
            clock,
        )?)
    }
}

fn load_catalog(path: &Path) -> AppResult<CategoryMembership> {
    let membership = CategoryMembership::from_path(path)?;
    info!(
        path = %path.display(),
        exercises = membership.len(),
        "Loaded exercise catalog"
    );
    Ok(membership)
}
