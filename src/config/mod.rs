// ABOUTME: Configuration module for the Ironlog root crate
// ABOUTME: Bundles logging, analysis tunables, and catalog location loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Runtime configuration
//!
//! - **environment**: `RuntimeConfig` assembled from environment variables

/// Environment-driven runtime configuration
pub mod environment;

pub use environment::{env_vars, RuntimeConfig};
