// ABOUTME: Core types and constants for the Ironlog workout balance analyzer
// ABOUTME: Foundation crate with error handling, workout models, and analysis tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for Ironlog. This crate
//! is designed to change infrequently so the analysis crate and binaries can
//! build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default tunables for balance analysis and service naming
//! - **models**: `WorkoutRecord` and the `BodyRegion` taxonomy

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRecord`, `BodyRegion`)
pub mod models;
