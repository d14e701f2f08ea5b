// ABOUTME: Core data models for Ironlog workout analysis
// ABOUTME: Re-exports WorkoutRecord, its builder, and the BodyRegion taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Data Models
//!
//! - `WorkoutRecord`: one logged exercise entry (name, load, sets, reps, time)
//! - `BodyRegion`: the fixed set of body regions exercises are grouped into

mod region;
mod workout;

pub use region::BodyRegion;
pub use workout::{WorkoutRecord, WorkoutRecordBuilder};
