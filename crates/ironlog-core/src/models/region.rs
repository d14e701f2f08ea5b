// ABOUTME: Body region taxonomy used to group exercises for balance analysis
// ABOUTME: Defines the fixed region set, its enumeration order, and parsing/display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Body-part training category
///
/// Declaration order is the enumeration order used wherever regions are
/// reported one after another (warnings, report maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRegion {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids, spinal erectors
    Back,
    /// Deltoids
    #[serde(alias = "shoulder")]
    Shoulders,
    /// Elbow flexors
    #[serde(alias = "bicep")]
    Biceps,
    /// Elbow extensors
    #[serde(alias = "tricep")]
    Triceps,
    /// Quads, hamstrings, glutes, calves
    #[serde(alias = "leg")]
    Legs,
    /// Abdominals and obliques
    #[serde(alias = "abs")]
    Core,
}

impl BodyRegion {
    /// Every region, in enumeration order
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Core,
    ];

    /// Lowercase identifier used in JSON and catalogs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Core => "core",
        }
    }

    /// Capitalized name for user-facing messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Legs => "Legs",
            Self::Core => "Core",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyRegion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "shoulders" | "shoulder" => Ok(Self::Shoulders),
            "biceps" | "bicep" => Ok(Self::Biceps),
            "triceps" | "tricep" => Ok(Self::Triceps),
            "legs" | "leg" => Ok(Self::Legs),
            "core" | "abs" => Ok(Self::Core),
            other => Err(AppError::invalid_input(format!(
                "unknown body region: {other}"
            ))),
        }
    }
}
