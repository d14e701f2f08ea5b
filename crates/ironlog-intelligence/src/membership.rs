// ABOUTME: Exercise-to-body-region membership table used to classify workouts
// ABOUTME: Built-in catalog plus JSON loading so the mapping evolves without code changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Exercise catalog
//!
//! Maps a free-text exercise name to the set of body regions it trains. Lookups
//! ignore surrounding whitespace and letter case. Names with no entry resolve
//! to the empty set.

use ironlog_core::errors::AppError;
use ironlog_core::models::BodyRegion;
use ironlog_core::models::BodyRegion::{Back, Biceps, Chest, Core, Legs, Shoulders, Triceps};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

/// Built-in catalog entries
const DEFAULT_CATALOG: &[(&str, &[BodyRegion])] = &[
    // Horizontal push
    ("Bench Press", &[Chest, Triceps, Shoulders]),
    ("Incline Bench Press", &[Chest, Shoulders, Triceps]),
    ("Decline Bench Press", &[Chest, Triceps]),
    ("Dumbbell Press", &[Chest, Triceps, Shoulders]),
    ("Push-ups", &[Chest, Triceps]),
    ("Chest Fly", &[Chest]),
    ("Cable Crossover", &[Chest]),
    ("Dips", &[Chest, Triceps]),
    // Vertical push
    ("Overhead Press", &[Shoulders, Triceps]),
    ("Shoulder Press", &[Shoulders, Triceps]),
    ("Military Press", &[Shoulders, Triceps]),
    ("Arnold Press", &[Shoulders, Triceps]),
    ("Lateral Raise", &[Shoulders]),
    ("Front Raise", &[Shoulders]),
    // Pull
    ("Pull-ups", &[Back, Biceps]),
    ("Chin-ups", &[Back, Biceps]),
    ("Lat Pulldown", &[Back, Biceps]),
    ("Barbell Row", &[Back, Biceps]),
    ("Bent Over Row", &[Back, Biceps]),
    ("Dumbbell Row", &[Back, Biceps]),
    ("Seated Cable Row", &[Back, Biceps]),
    ("T-Bar Row", &[Back, Biceps]),
    ("Face Pull", &[Shoulders, Back]),
    ("Shrugs", &[Back]),
    ("Deadlift", &[Back, Legs, Core]),
    // Arms
    ("Bicep Curl", &[Biceps]),
    ("Hammer Curl", &[Biceps]),
    ("Preacher Curl", &[Biceps]),
    ("Tricep Extension", &[Triceps]),
    ("Tricep Pushdown", &[Triceps]),
    ("Skull Crushers", &[Triceps]),
    ("Close Grip Bench Press", &[Triceps, Chest]),
    // Legs
    ("Squat", &[Legs, Core]),
    ("Front Squat", &[Legs, Core]),
    ("Leg Press", &[Legs]),
    ("Lunges", &[Legs]),
    ("Bulgarian Split Squat", &[Legs]),
    ("Romanian Deadlift", &[Legs, Back]),
    ("Leg Curl", &[Legs]),
    ("Leg Extension", &[Legs]),
    ("Calf Raise", &[Legs]),
    ("Hip Thrust", &[Legs]),
    // Core
    ("Plank", &[Core]),
    ("Crunches", &[Core]),
    ("Sit-ups", &[Core]),
    ("Russian Twist", &[Core]),
    ("Hanging Leg Raise", &[Core]),
    ("Ab Wheel Rollout", &[Core]),
];

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum MembershipError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Catalog contents are not a valid name -> regions map
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<MembershipError> for AppError {
    fn from(error: MembershipError) -> Self {
        match error {
            MembershipError::Io { path, source } => Self::from(source).with_resource_id(path),
            MembershipError::Parse(source) => {
                Self::invalid_format(format!("Malformed catalog: {source}")).with_source(source)
            }
        }
    }
}

/// Mapping from exercise name to the regions it trains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMembership {
    entries: HashMap<String, BTreeSet<BodyRegion>>,
}

static EMPTY_REGIONS: BTreeSet<BodyRegion> = BTreeSet::new();

impl CategoryMembership {
    /// Catalog with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from `(name, regions)` pairs
    pub fn from_entries<I, S, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        S: AsRef<str>,
        R: IntoIterator<Item = BodyRegion>,
    {
        let mut membership = Self::empty();
        membership.extend(entries);
        membership
    }

    /// Parse a JSON object of `{"Exercise Name": ["chest", "triceps"]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown region
    pub fn from_json_str(json: &str) -> Result<Self, MembershipError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON catalog from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MembershipError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MembershipError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Add or replace one exercise
    pub fn insert<R>(&mut self, name: &str, regions: R)
    where
        R: IntoIterator<Item = BodyRegion>,
    {
        self.entries
            .insert(normalize_name(name), regions.into_iter().collect());
    }

    /// Add or replace many exercises
    pub fn extend<I, S, R>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, R)>,
        S: AsRef<str>,
        R: IntoIterator<Item = BodyRegion>,
    {
        for (name, regions) in entries {
            self.insert(name.as_ref(), regions);
        }
    }

    /// Regions trained by `name`; empty when the exercise is unknown
    #[must_use]
    pub fn regions_for(&self, name: &str) -> &BTreeSet<BodyRegion> {
        self.entries
            .get(&normalize_name(name))
            .unwrap_or(&EMPTY_REGIONS)
    }

    /// Whether `name` maps to at least one region
    #[must_use]
    pub fn is_classified(&self, name: &str) -> bool {
        !self.regions_for(name).is_empty()
    }

    /// Number of exercises in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryMembership {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_CATALOG
                .iter()
                .map(|(name, regions)| (*name, regions.iter().copied())),
        )
    }
}

impl Serialize for CategoryMembership {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted so catalogs diff cleanly
        let sorted: BTreeMap<&String, &BTreeSet<BodyRegion>> = self.entries.iter().collect();
        sorted.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryMembership {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, BTreeSet<BodyRegion>>::deserialize(deserializer)?;
        Ok(Self::from_entries(raw))
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
