// ABOUTME: Workout record model representing one logged exercise entry
// ABOUTME: Immutable input to balance analysis and profile statistics, with builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single logged exercise entry
///
/// Records are read-only once built. Only the calendar date of `occurred_at`
/// matters for day-level aggregation; gap arithmetic uses the full timestamp.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use ironlog_core::models::WorkoutRecordBuilder;
///
/// let record = WorkoutRecordBuilder::new("Bench Press", Utc::now())
///     .load(185.0)
///     .sets(3)
///     .reps(8)
///     .build();
///
/// assert_eq!(record.category(), "Bench Press");
/// assert!((record.volume() - 4440.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Free-text exercise name, used as the membership lookup key
    #[serde(alias = "exercise_name", alias = "exercise")]
    category: String,
    /// Resistance used; zero for bodyweight work
    #[serde(default, alias = "weight", deserialize_with = "load_or_bodyweight")]
    load: f64,
    /// Number of sets performed
    #[serde(default, alias = "sets")]
    set_count: u32,
    /// Repetitions per set
    #[serde(default, alias = "reps")]
    rep_count: u32,
    /// When the exercise was performed
    #[serde(alias = "date", alias = "created_at")]
    occurred_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Create a record from all of its fields
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        load: f64,
        set_count: u32,
        rep_count: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category: category.into(),
            load,
            set_count,
            rep_count,
            occurred_at,
        }
    }

    /// Exercise name as logged
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Resistance used
    #[must_use]
    pub const fn load(&self) -> f64 {
        self.load
    }

    /// Sets performed
    #[must_use]
    pub const fn set_count(&self) -> u32 {
        self.set_count
    }

    /// Repetitions per set
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// When the exercise was performed
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Calendar date of the session (UTC)
    #[must_use]
    pub fn training_date(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }

    /// Training volume: load x sets x reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.load * f64::from(self.set_count) * f64::from(self.rep_count)
    }

    /// Total repetitions across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u64 {
        self.set_count as u64 * self.rep_count as u64
    }
}

/// Bodyweight exports often store the load as `null`
fn load_or_bodyweight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Builder for [`WorkoutRecord`] with bodyweight defaults
#[derive(Debug, Clone)]
pub struct WorkoutRecordBuilder {
    record: WorkoutRecord,
}

impl WorkoutRecordBuilder {
    /// Start a record with zero load, sets, and reps
    #[must_use]
    pub fn new(category: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            record: WorkoutRecord::new(category, 0.0, 0, 0, occurred_at),
        }
    }

    /// Set the resistance used
    #[must_use]
    pub fn load(mut self, value: f64) -> Self {
        self.record.load = value;
        self
    }

    /// Set the number of sets
    #[must_use]
    pub fn sets(mut self, value: u32) -> Self {
        self.record.set_count = value;
        self
    }

    /// Set the repetitions per set
    #[must_use]
    pub fn reps(mut self, value: u32) -> Self {
        self.record.rep_count = value;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> WorkoutRecord {
        self.record
    }
}
