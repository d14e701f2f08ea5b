// ABOUTME: Profile statistics aggregated from logged workouts
// ABOUTME: Totals, training days, and current/longest day streaks against an injected clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, NaiveDate, Utc};
use ironlog_core::models::WorkoutRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Aggregate statistics shown on a profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutStats {
    /// Logged records
    pub total_workouts: usize,
    /// Distinct calendar days with at least one record
    pub training_days: usize,
    /// Sum of sets
    pub total_sets: u64,
    /// Sum of sets x reps
    pub total_reps: u64,
    /// Sum of load x sets x reps
    pub total_volume: f64,
    /// `total_volume / training_days`, 0 with no training days
    pub average_volume_per_day: f64,
    /// Consecutive training days ending today or yesterday
    pub current_streak: u32,
    /// Longest run of consecutive training days
    pub longest_streak: u32,
    /// Most recent record
    pub last_workout_at: Option<DateTime<Utc>>,
    /// Most frequently logged exercise (ties broken alphabetically)
    pub most_frequent_category: Option<String>,
}

/// Computes [`WorkoutStats`]
#[derive(Clone)]
pub struct WorkoutStatsCalculator {
    clock: Arc<dyn Clock>,
}

impl WorkoutStatsCalculator {
    /// Calculator reading "today" from `clock`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Aggregate `records`; empty input yields zeroed stats
    #[must_use]
    pub fn calculate(&self, records: &[WorkoutRecord]) -> WorkoutStats {
        if records.is_empty() {
            return WorkoutStats::default();
        }

        let dates: BTreeSet<NaiveDate> = records.iter().map(WorkoutRecord::training_date).collect();
        let total_sets: u64 = records.iter().map(|r| u64::from(r.set_count())).sum();
        let total_reps: u64 = records.iter().map(WorkoutRecord::total_reps).sum();
        let total_volume: f64 = records.iter().map(WorkoutRecord::volume).sum();
        let today = self.clock.now().date_naive();

        let stats = WorkoutStats {
            total_workouts: records.len(),
            training_days: dates.len(),
            total_sets,
            total_reps,
            total_volume,
            average_volume_per_day: total_volume / dates.len() as f64,
            current_streak: current_streak(&dates, today),
            longest_streak: longest_streak(&dates),
            last_workout_at: records.iter().map(WorkoutRecord::occurred_at).max(),
            most_frequent_category: most_frequent_category(records),
        };

        debug!(
            workouts = stats.total_workouts,
            training_days = stats.training_days,
            current_streak = stats.current_streak,
            longest_streak = stats.longest_streak,
            "Computed workout stats"
        );
        stats
    }
}

impl Default for WorkoutStatsCalculator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for WorkoutStatsCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkoutStatsCalculator").finish_non_exhaustive()
    }
}

/// Consecutive days ending at `today`, or at yesterday when today has no session yet
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if dates.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if dates.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = Some(anchor);
    while let Some(current) = day.filter(|d| dates.contains(d)) {
        streak += 1;
        day = current.pred_opt();
    }
    streak
}

fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(*date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*date);
    }
    longest
}

fn most_frequent_category(records: &[WorkoutRecord]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.category().trim()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .max_by(|(name_a, count_a), (name_b, count_b)| {
            count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
        })
        .map(|(name, _)| name.to_owned())
}
