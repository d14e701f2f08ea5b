// ABOUTME: Muscle-balance analysis over a list of workout records
// ABOUTME: Computes per-region status, push/pull ratio, strength scores, and paired warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Workout Balance Analyzer
//!
//! A single pass over the records resolves each exercise to its body regions
//! through the injected [`CategoryMembership`], tallies push and pull work, and
//! accumulates per-region counts, volume, and session times. Scores and
//! findings are derived from those accumulators.
//!
//! The analyzer never filters by date. `window_days` only normalizes volume and
//! scales the overtraining threshold; callers pre-filter records to the range
//! they care about.

use crate::clock::{Clock, SystemClock};
use crate::config::{BalanceAnalysisConfig, ConfigError};
use crate::errors::AnalysisError;
use crate::membership::CategoryMembership;
use chrono::{DateTime, TimeDelta, Utc};
use ironlog_core::constants::{analysis, time};
use ironlog_core::models::{BodyRegion, WorkoutRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// The three sub-scores behind a region's strength score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrengthScoreBreakdown {
    /// Session-count component
    pub frequency: f64,
    /// Normalized volume component
    pub volume: f64,
    /// Cadence regularity component
    pub consistency: f64,
}

impl StrengthScoreBreakdown {
    /// Composite score, capped at 100
    #[must_use]
    pub fn total(&self) -> f64 {
        (self.frequency + self.volume + self.consistency).min(analysis::MAX_STRENGTH_SCORE)
    }
}

/// Derived training status of one body region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStatus {
    /// Records whose exercise maps to this region
    pub training_count: u32,
    /// Most recent session touching this region
    pub last_trained_at: Option<DateTime<Utc>>,
    /// Composite score in [0, 100]
    pub strength_score: f64,
    /// Components of `strength_score`
    pub score_breakdown: StrengthScoreBreakdown,
    /// Sum of load x sets x reps over this region's records
    pub total_volume: f64,
}

/// Push/pull balance as an explicit state
///
/// `Undefined` separates "no pull work at all" from a genuine ratio of zero,
/// which the numeric ratio alone cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushPullBalance {
    /// Ratio within the configured bounds
    Balanced,
    /// Ratio above the push-dominant threshold
    PushDominant,
    /// Ratio below the pull-dominant threshold
    PullDominant,
    /// No pull-classified records, so the ratio has no meaning
    Undefined,
}

/// Movement direction of one exercise, derived from its regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementClassification {
    /// Counts toward push volume
    pub push: bool,
    /// Counts toward pull volume
    pub pull: bool,
}

impl MovementClassification {
    /// Classify a resolved region set
    ///
    /// Push: chest, or shoulders/triceps without back. Pull: back or biceps.
    /// Both flags may be set at once.
    #[must_use]
    pub fn from_regions(regions: &BTreeSet<BodyRegion>) -> Self {
        let has = |region: BodyRegion| regions.contains(&region);
        let push = has(BodyRegion::Chest)
            || ((has(BodyRegion::Shoulders) || has(BodyRegion::Triceps)) && !has(BodyRegion::Back));
        let pull = has(BodyRegion::Back) || has(BodyRegion::Biceps);
        Self { push, pull }
    }
}

/// What a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Push/pull ratio above the upper bound
    PushDominant,
    /// Push/pull ratio below the lower bound
    PullDominant,
    /// Region never trained
    Neglected,
    /// Region not trained recently
    Stale,
    /// Region trained more often than the window allows
    Overtraining,
}

/// One warning paired with its recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceFinding {
    /// Category of the finding
    pub kind: FindingKind,
    /// Region concerned, if region-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<BodyRegion>,
    /// User-facing warning
    pub warning: String,
    /// User-facing recommendation
    pub recommendation: String,
}

impl BalanceFinding {
    fn push_dominant(ratio: f64) -> Self {
        Self {
            kind: FindingKind::PushDominant,
            region: None,
            warning: format!("Training is push-dominant (push/pull ratio {ratio:.2})"),
            recommendation: "Add more pulling exercises (rows, pull-ups) to balance pushing volume"
                .to_owned(),
        }
    }

    fn pull_dominant(ratio: f64) -> Self {
        Self {
            kind: FindingKind::PullDominant,
            region: None,
            warning: format!("Training is pull-dominant (push/pull ratio {ratio:.2})"),
            recommendation:
                "Add more pushing exercises (bench press, overhead press) to balance pulling volume"
                    .to_owned(),
        }
    }

    fn neglected(region: BodyRegion) -> Self {
        Self {
            kind: FindingKind::Neglected,
            region: Some(region),
            warning: format!("{} neglected: no {region} training recorded", region.label()),
            recommendation: format!("Add {region} training to your weekly routine"),
        }
    }

    fn stale(region: BodyRegion, days_since: i64) -> Self {
        Self {
            kind: FindingKind::Stale,
            region: Some(region),
            warning: format!(
                "{} stale: last trained {days_since} days ago",
                region.label()
            ),
            recommendation: format!("Schedule a {region} session soon"),
        }
    }

    fn overtraining(region: BodyRegion, sessions: u32, window_days: u32) -> Self {
        Self {
            kind: FindingKind::Overtraining,
            region: Some(region),
            warning: format!(
                "Possible overtraining of {region}: {sessions} sessions in {window_days} days"
            ),
            recommendation: format!("Reduce {region} frequency to allow recovery"),
        }
    }
}

/// Output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Status of every known region
    pub region_status: BTreeMap<BodyRegion, RegionStatus>,
    /// Push-classified records
    pub push_count: u32,
    /// Pull-classified records
    pub pull_count: u32,
    /// `push_count / pull_count`, or 0 when there is no pull work
    pub push_pull_ratio: f64,
    /// Explicit balance state
    pub push_pull_balance: PushPullBalance,
    /// Warnings in generation order
    pub warnings: Vec<String>,
    /// Recommendations, index-aligned with `warnings`
    pub recommendations: Vec<String>,
    /// Typed warning/recommendation pairs in the same order
    pub findings: Vec<BalanceFinding>,
    /// Clock reading used for staleness
    pub analyzed_at: DateTime<Utc>,
    /// Normalization window
    pub window_days: u32,
    /// Records supplied by the caller
    pub records_analyzed: usize,
    /// Records whose exercise mapped to no region
    pub unclassified_records: usize,
}

impl AnalysisReport {
    /// Status of one region
    #[must_use]
    pub fn region(&self, region: BodyRegion) -> Option<&RegionStatus> {
        self.region_status.get(&region)
    }

    /// Findings that concern `region`
    pub fn findings_for(&self, region: BodyRegion) -> impl Iterator<Item = &BalanceFinding> {
        self.findings
            .iter()
            .filter(move |finding| finding.region == Some(region))
    }

    /// Whether any finding of `kind` was raised for `region`
    #[must_use]
    pub fn has_finding(&self, kind: FindingKind, region: Option<BodyRegion>) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.kind == kind && finding.region == region)
    }
}

#[derive(Debug, Default)]
struct RegionAccumulator {
    training_count: u32,
    last_trained_at: Option<DateTime<Utc>>,
    total_volume: f64,
    session_times: Vec<DateTime<Utc>>,
}

impl RegionAccumulator {
    fn record(&mut self, record: &WorkoutRecord) {
        let occurred_at = record.occurred_at();
        self.training_count = self.training_count.saturating_add(1);
        self.last_trained_at = Some(
            self.last_trained_at
                .map_or(occurred_at, |last| last.max(occurred_at)),
        );
        self.total_volume += record.volume();
        self.session_times.push(occurred_at);
    }
}

#[derive(Debug, Default)]
struct Accumulated {
    regions: BTreeMap<BodyRegion, RegionAccumulator>,
    push_count: u32,
    pull_count: u32,
    unclassified: usize,
}

/// Muscle-balance analyzer
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers.
#[derive(Clone)]
pub struct WorkoutAnalyzer {
    config: BalanceAnalysisConfig,
    membership: CategoryMembership,
    clock: Arc<dyn Clock>,
}

impl WorkoutAnalyzer {
    /// Create an analyzer from its three collaborators
    ///
    /// `config` is used as given; pass it through
    /// [`BalanceAnalysisConfig::validate`] first, or use [`Self::try_new`].
    /// Sub-scores stay within their caps either way, but thresholds that fail
    /// validation make the findings meaningless.
    #[must_use]
    pub fn new(
        config: BalanceAnalysisConfig,
        membership: CategoryMembership,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            membership,
            clock,
        }
    }

    /// Create an analyzer after validating `config`
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by
    /// [`BalanceAnalysisConfig::validate`]
    pub fn try_new(
        config: BalanceAnalysisConfig,
        membership: CategoryMembership,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, membership, clock))
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the exercise catalog
    #[must_use]
    pub fn with_membership(mut self, membership: CategoryMembership) -> Self {
        self.membership = membership;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &BalanceAnalysisConfig {
        &self.config
    }

    /// Active exercise catalog
    #[must_use]
    pub const fn membership(&self) -> &CategoryMembership {
        &self.membership
    }

    /// Analyze using the configured default window
    ///
    /// # Errors
    ///
    /// See [`Self::analyze`]
    pub fn analyze_default(&self, records: &[WorkoutRecord]) -> Result<AnalysisReport, AnalysisError> {
        self.analyze(records, self.config.default_window_days)
    }

    /// Analyze `records`, normalizing volume over `window_days`
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when `records` is empty. Every other input,
    /// including a zero-day window, yields a report.
    pub fn analyze(
        &self,
        records: &[WorkoutRecord],
        window_days: u32,
    ) -> Result<AnalysisReport, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::InsufficientData);
        }

        let analyzed_at = self.clock.now();
        let accumulated = self.accumulate(records);

        let region_status: BTreeMap<BodyRegion, RegionStatus> = accumulated
            .regions
            .into_iter()
            .map(|(region, acc)| (region, self.region_status(acc, window_days)))
            .collect();

        let push_pull_ratio = push_pull_ratio(accumulated.push_count, accumulated.pull_count);
        let push_pull_balance = self.classify_balance(accumulated.pull_count, push_pull_ratio);
        let findings =
            self.generate_findings(&region_status, push_pull_ratio, window_days, analyzed_at);
        let (warnings, recommendations): (Vec<String>, Vec<String>) = findings
            .iter()
            .map(|finding| (finding.warning.clone(), finding.recommendation.clone()))
            .unzip();

        info!(
            records = records.len(),
            unclassified = accumulated.unclassified,
            window_days,
            push_count = accumulated.push_count,
            pull_count = accumulated.pull_count,
            balance = ?push_pull_balance,
            findings = findings.len(),
            "Workout balance analysis complete"
        );

        Ok(AnalysisReport {
            region_status,
            push_count: accumulated.push_count,
            pull_count: accumulated.pull_count,
            push_pull_ratio,
            push_pull_balance,
            warnings,
            recommendations,
            findings,
            analyzed_at,
            window_days,
            records_analyzed: records.len(),
            unclassified_records: accumulated.unclassified,
        })
    }

    fn accumulate(&self, records: &[WorkoutRecord]) -> Accumulated {
        let mut accumulated = Accumulated {
            regions: BodyRegion::ALL
                .iter()
                .map(|region| (*region, RegionAccumulator::default()))
                .collect(),
            ..Accumulated::default()
        };

        for record in records {
            let regions = self.membership.regions_for(record.category());
            if regions.is_empty() {
                debug!(category = record.category(), "Skipping unclassified exercise");
                accumulated.unclassified += 1;
                continue;
            }

            for region in regions {
                if let Some(acc) = accumulated.regions.get_mut(region) {
                    acc.record(record);
                }
            }

            let movement = MovementClassification::from_regions(regions);
            if movement.push {
                accumulated.push_count = accumulated.push_count.saturating_add(1);
            }
            if movement.pull {
                accumulated.pull_count = accumulated.pull_count.saturating_add(1);
            }
        }

        accumulated
    }

    fn region_status(&self, acc: RegionAccumulator, window_days: u32) -> RegionStatus {
        let score_breakdown = StrengthScoreBreakdown {
            frequency: self.frequency_score(acc.training_count),
            volume: self.volume_score(acc.total_volume, window_days),
            consistency: self.consistency_score(acc.session_times),
        };

        RegionStatus {
            training_count: acc.training_count,
            last_trained_at: acc.last_trained_at,
            strength_score: score_breakdown.total(),
            score_breakdown,
            total_volume: acc.total_volume,
        }
    }

    fn frequency_score(&self, training_count: u32) -> f64 {
        let scoring = &self.config.scoring;
        (f64::from(training_count) * scoring.points_per_session).min(scoring.frequency_cap)
    }

    // A zero window sends positive volume to +inf (clamped to the cap) and
    // zero volume to NaN (scored as 0)
    fn volume_score(&self, total_volume: f64, window_days: u32) -> f64 {
        let scoring = &self.config.scoring;
        let scaled = total_volume / f64::from(window_days) / scoring.volume_divisor;
        if scaled.is_nan() {
            0.0
        } else {
            scaled.clamp(0.0, scoring.volume_cap.max(0.0))
        }
    }

    fn consistency_score(&self, mut session_times: Vec<DateTime<Utc>>) -> f64 {
        if session_times.len() < analysis::MIN_SESSIONS_FOR_CONSISTENCY {
            return 0.0;
        }
        session_times.sort_unstable();

        let gaps: Vec<f64> = session_times
            .windows(2)
            .filter_map(|pair| match pair {
                [earlier, later] => Some(days_between(*earlier, *later)),
                _ => None,
            })
            .collect();
        let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;

        let scoring = &self.config.scoring;
        let deviation = (scoring.optimal_gap_days - mean_gap).abs();
        let score =
            scoring.consistency_cap * (1.0 - (deviation / scoring.max_gap_deviation_days).min(1.0));
        if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, scoring.consistency_cap.max(0.0))
        }
    }

    fn classify_balance(&self, pull_count: u32, ratio: f64) -> PushPullBalance {
        let thresholds = &self.config.thresholds;
        if pull_count == 0 {
            PushPullBalance::Undefined
        } else if ratio > thresholds.push_dominant_ratio {
            PushPullBalance::PushDominant
        } else if ratio < thresholds.pull_dominant_ratio {
            PushPullBalance::PullDominant
        } else {
            PushPullBalance::Balanced
        }
    }

    fn generate_findings(
        &self,
        region_status: &BTreeMap<BodyRegion, RegionStatus>,
        ratio: f64,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> Vec<BalanceFinding> {
        let thresholds = &self.config.thresholds;
        let mut findings = Vec::new();

        // The ratio rules apply even to the 0 sentinel
        if ratio > thresholds.push_dominant_ratio {
            findings.push(BalanceFinding::push_dominant(ratio));
        } else if ratio < thresholds.pull_dominant_ratio {
            findings.push(BalanceFinding::pull_dominant(ratio));
        }

        let stale_after =
            TimeDelta::try_days(thresholds.stale_after_days).unwrap_or(TimeDelta::MAX);
        for region in BodyRegion::ALL {
            let Some(status) = region_status.get(&region) else {
                continue;
            };
            if status.training_count == 0 {
                findings.push(BalanceFinding::neglected(region));
            } else if let Some(last_trained_at) = status.last_trained_at {
                let since = now.signed_duration_since(last_trained_at);
                if since > stale_after {
                    findings.push(BalanceFinding::stale(region, since.num_days()));
                }
            }
        }

        let session_limit = self.config.overtraining_session_limit(window_days);
        for region in BodyRegion::ALL {
            let Some(status) = region_status.get(&region) else {
                continue;
            };
            if f64::from(status.training_count) > session_limit {
                findings.push(BalanceFinding::overtraining(
                    region,
                    status.training_count,
                    window_days,
                ));
            }
        }

        findings
    }
}

impl Default for WorkoutAnalyzer {
    fn default() -> Self {
        Self::new(
            BalanceAnalysisConfig::default(),
            CategoryMembership::default(),
            Arc::new(SystemClock),
        )
    }
}

impl fmt::Debug for WorkoutAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkoutAnalyzer")
            .field("config", &self.config)
            .field("catalog_entries", &self.membership.len())
            .finish_non_exhaustive()
    }
}

/// `push / pull`, defined as 0 when there is no pull work
#[must_use]
pub fn push_pull_ratio(push_count: u32, pull_count: u32) -> f64 {
    if pull_count == 0 {
        0.0
    } else {
        f64::from(push_count) / f64::from(pull_count)
    }
}

fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    later.signed_duration_since(earlier).num_seconds() as f64 / time::SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone};
    use ironlog_core::models::WorkoutRecordBuilder;

    fn analyzer_at(now: DateTime<Utc>) -> WorkoutAnalyzer {
        WorkoutAnalyzer::default().with_clock(FixedClock::new(now))
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_movement_classification() {
        let classify = |regions: &[BodyRegion]| {
            MovementClassification::from_regions(&regions.iter().copied().collect())
        };

        assert_eq!(
            classify(&[BodyRegion::Chest, BodyRegion::Triceps]),
            MovementClassification { push: true, pull: false }
        );
        // Shoulders with back is a pull (face pulls, rear delts)
        assert_eq!(
            classify(&[BodyRegion::Shoulders, BodyRegion::Back]),
            MovementClassification { push: false, pull: true }
        );
        assert_eq!(
            classify(&[BodyRegion::Chest, BodyRegion::Back]),
            MovementClassification { push: true, pull: true }
        );
        assert_eq!(classify(&[BodyRegion::Legs]), MovementClassification::default());
    }

    #[test]
    fn test_push_pull_ratio_zero_without_pull() {
        assert!(push_pull_ratio(5, 0).abs() < f64::EPSILON);
        assert!((push_pull_ratio(3, 2) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frequency_score_caps_at_forty() {
        let analyzer = WorkoutAnalyzer::default();
        assert!((analyzer.frequency_score(2) - 20.0).abs() < f64::EPSILON);
        assert!((analyzer.frequency_score(9) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_score_scales_and_clamps() {
        let analyzer = WorkoutAnalyzer::default();
        // 30_000 over 30 days is 1000 per day, scaled to 1.0
        assert!((analyzer.volume_score(30_000.0, 30) - 1.0).abs() < 1e-9);
        assert!((analyzer.volume_score(1e12, 30) - 40.0).abs() < f64::EPSILON);
        assert!(analyzer.volume_score(-500.0, 30).abs() < f64::EPSILON);
        assert!(analyzer.volume_score(f64::NAN, 30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_consistency_peaks_at_optimal_gap() {
        let analyzer = WorkoutAnalyzer::default();
        let start = base_time();

        let optimal = vec![start, start + Duration::hours(84)];
        assert!((analyzer.consistency_score(optimal) - 20.0).abs() < 1e-9);

        // Mean gap 7 days deviates by 3.5, half the score
        let weekly = vec![start, start + Duration::days(7), start + Duration::days(14)];
        assert!((analyzer.consistency_score(weekly) - 10.0).abs() < 1e-9);

        // Deviation beyond 7 days floors at zero
        let sparse = vec![start, start + Duration::days(30)];
        assert!(analyzer.consistency_score(sparse).abs() < f64::EPSILON);

        assert!(analyzer.consistency_score(vec![start]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_consistency_ignores_input_order() {
        let analyzer = WorkoutAnalyzer::default();
        let start = base_time();
        let shuffled = vec![
            start + Duration::days(7),
            start,
            start + Duration::days(14),
        ];
        assert!((analyzer.consistency_score(shuffled) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_stale_region_reported_after_seven_days() {
        let trained = base_time();
        let analyzer = analyzer_at(trained + Duration::days(10));
        let records = vec![WorkoutRecordBuilder::new("Squat", trained)
            .load(225.0)
            .sets(5)
            .reps(5)
            .build()];

        let report = analyzer.analyze(&records, 30).unwrap();

        assert!(report.has_finding(FindingKind::Stale, Some(BodyRegion::Legs)));
        assert!(!report.has_finding(FindingKind::Neglected, Some(BodyRegion::Legs)));
    }

    #[test]
    fn test_exactly_seven_days_is_not_stale() {
        let trained = base_time();
        let analyzer = analyzer_at(trained + Duration::days(7));
        let records = vec![WorkoutRecordBuilder::new("Squat", trained).build()];

        let report = analyzer.analyze(&records, 30).unwrap();
        assert!(!report.has_finding(FindingKind::Stale, Some(BodyRegion::Legs)));
    }

    #[test]
    fn test_zero_window_volume_score_is_bounded() {
        let analyzer = WorkoutAnalyzer::default();
        assert!((analyzer.volume_score(4_440.0, 0) - 40.0).abs() < f64::EPSILON);
        assert!(analyzer.volume_score(0.0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_window_flags_every_trained_region() {
        let analyzer = analyzer_at(base_time());
        let records = vec![WorkoutRecordBuilder::new("Bench Press", base_time())
            .load(185.0)
            .sets(3)
            .reps(8)
            .build()];

        let report = analyzer.analyze(&records, 0).unwrap();

        assert_eq!(report.window_days, 0);
        for region in [BodyRegion::Chest, BodyRegion::Triceps, BodyRegion::Shoulders] {
            assert!(report.has_finding(FindingKind::Overtraining, Some(region)));
        }
        assert!(!report.has_finding(FindingKind::Overtraining, Some(BodyRegion::Legs)));
    }

    #[test]
    fn test_unvalidated_deviation_span_keeps_consistency_in_bounds() {
        let mut config = BalanceAnalysisConfig::default();
        config.scoring.max_gap_deviation_days = 0.0;
        let analyzer =
            WorkoutAnalyzer::new(config, CategoryMembership::default(), Arc::new(SystemClock));
        let start = base_time();

        // Every deviation divides by a zero span
        let optimal = vec![start, start + Duration::hours(84)];
        let weekly = vec![start, start + Duration::days(7)];
        for times in [optimal, weekly] {
            let score = analyzer.consistency_score(times);
            assert!((0.0..=20.0).contains(&score), "score {score}");
        }
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut config = BalanceAnalysisConfig::default();
        config.scoring.max_gap_deviation_days = 0.0;

        let result =
            WorkoutAnalyzer::try_new(config, CategoryMembership::default(), Arc::new(SystemClock));
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }
}
