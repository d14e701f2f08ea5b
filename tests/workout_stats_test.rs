// ABOUTME: Integration tests for profile statistics
// ABOUTME: Validates totals, training days, streak rules, and empty-input behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{balanced_week, create_test_stats_calculator, days_ago, test_now, workout};
use ironlog::intelligence::WorkoutStats;
use ironlog::models::WorkoutRecord;

#[test]
fn test_empty_input_yields_zeroed_stats() {
    let calculator = create_test_stats_calculator();
    assert_eq!(calculator.calculate(&[]), WorkoutStats::default());
}

#[test]
fn test_balanced_week_totals() {
    let calculator = create_test_stats_calculator();
    let stats = calculator.calculate(&balanced_week());

    assert_eq!(stats.total_workouts, 7);
    assert_eq!(stats.training_days, 7);
    assert_eq!(stats.total_sets, 21);
    assert_eq!(stats.total_reps, 210);
    assert!((stats.total_volume - 21_000.0).abs() < f64::EPSILON);
    assert!((stats.average_volume_per_day - 3_000.0).abs() < f64::EPSILON);
    assert_eq!(stats.current_streak, 7);
    assert_eq!(stats.longest_streak, 7);
    assert_eq!(stats.last_workout_at, Some(test_now()));
}

#[test]
fn test_same_day_sessions_count_as_one_training_day() {
    let calculator = create_test_stats_calculator();
    let records = vec![
        workout("Bench Press", test_now() - Duration::hours(8)),
        workout("Pull-ups", test_now() - Duration::hours(4)),
        workout("Squat", test_now()),
    ];

    let stats = calculator.calculate(&records);

    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.training_days, 1);
    assert_eq!(stats.current_streak, 1);
}

#[test]
fn test_streak_survives_a_rest_day_today() {
    let calculator = create_test_stats_calculator();
    let records = vec![workout("Squat", days_ago(2)), workout("Squat", days_ago(1))];

    assert_eq!(calculator.calculate(&records).current_streak, 2);
}

#[test]
fn test_streak_broken_after_two_rest_days() {
    let calculator = create_test_stats_calculator();
    let records = vec![workout("Squat", days_ago(3)), workout("Squat", days_ago(2))];

    let stats = calculator.calculate(&records);

    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 2);
}

#[test]
fn test_longest_streak_spans_history() {
    let calculator = create_test_stats_calculator();
    let mut records: Vec<WorkoutRecord> = (10..15).map(|day| workout("Plank", days_ago(day))).collect();
    records.push(workout("Plank", days_ago(1)));
    records.push(workout("Plank", days_ago(0)));

    let stats = calculator.calculate(&records);

    assert_eq!(stats.longest_streak, 5);
    assert_eq!(stats.current_streak, 2);
}

#[test]
fn test_most_frequent_category() {
    let calculator = create_test_stats_calculator();
    let records = vec![
        workout("Squat", days_ago(3)),
        workout("Bench Press", days_ago(2)),
        workout("Squat", days_ago(1)),
    ];

    let stats = calculator.calculate(&records);
    assert_eq!(stats.most_frequent_category.as_deref(), Some("Squat"));
}

#[test]
fn test_bodyweight_records_add_no_volume() {
    let calculator = create_test_stats_calculator();
    let records = vec![WorkoutRecord::new("Pull-ups", 0.0, 4, 8, test_now())];

    let stats = calculator.calculate(&records);

    assert!(stats.total_volume.abs() < f64::EPSILON);
    assert_eq!(stats.total_reps, 32);
    assert_eq!(stats.total_sets, 4);
}
