// ABOUTME: Integration tests for cycle classification, prediction, and pattern queries
// ABOUTME: Exercises the engine end to end over the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health
#![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

mod common;

use chrono::Duration;
use common::{date, engine_with_user, seed_cycle_starts, seed_cycles};
use lunara_core::ErrorCode;
use lunara_intelligence::CyclePhase;
use uuid::Uuid;

#[tokio::test]
async fn zero_history_degrades_without_error() {
    let (engine, user) = engine_with_user().await;

    let current = engine.current_cycle(user, date("2024-04-01")).await.unwrap();
    assert!(!current.has_data);
    assert!(current.phase.is_none());
    assert!(current.predicted_next_start.is_none());

    let prediction = engine.prediction(user, date("2024-04-01")).await.unwrap();
    assert!(!prediction.has_data);
    assert!(prediction.next_period_start.is_none());
    assert_eq!(prediction.confidence, 0.0);
}

#[tokio::test]
async fn unknown_user_is_a_hard_error() {
    let (engine, _) = engine_with_user().await;
    let err = engine
        .current_cycle(Uuid::new_v4(), date("2024-04-01"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn two_identical_gaps_predict_exactly_one_length_ahead() {
    let (engine, user) = engine_with_user().await;
    seed_cycle_starts(&engine, user, &["2024-01-01", "2024-01-31", "2024-03-01"]).await;

    let prediction = engine.prediction(user, date("2024-03-05")).await.unwrap();
    assert_eq!(prediction.next_period_start, Some(date("2024-03-31")));
    assert!(prediction.confidence > 0.0);
}

#[tokio::test]
async fn four_start_scenario_matches_expected_ranges() {
    let (engine, user) = engine_with_user().await;
    // Gaps of 28, 29, 29 days
    seed_cycle_starts(
        &engine,
        user,
        &["2024-01-01", "2024-01-29", "2024-02-27", "2024-03-28"],
    )
    .await;

    let prediction = engine.prediction(user, date("2024-04-01")).await.unwrap();
    assert!((28.4..=29.0).contains(&prediction.average_cycle_length));
    let ahead = (prediction.next_period_start.unwrap() - date("2024-03-28")).num_days();
    assert!((27..=30).contains(&ahead));

    let patterns = engine.patterns(user).await.unwrap();
    assert!(patterns.cycle.is_regular);
    assert!(patterns.cycle.regularity_score > 0.9);
    assert_eq!(patterns.cycle.total_cycles_tracked, 3);
}

#[tokio::test]
async fn regularity_drops_as_variance_grows() {
    let (regular_engine, regular_user) = engine_with_user().await;
    seed_cycles(&regular_engine, regular_user, date("2024-01-01"), 28, 5).await;

    let (erratic_engine, erratic_user) = engine_with_user().await;
    // Same mean gap (28) with large swings
    seed_cycle_starts(
        &erratic_engine,
        erratic_user,
        &["2024-01-01", "2024-01-21", "2024-02-26", "2024-03-17", "2024-04-22"],
    )
    .await;

    let steady = regular_engine.patterns(regular_user).await.unwrap();
    let erratic = erratic_engine.patterns(erratic_user).await.unwrap();
    assert!(erratic.cycle.regularity_score < steady.cycle.regularity_score);
}

#[tokio::test]
async fn phase_progresses_through_the_cycle() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;
    let last_start = date("2024-03-25");

    let menstrual = engine.current_cycle(user, last_start + Duration::days(2)).await.unwrap();
    assert_eq!(menstrual.phase, Some(CyclePhase::Menstrual));

    let follicular = engine.current_cycle(user, last_start + Duration::days(8)).await.unwrap();
    assert_eq!(follicular.phase, Some(CyclePhase::Follicular));

    let luteal = engine.current_cycle(user, last_start + Duration::days(18)).await.unwrap();
    assert_eq!(luteal.phase, Some(CyclePhase::Luteal));

    let overdue = engine.current_cycle(user, last_start + Duration::days(40)).await.unwrap();
    assert!(overdue.period_overdue);
    assert_eq!(overdue.phase, Some(CyclePhase::LateLuteal));
}

#[tokio::test]
async fn repeated_queries_are_idempotent() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;
    let reference = date("2024-04-05");

    let first = engine.current_cycle(user, reference).await.unwrap();
    let second = engine.current_cycle(user, reference).await.unwrap();
    assert_eq!(first, second);

    let patterns_first = engine.patterns(user).await.unwrap();
    let patterns_second = engine.patterns(user).await.unwrap();
    assert_eq!(patterns_first, patterns_second);
}

#[tokio::test]
async fn implausible_gap_does_not_poison_history() {
    let (engine, user) = engine_with_user().await;
    // 28-day gaps around one 150-day hole
    seed_cycle_starts(
        &engine,
        user,
        &["2023-06-01", "2023-06-29", "2023-11-26", "2023-12-24"],
    )
    .await;

    let patterns = engine.patterns(user).await.unwrap();
    assert_eq!(patterns.cycle.total_cycles_tracked, 2);
    assert_eq!(patterns.cycle.longest_cycle, Some(28));
}
