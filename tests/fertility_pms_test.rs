// ABOUTME: Integration tests for fertility estimation and PMS forecasting queries
// ABOUTME: Covers birth-control gating, fertile windows, and offset-table likelihoods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health
#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use chrono::Duration;
use common::{date, engine_with_user, seed_cycles, seed_symptom, set_profile};
use lunara_core::UserHealthProfile;
use lunara_intelligence::{ConfidenceBucket, FertilityStatus};

#[tokio::test]
async fn fertile_window_ends_on_estimated_ovulation() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;

    let prediction = engine.prediction(user, date("2024-04-01")).await.unwrap();
    let ovulation = prediction.next_ovulation.unwrap();
    assert_eq!(
        ovulation,
        prediction.next_period_start.unwrap() - Duration::days(14)
    );
    assert_eq!(prediction.fertile_window_end, Some(ovulation));
    assert_eq!(
        prediction.fertile_window_start,
        Some(ovulation - Duration::days(5))
    );
}

#[tokio::test]
async fn fertility_status_peaks_on_ovulation_day() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;
    // Last start 2024-03-25, next predicted 2024-04-22, ovulation 2024-04-08

    let peak = engine.prediction(user, date("2024-04-08")).await.unwrap();
    assert_eq!(peak.fertility_status, Some(FertilityStatus::Peak));

    let mid_window = engine.prediction(user, date("2024-04-05")).await.unwrap();
    assert_eq!(mid_window.fertility_status, Some(FertilityStatus::Fertile));

    let early = engine.prediction(user, date("2024-03-27")).await.unwrap();
    assert_eq!(early.fertility_status, Some(FertilityStatus::Low));
    assert!(early
        .fertility_status_message
        .unwrap()
        .contains("fertile window starts in"));

    let after = engine.prediction(user, date("2024-04-15")).await.unwrap();
    assert_eq!(after.fertility_status, Some(FertilityStatus::Low));
    assert!(after
        .fertility_status_message
        .unwrap()
        .contains("post-ovulation"));
}

#[tokio::test]
async fn duplicate_same_day_logs_keep_likelihood_within_bounds() {
    let (engine, user) = engine_with_user().await;
    let starts = seed_cycles(&engine, user, date("2024-01-01"), 28, 6).await;
    // Cramps logged twice on the same day before every start
    for start in &starts {
        seed_symptom(&engine, user, *start - Duration::days(3), "cramps", 8).await;
        seed_symptom(&engine, user, *start - Duration::days(3), "cramps", 5).await;
    }

    let prediction = engine.prediction(user, date("2024-06-01")).await.unwrap();
    let reference = prediction.next_period_start.unwrap() - Duration::days(3);
    let forecast = engine.pms_prediction(user, reference).await.unwrap();

    let cramps = forecast
        .predictions
        .iter()
        .find(|p| p.date == reference)
        .unwrap()
        .predicted_symptoms
        .iter()
        .find(|s| s.symptom == "cramps")
        .unwrap();
    assert_eq!(cramps.likelihood_percent, 100);
}

#[tokio::test]
async fn birth_control_disables_fertility_regardless_of_data() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 6).await;
    set_profile(
        &engine,
        user,
        UserHealthProfile {
            is_on_birth_control: true,
            ..UserHealthProfile::default()
        },
    )
    .await;

    let prediction = engine.prediction(user, date("2024-04-01")).await.unwrap();
    assert!(!prediction.fertility_enabled);
    assert!(prediction.next_ovulation.is_none());
    // Period prediction itself is unaffected
    assert!(prediction.next_period_start.is_some());
}

#[tokio::test]
async fn five_of_six_cycles_forecast_eighty_three_percent() {
    let (engine, user) = engine_with_user().await;
    let starts = seed_cycles(&engine, user, date("2024-01-01"), 28, 6).await;
    // Cramps three days before five of the six recorded starts
    for start in starts.iter().take(5) {
        seed_symptom(&engine, user, *start - Duration::days(3), "cramps", 8).await;
    }

    let prediction = engine.prediction(user, date("2024-06-01")).await.unwrap();
    let reference = prediction.next_period_start.unwrap() - Duration::days(3);
    let forecast = engine.pms_prediction(user, reference).await.unwrap();

    assert!(forecast.is_pms_phase);
    let day = forecast
        .predictions
        .iter()
        .find(|p| p.date == reference)
        .unwrap();
    let cramps = day
        .predicted_symptoms
        .iter()
        .find(|s| s.symptom == "cramps")
        .unwrap();
    assert_eq!(cramps.likelihood_percent, 83);
    assert_eq!(forecast.data_quality.confidence, ConfidenceBucket::High);
    assert!(!forecast.proactive_recommendations.is_empty());
}

#[tokio::test]
async fn sparse_history_reports_low_quality_forecast() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-03-01"), 28, 2).await;

    let forecast = engine.pms_prediction(user, date("2024-04-20")).await.unwrap();
    assert_eq!(forecast.data_quality.confidence, ConfidenceBucket::Low);
    assert!(!forecast.has_predictions);
}

#[tokio::test]
async fn mid_cycle_reference_is_outside_pms_phase() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;

    let prediction = engine.prediction(user, date("2024-04-01")).await.unwrap();
    let reference = prediction.next_period_start.unwrap() - Duration::days(14);
    let forecast = engine.pms_prediction(user, reference).await.unwrap();
    assert!(!forecast.is_pms_phase);
    assert_eq!(forecast.days_until_period, Some(14));
}
