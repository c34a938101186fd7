// ABOUTME: Integration tests for multi-condition risk scoring and the dashboard composite
// ABOUTME: Covers baseline scores, factor attribution, and priority concern ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health
#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use chrono::Duration;
use common::{date, engine_with_user, seed_cycle_starts, seed_cycles, seed_symptom, set_profile};
use lunara_core::{CycleRecord, FlowLevel, UserHealthProfile};

#[tokio::test]
async fn new_user_gets_baseline_assessment() {
    let (engine, user) = engine_with_user().await;
    let assessment = engine.risk_assessment(user, date("2024-06-01")).await.unwrap();

    for score in assessment.scores() {
        assert!(score.score <= 0.1 + f64::EPSILON);
        assert!(score.confidence <= 0.2 + f64::EPSILON);
    }
    assert!(assessment.priority_concerns.is_empty());
    assert!(assessment.overall_health_score >= 89.0);
}

#[tokio::test]
async fn long_irregular_cycles_elevate_pcos() {
    let (engine, user) = engine_with_user().await;
    // Gaps of 40 and 55 days
    seed_cycle_starts(&engine, user, &["2024-01-01", "2024-02-10", "2024-04-05"]).await;

    let assessment = engine.risk_assessment(user, date("2024-06-01")).await.unwrap();
    assert!(assessment.pcos.score > 0.6);
    assert!(assessment
        .pcos
        .factors
        .iter()
        .any(|f| f.factor == "Long cycle length"));
    assert!(assessment
        .priority_concerns
        .first()
        .unwrap()
        .contains("PCOS"));
}

#[tokio::test]
async fn heavy_flow_history_feeds_anemia() {
    let (engine, user) = engine_with_user().await;
    for i in 0..4 {
        let mut record = CycleRecord::new(date("2024-01-01") + Duration::days(28 * i));
        record.flow_level = FlowLevel::VeryHeavy;
        engine.store().add_cycle(user, record).await.unwrap();
    }

    let assessment = engine.risk_assessment(user, date("2024-06-01")).await.unwrap();
    assert!(assessment
        .anemia
        .factors
        .iter()
        .any(|f| f.factor == "Consistently heavy periods"));
    assert!(assessment.anemia.score > 0.1);
}

#[tokio::test]
async fn old_symptoms_fall_outside_the_lookback() {
    let (engine, user) = engine_with_user().await;
    // Well over the 180-day lookback
    for i in 0..12 {
        seed_symptom(
            &engine,
            user,
            date("2022-01-01") + Duration::days(i),
            "pelvic_pain",
            9,
        )
        .await;
    }

    let assessment = engine.risk_assessment(user, date("2024-06-01")).await.unwrap();
    assert!(assessment.endometriosis.factors.is_empty());
    assert!(assessment.endometriosis.score <= 0.1 + f64::EPSILON);
}

#[tokio::test]
async fn self_reported_condition_contributes_a_factor() {
    let (engine, user) = engine_with_user().await;
    set_profile(
        &engine,
        user,
        UserHealthProfile {
            medical_conditions: vec!["suspected endometriosis".to_owned()],
            ..UserHealthProfile::default()
        },
    )
    .await;

    let assessment = engine.risk_assessment(user, date("2024-06-01")).await.unwrap();
    assert!(assessment
        .endometriosis
        .factors
        .iter()
        .any(|f| f.factor == "Self-reported condition"));
}

#[tokio::test]
async fn dashboard_composes_cycle_and_risk_views() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 28, 4).await;
    seed_symptom(&engine, user, date("2024-04-03"), "cramps", 6).await;
    seed_symptom(&engine, user, date("2024-04-04"), "fatigue", 5).await;

    let reference = date("2024-04-05");
    let summary = engine.dashboard_summary(user, reference).await.unwrap();
    assert!(summary.has_data);
    // Latest start 2024-03-25, so April 5 is cycle day 12
    assert_eq!(summary.current_cycle_day, Some(12));
    assert_eq!(summary.recent_symptoms.len(), 2);
    assert_eq!(summary.recent_symptoms[0].symptom_type, "fatigue");
    assert!(summary.overall_health_score > 0.0);
    assert_eq!(summary.risk_summary.len(), 4);
}

#[tokio::test]
async fn assessments_are_idempotent() {
    let (engine, user) = engine_with_user().await;
    seed_cycles(&engine, user, date("2024-01-01"), 30, 4).await;
    seed_symptom(&engine, user, date("2024-04-01"), "headache", 4).await;

    let reference = date("2024-04-10");
    let first = engine.risk_assessment(user, reference).await.unwrap();
    let second = engine.risk_assessment(user, reference).await.unwrap();
    assert_eq!(first, second);
}
