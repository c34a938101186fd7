// ABOUTME: Shared test fixtures for the engine integration tests
// ABOUTME: Seeds in-memory stores with cycle and symptom histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

use chrono::{Duration, NaiveDate};
use lunara::engine::HealthEngine;
use lunara::storage::InMemoryStore;
use lunara_core::{CycleRecord, SymptomRecord, UserHealthProfile};
use lunara_intelligence::IntelligenceConfig;
use uuid::Uuid;

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Engine over a fresh in-memory store with one registered user
pub async fn engine_with_user() -> (HealthEngine<InMemoryStore>, Uuid) {
    let store = InMemoryStore::new();
    let user_id = store.register_user().await;
    (
        HealthEngine::new(store, IntelligenceConfig::default()),
        user_id,
    )
}

/// Seed evenly spaced cycle starts: `count` cycles, `gap_days` apart,
/// beginning at `first_start`. Returns the start dates in order.
pub async fn seed_cycles(
    engine: &HealthEngine<InMemoryStore>,
    user_id: Uuid,
    first_start: NaiveDate,
    gap_days: i64,
    count: usize,
) -> Vec<NaiveDate> {
    let mut starts = Vec::with_capacity(count);
    for i in 0..count {
        let start = first_start + Duration::days(gap_days * i as i64);
        let mut record = CycleRecord::new(start);
        record.end_date = Some(start + Duration::days(4));
        engine.store().add_cycle(user_id, record).await.unwrap();
        starts.push(start);
    }
    starts
}

/// Seed cycle records with explicit start dates and no end dates
pub async fn seed_cycle_starts(
    engine: &HealthEngine<InMemoryStore>,
    user_id: Uuid,
    starts: &[&str],
) {
    for start in starts {
        engine
            .store()
            .add_cycle(user_id, CycleRecord::new(date(start)))
            .await
            .unwrap();
    }
}

pub async fn seed_symptom(
    engine: &HealthEngine<InMemoryStore>,
    user_id: Uuid,
    on: NaiveDate,
    kind: &str,
    severity: u8,
) {
    engine
        .store()
        .add_symptom(user_id, SymptomRecord::new(on, kind, severity))
        .await
        .unwrap();
}

pub async fn set_profile(
    engine: &HealthEngine<InMemoryStore>,
    user_id: Uuid,
    profile: UserHealthProfile,
) {
    engine.store().set_profile(user_id, profile).await.unwrap();
}
