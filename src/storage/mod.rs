// ABOUTME: Storage seam between the analytics engine and whatever persists user records
// ABOUTME: One consistent per-user read; the engine never writes through this trait

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

pub mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use lunara_core::{AppResult, CycleRecord, SymptomCategory, SymptomRecord, UserHealthProfile};
use uuid::Uuid;

/// Optional filters for a symptom read
#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomQuery {
    /// Inclusive lower date bound
    pub start: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub end: Option<NaiveDate>,
    pub category: Option<SymptomCategory>,
}

impl SymptomQuery {
    /// Filter covering all of a user's symptom history
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
            category: None,
        }
    }

    pub(crate) fn matches(&self, record: &SymptomRecord) -> bool {
        self.start.is_none_or(|s| record.date >= s)
            && self.end.is_none_or(|e| record.date <= e)
            && self.category.is_none_or(|c| record.category == c)
    }
}

/// Read access to one user's health records.
///
/// The engine reads a user's snapshot through this trait and computes
/// everything else; implementations own durability and write paths. All
/// reads fail with `ResourceNotFound` for an unknown user id - an unknown
/// id is a caller bug, unlike a known user with no data yet.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Cycle records ordered most recent start first
    async fn get_cycles(&self, user_id: Uuid) -> AppResult<Vec<CycleRecord>>;

    /// Symptom records matching the query, ordered by date ascending
    async fn get_symptoms(&self, user_id: Uuid, query: SymptomQuery)
        -> AppResult<Vec<SymptomRecord>>;

    async fn get_profile(&self, user_id: Uuid) -> AppResult<UserHealthProfile>;
}
