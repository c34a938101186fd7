// ABOUTME: In-memory HealthStore used by tests, demos, and single-process deployments
// ABOUTME: Per-user records behind one async RwLock; reads clone a consistent snapshot

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use std::collections::HashMap;

use async_trait::async_trait;
use lunara_core::{
    AppError, AppResult, CycleRecord, SymptomRecord, UserHealthProfile,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{HealthStore, SymptomQuery};

#[derive(Debug, Default, Clone)]
struct UserRecords {
    cycles: Vec<CycleRecord>,
    symptoms: Vec<SymptomRecord>,
    profile: UserHealthProfile,
}

/// In-memory reference implementation of [`HealthStore`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<Uuid, UserRecords>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user with no records and return its id
    pub async fn register_user(&self) -> Uuid {
        let user_id = Uuid::new_v4();
        self.users
            .write()
            .await
            .insert(user_id, UserRecords::default());
        debug!(%user_id, "registered user");
        user_id
    }

    /// Append a cycle record for the user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user id.
    pub async fn add_cycle(&self, user_id: Uuid, record: CycleRecord) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| unknown_user(user_id))?;
        user.cycles.push(record);
        Ok(())
    }

    /// Append a symptom record for the user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user id.
    pub async fn add_symptom(&self, user_id: Uuid, record: SymptomRecord) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| unknown_user(user_id))?;
        user.symptoms.push(record);
        Ok(())
    }

    /// Replace the user's health profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user id.
    pub async fn set_profile(&self, user_id: Uuid, profile: UserHealthProfile) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| unknown_user(user_id))?;
        user.profile = profile;
        Ok(())
    }
}

fn unknown_user(user_id: Uuid) -> AppError {
    AppError::not_found(format!("user {user_id} not found")).with_user_id(user_id)
}

#[async_trait]
impl HealthStore for InMemoryStore {
    async fn get_cycles(&self, user_id: Uuid) -> AppResult<Vec<CycleRecord>> {
        let users = self.users.read().await;
        let user = users.get(&user_id).ok_or_else(|| unknown_user(user_id))?;
        let mut cycles = user.cycles.clone();
        cycles.sort_unstable_by_key(|c| std::cmp::Reverse(c.start_date));
        Ok(cycles)
    }

    async fn get_symptoms(
        &self,
        user_id: Uuid,
        query: SymptomQuery,
    ) -> AppResult<Vec<SymptomRecord>> {
        let users = self.users.read().await;
        let user = users.get(&user_id).ok_or_else(|| unknown_user(user_id))?;
        let mut symptoms: Vec<SymptomRecord> = user
            .symptoms
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        symptoms.sort_unstable_by_key(|s| s.date);
        Ok(symptoms)
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<UserHealthProfile> {
        let users = self.users.read().await;
        let user = users.get(&user_id).ok_or_else(|| unknown_user(user_id))?;
        Ok(user.profile.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use lunara_core::{ErrorCode, SymptomCategory};

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get_cycles(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_cycles_returned_most_recent_first() {
        let store = InMemoryStore::new();
        let user = store.register_user().await;
        store
            .add_cycle(user, CycleRecord::new("2024-01-01".parse().unwrap()))
            .await
            .unwrap();
        store
            .add_cycle(user, CycleRecord::new("2024-02-01".parse().unwrap()))
            .await
            .unwrap();

        let cycles = store.get_cycles(user).await.unwrap();
        assert_eq!(cycles[0].start_date, "2024-02-01".parse().unwrap());
    }

    #[tokio::test]
    async fn test_symptom_query_filters() {
        let store = InMemoryStore::new();
        let user = store.register_user().await;
        store
            .add_symptom(
                user,
                SymptomRecord::new("2024-03-01".parse().unwrap(), "cramps", 6),
            )
            .await
            .unwrap();
        store
            .add_symptom(
                user,
                SymptomRecord::new("2024-03-10".parse().unwrap(), "anxiety", 4),
            )
            .await
            .unwrap();

        let emotional = store
            .get_symptoms(
                user,
                SymptomQuery {
                    category: Some(SymptomCategory::Emotional),
                    ..SymptomQuery::all()
                },
            )
            .await
            .unwrap();
        assert_eq!(emotional.len(), 1);
        assert_eq!(emotional[0].symptom_type, "anxiety");

        let early = store
            .get_symptoms(
                user,
                SymptomQuery {
                    end: Some("2024-03-05".parse().unwrap()),
                    ..SymptomQuery::all()
                },
            )
            .await
            .unwrap();
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].symptom_type, "cramps");
    }
}
