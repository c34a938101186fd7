// ABOUTME: Main library entry point for the Lunara health analytics platform
// ABOUTME: Composes storage, the analytics engine, and the chat intent dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

#![deny(unsafe_code)]

//! # Lunara
//!
//! A personal menstrual-health analytics engine: cycle phase classification,
//! next-period and fertility prediction, symptom pattern detection, PMS
//! forecasting, and multi-condition risk scoring.
//!
//! ## Architecture
//!
//! - **`lunara-core`**: data model (cycle, symptom, and profile records) and
//!   the shared error type
//! - **`lunara-intelligence`**: the pure analytics algorithms and their
//!   tunable configuration
//! - **This crate**: the [`storage::HealthStore`] seam, the
//!   [`engine::HealthEngine`] composing the analytics into per-user
//!   summaries, and the [`chat`] intent dispatcher on top of it
//!
//! Every analytic output is recomputed per query from current history and
//! is deterministic given the same records and reference date. Sparse
//! history degrades to `has_data = false` results, never errors.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lunara::engine::HealthEngine;
//! use lunara::storage::InMemoryStore;
//! use lunara_intelligence::IntelligenceConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = InMemoryStore::new();
//!     let user_id = store.register_user().await;
//!     let engine = HealthEngine::new(store, IntelligenceConfig::default());
//!
//!     let today = chrono::Utc::now().date_naive();
//!     let snapshot = engine.current_cycle(user_id, today).await?;
//!     println!("has_data: {}", snapshot.has_data);
//!     Ok(())
//! }
//! ```

/// Chat intent classification and dispatch onto the engine queries
pub mod chat;

/// The analytics engine composing predictions into per-user summaries
pub mod engine;

/// Logging configuration and structured logging setup
pub mod logging;

/// Storage seam and the in-memory reference implementation
pub mod storage;

pub use chat::{ChatAssistant, ChatResponse, Intent};
pub use engine::HealthEngine;
pub use storage::{HealthStore, InMemoryStore, SymptomQuery};
