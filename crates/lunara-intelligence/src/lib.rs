// ABOUTME: Cycle analytics algorithms, pattern detection, and risk scoring engine
// ABOUTME: Pure synchronous computations over per-user history snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

#![deny(unsafe_code)]

//! # Lunara Intelligence
//!
//! The analytics engine behind Lunara: turns a user's cycle and symptom
//! history into phase classification, cycle/fertility predictions, symptom
//! pattern detection, PMS forecasting, and multi-condition risk scoring.
//!
//! Every function here is a pure, deterministic computation over a snapshot
//! of one user's records: no I/O, no shared mutable state, no caching.
//! Sparse history is the expected state for new users - functions degrade to
//! `has_data = false` results instead of erroring.
//!
//! All outputs are heuristic estimates. Nothing in this crate is a medical
//! conclusion, and the tunable parameters in [`config`] carry no clinical
//! derivation.

/// Tunable parameters for every analytic component
pub mod config;

/// Cycle day and phase classification
pub mod phase;

/// Next-period prediction and cycle pattern statistics
pub mod prediction;

/// Ovulation, fertile window, and conception-chance estimation
pub mod fertility;

/// Symptom frequency, trend, and co-occurrence analysis
pub mod symptom_patterns;

/// Per-user PMS symptom forecasting
pub mod pms;

/// Weighted-factor condition risk scoring
pub mod risk;

mod stats;

pub use config::IntelligenceConfig;
pub use fertility::{FertilityCalculator, FertilityOutlook, FertilityStatus};
pub use phase::{CyclePhase, CycleSnapshot, PhaseClassifier};
pub use pms::{ConfidenceBucket, DataQuality, PmsForecast, PmsPredictor};
pub use prediction::{CyclePatterns, CyclePrediction, CyclePredictor};
pub use risk::{RiskAssessment, RiskScorer};
pub use symptom_patterns::{
    rank_by_frequency, SeverityTrend, SymptomAnalysis, SymptomFrequency, SymptomPatternAnalyzer,
};
