// ABOUTME: Core data models for cycles, symptoms, profiles, and analytic outputs
// ABOUTME: Re-exports the model submodules so callers can use lunara_core::models::*
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

//! Core data models.
//!
//! `CycleRecord` and `SymptomRecord` are user-authored and durable; the
//! analytic types (`RiskScore`, `PmsDayForecast`, ...) are ephemeral outputs,
//! recomputed per query and never a source of truth.

/// Menstrual cycle records and flow levels
pub mod cycle;

/// User health profile and flags
pub mod profile;

/// Symptom records, categories, and the curated symptom catalog
pub mod symptom;

/// Analytic output types (risk scores, recommendations, PMS forecasts)
pub mod insight;

pub use cycle::{CycleRecord, FlowLevel};
pub use insight::{
    Condition, Impact, PmsDayForecast, Recommendation, RiskFactor, RiskScore, SymptomLikelihood,
};
pub use profile::UserHealthProfile;
pub use symptom::{SymptomCategory, SymptomRecord};
