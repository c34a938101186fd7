// ABOUTME: Core types and constants for the Lunara health analytics platform
// ABOUTME: Foundation crate with error handling, domain models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

#![deny(unsafe_code)]

//! # Lunara Core
//!
//! Foundation crate providing shared types and constants for the Lunara
//! health analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Cycle and scoring constants organized by domain
//! - **models**: Core data models (`CycleRecord`, `SymptomRecord`, `UserHealthProfile`, ...)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (cycles, symptoms, profiles, analytic outputs)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    Condition, CycleRecord, FlowLevel, Impact, PmsDayForecast, Recommendation, RiskFactor,
    RiskScore, SymptomCategory, SymptomLikelihood, SymptomRecord, UserHealthProfile,
};
