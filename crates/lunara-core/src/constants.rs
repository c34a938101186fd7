// ABOUTME: Cycle and scoring constants shared across the analytics engine
// ABOUTME: Fallback averages, plausibility bounds, and severity limits organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

//! Domain constants used throughout the analytics engine.
//!
//! These are heuristic defaults, not clinical thresholds: everything that is
//! meaningfully tunable lives in `lunara-intelligence::config` instead.

/// Cycle-length defaults and plausibility bounds
pub mod cycle {
    /// Fallback cycle length (days) used before two cycles are recorded
    pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

    /// Fallback period length (days) used when no period durations are recorded
    pub const DEFAULT_PERIOD_LENGTH: i64 = 5;

    /// Shortest inter-start gap accepted into the prediction set (days).
    /// Gaps below this are treated as duplicate or erroneous entries.
    pub const MIN_PLAUSIBLE_CYCLE: i64 = 15;

    /// Longest inter-start gap accepted into the prediction set (days)
    pub const MAX_PLAUSIBLE_CYCLE: i64 = 60;

    /// Lower bound of the medically typical cycle range (days)
    pub const MIN_NORMAL_CYCLE: i64 = 21;

    /// Upper bound of the medically typical cycle range (days)
    pub const MAX_NORMAL_CYCLE: i64 = 35;
}

/// Symptom severity scale bounds
pub mod severity {
    /// Minimum severity on the logging scale
    pub const MIN_SEVERITY: u8 = 1;

    /// Maximum severity on the logging scale
    pub const MAX_SEVERITY: u8 = 10;
}

/// Body-mass-index boundaries used by risk factor matching
pub mod bmi {
    /// BMI threshold for the overweight factor
    pub const OVERWEIGHT: f64 = 25.0;

    /// BMI threshold for the obesity factor
    pub const OBESE: f64 = 30.0;
}
