// ABOUTME: Cycle prediction and symptom analysis tunables
// ABOUTME: Moving-average window, confidence coefficients, regularity and trend thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use serde::{Deserialize, Serialize};

/// Parameters for the weighted-moving-average cycle predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclePredictionConfig {
    /// Number of most recent cycle lengths fed into the weighted average
    pub moving_average_window: usize,
    /// Cycle count at which the sample-size confidence factor saturates
    pub cycles_for_full_confidence: usize,
    /// Confidence assigned when only one record exists and no gap can be
    /// computed
    pub single_record_confidence: f64,
    /// Standard deviation (days) above which cycles are not considered
    /// regular
    pub regularity_std_days: f64,
}

impl Default for CyclePredictionConfig {
    fn default() -> Self {
        Self {
            moving_average_window: 6,
            cycles_for_full_confidence: 6,
            single_record_confidence: 0.3,
            regularity_std_days: 7.0,
        }
    }
}

/// Parameters for the trailing-window symptom pattern analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysisConfig {
    /// Trailing window length in days
    pub window_days: i64,
    /// Relative change in mean severity between window halves that counts
    /// as a trend (0.1 = 10%)
    pub trend_threshold: f64,
    /// Minimum same-date co-occurrence count for a pair to be reported
    pub correlation_min_support: usize,
    /// Maximum entries in the most-common ranking
    pub most_common_limit: usize,
    /// Average severity above which a consultation recommendation fires
    pub consultation_severity: f64,
}

impl Default for SymptomAnalysisConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            trend_threshold: 0.1,
            correlation_min_support: 3,
            most_common_limit: 5,
            consultation_severity: 6.0,
        }
    }
}
