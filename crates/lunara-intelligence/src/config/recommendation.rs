// ABOUTME: Rule thresholds for the recommendation generator
// ABOUTME: Covers tracking nudges, pain and fatigue guidance, and the output limit

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use serde::{Deserialize, Serialize};

/// Parameters for rule-based recommendation generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Cycle count below which a "keep tracking" nudge is produced
    pub min_cycles_tracked: usize,
    /// Symptom count below which a daily-logging nudge is produced
    pub min_symptoms_tracked: usize,
    /// Minimum pain entries before pain guidance is considered
    pub pain_min_count: usize,
    /// Average pain severity that triggers pain-management guidance
    pub pain_severity_threshold: f64,
    /// Minimum fatigue entries that trigger energy guidance
    pub fatigue_min_count: usize,
    /// Maximum recommendations returned per generation pass
    pub max_recommendations: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_cycles_tracked: 3,
            min_symptoms_tracked: 10,
            pain_min_count: 3,
            pain_severity_threshold: 6.0,
            fatigue_min_count: 3,
            max_recommendations: 5,
        }
    }
}
