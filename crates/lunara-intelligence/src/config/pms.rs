// ABOUTME: PMS forecasting tunables - window length, offsets, confidence buckets, tip table
// ABOUTME: Proactive tips are keyed by curated symptom names; unknown symptoms get no tip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use serde::{Deserialize, Serialize};

/// Parameters for the per-user PMS symptom forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmsConfig {
    /// Days before the predicted period that count as the PMS window
    pub pms_window_days: i64,
    /// Deepest offset (days before a period start) tracked in the
    /// occurrence table
    pub max_offset_days: i64,
    /// Maximum days forecast ahead (bounded at the predicted period start)
    pub forecast_lookahead_days: i64,
    /// Maximum symptoms listed per forecast day
    pub top_symptoms_per_day: usize,
    /// Minimum likelihood (percent) for a symptom to appear in a forecast
    pub min_likelihood_percent: u8,
    /// Cycle count below which data quality is reported as low
    pub low_confidence_cycles: usize,
    /// Cycle count at which data quality is reported as high
    pub high_confidence_cycles: usize,
}

impl PmsConfig {
    /// Static self-care tip for a top predicted symptom. Returns `None` for
    /// symptoms outside the curated tip table - callers surface the absence
    /// explicitly instead of inventing advice.
    #[must_use]
    pub fn proactive_tip(symptom: &str) -> Option<&'static str> {
        let tip = match symptom {
            "cramps" => "Keep a heat pad handy and favor gentle movement in the days ahead",
            "headache" => "Stay ahead of hydration and watch caffeine in the coming days",
            "fatigue" => "Protect your sleep schedule this week - aim for 7-9 hours",
            "mood_swings" | "irritability" | "anxiety" => {
                "Plan lighter commitments and build in short decompression breaks"
            }
            "bloating" => "Reduce salty foods and carbonated drinks over the next few days",
            "breast_tenderness" => "A well-fitted, softer bra can ease the days before your period",
            "food_cravings" => "Stock balanced snacks now so cravings have a gentler outlet",
            "acne" => "Keep skincare simple and avoid introducing new products this week",
            _ => return None,
        };
        Some(tip)
    }
}

impl Default for PmsConfig {
    fn default() -> Self {
        Self {
            pms_window_days: 5,
            max_offset_days: 10,
            forecast_lookahead_days: 7,
            top_symptoms_per_day: 3,
            min_likelihood_percent: 20,
            low_confidence_cycles: 3,
            high_confidence_cycles: 6,
        }
    }
}
