// ABOUTME: Analytic output types - risk scores, recommendations, and PMS forecasts
// ABOUTME: All ephemeral: recomputed per query from history, never a source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Health conditions covered by the risk scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Polycystic ovary syndrome
    Pcos,
    /// Endometriosis
    Endometriosis,
    /// Iron-deficiency anemia
    Anemia,
    /// Thyroid dysfunction
    Thyroid,
}

impl Condition {
    /// All scored conditions, in reporting order
    pub const ALL: [Self; 4] = [Self::Pcos, Self::Endometriosis, Self::Anemia, Self::Thyroid];

    /// Display name for user-facing output
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pcos => "PCOS",
            Self::Endometriosis => "Endometriosis",
            Self::Anemia => "Anemia",
            Self::Thyroid => "Thyroid",
        }
    }
}

/// Qualitative weight of a contributing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Minor contribution to the score
    Low,
    /// Moderate contribution
    Medium,
    /// Major contribution
    High,
}

/// A single matched factor contributing to a risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// What was observed (e.g. "Irregular cycle pattern")
    pub factor: String,
    /// Observed value rendered for display (e.g. "±8.2 days variation")
    pub value: String,
    /// Qualitative weight
    pub impact: Impact,
}

/// Heuristic risk estimate for one condition.
///
/// A risk score is an estimate derived from tracked data, never a
/// diagnosis; the factor list makes its basis inspectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Condition this score applies to
    pub condition: Condition,
    /// Estimated likelihood in [0, 1]
    pub score: f64,
    /// Confidence in the estimate in [0, 1], capped low under sparse data
    pub confidence: f64,
    /// Matched contributing factors
    pub factors: Vec<RiskFactor>,
}

/// An actionable recommendation surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Grouping category ("tracking", "lifestyle", "medical")
    pub category: String,
    /// Short title
    pub title: String,
    /// Longer explanation
    pub description: String,
    /// Priority 1-10, higher is more urgent
    pub priority: u8,
    /// Concrete steps the user can take
    pub action_steps: Vec<String>,
}

/// Likelihood of one symptom appearing on a forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLikelihood {
    /// Normalized symptom name
    pub symptom: String,
    /// Historical likelihood in percent, rounded half-up
    pub likelihood_percent: u8,
}

/// Forecast of likely symptoms for one upcoming day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmsDayForecast {
    /// Calendar day the forecast applies to
    pub date: NaiveDate,
    /// Cycle day the date falls on
    pub cycle_day: i64,
    /// Symptoms predicted for the day, highest likelihood first
    pub predicted_symptoms: Vec<SymptomLikelihood>,
}
