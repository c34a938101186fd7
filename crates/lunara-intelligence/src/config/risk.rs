// ABOUTME: Threshold and weight tables for condition risk scoring
// ABOUTME: Each condition carries its own factor cutoffs plus confidence ramp parameters

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use serde::{Deserialize, Serialize};

/// A single scored factor rule: when its threshold trips, the rule
/// contributes `score` at `weight` to the condition's weighted average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorRule {
    pub score: f64,
    pub weight: f64,
}

impl FactorRule {
    pub(crate) const fn new(score: f64, weight: f64) -> Self {
        Self { score, weight }
    }
}

/// Confidence ramp: starts at `floor`, grows by `data_points / divisor`,
/// saturates at `cap`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceRamp {
    pub floor: f64,
    pub divisor: f64,
    pub cap: f64,
}

impl ConfidenceRamp {
    #[must_use]
    pub fn at(&self, data_points: usize) -> f64 {
        (self.floor + data_points as f64 / self.divisor).min(self.cap)
    }
}

/// PCOS factor thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcosRules {
    pub long_cycle_days: f64,
    pub long_cycle: FactorRule,
    pub slightly_long_cycle_days: f64,
    pub slightly_long_cycle: FactorRule,
    pub normal_cycle: FactorRule,
    pub irregular_std_days: f64,
    pub irregular: FactorRule,
    pub acne_min_count: usize,
    pub acne: FactorRule,
    pub hair_min_count: usize,
    pub hair: FactorRule,
    pub weight_min_count: usize,
    pub weight: FactorRule,
    pub obese_bmi: FactorRule,
    pub overweight_bmi: FactorRule,
    pub confidence: ConfidenceRamp,
}

/// Endometriosis factor thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndometriosisRules {
    pub severe_pain_severity: f64,
    pub severe_pain: FactorRule,
    pub moderate_pain_severity: f64,
    pub moderate_pain: FactorRule,
    pub frequent_pain_count: usize,
    pub frequent_pain: FactorRule,
    pub heavy_cycle_min_count: usize,
    pub heavy_cycles: FactorRule,
    pub fatigue_min_count: usize,
    pub fatigue: FactorRule,
    pub confidence: ConfidenceRamp,
}

/// Anemia factor thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnemiaRules {
    pub heavy_ratio_major: f64,
    pub heavy_major: FactorRule,
    pub heavy_ratio_minor: f64,
    pub heavy_minor: FactorRule,
    pub fatigue_severity: f64,
    pub fatigue: FactorRule,
    pub dizziness_min_count: usize,
    pub dizziness: FactorRule,
    pub headache_min_count: usize,
    pub headaches: FactorRule,
    pub confidence: ConfidenceRamp,
}

/// Thyroid factor thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThyroidRules {
    pub weight_min_count: usize,
    pub weight: FactorRule,
    pub fatigue_min_count: usize,
    pub fatigue: FactorRule,
    pub mood_min_count: usize,
    pub mood: FactorRule,
    pub very_irregular_std_days: f64,
    pub very_irregular: FactorRule,
    pub hair: FactorRule,
    pub confidence: ConfidenceRamp,
}

/// Full risk scoring configuration across tracked conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoringConfig {
    pub pcos: PcosRules,
    pub endometriosis: EndometriosisRules,
    pub anemia: AnemiaRules,
    pub thyroid: ThyroidRules,
    /// Factor applied when the profile self-reports a matching condition
    pub self_reported: FactorRule,
    /// Minimum cycle count before cycle-shape factors apply
    pub min_cycles_for_patterns: usize,
    /// Symptom lookback window in days
    pub symptom_lookback_days: i64,
    /// Baseline score reported when no factor rule trips
    pub baseline_score: f64,
    /// Confidence reported alongside the baseline score
    pub baseline_confidence: f64,
    /// Scores at or above this threshold surface as priority concerns
    pub high_risk_threshold: f64,
}

impl Default for RiskScoringConfig {
    fn default() -> Self {
        Self {
            pcos: PcosRules {
                long_cycle_days: 35.0,
                long_cycle: FactorRule::new(0.8, 3.0),
                slightly_long_cycle_days: 32.0,
                slightly_long_cycle: FactorRule::new(0.5, 3.0),
                normal_cycle: FactorRule::new(0.1, 3.0),
                irregular_std_days: 7.0,
                irregular: FactorRule::new(0.7, 2.0),
                acne_min_count: 3,
                acne: FactorRule::new(0.6, 1.5),
                hair_min_count: 2,
                hair: FactorRule::new(0.5, 1.5),
                weight_min_count: 2,
                weight: FactorRule::new(0.4, 1.0),
                obese_bmi: FactorRule::new(0.6, 1.5),
                overweight_bmi: FactorRule::new(0.3, 1.0),
                confidence: ConfidenceRamp {
                    floor: 0.3,
                    divisor: 50.0,
                    cap: 0.9,
                },
            },
            endometriosis: EndometriosisRules {
                severe_pain_severity: 7.0,
                severe_pain: FactorRule::new(0.8, 3.0),
                moderate_pain_severity: 5.0,
                moderate_pain: FactorRule::new(0.5, 3.0),
                frequent_pain_count: 10,
                frequent_pain: FactorRule::new(0.7, 2.0),
                heavy_cycle_min_count: 2,
                heavy_cycles: FactorRule::new(0.5, 1.5),
                fatigue_min_count: 5,
                fatigue: FactorRule::new(0.4, 1.0),
                confidence: ConfidenceRamp {
                    floor: 0.3,
                    divisor: 40.0,
                    cap: 0.85,
                },
            },
            anemia: AnemiaRules {
                heavy_ratio_major: 0.5,
                heavy_major: FactorRule::new(0.7, 3.0),
                heavy_ratio_minor: 0.25,
                heavy_minor: FactorRule::new(0.4, 2.0),
                fatigue_severity: 6.0,
                fatigue: FactorRule::new(0.6, 2.0),
                dizziness_min_count: 2,
                dizziness: FactorRule::new(0.5, 1.5),
                headache_min_count: 5,
                headaches: FactorRule::new(0.3, 1.0),
                confidence: ConfidenceRamp {
                    floor: 0.3,
                    divisor: 40.0,
                    cap: 0.85,
                },
            },
            thyroid: ThyroidRules {
                weight_min_count: 2,
                weight: FactorRule::new(0.5, 2.0),
                fatigue_min_count: 5,
                fatigue: FactorRule::new(0.4, 1.5),
                mood_min_count: 8,
                mood: FactorRule::new(0.4, 1.0),
                very_irregular_std_days: 10.0,
                very_irregular: FactorRule::new(0.5, 1.5),
                hair: FactorRule::new(0.4, 1.0),
                confidence: ConfidenceRamp {
                    floor: 0.25,
                    divisor: 50.0,
                    cap: 0.8,
                },
            },
            self_reported: FactorRule::new(0.7, 2.0),
            min_cycles_for_patterns: 3,
            symptom_lookback_days: 180,
            baseline_score: 0.1,
            baseline_confidence: 0.2,
            high_risk_threshold: 0.6,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ramp_saturates() {
        let ramp = ConfidenceRamp {
            floor: 0.3,
            divisor: 50.0,
            cap: 0.9,
        };
        assert!((ramp.at(0) - 0.3).abs() < f64::EPSILON);
        assert!((ramp.at(25) - 0.8).abs() < 1e-9);
        assert!((ramp.at(500) - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_keep_threshold_in_unit_interval() {
        let config = RiskScoringConfig::default();
        assert!(config.high_risk_threshold > 0.0 && config.high_risk_threshold <= 1.0);
        assert!(config.baseline_score < config.high_risk_threshold);
    }
}
