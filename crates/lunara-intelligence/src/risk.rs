// ABOUTME: Weighted-factor risk scoring for PCOS, endometriosis, anemia, and thyroid
// ABOUTME: Every score carries its contributing factors; sparse data caps confidence low

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::NaiveDate;
use lunara_core::constants::bmi;
use lunara_core::{
    Condition, CycleRecord, Impact, RiskFactor, RiskScore, SymptomCategory, SymptomRecord,
    UserHealthProfile,
};
use serde::{Deserialize, Serialize};

use crate::config::{ConfidenceRamp, FactorRule, IntelligenceConfig, RiskScoringConfig};
use crate::prediction::observed_cycle_lengths;
use crate::stats;

/// Full multi-condition risk assessment.
///
/// Scores are heuristic estimates over tracked data, surfaced with their
/// contributing factors so the basis stays inspectable. Never a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub pcos: RiskScore,
    pub endometriosis: RiskScore,
    pub anemia: RiskScore,
    pub thyroid: RiskScore,
    /// 100 minus the mean condition risk, in `[0, 100]`
    pub overall_health_score: f64,
    /// Conditions above the high-risk threshold, highest score first
    pub priority_concerns: Vec<String>,
    pub calculated_at: NaiveDate,
}

impl RiskAssessment {
    /// Scores in fixed condition order, for aggregation
    #[must_use]
    pub fn scores(&self) -> [&RiskScore; 4] {
        [&self.pcos, &self.endometriosis, &self.anemia, &self.thyroid]
    }
}

/// Accumulates matched factor rules into a weighted score
struct FactorAccumulator {
    scores: Vec<f64>,
    weights: Vec<f64>,
    factors: Vec<RiskFactor>,
}

impl FactorAccumulator {
    fn new() -> Self {
        Self {
            scores: Vec::new(),
            weights: Vec::new(),
            factors: Vec::new(),
        }
    }

    /// Record a matched rule with a visible contributing factor
    fn hit(&mut self, rule: FactorRule, factor: &str, value: String, impact: Impact) {
        self.scores.push(rule.score);
        self.weights.push(rule.weight);
        self.factors.push(RiskFactor {
            factor: factor.to_owned(),
            value,
            impact,
        });
    }

    /// Record a matched rule that shapes the score without surfacing a factor
    fn silent(&mut self, rule: FactorRule) {
        self.scores.push(rule.score);
        self.weights.push(rule.weight);
    }

    fn finish(
        self,
        condition: Condition,
        confidence_basis: usize,
        ramp: ConfidenceRamp,
        config: &RiskScoringConfig,
    ) -> RiskScore {
        if self.scores.is_empty() {
            return RiskScore {
                condition,
                score: config.baseline_score,
                confidence: config.baseline_confidence,
                factors: Vec::new(),
            };
        }

        let weight_total: f64 = self.weights.iter().sum();
        let weighted: f64 = self
            .scores
            .iter()
            .zip(&self.weights)
            .map(|(s, w)| s * w)
            .sum();
        RiskScore {
            condition,
            score: (weighted / weight_total).clamp(0.0, 1.0),
            confidence: ramp.at(confidence_basis),
            factors: self.factors,
        }
    }
}

/// Multi-condition weighted-factor risk engine
#[derive(Debug, Clone)]
pub struct RiskScorer {
    config: RiskScoringConfig,
}

impl RiskScorer {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.risk.clone(),
        }
    }

    /// Assess all tracked conditions for one user.
    ///
    /// Symptoms are expected pre-filtered to the scoring lookback window.
    /// A missing weight or height simply drops the BMI factor; it never
    /// fails the assessment.
    #[must_use]
    pub fn assess(
        &self,
        profile: &UserHealthProfile,
        cycles: &[CycleRecord],
        symptoms: &[SymptomRecord],
        reference: NaiveDate,
    ) -> RiskAssessment {
        let lengths = observed_cycle_lengths(cycles);
        let pcos = self.pcos(profile, cycles, &lengths, symptoms);
        let endometriosis = self.endometriosis(profile, cycles, symptoms);
        let anemia = self.anemia(profile, cycles, symptoms);
        let thyroid = self.thyroid(profile, &lengths, symptoms);

        let all_scores = [
            pcos.score,
            endometriosis.score,
            anemia.score,
            thyroid.score,
        ];
        let overall_health_score =
            (((1.0 - stats::mean(&all_scores)) * 1000.0).round() / 10.0).clamp(0.0, 100.0);

        let mut elevated: Vec<(&RiskScore, Condition)> = [
            (&pcos, Condition::Pcos),
            (&endometriosis, Condition::Endometriosis),
            (&anemia, Condition::Anemia),
            (&thyroid, Condition::Thyroid),
        ]
        .into_iter()
        .filter(|(score, _)| score.score >= self.config.high_risk_threshold)
        .collect();
        elevated.sort_by(|a, b| {
            b.0.score
                .partial_cmp(&a.0.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let priority_concerns = elevated
            .into_iter()
            .map(|(score, condition)| {
                format!(
                    "{} risk is elevated ({:.0}%)",
                    condition.display_name(),
                    score.score * 100.0
                )
            })
            .collect();

        RiskAssessment {
            pcos,
            endometriosis,
            anemia,
            thyroid,
            overall_health_score,
            priority_concerns,
            calculated_at: reference,
        }
    }

    fn pcos(
        &self,
        profile: &UserHealthProfile,
        cycles: &[CycleRecord],
        lengths: &[i64],
        symptoms: &[SymptomRecord],
    ) -> RiskScore {
        let rules = &self.config.pcos;
        let mut acc = FactorAccumulator::new();

        if cycles.len() >= self.config.min_cycles_for_patterns && !lengths.is_empty() {
            let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
            let avg = stats::mean(&as_f64);
            let std = stats::std_dev(&as_f64);

            if avg > rules.long_cycle_days {
                acc.hit(
                    rules.long_cycle,
                    "Long cycle length",
                    format!("{avg:.1} days avg"),
                    Impact::High,
                );
            } else if avg > rules.slightly_long_cycle_days {
                acc.hit(
                    rules.slightly_long_cycle,
                    "Slightly long cycles",
                    format!("{avg:.1} days avg"),
                    Impact::Medium,
                );
            } else {
                acc.silent(rules.normal_cycle);
            }

            if std > rules.irregular_std_days {
                acc.hit(
                    rules.irregular,
                    "Irregular cycle pattern",
                    format!("\u{b1}{std:.1} days variation"),
                    Impact::High,
                );
            }
        }

        let hormonal: Vec<&SymptomRecord> = symptoms
            .iter()
            .filter(|s| s.category == SymptomCategory::Hormonal)
            .collect();
        let acne = count_matching(&hormonal, &["acne"]);
        if acne >= rules.acne_min_count {
            acc.hit(
                rules.acne,
                "Persistent acne",
                format!("{acne} occurrences"),
                Impact::Medium,
            );
        }
        let hair = count_matching(&hormonal, &["hair"]);
        if hair >= rules.hair_min_count {
            acc.hit(
                rules.hair,
                "Hair-related symptoms",
                format!("{hair} occurrences"),
                Impact::Medium,
            );
        }
        let weight = count_matching(&hormonal, &["weight"]);
        if weight >= rules.weight_min_count {
            acc.hit(
                rules.weight,
                "Weight changes",
                format!("{weight} occurrences"),
                Impact::Low,
            );
        }

        if let Some(value) = profile.bmi() {
            if value > bmi::OBESE {
                acc.hit(rules.obese_bmi, "BMI", format!("{value:.1}"), Impact::Medium);
            } else if value > bmi::OVERWEIGHT {
                acc.silent(rules.overweight_bmi);
            }
        }

        if profile.reports_condition("pcos") {
            acc.hit(
                self.config.self_reported,
                "Self-reported condition",
                "PCOS listed in profile".to_owned(),
                Impact::High,
            );
        }

        acc.finish(
            Condition::Pcos,
            cycles.len() + symptoms.len(),
            rules.confidence,
            &self.config,
        )
    }

    fn endometriosis(
        &self,
        profile: &UserHealthProfile,
        cycles: &[CycleRecord],
        symptoms: &[SymptomRecord],
    ) -> RiskScore {
        let rules = &self.config.endometriosis;
        let mut acc = FactorAccumulator::new();

        let pain: Vec<&SymptomRecord> = symptoms
            .iter()
            .filter(|s| s.symptom_type.contains("pain") || s.symptom_type == "cramps")
            .collect();
        if !pain.is_empty() {
            let avg = stats::mean(&pain.iter().map(|s| f64::from(s.severity)).collect::<Vec<_>>());
            if avg >= rules.severe_pain_severity {
                acc.hit(
                    rules.severe_pain,
                    "Severe pelvic/menstrual pain",
                    format!("Avg severity: {avg:.1}/10"),
                    Impact::High,
                );
            } else if avg >= rules.moderate_pain_severity {
                acc.hit(
                    rules.moderate_pain,
                    "Moderate pelvic pain",
                    format!("Avg severity: {avg:.1}/10"),
                    Impact::Medium,
                );
            }
            if pain.len() >= rules.frequent_pain_count {
                acc.hit(
                    rules.frequent_pain,
                    "Frequent pain episodes",
                    format!("{} occurrences", pain.len()),
                    Impact::High,
                );
            }
        }

        let heavy = cycles.iter().filter(|c| c.flow_level.is_heavy()).count();
        if heavy >= rules.heavy_cycle_min_count {
            acc.hit(
                rules.heavy_cycles,
                "Heavy menstrual bleeding",
                format!("{heavy} cycles"),
                Impact::Medium,
            );
        }

        let fatigue = count_matching(&symptoms.iter().collect::<Vec<_>>(), &["fatigue"]);
        if fatigue >= rules.fatigue_min_count {
            acc.hit(
                rules.fatigue,
                "Chronic fatigue",
                format!("{fatigue} occurrences"),
                Impact::Low,
            );
        }

        if profile.reports_condition("endometriosis") {
            acc.hit(
                self.config.self_reported,
                "Self-reported condition",
                "Endometriosis listed in profile".to_owned(),
                Impact::High,
            );
        }

        acc.finish(
            Condition::Endometriosis,
            symptoms.len(),
            rules.confidence,
            &self.config,
        )
    }

    fn anemia(
        &self,
        profile: &UserHealthProfile,
        cycles: &[CycleRecord],
        symptoms: &[SymptomRecord],
    ) -> RiskScore {
        let rules = &self.config.anemia;
        let mut acc = FactorAccumulator::new();

        let heavy = cycles.iter().filter(|c| c.flow_level.is_heavy()).count();
        if heavy > 0 {
            let ratio = heavy as f64 / cycles.len().max(1) as f64;
            if ratio > rules.heavy_ratio_major {
                acc.hit(
                    rules.heavy_major,
                    "Consistently heavy periods",
                    format!("{heavy}/{} cycles", cycles.len()),
                    Impact::High,
                );
            } else if ratio > rules.heavy_ratio_minor {
                acc.hit(
                    rules.heavy_minor,
                    "Occasional heavy periods",
                    format!("{heavy}/{} cycles", cycles.len()),
                    Impact::Medium,
                );
            }
        }

        let all: Vec<&SymptomRecord> = symptoms.iter().collect();
        let fatigue: Vec<&&SymptomRecord> = all
            .iter()
            .filter(|s| s.symptom_type.contains("fatigue") || s.symptom_type.contains("tired"))
            .collect();
        if !fatigue.is_empty() {
            let avg =
                stats::mean(&fatigue.iter().map(|s| f64::from(s.severity)).collect::<Vec<_>>());
            if avg >= rules.fatigue_severity {
                acc.hit(
                    rules.fatigue,
                    "Significant fatigue",
                    format!("Severity: {avg:.1}/10"),
                    Impact::Medium,
                );
            }
        }

        let dizziness = count_matching(&all, &["dizz"]);
        if dizziness >= rules.dizziness_min_count {
            acc.hit(
                rules.dizziness,
                "Episodes of dizziness",
                format!("{dizziness} occurrences"),
                Impact::Medium,
            );
        }

        let headaches = count_matching(&all, &["headache"]);
        if headaches >= rules.headache_min_count {
            acc.hit(
                rules.headaches,
                "Frequent headaches",
                format!("{headaches} occurrences"),
                Impact::Low,
            );
        }

        if profile.reports_condition("anemia") {
            acc.hit(
                self.config.self_reported,
                "Self-reported condition",
                "Anemia listed in profile".to_owned(),
                Impact::High,
            );
        }

        acc.finish(
            Condition::Anemia,
            symptoms.len(),
            rules.confidence,
            &self.config,
        )
    }

    fn thyroid(
        &self,
        profile: &UserHealthProfile,
        lengths: &[i64],
        symptoms: &[SymptomRecord],
    ) -> RiskScore {
        let rules = &self.config.thyroid;
        let mut acc = FactorAccumulator::new();
        let all: Vec<&SymptomRecord> = symptoms.iter().collect();

        let weight = count_matching(&all, &["weight"]);
        if weight >= rules.weight_min_count {
            acc.hit(
                rules.weight,
                "Weight fluctuations",
                format!("{weight} reported"),
                Impact::Medium,
            );
        }

        let fatigue = count_matching(&all, &["fatigue"]);
        if fatigue >= rules.fatigue_min_count {
            acc.hit(
                rules.fatigue,
                "Persistent fatigue",
                format!("{fatigue} occurrences"),
                Impact::Medium,
            );
        }

        let mood = symptoms
            .iter()
            .filter(|s| s.category == SymptomCategory::Emotional)
            .count();
        if mood >= rules.mood_min_count {
            acc.hit(
                rules.mood,
                "Mood changes",
                format!("{mood} emotional symptoms"),
                Impact::Low,
            );
        }

        if lengths.len() >= self.config.min_cycles_for_patterns.saturating_sub(1) {
            let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
            let std = stats::std_dev(&as_f64);
            if std > rules.very_irregular_std_days {
                acc.hit(
                    rules.very_irregular,
                    "Very irregular cycles",
                    format!("\u{b1}{std:.1} days"),
                    Impact::Medium,
                );
            }
        }

        let hair = count_matching(&all, &["hair"]);
        if hair > 0 {
            acc.hit(
                rules.hair,
                "Hair changes",
                format!("{hair} occurrences"),
                Impact::Low,
            );
        }

        if profile.reports_condition("thyroid") {
            acc.hit(
                self.config.self_reported,
                "Self-reported condition",
                "Thyroid condition listed in profile".to_owned(),
                Impact::High,
            );
        }

        acc.finish(
            Condition::Thyroid,
            symptoms.len(),
            rules.confidence,
            &self.config,
        )
    }
}

fn count_matching(symptoms: &[&SymptomRecord], needles: &[&str]) -> usize {
    symptoms
        .iter()
        .filter(|s| needles.iter().any(|n| s.symptom_type.contains(n)))
        .count()
}
