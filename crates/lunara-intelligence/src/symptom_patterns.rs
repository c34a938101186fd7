// ABOUTME: Trailing-window symptom analysis - frequency, severity trend, co-occurrence pairs
// ABOUTME: Emits rule-based recommendations when severity or pain patterns warrant them

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use lunara_core::{Recommendation, SymptomCategory, SymptomRecord};
use serde::{Deserialize, Serialize};

use crate::config::{IntelligenceConfig, PmsConfig, RecommendationConfig, SymptomAnalysisConfig};
use crate::stats;

/// Direction of symptom severity over the analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTrend {
    Improving,
    Worsening,
    Stable,
}

/// One entry of the most-common symptom ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomFrequency {
    pub symptom: String,
    pub count: usize,
    pub average_severity: f64,
}

/// A pair of symptom types repeatedly logged on the same dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCorrelation {
    pub first: String,
    pub second: String,
    pub co_occurrences: usize,
    pub insight: String,
}

/// Aggregated view of the trailing symptom window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub total_symptoms: usize,
    pub symptoms_by_category: HashMap<SymptomCategory, usize>,
    pub average_severity: f64,
    pub most_common: Vec<SymptomFrequency>,
    pub severity_trend: SeverityTrend,
    pub correlations: Vec<SymptomCorrelation>,
    pub recommendations: Vec<Recommendation>,
}

impl SymptomAnalysis {
    fn empty() -> Self {
        Self {
            total_symptoms: 0,
            symptoms_by_category: HashMap::new(),
            average_severity: 0.0,
            most_common: Vec::new(),
            severity_trend: SeverityTrend::Stable,
            correlations: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Symptom frequency and co-occurrence analyzer
#[derive(Debug, Clone)]
pub struct SymptomPatternAnalyzer {
    config: SymptomAnalysisConfig,
    recommendation: RecommendationConfig,
}

impl SymptomPatternAnalyzer {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.symptom_analysis.clone(),
            recommendation: config.recommendation.clone(),
        }
    }

    /// Analyze symptoms logged within the trailing window ending at the
    /// reference date. Records outside the window are ignored, so callers
    /// may pass a user's full history; `cycles_tracked` drives the
    /// keep-tracking nudge.
    #[must_use]
    pub fn analyze(
        &self,
        symptoms: &[SymptomRecord],
        cycles_tracked: usize,
        reference: NaiveDate,
    ) -> SymptomAnalysis {
        let window_start = reference - Duration::days(self.config.window_days);
        let mut in_window: Vec<&SymptomRecord> = symptoms
            .iter()
            .filter(|s| s.date > window_start && s.date <= reference)
            .collect();
        in_window.sort_unstable_by_key(|s| s.date);

        if in_window.is_empty() {
            return SymptomAnalysis {
                recommendations: self.tracking_nudges(cycles_tracked, symptoms.len()),
                ..SymptomAnalysis::empty()
            };
        }

        let severities: Vec<f64> = in_window.iter().map(|s| f64::from(s.severity)).collect();
        let average_severity = stats::mean(&severities);

        let mut by_category: HashMap<SymptomCategory, usize> = HashMap::new();
        for record in &in_window {
            *by_category.entry(record.category).or_insert(0) += 1;
        }

        let most_common = self.most_common(&in_window);
        let severity_trend = self.severity_trend(&in_window, window_start, reference);
        let correlations = self.correlations(&in_window);
        let recommendations = self.recommendations(
            &in_window,
            cycles_tracked,
            symptoms.len(),
            average_severity,
            severity_trend,
            &most_common,
        );

        SymptomAnalysis {
            total_symptoms: in_window.len(),
            symptoms_by_category: by_category,
            average_severity,
            most_common,
            severity_trend,
            correlations,
            recommendations,
        }
    }

    fn most_common(&self, symptoms: &[&SymptomRecord]) -> Vec<SymptomFrequency> {
        rank_by_frequency(symptoms.iter().copied(), self.config.most_common_limit)
    }

    fn severity_trend(
        &self,
        symptoms: &[&SymptomRecord],
        window_start: NaiveDate,
        reference: NaiveDate,
    ) -> SeverityTrend {
        let midpoint = window_start + Duration::days((reference - window_start).num_days() / 2);
        let (early, late): (Vec<&&SymptomRecord>, Vec<&&SymptomRecord>) =
            symptoms.iter().partition(|s| s.date <= midpoint);
        if early.is_empty() || late.is_empty() {
            return SeverityTrend::Stable;
        }

        let early_mean =
            stats::mean(&early.iter().map(|s| f64::from(s.severity)).collect::<Vec<_>>());
        let late_mean =
            stats::mean(&late.iter().map(|s| f64::from(s.severity)).collect::<Vec<_>>());
        if early_mean <= 0.0 {
            return SeverityTrend::Stable;
        }

        let relative_change = (late_mean - early_mean) / early_mean;
        if relative_change > self.config.trend_threshold {
            SeverityTrend::Worsening
        } else if relative_change < -self.config.trend_threshold {
            SeverityTrend::Improving
        } else {
            SeverityTrend::Stable
        }
    }

    fn correlations(&self, symptoms: &[&SymptomRecord]) -> Vec<SymptomCorrelation> {
        let mut by_date: HashMap<NaiveDate, Vec<&str>> = HashMap::new();
        for record in symptoms {
            let types = by_date.entry(record.date).or_default();
            if !types.contains(&record.symptom_type.as_str()) {
                types.push(record.symptom_type.as_str());
            }
        }

        let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
        for types in by_date.values_mut() {
            types.sort_unstable();
            for i in 0..types.len() {
                for j in (i + 1)..types.len() {
                    let key = (types[i].to_owned(), types[j].to_owned());
                    *pair_counts.entry(key).or_insert(0) += 1;
                }
            }
        }

        let mut correlations: Vec<SymptomCorrelation> = pair_counts
            .into_iter()
            .filter(|&(_, count)| count >= self.config.correlation_min_support)
            .map(|((first, second), co_occurrences)| SymptomCorrelation {
                insight: format!(
                    "{} and {} were logged together on {co_occurrences} days; they may share a trigger worth tracking",
                    display(&first),
                    display(&second)
                ),
                first,
                second,
                co_occurrences,
            })
            .collect();
        correlations.sort_by(|a, b| {
            b.co_occurrences
                .cmp(&a.co_occurrences)
                .then_with(|| a.first.cmp(&b.first))
        });
        correlations
    }

    /// Nudges towards more history when predictions have little to work with
    fn tracking_nudges(&self, cycles_tracked: usize, symptoms_tracked: usize) -> Vec<Recommendation> {
        let mut out = Vec::new();
        if cycles_tracked < self.recommendation.min_cycles_tracked {
            out.push(Recommendation {
                category: "tracking".to_owned(),
                title: "Continue Cycle Tracking".to_owned(),
                description: format!(
                    "You've logged {cycles_tracked} cycle(s). Track at least {} for accurate predictions.",
                    self.recommendation.min_cycles_tracked
                ),
                priority: 9,
                action_steps: vec![
                    "Log your next period when it starts".to_owned(),
                    "Note the end date when it finishes".to_owned(),
                ],
            });
        }
        if symptoms_tracked < self.recommendation.min_symptoms_tracked {
            out.push(Recommendation {
                category: "tracking".to_owned(),
                title: "Log Your Symptoms Daily".to_owned(),
                description: "Regular symptom tracking helps identify patterns and potential health concerns."
                    .to_owned(),
                priority: 7,
                action_steps: vec![
                    "Record how you're feeling each day".to_owned(),
                    "Rate symptom severity".to_owned(),
                ],
            });
        }
        out
    }

    fn recommendations(
        &self,
        symptoms: &[&SymptomRecord],
        cycles_tracked: usize,
        symptoms_tracked: usize,
        average_severity: f64,
        trend: SeverityTrend,
        most_common: &[SymptomFrequency],
    ) -> Vec<Recommendation> {
        let mut out = Vec::new();

        if average_severity >= self.config.consultation_severity && trend == SeverityTrend::Worsening
        {
            out.push(Recommendation {
                category: "medical".to_owned(),
                title: "Consider a Professional Consultation".to_owned(),
                description: format!(
                    "Your symptoms average {average_severity:.1}/10 and have been worsening. A healthcare provider can help."
                ),
                priority: 9,
                action_steps: vec![
                    "Book an appointment with your provider".to_owned(),
                    "Bring your symptom history to the visit".to_owned(),
                ],
            });
        }

        let pain: Vec<&&SymptomRecord> = symptoms
            .iter()
            .filter(|s| s.symptom_type.contains("pain") || s.symptom_type == "cramps")
            .collect();
        if pain.len() >= self.recommendation.pain_min_count {
            let pain_avg =
                stats::mean(&pain.iter().map(|s| f64::from(s.severity)).collect::<Vec<_>>());
            if pain_avg >= self.recommendation.pain_severity_threshold {
                out.push(Recommendation {
                    category: "lifestyle".to_owned(),
                    title: "Pain Management Strategies".to_owned(),
                    description: format!(
                        "Your pain entries average {pain_avg:.1}/10. These approaches may ease them."
                    ),
                    priority: 8,
                    action_steps: vec![
                        "Apply heat therapy during painful episodes".to_owned(),
                        "Try gentle stretching or yoga".to_owned(),
                        "Track what helps reduce your pain".to_owned(),
                    ],
                });
            }
        }

        let fatigue_count = symptoms
            .iter()
            .filter(|s| s.symptom_type.contains("fatigue") || s.symptom_type.contains("tired"))
            .count();
        if fatigue_count >= self.recommendation.fatigue_min_count {
            out.push(Recommendation {
                category: "lifestyle".to_owned(),
                title: "Boost Your Energy Levels".to_owned(),
                description: "You've been logging fatigue regularly. Small routine changes can help."
                    .to_owned(),
                priority: 6,
                action_steps: vec![
                    "Aim for 7-9 hours of sleep".to_owned(),
                    "Stay hydrated through the day".to_owned(),
                    "Include iron-rich foods in your diet".to_owned(),
                ],
            });
        }

        if let Some(top) = most_common.first() {
            if let Some(tip) = PmsConfig::proactive_tip(&top.symptom) {
                out.push(Recommendation {
                    category: "self_care".to_owned(),
                    title: format!("Managing {}", display(&top.symptom)),
                    description: tip.to_owned(),
                    priority: 5,
                    action_steps: Vec::new(),
                });
            }
        }

        out.extend(self.tracking_nudges(cycles_tracked, symptoms_tracked));
        out.sort_by_key(|r| std::cmp::Reverse(r.priority));
        out.truncate(self.recommendation.max_recommendations);
        out
    }
}

/// Rank symptoms by how often they were logged, most frequent first.
/// Ties on count break towards the more severe symptom.
pub fn rank_by_frequency<'a, I>(symptoms: I, limit: usize) -> Vec<SymptomFrequency>
where
    I: IntoIterator<Item = &'a SymptomRecord>,
{
    let mut grouped: HashMap<&str, (usize, f64)> = HashMap::new();
    for record in symptoms {
        let entry = grouped.entry(record.symptom_type.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += f64::from(record.severity);
    }

    let mut ranking: Vec<SymptomFrequency> = grouped
        .into_iter()
        .map(|(symptom, (count, severity_sum))| SymptomFrequency {
            symptom: symptom.to_owned(),
            count,
            average_severity: severity_sum / count as f64,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| {
            b.average_severity
                .partial_cmp(&a.average_severity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symptom.cmp(&b.symptom))
        })
    });
    ranking.truncate(limit);
    ranking
}

fn display(symptom: &str) -> String {
    symptom.replace('_', " ")
}
