// ABOUTME: Per-user PMS forecasting from a symptom-vs-days-before-period occurrence table
// ABOUTME: Projects historical offsets onto the days leading up to the predicted period

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use lunara_core::{CycleRecord, PmsDayForecast, SymptomLikelihood, SymptomRecord};
use serde::{Deserialize, Serialize};

use crate::config::{IntelligenceConfig, PmsConfig};
use crate::prediction::CyclePrediction;

/// Confidence bucket for the forecast's data basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBucket {
    Low,
    Medium,
    High,
}

/// How much history backs the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Cycle starts whose preceding days fed the occurrence table
    pub cycles_analyzed: usize,
    pub confidence: ConfidenceBucket,
}

/// Upcoming PMS window forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmsForecast {
    pub has_predictions: bool,
    /// Whether the reference date falls in the days just before the
    /// predicted period
    pub is_pms_phase: bool,
    pub days_until_period: Option<i64>,
    pub predictions: Vec<PmsDayForecast>,
    pub proactive_recommendations: Vec<String>,
    pub data_quality: DataQuality,
}

impl PmsForecast {
    fn empty() -> Self {
        Self {
            has_predictions: false,
            is_pms_phase: false,
            days_until_period: None,
            predictions: Vec::new(),
            proactive_recommendations: Vec::new(),
            data_quality: DataQuality {
                cycles_analyzed: 0,
                confidence: ConfidenceBucket::Low,
            },
        }
    }
}

/// Forecasts likely PMS symptoms for the upcoming window
#[derive(Debug, Clone)]
pub struct PmsPredictor {
    config: PmsConfig,
}

impl PmsPredictor {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.pms.clone(),
        }
    }

    /// Forecast symptoms for the days between the reference date and the
    /// predicted period start.
    ///
    /// For each past cycle start, symptoms logged within the tracked
    /// offset range before it feed a (days-before-period, symptom) table.
    /// Likelihood for an upcoming day is the share of past cycles that
    /// showed the symptom at the same offset, rounded half-up to a percent.
    #[must_use]
    pub fn forecast(
        &self,
        cycles: &[CycleRecord],
        symptoms: &[SymptomRecord],
        prediction: &CyclePrediction,
        reference: NaiveDate,
    ) -> PmsForecast {
        let Some(next_start) = prediction.predicted_next_start else {
            return PmsForecast::empty();
        };

        let mut starts: Vec<NaiveDate> = cycles.iter().map(|c| c.start_date).collect();
        starts.sort_unstable();
        let cycles_analyzed = starts.len();

        // Each cycle contributes at most once per (offset, symptom), so the
        // likelihood below is a share of cycles and stays within 100%
        let mut occurrences: HashMap<(i64, &str), usize> = HashMap::new();
        for &start in &starts {
            let mut seen: HashSet<(i64, &str)> = HashSet::new();
            for symptom in symptoms {
                let offset = (start - symptom.date).num_days();
                if (1..=self.config.max_offset_days).contains(&offset) {
                    seen.insert((offset, symptom.symptom_type.as_str()));
                }
            }
            for key in seen {
                *occurrences.entry(key).or_insert(0) += 1;
            }
        }

        let days_until_period = (next_start - reference).num_days();
        let latest_start = starts.last().copied();

        let mut predictions = Vec::new();
        for ahead in 0..self.config.forecast_lookahead_days {
            let day = reference + Duration::days(ahead);
            if day >= next_start {
                break;
            }
            let offset = (next_start - day).num_days();
            if offset > self.config.max_offset_days {
                continue;
            }

            let mut predicted: Vec<SymptomLikelihood> = occurrences
                .iter()
                .filter(|&(&(entry_offset, _), _)| entry_offset == offset)
                .map(|(&(_, symptom), &count)| SymptomLikelihood {
                    symptom: symptom.to_owned(),
                    likelihood_percent: likelihood_percent(count, cycles_analyzed),
                })
                .filter(|s| s.likelihood_percent >= self.config.min_likelihood_percent)
                .collect();
            predicted.sort_by(|a, b| {
                b.likelihood_percent
                    .cmp(&a.likelihood_percent)
                    .then_with(|| a.symptom.cmp(&b.symptom))
            });
            predicted.truncate(self.config.top_symptoms_per_day);

            if predicted.is_empty() {
                continue;
            }
            let cycle_day = latest_start.map_or(0, |start| (day - start).num_days() + 1);
            predictions.push(PmsDayForecast {
                date: day,
                cycle_day,
                predicted_symptoms: predicted,
            });
        }

        let mut proactive_recommendations = Vec::new();
        for forecast in &predictions {
            if let Some(top) = forecast.predicted_symptoms.first() {
                if let Some(tip) = PmsConfig::proactive_tip(&top.symptom) {
                    let tip = tip.to_owned();
                    if !proactive_recommendations.contains(&tip) {
                        proactive_recommendations.push(tip);
                    }
                }
            }
        }

        PmsForecast {
            has_predictions: !predictions.is_empty(),
            is_pms_phase: (0..=self.config.pms_window_days).contains(&days_until_period),
            days_until_period: Some(days_until_period),
            predictions,
            proactive_recommendations,
            data_quality: self.data_quality(cycles_analyzed),
        }
    }

    fn data_quality(&self, cycles_analyzed: usize) -> DataQuality {
        let confidence = if cycles_analyzed >= self.config.high_confidence_cycles {
            ConfidenceBucket::High
        } else if cycles_analyzed >= self.config.low_confidence_cycles {
            ConfidenceBucket::Medium
        } else {
            ConfidenceBucket::Low
        };
        DataQuality {
            cycles_analyzed,
            confidence,
        }
    }
}

/// Percentage share rounded half-up
fn likelihood_percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count * 100) as f64 / total as f64).round() as u8
}
