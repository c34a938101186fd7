// ABOUTME: Next-period prediction via recency-weighted moving average over observed cycle gaps
// ABOUTME: Also derives the cycle pattern summary - regularity, spread, period length averages

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::{Duration, NaiveDate};
use lunara_core::constants::cycle::{
    DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH, MAX_PLAUSIBLE_CYCLE, MIN_PLAUSIBLE_CYCLE,
};
use lunara_core::CycleRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{CyclePredictionConfig, IntelligenceConfig};
use crate::stats;

/// Next-period forecast with its confidence basis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePrediction {
    /// Whether any cycle history exists to predict from
    pub has_data: bool,
    /// Forecast start of the next period
    pub predicted_next_start: Option<NaiveDate>,
    /// Forecast end of the next period
    pub predicted_next_end: Option<NaiveDate>,
    /// Recency-weighted average cycle length in days
    pub average_cycle_length: f64,
    /// Mean recorded bleeding duration in days
    pub average_period_length: f64,
    /// Inverse cycle-length variability in `[0, 1]`
    pub regularity_score: f64,
    /// Forecast confidence in `[0, 1]`
    pub confidence: f64,
    /// Number of observed cycle gaps behind the forecast
    pub cycles_tracked: usize,
}

impl CyclePrediction {
    fn empty() -> Self {
        Self {
            has_data: false,
            predicted_next_start: None,
            predicted_next_end: None,
            average_cycle_length: 0.0,
            average_period_length: 0.0,
            regularity_score: 0.0,
            confidence: 0.0,
            cycles_tracked: 0,
        }
    }
}

/// Cycle history statistics for the patterns view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePatterns {
    pub has_data: bool,
    pub average_cycle_length: f64,
    pub cycle_length_std: f64,
    pub average_period_length: f64,
    pub is_regular: bool,
    pub regularity_score: f64,
    pub total_cycles_tracked: usize,
    pub longest_cycle: Option<i64>,
    pub shortest_cycle: Option<i64>,
    /// Most recent observed lengths, oldest first, for visualization
    pub recent_lengths: Vec<i64>,
}

impl CyclePatterns {
    fn empty() -> Self {
        Self {
            has_data: false,
            average_cycle_length: 0.0,
            cycle_length_std: 0.0,
            average_period_length: 0.0,
            is_regular: false,
            regularity_score: 0.0,
            total_cycles_tracked: 0,
            longest_cycle: None,
            shortest_cycle: None,
            recent_lengths: Vec::new(),
        }
    }
}

/// Observed cycle lengths from consecutive start dates, oldest first.
///
/// Input records are expected most recent first. Gaps outside the plausible
/// `[15, 60]` day range are excluded from aggregates rather than propagated;
/// duplicate or misentered start dates produce non-positive gaps which fall
/// out with the same filter.
#[must_use]
pub fn observed_cycle_lengths(cycles: &[CycleRecord]) -> Vec<i64> {
    let mut starts: Vec<NaiveDate> = cycles.iter().map(|c| c.start_date).collect();
    starts.sort_unstable();

    let mut lengths = Vec::with_capacity(starts.len().saturating_sub(1));
    for pair in starts.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if (MIN_PLAUSIBLE_CYCLE..=MAX_PLAUSIBLE_CYCLE).contains(&gap) {
            lengths.push(gap);
        } else {
            warn!(gap_days = gap, "excluding implausible cycle gap from analysis");
        }
    }
    lengths
}

fn average_period_length(cycles: &[CycleRecord]) -> f64 {
    let lengths: Vec<f64> = cycles
        .iter()
        .filter_map(CycleRecord::period_length)
        .map(|d| d as f64)
        .collect();
    if lengths.is_empty() {
        DEFAULT_PERIOD_LENGTH as f64
    } else {
        stats::mean(&lengths)
    }
}

/// Cycle forecasting engine
#[derive(Debug, Clone)]
pub struct CyclePredictor {
    config: CyclePredictionConfig,
}

impl CyclePredictor {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.prediction.clone(),
        }
    }

    /// Forecast the next period from history ordered most recent first.
    ///
    /// Recent gaps are weighted linearly heavier than old ones, which damps
    /// a single outlier cycle without discarding it. A lone record has no
    /// observable gap, so the default 28-day length stands in at reduced
    /// confidence until a second period is logged.
    #[must_use]
    pub fn predict(&self, cycles: &[CycleRecord]) -> CyclePrediction {
        let Some(latest) = cycles.iter().max_by_key(|c| c.start_date) else {
            return CyclePrediction::empty();
        };

        let lengths = observed_cycle_lengths(cycles);
        let period_length = average_period_length(cycles);

        if lengths.is_empty() {
            let start = latest.start_date + Duration::days(DEFAULT_CYCLE_LENGTH);
            return CyclePrediction {
                has_data: true,
                predicted_next_start: Some(start),
                predicted_next_end: Some(
                    start + Duration::days(period_length.round() as i64 - 1),
                ),
                average_cycle_length: DEFAULT_CYCLE_LENGTH as f64,
                average_period_length: period_length,
                regularity_score: 0.0,
                confidence: self.config.single_record_confidence,
                cycles_tracked: 0,
            };
        }

        let weighted_average = Self::weighted_average(
            &lengths[lengths.len().saturating_sub(self.config.moving_average_window)..],
        );
        let regularity_score = Self::regularity_score(&lengths);
        let sample_ratio =
            (lengths.len() as f64 / self.config.cycles_for_full_confidence as f64).min(1.0);
        let confidence = regularity_score * sample_ratio;

        let start = latest.start_date + Duration::days(weighted_average.round() as i64);
        CyclePrediction {
            has_data: true,
            predicted_next_start: Some(start),
            predicted_next_end: Some(start + Duration::days(period_length.round() as i64 - 1)),
            average_cycle_length: weighted_average,
            average_period_length: period_length,
            regularity_score,
            confidence,
            cycles_tracked: lengths.len(),
        }
    }

    /// Summarize cycle history statistics for the patterns view.
    #[must_use]
    pub fn patterns(&self, cycles: &[CycleRecord]) -> CyclePatterns {
        if cycles.is_empty() {
            return CyclePatterns::empty();
        }

        let lengths = observed_cycle_lengths(cycles);
        let period_length = average_period_length(cycles);
        if lengths.is_empty() {
            return CyclePatterns {
                has_data: true,
                average_cycle_length: DEFAULT_CYCLE_LENGTH as f64,
                average_period_length: period_length,
                ..CyclePatterns::empty()
            };
        }

        let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
        let std = stats::std_dev(&as_f64);
        let regularity_score = Self::regularity_score(&lengths);
        let recent_start = lengths.len().saturating_sub(self.config.moving_average_window);

        CyclePatterns {
            has_data: true,
            average_cycle_length: stats::mean(&as_f64),
            cycle_length_std: std,
            average_period_length: period_length,
            is_regular: regularity_score >= 0.7 && std <= self.config.regularity_std_days,
            regularity_score,
            total_cycles_tracked: lengths.len(),
            longest_cycle: lengths.iter().copied().max(),
            shortest_cycle: lengths.iter().copied().min(),
            recent_lengths: lengths[recent_start..].to_vec(),
        }
    }

    fn weighted_average(lengths: &[i64]) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (i, &length) in lengths.iter().enumerate() {
            let weight = (i + 1) as f64;
            weighted_sum += length as f64 * weight;
            weight_total += weight;
        }
        weighted_sum / weight_total
    }

    fn regularity_score(lengths: &[i64]) -> f64 {
        let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
        let avg = stats::mean(&as_f64);
        if avg <= 0.0 {
            return 0.0;
        }
        (1.0 - stats::std_dev(&as_f64) / avg).clamp(0.0, 1.0)
    }
}
