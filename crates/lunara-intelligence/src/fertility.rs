// ABOUTME: Ovulation and fertile window estimation anchored on the next-period forecast
// ABOUTME: Luteal constant personalizes once enough ovulation observations exist

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::{Duration, NaiveDate};
use lunara_core::{CycleRecord, UserHealthProfile};
use serde::{Deserialize, Serialize};

use crate::config::{FertilityConfig, IntelligenceConfig};
use crate::prediction::CyclePrediction;
use crate::stats;

/// Heuristic conception chance for one day around ovulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptionChanceDay {
    pub date: NaiveDate,
    /// Days relative to the estimated ovulation date (negative = before)
    pub offset_from_ovulation: i64,
    pub chance_percent: u8,
}

/// Coarse fertility level for the reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilityStatus {
    Low,
    Fertile,
    High,
    Peak,
}

/// Fertility estimate derived from the cycle forecast.
///
/// All values are heuristic estimates, not clinical guidance. Estimation is
/// disabled entirely while the profile reports hormonal birth control, since
/// ovulation timing is not meaningful under suppression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilityOutlook {
    /// Whether any cycle history exists to estimate from
    pub has_data: bool,
    /// False while the profile reports birth control use
    pub enabled: bool,
    pub ovulation_date: Option<NaiveDate>,
    pub fertile_window: Option<(NaiveDate, NaiveDate)>,
    /// Days from the reference date to estimated ovulation (negative = past)
    pub days_until_ovulation: Option<i64>,
    /// Luteal phase length used for the estimate, in days
    pub luteal_phase_days: i64,
    /// True once the luteal length comes from the user's own observations
    pub personalized_luteal: bool,
    /// Per-day conception chances across the fertile curve
    pub daily_chances: Vec<ConceptionChanceDay>,
    /// Fertility level on the reference day
    pub status: Option<FertilityStatus>,
    /// Human-readable status line for the reference day
    pub status_message: Option<String>,
}

impl FertilityOutlook {
    fn disabled(has_data: bool, luteal_phase_days: i64) -> Self {
        Self {
            has_data,
            enabled: false,
            ovulation_date: None,
            fertile_window: None,
            days_until_ovulation: None,
            luteal_phase_days,
            personalized_luteal: false,
            daily_chances: Vec::new(),
            status: None,
            status_message: None,
        }
    }
}

/// Fertile window and conception chance estimator
#[derive(Debug, Clone)]
pub struct FertilityCalculator {
    config: FertilityConfig,
}

impl FertilityCalculator {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.fertility.clone(),
        }
    }

    /// Estimate ovulation and the fertile window around the forecast period.
    ///
    /// The ovulation estimate is the predicted next start minus the luteal
    /// constant. Once at least three cycles carry an observed ovulation
    /// date, the user's own average luteal length replaces the constant.
    #[must_use]
    pub fn assess(
        &self,
        cycles: &[CycleRecord],
        profile: &UserHealthProfile,
        prediction: &CyclePrediction,
        reference: NaiveDate,
    ) -> FertilityOutlook {
        let (luteal, personalized) = self.luteal_length(cycles);

        if profile.is_on_birth_control {
            return FertilityOutlook::disabled(prediction.has_data, luteal);
        }
        let Some(next_start) = prediction.predicted_next_start else {
            return FertilityOutlook {
                enabled: true,
                ..FertilityOutlook::disabled(false, luteal)
            };
        };

        let ovulation = next_start - Duration::days(luteal);
        let window_start = ovulation - Duration::days(self.config.fertile_window_lead_days);
        let (status, status_message) = status_line(reference, ovulation, window_start);

        let daily_chances = self
            .config
            .conception_curve
            .iter()
            .map(|&(offset, chance)| ConceptionChanceDay {
                date: ovulation + Duration::days(offset),
                offset_from_ovulation: offset,
                chance_percent: chance,
            })
            .collect();

        FertilityOutlook {
            has_data: true,
            enabled: true,
            ovulation_date: Some(ovulation),
            fertile_window: Some((window_start, ovulation)),
            days_until_ovulation: Some((ovulation - reference).num_days()),
            luteal_phase_days: luteal,
            personalized_luteal: personalized,
            daily_chances,
            status: Some(status),
            status_message: Some(status_message),
        }
    }

    /// Heuristic conception chance for an arbitrary date
    #[must_use]
    pub fn conception_chance_on(&self, date: NaiveDate, ovulation: NaiveDate) -> u8 {
        self.config.conception_chance((date - ovulation).num_days())
    }

    fn luteal_length(&self, cycles: &[CycleRecord]) -> (i64, bool) {
        let mut sorted: Vec<&CycleRecord> = cycles.iter().collect();
        sorted.sort_unstable_by_key(|c| c.start_date);

        let observed: Vec<f64> = sorted
            .windows(2)
            .filter_map(|pair| pair[0].observed_luteal_length(pair[1].start_date))
            .map(|d| d as f64)
            .collect();

        if observed.len() >= self.config.cycles_for_personal_luteal {
            (stats::mean(&observed).round() as i64, true)
        } else {
            (self.config.luteal_phase_days, false)
        }
    }
}

fn status_line(
    reference: NaiveDate,
    ovulation: NaiveDate,
    window_start: NaiveDate,
) -> (FertilityStatus, String) {
    if reference < window_start {
        let days = (window_start - reference).num_days();
        return (
            FertilityStatus::Low,
            format!("Low fertility - fertile window starts in {days} days"),
        );
    }
    if reference > ovulation {
        let days = (reference - ovulation).num_days();
        return (
            FertilityStatus::Low,
            format!("Low fertility - {days} days post-ovulation"),
        );
    }
    if reference == ovulation {
        (
            FertilityStatus::Peak,
            "Peak ovulation day - highest fertility".to_owned(),
        )
    } else if reference == ovulation - Duration::days(1) {
        (
            FertilityStatus::High,
            "Very high fertility - peak ovulation window".to_owned(),
        )
    } else {
        (
            FertilityStatus::Fertile,
            "Fertile window - elevated chance of conception".to_owned(),
        )
    }
}
