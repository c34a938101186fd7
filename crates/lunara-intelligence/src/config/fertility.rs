// ABOUTME: Fertility estimation tunables - luteal constant and the conception-chance curve
// ABOUTME: Curve values are heuristic estimates with no clinical derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use serde::{Deserialize, Serialize};

/// Parameters for ovulation and fertile-window estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilityConfig {
    /// Assumed days between ovulation and the next period start, used until
    /// enough observed ovulation dates exist to personalize it
    pub luteal_phase_days: i64,
    /// Observed ovulation dates required before the per-user average luteal
    /// length replaces the constant
    pub cycles_for_personal_luteal: usize,
    /// Days before ovulation that open the fertile window
    pub fertile_window_lead_days: i64,
    /// Conception chance (percent) by signed offset from ovulation day.
    /// Offsets absent from the curve fall back to `baseline_chance_percent`.
    pub conception_curve: Vec<(i64, u8)>,
    /// Chance (percent) assigned to days outside the curve
    pub baseline_chance_percent: u8,
}

impl FertilityConfig {
    /// Conception chance for a day at the given offset from ovulation
    #[must_use]
    pub fn conception_chance(&self, offset_days: i64) -> u8 {
        self.conception_curve
            .iter()
            .find(|(offset, _)| *offset == offset_days)
            .map_or(self.baseline_chance_percent, |(_, chance)| *chance)
    }
}

impl Default for FertilityConfig {
    fn default() -> Self {
        Self {
            luteal_phase_days: 14,
            cycles_for_personal_luteal: 3,
            fertile_window_lead_days: 5,
            conception_curve: vec![
                (-5, 10),
                (-4, 15),
                (-3, 25),
                (-2, 30),
                (-1, 35),
                (0, 38),
                (1, 10),
            ],
            baseline_chance_percent: 2,
        }
    }
}
