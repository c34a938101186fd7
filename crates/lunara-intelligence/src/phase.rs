// ABOUTME: Maps a reference date plus cycle history onto the current cycle day and phase
// ABOUTME: Phase boundaries scale with the user's average cycle; overdue days clamp to late luteal

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::{Duration, NaiveDate};
use lunara_core::constants::cycle::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
use lunara_core::CycleRecord;
use serde::{Deserialize, Serialize};

use crate::config::{FertilityConfig, IntelligenceConfig};
use crate::prediction::observed_cycle_lengths;
use crate::stats;

/// Menstrual cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    LateLuteal,
}

impl CyclePhase {
    /// User-facing description of what this phase typically feels like
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Menstrual => {
                "Menstruation phase. Your body is shedding the uterine lining; rest matters."
            }
            Self::Follicular => {
                "Follicular phase. Estrogen rises and energy typically increases."
            }
            Self::Ovulation => "Ovulation phase. Peak fertility; you may feel more energetic.",
            Self::Luteal => {
                "Luteal phase. Progesterone rises; PMS symptoms may appear towards the end."
            }
            Self::LateLuteal => "Late luteal phase. Your period may start soon; practice self-care.",
        }
    }
}

/// Where the reference date sits within the current cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSnapshot {
    /// Whether any cycle history exists
    pub has_data: bool,
    /// Days since the latest period started, starting at 1
    pub cycle_day: i64,
    pub phase: Option<CyclePhase>,
    pub phase_description: Option<String>,
    /// True when the cycle day has passed the expected cycle length
    pub period_overdue: bool,
    pub average_cycle_length: f64,
    pub average_period_length: f64,
    pub is_fertile_window: bool,
    pub fertile_window: Option<(NaiveDate, NaiveDate)>,
}

impl CycleSnapshot {
    fn no_data() -> Self {
        Self {
            has_data: false,
            cycle_day: 0,
            phase: None,
            phase_description: None,
            period_overdue: false,
            average_cycle_length: 0.0,
            average_period_length: 0.0,
            is_fertile_window: false,
            fertile_window: None,
        }
    }
}

/// Classifies the current cycle day and phase from history
#[derive(Debug, Clone)]
pub struct PhaseClassifier {
    fertility: FertilityConfig,
}

impl PhaseClassifier {
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            fertility: config.fertility.clone(),
        }
    }

    /// Classify the reference date against history ordered most recent first.
    ///
    /// With fewer than two recorded cycles the 28/5 day defaults stand in
    /// for the personal averages. A reference date past the expected cycle
    /// length clamps to late luteal and flags the period as overdue.
    #[must_use]
    pub fn classify(&self, cycles: &[CycleRecord], reference: NaiveDate) -> CycleSnapshot {
        let Some(latest) = cycles.iter().max_by_key(|c| c.start_date) else {
            return CycleSnapshot::no_data();
        };

        let lengths = observed_cycle_lengths(cycles);
        let avg_cycle = if lengths.is_empty() {
            DEFAULT_CYCLE_LENGTH as f64
        } else {
            let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
            stats::mean(&as_f64)
        };
        let avg_period = {
            let observed: Vec<f64> = cycles
                .iter()
                .filter_map(CycleRecord::period_length)
                .map(|d| d as f64)
                .collect();
            if observed.is_empty() {
                DEFAULT_PERIOD_LENGTH as f64
            } else {
                stats::mean(&observed)
            }
        };

        let cycle_day = (reference - latest.start_date).num_days() + 1;
        let cycle_length = avg_cycle.round() as i64;
        let period_length = avg_period.round() as i64;
        let ovulation_day = (cycle_length - self.fertility.luteal_phase_days).max(1);

        let period_overdue = cycle_day > cycle_length;
        let effective_day = cycle_day.min(cycle_length);
        let phase = if period_overdue {
            CyclePhase::LateLuteal
        } else if effective_day <= period_length {
            CyclePhase::Menstrual
        } else if effective_day < ovulation_day {
            CyclePhase::Follicular
        } else if effective_day == ovulation_day {
            CyclePhase::Ovulation
        } else if effective_day <= cycle_length - 2 {
            CyclePhase::Luteal
        } else {
            CyclePhase::LateLuteal
        };

        let fertile_start = latest.start_date
            + Duration::days(ovulation_day - 1 - self.fertility.fertile_window_lead_days);
        let fertile_end = latest.start_date + Duration::days(ovulation_day - 1);
        let in_window = (fertile_start..=fertile_end).contains(&reference);

        CycleSnapshot {
            has_data: true,
            cycle_day,
            phase: Some(phase),
            phase_description: Some(phase.description().to_owned()),
            period_overdue,
            average_cycle_length: avg_cycle,
            average_period_length: avg_period,
            is_fertile_window: in_window,
            fertile_window: Some((fertile_start, fertile_end)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn record(start: &str, end: Option<&str>) -> CycleRecord {
        let mut rec = CycleRecord::new(start.parse().unwrap());
        rec.end_date = end.map(|e| e.parse().unwrap());
        rec
    }

    fn classifier() -> PhaseClassifier {
        PhaseClassifier::new(&IntelligenceConfig::default())
    }

    #[test]
    fn test_no_history_signals_missing_data() {
        let snapshot = classifier().classify(&[], "2024-04-01".parse().unwrap());
        assert!(!snapshot.has_data);
        assert!(snapshot.phase.is_none());
    }

    #[test]
    fn test_day_three_is_menstrual() {
        let cycles = vec![record("2024-04-01", Some("2024-04-05"))];
        let snapshot = classifier().classify(&cycles, "2024-04-03".parse().unwrap());
        assert_eq!(snapshot.cycle_day, 3);
        assert_eq!(snapshot.phase, Some(CyclePhase::Menstrual));
        assert!(!snapshot.period_overdue);
    }

    #[test]
    fn test_default_ovulation_day_fourteen() {
        let cycles = vec![record("2024-04-01", None)];
        let snapshot = classifier().classify(&cycles, "2024-04-14".parse().unwrap());
        assert_eq!(snapshot.phase, Some(CyclePhase::Ovulation));
        assert!(snapshot.is_fertile_window);
    }

    #[test]
    fn test_overdue_reference_clamps_to_late_luteal() {
        let cycles = vec![record("2024-04-01", None)];
        let snapshot = classifier().classify(&cycles, "2024-05-05".parse().unwrap());
        assert!(snapshot.period_overdue);
        assert_eq!(snapshot.phase, Some(CyclePhase::LateLuteal));
        assert_eq!(snapshot.cycle_day, 35);
    }

    #[test]
    fn test_identical_reference_classifies_identically() {
        let cycles = vec![record("2024-04-01", Some("2024-04-06")), record("2024-03-04", None)];
        let reference = "2024-04-20".parse().unwrap();
        let classifier = classifier();
        assert_eq!(
            classifier.classify(&cycles, reference),
            classifier.classify(&cycles, reference)
        );
    }
}
