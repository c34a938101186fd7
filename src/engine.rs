// ABOUTME: HealthEngine composes the analytics components into per-user query operations
// ABOUTME: Each operation is one consistent read followed by pure, deterministic computation

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::{Duration, NaiveDate};
use lunara_core::{AppResult, SymptomRecord};
use lunara_intelligence::{
    rank_by_frequency, CyclePatterns, CyclePhase, CyclePredictor, FertilityCalculator,
    FertilityStatus, IntelligenceConfig, PhaseClassifier, PmsForecast, PmsPredictor,
    RiskAssessment, RiskScorer, SymptomAnalysis, SymptomFrequency, SymptomPatternAnalyzer,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::storage::{HealthStore, SymptomQuery};

/// Where the user currently sits in their cycle, with the near-term forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentCycle {
    pub has_data: bool,
    pub cycle_day: i64,
    pub phase: Option<CyclePhase>,
    pub phase_description: Option<String>,
    pub period_overdue: bool,
    pub days_until_period: Option<i64>,
    pub predicted_next_start: Option<NaiveDate>,
    pub confidence: f64,
    pub is_fertile_window: bool,
    pub fertile_window: Option<(NaiveDate, NaiveDate)>,
}

/// Combined period and fertility forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub has_data: bool,
    pub next_period_start: Option<NaiveDate>,
    pub next_period_end: Option<NaiveDate>,
    pub next_ovulation: Option<NaiveDate>,
    pub fertile_window_start: Option<NaiveDate>,
    pub fertile_window_end: Option<NaiveDate>,
    /// False while the profile reports birth control use
    pub fertility_enabled: bool,
    /// Fertility level on the reference day
    pub fertility_status: Option<FertilityStatus>,
    pub fertility_status_message: Option<String>,
    pub confidence: f64,
    pub average_cycle_length: f64,
    pub average_period_length: f64,
}

/// Typical day range for one phase, derived from the user's averages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDayRange {
    pub phase: CyclePhase,
    pub typical_days: String,
}

/// Cycle statistics plus overall symptom frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternsSummary {
    #[serde(flatten)]
    pub cycle: CyclePatterns,
    pub common_symptoms: Vec<SymptomFrequency>,
    pub cycle_phase_patterns: Vec<PhaseDayRange>,
}

/// Trimmed composite for the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub has_data: bool,
    pub current_cycle_day: Option<i64>,
    pub current_phase: Option<CyclePhase>,
    pub days_until_next_period: Option<i64>,
    pub is_pms_phase: bool,
    /// Last week's symptoms, most recent first, capped at five
    pub recent_symptoms: Vec<SymptomRecord>,
    /// Condition scores in fixed order: PCOS, endometriosis, anemia, thyroid
    pub risk_summary: [f64; 4],
    pub overall_health_score: f64,
    pub priority_concerns: Vec<String>,
}

/// Per-user analytics engine over a [`HealthStore`].
///
/// Every operation reads one consistent snapshot of the user's records and
/// computes deterministically from it; nothing is cached between calls, so
/// new logs are always reflected on the next query.
pub struct HealthEngine<S> {
    store: S,
    config: IntelligenceConfig,
    classifier: PhaseClassifier,
    predictor: CyclePredictor,
    fertility: FertilityCalculator,
    symptoms: SymptomPatternAnalyzer,
    pms: PmsPredictor,
    risk: RiskScorer,
}

impl<S: HealthStore> HealthEngine<S> {
    #[must_use]
    pub fn new(store: S, config: IntelligenceConfig) -> Self {
        Self {
            classifier: PhaseClassifier::new(&config),
            predictor: CyclePredictor::new(&config),
            fertility: FertilityCalculator::new(&config),
            symptoms: SymptomPatternAnalyzer::new(&config),
            pms: PmsPredictor::new(&config),
            risk: RiskScorer::new(&config),
            store,
            config,
        }
    }

    /// Access the underlying store, e.g. to seed records in tests
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current cycle day, phase, and days until the next period.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure; a user with
    /// no records gets `has_data = false`.
    #[instrument(skip(self))]
    pub async fn current_cycle(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<CurrentCycle> {
        let cycles = self.store.get_cycles(user_id).await?;
        let snapshot = self.classifier.classify(&cycles, reference);
        let prediction = self.predictor.predict(&cycles);
        debug!(cycle_day = snapshot.cycle_day, "classified current cycle");

        Ok(CurrentCycle {
            has_data: snapshot.has_data,
            cycle_day: snapshot.cycle_day,
            phase: snapshot.phase,
            phase_description: snapshot.phase_description,
            period_overdue: snapshot.period_overdue,
            days_until_period: prediction
                .predicted_next_start
                .map(|start| (start - reference).num_days()),
            predicted_next_start: prediction.predicted_next_start,
            confidence: prediction.confidence,
            is_fertile_window: snapshot.is_fertile_window,
            fertile_window: snapshot.fertile_window,
        })
    }

    /// Next period, ovulation, and fertile window forecast.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn prediction(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<PredictionSummary> {
        let cycles = self.store.get_cycles(user_id).await?;
        let profile = self.store.get_profile(user_id).await?;
        let prediction = self.predictor.predict(&cycles);
        let outlook = self
            .fertility
            .assess(&cycles, &profile, &prediction, reference);

        Ok(PredictionSummary {
            has_data: prediction.has_data,
            next_period_start: prediction.predicted_next_start,
            next_period_end: prediction.predicted_next_end,
            next_ovulation: outlook.ovulation_date,
            fertile_window_start: outlook.fertile_window.map(|(start, _)| start),
            fertile_window_end: outlook.fertile_window.map(|(_, end)| end),
            fertility_enabled: outlook.enabled,
            fertility_status: outlook.status,
            fertility_status_message: outlook.status_message,
            confidence: prediction.confidence,
            average_cycle_length: prediction.average_cycle_length,
            average_period_length: prediction.average_period_length,
        })
    }

    /// Cycle statistics with the user's most-logged symptoms.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn patterns(&self, user_id: Uuid) -> AppResult<PatternsSummary> {
        let cycles = self.store.get_cycles(user_id).await?;
        let symptoms = self.store.get_symptoms(user_id, SymptomQuery::all()).await?;
        let cycle = self.predictor.patterns(&cycles);
        let common_symptoms =
            rank_by_frequency(&symptoms, self.config.symptom_analysis.most_common_limit);
        let cycle_phase_patterns = phase_day_ranges(
            cycle.average_cycle_length,
            cycle.average_period_length,
            self.config.fertility.luteal_phase_days,
        );

        Ok(PatternsSummary {
            cycle,
            common_symptoms,
            cycle_phase_patterns,
        })
    }

    /// Symptom frequency, trend, and co-occurrence analysis over a trailing
    /// window ending at the reference date. `window_days` overrides the
    /// configured default when given.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn symptom_analysis(
        &self,
        user_id: Uuid,
        reference: NaiveDate,
        window_days: Option<i64>,
    ) -> AppResult<SymptomAnalysis> {
        let cycles = self.store.get_cycles(user_id).await?;
        let symptoms = self.store.get_symptoms(user_id, SymptomQuery::all()).await?;
        let analysis = match window_days {
            Some(days) if days != self.config.symptom_analysis.window_days => {
                let mut config = self.config.clone();
                config.symptom_analysis.window_days = days;
                SymptomPatternAnalyzer::new(&config).analyze(&symptoms, cycles.len(), reference)
            }
            _ => self.symptoms.analyze(&symptoms, cycles.len(), reference),
        };
        Ok(analysis)
    }

    /// Forecast of likely PMS symptoms before the next predicted period.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn pms_prediction(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<PmsForecast> {
        let cycles = self.store.get_cycles(user_id).await?;
        let symptoms = self.store.get_symptoms(user_id, SymptomQuery::all()).await?;
        let prediction = self.predictor.predict(&cycles);
        Ok(self.pms.forecast(&cycles, &symptoms, &prediction, reference))
    }

    /// Multi-condition risk assessment over the scoring lookback window.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn risk_assessment(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<RiskAssessment> {
        let cycles = self.store.get_cycles(user_id).await?;
        let profile = self.store.get_profile(user_id).await?;
        let lookback = reference - Duration::days(self.config.risk.symptom_lookback_days);
        let symptoms = self
            .store
            .get_symptoms(
                user_id,
                SymptomQuery {
                    start: Some(lookback),
                    end: Some(reference),
                    category: None,
                },
            )
            .await?;
        Ok(self.risk.assess(&profile, &cycles, &symptoms, reference))
    }

    /// Trimmed composite of the other operations for the dashboard.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    #[instrument(skip(self))]
    pub async fn dashboard_summary(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<DashboardSummary> {
        let current = self.current_cycle(user_id, reference).await?;
        let pms = self.pms_prediction(user_id, reference).await?;
        let risk = self.risk_assessment(user_id, reference).await?;

        let week_ago = reference - Duration::days(7);
        let mut recent_symptoms = self
            .store
            .get_symptoms(
                user_id,
                SymptomQuery {
                    start: Some(week_ago),
                    end: Some(reference),
                    category: None,
                },
            )
            .await?;
        recent_symptoms.sort_unstable_by_key(|s| std::cmp::Reverse(s.date));
        recent_symptoms.truncate(5);

        Ok(DashboardSummary {
            has_data: current.has_data,
            current_cycle_day: current.has_data.then_some(current.cycle_day),
            current_phase: current.phase,
            days_until_next_period: current.days_until_period,
            is_pms_phase: pms.is_pms_phase,
            recent_symptoms,
            risk_summary: [
                risk.pcos.score,
                risk.endometriosis.score,
                risk.anemia.score,
                risk.thyroid.score,
            ],
            overall_health_score: risk.overall_health_score,
            priority_concerns: risk.priority_concerns,
        })
    }
}

fn phase_day_ranges(
    average_cycle_length: f64,
    average_period_length: f64,
    luteal_phase_days: i64,
) -> Vec<PhaseDayRange> {
    let cycle = average_cycle_length.round() as i64;
    if cycle == 0 {
        return Vec::new();
    }
    let period = average_period_length.round() as i64;
    let ovulation = (cycle - luteal_phase_days).max(1);

    vec![
        PhaseDayRange {
            phase: CyclePhase::Menstrual,
            typical_days: format!("1-{period}"),
        },
        PhaseDayRange {
            phase: CyclePhase::Follicular,
            typical_days: format!("{}-{}", period + 1, ovulation - 1),
        },
        PhaseDayRange {
            phase: CyclePhase::Ovulation,
            typical_days: ovulation.to_string(),
        },
        PhaseDayRange {
            phase: CyclePhase::Luteal,
            typical_days: format!("{}-{}", ovulation + 1, cycle - 2),
        },
        PhaseDayRange {
            phase: CyclePhase::LateLuteal,
            typical_days: format!("{}-{}", cycle - 1, cycle),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_day_ranges_for_default_cycle() {
        let ranges = phase_day_ranges(28.0, 5.0, 14);
        assert_eq!(ranges[0].typical_days, "1-5");
        assert_eq!(ranges[1].typical_days, "6-13");
        assert_eq!(ranges[2].typical_days, "14");
        assert_eq!(ranges[3].typical_days, "15-26");
        assert_eq!(ranges[4].typical_days, "27-28");
    }

    #[test]
    fn test_phase_day_ranges_empty_without_history() {
        assert!(phase_day_ranges(0.0, 0.0, 14).is_empty());
    }
}
