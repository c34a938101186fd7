// ABOUTME: Root configuration for the intelligence engine with per-component sections
// ABOUTME: All tunables are immutable data with Default impls, loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

//! # Intelligence Configuration
//!
//! Every tunable parameter of the analytics engine lives here as immutable,
//! versioned configuration data: the luteal-phase constant, the
//! conception-chance curve, confidence-formula coefficients, risk-factor
//! weights, and the curated tip tables. The algorithms consume these through
//! pure functions, which isolates tuning from logic and eases test
//! substitution.
//!
//! The defaults are heuristic values without clinical derivation; outputs
//! computed from them are estimates, never authoritative conclusions.

/// Fertility estimation parameters (luteal constant, conception curve)
pub mod fertility;

/// PMS forecasting parameters and proactive tip table
pub mod pms;

/// Cycle prediction parameters (window, confidence coefficients)
pub mod prediction;

/// Recommendation rule thresholds and message templates
pub mod recommendation;

/// Risk-factor weights and thresholds per condition
pub mod risk;

pub use fertility::FertilityConfig;
pub use pms::PmsConfig;
pub use prediction::{CyclePredictionConfig, SymptomAnalysisConfig};
pub use recommendation::RecommendationConfig;
pub use risk::{ConfidenceRamp, FactorRule, RiskScoringConfig};

use lunara_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Root configuration for the intelligence engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Cycle prediction parameters
    pub prediction: CyclePredictionConfig,
    /// Symptom pattern analysis parameters
    pub symptom_analysis: SymptomAnalysisConfig,
    /// Fertility estimation parameters
    pub fertility: FertilityConfig,
    /// PMS forecasting parameters
    pub pms: PmsConfig,
    /// Risk scoring weights and thresholds
    pub risk: RiskScoringConfig,
    /// Recommendation rules and messages
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Validate cross-field invariants of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::config` when a section holds an impossible value
    /// (zero prediction window, empty conception curve, threshold outside
    /// `[0, 1]`).
    pub fn validate(&self) -> AppResult<()> {
        if self.prediction.moving_average_window == 0 {
            return Err(AppError::config("prediction window must be at least 1"));
        }
        if self.fertility.luteal_phase_days <= 0 {
            return Err(AppError::config("luteal phase length must be positive"));
        }
        if self.fertility.conception_curve.is_empty() {
            return Err(AppError::config("conception curve must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.risk.high_risk_threshold) {
            return Err(AppError::config("high risk threshold must be in [0, 1]"));
        }
        if self.symptom_analysis.correlation_min_support == 0 {
            return Err(AppError::config(
                "correlation support threshold must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = IntelligenceConfig::default();
        config.risk.high_risk_threshold = 1.4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = IntelligenceConfig::default();
        config.prediction.moving_average_window = 0;
        assert!(config.validate().is_err());
    }
}
