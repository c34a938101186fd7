// ABOUTME: User health profile with body metrics, reproductive flags, and known conditions
// ABOUTME: Missing metrics degrade gracefully - BMI-dependent factors are simply skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// User health profile supplied by the storage collaborator.
///
/// Every field is optional or defaulted: an incomplete profile narrows the
/// analysis (no BMI factor, no age adjustment) instead of failing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserHealthProfile {
    /// Date of birth, when provided
    pub date_of_birth: Option<NaiveDate>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Whether the user has given birth
    #[serde(default)]
    pub has_given_birth: bool,
    /// Whether the user is currently pregnant
    #[serde(default)]
    pub is_pregnant: bool,
    /// Whether the user is trying to conceive
    #[serde(default)]
    pub is_trying_to_conceive: bool,
    /// Whether the user is on hormonal birth control
    #[serde(default)]
    pub is_on_birth_control: bool,
    /// Self-reported medical conditions (free-form, matched by keyword)
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

impl UserHealthProfile {
    /// Body mass index, when both weight and height are recorded
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg?;
        let height_m = self.height_cm? / 100.0;
        (height_m > 0.0).then(|| weight / (height_m * height_m))
    }

    /// Age in whole years at the given reference date
    #[must_use]
    pub fn age_at(&self, reference: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let mut age = reference.year() - dob.year();
        if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Whether the user self-reports a condition matching the keyword
    /// (case-insensitive substring match)
    #[must_use]
    pub fn reports_condition(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.medical_conditions
            .iter()
            .any(|c| c.to_lowercase().contains(&keyword))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_requires_both_metrics() {
        let mut profile = UserHealthProfile {
            weight_kg: Some(68.0),
            ..UserHealthProfile::default()
        };
        assert!(profile.bmi().is_none());

        profile.height_cm = Some(170.0);
        let bmi = profile.bmi().unwrap();
        assert!((bmi - 23.53).abs() < 0.01);
    }

    #[test]
    fn test_age_at_respects_birthday() {
        let profile = UserHealthProfile {
            date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 15),
            ..UserHealthProfile::default()
        };
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(profile.age_at(before), Some(29));
        assert_eq!(profile.age_at(after), Some(30));
    }

    #[test]
    fn test_reports_condition_keyword_match() {
        let profile = UserHealthProfile {
            medical_conditions: vec!["Diagnosed PCOS (2021)".into()],
            ..UserHealthProfile::default()
        };
        assert!(profile.reports_condition("pcos"));
        assert!(!profile.reports_condition("thyroid"));
    }
}
