// ABOUTME: Symptom record model, category enum, and the curated symptom catalog
// ABOUTME: Normalizes free-form symptom names; unknown types are accepted but uncatalogued
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::severity;

/// Categories for symptom classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    /// Physical symptoms (cramps, headache, fatigue, ...)
    Physical,
    /// Emotional symptoms (mood swings, anxiety, ...)
    Emotional,
    /// Hormonal symptoms (acne, hair changes, weight changes, ...)
    Hormonal,
    /// Reproductive symptoms (bleeding irregularities, ...)
    Reproductive,
    /// Digestive symptoms (bloating-adjacent GI symptoms)
    Digestive,
    /// Accepted but not in the curated catalog
    Other,
}

/// A single symptom observation as logged by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// Unique record id
    pub id: Uuid,
    /// Day the symptom was experienced
    pub date: NaiveDate,
    /// Normalized symptom name (lower-case, underscore-joined)
    pub symptom_type: String,
    /// Classified category
    pub category: SymptomCategory,
    /// Severity on a 1-10 scale
    pub severity: u8,
    /// Free-form description
    pub description: Option<String>,
}

impl SymptomRecord {
    /// Create a record from a free-form symptom name. The name is normalized
    /// and classified against the curated catalog; severity is clamped to
    /// the logging scale.
    #[must_use]
    pub fn new(date: NaiveDate, symptom_type: &str, raw_severity: u8) -> Self {
        let symptom_type = normalize_symptom_type(symptom_type);
        let category = classify_symptom(&symptom_type).unwrap_or(SymptomCategory::Other);
        Self {
            id: Uuid::new_v4(),
            date,
            symptom_type,
            category,
            severity: raw_severity.clamp(severity::MIN_SEVERITY, severity::MAX_SEVERITY),
            description: None,
        }
    }
}

/// Normalize a free-form symptom name into the open string field format:
/// lower-case with runs of whitespace collapsed to single underscores.
#[must_use]
pub fn normalize_symptom_type(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Curated symptom catalog: normalized name to category.
///
/// Returns `None` for names outside the catalog. Callers must treat `None`
/// as "accepted but uncurated" - the record is still stored and analyzed,
/// it just cannot participate in curated tip lookups.
#[must_use]
pub fn classify_symptom(normalized: &str) -> Option<SymptomCategory> {
    let category = match normalized {
        "cramps" | "headache" | "back_pain" | "breast_tenderness" | "bloating" | "fatigue"
        | "nausea" | "dizziness" | "hot_flashes" | "joint_pain" | "muscle_aches"
        | "pelvic_pain" => SymptomCategory::Physical,
        "mood_swings" | "irritability" | "anxiety" | "depression" | "crying_spells" | "stress"
        | "low_energy" | "difficulty_concentrating" => SymptomCategory::Emotional,
        "acne" | "oily_skin" | "hair_loss" | "excessive_hair_growth" | "weight_changes"
        | "appetite_changes" | "libido_changes" => SymptomCategory::Hormonal,
        "heavy_bleeding" | "light_bleeding" | "spotting" | "clots" | "irregular_periods"
        | "painful_periods" | "vaginal_discharge" => SymptomCategory::Reproductive,
        "constipation" | "diarrhea" | "gas" | "indigestion" | "food_cravings" => {
            SymptomCategory::Digestive
        }
        _ => return None,
    };
    Some(category)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symptom_type() {
        assert_eq!(normalize_symptom_type("  Mood   Swings "), "mood_swings");
        assert_eq!(normalize_symptom_type("Cramps"), "cramps");
    }

    #[test]
    fn test_catalog_classification() {
        assert_eq!(classify_symptom("cramps"), Some(SymptomCategory::Physical));
        assert_eq!(classify_symptom("acne"), Some(SymptomCategory::Hormonal));
        assert_eq!(
            classify_symptom("food_cravings"),
            Some(SymptomCategory::Digestive)
        );
    }

    #[test]
    fn test_unknown_symptom_is_explicitly_uncatalogued() {
        assert_eq!(classify_symptom("left_elbow_tingle"), None);

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let rec = SymptomRecord::new(date, "Left Elbow Tingle", 4);
        assert_eq!(rec.category, SymptomCategory::Other);
        assert_eq!(rec.symptom_type, "left_elbow_tingle");
    }

    #[test]
    fn test_severity_clamped_to_scale() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(SymptomRecord::new(date, "cramps", 0).severity, 1);
        assert_eq!(SymptomRecord::new(date, "cramps", 14).severity, 10);
    }
}
