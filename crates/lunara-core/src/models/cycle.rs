// ABOUTME: Menstrual cycle record model with flow levels and derived period length
// ABOUTME: Record-level validation excludes inconsistent entries from aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menstrual flow intensity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowLevel {
    /// Spotting only
    Spotting,
    /// Light flow
    Light,
    /// Medium flow
    Medium,
    /// Heavy flow
    Heavy,
    /// Very heavy flow
    VeryHeavy,
}

impl FlowLevel {
    /// Whether this flow level counts as heavy bleeding for risk factors
    #[must_use]
    pub const fn is_heavy(self) -> bool {
        matches!(self, Self::Heavy | Self::VeryHeavy)
    }
}

impl Default for FlowLevel {
    fn default() -> Self {
        Self::Medium
    }
}

/// A single menstrual cycle entry as logged by the user.
///
/// Cycle length is not stored on the record: it is only derivable from the
/// gap between two consecutive start dates, so it lives in the prediction
/// layer where at least two records exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Unique record id
    pub id: Uuid,
    /// First day of bleeding
    pub start_date: NaiveDate,
    /// Last day of bleeding, when recorded
    pub end_date: Option<NaiveDate>,
    /// Flow intensity for this period
    #[serde(default)]
    pub flow_level: FlowLevel,
    /// Observed ovulation date, when the user tracked it (e.g. LH test, BBT)
    pub ovulation_date: Option<NaiveDate>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl CycleRecord {
    /// Create a record with a fresh id and no optional fields set
    #[must_use]
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date: None,
            flow_level: FlowLevel::default(),
            ovulation_date: None,
            notes: None,
        }
    }

    /// Bleeding duration in days (inclusive of both endpoints), when the
    /// end date is recorded and consistent.
    #[must_use]
    pub fn period_length(&self) -> Option<i64> {
        let end = self.end_date?;
        let days = (end - self.start_date).num_days() + 1;
        (days > 0).then_some(days)
    }

    /// Whether the record satisfies its own invariant (start < end when the
    /// end date is present). Inconsistent records are excluded from
    /// aggregates rather than failing a whole analysis.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.end_date.is_none_or(|end| self.start_date < end)
    }

    /// Observed luteal length for this cycle: days from ovulation to the
    /// next cycle's start. Requires the caller to supply the next start.
    #[must_use]
    pub fn observed_luteal_length(&self, next_start: NaiveDate) -> Option<i64> {
        let ovulation = self.ovulation_date?;
        let days = (next_start - ovulation).num_days();
        (days > 0).then_some(days)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_length_inclusive() {
        let mut rec = CycleRecord::new(date(2024, 3, 1));
        rec.end_date = Some(date(2024, 3, 5));
        assert_eq!(rec.period_length(), Some(5));
    }

    #[test]
    fn test_period_length_missing_end() {
        let rec = CycleRecord::new(date(2024, 3, 1));
        assert_eq!(rec.period_length(), None);
    }

    #[test]
    fn test_inconsistent_record_detected() {
        let mut rec = CycleRecord::new(date(2024, 3, 10));
        rec.end_date = Some(date(2024, 3, 1));
        assert!(!rec.is_consistent());
        assert_eq!(rec.period_length(), None);
    }

    #[test]
    fn test_flow_level_serde_snake_case() {
        let json = serde_json::to_string(&FlowLevel::VeryHeavy).unwrap();
        assert_eq!(json, "\"very_heavy\"");
    }

    #[test]
    fn test_observed_luteal_length() {
        let mut rec = CycleRecord::new(date(2024, 3, 1));
        rec.ovulation_date = Some(date(2024, 3, 15));
        assert_eq!(rec.observed_luteal_length(date(2024, 3, 29)), Some(14));
        assert_eq!(rec.observed_luteal_length(date(2024, 3, 10)), None);
    }
}
