// ABOUTME: Keyword intent classification and strategy dispatch onto the engine queries
// ABOUTME: A thin layer - every reply is formatted from one engine operation's output

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

mod education;

pub use education::education_topic;

use chrono::NaiveDate;
use lunara_core::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::engine::HealthEngine;
use crate::storage::HealthStore;

/// Recognized chat intents, each mapped to one engine query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CycleQuery,
    SymptomQuery,
    RiskQuery,
    RecommendationQuery,
    EducationQuery,
    Greeting,
    Gratitude,
    General,
}

/// Greeting words matched as whole tokens, not substrings
const GREETING_WORDS: &[&str] = &["hi", "hello", "hey"];

/// Keyword table checked in order; first matching intent wins
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Gratitude, &["thank", "appreciate"]),
    (
        Intent::EducationQuery,
        &["what is", "explain", "tell me about", "why do", "how does"],
    ),
    (
        Intent::CycleQuery,
        &[
            "period", "cycle", "menstrual", "ovulation", "fertile", "tracking",
        ],
    ),
    (
        Intent::SymptomQuery,
        &[
            "symptom", "pain", "cramp", "headache", "fatigue", "feeling", "hurt", "ache", "bloat",
        ],
    ),
    (
        Intent::RiskQuery,
        &[
            "pcos",
            "endometriosis",
            "anemia",
            "thyroid",
            "risk",
            "condition",
            "health score",
        ],
    ),
    (
        Intent::RecommendationQuery,
        &[
            "recommend", "suggest", "should i", "what can i", "tips", "advice",
        ],
    ),
];

/// Classify a message against the keyword table
#[must_use]
pub fn classify_intent(message: &str) -> Intent {
    let lowered = message.to_lowercase();
    let greeting = lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| GREETING_WORDS.contains(&token))
        || lowered.contains("good morning")
        || lowered.contains("good evening");
    if greeting {
        return Intent::Greeting;
    }
    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return *intent;
        }
    }
    Intent::General
}

/// A generated chat reply with its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub intent: Intent,
    pub reply: String,
    pub confidence: f64,
}

/// Chat layer over the analytics engine
pub struct ChatAssistant<'a, S> {
    engine: &'a HealthEngine<S>,
}

impl<'a, S: HealthStore> ChatAssistant<'a, S> {
    #[must_use]
    pub const fn new(engine: &'a HealthEngine<S>) -> Self {
        Self { engine }
    }

    /// Classify the message and answer it from the matching engine query.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown user id or a storage failure.
    pub async fn respond(
        &self,
        user_id: Uuid,
        message: &str,
        reference: NaiveDate,
    ) -> AppResult<ChatResponse> {
        let intent = classify_intent(message);
        debug!(?intent, "classified chat message");

        let (reply, confidence) = match intent {
            Intent::Greeting => (self.greeting(user_id, reference).await?, 0.95),
            Intent::Gratitude => (
                "You're welcome! I'm here whenever you need health insights.".to_owned(),
                0.95,
            ),
            Intent::CycleQuery => (self.cycle_reply(user_id, reference).await?, 0.85),
            Intent::SymptomQuery => (self.symptom_reply(user_id, reference).await?, 0.85),
            Intent::RiskQuery => (self.risk_reply(user_id, reference).await?, 0.85),
            Intent::RecommendationQuery => {
                (self.recommendation_reply(user_id, reference).await?, 0.8)
            }
            Intent::EducationQuery => (education_reply(message), 0.75),
            Intent::General => (
                "I can help with your cycle, symptoms, health risks, and personalized tips. \
                 What would you like to know?"
                    .to_owned(),
                0.5,
            ),
        };

        Ok(ChatResponse {
            intent,
            reply,
            confidence,
        })
    }

    async fn greeting(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<String> {
        let current = self.engine.current_cycle(user_id, reference).await?;
        Ok(if current.has_data {
            format!(
                "Hi! You're on day {} of your cycle. How are you feeling today?",
                current.cycle_day
            )
        } else {
            "Hi! I'm your personal health assistant. Start logging your cycle and symptoms \
             to unlock insights."
                .to_owned()
        })
    }

    async fn cycle_reply(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<String> {
        let prediction = self.engine.prediction(user_id, reference).await?;
        let Some(next_start) = prediction.next_period_start else {
            return Ok(
                "I don't have enough cycle data yet. Log your next period and I'll start \
                 predicting."
                    .to_owned(),
            );
        };
        let mut reply = format!(
            "Your next period is expected around {next_start} (confidence {:.0}%).",
            prediction.confidence * 100.0
        );
        if let Some(ovulation) = prediction.next_ovulation {
            reply.push_str(&format!(" Estimated ovulation: {ovulation}."));
        }
        Ok(reply)
    }

    async fn symptom_reply(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<String> {
        let analysis = self.engine.symptom_analysis(user_id, reference, None).await?;
        if analysis.total_symptoms == 0 {
            return Ok("No symptoms logged in the last month. Keep tracking to spot patterns."
                .to_owned());
        }
        let top = analysis
            .most_common
            .first()
            .map_or_else(String::new, |s| s.symptom.replace('_', " "));
        Ok(format!(
            "You've logged {} symptoms this month, averaging {:.1}/10 severity. Your most \
             frequent is {top}.",
            analysis.total_symptoms, analysis.average_severity
        ))
    }

    async fn risk_reply(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<String> {
        let assessment = self.engine.risk_assessment(user_id, reference).await?;
        let mut reply = format!(
            "Your overall health score is {:.1}/100.",
            assessment.overall_health_score
        );
        if assessment.priority_concerns.is_empty() {
            reply.push_str(" No condition risks stand out right now.");
        } else {
            reply.push(' ');
            reply.push_str(&assessment.priority_concerns.join(". "));
            reply.push_str(". These are estimates from your tracked data, not a diagnosis.");
        }
        Ok(reply)
    }

    async fn recommendation_reply(&self, user_id: Uuid, reference: NaiveDate) -> AppResult<String> {
        let analysis = self.engine.symptom_analysis(user_id, reference, None).await?;
        Ok(analysis.recommendations.first().map_or_else(
            || {
                "Keep logging your cycle and symptoms daily - consistent data gives you better \
                 insights."
                    .to_owned()
            },
            |rec| format!("{}: {}", rec.title, rec.description),
        ))
    }
}

fn education_reply(message: &str) -> String {
    education_topic(message).map_or_else(
        || {
            "That's a great question. I cover cycle phases, ovulation, PMS, and conditions \
             like PCOS, endometriosis, anemia, and thyroid disorders - ask about any of them."
                .to_owned()
        },
        ToOwned::to_owned,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_classification_priorities() {
        assert_eq!(classify_intent("When is my next period?"), Intent::CycleQuery);
        assert_eq!(classify_intent("I have bad cramps"), Intent::SymptomQuery);
        assert_eq!(classify_intent("Am I at risk for PCOS?"), Intent::RiskQuery);
        assert_eq!(classify_intent("any tips for sleep?"), Intent::RecommendationQuery);
        assert_eq!(classify_intent("what is ovulation"), Intent::EducationQuery);
        assert_eq!(classify_intent("thank you!"), Intent::Gratitude);
        assert_eq!(classify_intent("xyzzy"), Intent::General);
    }

    #[test]
    fn test_unmatched_education_falls_back() {
        let reply = education_reply("what is quantum chromodynamics");
        assert!(reply.contains("cycle phases"));
    }
}
