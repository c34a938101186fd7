// ABOUTME: Curated educational snippets keyed by topic keywords
// ABOUTME: Static content only; topics outside the table return None explicitly

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

/// (keywords, content) pairs checked in order
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["pcos", "polycystic"],
        "PCOS (polycystic ovary syndrome) is a hormonal condition that can cause irregular or \
         long cycles, acne, and changes in hair or weight. Consistent cycle tracking gives a \
         clinician useful history - a diagnosis always needs medical testing.",
    ),
    (
        &["endometriosis"],
        "Endometriosis is a condition where tissue similar to the uterine lining grows outside \
         the uterus, often causing severe menstrual pain and heavy bleeding. If your pain \
         regularly disrupts daily life, it's worth discussing with a doctor.",
    ),
    (
        &["anemia", "iron"],
        "Anemia means your blood carries less oxygen than it should, commonly from low iron. \
         Heavy periods are a frequent cause; fatigue and dizziness are typical signs. A simple \
         blood test can confirm it.",
    ),
    (
        &["thyroid"],
        "Your thyroid regulates metabolism, and an over- or under-active thyroid can disrupt \
         cycles, weight, energy, and mood. Thyroid function is checked with a blood test.",
    ),
    (
        &["ovulation"],
        "Ovulation is when an ovary releases an egg, typically about 14 days before your next \
         period. The days just before and including ovulation are your most fertile.",
    ),
    (
        &["pms", "premenstrual"],
        "PMS covers the physical and emotional symptoms in the days before your period, driven \
         by hormonal shifts in the late luteal phase. Tracking which symptoms recur lets you \
         prepare for them.",
    ),
    (
        &["luteal"],
        "The luteal phase runs from ovulation to your next period. Progesterone rises, and PMS \
         symptoms tend to appear towards its end.",
    ),
    (
        &["follicular"],
        "The follicular phase runs from the first day of your period until ovulation. Estrogen \
         rises through it and energy often increases.",
    ),
    (
        &["cycle", "period", "menstrual"],
        "A menstrual cycle is counted from the first day of one period to the first day of the \
         next. Cycles between 21 and 35 days are considered typical, and some variation month \
         to month is normal.",
    ),
];

/// Educational content matching the message, if the topic is curated
#[must_use]
pub fn education_topic(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, content)| *content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_known_topics_resolve() {
        assert!(education_topic("what is PCOS?").is_some());
        assert!(education_topic("explain the luteal phase").is_some());
    }

    #[test]
    fn test_unknown_topic_is_none() {
        assert_eq!(education_topic("tell me about the weather"), None);
    }
}
