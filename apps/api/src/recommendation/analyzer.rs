//! Answer Analyzer — derives a reader profile from one quiz session.
//!
//! Pure keyword heuristic: no I/O, no state between calls. The resolver runs it
//! both to enrich the remote prompt and to pick a fallback bundle.
//!
//! Keyword matching is case-insensitive *substring* matching, so "real" also
//! hits "really" and "realistic".

use crate::errors::AppError;
use crate::recommendation::models::{PersonalityType, QuizAnswer, ReadingStyle, TraitSummary};

/// Answers scored at or above this count as high-signal for trait scanning.
pub const HIGH_SIGNAL_SCORE: i64 = 7;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 10;

pub const MYSTERY_TRAIT: &str = "Mystery/Thriller lover";
pub const FANTASY_TRAIT: &str = "Fantasy enthusiast";
pub const ROMANCE_TRAIT: &str = "Romance seeker";
pub const NONFICTION_TRAIT: &str = "Non-fiction/Historical preference";
pub const ECLECTIC_TRAIT: &str = "Eclectic reader";

/// Keyword sets scanned in order; order fixes the order of `dominant_traits`.
const TRAIT_KEYWORDS: &[(&str, &[&str])] = &[
    (MYSTERY_TRAIT, &["mystery", "thriller", "detective"]),
    (FANTASY_TRAIT, &["fantasy", "magic", "dragon"]),
    (ROMANCE_TRAIT, &["romantic", "love", "relationship"]),
    (NONFICTION_TRAIT, &["historical", "biography", "real"]),
];

const ANALYTICAL_KEYWORDS: &[&str] = &["analyze", "methodical"];
const INTUITIVE_KEYWORDS: &[&str] = &["instinct", "creative"];

/// More custom answers than this marks the reader as individualistic.
const INDIVIDUALISTIC_CUSTOM_COUNT: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Builds a `TraitSummary` from an ordered answer sequence.
///
/// Fails with `AppError::Validation` if the sequence is empty or any score is
/// outside 1 – 10.
pub fn analyze_answers(answers: &[QuizAnswer]) -> Result<TraitSummary, AppError> {
    validate_answers(answers)?;

    let average_score = average_score(answers);
    let lowered: Vec<String> = answers.iter().map(|a| a.answer_text.to_lowercase()).collect();

    let high_signal: Vec<&str> = answers
        .iter()
        .zip(&lowered)
        .filter(|(a, _)| a.score >= HIGH_SIGNAL_SCORE)
        .map(|(_, text)| text.as_str())
        .collect();

    let mut dominant_traits: Vec<&'static str> = TRAIT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| any_contains(&high_signal, keywords))
        .map(|(label, _)| *label)
        .collect();

    if dominant_traits.is_empty() {
        dominant_traits.push(ECLECTIC_TRAIT);
    }

    let all_texts: Vec<&str> = lowered.iter().map(String::as_str).collect();
    let custom_count = answers.iter().filter(|a| a.is_custom).count();

    Ok(TraitSummary {
        dominant_traits,
        reading_style: reading_style_for(average_score),
        personality_type: personality_type_for(custom_count, &all_texts),
        average_score,
    })
}

/// Arithmetic mean of the scores. Callers must pass a non-empty slice.
pub fn average_score(answers: &[QuizAnswer]) -> f64 {
    let total: i64 = answers.iter().map(|a| a.score).sum();
    total as f64 / answers.len() as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate_answers(answers: &[QuizAnswer]) -> Result<(), AppError> {
    if answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }

    if let Some(bad) = answers
        .iter()
        .find(|a| !(MIN_SCORE..=MAX_SCORE).contains(&a.score))
    {
        return Err(AppError::Validation(format!(
            "score {} for question {} is outside {MIN_SCORE}-{MAX_SCORE}",
            bad.score, bad.question_id
        )));
    }

    Ok(())
}

/// Thresholds are inclusive lower bounds, checked from the top down.
fn reading_style_for(average_score: f64) -> ReadingStyle {
    if average_score >= 7.0 {
        ReadingStyle::Intense
    } else if average_score >= 5.5 {
        ReadingStyle::Balanced
    } else {
        ReadingStyle::Casual
    }
}

/// Rule order is the tie-break: custom count wins over any keyword.
fn personality_type_for(custom_count: usize, texts: &[&str]) -> PersonalityType {
    if custom_count > INDIVIDUALISTIC_CUSTOM_COUNT {
        PersonalityType::Individualistic
    } else if any_contains(texts, ANALYTICAL_KEYWORDS) {
        PersonalityType::Analytical
    } else if any_contains(texts, INTUITIVE_KEYWORDS) {
        PersonalityType::IntuitiveCreative
    } else {
        PersonalityType::Balanced
    }
}

/// `texts` must already be lowercased.
fn any_contains(texts: &[&str], keywords: &[&str]) -> bool {
    texts
        .iter()
        .any(|text| keywords.iter().any(|kw| text.contains(kw)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
