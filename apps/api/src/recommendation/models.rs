//! Wire and domain types shared by the analyzer, the resolver and the handlers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One answered quiz question as posted by the wizard.
///
/// The UI sends `question` / `answer` / `value`; the descriptive names are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: i64,
    #[serde(rename = "question", alias = "questionText")]
    pub question_text: String,
    #[serde(rename = "answer", alias = "answerText")]
    pub answer_text: String,
    /// 1 – 10, checked by the analyzer.
    #[serde(rename = "value", alias = "score")]
    pub score: i64,
    #[serde(default)]
    pub is_custom: bool,
}

/// Request body for `POST /api/recommend`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub reason: String,
}

/// The only thing callers ever get back, from either path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub genre: String,
    pub description: String,
    pub books: Vec<Book>,
}

/// Every result carries exactly this many books.
pub const BOOKS_PER_RESULT: usize = 3;

impl RecommendationResult {
    pub fn has_expected_book_count(&self) -> bool {
        self.books.len() == BOOKS_PER_RESULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingStyle {
    #[serde(rename = "Intense, immersive reader")]
    Intense,
    #[serde(rename = "Balanced, thoughtful reader")]
    Balanced,
    #[serde(rename = "Casual, comfort reader")]
    Casual,
}

impl ReadingStyle {
    pub fn label(self) -> &'static str {
        match self {
            ReadingStyle::Intense => "Intense, immersive reader",
            ReadingStyle::Balanced => "Balanced, thoughtful reader",
            ReadingStyle::Casual => "Casual, comfort reader",
        }
    }
}

impl fmt::Display for ReadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PersonalityType {
    #[serde(rename = "Highly individualistic")]
    Individualistic,
    #[serde(rename = "Analytical thinker")]
    Analytical,
    #[serde(rename = "Intuitive creative")]
    IntuitiveCreative,
    #[serde(rename = "Balanced personality")]
    Balanced,
}

impl PersonalityType {
    pub fn label(self) -> &'static str {
        match self {
            PersonalityType::Individualistic => "Highly individualistic",
            PersonalityType::Analytical => "Analytical thinker",
            PersonalityType::IntuitiveCreative => "Intuitive creative",
            PersonalityType::Balanced => "Balanced personality",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived classification of one quiz session. Recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitSummary {
    /// Trait labels in keyword-set order; never empty.
    pub dominant_traits: Vec<&'static str>,
    pub reading_style: ReadingStyle,
    pub personality_type: PersonalityType,
    pub average_score: f64,
}

impl TraitSummary {
    pub fn has_trait(&self, label: &str) -> bool {
        self.dominant_traits.iter().any(|t| *t == label)
    }
}
