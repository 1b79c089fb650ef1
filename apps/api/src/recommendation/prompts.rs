// Prompt constants and prompt assembly for the remote recommendation path.

use crate::recommendation::models::{QuizAnswer, TraitSummary};

/// System prompt for recommendation generation — enforces JSON-only output.
pub const RECOMMENDATION_SYSTEM: &str = "You are a helpful assistant that provides book \
    recommendations based on personality analysis. \
    Always respond with valid JSON only. \
    Do NOT use markdown code fences. \
    Make sure each response is unique and tailored to the specific user's answers. \
    Never give generic responses.";

/// Recommendation prompt template.
/// Replace: {answers}, {average_score}, {dominant_traits}, {reading_style},
///          {personality_type}, {custom_note}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are a literary expert and book recommendation specialist. Based on a user's quiz responses, provide personalized book genre and recommendations for college students.

User's Quiz Responses:
{answers}

Analysis Summary:
- Average Response Score: {average_score}/10
- Dominant preferences: {dominant_traits}
- Reading style: {reading_style}
- Personality indicators: {personality_type}{custom_note}

Based on these responses, please provide a JSON response with exactly this structure:
{
  "genre": "A creative, specific genre name that captures their reading personality based on their actual responses",
  "description": "A 2-3 sentence explanation of why this genre matches their personality and preferences, written in second person. Reference specific answers they gave.",
  "books": [
    {
      "title": "Book Title",
      "author": "Author Name",
      "reason": "A personalized explanation referencing their specific quiz responses"
    },
    {
      "title": "Book Title",
      "author": "Author Name",
      "reason": "A personalized explanation referencing their specific quiz responses"
    },
    {
      "title": "Book Title",
      "author": "Author Name",
      "reason": "A personalized explanation referencing their specific quiz responses"
    }
  ]
}

CRITICAL: Return EXACTLY 3 books. Make sure each recommendation is DIFFERENT and based on their ACTUAL answers. Vary the genre names significantly based on their responses."#;

/// Fills the recommendation template with the session's answers and analysis.
pub fn build_recommendation_prompt(answers: &[QuizAnswer], summary: &TraitSummary) -> String {
    let answers_block = answers
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let custom = if a.is_custom { " (Custom response)" } else { "" };
            format!(
                "Q{}: {}\nA: {}{} (Score: {})",
                i + 1,
                a.question_text,
                a.answer_text,
                custom,
                a.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let custom: Vec<&QuizAnswer> = answers.iter().filter(|a| a.is_custom).collect();
    let custom_note = if custom.is_empty() {
        String::new()
    } else {
        format!(
            "\nIMPORTANT: This user provided {} custom response(s), showing unique preferences. \
            Custom responses: {}",
            custom.len(),
            custom
                .iter()
                .map(|a| format!("\"{}\"", a.answer_text))
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{answers}", &answers_block)
        .replace("{average_score}", &summary.average_score.to_string())
        .replace("{dominant_traits}", &summary.dominant_traits.join(", "))
        .replace("{reading_style}", summary.reading_style.label())
        .replace("{personality_type}", summary.personality_type.label())
        .replace("{custom_note}", &custom_note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::analyzer::analyze_answers;
    use crate::recommendation::analyzer::tests::answer;

    #[test]
    fn test_prompt_embeds_answers_and_analysis() {
        let answers = vec![
            answer("The detective who notices every detail", 8, false),
            answer("Seek advice from trusted friends", 5, false),
        ];
        let summary = analyze_answers(&answers).unwrap();
        let prompt = build_recommendation_prompt(&answers, &summary);

        assert!(prompt.contains("Q1: Test question\nA: The detective who notices every detail (Score: 8)"));
        assert!(prompt.contains("Q2: "));
        assert!(prompt.contains("Average Response Score: 6.5/10"));
        assert!(prompt.contains("Dominant preferences: Mystery/Thriller lover"));
        assert!(prompt.contains("Reading style: Balanced, thoughtful reader"));
        assert!(prompt.contains("Personality indicators: Balanced personality"));
        assert!(!prompt.contains("IMPORTANT"));
    }

    #[test]
    fn test_prompt_calls_out_custom_answers() {
        let answers = vec![
            answer("Birdwatching with a thermos", 6, true),
            answer("Curled up with a gripping thriller", 8, false),
        ];
        let summary = analyze_answers(&answers).unwrap();
        let prompt = build_recommendation_prompt(&answers, &summary);

        assert!(prompt.contains("A: Birdwatching with a thermos (Custom response) (Score: 6)"));
        assert!(prompt.contains("provided 1 custom response(s)"));
        assert!(prompt.contains("\"Birdwatching with a thermos\""));
    }

    #[test]
    fn test_no_placeholders_survive() {
        let answers = vec![answer("anything", 5, true)];
        let summary = analyze_answers(&answers).unwrap();
        let prompt = build_recommendation_prompt(&answers, &summary);
        for placeholder in [
            "{answers}",
            "{average_score}",
            "{dominant_traits}",
            "{reading_style}",
            "{personality_type}",
            "{custom_note}",
        ] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_average_score_rendered_unrounded() {
        let whole = vec![answer("a", 7, false), answer("b", 7, false)];
        let summary = analyze_answers(&whole).unwrap();
        assert!(build_recommendation_prompt(&whole, &summary)
            .contains("Average Response Score: 7/10"));

        let thirds = vec![answer("a", 5, false), answer("b", 5, false), answer("c", 6, false)];
        let summary = analyze_answers(&thirds).unwrap();
        let prompt = build_recommendation_prompt(&thirds, &summary);
        assert!(prompt.contains("Average Response Score: 5.333333333333333/10"));
    }
}
