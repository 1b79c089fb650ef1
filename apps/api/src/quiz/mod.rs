//! Question bank — the fixed ten-question quiz the wizard walks through.
//!
//! Every question has four scored options and one free-text "other" option.
//! Answers are not validated against the bank: custom answers are free text.

pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Mood,
    Personality,
    Preference,
    Lifestyle,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub text: &'static str,
    pub value: u8,
    pub is_other: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub category: QuestionCategory,
    pub options: Vec<QuestionOption>,
}

/// Score attached to every free-text "other" option.
pub const OTHER_OPTION_VALUE: u8 = 6;

fn question(
    id: u32,
    text: &'static str,
    category: QuestionCategory,
    scored: [(&'static str, u8); 4],
    other: &'static str,
) -> Question {
    let mut options: Vec<QuestionOption> = scored
        .iter()
        .map(|&(text, value)| QuestionOption {
            text,
            value,
            is_other: false,
        })
        .collect();
    options.push(QuestionOption {
        text: other,
        value: OTHER_OPTION_VALUE,
        is_other: true,
    });
    Question {
        id,
        question: text,
        category,
        options,
    }
}

/// Returns the full question bank in presentation order.
pub fn question_bank() -> Vec<Question> {
    use QuestionCategory::*;

    vec![
        question(
            1,
            "What's your ideal way to spend a weekend evening?",
            Lifestyle,
            [
                ("Curled up with a gripping thriller, heart racing with every page", 8),
                ("Lost in a fantasy world with dragons and magic", 6),
                ("Reading a thought-provoking literary novel by the fireplace", 7),
                ("Exploring historical events through a captivating biography", 5),
            ],
            "Other (please specify)",
        ),
        question(
            2,
            "When faced with a difficult decision, you typically:",
            Personality,
            [
                ("Analyze all possible outcomes methodically", 7),
                ("Trust your gut instinct immediately", 6),
                ("Seek advice from trusted friends and family", 5),
                ("Research extensively before deciding", 8),
            ],
            "Other approach (describe it)",
        ),
        question(
            3,
            "Which setting appeals to you most?",
            Preference,
            [
                ("A mysterious old mansion with hidden secrets", 8),
                ("A bustling modern city with endless possibilities", 6),
                ("A peaceful countryside village with close-knit community", 5),
                ("An exotic foreign country with rich culture", 7),
            ],
            "Somewhere else entirely (tell us where)",
        ),
        question(
            4,
            "Your friends would describe you as:",
            Personality,
            [
                ("The detective who notices every detail", 8),
                ("The dreamer with wild imagination", 6),
                ("The wise one who gives great advice", 7),
                ("The adventurer always seeking new experiences", 5),
            ],
            "Something else (describe yourself)",
        ),
        question(
            5,
            "What kind of endings do you prefer in stories?",
            Preference,
            [
                ("Shocking twists that make you rethink everything", 8),
                ("Happy endings where love conquers all", 5),
                ("Bittersweet conclusions that feel realistic", 7),
                ("Open endings that let imagination fill the gaps", 6),
            ],
            "A different type of ending (explain)",
        ),
        question(
            6,
            "When you're stressed, you find comfort in:",
            Mood,
            [
                ("Solving puzzles or brain teasers", 8),
                ("Escaping into romantic stories", 5),
                ("Reading about real people overcoming challenges", 7),
                ("Immersing yourself in fantastical worlds", 6),
            ],
            "Other activities (share what helps you)",
        ),
        question(
            7,
            "Your ideal protagonist is:",
            Preference,
            [
                ("A flawed but brilliant detective solving complex cases", 8),
                ("An ordinary person discovering extraordinary powers", 6),
                ("Someone navigating complex relationships and emotions", 5),
                ("A real person who made a significant impact on history", 7),
            ],
            "A different type of character (describe them)",
        ),
        question(
            8,
            "What draws you to a book cover?",
            Preference,
            [
                ("Dark, mysterious imagery that hints at secrets", 8),
                ("Vibrant colors and magical elements", 6),
                ("Elegant, minimalist design with meaningful symbols", 7),
                ("Warm, inviting scenes that suggest human connection", 5),
            ],
            "Something else catches my eye (what is it?)",
        ),
        question(
            9,
            "How do you approach new challenges?",
            Personality,
            [
                ("Break them down systematically and look for patterns", 8),
                ("Dive in headfirst with enthusiasm and creativity", 6),
                ("Learn from others who've faced similar challenges", 7),
                ("Take time to understand the emotional aspects involved", 5),
            ],
            "I have my own unique approach (tell us about it)",
        ),
        question(
            10,
            "What's your relationship with technology?",
            Lifestyle,
            [
                ("I love using it to solve problems and uncover information", 8),
                ("I appreciate it but prefer timeless, traditional experiences", 7),
                ("I use it to connect with others and share experiences", 5),
                ("I'm fascinated by its potential and possibilities", 6),
            ],
            "My relationship with tech is complicated (explain)",
        ),
    ]
}
