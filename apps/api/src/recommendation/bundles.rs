//! Fallback bundles — hand-authored results used whenever the remote path is
//! off or fails.
//!
//! Selection only looks at which bucket a session lands in, never at score
//! magnitudes.

use serde::Serialize;

use crate::recommendation::analyzer::{FANTASY_TRAIT, MYSTERY_TRAIT, ROMANCE_TRAIT};
use crate::recommendation::models::{Book, RecommendationResult, TraitSummary, BOOKS_PER_RESULT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FallbackBundle {
    MysteryMastermind,
    FantasyVoyager,
    RomanticIdealist,
    UniqueLiterarySoul,
    ThoughtfulExplorer,
}

struct BundleText {
    genre: &'static str,
    description: &'static str,
    /// (title, author, reason)
    books: [(&'static str, &'static str, &'static str); BOOKS_PER_RESULT],
}

const MYSTERY_MASTERMIND: BundleText = BundleText {
    genre: "Mystery Mastermind",
    description: "You have a sharp, analytical mind that thrives on puzzles and unexpected twists. \
        Your love for methodical thinking and attention to detail makes you perfect for stories \
        that challenge your deductive skills.",
    books: [
        (
            "The Silent Patient",
            "Alex Michaelides",
            "Your analytical nature will love unraveling this psychological thriller's complex \
            layers and shocking revelations.",
        ),
        (
            "Gone Girl",
            "Gillian Flynn",
            "Perfect for your appreciation of intricate plots and unreliable narrators that keep \
            you guessing.",
        ),
        (
            "The Thursday Murder Club",
            "Richard Osman",
            "Combines your love of puzzles with character-driven storytelling that matches your \
            thoughtful approach.",
        ),
    ],
};

const FANTASY_VOYAGER: BundleText = BundleText {
    genre: "Fantasy Voyager",
    description: "You're drawn to worlds beyond the ordinary, where imagination knows no bounds. \
        Your creative spirit and love for escapism make you perfect for epic adventures and \
        magical realms.",
    books: [
        (
            "The Name of the Wind",
            "Patrick Rothfuss",
            "Your love for rich, imaginative worlds will be captivated by this beautifully \
            crafted fantasy epic.",
        ),
        (
            "Circe",
            "Madeline Miller",
            "Combines your appreciation for fantasy with deep character development and \
            beautiful prose.",
        ),
        (
            "The Priory of the Orange Tree",
            "Samantha Shannon",
            "An epic fantasy that matches your desire for immersive, magical storytelling with \
            strong characters.",
        ),
    ],
};

const ROMANTIC_IDEALIST: BundleText = BundleText {
    genre: "Romantic Idealist",
    description: "You believe in the power of love and human connection. Your warm heart and \
        appreciation for emotional depth draw you to stories that celebrate relationships and \
        personal growth.",
    books: [
        (
            "The Seven Husbands of Evelyn Hugo",
            "Taylor Jenkins Reid",
            "Perfect for your love of complex relationships and emotionally rich storytelling \
            with glamorous settings.",
        ),
        (
            "Beach Read",
            "Emily Henry",
            "Combines romance with deeper themes that match your appreciation for both heart \
            and substance.",
        ),
        (
            "The Invisible Life of Addie LaRue",
            "V.E. Schwab",
            "A unique love story that spans centuries, perfect for your romantic yet thoughtful \
            reading preferences.",
        ),
    ],
};

const UNIQUE_LITERARY_SOUL: BundleText = BundleText {
    genre: "Unique Literary Soul",
    description: "You march to the beat of your own drum when it comes to reading. Your \
        personalized responses show you have distinct tastes that don't fit into conventional \
        categories, making you a truly individual reader.",
    books: [
        (
            "The Midnight Library",
            "Matt Haig",
            "A philosophical novel that explores life's infinite possibilities, perfect for your \
            unique perspective on storytelling.",
        ),
        (
            "Klara and the Sun",
            "Kazuo Ishiguro",
            "An unconventional narrative that matches your appreciation for stories that think \
            outside the box.",
        ),
        (
            "The Seven Moons of Maali Almeida",
            "Shehan Karunatilaka",
            "A genre-bending novel that combines humor, mystery, and social commentary, perfect \
            for your eclectic tastes.",
        ),
    ],
};

const THOUGHTFUL_EXPLORER: BundleText = BundleText {
    genre: "Thoughtful Explorer",
    description: "You approach reading with curiosity and an open mind. Your balanced responses \
        show you appreciate quality storytelling across genres and value both entertainment and \
        meaning in your books.",
    books: [
        (
            "Where the Crawdads Sing",
            "Delia Owens",
            "A beautifully written story that combines mystery, nature, and human emotion, \
            perfect for your well-rounded reading taste.",
        ),
        (
            "Educated",
            "Tara Westover",
            "A powerful memoir that offers both personal insight and broader social themes, \
            matching your thoughtful approach.",
        ),
        (
            "The Atlas Six",
            "Olivie Blake",
            "Blends fantasy elements with psychological depth, appealing to your appreciation \
            for multi-layered narratives.",
        ),
    ],
};

impl FallbackBundle {
    /// First match wins: mystery, fantasy, romance, any custom answer, default.
    /// Total over every `TraitSummary`.
    pub fn select(summary: &TraitSummary, has_custom_answers: bool) -> Self {
        if summary.has_trait(MYSTERY_TRAIT) {
            FallbackBundle::MysteryMastermind
        } else if summary.has_trait(FANTASY_TRAIT) {
            FallbackBundle::FantasyVoyager
        } else if summary.has_trait(ROMANCE_TRAIT) {
            FallbackBundle::RomanticIdealist
        } else if has_custom_answers {
            FallbackBundle::UniqueLiterarySoul
        } else {
            FallbackBundle::ThoughtfulExplorer
        }
    }

    fn text(self) -> &'static BundleText {
        match self {
            FallbackBundle::MysteryMastermind => &MYSTERY_MASTERMIND,
            FallbackBundle::FantasyVoyager => &FANTASY_VOYAGER,
            FallbackBundle::RomanticIdealist => &ROMANTIC_IDEALIST,
            FallbackBundle::UniqueLiterarySoul => &UNIQUE_LITERARY_SOUL,
            FallbackBundle::ThoughtfulExplorer => &THOUGHTFUL_EXPLORER,
        }
    }

    pub fn genre(self) -> &'static str {
        self.text().genre
    }

    pub fn to_result(self) -> RecommendationResult {
        let text = self.text();
        RecommendationResult {
            genre: text.genre.to_string(),
            description: text.description.to_string(),
            books: text
                .books
                .iter()
                .map(|(title, author, reason)| Book {
                    title: title.to_string(),
                    author: author.to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }
}
