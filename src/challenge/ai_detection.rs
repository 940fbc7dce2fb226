//! Human or machine? The item's single `is_true` label scores both answers:
//! "human source" is correct iff the item is true, "AI-generated" iff it is
//! not. The label deliberately conflates truthfulness with authorship — that
//! is how the content model defines these items.

use crate::challenge::{ChallengeCard, Choice, Excerpt};
use crate::content::ChallengeItem;
use crate::session::{Category, ChallengeOutcome};

pub fn card(item: &ChallengeItem) -> ChallengeCard {
    let outcome = |correct: bool| ChallengeOutcome {
        points: if correct { 10 } else { 0 },
        category: Category::AiAwareness,
        explanation: item.explanation.clone(),
        correct,
    };

    ChallengeCard {
        badge: "AI Detective",
        title: "Human or machine?",
        prompt: "Read the passage below. Who wrote it?".to_string(),
        excerpt: Some(Excerpt {
            text: format!("\"{}\"", item.body),
            attribution: Some(item.source.clone()),
        }),
        clue_search: None,
        choices: vec![
            Choice::new("Human source", outcome(item.is_true)),
            Choice::new("AI-generated", outcome(!item.is_true)),
        ],
    }
}
