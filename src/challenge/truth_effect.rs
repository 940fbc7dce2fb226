//! The illusory truth effect: the brain reads "familiar" as "true". Static
//! content; the question is how to protect yourself.

use crate::challenge::{ChallengeCard, Choice, Excerpt};
use crate::session::{Category, ChallengeOutcome};

pub fn card() -> ChallengeCard {
    let question = Choice::new(
        "A. Deliberately question the source, even when it sounds reasonable.",
        ChallengeOutcome {
            points: 10,
            category: Category::BiasResistance,
            explanation: "Exactly! Stopping to ask \"why do I believe this?\" breaks the \
                          truth effect."
                .to_string(),
            correct: true,
        },
    );
    let gut = Choice::new(
        "B. Trust my gut feeling (System 1).",
        ChallengeOutcome {
            points: 0,
            category: Category::BiasResistance,
            explanation: "Unfortunately not. Trusting the gut is precisely what makes us \
                          vulnerable to the truth effect."
                .to_string(),
            correct: false,
        },
    );

    ChallengeCard {
        badge: "Truth Effect",
        title: "Does it feel familiar?",
        prompt: "How do you protect yourself against this?".to_string(),
        excerpt: Some(Excerpt {
            text: "\"The brain interprets 'familiar' as 'true'.\"\nHear a lie ten times and \
                   System 1 starts believing it, simply because it no longer costs energy \
                   to process."
                .to_string(),
            attribution: None,
        }),
        clue_search: None,
        choices: vec![question, gut],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questioning_wins() {
        let card = card();
        assert!(card.choices[0].outcome.correct);
        assert_eq!(card.choices[0].outcome.points, 10);
        assert!(!card.choices[1].outcome.correct);
        assert_eq!(card.choices[1].outcome.points, 0);
    }
}
