//! The halo effect: we trust claims from people we like. Static content,
//! not data-driven — the trap is in who is speaking, not in what is said.

use crate::challenge::{ChallengeCard, Choice};
use crate::session::{Category, ChallengeOutcome};

pub fn card() -> ChallengeCard {
    let influencer = Choice::new(
        "Your favorite influencer",
        ChallengeOutcome {
            points: 0,
            category: Category::BiasResistance,
            explanation: "You trusted the person instead of the facts. Source criticism is \
                          about WHAT is said, not just WHO says it."
                .to_string(),
            correct: false,
        },
    )
    .with_detail("\"Trust me, this new diet flushes toxins out of your body in 2 days!\"");

    let researcher = Choice::new(
        "An unknown researcher",
        ChallengeOutcome {
            points: 10,
            category: Category::BiasResistance,
            explanation: "Right! You saw through the halo effect. Even celebrities we like \
                          can be wrong, or paid to spread pseudoscience."
                .to_string(),
            correct: true,
        },
    )
    .with_detail("\"There is no scientific evidence that 'detox' works that way.\"");

    ChallengeCard {
        badge: "Hall of Mirrors",
        title: "Whose side are you on?",
        prompt: "We tend to trust people we like or identify with. That is the halo \
                 effect. Which claim do you trust?"
            .to_string(),
        excerpt: None,
        clue_search: None,
        choices: vec![influencer, researcher],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_researcher_beats_influencer() {
        let card = card();
        assert!(!card.choices[0].outcome.correct);
        assert_eq!(card.choices[0].outcome.points, 0);
        assert!(card.choices[1].outcome.correct);
        assert_eq!(card.choices[1].outcome.points, 10);
        for choice in &card.choices {
            assert_eq!(choice.outcome.category, Category::BiasResistance);
            assert!(choice.detail.is_some());
        }
    }
}
