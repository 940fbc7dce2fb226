//! The impulse-suppression test. A sensational claim is shown with an
//! always-available "react now" answer; the reflective answer only unlocks
//! after [`REFLECTION_DELAY`] has passed since stage entry. The wait is the
//! whole point of the exercise, not a loading artifact: there is no way to
//! select the reflective answer early.

use std::time::Duration;

use crate::challenge::{ChallengeCard, Choice, Excerpt};
use crate::session::{Category, ChallengeOutcome};

pub const REFLECTION_DELAY: Duration = Duration::from_secs(6);

/// Whether the reflective choice has unlocked, given time since stage entry.
pub fn reflective_choice_unlocked(elapsed: Duration) -> bool {
    elapsed >= REFLECTION_DELAY
}

pub fn card(unlocked: bool) -> ChallengeCard {
    let impulsive = Choice::new(
        "This is true! (React now)",
        ChallengeOutcome {
            points: 0,
            category: Category::Logic,
            explanation: "You fell for it! Your brain reacted emotionally (System 1) to a \
                          sensational headline. Logically, a school cannot confiscate your \
                          phone in your own home."
                .to_string(),
            correct: false,
        },
    );
    let reflective = Choice::new(
        "Wait... this is implausible.",
        ChallengeOutcome {
            points: 10,
            category: Category::Logic,
            explanation: "Nice! You waited out your first impulse. Pausing gave System 2 \
                          time to notice how unreasonable the claim is."
                .to_string(),
            correct: true,
        },
    )
    .locked(!unlocked);

    ChallengeCard {
        badge: "Stress Test",
        title: "Breaking news!",
        prompt: "Press the first answer if you think this is true.".to_string(),
        excerpt: Some(Excerpt {
            text: "\"NEW LAW: All phones confiscated at school around the clock — even at home!\""
                .to_string(),
            attribution: Some("BREAKING: RIGHT NOW".to_string()),
        }),
        clue_search: None,
        choices: vec![impulsive, reflective],
    }
}
