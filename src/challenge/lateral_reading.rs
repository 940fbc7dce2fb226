//! Don't just read the source — read AROUND it. The clue panel models a quick
//! search for what others say about the source; revealing it is a free,
//! idempotent action that never touches the score. The true/false answers are
//! scored against the item's `is_true` label exactly like AI detection.

use crate::challenge::{ChallengeCard, Choice, ClueSearch, Excerpt};
use crate::content::ChallengeItem;
use crate::session::{Category, ChallengeOutcome};

/// How much of the body is quoted on the card; the point is to judge the
/// source, not to read the whole article.
const BODY_PREVIEW_CHARS: usize = 100;

pub fn card(item: &ChallengeItem, clues_shown: bool) -> ChallengeCard {
    let outcome = |correct: bool| ChallengeOutcome {
        points: if correct { 10 } else { 0 },
        category: Category::LateralReading,
        explanation: item.explanation.clone(),
        correct,
    };

    let preview: String = item.body.chars().take(BODY_PREVIEW_CHARS).collect();
    let ellipsis = if item.body.chars().count() > BODY_PREVIEW_CHARS {
        "..."
    } else {
        ""
    };

    ChallengeCard {
        badge: "Lateral Reading",
        title: "Read around the source",
        prompt: "Professionals check what others say about a source instead of staring \
                 at the page itself. Check around, then decide: is this story true?"
            .to_string(),
        excerpt: Some(Excerpt {
            text: format!("{}\n{preview}{ellipsis}", item.headline),
            attribution: Some(item.source.clone()),
        }),
        clue_search: Some(ClueSearch {
            source: item.source.clone(),
            clues: clues_shown.then(|| item.clues.clone()),
        }),
        choices: vec![
            Choice::new("True", outcome(item.is_true)),
            Choice::new("False", outcome(!item.is_true)),
        ],
    }
}
