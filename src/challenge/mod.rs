pub mod ai_detection;
pub mod confirmation_bias;
pub mod lateral_reading;
pub mod snap_judgment;
pub mod truth_effect;

use crate::content::ChallengeItem;
use crate::session::{ChallengeOutcome, Stage};

/// One selectable answer. `locked` choices are rendered but cannot be
/// activated (used by the snap-judgment impulse test).
#[derive(Clone, Debug)]
pub struct Choice {
    pub label: String,
    /// Optional quoted line under the label (e.g. what the speaker claims).
    pub detail: Option<String>,
    pub outcome: ChallengeOutcome,
    pub locked: bool,
}

impl Choice {
    fn new(label: impl Into<String>, outcome: ChallengeOutcome) -> Self {
        Self {
            label: label.into(),
            detail: None,
            outcome,
            locked: false,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

/// Quoted material presented with a challenge.
#[derive(Clone, Debug)]
pub struct Excerpt {
    pub text: String,
    pub attribution: Option<String>,
}

/// The lateral-reading disclosure panel: what "checking around" the source
/// turns up. `clues` stays None until the user triggers the disclosure.
#[derive(Clone, Debug)]
pub struct ClueSearch {
    pub source: String,
    pub clues: Option<Vec<String>>,
}

/// Everything a challenge screen displays: a pure value derived from the
/// stage (plus its challenge item and UI sub-state where applicable).
#[derive(Clone, Debug)]
pub struct ChallengeCard {
    pub badge: &'static str,
    pub title: &'static str,
    pub prompt: String,
    pub excerpt: Option<Excerpt>,
    pub clue_search: Option<ClueSearch>,
    pub choices: Vec<Choice>,
}

/// Build the card for a challenge stage. `items` is the session content list
/// (index 0 feeds AI detection, index 1 lateral reading); `snap_unlocked` and
/// `clues_shown` are the two pieces of per-stage UI sub-state.
/// Welcome and Results have dedicated screens and no card.
pub fn card_for(
    stage: Stage,
    items: &[ChallengeItem],
    snap_unlocked: bool,
    clues_shown: bool,
) -> Option<ChallengeCard> {
    match stage {
        Stage::Welcome | Stage::Results => None,
        Stage::SnapJudgment => Some(snap_judgment::card(snap_unlocked)),
        Stage::AiDetection => items.first().map(ai_detection::card),
        Stage::ConfirmationBias => Some(confirmation_bias::card()),
        Stage::LateralReading => items.get(1).map(|item| lateral_reading::card(item, clues_shown)),
        Stage::TruthEffect => Some(truth_effect::card()),
    }
}
