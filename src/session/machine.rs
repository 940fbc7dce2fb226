use thiserror::Error;

use crate::session::progress::{ChallengeOutcome, Feedback, Progress};
use crate::session::stage::Stage;

/// A transition that is not valid from the current state. Invalid calls are
/// rejected without touching Progress, Stage or Feedback; callers treat them
/// as no-ops (stale key events are normal in an interactive session).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("start is only valid from the welcome stage (current: {0:?})")]
    NotAtWelcome(Stage),
    #[error("no challenge is active at stage {0:?}")]
    NotAChallenge(Stage),
    #[error("feedback is already pending")]
    FeedbackPending,
    #[error("no feedback to acknowledge")]
    NoFeedback,
}

/// The session state machine: current stage, cumulative progress, and the
/// orthogonal "feedback shown" sub-state. Owns all mutable session state;
/// screens only read it and call the four transition entry points.
#[derive(Clone, Debug)]
pub struct Session {
    stage: Stage,
    pub progress: Progress,
    feedback: Option<Feedback>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::Welcome,
            progress: Progress::new(),
            feedback: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Welcome -> first challenge.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        if self.stage != Stage::Welcome {
            return Err(TransitionError::NotAtWelcome(self.stage));
        }
        self.stage = Stage::SnapJudgment;
        Ok(())
    }

    /// Record the outcome of the current challenge and set feedback.
    /// Does not advance the stage; that happens on `acknowledge`.
    pub fn award(&mut self, outcome: ChallengeOutcome) -> Result<(), TransitionError> {
        if !self.stage.is_challenge() {
            return Err(TransitionError::NotAChallenge(self.stage));
        }
        if self.feedback.is_some() {
            return Err(TransitionError::FeedbackPending);
        }
        self.feedback = Some(self.progress.award(outcome));
        Ok(())
    }

    /// Dismiss the pending feedback and advance to the next stage.
    pub fn acknowledge(&mut self) -> Result<Stage, TransitionError> {
        if self.feedback.is_none() {
            return Err(TransitionError::NoFeedback);
        }
        self.feedback = None;
        // A challenge stage always has a successor; feedback can only be
        // pending on a challenge stage.
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
        Ok(self.stage)
    }

    /// Full session reset: back to Welcome with zeroed progress. The caller
    /// is responsible for re-invoking the content provider.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::progress::Category;
    use crate::session::stage::{ALL_STAGES, CHALLENGE_COUNT};

    fn outcome(points: u32, correct: bool) -> ChallengeOutcome {
        ChallengeOutcome {
            points,
            category: Category::Logic,
            explanation: "why".to_string(),
            correct,
        }
    }

    #[test]
    fn test_start_only_from_welcome() {
        let mut session = Session::new();
        session.start().unwrap();
        assert_eq!(session.stage(), Stage::SnapJudgment);
        assert_eq!(
            session.start(),
            Err(TransitionError::NotAtWelcome(Stage::SnapJudgment))
        );
    }

    #[test]
    fn test_award_rejected_at_welcome_and_results() {
        let mut session = Session::new();
        assert_eq!(
            session.award(outcome(10, true)),
            Err(TransitionError::NotAChallenge(Stage::Welcome))
        );

        play_through(&mut session);
        assert_eq!(session.stage(), Stage::Results);
        assert_eq!(
            session.award(outcome(10, true)),
            Err(TransitionError::NotAChallenge(Stage::Results))
        );
    }

    #[test]
    fn test_award_sets_feedback_without_advancing() {
        let mut session = Session::new();
        session.start().unwrap();
        session.award(outcome(10, true)).unwrap();
        assert_eq!(session.stage(), Stage::SnapJudgment);
        assert!(session.feedback().is_some());
        // Double-answering while feedback is up is rejected.
        assert_eq!(
            session.award(outcome(10, true)),
            Err(TransitionError::FeedbackPending)
        );
        assert_eq!(session.progress.total_challenges, 1);
    }

    #[test]
    fn test_acknowledge_requires_feedback() {
        let mut session = Session::new();
        session.start().unwrap();
        assert_eq!(session.acknowledge(), Err(TransitionError::NoFeedback));
    }

    #[test]
    fn test_full_playthrough_visits_every_stage_once() {
        let mut session = Session::new();
        let mut visited = vec![session.stage()];
        session.start().unwrap();
        visited.push(session.stage());
        while session.stage() != Stage::Results {
            session.award(outcome(10, true)).unwrap();
            let next = session.acknowledge().unwrap();
            visited.push(next);
        }
        assert_eq!(visited, ALL_STAGES);
        assert_eq!(session.progress.total_challenges, CHALLENGE_COUNT);
        assert_eq!(session.progress.score, 50);
        assert_eq!(session.progress.score, session.progress.category_sum());
    }

    #[test]
    fn test_reset_returns_to_welcome_with_zero_progress() {
        let mut session = Session::new();
        play_through(&mut session);
        session.reset();
        assert_eq!(session.stage(), Stage::Welcome);
        assert_eq!(session.progress.score, 0);
        assert_eq!(session.progress.total_challenges, 0);
        assert!(session.feedback().is_none());
    }

    fn play_through(session: &mut Session) {
        session.start().unwrap();
        while session.stage() != Stage::Results {
            session.award(outcome(0, false)).unwrap();
            session.acknowledge().unwrap();
        }
    }
}
