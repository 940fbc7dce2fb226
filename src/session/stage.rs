/// The fixed screen sequence of one training session.
///
/// Declaration order is the progression order. There is no way back: a stage
/// only ever advances to the next one, and `Results` is terminal (the only
/// exit is a full session reset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Welcome,
    SnapJudgment,
    AiDetection,
    ConfirmationBias,
    LateralReading,
    TruthEffect,
    Results,
}

/// Number of stages that award points (everything between Welcome and Results).
pub const CHALLENGE_COUNT: u32 = 5;

pub const ALL_STAGES: [Stage; 7] = [
    Stage::Welcome,
    Stage::SnapJudgment,
    Stage::AiDetection,
    Stage::ConfirmationBias,
    Stage::LateralReading,
    Stage::TruthEffect,
    Stage::Results,
];

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Welcome => Some(Stage::SnapJudgment),
            Stage::SnapJudgment => Some(Stage::AiDetection),
            Stage::AiDetection => Some(Stage::ConfirmationBias),
            Stage::ConfirmationBias => Some(Stage::LateralReading),
            Stage::LateralReading => Some(Stage::TruthEffect),
            Stage::TruthEffect => Some(Stage::Results),
            Stage::Results => None,
        }
    }

    /// True for stages that present a challenge and can award points.
    pub fn is_challenge(self) -> bool {
        !matches!(self, Stage::Welcome | Stage::Results)
    }

    pub fn is_last_challenge(self) -> bool {
        self == Stage::TruthEffect
    }

    /// Position in the sequence, used for the header progress bar.
    pub fn index(self) -> usize {
        ALL_STAGES
            .iter()
            .position(|s| *s == self)
            .unwrap_or(ALL_STAGES.len() - 1)
    }

    /// Fraction of the session completed, 0.0 at Welcome and 1.0 at Results.
    pub fn progress(self) -> f64 {
        self.index() as f64 / (ALL_STAGES.len() - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let mut stage = Stage::Welcome;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            assert!(next > stage);
            stage = next;
            visited.push(stage);
        }
        assert_eq!(stage, Stage::Results);
        assert_eq!(visited, ALL_STAGES);
    }

    #[test]
    fn test_results_is_terminal() {
        assert_eq!(Stage::Results.next(), None);
    }

    #[test]
    fn test_challenge_count_matches_classification() {
        let count = ALL_STAGES.iter().filter(|s| s.is_challenge()).count();
        assert_eq!(count as u32, CHALLENGE_COUNT);
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(Stage::Welcome.progress(), 0.0);
        assert_eq!(Stage::Results.progress(), 1.0);
    }
}
