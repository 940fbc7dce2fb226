/// Skill categories the trainer scores. A closed enum instead of string keys:
/// referencing an unknown category is impossible rather than a runtime error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Logic,
    AiAwareness,
    BiasResistance,
    LateralReading,
}

pub const ALL_CATEGORIES: [Category; 4] = [
    Category::Logic,
    Category::AiAwareness,
    Category::BiasResistance,
    Category::LateralReading,
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Logic => "Logic (System 2)",
            Category::AiAwareness => "AI Awareness",
            Category::BiasResistance => "Bias Resistance",
            Category::LateralReading => "Lateral Reading",
        }
    }

    fn slot(self) -> usize {
        match self {
            Category::Logic => 0,
            Category::AiAwareness => 1,
            Category::BiasResistance => 2,
            Category::LateralReading => 3,
        }
    }
}

/// The full result of answering one challenge. Every selectable choice maps to
/// exactly one of these; the session applies it as a single unit so points,
/// category, explanation and correctness can never be transposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeOutcome {
    pub points: u32,
    pub category: Category,
    pub explanation: String,
    pub correct: bool,
}

/// Feedback shown after a challenge is answered, until acknowledged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub correct: bool,
}

/// Cumulative session score.
///
/// Invariant: `score` always equals the sum of the category sub-scores, and
/// `total_challenges` equals the number of awards applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    categories: [u32; 4],
    pub total_challenges: u32,
}

/// Per-category ceiling supplied by the challenge content (one 10-point choice
/// per category-relevant stage). Display-only; `award` does not clamp.
pub const CATEGORY_MAX: u32 = 10;

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> u32 {
        self.categories[category.slot()]
    }

    /// Apply one challenge outcome and produce the feedback to display.
    /// Callers supply points in the intended 0..=10 range.
    pub fn award(&mut self, outcome: ChallengeOutcome) -> Feedback {
        self.score += outcome.points;
        self.categories[outcome.category.slot()] += outcome.points;
        self.total_challenges += 1;
        Feedback {
            message: outcome.explanation,
            correct: outcome.correct,
        }
    }

    pub fn category_sum(&self) -> u32 {
        self.categories.iter().sum()
    }
}
