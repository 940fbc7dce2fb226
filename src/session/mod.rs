pub mod machine;
pub mod progress;
pub mod stage;

pub use machine::{Session, TransitionError};
pub use progress::{Category, ChallengeOutcome, Feedback, Progress};
pub use stage::Stage;
