//! The question/answer session: registry, answer checking and the state machine.

pub mod challenge;
pub mod evaluator;
pub mod machine;
pub mod scripts;

pub use challenge::{Challenge, ChallengeRegistry};
pub use evaluator::{evaluate, normalize};
pub use machine::{Phase, Session, SessionState, Submission};
pub use scripts::Timing;
