use crate::terminal::{Cue, LineStyle, Script, Terminal};

use super::challenge::{Challenge, ChallengeRegistry};
use super::evaluator::evaluate;
use super::scripts::{self, Timing};

/// Where the session is. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Presenting(usize),
    AwaitingInput(usize),
    Advancing(usize),
    Retrying(usize),
    Complete,
}

/// Which challenge is current and whether the answer field is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current: usize,
    pub awaiting_input: bool,
}

/// Result of handing a submission to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Arrived while the field was closed.
    Ignored,
    Correct,
    Incorrect,
}

/// Drives intro, challenge presentation, answer checking and retries.
///
/// Each state runs a script; the state changes when the script finishes.
/// Submissions are only accepted in `AwaitingInput`.
pub struct Session {
    registry: ChallengeRegistry,
    timing: Timing,
    state: SessionState,
    phase: Phase,
    script: Script,
    wrong_answers: u32,
}

impl Session {
    pub fn new(registry: ChallengeRegistry, timing: Timing) -> Self {
        let script = scripts::intro(timing, registry.len());
        Self {
            registry,
            timing,
            state: SessionState::default(),
            phase: Phase::Intro,
            script,
            wrong_answers: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &ChallengeRegistry {
        &self.registry
    }

    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.registry.get(self.state.current)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Total wrong submissions across all challenges.
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    /// Run the current script for `dt` seconds and follow any transitions it
    /// unlocks. Returns true on the single call that reaches `Complete`.
    pub fn advance(&mut self, dt: f32, terminal: &mut Terminal, fired: &mut Vec<Cue>) -> bool {
        let mut left = dt;
        loop {
            if matches!(self.phase, Phase::AwaitingInput(_) | Phase::Complete) {
                return false;
            }
            match self.script.advance(left, terminal, fired) {
                Some(rest) => left = rest,
                None => return false,
            }

            match self.phase {
                Phase::Intro => self.present(0),
                Phase::Presenting(i) | Phase::Retrying(i) => self.open_input(i, fired),
                Phase::Advancing(i) if self.registry.is_last(i) => {
                    self.phase = Phase::Complete;
                    log::info!(
                        "Session complete: {} challenges passed, {} wrong answers",
                        self.registry.len(),
                        self.wrong_answers
                    );
                    return true;
                }
                Phase::Advancing(i) => self.present(i + 1),
                Phase::AwaitingInput(_) | Phase::Complete => return false,
            }
        }
    }

    /// Handle an Enter press carrying the field's raw text.
    pub fn submit(&mut self, raw: &str, terminal: &mut Terminal, fired: &mut Vec<Cue>) -> Submission {
        let index = match self.phase {
            Phase::AwaitingInput(i) if self.state.awaiting_input => i,
            phase => {
                log::debug!("Ignoring submission while {:?}", phase);
                return Submission::Ignored;
            }
        };
        let Some(challenge) = self.registry.get(index) else {
            return Submission::Ignored;
        };

        terminal.push_line(format!("> {raw}"), LineStyle::System);
        self.state.awaiting_input = false;
        fired.push(Cue::CloseInput);

        if evaluate(raw, challenge) {
            log::info!("Challenge {} passed", index + 1);
            self.script = scripts::granted(self.timing);
            self.phase = Phase::Advancing(index);
            Submission::Correct
        } else {
            self.wrong_answers += 1;
            log::info!("Challenge {} answer rejected", index + 1);
            self.script = scripts::denied(self.timing, challenge);
            self.phase = Phase::Retrying(index);
            Submission::Incorrect
        }
    }

    fn present(&mut self, index: usize) {
        let Some(challenge) = self.registry.get(index) else {
            return;
        };
        log::info!("Presenting challenge {}/{}", index + 1, self.registry.len());
        self.script = scripts::present(self.timing, challenge);
        self.state.current = index;
        self.phase = Phase::Presenting(index);
    }

    fn open_input(&mut self, index: usize, fired: &mut Vec<Cue>) {
        log::debug!("Awaiting answer for challenge {}", index + 1);
        self.phase = Phase::AwaitingInput(index);
        self.state.awaiting_input = true;
        fired.push(Cue::OpenInput);
    }
}
