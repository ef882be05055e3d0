use std::collections::VecDeque;

use crate::api::types::SoundEvent;

use super::output::{LineStyle, Terminal};
use super::typed_line::TypedLine;

/// A one-shot side effect fired by a script. The page decides what each cue
/// means for the host (sound buffer, page events, particle start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    Sound(SoundEvent),
    OpenInput,
    CloseInput,
    GlitchStart,
    GlitchEnd,
    /// Fade the terminal out over the given seconds.
    FadeOut(f32),
    HideTerminal,
    StartParticles,
    RevealFinalMessage,
}

#[derive(Debug, Clone)]
pub enum Step {
    Line(TypedLine),
    Echo { text: String, style: LineStyle },
    Pause(f32),
    Cue(Cue),
}

/// Ordered steps run strictly one after another.
///
/// `advance` is the only way time reaches a step, and a step only starts once
/// the one before it has finished, so lines land in the order they were queued.
/// Time left over when a step finishes flows into the next step within the
/// same call.
#[derive(Debug, Clone, Default)]
pub struct Script {
    steps: VecDeque<Step>,
    interval: f32,
}

impl Script {
    /// `interval` is the per-character typing interval used by `line`.
    pub fn new(interval: f32) -> Self {
        Self {
            steps: VecDeque::new(),
            interval,
        }
    }

    /// Queue a typed line that starts after `delay` seconds.
    pub fn line(mut self, text: &str, style: LineStyle, delay: f32) -> Self {
        self.steps
            .push_back(Step::Line(TypedLine::new(text, style, delay, self.interval)));
        self
    }

    /// Queue a line that appears all at once.
    pub fn echo(mut self, text: impl Into<String>, style: LineStyle) -> Self {
        self.steps.push_back(Step::Echo {
            text: text.into(),
            style,
        });
        self
    }

    pub fn pause(mut self, seconds: f32) -> Self {
        self.steps.push_back(Step::Pause(seconds.max(0.0)));
        self
    }

    pub fn cue(mut self, cue: Cue) -> Self {
        self.steps.push_back(Step::Cue(cue));
        self
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps not yet completed, including the one in progress.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Run for up to `dt` seconds. Returns the unused time once every step is done.
    pub fn advance(&mut self, dt: f32, terminal: &mut Terminal, fired: &mut Vec<Cue>) -> Option<f32> {
        let mut left = dt;
        while let Some(step) = self.steps.front_mut() {
            match step {
                Step::Line(render) => match render.advance(left, terminal, fired) {
                    Some(rest) => left = rest,
                    None => return None,
                },
                Step::Echo { text, style } => {
                    terminal.push_line(std::mem::take(text), *style);
                }
                Step::Pause(remaining) => {
                    if left < *remaining {
                        *remaining -= left;
                        return None;
                    }
                    left -= *remaining;
                }
                Step::Cue(cue) => fired.push(*cue),
            }
            self.steps.pop_front();
        }
        Some(left)
    }
}
