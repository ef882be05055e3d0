//! Fixed text of the terminal session, one builder per state.

use crate::api::types::SoundEvent;
use crate::terminal::{Cue, LineStyle, Script};

use super::challenge::Challenge;

const RULE: &str = "================================================";
const BANNER: &str = "  RESTRICTED ACCESS - AUTHENTICATION REQUIRED  ";
/// Gap between the banner's rule lines, shorter than the usual line delay.
const BANNER_GAP: f32 = 0.1;

/// Timing shared by every scripted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Seconds per typed character.
    pub interval: f32,
    /// Seconds before each scripted line.
    pub line_delay: f32,
}

impl Timing {
    pub fn new(interval: f32, line_delay: f32) -> Self {
        Self { interval, line_delay }
    }
}

/// Connection banner and challenge count.
pub fn intro(timing: Timing, challenge_count: usize) -> Script {
    let d = timing.line_delay;
    Script::new(timing.interval)
        .line("INITIALIZING HEART ACCESS TERMINAL...", LineStyle::System, 0.0)
        .line("Establishing secure connection...", LineStyle::System, d)
        .line("Connection established.", LineStyle::System, d)
        .line("", LineStyle::System, d)
        .line(RULE, LineStyle::System, d)
        .line(BANNER, LineStyle::System, BANNER_GAP)
        .line(RULE, LineStyle::System, BANNER_GAP)
        .line("", LineStyle::System, d)
        .line(
            &format!("To access this heart, you must pass {challenge_count} security challenges."),
            LineStyle::System,
            d,
        )
        .line("", LineStyle::System, d)
}

/// Label line, then the question line.
pub fn present(timing: Timing, challenge: &Challenge) -> Script {
    let d = timing.line_delay;
    Script::new(timing.interval)
        .line(&challenge.label, LineStyle::Challenge, d)
        .line(&challenge.prompt_line(), LineStyle::System, d)
}

pub fn granted(timing: Timing) -> Script {
    let d = timing.line_delay;
    Script::new(timing.interval)
        .cue(Cue::Sound(SoundEvent::SUCCESS))
        .line("Access Granted.", LineStyle::Success, d)
        .line("", LineStyle::System, d)
}

/// Failure message, retry prompt, then the question again. The label is not
/// repeated.
pub fn denied(timing: Timing, challenge: &Challenge) -> Script {
    let d = timing.line_delay;
    Script::new(timing.interval)
        .cue(Cue::Sound(SoundEvent::ERROR))
        .line(&challenge.failure_message, LineStyle::Error, d)
        .line("Please try again.", LineStyle::System, d)
        .line("", LineStyle::System, d)
        .line(&challenge.prompt_line(), LineStyle::System, d)
}
