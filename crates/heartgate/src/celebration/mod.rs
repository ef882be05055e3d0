//! One-shot timeline that runs after the last challenge is passed.

use crate::api::types::SoundEvent;
use crate::session::Timing;
use crate::terminal::{Cue, LineStyle, Script, Terminal};

/// Pause after "Decrypting..." before access is granted.
pub const VERIFY_PAUSE: f32 = 0.8;
/// Pause after "Root access granted." before the glitch.
pub const SETTLE_PAUSE: f32 = 1.0;
pub const GLITCH_DURATION: f32 = 0.5;
pub const FADE_DURATION: f32 = 1.0;
/// Delay between the particles starting and the final message appearing.
pub const REVEAL_DELAY: f32 = 0.5;

/// Build the fixed celebration timeline.
pub fn timeline(timing: Timing) -> Script {
    let d = timing.line_delay;
    Script::new(timing.interval)
        .line("", LineStyle::System, d)
        .line("Verifying...", LineStyle::Loading, d)
        .line("Matching encrypted records...", LineStyle::Loading, d)
        .line("Decrypting heart_core.sys...", LineStyle::Loading, d)
        .pause(VERIFY_PAUSE)
        .line("Root access granted.", LineStyle::Success, d)
        .pause(SETTLE_PAUSE)
        .cue(Cue::GlitchStart)
        .pause(GLITCH_DURATION)
        .cue(Cue::GlitchEnd)
        .cue(Cue::FadeOut(FADE_DURATION))
        .pause(FADE_DURATION)
        .cue(Cue::HideTerminal)
        .cue(Cue::StartParticles)
        .cue(Cue::Sound(SoundEvent::CELEBRATION))
        .pause(REVEAL_DELAY)
        .cue(Cue::RevealFinalMessage)
}

/// Runs the timeline once. No branches, no way to abort.
pub struct Celebration {
    script: Script,
}

impl Celebration {
    pub fn new(timing: Timing) -> Self {
        Self {
            script: timeline(timing),
        }
    }

    /// Returns true once the whole timeline has played.
    pub fn advance(&mut self, dt: f32, terminal: &mut Terminal, fired: &mut Vec<Cue>) -> bool {
        self.script.advance(dt, terminal, fired).is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.script.is_finished()
    }
}
