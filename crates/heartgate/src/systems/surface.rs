//! Visual state of the page surfaces outside the canvas: terminal glitch and
//! fade, and which surfaces are showing.

use crate::core::rng::Rng;
use crate::extensions::{ease, Easing};

/// Largest horizontal jitter of the glitching terminal, in CSS pixels.
pub const GLITCH_AMPLITUDE: f32 = 6.0;

#[derive(Debug, Clone, Copy)]
struct Fade {
    elapsed: f32,
    duration: f32,
}

#[derive(Debug)]
pub struct SurfaceFx {
    glitching: bool,
    glitch_offset: f32,
    fade: Option<Fade>,
    terminal_visible: bool,
    canvas_visible: bool,
    final_message_visible: bool,
}

impl SurfaceFx {
    pub fn new() -> Self {
        Self {
            glitching: false,
            glitch_offset: 0.0,
            fade: None,
            terminal_visible: true,
            canvas_visible: false,
            final_message_visible: false,
        }
    }

    pub fn start_glitch(&mut self) {
        self.glitching = true;
    }

    pub fn end_glitch(&mut self) {
        self.glitching = false;
        self.glitch_offset = 0.0;
    }

    pub fn start_fade(&mut self, duration: f32) {
        self.fade = Some(Fade {
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
        });
    }

    pub fn hide_terminal(&mut self) {
        self.terminal_visible = false;
    }

    pub fn show_canvas(&mut self) {
        self.canvas_visible = true;
    }

    pub fn reveal_final_message(&mut self) {
        self.final_message_visible = true;
    }

    /// Advance running transitions.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng) {
        if self.glitching {
            self.glitch_offset = rng.range(-GLITCH_AMPLITUDE, GLITCH_AMPLITUDE);
        }
        if let Some(fade) = &mut self.fade {
            fade.elapsed = (fade.elapsed + dt).min(fade.duration);
        }
    }

    /// 1.0 until a fade starts, then eases down to 0.0. Always 0.0 once hidden.
    pub fn terminal_opacity(&self) -> f32 {
        if !self.terminal_visible {
            return 0.0;
        }
        match self.fade {
            Some(fade) => ease(1.0, 0.0, fade.elapsed / fade.duration, Easing::QuadOut),
            None => 1.0,
        }
    }

    pub fn glitch_offset(&self) -> f32 {
        self.glitch_offset
    }

    pub fn is_glitching(&self) -> bool {
        self.glitching
    }

    pub fn terminal_visible(&self) -> bool {
        self.terminal_visible
    }

    pub fn canvas_visible(&self) -> bool {
        self.canvas_visible
    }

    pub fn final_message_visible(&self) -> bool {
        self.final_message_visible
    }
}

impl Default for SurfaceFx {
    fn default() -> Self {
        Self::new()
    }
}
