use crate::api::types::{PageEvent, SoundEvent};

/// Engine-level configuration: timing and buffer capacities.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Fixed timestep in seconds (default: 1/60). One step is one particle frame.
    pub fixed_dt: f32,
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of page events per frame (default: 32).
    pub max_events: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_vector_vertices: 65536,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// Per-frame outbox shared by every page component: sound cues and page events
/// waiting to be forwarded to the host.
pub struct PageContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<PageEvent>,
    sound_enabled: bool,
    typing_sound: bool,
}

impl PageContext {
    pub fn new(sound_enabled: bool) -> Self {
        Self {
            sounds: Vec::new(),
            events: Vec::new(),
            sound_enabled,
            typing_sound: false,
        }
    }

    /// Opt into the per-character typing cue.
    pub fn with_typing_sound(mut self, enabled: bool) -> Self {
        self.typing_sound = enabled;
        self
    }

    /// Emit a sound cue. Dropped silently while sound is disabled.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if !self.sound_enabled {
            return;
        }
        if event == SoundEvent::TYPING && !self.typing_sound {
            return;
        }
        self.sounds.push(event);
    }

    /// Emit a page event to be forwarded to the host.
    pub fn emit_event(&mut self, event: PageEvent) {
        self.events.push(event);
    }

    /// Turn off every sound cue for the rest of the session.
    pub fn disable_sound(&mut self) {
        if self.sound_enabled {
            log::info!("Audio unavailable, sound cues disabled");
        }
        self.sound_enabled = false;
        self.sounds.clear();
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sounds_pass_through_when_enabled() {
        let mut ctx = PageContext::new(true);
        ctx.emit_sound(SoundEvent::SUCCESS);
        ctx.emit_sound(SoundEvent::ERROR);
        assert_eq!(ctx.sounds, vec![SoundEvent::SUCCESS, SoundEvent::ERROR]);
    }

    #[test]
    fn disabled_sound_drops_everything() {
        let mut ctx = PageContext::new(true);
        ctx.emit_sound(SoundEvent::SUCCESS);
        ctx.disable_sound();
        assert!(ctx.sounds.is_empty());
        ctx.emit_sound(SoundEvent::CELEBRATION);
        assert!(ctx.sounds.is_empty());
        assert!(!ctx.sound_enabled());
    }

    #[test]
    fn typing_cue_needs_opt_in() {
        let mut ctx = PageContext::new(true);
        ctx.emit_sound(SoundEvent::TYPING);
        assert!(ctx.sounds.is_empty());

        let mut ctx = PageContext::new(true).with_typing_sound(true);
        ctx.emit_sound(SoundEvent::TYPING);
        assert_eq!(ctx.sounds, vec![SoundEvent::TYPING]);
    }

    #[test]
    fn clear_frame_data_keeps_settings() {
        let mut ctx = PageContext::new(true);
        ctx.emit_sound(SoundEvent::SUCCESS);
        ctx.emit_event(PageEvent::new(PageEvent::INPUT_OPENED));
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
        assert!(ctx.sound_enabled());
    }
}
