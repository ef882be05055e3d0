use bytemuck::{Pod, Zeroable};

/// A sound cue emitted by the page logic.
/// The numeric value maps to a synthesized cue in the host's audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// Rising beep after a correct answer.
    pub const SUCCESS: Self = Self(1);
    /// Falling buzz after a wrong answer.
    pub const ERROR: Self = Self(2);
    /// Four-note chime when the celebration starts.
    pub const CELEBRATION: Self = Self(3);
    /// Per-character key click. Hosts usually map this to nothing.
    pub const TYPING: Self = Self(4);
}

/// A page event communicated from Rust to the host via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PageEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl PageEvent {
    pub const FLOATS: usize = 4;

    /// The answer field became editable.
    pub const INPUT_OPENED: f32 = 1.0;
    /// The answer field was cleared and locked.
    pub const INPUT_CLOSED: f32 = 2.0;
    pub const GLITCH_STARTED: f32 = 3.0;
    pub const GLITCH_ENDED: f32 = 4.0;
    /// `a` = fade duration in seconds.
    pub const FADE_STARTED: f32 = 5.0;
    pub const TERMINAL_HIDDEN: f32 = 6.0;
    /// `a`, `b` = canvas width and height.
    pub const CANVAS_SHOWN: f32 = 7.0;
    pub const FINAL_MESSAGE_SHOWN: f32 = 8.0;

    pub const fn new(kind: f32) -> Self {
        Self { kind, a: 0.0, b: 0.0, c: 0.0 }
    }

    pub const fn with_payload(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn page_event_is_four_floats() {
        assert_eq!(size_of::<PageEvent>(), PageEvent::FLOATS * 4);
        let ev = PageEvent::with_payload(PageEvent::FADE_STARTED, 1.0, 0.0, 0.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&ev));
        assert_eq!(floats, &[PageEvent::FADE_STARTED, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn sound_cues_are_distinct() {
        let cues = [
            SoundEvent::SUCCESS,
            SoundEvent::ERROR,
            SoundEvent::CELEBRATION,
            SoundEvent::TYPING,
        ];
        for (i, a) in cues.iter().enumerate() {
            for b in &cues[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
