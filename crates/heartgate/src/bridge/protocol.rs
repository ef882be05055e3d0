/// Frame buffer layout shared with the host.
/// Must stay in sync with `web/protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Vectors: max_vector_vertices × 6 floats]
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities go into the header every frame so the host can compute
/// offsets without hardcoding them.
use crate::api::context::PageConfig;
use crate::api::types::PageEvent;
use crate::systems::vector::VectorVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 2;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_MAX_SOUNDS: usize = 6;
pub const HEADER_SOUND_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_TERMINAL_OPACITY: usize = 10;
pub const HEADER_GLITCH_OFFSET: usize = 11;
/// Bit set of [`FLAG_INPUT_OPEN`] and friends.
pub const HEADER_FLAGS: usize = 12;

pub const FLAG_INPUT_OPEN: u32 = 1;
pub const FLAG_TERMINAL_VISIBLE: u32 = 1 << 1;
pub const FLAG_CANVAS_VISIBLE: u32 = 1 << 2;
pub const FLAG_FINAL_MESSAGE: u32 = 1 << 3;
pub const FLAG_GLITCHING: u32 = 1 << 4;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = VectorVertex::FLOATS;

/// Floats per page event: kind, a, b, c.
pub const EVENT_FLOATS: usize = PageEvent::FLOATS;

/// Buffer layout computed from capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_vector_vertices: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    pub vector_data_floats: usize,
    pub sound_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    pub sound_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_vector_vertices: usize, max_sounds: usize, max_events: usize) -> Self {
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * EVENT_FLOATS;

        let vector_data_offset = HEADER_FLOATS;
        let sound_data_offset = vector_data_offset + vector_data_floats;
        let event_data_offset = sound_data_offset + sound_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_vector_vertices,
            max_sounds,
            max_events,
            vector_data_floats,
            sound_data_floats,
            event_data_floats,
            vector_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.max_vector_vertices, config.max_sounds, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sizes() {
        let layout = ProtocolLayout::from_config(&PageConfig::default());

        assert_eq!(layout.max_vector_vertices, 65536);
        assert_eq!(layout.max_sounds, 32);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.vector_data_floats, 65536 * 6);
        assert_eq!(layout.sound_data_floats, 32);
        assert_eq!(layout.event_data_floats, 32 * 4);

        let total = 16 + 65536 * 6 + 32 + 32 * 4;
        assert_eq!(layout.buffer_total_floats, total);
        assert_eq!(layout.buffer_total_bytes, total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 10, 20);

        assert_eq!(layout.vector_data_offset, HEADER_FLOATS);
        assert_eq!(layout.sound_data_offset, layout.vector_data_offset + layout.vector_data_floats);
        assert_eq!(layout.event_data_offset, layout.sound_data_offset + layout.sound_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_fields_fit_the_header() {
        for field in [
            HEADER_FRAME_COUNTER,
            HEADER_PROTOCOL_VERSION,
            HEADER_MAX_VECTOR_VERTICES,
            HEADER_VECTOR_VERTEX_COUNT,
            HEADER_VIEWPORT_WIDTH,
            HEADER_VIEWPORT_HEIGHT,
            HEADER_MAX_SOUNDS,
            HEADER_SOUND_COUNT,
            HEADER_MAX_EVENTS,
            HEADER_EVENT_COUNT,
            HEADER_TERMINAL_OPACITY,
            HEADER_GLITCH_OFFSET,
            HEADER_FLAGS,
        ] {
            assert!(field < HEADER_FLOATS);
        }
    }

    #[test]
    fn flags_are_distinct_bits() {
        let flags = [
            FLAG_INPUT_OPEN,
            FLAG_TERMINAL_VISIBLE,
            FLAG_CANVAS_VISIBLE,
            FLAG_FINAL_MESSAGE,
            FLAG_GLITCHING,
        ];
        let combined = flags.iter().fold(0, |acc, f| acc | f);
        assert_eq!(combined.count_ones() as usize, flags.len());
    }
}
