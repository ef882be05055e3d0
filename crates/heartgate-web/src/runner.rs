use heartgate::bridge::protocol::{self, ProtocolLayout, HEADER_FLOATS, PROTOCOL_VERSION};
use heartgate::{
    ConfigError, FixedTimestep, InputEvent, InputQueue, Page, PageConfig, PageContext, SessionConfig,
};

/// Owns the page and the per-frame buffers the host reads.
///
/// `lib.rs` keeps one of these in a `thread_local!` and forwards every
/// `#[wasm_bindgen]` export to it.
pub struct PageRunner {
    page: Page,
    ctx: PageContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: PageConfig,
    layout: ProtocolLayout,
    /// Flat buffer of sound event IDs, one byte each.
    sound_buffer: Vec<u8>,
    frame_counter: u32,
}

impl PageRunner {
    pub fn new(session: SessionConfig, config: PageConfig, seed: u64) -> Result<Self, ConfigError> {
        let page = Page::new(&session, &config, seed)?;
        let ctx = PageContext::new(session.sound_enabled).with_typing_sound(session.typing_sound);
        let layout = ProtocolLayout::from_config(&config);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Ok(Self {
            page,
            ctx,
            input: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            config,
            layout,
            sound_buffer,
            frame_counter: 0,
        })
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Audio failed to start on the host. Sound cues stop for good.
    pub fn disable_sound(&mut self) {
        self.ctx.disable_sound();
        self.sound_buffer.clear();
    }

    /// Run one host frame: apply queued input, then as many fixed steps as
    /// the elapsed time allows.
    pub fn tick(&mut self, dt: f32) {
        self.ctx.clear_frame_data();

        let events = self.input.drain();
        self.page.handle_input(events, &mut self.ctx);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.page.step(self.timestep.dt(), &mut self.ctx);
        }

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "Dropping {} page events over capacity",
                self.ctx.events.len() - self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        if self.ctx.sounds.len() > self.layout.max_sounds {
            log::warn!(
                "Dropping {} sound cues over capacity",
                self.ctx.sounds.len() - self.layout.max_sounds
            );
        }

        // Pack sound events into flat buffer
        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.layout.max_sounds) {
            self.sound_buffer.push(sound.0 as u8);
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Terminal lines changed since the last call, as a JSON array of
    /// `{ index, style, text }`.
    pub fn terminal_updates_json(&mut self) -> String {
        let updates = self.page.take_terminal_updates();
        match serde_json::to_string(&updates) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode terminal updates: {}", e);
                "[]".to_string()
            }
        }
    }

    /// Header snapshot in the layout described by `heartgate::bridge::protocol`.
    pub fn header(&self) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        let viewport = self.page.particles().viewport();
        header[protocol::HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[protocol::HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[protocol::HEADER_MAX_VECTOR_VERTICES] = self.layout.max_vector_vertices as f32;
        header[protocol::HEADER_VECTOR_VERTEX_COUNT] = self.vector_vertex_count() as f32;
        header[protocol::HEADER_VIEWPORT_WIDTH] = viewport.width;
        header[protocol::HEADER_VIEWPORT_HEIGHT] = viewport.height;
        header[protocol::HEADER_MAX_SOUNDS] = self.layout.max_sounds as f32;
        header[protocol::HEADER_SOUND_COUNT] = self.sound_events_len() as f32;
        header[protocol::HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        header[protocol::HEADER_EVENT_COUNT] = self.page_events_len() as f32;
        header[protocol::HEADER_TERMINAL_OPACITY] = self.terminal_opacity();
        header[protocol::HEADER_GLITCH_OFFSET] = self.glitch_offset();
        header[protocol::HEADER_FLAGS] = self.flags() as f32;
        header
    }

    pub fn flags(&self) -> u32 {
        let surface = self.page.surface();
        let mut flags = 0;
        if self.page.input_open() {
            flags |= protocol::FLAG_INPUT_OPEN;
        }
        if surface.terminal_visible() {
            flags |= protocol::FLAG_TERMINAL_VISIBLE;
        }
        if surface.canvas_visible() {
            flags |= protocol::FLAG_CANVAS_VISIBLE;
        }
        if surface.final_message_visible() {
            flags |= protocol::FLAG_FINAL_MESSAGE;
        }
        if surface.is_glitching() {
            flags |= protocol::FLAG_GLITCHING;
        }
        flags
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn input_open(&self) -> bool {
        self.page.input_open()
    }

    pub fn terminal_opacity(&self) -> f32 {
        self.page.surface().terminal_opacity()
    }

    pub fn glitch_offset(&self) -> f32 {
        self.page.surface().glitch_offset()
    }

    pub fn sound_enabled(&self) -> bool {
        self.ctx.sound_enabled()
    }

    // ---- Pointer accessors for zero-copy reads from wasm memory ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.page.vectors().buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.page
            .vectors()
            .vertex_count()
            .min(self.layout.max_vector_vertices) as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn page_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn page_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }

    // ---- Capacity accessors ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartgate::bridge::protocol::*;
    use heartgate::{PageEvent, SoundEvent};

    const FRAME: f32 = 1.0 / 60.0;

    fn fast() -> SessionConfig {
        SessionConfig {
            typing_speed: 1,
            line_delay: 10,
            ..SessionConfig::default()
        }
    }

    fn runner(session: SessionConfig) -> PageRunner {
        PageRunner::new(session, PageConfig::default(), 99).unwrap()
    }

    fn tick_until(r: &mut PageRunner, done: impl Fn(&PageRunner) -> bool) {
        for _ in 0..20_000 {
            if done(r) {
                return;
            }
            r.tick(FRAME);
        }
        panic!("runner never reached the expected state");
    }

    #[test]
    fn rejects_invalid_config() {
        let mut session = fast();
        session.questions[1].answer = "  ".into();
        let err = PageRunner::new(session, PageConfig::default(), 1).err();
        assert!(matches!(err, Some(ConfigError::BlankAnswer { ordinal: 2 })));
    }

    #[test]
    fn terminal_updates_are_json_lines() {
        let mut r = runner(fast());
        tick_until(&mut r, |r| r.input_open());
        let json = r.terminal_updates_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let lines = parsed.as_array().unwrap();
        assert_eq!(lines[0]["index"], 0);
        assert_eq!(lines[0]["style"], "system-message");
        assert_eq!(lines[0]["text"], "INITIALIZING HEART ACCESS TERMINAL...");
        assert_eq!(r.terminal_updates_json(), "[]");
    }

    #[test]
    fn header_reflects_state() {
        let mut r = runner(fast());
        r.tick(FRAME);
        let header = r.header();
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(header[HEADER_MAX_VECTOR_VERTICES], 65536.0);
        assert_eq!(header[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(header[HEADER_TERMINAL_OPACITY], 1.0);
        assert_eq!(r.flags(), FLAG_TERMINAL_VISIBLE);

        tick_until(&mut r, |r| r.input_open());
        assert_eq!(r.flags(), FLAG_TERMINAL_VISIBLE | FLAG_INPUT_OPEN);
        assert_eq!(r.page_events_len(), 1);
    }

    #[test]
    fn full_run_through_the_bridge() {
        let mut r = runner(fast());
        let mut events = Vec::new();
        let mut sounds = Vec::new();
        for answer in ["bottled", "blue", "24/05", "20"] {
            tick_until(&mut r, |r| r.input_open());
            r.push_input(InputEvent::Submit { text: answer.into() });
            r.tick(FRAME);
            events.extend(r.ctx.events.iter().map(|e| e.kind));
            sounds.extend(r.sound_buffer.iter().copied());
        }
        for _ in 0..20_000 {
            if r.flags() & FLAG_FINAL_MESSAGE != 0 {
                break;
            }
            r.tick(FRAME);
            events.extend(r.ctx.events.iter().map(|e| e.kind));
            sounds.extend(r.sound_buffer.iter().copied());
        }

        assert!(r.flags() & FLAG_CANVAS_VISIBLE != 0);
        assert!(r.flags() & FLAG_TERMINAL_VISIBLE == 0);
        assert_eq!(r.page().celebration_runs(), 1);
        assert!(events.contains(&PageEvent::CANVAS_SHOWN));
        assert_eq!(
            sounds.iter().filter(|s| **s == SoundEvent::CELEBRATION.0 as u8).count(),
            1
        );
    }

    #[test]
    fn disable_sound_silences_the_rest() {
        let mut r = runner(fast());
        r.disable_sound();
        assert!(!r.sound_enabled());
        tick_until(&mut r, |r| r.input_open());
        r.push_input(InputEvent::Submit { text: "wrong".into() });
        for _ in 0..120 {
            r.tick(FRAME);
            assert_eq!(r.sound_events_len(), 0);
        }
    }

    #[test]
    fn resize_goes_through_the_queue() {
        let mut r = runner(fast());
        r.push_input(InputEvent::Resize {
            width: 375.0,
            height: 667.0,
        });
        r.tick(FRAME);
        let header = r.header();
        assert_eq!(header[HEADER_VIEWPORT_WIDTH], 375.0);
        assert_eq!(header[HEADER_VIEWPORT_HEIGHT], 667.0);
    }

    #[test]
    fn zero_dt_still_applies_input() {
        let mut r = runner(fast());
        r.push_input(InputEvent::Resize {
            width: 10.0,
            height: 20.0,
        });
        r.tick(0.0);
        assert_eq!(r.page().particles().viewport().width, 10.0);
    }
}
