use crate::api::context::{PageConfig, PageContext};
use crate::api::types::PageEvent;
use crate::celebration::Celebration;
use crate::config::{ConfigError, SessionConfig};
use crate::core::rng::Rng;
use crate::input::queue::InputEvent;
use crate::particles::{ParticleEngine, Viewport};
use crate::session::{ChallengeRegistry, Session, Timing};
use crate::systems::surface::SurfaceFx;
use crate::systems::vector::VectorState;
use crate::terminal::{Cue, LineUpdate, Terminal};

/// The whole page: terminal, session, celebration and particles.
///
/// The host feeds input once per frame through [`Page::handle_input`] and then
/// calls [`Page::step`] for every fixed timestep. Side effects come back as
/// sound cues and page events on the [`PageContext`].
pub struct Page {
    terminal: Terminal,
    session: Session,
    timing: Timing,
    celebration: Option<Celebration>,
    celebration_runs: u32,
    particles: ParticleEngine,
    surface: SurfaceFx,
    rng: Rng,
    vectors: VectorState,
    fired: Vec<Cue>,
}

impl Page {
    /// Validate `config` and build a page that starts at the intro.
    pub fn new(config: &SessionConfig, page: &PageConfig, seed: u64) -> Result<Self, ConfigError> {
        let registry = ChallengeRegistry::from_config(config)?;
        let timing = Timing::new(config.typing_interval(), config.line_delay_secs());
        log::info!(
            "Page ready: {} challenges, {}ms per character, seed {}",
            registry.len(),
            config.typing_speed,
            seed
        );

        Ok(Self {
            terminal: Terminal::new(),
            session: Session::new(registry, timing),
            timing,
            celebration: None,
            celebration_runs: 0,
            particles: ParticleEngine::new(Viewport::new(page.viewport_width, page.viewport_height)),
            surface: SurfaceFx::new(),
            rng: Rng::new(seed),
            vectors: VectorState::with_capacity(page.max_vector_vertices),
            fired: Vec::with_capacity(16),
        })
    }

    /// Apply this frame's input. Submissions outside `AwaitingInput` are dropped.
    pub fn handle_input(&mut self, events: Vec<InputEvent>, ctx: &mut PageContext) {
        for event in events {
            match event {
                InputEvent::Submit { text } => {
                    self.session.submit(&text, &mut self.terminal, &mut self.fired);
                }
                InputEvent::Resize { width, height } => {
                    log::debug!("Viewport resized to {}x{}", width, height);
                    self.particles.resize(Viewport::new(width, height));
                }
            }
        }
        self.flush_cues(ctx);
    }

    /// One fixed timestep.
    pub fn step(&mut self, dt: f32, ctx: &mut PageContext) {
        let completed = self.session.advance(dt, &mut self.terminal, &mut self.fired);
        self.flush_cues(ctx);

        if completed && self.celebration.is_none() {
            log::info!("All challenges passed, starting celebration");
            self.celebration = Some(Celebration::new(self.timing));
            self.celebration_runs += 1;
        }

        if let Some(celebration) = self.celebration.as_mut() {
            if !celebration.is_finished() {
                celebration.advance(dt, &mut self.terminal, &mut self.fired);
                self.flush_cues(ctx);
            }
        }

        self.surface.tick(dt, &mut self.rng);
        self.particles.frame(&mut self.rng, &mut self.vectors);
    }

    fn flush_cues(&mut self, ctx: &mut PageContext) {
        let mut fired = std::mem::take(&mut self.fired);
        for cue in fired.drain(..) {
            self.apply_cue(cue, ctx);
        }
        self.fired = fired;
    }

    fn apply_cue(&mut self, cue: Cue, ctx: &mut PageContext) {
        match cue {
            Cue::Sound(sound) => ctx.emit_sound(sound),
            Cue::OpenInput => ctx.emit_event(PageEvent::new(PageEvent::INPUT_OPENED)),
            Cue::CloseInput => ctx.emit_event(PageEvent::new(PageEvent::INPUT_CLOSED)),
            Cue::GlitchStart => {
                self.surface.start_glitch();
                ctx.emit_event(PageEvent::new(PageEvent::GLITCH_STARTED));
            }
            Cue::GlitchEnd => {
                self.surface.end_glitch();
                ctx.emit_event(PageEvent::new(PageEvent::GLITCH_ENDED));
            }
            Cue::FadeOut(duration) => {
                self.surface.start_fade(duration);
                ctx.emit_event(PageEvent::with_payload(PageEvent::FADE_STARTED, duration, 0.0, 0.0));
            }
            Cue::HideTerminal => {
                self.surface.hide_terminal();
                ctx.emit_event(PageEvent::new(PageEvent::TERMINAL_HIDDEN));
            }
            Cue::StartParticles => {
                self.surface.show_canvas();
                self.particles.start();
                let viewport = self.particles.viewport();
                ctx.emit_event(PageEvent::with_payload(
                    PageEvent::CANVAS_SHOWN,
                    viewport.width,
                    viewport.height,
                    0.0,
                ));
            }
            Cue::RevealFinalMessage => {
                log::info!("Final message revealed");
                self.surface.reveal_final_message();
                ctx.emit_event(PageEvent::new(PageEvent::FINAL_MESSAGE_SHOWN));
            }
        }
    }

    /// Lines changed since the last call.
    pub fn take_terminal_updates(&mut self) -> Vec<LineUpdate> {
        self.terminal.take_updates()
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the answer field should accept typing.
    pub fn input_open(&self) -> bool {
        self.session.state().awaiting_input
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// How many times the celebration has been started. At most one.
    pub fn celebration_runs(&self) -> u32 {
        self.celebration_runs
    }

    pub fn particles(&self) -> &ParticleEngine {
        &self.particles
    }

    pub fn surface(&self) -> &SurfaceFx {
        &self.surface
    }

    pub fn vectors(&self) -> &VectorState {
        &self.vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SoundEvent;
    use crate::session::Phase;

    const DT: f32 = 1.0 / 60.0;
    const ANSWERS: [&str; 4] = ["bottled", "blue", "24/05", "20"];

    fn fast_config() -> SessionConfig {
        SessionConfig {
            typing_speed: 1,
            line_delay: 10,
            ..SessionConfig::default()
        }
    }

    /// Drives a page frame by frame and records everything it emits.
    struct Harness {
        page: Page,
        ctx: PageContext,
        events: Vec<PageEvent>,
        sounds: Vec<SoundEvent>,
    }

    impl Harness {
        fn new(config: SessionConfig) -> Self {
            let ctx = PageContext::new(config.sound_enabled).with_typing_sound(config.typing_sound);
            let page = Page::new(&config, &PageConfig::default(), 7).unwrap();
            Self {
                page,
                ctx,
                events: Vec::new(),
                sounds: Vec::new(),
            }
        }

        fn frame(&mut self, input: Vec<InputEvent>) {
            self.ctx.clear_frame_data();
            self.page.handle_input(input, &mut self.ctx);
            self.page.step(DT, &mut self.ctx);
            self.events.extend(self.ctx.events.iter().copied());
            self.sounds.extend(self.ctx.sounds.iter().copied());
        }

        fn until(&mut self, done: impl Fn(&Page) -> bool) {
            for _ in 0..20_000 {
                if done(&self.page) {
                    return;
                }
                self.frame(Vec::new());
            }
            panic!("page never reached the expected state");
        }

        fn answer(&mut self, text: &str) {
            self.until(|p| p.input_open());
            self.frame(vec![InputEvent::Submit { text: text.to_string() }]);
        }

        fn kinds(&self) -> Vec<f32> {
            self.events.iter().map(|e| e.kind).collect()
        }

        fn count(&self, kind: f32) -> usize {
            self.events.iter().filter(|e| e.kind == kind).count()
        }
    }

    #[test]
    fn invalid_config_never_builds_a_page() {
        let config = SessionConfig {
            questions: Vec::new(),
            ..SessionConfig::default()
        };
        let err = Page::new(&config, &PageConfig::default(), 1).err();
        assert!(matches!(err, Some(ConfigError::NoChallenges)));
    }

    #[test]
    fn intro_then_first_challenge_opens_input() {
        let mut h = Harness::new(fast_config());
        h.until(|p| p.input_open());
        let texts = h.page.terminal().texts();
        assert_eq!(texts[0], "INITIALIZING HEART ACCESS TERMINAL...");
        assert!(texts.contains(&"To access this heart, you must pass 4 security challenges."));
        assert!(texts.contains(&"[Challenge 1: Connection Origin Verification]"));
        assert_eq!(*texts.last().unwrap(), "> Enter the exact location where we first met:");
        assert_eq!(h.kinds(), vec![PageEvent::INPUT_OPENED]);
    }

    #[test]
    fn early_submission_is_ignored() {
        let mut h = Harness::new(fast_config());
        h.frame(vec![InputEvent::Submit { text: "bottled".into() }]);
        assert!(!h.page.terminal().texts().contains(&"> bottled"));
        assert_eq!(h.page.session().state().current, 0);
        assert!(h.events.is_empty());
    }

    #[test]
    fn full_run_celebrates_exactly_once() {
        let mut h = Harness::new(fast_config());
        for answer in ANSWERS {
            h.answer(answer);
        }
        h.until(|p| p.surface().final_message_visible());

        assert_eq!(h.page.session().phase(), Phase::Complete);
        assert_eq!(h.page.celebration_runs(), 1);
        assert!(h.page.particles().is_running());
        assert!(!h.page.surface().terminal_visible());
        assert!(h.page.surface().canvas_visible());
        assert_eq!(h.page.surface().terminal_opacity(), 0.0);

        assert_eq!(h.count(PageEvent::INPUT_OPENED), 4);
        assert_eq!(h.count(PageEvent::INPUT_CLOSED), 4);
        let tail: Vec<f32> = h
            .kinds()
            .into_iter()
            .filter(|k| *k != PageEvent::INPUT_OPENED && *k != PageEvent::INPUT_CLOSED)
            .collect();
        assert_eq!(
            tail,
            vec![
                PageEvent::GLITCH_STARTED,
                PageEvent::GLITCH_ENDED,
                PageEvent::FADE_STARTED,
                PageEvent::TERMINAL_HIDDEN,
                PageEvent::CANVAS_SHOWN,
                PageEvent::FINAL_MESSAGE_SHOWN,
            ]
        );
        let canvas = h
            .events
            .iter()
            .find(|e| e.kind == PageEvent::CANVAS_SHOWN)
            .copied()
            .unwrap();
        assert_eq!((canvas.a, canvas.b), (800.0, 600.0));

        assert_eq!(
            h.sounds,
            vec![
                SoundEvent::SUCCESS,
                SoundEvent::SUCCESS,
                SoundEvent::SUCCESS,
                SoundEvent::SUCCESS,
                SoundEvent::CELEBRATION,
            ]
        );

        for _ in 0..600 {
            h.frame(Vec::new());
        }
        assert_eq!(h.page.celebration_runs(), 1);
        assert_eq!(h.count(PageEvent::FINAL_MESSAGE_SHOWN), 1);
        assert!(h.page.particles().heart_count() > 0);
        assert!(h.page.vectors().vertex_count() > 0);
    }

    #[test]
    fn wrong_answer_retries_the_same_challenge() {
        let mut h = Harness::new(fast_config());
        h.answer("Paris");
        h.until(|p| p.input_open());

        let texts = h.page.terminal().texts();
        assert!(texts.contains(&"> Paris"));
        assert!(texts.contains(&"Access Denied. Invalid origin key."));
        assert!(texts.contains(&"Please try again."));
        assert_eq!(h.page.session().state().current, 0);
        assert_eq!(h.sounds, vec![SoundEvent::ERROR]);

        h.answer("  BOTTLED ");
        h.until(|p| p.input_open());
        assert_eq!(h.page.session().state().current, 1);
        assert_eq!(h.page.session().wrong_answers(), 1);
    }

    #[test]
    fn silent_when_sound_disabled() {
        let mut h = Harness::new(SessionConfig {
            sound_enabled: false,
            ..fast_config()
        });
        h.answer("nope");
        for answer in ANSWERS {
            h.answer(answer);
        }
        h.until(|p| p.surface().final_message_visible());
        assert!(h.sounds.is_empty());
        assert_eq!(h.count(PageEvent::FINAL_MESSAGE_SHOWN), 1);
    }

    #[test]
    fn typing_cues_only_when_opted_in() {
        let mut h = Harness::new(SessionConfig {
            typing_sound: true,
            ..fast_config()
        });
        h.until(|p| p.input_open());
        assert!(h.sounds.iter().all(|s| *s == SoundEvent::TYPING));
        assert!(!h.sounds.is_empty());

        let mut quiet = Harness::new(fast_config());
        quiet.until(|p| p.input_open());
        assert!(quiet.sounds.is_empty());
    }

    #[test]
    fn resize_before_celebration_sizes_the_canvas() {
        let mut h = Harness::new(fast_config());
        h.frame(vec![InputEvent::Resize {
            width: 1024.0,
            height: 768.0,
        }]);
        for answer in ANSWERS {
            h.answer(answer);
        }
        h.until(|p| p.particles().is_running());
        let canvas = h
            .events
            .iter()
            .find(|e| e.kind == PageEvent::CANVAS_SHOWN)
            .copied()
            .unwrap();
        assert_eq!((canvas.a, canvas.b), (1024.0, 768.0));
    }

    #[test]
    fn terminal_updates_drain() {
        let mut h = Harness::new(fast_config());
        h.until(|p| p.input_open());
        let updates = h.page.take_terminal_updates();
        assert!(!updates.is_empty());
        assert!(h.page.take_terminal_updates().is_empty());
    }
}
