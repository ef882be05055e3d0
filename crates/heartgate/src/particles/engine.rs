use glam::Vec2;

use super::{run_population, Firework, Flower, Heart, Viewport};
use crate::core::rng::Rng;
use crate::systems::vector::VectorState;

/// Per-frame spawn probabilities.
pub const FIREWORK_CHANCE: f32 = 0.05;
pub const HEART_CHANCE: f32 = 0.15;
pub const FLOWER_CHANCE: f32 = 0.05;

/// Upper bound on live fireworks. Hearts and flowers are unbounded.
pub const MAX_FIREWORKS: usize = 5;

/// Owns the three particle populations and runs them one frame at a time.
pub struct ParticleEngine {
    viewport: Viewport,
    fireworks: Vec<Firework>,
    hearts: Vec<Heart>,
    flowers: Vec<Flower>,
    running: bool,
}

impl ParticleEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fireworks: Vec::new(),
            hearts: Vec::new(),
            flowers: Vec::new(),
            running: false,
        }
    }

    /// Start spawning. Runs until the page goes away.
    pub fn start(&mut self) {
        if !self.running {
            log::info!(
                "Particles started at {}x{}",
                self.viewport.width,
                self.viewport.height
            );
        }
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new surface size. Live particles keep their state.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// One animation frame: clear the surface, roll spawns, then update,
    /// draw and prune fireworks, hearts and flowers in that order.
    pub fn frame(&mut self, rng: &mut Rng, vectors: &mut VectorState) {
        if !self.running {
            return;
        }
        vectors.clear();
        self.spawn(rng);

        run_population(&mut self.fireworks, &self.viewport, rng, vectors);
        run_population(&mut self.hearts, &self.viewport, rng, vectors);
        run_population(&mut self.flowers, &self.viewport, rng, vectors);
    }

    fn spawn(&mut self, rng: &mut Rng) {
        if rng.chance(FIREWORK_CHANCE) && self.fireworks.len() < MAX_FIREWORKS {
            let origin = Vec2::new(rng.next_f32() * self.viewport.width, self.viewport.height);
            self.fireworks.push(Firework::launch(origin, rng));
        }
        if rng.chance(HEART_CHANCE) {
            self.hearts.push(Heart::spawn(&self.viewport, rng));
        }
        if rng.chance(FLOWER_CHANCE) {
            self.flowers.push(Flower::spawn(&self.viewport, rng));
        }
    }

    pub fn firework_count(&self) -> usize {
        self.fireworks.len()
    }

    pub fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    pub fn flower_count(&self) -> usize {
        self.flowers.len()
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }
}
