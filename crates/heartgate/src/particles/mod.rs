//! Celebration particles: fireworks, rising hearts and falling flowers.
//!
//! All constants are per frame, where one frame is one fixed timestep.

mod engine;
mod firework;
mod flower;
mod heart;

pub use engine::{ParticleEngine, FIREWORK_CHANCE, FLOWER_CHANCE, HEART_CHANCE, MAX_FIREWORKS};
pub use firework::{Firework, Spark, SPARK_COUNT};
pub use flower::{Flower, PETAL_COUNT};
pub use heart::Heart;

use crate::core::rng::Rng;
use crate::systems::vector::VectorState;

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// What every particle kind can do each frame.
pub trait Particle {
    /// Advance one frame of physics.
    fn update(&mut self, viewport: &Viewport, rng: &mut Rng);

    /// Tessellate the particle at its current state.
    fn draw(&self, vectors: &mut VectorState);

    /// True once the particle has nothing left to show. Never reverts.
    fn is_done(&self) -> bool;
}

/// Update, draw and prune one population. Walks backwards so removing an
/// element never skips or repeats a neighbour; `remove` keeps spawn order.
pub fn run_population<P: Particle>(
    population: &mut Vec<P>,
    viewport: &Viewport,
    rng: &mut Rng,
    vectors: &mut VectorState,
) {
    for i in (0..population.len()).rev() {
        let particle = &mut population[i];
        particle.update(viewport, rng);
        particle.draw(vectors);
        if particle.is_done() {
            population.remove(i);
        }
    }
}
