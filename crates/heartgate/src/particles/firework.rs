use std::f32::consts::TAU;

use glam::Vec2;

use super::{Particle, Viewport};
use crate::core::rng::Rng;
use crate::systems::vector::{VectorColor, VectorState};

/// Sparks released by every explosion.
pub const SPARK_COUNT: usize = 50;

const ROCKET_GRAVITY: f32 = 0.2;
const SPARK_GRAVITY: f32 = 0.1;
const SPARK_FADE: f32 = 0.01;
const ROCKET_RADIUS: f32 = 3.0;
const SPARK_RADIUS: f32 = 2.0;

/// One fragment of an exploded firework.
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
}

/// A rocket that climbs until it stalls, then bursts into sparks.
#[derive(Debug, Clone)]
pub struct Firework {
    pos: Vec2,
    vy: f32,
    color: VectorColor,
    exploded: bool,
    sparks: Vec<Spark>,
}

impl Firework {
    /// Launch from `pos` with a random upward speed and hue.
    pub fn launch(pos: Vec2, rng: &mut Rng) -> Self {
        Self {
            pos,
            vy: rng.range(-8.0, -12.0),
            color: VectorColor::hsl(rng.range(0.0, 360.0), 1.0, 0.6),
            exploded: false,
            sparks: Vec::new(),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    fn explode(&mut self, rng: &mut Rng) {
        self.exploded = true;
        self.sparks = (0..SPARK_COUNT)
            .map(|i| {
                let angle = TAU * i as f32 / SPARK_COUNT as f32;
                let speed = rng.range(2.0, 5.0);
                Spark {
                    pos: self.pos,
                    vel: Vec2::from_angle(angle) * speed,
                    alpha: 1.0,
                }
            })
            .collect();
    }
}

impl Particle for Firework {
    fn update(&mut self, _viewport: &Viewport, rng: &mut Rng) {
        if !self.exploded {
            self.pos.y += self.vy;
            self.vy += ROCKET_GRAVITY;
            if self.vy >= 0.0 {
                self.explode(rng);
            }
            return;
        }
        for spark in &mut self.sparks {
            spark.pos += spark.vel;
            spark.vel.y += SPARK_GRAVITY;
            spark.alpha -= SPARK_FADE;
        }
    }

    fn draw(&self, vectors: &mut VectorState) {
        if !self.exploded {
            vectors.fill_circle(self.pos, ROCKET_RADIUS, self.color);
            return;
        }
        for spark in self.sparks.iter().filter(|s| s.alpha > 0.0) {
            vectors.fill_circle(spark.pos, SPARK_RADIUS, self.color.with_alpha(spark.alpha));
        }
    }

    fn is_done(&self) -> bool {
        self.exploded && self.sparks.iter().all(|s| s.alpha <= 0.0)
    }
}
