use std::f32::consts::TAU;

use glam::Vec2;

use super::{Particle, Viewport};
use crate::core::rng::Rng;
use crate::systems::vector::{VectorColor, VectorState};

pub const PETAL_COUNT: usize = 6;

const SPAWN_Y: f32 = -50.0;
/// Flowers start fading once this far below the bottom edge.
const FADE_MARGIN: f32 = 50.0;
const FADE: f32 = 0.02;
const CENTER: u32 = 0xffeb3b;

/// A six-petal flower falling from above the top edge.
#[derive(Debug, Clone)]
pub struct Flower {
    pos: Vec2,
    vel: Vec2,
    size: f32,
    rotation: f32,
    spin: f32,
    alpha: f32,
    petal: VectorColor,
}

impl Flower {
    pub fn spawn(viewport: &Viewport, rng: &mut Rng) -> Self {
        let x = rng.next_f32() * viewport.width;
        let size = rng.range(15.0, 40.0);
        let vy = rng.range(0.5, 2.0);
        let vx = rng.next_f32() - 0.5;
        let rotation = rng.next_f32() * TAU;
        let spin = (rng.next_f32() - 0.5) * 0.1;
        let alpha = rng.range(0.7, 1.0);
        let petal = VectorColor::hsl(rng.range(300.0, 360.0), 1.0, 0.7);
        Self {
            pos: Vec2::new(x, SPAWN_Y),
            vel: Vec2::new(vx, vy),
            size,
            rotation,
            spin,
            alpha,
            petal,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Particle for Flower {
    fn update(&mut self, viewport: &Viewport, _rng: &mut Rng) {
        self.pos += self.vel;
        self.rotation += self.spin;
        if self.pos.y > viewport.height + FADE_MARGIN {
            self.alpha -= FADE;
        }
    }

    fn draw(&self, vectors: &mut VectorState) {
        if self.alpha <= 0.0 {
            return;
        }
        let petal = self.petal.with_alpha(self.alpha);
        let radii = Vec2::new(self.size / 3.0, self.size / 2.0);
        for i in 0..PETAL_COUNT {
            let angle = self.rotation + TAU * i as f32 / PETAL_COUNT as f32;
            let offset = Vec2::from_angle(angle).rotate(Vec2::new(0.0, -self.size / 2.0));
            vectors.fill_ellipse(self.pos + offset, radii, angle, petal);
        }
        vectors.fill_circle(
            self.pos,
            self.size / 4.0,
            VectorColor::hex(CENTER).with_alpha(self.alpha),
        );
    }

    fn is_done(&self) -> bool {
        self.alpha <= 0.0
    }
}
