use std::f32::consts::TAU;

use glam::{Affine2, Vec2};
use lyon::math::point;
use lyon::path::Path;

use super::{Particle, Viewport};
use crate::core::rng::Rng;
use crate::systems::vector::{VectorColor, VectorState};

const FADE: f32 = 0.003;
/// Hearts above this line are gone for good.
const EXIT_Y: f32 = -50.0;
const SPAWN_BELOW: f32 = 20.0;
const RED: u32 = 0xff1744;
const PINK: u32 = 0xff69b4;

/// A heart drifting up from below the bottom edge.
#[derive(Debug, Clone)]
pub struct Heart {
    pos: Vec2,
    vel: Vec2,
    size: f32,
    alpha: f32,
    rotation: f32,
    spin: f32,
    color: VectorColor,
}

impl Heart {
    pub fn spawn(viewport: &Viewport, rng: &mut Rng) -> Self {
        let x = rng.next_f32() * viewport.width;
        let size = rng.range(10.0, 30.0);
        let vy = rng.range(-1.0, -3.0);
        let vx = (rng.next_f32() - 0.5) * 2.0;
        let alpha = rng.range(0.6, 1.0);
        let rotation = rng.next_f32() * TAU;
        let spin = (rng.next_f32() - 0.5) * 0.05;
        let color = VectorColor::hex(rng.either(RED, PINK));
        Self {
            pos: Vec2::new(x, viewport.height + SPAWN_BELOW),
            vel: Vec2::new(vx, vy),
            size,
            alpha,
            rotation,
            spin,
            color,
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

    /// Outline in world space: four cubic curves around a local origin at
    /// the notch, rotated and moved to the heart's position.
    fn outline(&self) -> Path {
        let s = self.size;
        let xf = Affine2::from_angle_translation(self.rotation, self.pos);
        let p = |x: f32, y: f32| {
            let v = xf.transform_point2(Vec2::new(x, y));
            point(v.x, v.y)
        };

        let mut builder = Path::builder();
        builder.begin(p(0.0, s / 4.0));
        builder.cubic_bezier_to(p(0.0, 0.0), p(-s / 2.0, -s / 2.0), p(-s / 2.0, s / 4.0));
        builder.cubic_bezier_to(p(-s / 2.0, s / 2.0), p(0.0, s), p(0.0, s));
        builder.cubic_bezier_to(p(0.0, s), p(s / 2.0, s / 2.0), p(s / 2.0, s / 4.0));
        builder.cubic_bezier_to(p(s / 2.0, -s / 2.0), p(0.0, 0.0), p(0.0, s / 4.0));
        builder.end(true);
        builder.build()
    }
}

impl Particle for Heart {
    fn update(&mut self, _viewport: &Viewport, _rng: &mut Rng) {
        self.pos += self.vel;
        self.rotation += self.spin;
        self.alpha -= FADE;
    }

    fn draw(&self, vectors: &mut VectorState) {
        if self.alpha <= 0.0 {
            return;
        }
        vectors.fill_path(&self.outline(), self.color.with_alpha(self.alpha));
    }

    fn is_done(&self) -> bool {
        self.alpha <= 0.0 || self.pos.y < EXIT_Y
    }
}
