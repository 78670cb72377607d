//! Background star field.
//!
//! Base positions are generated once and never written again. Twinkle is a
//! separate per-star Y offset recomputed each frame from the animation clock,
//! so it does not accumulate into the stored positions.

use crate::color::lerp_rgb;
use crate::constants::*;
use crate::smoothing::damp_vec2;
use glam::{Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub base_position: Vec3,
    pub color: Vec3,
}

pub struct StarField {
    stars: Vec<Star>,
    twinkle: Vec<f32>,
    drift: Vec2,
    tilt: Vec2,
}

impl StarField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| {
                let x = rng.gen_range(-STAR_HALF_EXTENT_XY..STAR_HALF_EXTENT_XY);
                let y = rng.gen_range(-STAR_HALF_EXTENT_XY..STAR_HALF_EXTENT_XY);
                let z = rng.gen_range(STAR_Z_MIN..STAR_Z_MAX);
                let t: f32 = rng.gen();
                Star {
                    base_position: Vec3::new(x, y, z),
                    color: lerp_rgb(STAR_COLOR_A, STAR_COLOR_B, t),
                }
            })
            .collect();
        Self {
            stars,
            twinkle: vec![0.0; count],
            drift: Vec2::ZERO,
            tilt: Vec2::ZERO,
        }
    }

    /// Advance drift, pointer tilt and twinkle offsets.
    pub fn update(&mut self, dt_sec: f32, elapsed_sec: f32, pointer: Vec2) {
        self.drift.x += STAR_DRIFT_RATE_X * dt_sec;
        self.drift.y += STAR_DRIFT_RATE_Y * dt_sec;
        let target = Vec2::new(-pointer.y, pointer.x) * STAR_POINTER_TILT;
        self.tilt = damp_vec2(self.tilt, target, STAR_DAMPING_PER_SEC, dt_sec);
        for (i, (star, offset)) in self.stars.iter().zip(self.twinkle.iter_mut()).enumerate() {
            let phase = star.base_position.z * 0.5 + i as f32 * 0.1;
            *offset = (elapsed_sec * STAR_TWINKLE_FREQUENCY + phase).sin() * STAR_TWINKLE_AMPLITUDE;
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn twinkle_offsets(&self) -> &[f32] {
        &self.twinkle
    }

    /// Base position plus the current twinkle offset.
    pub fn display_position(&self, index: usize) -> Option<Vec3> {
        let star = self.stars.get(index)?;
        let dy = self.twinkle.get(index).copied().unwrap_or(0.0);
        Some(star.base_position + Vec3::new(0.0, dy, 0.0))
    }

    /// Field rotation (x, y) in radians: constant drift plus smoothed pointer tilt.
    pub fn rotation(&self) -> Vec2 {
        self.drift + self.tilt
    }
}
