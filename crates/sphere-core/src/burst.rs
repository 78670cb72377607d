use crate::constants::{BURST_CAPACITY, BURST_DECAY_PER_SEC, BURST_SPEED_MAX, BURST_SPEED_MIN};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default)]
pub struct BurstParticle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Fixed pool of particles sharing one fading alpha.
///
/// The pool is allocated once; a finished burst just sits at alpha 0 until
/// the next trigger reseeds it.
pub struct Burst {
    particles: SmallVec<[BurstParticle; BURST_CAPACITY]>,
    alpha: f32,
    decay_per_sec: f32,
    rng: StdRng,
}

impl Burst {
    pub fn new(count: usize, seed: u64) -> Self {
        Self::with_decay(count, seed, BURST_DECAY_PER_SEC)
    }

    pub fn with_decay(count: usize, seed: u64, decay_per_sec: f32) -> Self {
        let mut particles = SmallVec::new();
        particles.resize(count.min(BURST_CAPACITY), BurstParticle::default());
        Self {
            particles,
            alpha: 0.0,
            decay_per_sec,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reset every particle to the origin with a fresh random outward velocity.
    pub fn trigger(&mut self) {
        for p in self.particles.iter_mut() {
            let dir = random_unit_vector(&mut self.rng);
            let speed = self.rng.gen_range(BURST_SPEED_MIN..=BURST_SPEED_MAX);
            p.position = Vec3::ZERO;
            p.velocity = dir * speed;
        }
        self.alpha = 1.0;
    }

    pub fn step(&mut self, dt_sec: f32) {
        if self.alpha <= 0.0 {
            return;
        }
        let dt = dt_sec.max(0.0);
        self.alpha = (self.alpha - self.decay_per_sec * dt).max(0.0);
        for p in self.particles.iter_mut() {
            p.position += p.velocity * dt;
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }
}

fn random_unit_vector(rng: &mut StdRng) -> Vec3 {
    // Uniform on the sphere: z uniform in [-1, 1], azimuth uniform
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let az: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * az.cos(), r * az.sin(), z)
}
