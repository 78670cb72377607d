//! Fibonacci-sphere lattice and the node set built on it.
//!
//! Points are placed with a closed-form golden-ratio spiral, so the layout is
//! deterministic for a given count and radius and needs no relaxation pass.

use crate::color::hsl_to_rgb;
use crate::constants::*;
use glam::Vec3;
use std::f32::consts::TAU;

/// (1 + √5) / 2
pub const GOLDEN_RATIO: f32 = 1.618_034;

/// Place `n` points approximately evenly on a sphere of `radius` around the origin.
pub fn fibonacci_sphere(n: usize, radius: f32) -> Vec<Vec3> {
    let count = n as f32;
    (0..n)
        .map(|i| {
            let fi = i as f32;
            let theta = (1.0 - 2.0 * (fi + 0.5) / count).clamp(-1.0, 1.0).acos();
            let phi = TAU * fi / GOLDEN_RATIO;
            let (sin_t, cos_t) = theta.sin_cos();
            let (sin_p, cos_p) = phi.sin_cos();
            Vec3::new(sin_t * cos_p, sin_t * sin_p, cos_t) * radius
        })
        .collect()
}

/// Hue for node `i` of `n`, interpolated across the node hue range.
#[inline]
pub fn node_hue(i: usize, n: usize) -> f32 {
    let t = if n == 0 { 0.0 } else { i as f32 / n as f32 };
    NODE_HUE_START + (NODE_HUE_END - NODE_HUE_START) * t
}

/// Static per-node data fixed at generation.
#[derive(Clone, Debug)]
pub struct Node {
    pub base_position: Vec3,
    pub hue: f32,
    pub phase: f32,
}

/// Per-frame node appearance written by the scene update.
#[derive(Clone, Copy, Debug)]
pub struct NodeVisual {
    pub lightness: f32,
    pub color: Vec3,
    pub size: f32,
}

pub fn build_nodes(n: usize, radius: f32) -> Vec<Node> {
    fibonacci_sphere(n, radius)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Node {
            base_position: p,
            hue: node_hue(i, n),
            phase: i as f32 * PULSE_PHASE_STEP,
        })
        .collect()
}

impl Node {
    pub fn resting_visual(&self) -> NodeVisual {
        NodeVisual {
            lightness: NODE_LIGHTNESS_BASE,
            color: hsl_to_rgb(self.hue, NODE_SATURATION, NODE_LIGHTNESS_BASE),
            size: NODE_SIZE_BASE,
        }
    }

    /// Appearance at animation time `t`. `disturbance` is the reorganize
    /// envelope in 0..1 (0 when idle).
    pub fn visual_at(&self, t: f32, disturbance: f32) -> NodeVisual {
        let wave = (t * PULSE_FREQUENCY + self.phase).sin();
        let mut lightness = NODE_LIGHTNESS_BASE + PULSE_LIGHTNESS_AMPLITUDE * wave;
        let mut size = NODE_SIZE_BASE * (1.0 + PULSE_SIZE_AMPLITUDE * wave);
        if disturbance > 0.0 {
            let jitter = (t * REORGANIZE_FREQUENCY + self.phase * 2.0).sin() * disturbance;
            lightness += REORGANIZE_LIGHTNESS_AMPLITUDE * jitter;
            size += NODE_SIZE_BASE * REORGANIZE_SIZE_AMPLITUDE * jitter.abs();
        }
        let lightness = lightness.clamp(0.0, 1.0);
        NodeVisual {
            lightness,
            color: hsl_to_rgb(self.hue, NODE_SATURATION, lightness),
            size: size.max(0.0),
        }
    }
}
