//! Frame-rate independent exponential smoothing.
//!
//! `rate` is in 1/seconds; the remaining distance to the target shrinks by
//! `exp(-rate * dt)` per step, so N steps of `dt / N` land where one step of
//! `dt` does.

use glam::{Vec2, Vec3};

#[inline]
pub fn damp_factor(rate_per_sec: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate_per_sec * dt_sec.max(0.0)).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, rate_per_sec: f32, dt_sec: f32) -> f32 {
    current + (target - current) * damp_factor(rate_per_sec, dt_sec)
}

#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, rate_per_sec: f32, dt_sec: f32) -> Vec2 {
    current.lerp(target, damp_factor(rate_per_sec, dt_sec))
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate_per_sec: f32, dt_sec: f32) -> Vec3 {
    current.lerp(target, damp_factor(rate_per_sec, dt_sec))
}

/// Time for the remaining distance to halve at `rate_per_sec`.
#[inline]
pub fn half_life_sec(rate_per_sec: f32) -> f32 {
    std::f32::consts::LN_2 / rate_per_sec
}
