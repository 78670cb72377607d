// Host-side tests for presets, smoothing, color and picking helpers.

use glam::{Vec2, Vec3};
use sphere_core::color::hsl_to_rgb;
use sphere_core::picking::ray_sphere;
use sphere_core::smoothing::*;
use sphere_core::*;

#[test]
fn complexity_follows_viewport_and_motion_preference() {
    assert_eq!(Complexity::from_viewport(1280.0, false), Complexity::Full);
    assert_eq!(Complexity::from_viewport(768.0, false), Complexity::Full);
    assert_eq!(Complexity::from_viewport(767.0, false), Complexity::Reduced);
    assert_eq!(Complexity::from_viewport(1920.0, true), Complexity::Reduced);
}

#[test]
fn reduced_preset_is_smaller_everywhere() {
    let full = SceneConfig::for_complexity(Complexity::Full);
    let reduced = SceneConfig::for_complexity(Complexity::Reduced);
    assert!(reduced.node_count < full.node_count);
    assert!(reduced.star_count < full.star_count);
    assert!(reduced.radius < full.radius);
    assert!(reduced.connection_distance < full.connection_distance);
    assert!(full.validate().is_ok());
    assert!(reduced.validate().is_ok());
}

#[test]
fn validation_names_the_bad_field() {
    let base = SceneConfig::default();

    let mut c = base.clone();
    c.node_count = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoNodes));

    let mut c = base.clone();
    c.radius = f32::NAN;
    assert!(matches!(c.validate(), Err(ConfigError::InvalidRadius(_))));

    let mut c = base.clone();
    c.connection_distance = 0.0;
    assert_eq!(c.validate(), Err(ConfigError::InvalidConnectionDistance(0.0)));

    let mut c = base.with_seed(5);
    c.burst_particles = BURST_CAPACITY + 1;
    assert!(matches!(c.validate(), Err(ConfigError::BurstTooLarge { .. })));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(NODE_HUE_START < NODE_HUE_END);
    assert!(PULSE_LIGHTNESS_AMPLITUDE < NODE_LIGHTNESS_BASE);
    assert!(LINE_OPACITY_AMPLITUDE < LINE_OPACITY_BASE);
    assert!(REORGANIZE_FREQUENCY > PULSE_FREQUENCY);
    assert!(BURST_SPEED_MIN <= BURST_SPEED_MAX);
    assert!(BURST_PARTICLE_COUNT <= BURST_CAPACITY);
    // Star box is wider than it is deep and sits mostly behind the sphere
    assert!(2.0 * STAR_HALF_EXTENT_XY > STAR_Z_MAX - STAR_Z_MIN);
    assert!(STAR_Z_MIN.abs() > STAR_Z_MAX.abs());
    assert!(HIT_SURFACE_SCALE >= 1.0);
}

#[test]
fn damping_splits_evenly() {
    let one = damp(0.0, 1.0, 1.2, 0.5);
    let mut split = 0.0;
    for _ in 0..10 {
        split = damp(split, 1.0, 1.2, 0.05);
    }
    assert!((one - split).abs() < 1e-5);
    assert_eq!(damp(0.3, 1.0, 1.2, 0.0), 0.3);

    let v = damp_vec2(Vec2::ZERO, Vec2::ONE, 2.0, 0.25);
    assert!((v.x - damp_factor(2.0, 0.25)).abs() < 1e-6);
}

#[test]
fn half_life_halves_the_gap() {
    let rate = PARALLAX_DAMPING_PER_SEC;
    let x = damp(0.0, 1.0, rate, half_life_sec(rate));
    assert!((x - 0.5).abs() < 1e-5);
}

#[test]
fn hsl_primaries_and_greys() {
    assert!((hsl_to_rgb(0.0, 1.0, 0.5) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    assert!((hsl_to_rgb(1.0 / 3.0, 1.0, 0.5) - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    assert!((hsl_to_rgb(2.0 / 3.0, 1.0, 0.5) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    assert_eq!(hsl_to_rgb(0.4, 0.0, 0.25), Vec3::splat(0.25));
}

#[test]
fn ray_sphere_hits_and_misses() {
    let hit = ray_sphere(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 2.0);
    assert!((hit.unwrap() - 3.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::ZERO, 2.0).is_none());
    // Behind the origin
    assert!(ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 2.0).is_none());
}

#[test]
fn camera_center_ray_points_at_origin() {
    let camera = Camera::default();
    let (origin, dir) = camera.ray_from_ndc(Vec2::ZERO);
    assert_eq!(origin, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((dir - (-Vec3::Z)).length() < 1e-4);

    let (_, right) = camera.ray_from_ndc(Vec2::new(1.0, 0.0));
    assert!(right.x > 0.0);
    let (_, up) = camera.ray_from_ndc(Vec2::new(0.0, 1.0));
    assert!(up.y > 0.0);
}
