// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-6
}

#[test]
fn css_to_ndc_maps_corners_and_center() {
    assert!(approx(css_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0)));
    assert!(approx(css_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0)));
    assert!(approx(css_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO));
}

#[test]
fn css_to_ndc_y_axis_points_up() {
    let top = css_to_ndc(400.0, 100.0, 800.0, 600.0);
    let bottom = css_to_ndc(400.0, 500.0, 800.0, 600.0);
    assert!(top.y > 0.0);
    assert!(bottom.y < 0.0);
}

#[test]
fn css_to_ndc_clamps_outside_rect() {
    // Pointer events arrive from the whole window, not just the canvas
    let p = css_to_ndc(-250.0, 9000.0, 800.0, 600.0);
    assert!(approx(p, Vec2::new(-1.0, -1.0)));
    let q = css_to_ndc(1600.0, -40.0, 800.0, 600.0);
    assert!(approx(q, Vec2::new(1.0, 1.0)));
}

#[test]
fn css_to_ndc_degenerate_rect_is_center() {
    assert_eq!(css_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(css_to_ndc(10.0, 10.0, 800.0, 0.0), Vec2::ZERO);
    assert_eq!(css_to_ndc(10.0, 10.0, f32::NAN, 600.0), Vec2::ZERO);
}

#[test]
fn device_pixel_ratio_is_clamped() {
    assert_eq!(clamp_device_pixel_ratio(0.5, 1.0, 2.0), 1.0);
    assert_eq!(clamp_device_pixel_ratio(1.5, 1.0, 2.0), 1.5);
    assert_eq!(clamp_device_pixel_ratio(3.0, 1.0, 2.0), 2.0);
    assert_eq!(clamp_device_pixel_ratio(f64::NAN, 1.0, 2.0), 1.0);
    assert_eq!(clamp_device_pixel_ratio(f64::INFINITY, 1.0, 2.0), 1.0);
}

#[test]
fn backing_size_scales_and_never_collapses() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(333.3, 100.0, 1.5), (500, 150));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
}

#[test]
fn pointer_state_queues_presses_until_taken() {
    let mut p = PointerState::default();
    p.record_move(Vec2::new(0.2, -0.4));
    assert!(p.presses.is_empty());

    p.record_press(Vec2::new(0.1, 0.1));
    p.record_press(Vec2::new(-0.5, 0.3));
    assert_eq!(p.ndc, Vec2::new(-0.5, 0.3));

    let presses = p.take_presses();
    assert_eq!(presses, vec![Vec2::new(0.1, 0.1), Vec2::new(-0.5, 0.3)]);
    assert!(p.take_presses().is_empty());
    // Position survives draining the queue
    assert_eq!(p.ndc, Vec2::new(-0.5, 0.3));
}
