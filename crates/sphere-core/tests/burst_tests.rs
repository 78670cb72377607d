// Host-side tests for burst particles and the reorganize timer.

use instant::Instant;
use sphere_core::burst::Burst;
use sphere_core::interaction::{Interaction, InteractionMode};
use std::time::Duration;

#[test]
fn fresh_burst_is_invisible() {
    let burst = Burst::new(30, 7);
    assert_eq!(burst.alpha(), 0.0);
    assert!(!burst.is_visible());
    assert_eq!(burst.particles().len(), 30);
}

#[test]
fn trigger_resets_alpha_and_seeds_from_origin() {
    let mut burst = Burst::new(30, 7);
    burst.trigger();
    assert_eq!(burst.alpha(), 1.0);
    for p in burst.particles() {
        assert_eq!(p.position, glam::Vec3::ZERO);
        let speed = p.velocity.length();
        assert!((1.0 - 1e-4..=3.0 + 1e-4).contains(&speed), "speed {speed}");
    }
}

#[test]
fn alpha_reaches_zero_by_two_thirds_of_a_second() {
    let mut burst = Burst::with_decay(30, 1, 1.5);
    burst.trigger();
    let dt = 1.0 / 60.0;
    let mut t = 0.0f32;
    let mut prev = burst.alpha();
    assert_eq!(prev, 1.0);
    while t < 0.667 {
        burst.step(dt);
        t += dt;
        assert!(burst.alpha() <= prev, "alpha rose at t={t}");
        assert!(burst.alpha() >= 0.0);
        prev = burst.alpha();
    }
    assert_eq!(burst.alpha(), 0.0);
}

#[test]
fn alpha_hits_zero_within_bounded_steps() {
    for dt in [0.005f32, 0.01, 1.0 / 60.0, 1.0 / 30.0, 0.1] {
        let mut burst = Burst::with_decay(4, 3, 1.5);
        burst.trigger();
        let bound = (1.0 / (1.5 * dt)).ceil() as usize + 1;
        for _ in 0..bound {
            burst.step(dt);
        }
        assert_eq!(burst.alpha(), 0.0, "dt={dt}");
    }
}

#[test]
fn particles_move_along_velocity_then_freeze_when_faded() {
    let mut burst = Burst::new(8, 11);
    burst.trigger();
    let v0 = burst.particles()[0].velocity;
    burst.step(0.1);
    let p1 = burst.particles()[0].position;
    assert!((p1 - v0 * 0.1).length() < 1e-5);
    for _ in 0..20 {
        burst.step(0.1);
    }
    assert!(!burst.is_visible());
    let frozen = burst.particles()[0].position;
    burst.step(0.1);
    assert_eq!(burst.particles()[0].position, frozen);
}

#[test]
fn same_seed_same_velocities() {
    let mut a = Burst::new(10, 99);
    let mut b = Burst::new(10, 99);
    a.trigger();
    b.trigger();
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.velocity, pb.velocity);
    }
}

#[test]
fn interaction_ignores_retrigger_and_expires() {
    let t0 = Instant::now();
    let mut ix = Interaction::new(Duration::from_millis(2000));
    assert_eq!(ix.mode(), InteractionMode::Idle);
    assert!(ix.trigger(t0));
    assert_eq!(ix.mode(), InteractionMode::Reorganizing);
    assert!(!ix.trigger(t0 + Duration::from_millis(500)));

    ix.poll(t0 + Duration::from_millis(1999));
    assert_eq!(ix.mode(), InteractionMode::Reorganizing);
    ix.poll(t0 + Duration::from_millis(2000));
    assert_eq!(ix.mode(), InteractionMode::Idle);

    // Ready again after expiry
    assert!(ix.trigger(t0 + Duration::from_millis(2100)));
}

#[test]
fn envelope_fades_over_window() {
    let t0 = Instant::now();
    let mut ix = Interaction::new(Duration::from_secs(2));
    assert_eq!(ix.envelope(t0), 0.0);
    ix.trigger(t0);
    assert!((ix.envelope(t0) - 1.0).abs() < 1e-6);
    assert!((ix.envelope(t0 + Duration::from_secs(1)) - 0.5).abs() < 1e-3);
    assert!(ix.envelope(t0 + Duration::from_secs(3)).abs() < 1e-6);
}

#[test]
fn progress_is_none_when_idle_and_clamped_past_expiry() {
    let t0 = Instant::now();
    let mut ix = Interaction::new(Duration::from_millis(2000));
    assert_eq!(ix.progress(t0), None);
    ix.trigger(t0);
    let half = ix.progress(t0 + Duration::from_millis(500)).unwrap();
    assert!((half - 0.25).abs() < 1e-3);
    assert_eq!(ix.progress(t0 + Duration::from_secs(10)), Some(1.0));
}

#[test]
fn trigger_after_window_without_poll_restarts() {
    let t0 = Instant::now();
    let mut ix = Interaction::new(Duration::from_millis(2000));
    assert!(ix.trigger(t0));
    assert!(!ix.trigger(t0 + Duration::from_millis(1999)));
    assert!(ix.trigger(t0 + Duration::from_millis(2001)));
    let restarted = ix.progress(t0 + Duration::from_millis(2001)).unwrap();
    assert!(restarted.abs() < 1e-6);
}
