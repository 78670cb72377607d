use std::time::Duration;

// Shared visual tuning constants used by both web and native frontends.

// Scene layout (full complexity)
pub const NODE_COUNT_FULL: usize = 80;
pub const SPHERE_RADIUS_FULL: f32 = 2.0;
pub const CONNECTION_DISTANCE_FULL: f32 = 1.0;
pub const STAR_COUNT_FULL: usize = 1500;

// Reduced complexity (narrow viewports, reduced-motion preference)
pub const NODE_COUNT_REDUCED: usize = 40;
pub const SPHERE_RADIUS_REDUCED: f32 = 1.5;
pub const CONNECTION_DISTANCE_REDUCED: f32 = 0.95;
pub const STAR_COUNT_REDUCED: usize = 500;

// Viewports narrower than this (CSS px) use the reduced preset
pub const REDUCED_VIEWPORT_BREAKPOINT_PX: f32 = 768.0;

// Node colors: hue sweeps HUE_START..HUE_END across node indices
pub const NODE_HUE_START: f32 = 0.55; // cyan
pub const NODE_HUE_END: f32 = 0.75; // violet
pub const NODE_SATURATION: f32 = 0.8;
pub const NODE_LIGHTNESS_BASE: f32 = 0.6;

// Node pulsing
pub const NODE_SIZE_BASE: f32 = 0.08;
pub const PULSE_FREQUENCY: f32 = 2.0; // rad/s
pub const PULSE_PHASE_STEP: f32 = 0.3; // per node index
pub const PULSE_LIGHTNESS_AMPLITUDE: f32 = 0.15;
pub const PULSE_SIZE_AMPLITUDE: f32 = 0.25; // fraction of base size

// Connection lines share one opacity
pub const LINE_OPACITY_BASE: f32 = 0.25;
pub const LINE_OPACITY_AMPLITUDE: f32 = 0.1;
pub const LINE_OPACITY_FREQUENCY: f32 = 1.0; // rad/s

// Group motion
pub const AUTO_ROTATE_RATE: f32 = 0.1; // rad/s around vertical axis
pub const TILT_MAX_X: f32 = 0.3; // rad, driven by pointer y
pub const TILT_MAX_Y: f32 = 0.5; // rad, driven by pointer x
pub const PARALLAX_OFFSET_X: f32 = 0.5; // world units, driven by pointer x
pub const PARALLAX_OFFSET_Y: f32 = 0.3; // world units, driven by pointer y
pub const PARALLAX_DAMPING_PER_SEC: f32 = 1.2; // ~0.02 per frame at 60 Hz

// Reorganize (click) disturbance
pub const REORGANIZE_DURATION: Duration = Duration::from_millis(2000);
pub const REORGANIZE_FREQUENCY: f32 = 12.0; // rad/s
pub const REORGANIZE_SIZE_AMPLITUDE: f32 = 0.6; // fraction of base size
pub const REORGANIZE_LIGHTNESS_AMPLITUDE: f32 = 0.1;
pub const HIT_SURFACE_SCALE: f32 = 1.1; // hit sphere radius relative to R

// Burst particles
pub const BURST_PARTICLE_COUNT: usize = 30;
pub const BURST_CAPACITY: usize = 64;
pub const BURST_SPEED_MIN: f32 = 1.0;
pub const BURST_SPEED_MAX: f32 = 3.0;
pub const BURST_DECAY_PER_SEC: f32 = 1.5;
pub const BURST_PARTICLE_SIZE: f32 = 0.05;
pub const BURST_COLOR: [f32; 3] = [0.4, 0.85, 1.0];

// Star field volume: wider in X/Y than deep in Z, sitting behind the sphere
pub const STAR_HALF_EXTENT_XY: f32 = 12.0;
pub const STAR_Z_MIN: f32 = -12.0;
pub const STAR_Z_MAX: f32 = 2.0;
pub const STAR_SIZE: f32 = 0.03;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_COLOR_A: [f32; 3] = [0.231, 0.510, 0.965]; // #3B82F6
pub const STAR_COLOR_B: [f32; 3] = [0.545, 0.361, 0.965]; // #8B5CF6

// Star field motion
pub const STAR_TWINKLE_AMPLITUDE: f32 = 0.02;
pub const STAR_TWINKLE_FREQUENCY: f32 = 0.5; // rad/s
pub const STAR_DRIFT_RATE_X: f32 = 0.01; // rad/s
pub const STAR_DRIFT_RATE_Y: f32 = 0.02; // rad/s
pub const STAR_POINTER_TILT: f32 = 0.1; // rad at full pointer deflection
pub const STAR_DAMPING_PER_SEC: f32 = 0.8;

// Frame deltas above this are clamped (tab switches, debugger pauses)
pub const MAX_FRAME_DT: f32 = 0.1;

// Camera (matches the hero canvas setup)
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
