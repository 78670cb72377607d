// Web front-end tuning. Scene tuning lives in `sphere_core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "hero-canvas";
pub const FALLBACK_ID: &str = "hero-fallback";

// Mount after first paint so the hero text is never blocked by GPU setup
pub const MOUNT_DELAY_MS: i32 = 100;

// Device pixel ratio clamp for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Media query for the accessibility preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
