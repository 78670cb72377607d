//! Click-driven reorganize state.
//!
//! Expiry is measured on the wall clock passed in by the host, not on the
//! animation clock, so it does not depend on frame count or clamped deltas.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Reorganizing,
}

#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    duration: Duration,
    since: Option<Instant>,
}

impl Interaction {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            since: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        match self.since {
            Some(_) => InteractionMode::Reorganizing,
            None => InteractionMode::Idle,
        }
    }

    /// Enter `Reorganizing` at `now`. Returns false (and changes nothing)
    /// if a reorganize is still running at `now`.
    pub fn trigger(&mut self, now: Instant) -> bool {
        // A window that ended between frames must not swallow this press
        self.poll(now);
        if self.since.is_some() {
            return false;
        }
        self.since = Some(now);
        true
    }

    /// Drop back to `Idle` once the window has elapsed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(start) = self.since {
            if elapsed_since(start, now) >= self.duration {
                self.since = None;
            }
        }
    }

    /// Fraction of the window elapsed, `None` when idle.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.since.map(|start| {
            let elapsed = elapsed_since(start, now).as_secs_f32();
            (elapsed / self.duration.as_secs_f32().max(f32::EPSILON)).clamp(0.0, 1.0)
        })
    }

    /// Disturbance envelope: 1 at trigger, fading linearly to 0 at expiry.
    pub fn envelope(&self, now: Instant) -> f32 {
        self.progress(now).map(|p| 1.0 - p).unwrap_or(0.0)
    }
}

#[inline]
fn elapsed_since(start: Instant, now: Instant) -> Duration {
    if now >= start {
        now.duration_since(start)
    } else {
        Duration::ZERO
    }
}
