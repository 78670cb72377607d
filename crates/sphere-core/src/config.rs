//! Scene presets and validated configuration.
//!
//! A host picks a [`Complexity`] from the viewport and accessibility settings
//! and turns it into a [`SceneConfig`]. The config is validated once when the
//! scene is built; counts never change afterwards.

use crate::constants::*;
use crate::error::ConfigError;

/// Visual complexity level selected by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Complexity {
    #[default]
    Full,
    Reduced,
}

impl Complexity {
    /// Narrow viewports and the reduced-motion preference both select `Reduced`.
    pub fn from_viewport(width_css_px: f32, prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion || width_css_px < REDUCED_VIEWPORT_BREAKPOINT_PX {
            Complexity::Reduced
        } else {
            Complexity::Full
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub node_count: usize,
    pub radius: f32,
    pub connection_distance: f32,
    pub star_count: usize,
    pub burst_particles: usize,
    pub seed: u64,
}

impl SceneConfig {
    pub fn for_complexity(complexity: Complexity) -> Self {
        match complexity {
            Complexity::Full => Self {
                node_count: NODE_COUNT_FULL,
                radius: SPHERE_RADIUS_FULL,
                connection_distance: CONNECTION_DISTANCE_FULL,
                star_count: STAR_COUNT_FULL,
                burst_particles: BURST_PARTICLE_COUNT,
                seed: 42,
            },
            Complexity::Reduced => Self {
                node_count: NODE_COUNT_REDUCED,
                radius: SPHERE_RADIUS_REDUCED,
                connection_distance: CONNECTION_DISTANCE_REDUCED,
                star_count: STAR_COUNT_REDUCED,
                burst_particles: BURST_PARTICLE_COUNT / 2,
                seed: 42,
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::NoNodes);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.connection_distance.is_finite() && self.connection_distance > 0.0) {
            return Err(ConfigError::InvalidConnectionDistance(
                self.connection_distance,
            ));
        }
        if self.burst_particles > BURST_CAPACITY {
            return Err(ConfigError::BurstTooLarge {
                requested: self.burst_particles,
                capacity: BURST_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_complexity(Complexity::Full)
    }
}
