//! Owned scene state and the per-frame update.
//!
//! [`SphereScene`] holds every buffer the visualization animates. Hosts call
//! [`SphereScene::advance`] once per display frame and draw the returned
//! [`RenderState`]; nothing else mutates the scene.

use crate::burst::{Burst, BurstParticle};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::SceneError;
use crate::graph::Connections;
use crate::interaction::{Interaction, InteractionMode};
use crate::picking::ray_sphere;
use crate::smoothing::{damp_vec2, damp_vec3};
use crate::sphere::{build_nodes, Node, NodeVisual};
use crate::starfield::StarField;
use glam::{Mat4, Quat, Vec2, Vec3};
use instant::Instant;

/// Host input delivered to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// Pointer press at normalized device coordinates (x right, y up).
    Press { ndc: Vec2 },
}

#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Wall-clock time of this frame, used for the reorganize timer.
    pub now: Instant,
    /// Pointer position in -1..1 on both axes (y up).
    pub pointer: Vec2,
    pub events: &'a [SceneEvent],
}

/// Node-group transform: auto-rotation plus pointer parallax.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupTransform {
    /// Accumulated auto-rotation about the vertical axis.
    pub spin: f32,
    /// Smoothed parallax tilt (x: pitch, y: extra yaw).
    pub tilt: Vec2,
    /// Smoothed parallax translation.
    pub offset: Vec3,
}

impl GroupTransform {
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.tilt.x) * Quat::from_rotation_y(self.spin + self.tilt.y);
        Mat4::from_rotation_translation(rotation, self.offset)
    }
}

/// Read-only view of the scene after an update.
pub struct RenderState<'a> {
    pub elapsed: f32,
    pub mode: InteractionMode,
    pub camera: &'a Camera,
    pub group: GroupTransform,
    pub nodes: &'a [Node],
    pub node_visuals: &'a [NodeVisual],
    pub connections: &'a Connections,
    pub line_opacity: f32,
    pub burst_alpha: f32,
    pub burst_particles: &'a [BurstParticle],
    pub stars: &'a StarField,
}

impl RenderState<'_> {
    pub fn group_matrix(&self) -> Mat4 {
        self.group.model_matrix()
    }

    pub fn star_field_matrix(&self) -> Mat4 {
        let r = self.stars.rotation();
        Mat4::from_quat(Quat::from_rotation_x(r.x) * Quat::from_rotation_y(r.y))
    }
}

pub struct SphereScene {
    config: SceneConfig,
    camera: Camera,
    nodes: Vec<Node>,
    node_visuals: Vec<NodeVisual>,
    connections: Connections,
    burst: Burst,
    interaction: Interaction,
    stars: StarField,
    group: GroupTransform,
    elapsed: f32,
    line_opacity: f32,
}

impl SphereScene {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let nodes = build_nodes(config.node_count, config.radius);
        let node_visuals = nodes.iter().map(Node::resting_visual).collect();
        let positions: Vec<Vec3> = nodes.iter().map(|n| n.base_position).collect();
        let connections = Connections::build(&positions, config.connection_distance);
        // Independent streams for the burst and the star field
        let burst = Burst::new(config.burst_particles, config.seed ^ 0x9E37_79B9_7F4A_7C15);
        let stars = StarField::generate(config.star_count, config.seed);
        log::info!(
            "[scene] nodes={} edges={} stars={} radius={:.2}",
            nodes.len(),
            connections.len(),
            stars.len(),
            config.radius
        );
        Ok(Self {
            config,
            camera: Camera::default(),
            nodes,
            node_visuals,
            connections,
            burst,
            interaction: Interaction::new(REORGANIZE_DURATION),
            stars,
            group: GroupTransform::default(),
            elapsed: 0.0,
            line_opacity: LINE_OPACITY_BASE,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn burst(&self) -> &Burst {
        &self.burst
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn group(&self) -> GroupTransform {
        self.group
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether a press at `ndc` lands on the group's invisible hit sphere.
    pub fn hit_test(&self, ndc: Vec2) -> bool {
        let (origin, dir) = self.camera.ray_from_ndc(ndc);
        let radius = self.config.radius * HIT_SURFACE_SCALE;
        ray_sphere(origin, dir, self.group.offset, radius).is_some()
    }

    /// Start a reorganize and seed the burst. No-op while one is running.
    pub fn reorganize(&mut self, now: Instant) -> bool {
        if !self.interaction.trigger(now) {
            log::debug!("[scene] reorganize ignored, already running");
            return false;
        }
        self.burst.trigger();
        log::info!("[scene] reorganize");
        true
    }

    pub fn advance(&mut self, input: &FrameInput<'_>) -> RenderState<'_> {
        let dt = input.dt.clamp(0.0, MAX_FRAME_DT);
        let pointer = input.pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        self.elapsed += dt;

        self.interaction.poll(input.now);
        for event in input.events {
            match *event {
                SceneEvent::Press { ndc } => {
                    if self.hit_test(ndc) {
                        self.reorganize(input.now);
                    }
                }
            }
        }

        self.group.spin += AUTO_ROTATE_RATE * dt;
        let tilt_target = Vec2::new(-pointer.y * TILT_MAX_X, pointer.x * TILT_MAX_Y);
        self.group.tilt = damp_vec2(self.group.tilt, tilt_target, PARALLAX_DAMPING_PER_SEC, dt);
        let offset_target = Vec3::new(pointer.x * PARALLAX_OFFSET_X, pointer.y * PARALLAX_OFFSET_Y, 0.0);
        self.group.offset = damp_vec3(self.group.offset, offset_target, PARALLAX_DAMPING_PER_SEC, dt);

        let disturbance = self.interaction.envelope(input.now);
        let t = self.elapsed;
        for (node, visual) in self.nodes.iter().zip(self.node_visuals.iter_mut()) {
            *visual = node.visual_at(t, disturbance);
        }
        self.line_opacity = line_opacity_at(t);

        self.burst.step(dt);
        self.stars.update(dt, t, pointer);

        self.render_state()
    }

    /// Current state without advancing time.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            elapsed: self.elapsed,
            mode: self.interaction.mode(),
            camera: &self.camera,
            group: self.group,
            nodes: &self.nodes,
            node_visuals: &self.node_visuals,
            connections: &self.connections,
            line_opacity: self.line_opacity,
            burst_alpha: self.burst.alpha(),
            burst_particles: self.burst.particles(),
            stars: &self.stars,
        }
    }
}

#[inline]
pub fn line_opacity_at(t: f32) -> f32 {
    (LINE_OPACITY_BASE + LINE_OPACITY_AMPLITUDE * (t * LINE_OPACITY_FREQUENCY).sin()).clamp(0.0, 1.0)
}
