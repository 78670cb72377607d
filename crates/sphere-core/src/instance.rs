//! GPU-facing packing of a [`RenderState`].
//!
//! Layout must match `scene.wgsl` in the renderer.

use crate::constants::{BURST_COLOR, BURST_PARTICLE_SIZE, STAR_OPACITY, STAR_SIZE};
use crate::scene::RenderState;

/// Model matrix slot in the uniform block.
pub const LAYER_GROUP: u32 = 0;
pub const LAYER_STARS: u32 = 1;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    pub layer: u32,
    pub _pad: [u32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub layer: u32,
    pub color: [f32; 4],
}

impl PointInstance {
    fn new(position: [f32; 3], size: f32, color: [f32; 4], layer: u32) -> Self {
        Self {
            position,
            size,
            color,
            layer,
            _pad: [0; 3],
        }
    }
}

/// Upper bound on point instances for a scene of this shape.
pub fn point_capacity(nodes: usize, burst: usize, stars: usize) -> usize {
    nodes + burst + stars
}

/// Stars first (drawn behind), then nodes, then burst particles.
/// Invisible burst particles are skipped.
pub fn pack_points(state: &RenderState<'_>, out: &mut Vec<PointInstance>) {
    out.clear();
    for (i, star) in state.stars.stars().iter().enumerate() {
        let pos = state
            .stars
            .display_position(i)
            .unwrap_or(star.base_position);
        out.push(PointInstance::new(
            pos.to_array(),
            STAR_SIZE,
            star.color.extend(STAR_OPACITY).to_array(),
            LAYER_STARS,
        ));
    }
    for (node, visual) in state.nodes.iter().zip(state.node_visuals) {
        out.push(PointInstance::new(
            node.base_position.to_array(),
            visual.size,
            visual.color.extend(1.0).to_array(),
            LAYER_GROUP,
        ));
    }
    if state.burst_alpha > 0.0 {
        let [r, g, b] = BURST_COLOR;
        for p in state.burst_particles {
            out.push(PointInstance::new(
                p.position.to_array(),
                BURST_PARTICLE_SIZE,
                [r, g, b, state.burst_alpha],
                LAYER_GROUP,
            ));
        }
    }
}

/// Two vertices per connection, colored by the endpoint nodes and faded by
/// the shared line opacity.
pub fn pack_lines(state: &RenderState<'_>, out: &mut Vec<LineVertex>) {
    out.clear();
    for &(i, j) in state.connections.edges() {
        for k in [i as usize, j as usize] {
            let color = state
                .node_visuals
                .get(k)
                .map(|v| v.color)
                .unwrap_or(glam::Vec3::ONE);
            out.push(LineVertex {
                position: state.nodes[k].base_position.to_array(),
                layer: LAYER_GROUP,
                color: color.extend(state.line_opacity).to_array(),
            });
        }
    }
}
