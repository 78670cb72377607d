//! Proximity graph between node base positions.
//!
//! Pairwise O(N²) distance checks. N is a few dozen by construction, so no
//! spatial index is kept; this does not scale to large point sets.

use fnv::FnvHashSet;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Connections {
    threshold: f32,
    edges: Vec<(u32, u32)>,
    edge_set: FnvHashSet<(u32, u32)>,
    degrees: Vec<u32>,
    segments: Vec<Vec3>,
}

impl Connections {
    /// Connect every `i < j` whose distance is strictly below `threshold`.
    pub fn build(positions: &[Vec3], threshold: f32) -> Self {
        let mut edges = Vec::new();
        let mut degrees = vec![0u32; positions.len()];
        for (i, a) in positions.iter().enumerate() {
            for (j, b) in positions.iter().enumerate().skip(i + 1) {
                if a.distance(*b) < threshold {
                    edges.push((i as u32, j as u32));
                    degrees[i] += 1;
                    degrees[j] += 1;
                }
            }
        }
        let edge_set = edges.iter().copied().collect();
        let segments = edges
            .iter()
            .flat_map(|&(i, j)| [positions[i as usize], positions[j as usize]])
            .collect();
        log::debug!(
            "[graph] nodes={} edges={} threshold={:.2}",
            positions.len(),
            edges.len(),
            threshold
        );
        Self {
            threshold,
            edges,
            edge_set,
            degrees,
            segments,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Order-insensitive edge lookup.
    pub fn contains(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.edge_set.contains(&(lo as u32, hi as u32))
    }

    pub fn degree(&self, node: usize) -> u32 {
        self.degrees.get(node).copied().unwrap_or(0)
    }

    /// Line-list endpoints, two per edge, in edge order.
    pub fn segments(&self) -> &[Vec3] {
        &self.segments
    }

    /// The same endpoints as a flat `[x, y, z, x, y, z, ...]` slice.
    pub fn segment_coords(&self) -> &[f32] {
        bytemuck::cast_slice(&self.segments)
    }
}
