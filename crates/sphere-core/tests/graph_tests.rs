// Host-side tests for the proximity graph.

use glam::Vec3;
use sphere_core::graph::Connections;
use sphere_core::sphere::fibonacci_sphere;

#[test]
fn threshold_is_strict_and_exclusive() {
    let near = [Vec3::ZERO, Vec3::new(1.29, 0.0, 0.0)];
    assert!(Connections::build(&near, 1.3).contains(0, 1));

    let far = [Vec3::ZERO, Vec3::new(1.31, 0.0, 0.0)];
    assert!(Connections::build(&far, 1.3).is_empty());

    // Exactly at the threshold is not connected
    let at = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    assert!(Connections::build(&at, 1.0).is_empty());
}

#[test]
fn edges_match_pairwise_distances() {
    let points = fibonacci_sphere(60, 2.0);
    let threshold = 1.0;
    let graph = Connections::build(&points, threshold);
    for i in 0..points.len() {
        for j in 0..points.len() {
            if i == j {
                assert!(!graph.contains(i, j));
                continue;
            }
            let expected = points[i].distance(points[j]) < threshold;
            assert_eq!(graph.contains(i, j), expected, "pair ({i}, {j})");
            assert_eq!(graph.contains(i, j), graph.contains(j, i));
        }
    }
}

#[test]
fn each_edge_is_listed_once_with_ordered_indices() {
    let points = fibonacci_sphere(80, 2.0);
    let graph = Connections::build(&points, 1.0);
    let mut seen = std::collections::HashSet::new();
    for &(i, j) in graph.edges() {
        assert!(i < j);
        assert!(seen.insert((i, j)), "duplicate edge ({i}, {j})");
    }
    let degree_sum: u32 = (0..points.len()).map(|n| graph.degree(n)).sum();
    assert_eq!(degree_sum as usize, graph.len() * 2);
}

#[test]
fn graph_is_deterministic() {
    let a = Connections::build(&fibonacci_sphere(80, 2.0), 1.0);
    let b = Connections::build(&fibonacci_sphere(80, 2.0), 1.0);
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.segment_coords(), b.segment_coords());
}

#[test]
fn segments_follow_edge_order() {
    let points = fibonacci_sphere(40, 1.5);
    let graph = Connections::build(&points, 0.95);
    assert_eq!(graph.segments().len(), graph.len() * 2);
    assert_eq!(graph.segment_coords().len(), graph.len() * 6);
    for (k, &(i, j)) in graph.edges().iter().enumerate() {
        assert_eq!(graph.segments()[2 * k], points[i as usize]);
        assert_eq!(graph.segments()[2 * k + 1], points[j as usize]);
    }
    let flat = graph.segment_coords();
    let first = graph.segments()[0];
    assert_eq!(&flat[0..3], &first.to_array());
}

#[test]
fn presets_produce_a_connected_looking_mesh() {
    // Every node should have at least one neighbour at the shipped thresholds
    for (n, r, d) in [(80, 2.0, 1.0), (40, 1.5, 0.95)] {
        let graph = Connections::build(&fibonacci_sphere(n, r), d);
        for node in 0..n {
            assert!(graph.degree(node) > 0, "node {node} isolated for n={n}");
        }
    }
}

#[test]
fn out_of_range_degree_is_zero() {
    let graph = Connections::build(&fibonacci_sphere(5, 1.0), 1.0);
    assert_eq!(graph.degree(99), 0);
}
