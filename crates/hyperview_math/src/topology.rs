//! Tesseract (4D Hypercube) topology
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes). Only the vertices and
//! edges are needed for a wireframe.
//!
//! Vertex `i` is numbered by binary counting: bit k of `i` set means axis k
//! (X, Y, Z, W for k = 0..3) is +1, clear means -1.

use std::sync::OnceLock;

use crate::{Vec4, shape::{Edge, Wireframe4D}};

/// Number of tesseract vertices (2^4)
pub const VERTEX_COUNT: usize = 16;
/// Number of tesseract edges (16 vertices × degree 4 / 2)
pub const EDGE_COUNT: usize = 32;

/// Vertex and edge sets of the ±1 hypercube
#[derive(Clone, Debug, PartialEq)]
pub struct HypercubeTopology {
    vertices: [Vec4; VERTEX_COUNT],
    edges: [Edge; EDGE_COUNT],
}

/// Build the hypercube topology
///
/// Deterministic and infallible; every call returns the same vertices and
/// edges in the same order. Prefer [`HypercubeTopology::shared`] to avoid
/// rebuilding it.
pub fn generate_topology() -> HypercubeTopology {
    let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
    for (i, v) in vertices.iter_mut().enumerate() {
        *v = vertex_for_index(i);
    }

    // Edges connect vertices that differ in exactly one coordinate.
    // Scanning pairs in (i, j) order fixes the edge order.
    let mut edges = [Edge::default(); EDGE_COUNT];
    let mut count = 0;
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            if differing_axes(vertices[i], vertices[j]) == 1 {
                edges[count] = Edge { a: i, b: j };
                count += 1;
            }
        }
    }
    debug_assert_eq!(count, EDGE_COUNT);

    HypercubeTopology { vertices, edges }
}

/// The vertex with index `i`, from the bits of `i`
///
/// Only the low four bits are read.
#[inline]
pub fn vertex_for_index(i: usize) -> Vec4 {
    let coord = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
    Vec4::new(coord(0), coord(1), coord(2), coord(3))
}

/// Count of coordinates in which `a` and `b` differ
#[inline]
pub fn differing_axes(a: Vec4, b: Vec4) -> usize {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .filter(|(p, q)| p != q)
        .count()
}

impl HypercubeTopology {
    /// Process-wide topology, built on first use
    pub fn shared() -> &'static HypercubeTopology {
        static TOPOLOGY: OnceLock<HypercubeTopology> = OnceLock::new();
        TOPOLOGY.get_or_init(generate_topology)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }

    /// Vertices adjacent to `vertex`, in edge order
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(move |e| e.other(vertex))
    }

    /// Largest vertex length; no rotation can move a vertex farther from the origin
    pub fn circumradius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}

impl Wireframe4D for HypercubeTopology {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count() {
        let t = generate_topology();
        assert_eq!(t.vertices().len(), 16);
        assert_eq!(t.vertex_count(), 16);
    }

    #[test]
    fn test_vertices_are_distinct_sign_combinations() {
        let t = generate_topology();
        let mut seen = HashSet::new();
        for v in t.vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0, "coordinate {} is not ±1", c);
            }
            let signs: Vec<bool> = v.to_array().iter().map(|&c| c > 0.0).collect();
            assert!(seen.insert(signs), "duplicate vertex {:?}", v);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_vertices_follow_binary_encoding() {
        let t = generate_topology();
        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[1], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[8], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(t.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));

        for (i, v) in t.vertices().iter().enumerate() {
            for axis in 0..4 {
                let expected = if i & (1 << axis) != 0 { 1.0 } else { -1.0 };
                assert_eq!(v.component(axis), expected);
            }
        }
    }

    #[test]
    fn test_edge_count() {
        let t = generate_topology();
        assert_eq!(t.edges().len(), 32);
        assert_eq!(t.edge_count(), 32);
    }

    #[test]
    fn test_edges_differ_in_one_axis() {
        let t = generate_topology();
        for e in t.edges() {
            let (a, b) = (t.vertices()[e.a], t.vertices()[e.b]);
            assert_eq!(differing_axes(a, b), 1, "edge ({}, {})", e.a, e.b);
            assert!((e.a ^ e.b).is_power_of_two());
            assert!(e.a < e.b);
        }
    }

    #[test]
    fn test_edges_unique() {
        let t = generate_topology();
        let unique: HashSet<Edge> = t.edges().iter().copied().collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let t = generate_topology();
        for v in 0..VERTEX_COUNT {
            let degree = t.edges().iter().filter(|e| e.contains(v)).count();
            assert_eq!(degree, 4, "vertex {} has degree {}", v, degree);
            assert_eq!(t.neighbors(v).count(), 4);
        }
    }

    #[test]
    fn test_edge_order_is_lexicographic() {
        let t = generate_topology();
        assert_eq!(t.edges()[0], Edge { a: 0, b: 1 });
        assert_eq!(t.edges()[1], Edge { a: 0, b: 2 });
        assert_eq!(t.edges()[2], Edge { a: 0, b: 4 });
        assert_eq!(t.edges()[3], Edge { a: 0, b: 8 });
        assert_eq!(t.edges()[31], Edge { a: 14, b: 15 });
        for pair in t.edges().windows(2) {
            assert!((pair[0].a, pair[0].b) < (pair[1].a, pair[1].b));
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        assert_eq!(generate_topology(), generate_topology());
        assert_eq!(HypercubeTopology::shared(), &generate_topology());
        assert!(std::ptr::eq(HypercubeTopology::shared(), HypercubeTopology::shared()));
    }

    #[test]
    fn test_neighbors_of_origin_corner() {
        let t = generate_topology();
        let n: Vec<usize> = t.neighbors(0).collect();
        assert_eq!(n, vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_circumradius() {
        assert_eq!(generate_topology().circumradius(), 2.0);
    }
}
