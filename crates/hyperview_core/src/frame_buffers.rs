//! Per-frame output buffers
//!
//! Both buffers are fixed-size arrays owned by the pipeline and overwritten
//! in place every frame. Their order is fixed by the topology, so a renderer
//! can keep index-based references across frames.

use hyperview_math::{Edge, Vec3, EDGE_COUNT, VERTEX_COUNT};

/// Number of endpoints in the line buffer (two per edge)
pub const LINE_VERTEX_COUNT: usize = EDGE_COUNT * 2;
/// Scalars in the point buffer (16 × 3)
pub const POINT_SCALAR_COUNT: usize = VERTEX_COUNT * 3;
/// Scalars in the line buffer (32 × 2 × 3)
pub const LINE_SCALAR_COUNT: usize = LINE_VERTEX_COUNT * 3;

/// Projected positions for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffers {
    /// One position per vertex, in vertex-index order
    points: [Vec3; VERTEX_COUNT],
    /// Two positions per edge, in edge order
    lines: [Vec3; LINE_VERTEX_COUNT],
}

impl Default for FrameBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffers {
    pub fn new() -> Self {
        Self {
            points: [Vec3::ZERO; VERTEX_COUNT],
            lines: [Vec3::ZERO; LINE_VERTEX_COUNT],
        }
    }

    /// Overwrite both buffers from freshly projected vertex positions
    pub(crate) fn write(&mut self, projected: &[Vec3; VERTEX_COUNT], edges: &[Edge; EDGE_COUNT]) {
        self.points = *projected;
        for (segment, edge) in self.lines.chunks_exact_mut(2).zip(edges.iter()) {
            segment[0] = projected[edge.a];
            segment[1] = projected[edge.b];
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec3; VERTEX_COUNT] {
        &self.points
    }

    #[inline]
    pub fn lines(&self) -> &[Vec3; LINE_VERTEX_COUNT] {
        &self.lines
    }

    /// Both endpoints of edge `index`
    #[inline]
    pub fn segment(&self, index: usize) -> [Vec3; 2] {
        [self.lines[index * 2], self.lines[index * 2 + 1]]
    }

    /// Point buffer as 48 flat scalars (x, y, z per vertex)
    #[inline]
    pub fn point_scalars(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Line buffer as 192 flat scalars (6 per edge)
    #[inline]
    pub fn line_scalars(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_math::generate_topology;

    fn numbered_points() -> [Vec3; VERTEX_COUNT] {
        let mut points = [Vec3::ZERO; VERTEX_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = Vec3::new(i as f32, 0.0, -(i as f32));
        }
        points
    }

    #[test]
    fn test_scalar_lengths() {
        let buffers = FrameBuffers::new();
        assert_eq!(buffers.point_scalars().len(), 48);
        assert_eq!(buffers.line_scalars().len(), 192);
        assert_eq!(POINT_SCALAR_COUNT, 48);
        assert_eq!(LINE_SCALAR_COUNT, 192);
    }

    #[test]
    fn test_write_lays_out_edges_consecutively() {
        let topology = generate_topology();
        let points = numbered_points();
        let mut buffers = FrameBuffers::new();
        buffers.write(&points, topology.edges());

        assert_eq!(buffers.points(), &points);
        for (k, edge) in topology.edges().iter().enumerate() {
            assert_eq!(buffers.segment(k), [points[edge.a], points[edge.b]]);
        }

        // Edge 0 is (0, 1): scalars 0..6
        assert_eq!(&buffers.line_scalars()[0..6], &[0.0, 0.0, -0.0, 1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let topology = generate_topology();
        let mut buffers = FrameBuffers::new();
        buffers.write(&numbered_points(), topology.edges());
        let zeros = [Vec3::ZERO; VERTEX_COUNT];
        buffers.write(&zeros, topology.edges());
        assert!(buffers.point_scalars().iter().all(|&s| s == 0.0));
        assert!(buffers.line_scalars().iter().all(|&s| s == 0.0));
    }
}
