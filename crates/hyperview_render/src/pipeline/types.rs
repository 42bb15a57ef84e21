//! GPU-compatible data types for the wireframe pipeline
//!
//! These types match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};

/// Uniforms shared by the line and point passes
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct WireframeUniforms {
    /// View matrix (world to camera)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (camera to clip)
    pub projection_matrix: [[f32; 4]; 4],
    /// Linear RGBA color of both points and lines
    pub color: [f32; 4],
    /// Diameter of each vertex marker in world units
    pub point_size: f32,
    /// Alpha applied to edges
    pub line_opacity: f32,
    /// Padding to align to 16 bytes
    pub _padding: [f32; 2],
}

impl Default for WireframeUniforms {
    fn default() -> Self {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        Self {
            view_matrix: identity,
            projection_matrix: identity,
            color: [1.0; 4],
            point_size: 0.08,
            line_opacity: 0.8,
            _padding: [0.0; 2],
        }
    }
}

/// Bytes per vertex in both the point and line buffers (one `vec3<f32>`)
pub const POSITION_STRIDE: u64 = 12;

/// Vertices emitted per point marker (two triangles)
pub const POINT_QUAD_VERTICES: u32 = 6;
