//! Core types for the Hyperview tesseract viewer
//!
//! This crate turns elapsed time into geometry, once per frame:
//!
//! - [`RotationState`] - Accumulated XW, YW and ZW angles
//! - [`ProjectionPipeline`] - Advances the angles, rotates and projects the tesseract
//! - [`FrameBuffers`] - The point and line buffers handed to a renderer
//! - [`DisplayColor`] - Wireframe color, passed through to the renderer untouched
//!
//! Nothing here knows about windows, GPUs or input devices.

mod rotation_state;
mod frame_buffers;
mod pipeline;
mod display_color;

pub use rotation_state::{RotationState, RotationRates};
pub use frame_buffers::{FrameBuffers, LINE_VERTEX_COUNT, POINT_SCALAR_COUNT, LINE_SCALAR_COUNT};
pub use pipeline::ProjectionPipeline;
pub use display_color::{DisplayColor, NamedColor, ColorParseError, PALETTE};

// Re-export commonly used types from hyperview_math for convenience
pub use hyperview_math::{
    Vec3, Vec4, Edge, HypercubeTopology, PerspectiveProjection, RotationPlane,
    generate_topology, VERTEX_COUNT, EDGE_COUNT,
};
