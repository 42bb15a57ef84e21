//! Wireframe render pipeline and its GPU types

pub mod types;
pub mod wireframe_pipeline;

pub use types::{WireframeUniforms, POINT_QUAD_VERTICES, POSITION_STRIDE};
pub use wireframe_pipeline::WireframePipeline;
