//! Wireframe rendering for the projected tesseract
//!
//! This crate only consumes [`hyperview_core::FrameBuffers`]; it never
//! touches rotation state.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::ViewCamera`] - Perspective camera orbiting the shape
//! - [`pipeline::WireframePipeline`] - Edge lines and vertex markers

pub mod camera;
pub mod context;
pub mod pipeline;

pub use camera::ViewCamera;
pub use context::{ContextError, RenderContext};
pub use pipeline::{WireframePipeline, WireframeUniforms};
