//! 4D Mathematics Library
//!
//! This crate provides the vector, rotation, projection and topology types
//! behind the Hyperview tesseract.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector produced by projection
//! - [`RotationPlane`] / [`PlaneRotation`] - rotations in the XW, YW and ZW planes
//! - [`PerspectiveProjection`] - 4D → 3D perspective divide
//!
//! ## Shape Types
//!
//! - [`Wireframe4D`] - Trait for 4D shapes made of vertices and edges
//! - [`Edge`] - A pair of vertex indices
//! - [`HypercubeTopology`] - The 16 vertices and 32 edges of a tesseract

mod vec3;
mod vec4;
mod rotation;
pub mod projection;
pub mod shape;
pub mod topology;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use rotation::{RotationPlane, PlaneRotation};
pub use projection::PerspectiveProjection;
pub use shape::{Edge, Wireframe4D};
pub use topology::{
    HypercubeTopology, generate_topology, vertex_for_index, differing_axes,
    VERTEX_COUNT, EDGE_COUNT,
};
