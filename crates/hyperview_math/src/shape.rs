//! Shape trait for 4D wireframes
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.

use crate::Vec4;

/// An edge between two vertices, stored with `a < b`
///
/// Indices refer to the parent shape's vertex array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge, ordering the endpoints so that `a < b`
    #[inline]
    pub fn new(v0: usize, v1: usize) -> Self {
        if v0 <= v1 {
            Self { a: v0, b: v1 }
        } else {
            Self { a: v1, b: v0 }
        }
    }

    #[inline]
    pub fn endpoints(&self) -> [usize; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The opposite endpoint, if `vertex` is on this edge
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Trait for 4D shapes drawn as vertices joined by straight edges
///
/// The order of `vertices()` and `edges()` is part of the contract: renderers
/// index into per-frame buffers laid out in the same order.
pub trait Wireframe4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
