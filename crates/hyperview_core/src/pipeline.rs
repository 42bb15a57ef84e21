//! Rotation–projection pipeline
//!
//! Once per rendered frame the caller hands over the time since the previous
//! frame and a speed multiplier. The pipeline advances its three angles,
//! rotates every tesseract vertex through the XW, YW and ZW planes (in that
//! order, since 4D plane rotations do not commute), projects the result to
//! 3D and rewrites its point and line buffers.
//!
//! The pipeline owns all of its state. There is no start/stop/reset state
//! machine: pausing is `speed = 0`, resetting is constructing a new pipeline.

use hyperview_math::{
    HypercubeTopology, PerspectiveProjection, PlaneRotation, Vec3, Vec4, VERTEX_COUNT,
};

use crate::{FrameBuffers, RotationState};

/// Per-frame rotate-and-project engine for the tesseract
#[derive(Clone, Debug)]
pub struct ProjectionPipeline {
    topology: &'static HypercubeTopology,
    projection: PerspectiveProjection,
    rotation: RotationState,
    projected: [Vec3; VERTEX_COUNT],
    buffers: FrameBuffers,
    frame_count: u64,
}

impl Default for ProjectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionPipeline {
    /// Create a pipeline at zero rotation
    ///
    /// The buffers are filled with the zero-rotation projection straight away,
    /// so they are valid before the first frame.
    pub fn new() -> Self {
        let mut pipeline = Self {
            topology: HypercubeTopology::shared(),
            projection: PerspectiveProjection::default(),
            rotation: RotationState::ZERO,
            projected: [Vec3::ZERO; VERTEX_COUNT],
            buffers: FrameBuffers::new(),
            frame_count: 0,
        };
        pipeline.project();
        log::debug!(
            "Projection pipeline ready: {} vertices, {} edges, projection distance {}",
            VERTEX_COUNT,
            pipeline.topology.edges().len(),
            pipeline.projection.distance
        );
        pipeline
    }

    /// Start from a given rotation state instead of zero
    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self.project();
        self
    }

    /// Advance the angles by one frame and re-project every vertex
    ///
    /// # Arguments
    /// * `elapsed_seconds` - Time since the previous call
    /// * `speed` - Rotation speed multiplier; not validated or clamped
    ///
    /// # Returns
    /// The rewritten point and line buffers
    pub fn advance_and_project(&mut self, elapsed_seconds: f32, speed: f32) -> &FrameBuffers {
        self.rotation.advance(elapsed_seconds, speed);
        self.frame_count += 1;
        log::trace!(
            "frame {}: dt={:.4} speed={:.1} xw={:.4} yw={:.4} zw={:.4}",
            self.frame_count,
            elapsed_seconds,
            speed,
            self.rotation.xw,
            self.rotation.yw,
            self.rotation.zw
        );
        self.project()
    }

    /// Re-project at the current angles without advancing them
    pub fn project(&mut self) -> &FrameBuffers {
        let rotations = self.rotation.rotations();
        for (out, &v) in self.projected.iter_mut().zip(self.topology.vertices().iter()) {
            *out = rotate_and_project(v, &rotations, &self.projection);
        }
        self.buffers.write(&self.projected, self.topology.edges());
        &self.buffers
    }

    /// Rotate and project a single 4D point at the current angles
    pub fn transform_vertex(&self, v: Vec4) -> Vec3 {
        rotate_and_project(v, &self.rotation.rotations(), &self.projection)
    }

    #[inline]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    #[inline]
    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    #[inline]
    pub fn topology(&self) -> &HypercubeTopology {
        self.topology
    }

    #[inline]
    pub fn projection(&self) -> PerspectiveProjection {
        self.projection
    }

    /// Number of `advance_and_project` calls so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

fn rotate_and_project(
    v: Vec4,
    rotations: &[PlaneRotation; 3],
    projection: &PerspectiveProjection,
) -> Vec3 {
    let rotated = rotations.iter().fold(v, |p, rotation| rotation.apply(p));
    projection.project(rotated)
}
