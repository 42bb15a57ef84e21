//! Animation system
//!
//! Turns wall-clock time between redraws into a pipeline step:
//! - Delta time measurement
//! - Delta time capping
//! - Rotation reset

use std::time::Instant;
use hyperview_core::{FrameBuffers, ProjectionPipeline};

/// Drives the projection pipeline from the frame clock
pub struct AnimationSystem {
    pipeline: ProjectionPipeline,
    last_frame: Instant,
    max_frame_seconds: f32,
}

impl AnimationSystem {
    /// Create an animation system starting at zero rotation
    ///
    /// Frame times above `max_frame_seconds` are cut down to it, so a stall
    /// (window drag, breakpoint) does not jump the rotation forward.
    pub fn new(max_frame_seconds: f32) -> Self {
        Self {
            pipeline: ProjectionPipeline::new(),
            last_frame: Instant::now(),
            max_frame_seconds: max_frame_seconds.max(0.0),
        }
    }

    /// Run one frame at `speed`, measuring elapsed time since the last one
    pub fn update(&mut self, speed: f32) -> &FrameBuffers {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(raw_dt, speed)
    }

    /// Run one frame with an explicit elapsed time
    pub fn step(&mut self, elapsed_seconds: f32, speed: f32) -> &FrameBuffers {
        let dt = self.cap(elapsed_seconds);
        self.pipeline.advance_and_project(dt, speed)
    }

    fn cap(&self, elapsed_seconds: f32) -> f32 {
        elapsed_seconds.clamp(0.0, self.max_frame_seconds)
    }

    /// Replace the pipeline with a fresh one at zero rotation
    pub fn reset(&mut self) {
        self.pipeline = ProjectionPipeline::new();
        self.last_frame = Instant::now();
        log::info!("Rotation reset");
    }

    pub fn pipeline(&self) -> &ProjectionPipeline {
        &self.pipeline
    }

    pub fn buffers(&self) -> &FrameBuffers {
        self.pipeline.buffers()
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new(0.25)
    }
}
