//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The wireframe pipeline and its uniforms
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use hyperview_core::{DisplayColor, FrameBuffers};
use hyperview_render::{
    ContextError, RenderContext, ViewCamera, WireframePipeline, WireframeUniforms,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            // Both are fixed by configuring the surface again
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WireframePipeline,
    camera: ViewCamera,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = WireframePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            camera: camera_from_config(camera_config),
            render_config,
        })
    }

    /// Camera driven by mouse orbit and zoom
    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame from this frame's projected geometry
    pub fn render_frame(
        &mut self,
        buffers: &FrameBuffers,
        color: DisplayColor,
    ) -> Result<(), RenderError> {
        self.pipeline.upload_frame(&self.context.queue, buffers);
        let uniforms = self.uniforms(color, self.context.aspect_ratio());
        self.pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        let output = self
            .context
            .surface
            .get_current_texture()
            .map_err(RenderError::from)?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, clear_color(self.render_config.background_color));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn uniforms(&self, color: DisplayColor, aspect: f32) -> WireframeUniforms {
        WireframeUniforms {
            view_matrix: self.camera.view_matrix(),
            projection_matrix: self.camera.projection_matrix(aspect),
            color: color.to_linear_rgba(1.0),
            point_size: self.render_config.point_size,
            line_opacity: self.render_config.line_opacity,
            _padding: [0.0; 2],
        }
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn camera_from_config(config: &CameraConfig) -> ViewCamera {
    ViewCamera {
        eye: config.position,
        target: config.target,
        fov_y: config.fov,
        near: config.near,
        far: config.far,
        min_distance: config.min_distance,
        max_distance: config.max_distance,
        ..ViewCamera::default()
    }
}

fn clear_color(color: DisplayColor) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear_rgba(1.0);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
