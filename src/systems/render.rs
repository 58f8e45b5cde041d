//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline and camera transform
//! - Frame rendering

use std::sync::Arc;
use thiserror::Error;
use winit::window::Window;
use hcube_core::{HypercubeEngine, LinePrimitive};
use hcube_render::{Camera, ContextError, LinePipeline, RenderContext};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug, Error)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    #[error("Surface lost")]
    SurfaceLost,
    /// GPU out of memory
    #[error("Out of memory")]
    OutOfMemory,
    /// Other surface error
    #[error("Render error: {0}")]
    Other(String),
    /// GPU setup failed
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    camera: Camera,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `max_segments` sizes the vertex buffer; pass the hypercube's edge count.
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
        max_segments: usize,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut line_pipeline = LinePipeline::new(&context.device, context.config.format, max_segments);
        line_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let camera = camera_config.to_camera();
        line_pipeline.set_color(render_config.line_color);
        line_pipeline.set_transform(camera.view_projection(context.aspect_ratio()));

        let bg = &render_config.background_color;
        let clear_color = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        };

        Ok(Self {
            context,
            line_pipeline,
            camera,
            clear_color,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.line_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );

        // Aspect ratio changed
        let mvp = self.camera.view_projection(self.context.aspect_ratio());
        self.line_pipeline.set_transform(mvp);
    }

    /// Project the hypercube and draw its edges
    pub fn render_frame(
        &mut self,
        engine: &mut HypercubeEngine,
        focal_distance: f64,
    ) -> Result<(), RenderError> {
        self.line_pipeline.begin_frame();
        let drawn = engine.render(focal_distance, &mut self.line_pipeline);
        log::trace!("Recorded {} edge segments", drawn);
        self.line_pipeline.upload(&self.context.queue);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.line_pipeline.render(&mut encoder, &view, self.clear_color);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

impl Drop for RenderSystem {
    fn drop(&mut self) {
        self.line_pipeline.release();
    }
}
