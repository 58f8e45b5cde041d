//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use thiserror::Error;
use winit::{
    event_loop::ActiveEventLoop,
    window::Window,
};
use crate::config::WindowConfig;

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_resizable(config.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(event_loop.create_window(attrs)?);

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Show dimension and current focal distance in the title
    pub fn update_title(&self, dimension: usize, focal_distance: f64) {
        self.window.set_title(&format_title(&self.base_title, dimension, focal_distance));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, dimension: usize, focal_distance: f64) -> String {
    format!("{} - {}D f={:.2}", base, dimension, focal_distance)
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Window creation failed: {0}")]
    CreationFailed(#[from] winit::error::OsError),
}
