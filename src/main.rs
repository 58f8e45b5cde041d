//! HCube - N-dimensional hypercube viewer
//!
//! Rotates an N-cube in the (2, 3) plane, collapses it to 3D by repeated
//! perspective division and draws its edges as lines.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use hcube::config::AppConfig;
use hcube::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use hcube_core::{HypercubeEngine, HypercubeError};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    engine: HypercubeEngine,
    simulation: SimulationSystem,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, HypercubeError> {
        let engine = config.hypercube.build_engine()?;

        log::info!(
            "Built {}-cube: {} vertices, {} edges",
            engine.dimension(),
            engine.hypercube().vertex_count(),
            engine.hypercube().edge_count()
        );
        if engine.rotation_planes().is_empty() {
            log::info!("No rotation planes; the hypercube stays still");
        }

        let simulation = SimulationSystem::new(&config.hypercube);

        Ok(Self {
            config,
            engine,
            simulation,
            window: None,
            render: None,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            &self.config.camera,
            self.config.window.vsync,
            self.engine.hypercube().edge_count(),
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialize rendering: {}", e);
                event_loop.exit();
                return;
            }
        };

        window.update_title(self.engine.dimension(), self.config.hypercube.focal_distance);
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let frame = self.simulation.update(&mut self.engine);

                if let Some(render) = &mut self.render {
                    match render.render_frame(&mut self.engine, frame.focal_distance) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let (width, height) = render.size();
                            render.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => log::warn!("{}", e),
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.update_title(self.engine.dimension(), frame.focal_distance);
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first so it can set the log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting HCube");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    Ok(())
}
