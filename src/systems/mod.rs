//! Application systems
//!
//! Window, simulation and rendering are kept apart from main.rs so they can be
//! tested without an event loop.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{FrameState, SimulationSystem};
pub use window::{WindowError, WindowSystem};
