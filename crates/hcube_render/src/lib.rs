//! HCube Rendering Library
//!
//! This crate provides the wgpu-based line renderer that draws projected
//! hypercube edges.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - Fixed 3D camera producing the MVP matrix
//! - [`pipeline::LinePipeline`] - Batched line renderer implementing [`LinePrimitive`]

pub mod context;
pub mod camera;
pub mod pipeline;

// Re-export core types for convenience
pub use hcube_core::{HypercubeEngine, LinePrimitive, Mat4};

pub use camera::Camera;
pub use context::{ContextError, RenderContext};
pub use pipeline::LinePipeline;
