//! Rendering pipeline components
//!
//! This module contains the line pipeline that draws projected hypercube
//! edges, plus the CPU-side batch it fills.

pub mod types;
pub mod batch;
pub mod line_pipeline;

// Re-export types
pub use types::{LineVertex, LineUniforms, VERTICES_PER_SEGMENT};
pub use batch::SegmentBatch;

// Re-export pipelines
pub use line_pipeline::LinePipeline;
