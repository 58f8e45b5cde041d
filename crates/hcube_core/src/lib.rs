//! Core types for HCube
//!
//! This crate ties the hypercube geometry to the outside world:
//! - [`HypercubeEngine`] owns the live vertices, edges and projection buffer
//! - [`LinePrimitive`] is the drawing collaborator the engine renders into
//! - [`for_each_edge`] walks the edge list over projected points

mod engine;
mod edges;
mod line;

pub use engine::HypercubeEngine;
pub use edges::for_each_edge;
pub use line::{LinePrimitive, RecordedSegment, SegmentRecorder};

// Re-export math types for convenience
pub use hcube_math::{Edge, Hypercube, HypercubeError, Mat4, Projection, Projector, RotationPlane};
pub use hcube_math::{MAX_DIMENSION, MIN_DIMENSION};
